//! Platform facilities of the machine the process runs on.
//!
//! Memory comes from `sysinfo`, battery from `starship-battery`, the open
//! identifier from `machine-uid`. On Linux, hardware descriptors, displays
//! and network interfaces are read from sysfs.

mod identity;
#[cfg(target_os = "linux")]
mod sysfs;

use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use sysinfo::{ProcessRefreshKind, ProcessesToUpdate, System};

use crate::config::DeviceInfoConfig;
use crate::error::{PlatformError, PlatformResult};
use crate::model::{NetworkInterfaceKind, OsVersion, ScreenSize};
use crate::platform::{
    BatterySource, DisplaySource, HardwareSource, IdentitySource, NetworkSource, OsSource,
    PackageSource,
};

/// Host implementation of every platform facility
pub struct HostPlatform {
    system: Mutex<System>,
    manifest_path: PathBuf,
}

impl HostPlatform {
    #[must_use]
    pub fn new(manifest_path: impl Into<PathBuf>) -> Self {
        Self {
            system: Mutex::new(System::new()),
            manifest_path: manifest_path.into(),
        }
    }

    #[must_use]
    pub fn from_config(config: &DeviceInfoConfig) -> Self {
        Self::new(config.manifest_path())
    }

    #[must_use]
    pub fn manifest_path(&self) -> &Path {
        &self.manifest_path
    }
}

impl IdentitySource for HostPlatform {
    fn open_identifier(&self) -> PlatformResult<String> {
        identity::open_identifier()
    }
}

impl OsSource for HostPlatform {
    fn os_name(&self) -> String {
        let os = std::env::consts::OS;
        match os {
            "macos" => "macOS",
            "linux" => "Linux",
            "windows" => "Windows",
            "ios" => "iOS",
            "android" => "Android",
            _ => os,
        }
        .to_owned()
    }

    fn os_version(&self) -> PlatformResult<OsVersion> {
        parse_os_version(
            System::os_version().as_deref(),
            System::kernel_version().as_deref(),
        )
    }

    /// Host versions are not phone OS releases; the physical mode always applies.
    fn direct_resolution_min_major(&self) -> u32 {
        0
    }
}

/// Distribution version when it parses, kernel version otherwise.
fn parse_os_version(reported: Option<&str>, kernel: Option<&str>) -> PlatformResult<OsVersion> {
    if let Some(version) = reported.and_then(OsVersion::parse) {
        return Ok(version);
    }
    tracing::debug!(reported, "OS version not numeric, using kernel version");

    let kernel = kernel.ok_or(PlatformError::Unavailable("os version"))?;
    OsVersion::parse(kernel)
        .ok_or_else(|| PlatformError::query("os version", format!("unparseable: {kernel}")))
}

impl HardwareSource for HostPlatform {
    fn manufacturer(&self) -> PlatformResult<String> {
        #[cfg(target_os = "linux")]
        {
            sysfs::dmi_attribute(Path::new(sysfs::DMI_ROOT), "sys_vendor")
        }
        #[cfg(target_os = "macos")]
        {
            Ok("Apple".to_owned())
        }
        #[cfg(not(any(target_os = "linux", target_os = "macos")))]
        {
            Err(PlatformError::Unavailable("manufacturer"))
        }
    }

    fn model(&self) -> PlatformResult<String> {
        #[cfg(target_os = "linux")]
        {
            sysfs::dmi_attribute(Path::new(sysfs::DMI_ROOT), "product_name")
        }
        #[cfg(not(target_os = "linux"))]
        {
            Err(PlatformError::Unavailable("model"))
        }
    }

    fn app_memory_usage(&self) -> PlatformResult<u64> {
        let pid = sysinfo::get_current_pid().map_err(|e| PlatformError::query("process", e))?;
        let mut sys = self.system.lock();
        sys.refresh_processes_specifics(
            ProcessesToUpdate::Some(&[pid]),
            true,
            ProcessRefreshKind::nothing().with_memory(),
        );
        sys.process(pid)
            .map(sysinfo::Process::memory)
            .ok_or_else(|| PlatformError::query("process", format!("pid {pid} not found")))
    }

    fn total_memory(&self) -> PlatformResult<u64> {
        let mut sys = self.system.lock();
        sys.refresh_memory();
        match sys.total_memory() {
            0 => Err(PlatformError::Unavailable("total memory")),
            total => Ok(total),
        }
    }
}

impl BatterySource for HostPlatform {
    fn remaining_charge_percent(&self) -> PlatformResult<u8> {
        use starship_battery::Manager;

        let manager = Manager::new().map_err(|e| PlatformError::query("battery", e.to_string()))?;
        let mut batteries = manager
            .batteries()
            .map_err(|e| PlatformError::query("battery", e.to_string()))?;

        match batteries.next() {
            Some(Ok(battery)) => {
                // state of charge is 0.0-1.0
                let charge = f64::from(battery.state_of_charge().value) * 100.0;
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                let percent = charge.round().clamp(0.0, 100.0) as u8;
                Ok(percent)
            }
            Some(Err(e)) => Err(PlatformError::query("battery", e.to_string())),
            // desktop systems
            None => Err(PlatformError::Unavailable("battery")),
        }
    }
}

impl DisplaySource for HostPlatform {
    fn physical_resolution(&self) -> PlatformResult<Option<ScreenSize>> {
        #[cfg(target_os = "linux")]
        {
            sysfs::connected_display_mode(Path::new(sysfs::DRM_ROOT))
        }
        #[cfg(not(target_os = "linux"))]
        {
            Ok(None)
        }
    }

    fn scale_factor(&self) -> PlatformResult<u32> {
        Err(PlatformError::Unavailable("scale factor"))
    }

    fn content_size(&self) -> PlatformResult<ScreenSize> {
        self.physical_resolution()?
            .ok_or(PlatformError::Unavailable("content size"))
    }
}

impl NetworkSource for HostPlatform {
    fn interface_kind(&self) -> PlatformResult<NetworkInterfaceKind> {
        #[cfg(target_os = "linux")]
        {
            sysfs::host_interface_kind(Path::new(sysfs::NET_ROOT))
        }
        #[cfg(not(target_os = "linux"))]
        {
            Err(PlatformError::Unavailable("network interface"))
        }
    }

    fn cellular_operator(&self) -> PlatformResult<String> {
        // no cellular radio on hosts
        Ok(String::new())
    }
}

impl PackageSource for HostPlatform {
    fn read_manifest(&self) -> PlatformResult<Vec<u8>> {
        Ok(std::fs::read(&self.manifest_path)?)
    }
}

//! Fake platform built from plain values.

use device_info::platform::{
    BatterySource, DisplaySource, HardwareSource, IdentitySource, NetworkSource, OsSource,
    PackageSource,
};
use device_info::{NetworkInterfaceKind, OsVersion, PlatformError, PlatformResult, ScreenSize};

#[derive(Debug, Clone)]
pub struct FakePlatform {
    pub open_id: Option<String>,
    pub os_version: OsVersion,
    pub direct_resolution_min_major: u32,
    pub manufacturer: String,
    pub model: String,
    pub app_memory: u64,
    pub total_memory: u64,
    pub battery: u8,
    pub physical_resolution: Option<ScreenSize>,
    pub scale_factor: u32,
    pub content_size: ScreenSize,
    pub interface: NetworkInterfaceKind,
    pub carrier: String,
    pub manifest: Option<Vec<u8>>,
}

impl Default for FakePlatform {
    /// A Lumia 920 on Windows Phone 8, portrait, on Wi-Fi.
    fn default() -> Self {
        Self {
            open_id: Some("open-udid-0001".to_owned()),
            os_version: OsVersion::new(8, 0).with_build(10521),
            direct_resolution_min_major: 8,
            manufacturer: "NOKIA".to_owned(),
            model: "RM-821_eu_euro1_342".to_owned(),
            app_memory: 12 * 1024 * 1024,
            total_memory: 1024 * 1024 * 1024,
            battery: 87,
            physical_resolution: Some(ScreenSize::new(768.0, 1280.0)),
            scale_factor: 160,
            content_size: ScreenSize::new(480.0, 800.0),
            interface: NetworkInterfaceKind::Wireless80211,
            carrier: "Vodafone".to_owned(),
            manifest: Some(br#"<Deployment><App Version="1.2.3.0"/></Deployment>"#.to_vec()),
        }
    }
}

impl IdentitySource for FakePlatform {
    fn open_identifier(&self) -> PlatformResult<String> {
        self.open_id
            .clone()
            .ok_or_else(|| PlatformError::query("identity", "no open identifier"))
    }
}

impl OsSource for FakePlatform {
    fn os_name(&self) -> String {
        "Windows Phone".to_owned()
    }

    fn os_version(&self) -> PlatformResult<OsVersion> {
        Ok(self.os_version)
    }

    fn direct_resolution_min_major(&self) -> u32 {
        self.direct_resolution_min_major
    }
}

impl HardwareSource for FakePlatform {
    fn manufacturer(&self) -> PlatformResult<String> {
        Ok(self.manufacturer.clone())
    }

    fn model(&self) -> PlatformResult<String> {
        Ok(self.model.clone())
    }

    fn app_memory_usage(&self) -> PlatformResult<u64> {
        Ok(self.app_memory)
    }

    fn total_memory(&self) -> PlatformResult<u64> {
        Ok(self.total_memory)
    }
}

impl BatterySource for FakePlatform {
    fn remaining_charge_percent(&self) -> PlatformResult<u8> {
        Ok(self.battery)
    }
}

impl DisplaySource for FakePlatform {
    fn physical_resolution(&self) -> PlatformResult<Option<ScreenSize>> {
        Ok(self.physical_resolution)
    }

    fn scale_factor(&self) -> PlatformResult<u32> {
        Ok(self.scale_factor)
    }

    fn content_size(&self) -> PlatformResult<ScreenSize> {
        Ok(self.content_size)
    }
}

impl NetworkSource for FakePlatform {
    fn interface_kind(&self) -> PlatformResult<NetworkInterfaceKind> {
        Ok(self.interface)
    }

    fn cellular_operator(&self) -> PlatformResult<String> {
        Ok(self.carrier.clone())
    }
}

impl PackageSource for FakePlatform {
    fn read_manifest(&self) -> PlatformResult<Vec<u8>> {
        self.manifest.clone().ok_or_else(|| {
            PlatformError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "WMAppManifest.xml",
            ))
        })
    }
}

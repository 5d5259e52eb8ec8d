//! Capability interfaces for the platform facilities the provider reads.
//!
//! Each facility is a small trait so a target platform can implement them
//! independently and tests can fake them from plain values. `Platform` bundles
//! all of them and is implemented automatically.

use crate::error::PlatformResult;
use crate::model::{NetworkInterfaceKind, OsVersion, ScreenSize};
use crate::resolution::DIRECT_RESOLUTION_MIN_MAJOR;

/// Device identity service.
pub trait IdentitySource {
    /// Pseudo-anonymous device-level identifier.
    fn open_identifier(&self) -> PlatformResult<String>;
}

/// Operating system facility.
pub trait OsSource {
    /// Display name of the platform. Constant for a given implementation.
    fn os_name(&self) -> String;

    fn os_version(&self) -> PlatformResult<OsVersion>;

    /// Lowest OS major version whose display reports the physical resolution.
    /// Older versions get the fixed legacy resolution.
    fn direct_resolution_min_major(&self) -> u32 {
        DIRECT_RESOLUTION_MIN_MAJOR
    }
}

/// Hardware and process status facility.
pub trait HardwareSource {
    fn manufacturer(&self) -> PlatformResult<String>;

    /// Raw model code as reported by the hardware, before canonicalization.
    fn model(&self) -> PlatformResult<String>;

    /// Bytes currently used by this process.
    fn app_memory_usage(&self) -> PlatformResult<u64>;

    /// Bytes of memory installed on the device.
    fn total_memory(&self) -> PlatformResult<u64>;
}

/// Battery facility.
pub trait BatterySource {
    /// Remaining charge, 0 to 100.
    fn remaining_charge_percent(&self) -> PlatformResult<u8>;
}

/// Display and viewport facility.
pub trait DisplaySource {
    /// Physical screen resolution, if the platform exposes it directly.
    fn physical_resolution(&self) -> PlatformResult<Option<ScreenSize>>;

    /// Display scale factor in percent (100, 150, 160, ...).
    fn scale_factor(&self) -> PlatformResult<u32>;

    /// Current content (viewport) dimensions.
    fn content_size(&self) -> PlatformResult<ScreenSize>;
}

/// Network information facility.
pub trait NetworkSource {
    fn interface_kind(&self) -> PlatformResult<NetworkInterfaceKind>;

    /// Cellular operator name, empty when there is no cellular radio.
    fn cellular_operator(&self) -> PlatformResult<String>;
}

/// Application package (file system) facility.
pub trait PackageSource {
    /// Raw contents of the application manifest at the package root.
    fn read_manifest(&self) -> PlatformResult<Vec<u8>>;
}

/// Every facility the provider needs.
pub trait Platform:
    IdentitySource
    + OsSource
    + HardwareSource
    + BatterySource
    + DisplaySource
    + NetworkSource
    + PackageSource
    + Send
    + Sync
{
}

impl<T> Platform for T where
    T: IdentitySource
        + OsSource
        + HardwareSource
        + BatterySource
        + DisplaySource
        + NetworkSource
        + PackageSource
        + Send
        + Sync
{
}

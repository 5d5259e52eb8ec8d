use clap::{Args, ValueEnum};
use device_info::{DeviceInfoConfig, DeviceInfoProvider};

use crate::common;

#[derive(Args)]
pub struct FieldArgs {
    #[arg(value_enum)]
    name: Field,
}

#[derive(Clone, Copy, ValueEnum)]
enum Field {
    DeviceId,
    OsName,
    OsVersion,
    Manufacturer,
    DeviceModel,
    AppVersion,
    Resolution,
    Carrier,
    CurrentMemoryUsage,
    TotalMemory,
    BatteryLevel,
    Orientation,
    Online,
}

impl Field {
    fn read(self, provider: &DeviceInfoProvider) -> String {
        match self {
            Self::DeviceId => provider.device_id(),
            Self::OsName => provider.os_name(),
            Self::OsVersion => provider.os_version(),
            Self::Manufacturer => provider.manufacturer(),
            Self::DeviceModel => provider.device_model(),
            Self::AppVersion => provider.app_version(),
            Self::Resolution => provider.resolution(),
            Self::Carrier => provider.carrier(),
            Self::CurrentMemoryUsage => provider.current_memory_usage().to_string(),
            Self::TotalMemory => provider.total_memory().to_string(),
            Self::BatteryLevel => provider.battery_level().to_string(),
            Self::Orientation => provider.orientation(),
            Self::Online => provider.is_online().to_string(),
        }
    }
}

impl FieldArgs {
    pub fn run(&self, config: &DeviceInfoConfig) -> anyhow::Result<()> {
        let provider = common::provider(config);
        println!("{}", self.name.read(&provider));
        Ok(())
    }
}

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use device_info::{DeviceInfoConfig, DeviceInfoProvider};
use tracing_subscriber::EnvFilter;

#[derive(Args)]
pub struct CommonArgs {
    /// Path to configuration file (YAML)
    #[arg(short = 'c', long, global = true)]
    config: Option<PathBuf>,

    /// Device identifier override (takes precedence over config)
    #[arg(long, global = true)]
    pub device_id: Option<String>,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

impl CommonArgs {
    /// Layered config: defaults -> YAML (if provided) -> env (`DEVICE_INFO__*`) -> CLI overrides
    pub fn load_config(&self) -> anyhow::Result<DeviceInfoConfig> {
        let mut config = DeviceInfoConfig::load(self.config.as_deref())
            .context("failed to load device info configuration")?;
        if let Some(id) = &self.device_id {
            config.device_id = Some(id.clone());
        }
        Ok(config)
    }
}

pub fn provider(config: &DeviceInfoConfig) -> DeviceInfoProvider {
    DeviceInfoProvider::from_config(config)
}

/// Logs go to stderr so stdout stays machine-readable. `RUST_LOG` wins over `-v`.
pub fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

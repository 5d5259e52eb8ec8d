use clap::Args;
use device_info::DeviceInfoConfig;

use crate::common;

#[derive(Args, Default)]
pub struct SnapshotArgs {
    /// Pretty-print the JSON output
    #[arg(short, long)]
    pretty: bool,
}

impl SnapshotArgs {
    pub fn run(&self, config: &DeviceInfoConfig) -> anyhow::Result<()> {
        let snapshot = common::provider(config).snapshot();
        tracing::info!(collected_at = %snapshot.collected_at, "Collected device snapshot");
        println!("{}", snapshot.to_json(self.pretty)?);
        Ok(())
    }
}

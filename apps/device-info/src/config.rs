use device_info::DeviceInfoConfig;

/// Print the effective configuration as JSON.
pub fn print(config: &DeviceInfoConfig) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(())
}

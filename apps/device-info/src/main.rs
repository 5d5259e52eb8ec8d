use clap::{Parser, Subcommand};

mod common;
mod config;
mod field;
mod snapshot;

/// Device info - print device and environment metadata
#[derive(Parser)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(name = "device-info")]
struct Cli {
    #[command(flatten)]
    common_args: common::CommonArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every field as JSON (default)
    Snapshot(snapshot::SnapshotArgs),
    /// Print a single field
    Field(field::FieldArgs),
    /// Print the effective configuration and exit
    Config,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    common::init_logging(cli.common_args.verbose);

    let config = cli.common_args.load_config()?;

    match cli.command {
        None => snapshot::SnapshotArgs::default().run(&config),
        Some(Commands::Snapshot(snapshot)) => snapshot.run(&config),
        Some(Commands::Field(field)) => field.run(&config),
        Some(Commands::Config) => config::print(&config),
    }
}

//! affixer command-line entry point

use affixer_cli::commands::Commands;
use clap::Parser;

/// Split words into prefix, root and suffix using affix lexicons
#[derive(Debug, Parser)]
#[command(name = "affixer", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}

//! textsplit command-line entry point

use anyhow::Result;
use clap::Parser;
use textsplit_cli::commands::Commands;

/// Split documents into bounded, optionally overlapping chunks
#[derive(Debug, Parser)]
#[command(name = "textsplit", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}

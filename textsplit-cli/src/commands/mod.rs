//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;
use textsplit_engine::SplitUnit;

use crate::output::OutputFormat;

pub mod generate_config;
pub mod split;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Split documents into chunks
    Split(split::SplitArgs),

    /// Write a commented configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// Check a configuration file
    Validate(validate::ValidateArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ListCommands {
    /// List units that can be counted per chunk
    Units,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Split(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::List { subcommand } => {
                print!("{}", subcommand.render());
                Ok(())
            }
        }
    }
}

impl ListCommands {
    /// Listing printed for this subcommand
    pub fn render(&self) -> String {
        let mut out = String::new();
        match self {
            ListCommands::Units => {
                out.push_str("Available units:\n");
                for unit in SplitUnit::ALL {
                    out.push_str(&format!("  {:<10} {}\n", unit.name(), unit_description(unit)));
                }
            }
            ListCommands::Formats => {
                out.push_str("Available output formats:\n");
                for format in OutputFormat::ALL {
                    out.push_str(&format!("  {:<10} {}\n", format.name(), format.description()));
                }
            }
        }
        out
    }
}

fn unit_description(unit: SplitUnit) -> &'static str {
    match unit {
        SplitUnit::Paragraph => "Blank-line separated paragraphs",
        SplitUnit::Sentence => "Sentences ending in . ! ? or their full-width forms",
        SplitUnit::Line => "Newline-terminated lines",
        SplitUnit::Word => "Whitespace-delimited words",
        SplitUnit::Pattern => "Matches of --pattern REGEX",
    }
}

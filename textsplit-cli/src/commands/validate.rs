//! Validate command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::config::CliConfig;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the configuration file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating configuration: {}", self.config.display());

        let loaded = CliConfig::from_file(&self.config)
            .and_then(|config| config.validate().map(|()| config));
        match loaded {
            Ok(config) => {
                let splitting = &config.splitting;
                println!("✓ Configuration is valid!");
                println!("  Unit: {}", splitting.unit.name());
                println!("  Max units per chunk: {}", splitting.max_units_per_chunk);
                if let Some(pattern) = &splitting.pattern {
                    println!("  Pattern: {pattern}");
                }
                println!("  Overlap: {}%", splitting.overlap_percent);
                println!("  Trim whitespace: {}", splitting.trim_whitespace);
                println!("  Output format: {}", config.output.format.name());
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e:#}");
                Err(anyhow::anyhow!("Validation failed: {e:#}"))
            }
        }
    }
}

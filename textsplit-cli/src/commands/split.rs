//! Split command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use textsplit_engine::{FileDocument, SplitUnit, Splitter, SplitterConfig};

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{create_formatter, OutputFormat, OutputFormatter};
use crate::progress::ProgressReporter;

/// Arguments for the split command
#[derive(Debug, Args)]
pub struct SplitArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format [default: text]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Unit counted per chunk [default: paragraph]
    #[arg(short, long, value_enum)]
    pub unit: Option<UnitArg>,

    /// Regular expression whose matches start a new unit; overrides --unit
    #[arg(long, value_name = "REGEX")]
    pub pattern: Option<String>,

    /// Maximum number of units per chunk [default: 4]
    #[arg(short = 'n', long = "max-units", value_name = "N")]
    pub max_units: Option<usize>,

    /// Percentage of each chunk re-included from the previous one
    #[arg(long, value_name = "PCT")]
    pub overlap: Option<f32>,

    /// Trim leading and trailing whitespace from every chunk
    #[arg(short, long)]
    pub trim: bool,

    /// Split input files in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "TEXTSPLIT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Built-in units selectable on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum UnitArg {
    /// Blank-line separated paragraphs
    Paragraph,
    /// Sentences
    Sentence,
    /// Lines
    Line,
    /// Whitespace-delimited words
    Word,
}

impl From<UnitArg> for SplitUnit {
    fn from(unit: UnitArg) -> Self {
        match unit {
            UnitArg::Paragraph => SplitUnit::Paragraph,
            UnitArg::Sentence => SplitUnit::Sentence,
            UnitArg::Line => SplitUnit::Line,
            UnitArg::Word => SplitUnit::Word,
        }
    }
}

impl SplitArgs {
    /// Execute the split command
    pub fn execute(&self) -> Result<()> {
        self.init_logging()?;

        log::info!("Starting document splitting");
        log::debug!("Arguments: {:?}", self);

        let config = match &self.config {
            Some(path) => CliConfig::from_file(path)?,
            None => CliConfig::default(),
        };
        let splitting = self.splitter_config(config.splitting.clone());
        let splitter = Splitter::with_config(&splitting)
            .map_err(|e| CliError::ConfigError(e.to_string()))?;

        let files = resolve_patterns(&self.input)?;
        log::info!("Splitting {} files", files.len());

        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(
                File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?,
            )),
            None => Box::new(io::stdout()),
        };
        let format = self.format.unwrap_or(config.output.format);
        let mut formatter = create_formatter(format, writer, &config.output);

        let mut progress = ProgressReporter::new(self.quiet || files.len() < 2);
        progress.init_files(files.len() as u64);

        if self.parallel {
            self.split_parallel(&splitter, &files, formatter.as_mut(), &progress)?;
        } else {
            self.split_sequential(&splitter, &files, formatter.as_mut(), &progress)?;
        }

        formatter.finish()?;
        progress.finish();
        log::info!("Splitting complete");

        Ok(())
    }

    /// Apply command-line overrides on top of the configuration file
    pub fn splitter_config(&self, mut config: SplitterConfig) -> SplitterConfig {
        if let Some(pattern) = &self.pattern {
            config.unit = SplitUnit::Pattern;
            config.pattern = Some(pattern.clone());
        } else if let Some(unit) = self.unit {
            config.unit = unit.into();
        }
        if let Some(max_units) = self.max_units {
            config.max_units_per_chunk = max_units;
        }
        if let Some(overlap) = self.overlap {
            config.overlap_percent = overlap;
        }
        if self.trim {
            config.trim_whitespace = true;
        }
        config
    }

    fn split_sequential(
        &self,
        splitter: &Splitter,
        files: &[PathBuf],
        formatter: &mut dyn OutputFormatter,
        progress: &ProgressReporter,
    ) -> Result<()> {
        for path in files {
            let source = path.display().to_string();
            if let Ok(size) = FileReader::file_size(path) {
                log::debug!("Splitting {} ({} bytes)", source, size);
            }

            let chunks = splitter
                .split_document(&FileDocument::new(path))
                .map_err(|e| split_failed(path, e))?;
            for chunk in chunks {
                formatter.format_chunk(&source, &chunk)?;
            }
            progress.file_completed(&source);
        }
        Ok(())
    }

    fn split_parallel(
        &self,
        splitter: &Splitter,
        files: &[PathBuf],
        formatter: &mut dyn OutputFormatter,
        progress: &ProgressReporter,
    ) -> Result<()> {
        let documents: Vec<FileDocument> = files.iter().map(FileDocument::new).collect();
        let results = splitter.split_documents(&documents);

        for (path, result) in files.iter().zip(results) {
            let source = path.display().to_string();
            let chunks = result.map_err(|e| split_failed(path, e))?;
            for chunk in &chunks {
                formatter.format_chunk(&source, chunk)?;
            }
            progress.file_completed(&source);
        }
        Ok(())
    }

    /// Initialize logging based on verbosity level
    ///
    /// When the command runs in-process after another one (as in unit tests)
    /// a logger is already installed; that logger is kept.
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .try_init()
                .ok();
        }

        Ok(())
    }
}

fn split_failed(path: &Path, err: textsplit_engine::SplitError) -> CliError {
    CliError::SplitFailed {
        path: path.display().to_string(),
        message: err.to_string(),
    }
}

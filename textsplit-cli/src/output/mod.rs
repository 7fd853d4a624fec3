//! Output formatting for chunks

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;
use textsplit_engine::Chunk;

use crate::config::OutputConfig;

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Sink for the chunks of one or more documents
pub trait OutputFormatter: Send + Sync {
    /// Write one chunk of the document at `source`
    fn format_chunk(&mut self, source: &str, chunk: &Chunk) -> Result<()>;

    /// Flush everything that is still buffered
    fn finish(&mut self) -> Result<()>;
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Chunk contents separated by a configurable separator
    #[default]
    Text,
    /// JSON array of chunks with their offsets
    Json,
    /// Markdown document with one section per chunk
    Markdown,
}

impl OutputFormat {
    /// All formats, in display order
    pub const ALL: [OutputFormat; 3] = [OutputFormat::Text, OutputFormat::Json, OutputFormat::Markdown];

    /// Name used on the command line and in configuration files
    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
        }
    }

    /// One-line description
    pub fn description(&self) -> &'static str {
        match self {
            OutputFormat::Text => "Chunk contents separated by a configurable separator",
            OutputFormat::Json => "JSON array of chunks with source, index and offsets",
            OutputFormat::Markdown => "Markdown document with one section per chunk",
        }
    }
}

/// Build the formatter for `format` writing to `writer`
pub fn create_formatter(
    format: OutputFormat,
    writer: Box<dyn Write + Send + Sync>,
    config: &OutputConfig,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer, config.separator.clone())),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, config.pretty_json)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
    }
}

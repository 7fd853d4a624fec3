//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;
use textsplit_engine::Chunk;

/// JSON formatter - outputs chunks as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    chunks: Vec<ChunkData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ChunkData {
    /// File the chunk was taken from
    pub source: String,
    /// Position of the chunk within its document
    pub index: usize,
    /// Start character offset, inclusive
    pub start: usize,
    /// End character offset, exclusive
    pub end: usize,
    /// Chunk contents
    pub text: String,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            chunks: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_chunk(&mut self, source: &str, chunk: &Chunk) -> Result<()> {
        let split_point = chunk.split_point();
        self.chunks.push(ChunkData {
            source: source.to_string(),
            index: chunk.index(),
            start: split_point.start(),
            end: split_point.end(),
            text: chunk.contents().to_string(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.chunks)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.chunks)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

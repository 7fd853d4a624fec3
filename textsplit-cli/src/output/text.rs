//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;
use textsplit_engine::Chunk;

/// Plain text formatter - writes each chunk followed by a separator
pub struct TextFormatter<W: Write> {
    writer: W,
    separator: String,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W, separator: impl Into<String>) -> Self {
        Self {
            writer,
            separator: separator.into(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_chunk(&mut self, _source: &str, chunk: &Chunk) -> Result<()> {
        write!(self.writer, "{}{}", chunk.contents(), self.separator)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use textsplit_engine::SplitPoint;

    #[test]
    fn test_chunks_with_separator() {
        let mut formatter = TextFormatter::new(Vec::new(), "\n--\n");
        formatter
            .format_chunk("a.md", &Chunk::new(0, SplitPoint::new(0, 5), "first"))
            .unwrap();
        formatter
            .format_chunk("a.md", &Chunk::new(1, SplitPoint::new(5, 11), "second"))
            .unwrap();
        formatter.finish().unwrap();

        assert_eq!(String::from_utf8(formatter.writer).unwrap(), "first\n--\nsecond\n--\n");
    }
}

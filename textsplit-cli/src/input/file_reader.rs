//! File reading utilities

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Small helpers around whole-file access
///
/// Documents themselves are streamed through
/// [`FileDocument`](textsplit_engine::FileDocument); this is for
/// configuration files and metadata.
pub struct FileReader;

impl FileReader {
    /// Read a UTF-8 file into memory
    pub fn read_text(path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Size of a file in bytes
    pub fn file_size(path: &Path) -> Result<u64> {
        let metadata = fs::metadata(path)
            .with_context(|| format!("Failed to get metadata for: {}", path.display()))?;

        Ok(metadata.len())
    }
}

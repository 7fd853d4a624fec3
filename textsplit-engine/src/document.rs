//! Document sources
//!
//! A document is a read-only, finite, ordered sequence of text fragments
//! (pages, paragraphs, file blocks...) whose concatenation is the text that
//! gets split. Sources may be drained any number of times.

use crate::error::DocumentError;
use std::borrow::Cow;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Lazy sequence of fragments produced by a [`Document`]
pub type Fragments<'a> = Box<dyn Iterator<Item = Result<Cow<'a, str>, DocumentError>> + 'a>;

/// Synchronous document source
pub trait Document {
    /// Fragments of the document, in order
    ///
    /// An `Err` item ends the sequence; the pipeline aborts on it.
    fn fragments(&self) -> Fragments<'_>;
}

/// Asynchronous document source
///
/// The pipeline awaits fragments one at a time and starts splitting only
/// once the stream is exhausted.
#[cfg(feature = "async")]
pub trait AsyncDocument: Send + Sync {
    /// Stream of the document's fragments, in order
    fn fragment_stream(&self) -> futures::stream::BoxStream<'_, Result<String, DocumentError>>;
}

/// A document held in a single string
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextDocument {
    text: String,
}

impl TextDocument {
    /// Wrap `text`
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The document text
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl From<String> for TextDocument {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl From<&str> for TextDocument {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl Document for TextDocument {
    fn fragments(&self) -> Fragments<'_> {
        Box::new(std::iter::once(Ok(Cow::Borrowed(self.text.as_str()))))
    }
}

#[cfg(feature = "async")]
impl AsyncDocument for TextDocument {
    fn fragment_stream(&self) -> futures::stream::BoxStream<'_, Result<String, DocumentError>> {
        use futures::StreamExt;
        futures::stream::iter(std::iter::once(Ok(self.text.clone()))).boxed()
    }
}

/// A document made of ordered fragments, e.g. the pages of an extracted PDF
///
/// Fragments are concatenated as-is; no separator is inserted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FragmentedDocument {
    fragments: Vec<String>,
}

impl FragmentedDocument {
    /// Build from fragments
    pub fn new<I, S>(fragments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fragments: fragments.into_iter().map(Into::into).collect(),
        }
    }

    /// Append a fragment
    pub fn push(&mut self, fragment: impl Into<String>) {
        self.fragments.push(fragment.into());
    }

    /// Number of fragments
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// Whether there are no fragments
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}

impl Document for FragmentedDocument {
    fn fragments(&self) -> Fragments<'_> {
        Box::new(
            self.fragments
                .iter()
                .map(|fragment| Ok(Cow::Borrowed(fragment.as_str()))),
        )
    }
}

#[cfg(feature = "async")]
impl AsyncDocument for FragmentedDocument {
    fn fragment_stream(&self) -> futures::stream::BoxStream<'_, Result<String, DocumentError>> {
        use futures::StreamExt;
        futures::stream::iter(self.fragments.iter().cloned().map(Ok)).boxed()
    }
}

/// Default block size for [`FileDocument`] reads (64KB)
pub const DEFAULT_BLOCK_SIZE: usize = 64 * 1024;

/// Smallest block that always holds one complete UTF-8 character
const MIN_BLOCK_SIZE: usize = 4;

/// A UTF-8 text file read in fixed-size blocks
///
/// Multi-byte characters straddling a block edge are carried into the next
/// fragment, so every fragment is valid UTF-8.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDocument {
    path: PathBuf,
    block_size: usize,
}

impl FileDocument {
    /// Read `path` in blocks of [`DEFAULT_BLOCK_SIZE`] bytes
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            block_size: DEFAULT_BLOCK_SIZE,
        }
    }

    /// Use a different block size (at least 4 bytes)
    pub fn with_block_size(mut self, block_size: usize) -> Self {
        self.block_size = block_size.max(MIN_BLOCK_SIZE);
        self
    }

    /// Path of the file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Document for FileDocument {
    fn fragments(&self) -> Fragments<'_> {
        match File::open(&self.path) {
            Ok(file) => Box::new(
                FileFragments {
                    file: Some(file),
                    carry: Vec::new(),
                    block_size: self.block_size,
                }
                .map(|fragment| fragment.map(Cow::<str>::Owned)),
            ),
            Err(err) => Box::new(std::iter::once(Err(DocumentError::Io(err)))),
        }
    }
}

struct FileFragments {
    file: Option<File>,
    carry: Vec<u8>,
    block_size: usize,
}

impl Iterator for FileFragments {
    type Item = Result<String, DocumentError>;

    fn next(&mut self) -> Option<Self::Item> {
        let file = self.file.as_mut()?;

        let mut buf = std::mem::take(&mut self.carry);
        let filled = buf.len();
        buf.resize(filled + self.block_size, 0);
        let read = match file.read(&mut buf[filled..]) {
            Ok(read) => read,
            Err(err) => {
                self.file = None;
                return Some(Err(err.into()));
            }
        };
        buf.truncate(filled + read);
        tracing::trace!(bytes = read, carried = filled, "read file block");

        if read == 0 {
            self.file = None;
            if buf.is_empty() {
                return None;
            }
            // Bytes left over at EOF are an incomplete character
            return Some(String::from_utf8(buf).map_err(DocumentError::from));
        }

        match String::from_utf8(buf) {
            Ok(text) => Some(Ok(text)),
            Err(err) if err.utf8_error().error_len().is_none() => {
                let valid = err.utf8_error().valid_up_to();
                let mut bytes = err.into_bytes();
                self.carry = bytes.split_off(valid);
                Some(String::from_utf8(bytes).map_err(DocumentError::from))
            }
            Err(err) => {
                self.file = None;
                Some(Err(err.into()))
            }
        }
    }
}

//! Chunk assembly
//!
//! Slices the document text over each final window and emits [`Chunk`]s
//! lazily, in window order.

use crate::types::{Chunk, SplitPoint};

/// Maps character offsets to byte offsets
///
/// ASCII text maps offsets one to one and allocates nothing.
#[derive(Debug, Clone)]
pub struct CharIndex {
    byte_offsets: Option<Vec<usize>>,
    byte_len: usize,
    char_len: usize,
}

impl CharIndex {
    /// Index `text`
    pub fn new(text: &str) -> Self {
        if text.is_ascii() {
            return Self {
                byte_offsets: None,
                byte_len: text.len(),
                char_len: text.len(),
            };
        }

        let byte_offsets: Vec<usize> = text.char_indices().map(|(pos, _)| pos).collect();
        Self {
            char_len: byte_offsets.len(),
            byte_offsets: Some(byte_offsets),
            byte_len: text.len(),
        }
    }

    /// Number of characters in the indexed text
    pub fn char_len(&self) -> usize {
        self.char_len
    }

    /// Byte offset of the character at `char_offset`
    ///
    /// Offsets at or past the end map to the text's byte length.
    pub fn byte_offset(&self, char_offset: usize) -> usize {
        match &self.byte_offsets {
            None => char_offset.min(self.byte_len),
            Some(offsets) => offsets.get(char_offset).copied().unwrap_or(self.byte_len),
        }
    }
}

/// Lazy, one-shot sequence of chunks over a text and its final windows
#[derive(Debug)]
pub struct ChunkAssembler<T> {
    text: T,
    index: CharIndex,
    windows: std::vec::IntoIter<SplitPoint>,
    next_index: usize,
    trim_whitespace: bool,
}

impl<T: AsRef<str>> ChunkAssembler<T> {
    /// Assemble chunks of `text` over `windows`
    pub fn new(text: T, windows: Vec<SplitPoint>, trim_whitespace: bool) -> Self {
        let index = CharIndex::new(text.as_ref());
        Self::with_index(text, index, windows, trim_whitespace)
    }

    /// Assemble with a character index that was already built for `text`
    pub fn with_index(
        text: T,
        index: CharIndex,
        windows: Vec<SplitPoint>,
        trim_whitespace: bool,
    ) -> Self {
        Self {
            text,
            index,
            windows: windows.into_iter(),
            next_index: 0,
            trim_whitespace,
        }
    }

    fn slice(&self, window: SplitPoint) -> &str {
        let start = self.index.byte_offset(window.start());
        let end = self.index.byte_offset(window.end());
        let slice = &self.text.as_ref()[start..end];
        if self.trim_whitespace {
            slice.trim()
        } else {
            slice
        }
    }
}

impl<T: AsRef<str>> Iterator for ChunkAssembler<T> {
    type Item = Chunk;

    fn next(&mut self) -> Option<Chunk> {
        let window = self.windows.next()?;
        let chunk = Chunk::new(self.next_index, window, self.slice(window));
        self.next_index += 1;
        Some(chunk)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.windows.size_hint()
    }
}

impl<T: AsRef<str>> ExactSizeIterator for ChunkAssembler<T> {}

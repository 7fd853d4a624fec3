//! Window and chunk value objects

use std::fmt;

/// Half-open window `[start, end)` over the document's character offsets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SplitPoint {
    start: usize,
    end: usize,
}

impl SplitPoint {
    /// Create a new window
    ///
    /// `start` must not exceed `end`. Only the window of an empty document
    /// has `start == end`.
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "window start {start} past end {end}");
        Self { start, end }
    }

    /// First character offset covered by the window
    pub fn start(&self) -> usize {
        self.start
    }

    /// Offset one past the last covered character
    pub fn end(&self) -> usize {
        self.end
    }

    /// Number of characters covered
    pub fn span(&self) -> usize {
        self.end - self.start
    }

    /// Whether the window covers no characters
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Same window with its start moved to `start`; the end is kept
    pub fn with_start(&self, start: usize) -> Self {
        Self::new(start, self.end)
    }
}

impl fmt::Display for SplitPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

impl From<(usize, usize)> for SplitPoint {
    fn from((start, end): (usize, usize)) -> Self {
        Self::new(start, end)
    }
}

/// A materialized chunk of document text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    index: usize,
    split_point: SplitPoint,
    contents: String,
}

impl Chunk {
    /// Create a chunk
    pub fn new(index: usize, split_point: SplitPoint, contents: impl Into<String>) -> Self {
        Self {
            index,
            split_point,
            contents: contents.into(),
        }
    }

    /// Position of the chunk in the output sequence
    pub fn index(&self) -> usize {
        self.index
    }

    /// The (pre-trim) window this chunk was cut from
    pub fn split_point(&self) -> SplitPoint {
        self.split_point
    }

    /// Chunk text, trimmed if the pipeline trims whitespace
    pub fn contents(&self) -> &str {
        &self.contents
    }

    /// Consume the chunk and return its text
    pub fn into_contents(self) -> String {
        self.contents
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_point_accessors() {
        let window = SplitPoint::new(20, 50);
        assert_eq!(window.start(), 20);
        assert_eq!(window.end(), 50);
        assert_eq!(window.span(), 30);
        assert!(!window.is_empty());
        assert_eq!(window.to_string(), "[20, 50)");
    }

    #[test]
    fn test_with_start_keeps_end() {
        let window = SplitPoint::new(20, 50).with_start(17);
        assert_eq!(window, SplitPoint::new(17, 50));
    }

    #[test]
    fn test_split_points_order_by_start() {
        let mut windows = vec![SplitPoint::new(50, 80), SplitPoint::new(0, 20)];
        windows.sort();
        assert_eq!(windows[0].start(), 0);
    }

    #[test]
    fn test_chunk_accessors() {
        let chunk = Chunk::new(2, (5, 9).into(), "text");
        assert_eq!(chunk.index(), 2);
        assert_eq!(chunk.split_point(), SplitPoint::new(5, 9));
        assert_eq!(chunk.contents(), "text");
        assert_eq!(chunk.into_contents(), "text");
    }
}

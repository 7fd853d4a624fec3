//! Boundary detection
//!
//! A [`SplitCondition`] maps a document's text and a budget to the ordered
//! character offsets at which the document is cut. The built-in
//! [`CountSplitCondition`] counts matches reported by a [`MatchFinder`] and
//! cuts after every `budget`-th one.

mod count;
mod matchers;

pub use count::CountSplitCondition;
pub use matchers::{LineMatcher, ParagraphMatcher, PatternMatcher, SentenceMatcher, WordMatcher};

use crate::error::StrategyError;

/// Strategy deciding where a document is cut
///
/// Implementations must be pure: the same text and budget always give the
/// same offsets. Returned offsets are character offsets; the pipeline
/// normalizes them (sort, dedup, drop `0` and the document length).
pub trait SplitCondition: Send + Sync {
    /// Detect boundary offsets in `text` allowing `budget` units per chunk
    fn detect(&self, text: &str, budget: usize) -> Result<Vec<usize>, StrategyError>;
}

impl<F> SplitCondition for F
where
    F: Fn(&str, usize) -> Result<Vec<usize>, StrategyError> + Send + Sync,
{
    fn detect(&self, text: &str, budget: usize) -> Result<Vec<usize>, StrategyError> {
        self(text, budget)
    }
}

/// Finds the character offsets of structural units (paragraph breaks,
/// headers, sentences...) in a text
pub trait MatchFinder: Send + Sync {
    /// Offsets of every match, in increasing order
    fn find_matches(&self, text: &str) -> Result<Vec<usize>, StrategyError>;
}

impl<F> MatchFinder for F
where
    F: Fn(&str) -> Result<Vec<usize>, StrategyError> + Send + Sync,
{
    fn find_matches(&self, text: &str) -> Result<Vec<usize>, StrategyError> {
        self(text)
    }
}

/// Union of several split conditions
///
/// Every member runs with the same budget; the document is cut wherever
/// any member cuts it.
#[derive(Default)]
pub struct AnyOf {
    conditions: Vec<Box<dyn SplitCondition>>,
}

impl AnyOf {
    /// Create an empty union
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a member condition
    pub fn with(mut self, condition: impl SplitCondition + 'static) -> Self {
        self.push(Box::new(condition));
        self
    }

    /// Add a boxed member condition
    pub fn push(&mut self, condition: Box<dyn SplitCondition>) {
        self.conditions.push(condition);
    }

    /// Number of member conditions
    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    /// Whether the union has no members
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }
}

impl std::fmt::Debug for AnyOf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnyOf")
            .field("conditions", &self.conditions.len())
            .finish()
    }
}

impl SplitCondition for AnyOf {
    fn detect(&self, text: &str, budget: usize) -> Result<Vec<usize>, StrategyError> {
        let mut offsets = Vec::new();
        for condition in &self.conditions {
            offsets.extend(condition.detect(text, budget)?);
        }
        offsets.sort_unstable();
        offsets.dedup();
        Ok(offsets)
    }
}

/// Convert increasing byte offsets into character offsets in one pass
pub(crate) fn byte_to_char_offsets(text: &str, byte_offsets: &[usize]) -> Vec<usize> {
    let mut result = Vec::with_capacity(byte_offsets.len());
    let mut targets = byte_offsets.iter().copied().peekable();
    let mut char_count = 0;

    for (byte_pos, _) in text.char_indices() {
        while let Some(&target) = targets.peek() {
            if target > byte_pos {
                break;
            }
            result.push(char_count);
            targets.next();
        }
        char_count += 1;
    }
    result.extend(targets.map(|_| char_count));
    result
}

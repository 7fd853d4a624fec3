//! Configuration types for the engine

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use textsplit_core::{
    CoreError, CountSplitCondition, LineMatcher, ParagraphMatcher, PatternMatcher,
    PercentageOverlap, SentenceMatcher, WordMatcher,
};

use crate::error::{Result, SplitError};

/// Default number of units per chunk
pub const DEFAULT_MAX_UNITS: usize = 4;

/// Structural unit counted by the built-in split condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SplitUnit {
    /// Blank-line separated paragraphs
    #[default]
    Paragraph,
    /// Sentences ending in `.`, `!`, `?` or their full-width forms
    Sentence,
    /// Newline-terminated lines
    Line,
    /// Whitespace-delimited words
    Word,
    /// Matches of a user-supplied regular expression
    Pattern,
}

impl SplitUnit {
    /// All units, in display order
    pub const ALL: [SplitUnit; 5] = [
        SplitUnit::Paragraph,
        SplitUnit::Sentence,
        SplitUnit::Line,
        SplitUnit::Word,
        SplitUnit::Pattern,
    ];

    /// Lowercase name as used in configuration files
    pub fn name(&self) -> &'static str {
        match self {
            SplitUnit::Paragraph => "paragraph",
            SplitUnit::Sentence => "sentence",
            SplitUnit::Line => "line",
            SplitUnit::Word => "word",
            SplitUnit::Pattern => "pattern",
        }
    }
}

/// Splitter configuration
///
/// Plain data that can be loaded from a configuration file and turned into
/// a [`Splitter`](crate::Splitter) with
/// [`Splitter::with_config`](crate::Splitter::with_config).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SplitterConfig {
    /// Maximum number of units per chunk
    pub max_units_per_chunk: usize,
    /// Unit that is counted
    pub unit: SplitUnit,
    /// Regular expression for [`SplitUnit::Pattern`]
    pub pattern: Option<String>,
    /// Share of each chunk's span re-included from its predecessor, in `[0, 100)`
    pub overlap_percent: f32,
    /// Trim leading and trailing whitespace from every chunk
    pub trim_whitespace: bool,
}

impl Default for SplitterConfig {
    fn default() -> Self {
        Self {
            max_units_per_chunk: DEFAULT_MAX_UNITS,
            unit: SplitUnit::Paragraph,
            pattern: None,
            overlap_percent: 0.0,
            trim_whitespace: false,
        }
    }
}

impl SplitterConfig {
    /// At most `n` paragraphs per chunk
    pub fn paragraphs(n: usize) -> Self {
        Self::counting(SplitUnit::Paragraph, n)
    }

    /// At most `n` sentences per chunk
    pub fn sentences(n: usize) -> Self {
        Self::counting(SplitUnit::Sentence, n)
    }

    /// At most `n` lines per chunk
    pub fn lines(n: usize) -> Self {
        Self::counting(SplitUnit::Line, n)
    }

    /// At most `n` words per chunk
    pub fn words(n: usize) -> Self {
        Self::counting(SplitUnit::Word, n)
    }

    /// Cut after every `n`-th match of `pattern`
    pub fn pattern(pattern: impl Into<String>, n: usize) -> Self {
        Self {
            pattern: Some(pattern.into()),
            ..Self::counting(SplitUnit::Pattern, n)
        }
    }

    fn counting(unit: SplitUnit, max_units_per_chunk: usize) -> Self {
        Self {
            max_units_per_chunk,
            unit,
            ..Self::default()
        }
    }

    /// Check every value without building anything
    pub fn validate(&self) -> Result<()> {
        if self.max_units_per_chunk == 0 {
            return Err(CoreError::InvalidBudget {
                budget: self.max_units_per_chunk,
            }
            .into());
        }
        PercentageOverlap::new(self.overlap_percent)?;
        self.split_condition()?;
        Ok(())
    }

    /// Built-in split condition counting this configuration's unit
    pub(crate) fn split_condition(&self) -> Result<CountSplitCondition> {
        let condition = match self.unit {
            SplitUnit::Paragraph => CountSplitCondition::new(ParagraphMatcher),
            SplitUnit::Sentence => CountSplitCondition::new(SentenceMatcher),
            SplitUnit::Line => CountSplitCondition::new(LineMatcher),
            SplitUnit::Word => CountSplitCondition::new(WordMatcher),
            SplitUnit::Pattern => {
                let pattern = self
                    .pattern
                    .as_deref()
                    .ok_or(SplitError::MissingSplitCondition)?;
                CountSplitCondition::new(PatternMatcher::new(pattern)?)
            }
        };
        Ok(condition)
    }
}

//! Splitter facade and builder
//!
//! Drains a document, detects boundaries, builds windows, applies overlap
//! and hands back a lazy sequence of chunks.

use std::sync::Arc;

use textsplit_core::{
    build_windows, validate_overlap, AnyOf, CharIndex, ChunkAssembler, FixedOverlap, NoOverlap,
    OverlapCondition, PercentageOverlap, SplitCondition, SplitPoint,
};

use crate::{
    config::{SplitUnit, SplitterConfig},
    document::{Document, TextDocument},
    error::{Result, SplitError, Stage},
};

#[cfg(feature = "async")]
use crate::document::AsyncDocument;
#[cfg(feature = "parallel")]
use textsplit_core::Chunk;

/// Lazy, one-shot sequence of chunks produced by one split
pub type Chunks = ChunkAssembler<String>;

/// Configured document splitting pipeline
///
/// Cheap to clone and safe to share between threads. Splitting the same
/// document twice yields identical chunks.
///
/// ```rust
/// use textsplit_engine::{Splitter, TextDocument};
///
/// let splitter = Splitter::builder()
///     .max_paragraphs_per_chunk(1)
///     .trim_whitespace(true)
///     .build()
///     .unwrap();
///
/// let chunks: Vec<String> = splitter
///     .split_document(&TextDocument::new("First.\n\nSecond."))
///     .unwrap()
///     .map(|chunk| chunk.into_contents())
///     .collect();
/// assert_eq!(chunks, vec!["First.", "Second."]);
/// ```
#[derive(Clone)]
pub struct Splitter {
    condition: Arc<dyn SplitCondition>,
    overlap: Arc<dyn OverlapCondition>,
    budget: usize,
    trim_whitespace: bool,
    check_overlap: bool,
}

impl std::fmt::Debug for Splitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Splitter")
            .field("budget", &self.budget)
            .field("trim_whitespace", &self.trim_whitespace)
            .field("check_overlap", &self.check_overlap)
            .finish_non_exhaustive()
    }
}

impl Splitter {
    /// Start configuring a splitter
    pub fn builder() -> SplitterBuilder {
        SplitterBuilder::new()
    }

    /// Build a splitter from plain configuration
    pub fn with_config(config: &SplitterConfig) -> Result<Self> {
        SplitterBuilder::from_config(config.clone()).build()
    }

    /// Budget passed to the split condition
    pub fn budget(&self) -> usize {
        self.budget
    }

    /// Whether chunks are trimmed
    pub fn trims_whitespace(&self) -> bool {
        self.trim_whitespace
    }

    /// Split an in-memory string
    pub fn split_text(&self, text: &str) -> Result<Chunks> {
        self.split_document(&TextDocument::new(text))
    }

    /// Drain `document` and split it
    ///
    /// A failing fragment aborts the run before any chunk is produced.
    pub fn split_document<D: Document + ?Sized>(&self, document: &D) -> Result<Chunks> {
        let mut text = String::new();
        for fragment in document.fragments() {
            text.push_str(&fragment?);
        }
        self.split_owned(text)
    }

    /// Await every fragment of `document`, then split it
    ///
    /// Awaiting the next fragment is the only suspension point. Dropping the
    /// future cancels the run before any chunk exists.
    #[cfg(feature = "async")]
    pub async fn split_document_async<D: AsyncDocument + ?Sized>(
        &self,
        document: &D,
    ) -> Result<Chunks> {
        use futures::TryStreamExt;

        let mut stream = document.fragment_stream();
        let mut text = String::new();
        while let Some(fragment) = stream.try_next().await? {
            text.push_str(&fragment);
        }
        self.split_owned(text)
    }

    /// Split several documents on the rayon thread pool
    ///
    /// Results are returned in input order; one failing document does not
    /// affect the others.
    #[cfg(feature = "parallel")]
    pub fn split_documents<D: Document + Sync>(&self, documents: &[D]) -> Vec<Result<Vec<Chunk>>> {
        use rayon::prelude::*;

        tracing::debug!(documents = documents.len(), "splitting documents in parallel");
        documents
            .par_iter()
            .map(|document| -> Result<Vec<Chunk>> { Ok(self.split_document(document)?.collect()) })
            .collect()
    }

    /// Final windows for `text`, without materializing chunks
    pub fn windows(&self, text: &str) -> Result<Vec<SplitPoint>> {
        let len = text.chars().count();
        self.final_windows(text, len)
    }

    fn split_owned(&self, text: String) -> Result<Chunks> {
        let index = CharIndex::new(&text);
        let windows = self.final_windows(&text, index.char_len())?;
        Ok(ChunkAssembler::with_index(
            text,
            index,
            windows,
            self.trim_whitespace,
        ))
    }

    fn final_windows(&self, text: &str, len: usize) -> Result<Vec<SplitPoint>> {
        let boundaries = self
            .condition
            .detect(text, self.budget)
            .map_err(|source| SplitError::strategy(Stage::Detection, source))?;
        let windows = build_windows(&boundaries, len);

        let adjusted = self
            .overlap
            .apply(&windows)
            .map_err(|source| SplitError::strategy(Stage::Overlap, source))?;
        if self.check_overlap {
            validate_overlap(&windows, &adjusted)
                .map_err(|err| SplitError::strategy(Stage::Overlap, Box::new(err)))?;
        }

        tracing::debug!(
            chars = len,
            boundaries = boundaries.len(),
            windows = adjusted.len(),
            "document split"
        );
        Ok(adjusted)
    }
}

/// Fluent configuration of a [`Splitter`]
///
/// Unit setters (`max_paragraphs_per_chunk`...) choose the built-in split
/// condition. Conditions added with
/// [`add_split_condition`](Self::add_split_condition) replace it; several
/// added conditions cut wherever any of them cuts.
///
/// At most one overlap strategy may be configured. The last of
/// [`overlap_chars`](Self::overlap_chars) and
/// [`set_overlap_condition`](Self::set_overlap_condition) wins; either one
/// together with a non-zero [`overlap_percent`](Self::overlap_percent) is a
/// configuration error.
#[derive(Default)]
pub struct SplitterBuilder {
    config: SplitterConfig,
    conditions: Vec<Box<dyn SplitCondition>>,
    overlap: Option<Arc<dyn OverlapCondition>>,
    check_overlap: bool,
}

impl SplitterBuilder {
    /// Create a builder with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration
    pub fn from_config(config: SplitterConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Budget without changing the counted unit
    pub fn max_units_per_chunk(mut self, max: usize) -> Self {
        self.config.max_units_per_chunk = max;
        self
    }

    /// At most `max` paragraphs per chunk
    pub fn max_paragraphs_per_chunk(self, max: usize) -> Self {
        self.unit(SplitUnit::Paragraph, max)
    }

    /// At most `max` sentences per chunk
    pub fn max_sentences_per_chunk(self, max: usize) -> Self {
        self.unit(SplitUnit::Sentence, max)
    }

    /// At most `max` lines per chunk
    pub fn max_lines_per_chunk(self, max: usize) -> Self {
        self.unit(SplitUnit::Line, max)
    }

    /// At most `max` words per chunk
    pub fn max_words_per_chunk(self, max: usize) -> Self {
        self.unit(SplitUnit::Word, max)
    }

    /// Cut after every `max`-th match of `pattern`
    pub fn split_on_pattern(mut self, pattern: impl Into<String>, max: usize) -> Self {
        self.config.pattern = Some(pattern.into());
        self.unit(SplitUnit::Pattern, max)
    }

    fn unit(mut self, unit: SplitUnit, max: usize) -> Self {
        self.config.unit = unit;
        self.config.max_units_per_chunk = max;
        self
    }

    /// Add a custom split condition
    pub fn add_split_condition(mut self, condition: impl SplitCondition + 'static) -> Self {
        self.conditions.push(Box::new(condition));
        self
    }

    /// Re-include `percent` of each chunk's span from its predecessor
    ///
    /// A non-zero percentage cannot be combined with
    /// [`overlap_chars`](Self::overlap_chars) or
    /// [`set_overlap_condition`](Self::set_overlap_condition); `build` rejects it.
    pub fn overlap_percent(mut self, percent: f32) -> Self {
        self.config.overlap_percent = percent;
        self
    }

    /// Re-include a fixed number of characters from each predecessor
    pub fn overlap_chars(mut self, chars: usize) -> Self {
        self.overlap = Some(Arc::new(FixedOverlap::new(chars)));
        self.check_overlap = false;
        self
    }

    /// Use a custom overlap condition; its output is checked on every run
    pub fn set_overlap_condition(mut self, overlap: impl OverlapCondition + 'static) -> Self {
        self.overlap = Some(Arc::new(overlap));
        self.check_overlap = true;
        self
    }

    /// Trim leading and trailing whitespace from every chunk
    pub fn trim_whitespace(mut self, trim: bool) -> Self {
        self.config.trim_whitespace = trim;
        self
    }

    /// Validate the configuration and build the splitter
    pub fn build(self) -> Result<Splitter> {
        let config = self.config;
        if config.max_units_per_chunk == 0 {
            return Err(textsplit_core::CoreError::InvalidBudget {
                budget: config.max_units_per_chunk,
            }
            .into());
        }

        let percentage = PercentageOverlap::new(config.overlap_percent)?;
        let overlap: Arc<dyn OverlapCondition> = match self.overlap {
            Some(_) if config.overlap_percent > 0.0 => {
                return Err(SplitError::ConflictingOverlap);
            }
            Some(custom) => custom,
            None if config.overlap_percent > 0.0 => Arc::new(percentage),
            None => Arc::new(NoOverlap),
        };

        let mut conditions = self.conditions;
        let condition: Arc<dyn SplitCondition> = match conditions.len() {
            0 => Arc::new(config.split_condition()?),
            1 => Arc::from(conditions.remove(0)),
            _ => {
                let mut union = AnyOf::new();
                for condition in conditions {
                    union.push(condition);
                }
                Arc::new(union)
            }
        };

        tracing::debug!(
            budget = config.max_units_per_chunk,
            unit = config.unit.name(),
            overlap_percent = config.overlap_percent,
            trim = config.trim_whitespace,
            "splitter built"
        );

        Ok(Splitter {
            condition,
            overlap,
            budget: config.max_units_per_chunk,
            trim_whitespace: config.trim_whitespace,
            check_overlap: self.check_overlap,
        })
    }
}

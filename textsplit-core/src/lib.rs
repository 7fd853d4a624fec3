//! Deterministic core of the textsplit chunking pipeline
//!
//! This crate holds the pure algorithms that turn a document's text into an
//! ordered sequence of bounded, optionally overlapping chunks:
//!
//! 1. a [`SplitCondition`] detects boundary offsets,
//! 2. the window builder turns them into a gap-free partition of the text,
//! 3. an [`OverlapCondition`] moves window starts earlier to re-include
//!    trailing context of the previous window,
//! 4. the [`ChunkAssembler`] slices the text and emits [`Chunk`]s lazily.
//!
//! All offsets are character (Unicode scalar value) offsets. No I/O happens
//! here; see `textsplit-engine` for document sources and the pipeline facade.
//!
//! # Example
//!
//! ```rust
//! use textsplit_core::{
//!     build_windows, ChunkAssembler, CountSplitCondition, NoOverlap, OverlapCondition,
//!     PatternMatcher, SplitCondition,
//! };
//!
//! let text = "AAA\n#H1\nBBB\n#H2\nCCC";
//! let condition = CountSplitCondition::new(PatternMatcher::new(r"\n#").unwrap());
//!
//! let boundaries = condition.detect(text, 1).unwrap();
//! let windows = build_windows(&boundaries, text.chars().count());
//! let windows = NoOverlap.apply(&windows).unwrap();
//!
//! let chunks: Vec<String> = ChunkAssembler::new(text, windows, true)
//!     .map(|chunk| chunk.contents().to_string())
//!     .collect();
//! assert_eq!(chunks, vec!["AAA", "#H1\nBBB", "#H2\nCCC"]);
//! ```

#![warn(missing_docs)]

pub mod assemble;
pub mod detect;
pub mod error;
pub mod overlap;
pub mod pairs;
pub mod types;
pub mod window;

pub use assemble::{CharIndex, ChunkAssembler};
pub use detect::{
    AnyOf, CountSplitCondition, LineMatcher, MatchFinder, ParagraphMatcher, PatternMatcher,
    SentenceMatcher, SplitCondition, WordMatcher,
};
pub use error::{CoreError, Result, StrategyError};
pub use overlap::{
    validate_overlap, FixedOverlap, NoOverlap, OverlapCondition, PercentageOverlap,
};
pub use pairs::{AdjacentPairs, AdjacentPairsExt};
pub use types::{Chunk, SplitPoint};
pub use window::{build_windows, normalize_boundaries};

//! Document splitting pipeline
//!
//! This crate wires the algorithms of `textsplit-core` to document sources
//! and exposes the [`Splitter`] facade: drain a [`Document`], detect
//! boundaries, build windows, apply overlap and iterate the resulting
//! [`Chunk`]s.
//!
//! ```rust
//! use textsplit_engine::Splitter;
//!
//! let splitter = Splitter::builder()
//!     .split_on_pattern(r"(\r?\n|\r)\s*#+", 1)
//!     .trim_whitespace(true)
//!     .build()
//!     .unwrap();
//!
//! let sections: Vec<String> = splitter
//!     .split_text("intro\n# A\na\n# B\nb")
//!     .unwrap()
//!     .map(|chunk| chunk.into_contents())
//!     .collect();
//! assert_eq!(sections, vec!["intro", "# A\na", "# B\nb"]);
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod document;
pub mod error;
pub mod splitter;

// Re-export key types
pub use config::{SplitUnit, SplitterConfig, DEFAULT_MAX_UNITS};
pub use document::{
    Document, FileDocument, FragmentedDocument, Fragments, TextDocument, DEFAULT_BLOCK_SIZE,
};
pub use error::{DocumentError, Result, SplitError, Stage};
pub use splitter::{Chunks, Splitter, SplitterBuilder};

#[cfg(feature = "async")]
pub use document::AsyncDocument;

// Re-export from core for convenience
pub use textsplit_core::{
    AnyOf, Chunk, CoreError, CountSplitCondition, FixedOverlap, LineMatcher, MatchFinder,
    NoOverlap, OverlapCondition, ParagraphMatcher, PatternMatcher, PercentageOverlap,
    SentenceMatcher, SplitCondition, SplitPoint, StrategyError, WordMatcher,
};

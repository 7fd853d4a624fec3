//! Layered error types
//!
//! Configuration problems surface as [`SplitError::Config`] when a splitter
//! is built. Failures while running a split carry the stage that failed.

use std::fmt;
use textsplit_core::{CoreError, StrategyError};
use thiserror::Error;

/// Errors raised by a document source while its fragments are drained
#[derive(Error, Debug)]
pub enum DocumentError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Source bytes are not valid UTF-8
    #[error("encoding error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// Any other source failure
    #[error("{0}")]
    Other(String),
}

/// Pipeline stage a runtime failure is attributed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Draining the document's fragments
    Source,
    /// Boundary detection
    Detection,
    /// Overlap adjustment
    Overlap,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Source => "source",
            Stage::Detection => "detection",
            Stage::Overlap => "overlap",
        };
        f.write_str(name)
    }
}

/// Engine-level errors
#[derive(Error, Debug)]
pub enum SplitError {
    /// Invalid budget, overlap percentage or pattern
    #[error("invalid configuration: {0}")]
    Config(#[from] CoreError),

    /// Builder was asked for a pattern split without a pattern
    #[error("invalid configuration: no split condition configured")]
    MissingSplitCondition,

    /// A percentage overlap was combined with a fixed or custom overlap
    #[error("invalid configuration: overlap percentage cannot be combined with another overlap condition")]
    ConflictingOverlap,

    /// The document source failed while being drained
    #[error("source stage failed: {0}")]
    Source(#[from] DocumentError),

    /// A split or overlap strategy failed
    #[error("{stage} stage failed: {source}")]
    Strategy {
        /// Failing stage
        stage: Stage,
        /// Error returned by the strategy
        #[source]
        source: StrategyError,
    },
}

impl SplitError {
    /// Stage of a runtime failure; `None` for configuration errors
    pub fn stage(&self) -> Option<Stage> {
        match self {
            SplitError::Config(_)
            | SplitError::MissingSplitCondition
            | SplitError::ConflictingOverlap => None,
            SplitError::Source(_) => Some(Stage::Source),
            SplitError::Strategy { stage, .. } => Some(*stage),
        }
    }

    /// Whether the error was raised while building the splitter
    pub fn is_config(&self) -> bool {
        self.stage().is_none()
    }

    pub(crate) fn strategy(stage: Stage, source: StrategyError) -> Self {
        SplitError::Strategy { stage, source }
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, SplitError>;

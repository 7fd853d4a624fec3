//! Core error types (deterministic only)

use thiserror::Error;

/// Boxed error returned by pluggable split and overlap strategies
pub type StrategyError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Core algorithm errors (no I/O, no external failures)
#[derive(Error, Debug)]
pub enum CoreError {
    /// Budget must allow at least one structural unit per chunk
    #[error("invalid budget {budget}: at least one unit per chunk is required")]
    InvalidBudget {
        /// The rejected budget
        budget: usize,
    },

    /// Overlap percentage outside `[0, 100)`
    #[error("invalid overlap percentage {percent}: must be in [0, 100)")]
    InvalidOverlapPercent {
        /// The rejected percentage
        percent: f32,
    },

    /// Match pattern failed to compile
    #[error("invalid match pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// Window list breaks the ordering or containment rules
    #[error("invalid windows: {reason}")]
    InvalidWindows {
        /// Which rule was broken
        reason: String,
    },
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

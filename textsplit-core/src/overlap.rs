//! Overlap strategies
//!
//! An [`OverlapCondition`] takes the non-overlapping windows and may move
//! each window's start earlier so the chunk re-includes the tail of its
//! predecessor. Ends are never touched.
//!
//! Clipping: window `i > 0` never starts before `0`, never before
//! `final[i - 1].start + 1`, and never after its own original start.

use crate::{
    error::{CoreError, StrategyError},
    types::SplitPoint,
};

/// Strategy turning the non-overlapping partition into the final windows
pub trait OverlapCondition: Send + Sync {
    /// Produce the final windows, in the same order as `windows`
    fn apply(&self, windows: &[SplitPoint]) -> Result<Vec<SplitPoint>, StrategyError>;
}

impl<F> OverlapCondition for F
where
    F: Fn(&[SplitPoint]) -> Result<Vec<SplitPoint>, StrategyError> + Send + Sync,
{
    fn apply(&self, windows: &[SplitPoint]) -> Result<Vec<SplitPoint>, StrategyError> {
        self(windows)
    }
}

/// Identity: final windows equal the partition
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOverlap;

impl OverlapCondition for NoOverlap {
    fn apply(&self, windows: &[SplitPoint]) -> Result<Vec<SplitPoint>, StrategyError> {
        Ok(windows.to_vec())
    }
}

/// Borrow a percentage of each window's own span from its predecessor
///
/// For window `i > 0` with span `s`, `round(s * percent / 100)` characters
/// are borrowed, subject to the clipping rules of this module.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PercentageOverlap {
    percent: f32,
}

impl PercentageOverlap {
    /// Create the strategy; `percent` must be finite and in `[0, 100)`
    pub fn new(percent: f32) -> Result<Self, CoreError> {
        if !percent.is_finite() || !(0.0..100.0).contains(&percent) {
            return Err(CoreError::InvalidOverlapPercent { percent });
        }
        Ok(Self { percent })
    }

    /// Configured percentage
    pub fn percent(&self) -> f32 {
        self.percent
    }

    fn borrow_for(&self, window: &SplitPoint) -> usize {
        (window.span() as f64 * f64::from(self.percent) / 100.0).round() as usize
    }
}

impl OverlapCondition for PercentageOverlap {
    fn apply(&self, windows: &[SplitPoint]) -> Result<Vec<SplitPoint>, StrategyError> {
        Ok(shift_starts(windows, |window| self.borrow_for(window)))
    }
}

/// Borrow a fixed number of characters from each predecessor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedOverlap {
    chars: usize,
}

impl FixedOverlap {
    /// Borrow `chars` characters per window
    pub fn new(chars: usize) -> Self {
        Self { chars }
    }

    /// Configured character count
    pub fn chars(&self) -> usize {
        self.chars
    }
}

impl OverlapCondition for FixedOverlap {
    fn apply(&self, windows: &[SplitPoint]) -> Result<Vec<SplitPoint>, StrategyError> {
        Ok(shift_starts(windows, |_| self.chars))
    }
}

/// Move every window but the first earlier by `borrow(window)`, clipped
fn shift_starts(windows: &[SplitPoint], borrow: impl Fn(&SplitPoint) -> usize) -> Vec<SplitPoint> {
    let mut result: Vec<SplitPoint> = Vec::with_capacity(windows.len());

    for window in windows {
        let adjusted = match result.last() {
            None => *window,
            Some(prev) => {
                let floor = prev.start() + 1;
                let wanted = window.start().saturating_sub(borrow(window));
                window.with_start(wanted.max(floor).min(window.start()))
            }
        };
        result.push(adjusted);
    }

    result
}

/// Check that `adjusted` is a legal overlap of `original`
///
/// Same length, same ends, starts only moved earlier, starts strictly
/// increasing.
pub fn validate_overlap(original: &[SplitPoint], adjusted: &[SplitPoint]) -> Result<(), CoreError> {
    if original.len() != adjusted.len() {
        return Err(CoreError::InvalidWindows {
            reason: format!(
                "expected {} windows, overlap produced {}",
                original.len(),
                adjusted.len()
            ),
        });
    }

    for (i, (before, after)) in original.iter().zip(adjusted).enumerate() {
        if before.end() != after.end() {
            return Err(CoreError::InvalidWindows {
                reason: format!("window {i} end moved from {} to {}", before.end(), after.end()),
            });
        }
        if after.start() > before.start() {
            return Err(CoreError::InvalidWindows {
                reason: format!(
                    "window {i} start grew from {} to {}",
                    before.start(),
                    after.start()
                ),
            });
        }
        if i > 0 && after.start() <= adjusted[i - 1].start() {
            return Err(CoreError::InvalidWindows {
                reason: format!("window {i} swallows the start of window {}", i - 1),
            });
        }
    }

    Ok(())
}

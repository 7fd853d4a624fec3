//! Count-based split condition

use super::{MatchFinder, SplitCondition};
use crate::error::{CoreError, StrategyError};

/// Cuts the document after every `budget`-th match of a [`MatchFinder`]
///
/// With matches `m1, m2, ...` and budget `n`, boundaries are emitted at
/// `m_n, m_2n, ...`. A trailing group of fewer than `n` matches is closed by
/// the end of the document, never by an extra boundary.
///
/// The budget normally comes from the pipeline. [`with_budget`] pins a
/// budget that takes precedence over the one passed to [`detect`].
///
/// [`with_budget`]: CountSplitCondition::with_budget
/// [`detect`]: SplitCondition::detect
pub struct CountSplitCondition {
    finder: Box<dyn MatchFinder>,
    budget: Option<usize>,
}

impl CountSplitCondition {
    /// Count matches of `finder`, using the pipeline's budget
    pub fn new(finder: impl MatchFinder + 'static) -> Self {
        Self {
            finder: Box::new(finder),
            budget: None,
        }
    }

    /// Count matches of `finder` with a fixed budget
    pub fn with_budget(budget: usize, finder: impl MatchFinder + 'static) -> Result<Self, CoreError> {
        if budget == 0 {
            return Err(CoreError::InvalidBudget { budget });
        }
        Ok(Self {
            finder: Box::new(finder),
            budget: Some(budget),
        })
    }

    /// The pinned budget, if any
    pub fn budget(&self) -> Option<usize> {
        self.budget
    }
}

impl std::fmt::Debug for CountSplitCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CountSplitCondition")
            .field("budget", &self.budget)
            .finish_non_exhaustive()
    }
}

impl SplitCondition for CountSplitCondition {
    fn detect(&self, text: &str, budget: usize) -> Result<Vec<usize>, StrategyError> {
        let budget = self.budget.unwrap_or(budget);
        if budget == 0 {
            return Err(Box::new(CoreError::InvalidBudget { budget }));
        }

        let matches = self.finder.find_matches(text)?;
        Ok(matches
            .into_iter()
            .skip(budget - 1)
            .step_by(budget)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed(offsets: Vec<usize>) -> impl MatchFinder {
        move |_: &str| -> Result<Vec<usize>, StrategyError> { Ok(offsets.clone()) }
    }

    #[test]
    fn test_every_match_with_budget_one() {
        let condition = CountSplitCondition::new(fixed(vec![3, 7, 11]));
        assert_eq!(condition.detect("", 1).unwrap(), vec![3, 7, 11]);
    }

    #[test]
    fn test_every_nth_match() {
        let condition = CountSplitCondition::new(fixed(vec![1, 2, 3, 4, 5, 6, 7]));
        assert_eq!(condition.detect("", 3).unwrap(), vec![3, 6]);
    }

    #[test]
    fn test_fewer_matches_than_budget() {
        let condition = CountSplitCondition::new(fixed(vec![4, 9]));
        assert!(condition.detect("", 4).unwrap().is_empty());
    }

    #[test]
    fn test_pinned_budget_wins() {
        let condition = CountSplitCondition::with_budget(2, fixed(vec![1, 2, 3, 4])).unwrap();
        assert_eq!(condition.budget(), Some(2));
        assert_eq!(condition.detect("", 1).unwrap(), vec![2, 4]);
    }

    #[test]
    fn test_zero_budget_rejected() {
        assert!(matches!(
            CountSplitCondition::with_budget(0, fixed(vec![])),
            Err(CoreError::InvalidBudget { budget: 0 })
        ));

        let condition = CountSplitCondition::new(fixed(vec![1]));
        let err = condition.detect("", 0).unwrap_err();
        assert!(err.downcast_ref::<CoreError>().is_some());
    }

    #[test]
    fn test_finder_error_propagates() {
        let condition = CountSplitCondition::new(|_: &str| -> Result<Vec<usize>, StrategyError> {
            Err("finder failed".into())
        });
        assert_eq!(condition.detect("x", 1).unwrap_err().to_string(), "finder failed");
    }
}

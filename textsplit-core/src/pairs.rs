//! Adjacent-pairs combinator
//!
//! Slides a window of size 2 with stride 1 over any iterator:
//! `[a, b, c, d]` yields `(a, b), (b, c), (c, d)`. Fewer than two elements
//! yield nothing.

/// Iterator over consecutive pairs of an underlying iterator
#[derive(Debug, Clone)]
pub struct AdjacentPairs<I: Iterator> {
    iter: I,
    prev: Option<I::Item>,
}

impl<I> AdjacentPairs<I>
where
    I: Iterator,
    I::Item: Clone,
{
    /// Wrap an iterator
    pub fn new(mut iter: I) -> Self {
        let prev = iter.next();
        Self { iter, prev }
    }
}

impl<I> Iterator for AdjacentPairs<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = (I::Item, I::Item);

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.iter.next()?;
        let prev = self.prev.replace(next.clone())?;
        Some((prev, next))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.prev.is_none() {
            return (0, Some(0));
        }
        self.iter.size_hint()
    }
}

/// Extension trait adding [`adjacent_pairs`](AdjacentPairsExt::adjacent_pairs)
/// to every iterator with cloneable items
pub trait AdjacentPairsExt: Iterator + Sized
where
    Self::Item: Clone,
{
    /// Iterate over `(item[i], item[i + 1])` pairs
    fn adjacent_pairs(self) -> AdjacentPairs<Self> {
        AdjacentPairs::new(self)
    }
}

impl<I> AdjacentPairsExt for I
where
    I: Iterator,
    I::Item: Clone,
{
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pairs_of_sequence() {
        let pairs: Vec<_> = [0, 2, 10, 20, 100].into_iter().adjacent_pairs().collect();
        assert_eq!(pairs, vec![(0, 2), (2, 10), (10, 20), (20, 100)]);
    }

    #[test]
    fn test_short_inputs_yield_nothing() {
        assert_eq!(std::iter::empty::<usize>().adjacent_pairs().count(), 0);
        assert_eq!(std::iter::once(7).adjacent_pairs().count(), 0);
    }

    #[test]
    fn test_two_elements_yield_one_pair() {
        let pairs: Vec<_> = [0, 0].into_iter().adjacent_pairs().collect();
        assert_eq!(pairs, vec![(0, 0)]);
    }

    #[test]
    fn test_size_hint_matches_count() {
        let pairs = (0..5).adjacent_pairs();
        assert_eq!(pairs.size_hint(), (4, Some(4)));
        assert_eq!(pairs.count(), 4);
    }
}

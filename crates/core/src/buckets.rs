//! Ordered range-bucket lookup tables.
//!
//! A table is a list of `(upper, value)` rows sorted by ascending inclusive
//! upper bound plus a catch-all value. Lookup returns the first row whose
//! bound is `>=` the score, or the catch-all when none match.

use crate::score::Score;

#[derive(Debug, Clone, Copy)]
pub struct BucketTable<T: 'static> {
    bounded: &'static [(u8, T)],
    otherwise: T,
}

impl<T: Copy> BucketTable<T> {
    pub const fn new(bounded: &'static [(u8, T)], otherwise: T) -> Self {
        Self { bounded, otherwise }
    }

    /// First-match-wins lookup.
    pub fn lookup(&self, score: Score) -> T {
        self.bounded
            .iter()
            .find(|(upper, _)| score.value() <= *upper)
            .map(|(_, value)| *value)
            .unwrap_or(self.otherwise)
    }

    /// Inclusive upper bounds of the bounded rows, in table order.
    pub fn upper_bounds(&self) -> impl Iterator<Item = u8> + '_ {
        self.bounded.iter().map(|(upper, _)| *upper)
    }

    /// Every value the table can produce, catch-all last.
    pub fn values(&self) -> impl Iterator<Item = T> + '_ {
        self.bounded
            .iter()
            .map(|(_, value)| *value)
            .chain(std::iter::once(self.otherwise))
    }
}

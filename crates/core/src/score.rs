//! Two-digit values carried by raw trait data.
//!
//! Every selector and statistic supplied upstream is a decimal value in
//! `[0, 99]`. [`Score`] is the checked form of such a value; the rest of
//! the derivation code only ever sees validated scores.

use serde::{Deserialize, Serialize};

/// Largest value a selector or statistic may take.
pub const MAX_SCORE: u8 = 99;

/// A selector or statistic in `[0, 99]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Score(u8);

/// Returned when a value does not fit in two decimal digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("value {0} is outside [0, 99]")]
pub struct ScoreOutOfRange(pub u32);

impl Score {
    /// Check `value` and wrap it.
    pub fn new(value: u32) -> Result<Self, ScoreOutOfRange> {
        if value <= u32::from(MAX_SCORE) {
            Ok(Self(value as u8))
        } else {
            Err(ScoreOutOfRange(value))
        }
    }

    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Score {
    type Error = ScoreOutOfRange;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(u32::from(value))
    }
}

impl From<Score> for u8 {
    fn from(score: Score) -> Self {
        score.0
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

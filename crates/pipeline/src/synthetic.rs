//! Random trait supplier used for batch minting and local runs.
//!
//! Produces [`RawTraitInput`]s with the same value ranges as the on-chain
//! generator: every selector and statistic in 0..=99, except the beard
//! selector which never goes below [`BEARD_SELECTOR_MIN`]. The parser
//! still accepts the full 0..=99 beard range.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use vikings_core::input::RawTraitInput;
use vikings_core::score::MAX_SCORE;
use vikings_core::types::VikingNumber;

use crate::queue::Delivery;

/// Lowest beard selector the upstream generator emits.
pub const BEARD_SELECTOR_MIN: u32 = 10;

/// Seedable source of synthetic deliveries.
pub struct SyntheticGenerator {
    rng: StdRng,
}

impl SyntheticGenerator {
    /// Deterministic generator: the same seed yields the same sequence.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generator seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }

    fn score(&mut self) -> u32 {
        self.rng.random_range(0..=u32::from(MAX_SCORE))
    }

    pub fn next_input(&mut self) -> RawTraitInput {
        let beard = self.rng.random_range(BEARD_SELECTOR_MIN..=u32::from(MAX_SCORE));
        let body = self.score();
        let face = self.score();
        let top = self.score();

        RawTraitInput {
            appearance: beard * 1_000_000 + body * 10_000 + face * 100 + top,
            boots: self.score(),
            speed: self.score(),
            bottoms: self.score(),
            stamina: self.score(),
            helmet: self.score(),
            intelligence: self.score(),
            shield: self.score(),
            defence: self.score(),
            weapon: self.score(),
            attack: self.score(),
        }
    }

    /// Lazily yields deliveries for `count` consecutive numbers starting at
    /// `start`. Inputs are drawn one at a time as the iterator advances.
    /// Stops early instead of overflowing past the largest number.
    pub fn deliveries(
        mut self,
        start: VikingNumber,
        count: usize,
    ) -> impl Iterator<Item = Delivery> {
        (0..count).map_while(move |offset| {
            let number = VikingNumber::try_from(offset)
                .ok()
                .and_then(|offset| start.checked_add(offset))?;
            Some(Delivery {
                number,
                input: self.next_input(),
            })
        })
    }
}

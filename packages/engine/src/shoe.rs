use crate::Rank;
use rand::{rngs::SmallRng, Rng, SeedableRng};

/// An effectively infinite shoe: every draw is independent and uniform over
/// the 13 ranks, so the shoe never depletes and never reshuffles.
pub struct Shoe {
    rng: SmallRng,
}

impl Shoe {
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }

    /// Deterministic draw order, for tests and replayable demos.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn deal(&mut self) -> Rank {
        Rank::ALL[self.rng.gen_range(0..Rank::ALL.len())]
    }
}

impl Default for Shoe {
    fn default() -> Self {
        Self::new()
    }
}

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::RecordId;

/// Source of record identifiers.
///
/// Identifiers never leave the map; they only have to be unique among the
/// records alive at the same time. The map re-draws any id that is already
/// in use, so a source only needs to be collision-resistant, not perfect.
pub trait IdSource {
    fn next_id(&mut self) -> RecordId;
}

/// Random 128-bit ids, like a v4 UUID without the version bits.
#[derive(Debug, Clone)]
pub struct RandomIds {
    rng: StdRng,
}

impl RandomIds {
    /// Seeded from OS entropy.
    pub fn new() -> Self {
        RandomIds {
            rng: StdRng::from_entropy(),
        }
    }

    /// Same seed, same id sequence. Handy for reproducing a run.
    pub fn seeded(seed: u64) -> Self {
        RandomIds {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdSource for RandomIds {
    fn next_id(&mut self) -> RecordId {
        RecordId::from_u128(self.rng.r#gen())
    }
}

/// Monotonic counter starting at 1.
#[derive(Debug, Clone, Default)]
pub struct SequentialIds {
    last: u128,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> RecordId {
        self.last = self.last.wrapping_add(1);
        RecordId::from_u128(self.last)
    }
}

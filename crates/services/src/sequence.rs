use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use senso_core::model::{SensoButtonId, SequenceError, TargetSequence};

/// Draws target sequences uniformly from the four quadrants.
///
/// Two generators built from the same seed produce the same sequences.
#[derive(Debug, Clone)]
pub struct SequenceGenerator {
    rng: StdRng,
    seed: Option<u64>,
}

impl SequenceGenerator {
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    /// Seeds from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
            seed: None,
        }
    }

    #[must_use]
    pub fn new(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::seeded)
    }

    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn next_button(&mut self) -> SensoButtonId {
        let index = self.rng.random_range(0..SensoButtonId::ALL.len());
        SensoButtonId::ALL[index]
    }

    /// A new random sequence of `len` buttons.
    ///
    /// # Errors
    ///
    /// Returns `SequenceError::Empty` when `len` is zero.
    pub fn fresh(&mut self, len: usize) -> Result<TargetSequence, SequenceError> {
        let ids = (0..len).map(|_| self.next_button()).collect();
        TargetSequence::new(ids)
    }

    /// `sequence` with one random button appended.
    pub fn extend(&mut self, sequence: &TargetSequence) -> TargetSequence {
        let next = self.next_button();
        sequence.extended_with(next)
    }
}

use super::model::FieldId;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Defines the contract for minting field identities.
///
/// Implementations must never hand out the same id twice over their lifetime.
pub trait IdGenerator: Send {
    fn next_id(&mut self) -> FieldId;
}

/// Draws 64 random bits per id, rendered as `field-<16 hex digits>`.
pub struct RandomIdGenerator {
    rng: StdRng,
}

impl RandomIdGenerator {
    /// Seeds from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible sequence, for replays and debugging.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for RandomIdGenerator {
    fn next_id(&mut self) -> FieldId {
        let bits: u64 = self.rng.random();
        FieldId::new(format!("field-{:016x}", bits))
    }
}

/// Yields `field-1`, `field-2`, ... in order.
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    next: u64,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> FieldId {
        self.next += 1;
        FieldId::new(format!("field-{}", self.next))
    }
}

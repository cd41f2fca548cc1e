//! Variable numbering shared by all reductions
//!
//! Every reduction places one Boolean variable per `(slot, candidate)` pair
//! and numbers them densely from 1. What a "slot" means differs per problem
//! (clique position, program variable, ...), the arithmetic does not.

use anyhow::Result;

/// Bijection between `(slot, candidate)` pairs and positive SAT variable
/// ids, for a fixed number of candidates per slot (the span).
///
/// `encode(slot, candidate) = (slot - 1) * span + (candidate - 1) + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariableCodec {
    span: usize,
}

impl VariableCodec {
    /// Create a codec with `span` candidates per slot.
    pub fn new(span: usize) -> Result<Self> {
        if span == 0 {
            anyhow::bail!("Codec span must be at least 1");
        }
        Ok(Self { span })
    }

    /// Number of candidates per slot.
    pub fn span(&self) -> usize {
        self.span
    }

    /// Map a `(slot, candidate)` pair to its SAT variable id.
    ///
    /// Both inputs are 1-based; `candidate` must be in `1..=span`.
    pub fn encode(&self, slot: usize, candidate: usize) -> i32 {
        debug_assert!(slot >= 1);
        debug_assert!((1..=self.span).contains(&candidate));
        ((slot - 1) * self.span + (candidate - 1) + 1) as i32
    }

    /// Invert `encode`: recover the `(slot, candidate)` pair from a variable
    /// id. When `id % span == 0` the candidate is `span` itself.
    pub fn decode(&self, id: i32) -> (usize, usize) {
        debug_assert!(id > 0);
        let id = id as usize;
        let candidate = match id % self.span {
            0 => self.span,
            remainder => remainder,
        };
        let slot = (id - 1) / self.span + 1;
        (slot, candidate)
    }
}

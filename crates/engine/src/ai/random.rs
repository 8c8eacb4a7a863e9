use rand::prelude::*;

use crate::core::Field;

use super::{legal_moves, Ai, AiKind, DecideError, Move};

/// Uniform choice among the legal placements
pub struct RandomAi {
    rng: StdRng,
}

impl RandomAi {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Ai for RandomAi {
    fn decide(&mut self, field: &Field) -> Result<Move, DecideError> {
        let candidates = legal_moves(field);
        let candidate = candidates
            .choose(&mut self.rng)
            .ok_or(DecideError::NoLegalMove)?;
        Ok(candidate.mv)
    }

    fn kind(&self) -> AiKind {
        AiKind::Random
    }
}

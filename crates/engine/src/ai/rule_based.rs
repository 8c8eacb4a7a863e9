//! Rule-based strategy: simulate every placement and keep the best-looking field.
//!
//! Each candidate is dropped on a clone of the field and resolved to quiescence. The
//! resulting field is scored from the points gained, the shape of the stack, how many
//! same-color neighbours are already touching and whether the death cell got filled.
//! With `lookahead > 0` the queued pairs are placed too and a candidate is worth its best
//! continuation.

use crate::core::{find_groups, ActivePiece, Field};
use crate::types::{ColorPair, MIN_GROUP_SIZE};

use super::{legal_moves, Ai, AiKind, Candidate, DecideError, Move};

/// Heuristic weights
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Weights {
    /// Per point of score gained
    pub score: i64,
    /// Per cell in a group that is still below erasing size, weighted by group size
    pub connection: i64,
    /// Per row of the tallest column
    pub max_height: i64,
    /// Per unit of height difference between neighbouring columns
    pub bumpiness: i64,
    /// Flat penalty for a filled death cell
    pub death: i64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            score: 1,
            connection: 4,
            max_height: 12,
            bumpiness: 3,
            death: 1_000_000,
        }
    }
}

/// Heuristic value of a simulated field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    pub value: i64,
    pub max_height: u8,
}

impl Evaluation {
    /// Higher value wins; equal values prefer the lower stack
    fn beats(&self, other: &Evaluation) -> bool {
        self.value > other.value
            || (self.value == other.value && self.max_height < other.max_height)
    }
}

#[derive(Debug, Clone, Default)]
pub struct RuleBasedAi {
    weights: Weights,
    lookahead: usize,
}

impl RuleBasedAi {
    pub fn new(weights: Weights) -> Self {
        Self {
            weights,
            lookahead: 0,
        }
    }

    /// Also place up to `depth` queued pairs before judging a candidate
    pub fn with_lookahead(mut self, depth: usize) -> Self {
        self.lookahead = depth;
        self
    }

    /// Score the field left behind by a placement.
    ///
    /// `base_score` is the score of the real field before any simulated placement.
    pub fn evaluate(&self, sim: &Field, base_score: u32) -> Evaluation {
        let w = &self.weights;
        let grid = sim.grid();
        let max_height = grid.max_height();

        let gained = sim.score().saturating_sub(base_score) as i64;
        let connections: i64 = find_groups(grid)
            .iter()
            .filter(|g| g.len() > 1 && g.len() < MIN_GROUP_SIZE)
            .map(|g| (g.len() * g.len()) as i64)
            .sum();

        let mut value = gained * w.score + connections * w.connection
            - max_height as i64 * w.max_height
            - grid.bumpiness() as i64 * w.bumpiness;
        if sim.is_game_over() {
            value -= w.death;
        }

        Evaluation { value, max_height }
    }

    fn evaluate_candidate(
        &self,
        field: &Field,
        candidate: &Candidate,
        base_score: u32,
        upcoming: &[ColorPair],
    ) -> Evaluation {
        let (sim, _) = candidate.simulate(field);
        let here = self.evaluate(&sim, base_score);

        let Some((&next, rest)) = upcoming.split_first() else {
            return here;
        };
        if sim.is_game_over() {
            return here;
        }

        let mut follow = sim;
        follow.set_active(Some(ActivePiece::spawn(next, follow.grid())));
        legal_moves(&follow)
            .iter()
            .map(|c| self.evaluate_candidate(&follow, c, base_score, rest))
            .fold(None, |best: Option<Evaluation>, e| match best {
                Some(b) if !e.beats(&b) => Some(b),
                _ => Some(e),
            })
            .unwrap_or(here)
    }
}

impl Ai for RuleBasedAi {
    fn decide(&mut self, field: &Field) -> Result<Move, DecideError> {
        let candidates = legal_moves(field);
        let upcoming = field.peek_next(self.lookahead);
        let base_score = field.score();

        let mut best: Option<(Move, Evaluation)> = None;
        for candidate in &candidates {
            let eval = self.evaluate_candidate(field, candidate, base_score, &upcoming);
            match best {
                Some((_, b)) if !eval.beats(&b) => {}
                _ => best = Some((candidate.mv, eval)),
            }
        }

        best.map(|(mv, _)| mv).ok_or(DecideError::NoLegalMove)
    }

    fn kind(&self) -> AiKind {
        AiKind::RuleBased
    }
}

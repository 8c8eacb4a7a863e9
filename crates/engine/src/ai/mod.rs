//! AI decision module
//!
//! Every strategy works from the same candidate list (see [`legal_moves`]) and returns a
//! [`Move`] recommendation. Strategies only read the field; candidate evaluation runs on
//! clones. Turning the move into rotate/move/lock calls is the host's job
//! (see [`crate::place::apply_move`]).

pub mod moves;
pub mod random;
pub mod rule_based;

use std::fmt;

use crate::core::Field;
use crate::types::Orientation;

pub use moves::{legal_moves, Candidate};
pub use random::RandomAi;
pub use rule_based::{RuleBasedAi, Weights};

/// Placement recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Move {
    /// Final pivot column
    pub target_column: i8,
    /// Clockwise quarter turns from the current orientation (0..=3)
    pub rotation: u8,
}

impl Move {
    pub fn new(target_column: i8, rotation: u8) -> Self {
        Self {
            target_column,
            rotation: rotation % 4,
        }
    }

    /// Orientation reached by applying this move's turns to `current`
    pub fn target_orientation(&self, current: Orientation) -> Orientation {
        Orientation::from_index(current.index() + self.rotation)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecideError {
    /// The active piece fits nowhere, or there is no active piece
    NoLegalMove,
}

impl DecideError {
    pub fn code(self) -> &'static str {
        match self {
            DecideError::NoLegalMove => "no_legal_move",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            DecideError::NoLegalMove => "the active piece cannot be placed anywhere",
        }
    }
}

impl fmt::Display for DecideError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for DecideError {}

/// A placement strategy
pub trait Ai {
    /// Recommend a placement for the active piece of `field`.
    ///
    /// Never mutates `field`.
    fn decide(&mut self, field: &Field) -> Result<Move, DecideError>;

    fn kind(&self) -> AiKind;
}

/// Strategy tag used by the factory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AiKind {
    Random,
    #[default]
    RuleBased,
}

impl AiKind {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "random" => Some(AiKind::Random),
            "rule" | "rule_based" | "rulebased" | "rule-based" => Some(AiKind::RuleBased),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AiKind::Random => "random",
            AiKind::RuleBased => "rule_based",
        }
    }
}

/// Build a strategy by tag. `seed` feeds strategies that draw random numbers.
pub fn create_ai(kind: AiKind, seed: u64) -> Box<dyn Ai> {
    match kind {
        AiKind::Random => Box::new(RandomAi::new(seed)),
        AiKind::RuleBased => Box::new(RuleBasedAi::default()),
    }
}

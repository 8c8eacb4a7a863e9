//! Decision layer on top of the core field: placement strategies and the helper that
//! plays a chosen placement through the field's own controls.

pub mod ai;
pub mod place;

pub use puyo_core as core;
pub use puyo_types as types;

pub use ai::{create_ai, legal_moves, Ai, AiKind, Candidate, DecideError, Move};
pub use place::{apply_move, PlaceError};

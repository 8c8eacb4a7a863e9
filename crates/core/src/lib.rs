//! Core puzzle logic - pure, deterministic, and testable
//!
//! This crate contains all the field rules, state management and chain resolution.
//! It has **zero dependencies** on UI, timers or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical pair sequences (for AI evaluation)
//! - **Testable**: Unit tests for every rule next to the code
//! - **Cheap to clone**: A whole field is one flat cell vector plus a few counters, so
//!   look-ahead search clones freely
//!
//! # Module Structure
//!
//! - [`grid`]: Cell storage with bounds checks, gravity and column metrics
//! - [`pieces`]: The falling pair, rotation with a single kick, split drop landing
//! - [`rng`]: Pair generation and the two-deep lookahead queue
//! - [`chain`]: Group detection, erasure, garbage collateral and chain steps
//! - [`scoring`]: Chain power, color and group bonuses
//! - [`field`]: Complete field state tying everything together
//! - [`snapshot`]: Serializable read-only view for hosts
//!
//! # Rules
//!
//! - Pairs spawn in the hidden rows above the center column, satellite up
//! - Sub-cells of a dropped pair fall independently
//! - Four or more 4-connected cells of one color erase; adjacent garbage goes with them
//! - Each erasing step after the first raises the chain power
//! - The game ends when the death cell (center column, first visible row) is filled
//!
//! # Example
//!
//! ```
//! use puyo_core::Field;
//! use puyo_types::GameAction;
//!
//! let mut field = Field::with_seed(14, 6, 12345);
//! field.start();
//!
//! field.apply_action(GameAction::MoveLeft);
//! field.apply_action(GameAction::RotateCw);
//! field.apply_action(GameAction::Drop);
//!
//! assert_eq!(field.grid().occupied_count(), 2);
//! assert!(field.active().is_some());
//! ```
//!
//! Resolution is synchronous: [`Field::lock_and_resolve`](field::Field::lock_and_resolve)
//! runs every chain step before returning. Hosts that animate chains drive
//! [`Field::resolve_chain_step`](field::Field::resolve_chain_step) one step at a time.

pub mod chain;
pub mod error;
pub mod field;
pub mod grid;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use puyo_types as types;

// Re-export commonly used types for convenience
pub use chain::{find_groups, resolve_step, ChainInfo, ChainSummary, Group};
pub use error::GridError;
pub use field::Field;
pub use grid::Grid;
pub use pieces::{get_kicks, try_rotate, ActivePiece};
pub use rng::{PairQueue, SimpleRng};
pub use scoring::{calculate_score, ScoreResult};
pub use snapshot::{ActiveSnapshot, FieldSnapshot};

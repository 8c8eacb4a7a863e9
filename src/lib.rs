//! Falling-pair chain puzzle (workspace facade crate).
//!
//! Exposes `puyo::{core,engine,types}` while the implementation lives in dedicated crates
//! under `crates/`. The [`sim`] module is the headless host used by the `puyo-sim` binary.

pub use puyo_core as core;
pub use puyo_engine as engine;
pub use puyo_types as types;

pub mod sim;

//! Field module - the complete state of one playing field
//!
//! This module ties together the grid, the falling pair, the lookahead queue and the
//! score counters. It handles movement, rotation, locking and chain resolution.
//! Every operation runs to completion synchronously; pacing is left to the host.

use crate::chain::{self, ChainInfo, ChainSummary};
use crate::grid::Grid;
use crate::pieces::ActivePiece;
use crate::rng::PairQueue;
use crate::snapshot::{ActiveSnapshot, FieldSnapshot};
use crate::types::*;

/// Seed used by [`Field::new`]
pub const DEFAULT_SEED: u32 = 1;

/// Complete field state
#[derive(Debug, Clone)]
pub struct Field {
    grid: Grid,
    active: Option<ActivePiece>,
    queue: PairQueue,
    /// Accumulated score, never decreases.
    score: u32,
    /// Chain step of the current resolution cycle (0 until something erases).
    chain_step: u32,
    /// Monotonic id for promoted pieces.
    piece_id: u32,
}

impl Field {
    /// Create an empty field: empty grid, empty queue, no active piece.
    ///
    /// Dimensions below [`MIN_HEIGHT`] x [`MIN_WIDTH`] cannot hold a pair and dimensions above
    /// [`MAX_HEIGHT`] x [`MAX_WIDTH`] are not addressable; both are caller bugs.
    pub fn new(height: u8, width: u8) -> Self {
        Self::with_seed(height, width, DEFAULT_SEED)
    }

    /// Create an empty field whose pair generator starts from `seed`
    pub fn with_seed(height: u8, width: u8, seed: u32) -> Self {
        assert!(
            (MIN_HEIGHT..=MAX_HEIGHT).contains(&height) && (MIN_WIDTH..=MAX_WIDTH).contains(&width),
            "field must be between {}x{} and {}x{} (got {}x{})",
            MIN_HEIGHT,
            MIN_WIDTH,
            MAX_HEIGHT,
            MAX_WIDTH,
            height,
            width
        );
        Self {
            grid: Grid::new(height, width),
            active: None,
            queue: PairQueue::new(seed),
            score: 0,
            chain_step: 0,
            piece_id: 0,
        }
    }

    /// Prime the queue and promote the first piece (two [`Field::generate_next`] calls)
    pub fn start(&mut self) {
        if self.active.is_some() {
            return;
        }
        self.generate_next();
        self.generate_next();
    }

    /// Queue refill and piece promotion.
    ///
    /// The first call after construction establishes the lookahead. Afterwards, when no
    /// piece is active, one pair is generated at the back and the front pair becomes the
    /// active piece at the spawn position, satellite up.
    pub fn generate_next(&mut self) {
        if !self.queue.is_primed() {
            self.queue.fill();
            return;
        }
        if self.active.is_some() {
            return;
        }
        if let Some(pair) = self.queue.advance() {
            self.active = Some(ActivePiece::spawn(pair, &self.grid));
            self.piece_id = self.piece_id.wrapping_add(1);
        }
    }

    /// The next `n` queued pairs, front first
    pub fn peek_next(&self, n: usize) -> Vec<ColorPair> {
        self.queue.peek(n)
    }

    /// Replace the queued pairs (scripted scenarios and puzzles)
    pub fn set_next(&mut self, pairs: &[ColorPair]) {
        self.queue.set_pending(pairs);
    }

    pub fn height(&self) -> u8 {
        self.grid.height()
    }

    pub fn width(&self) -> u8 {
        self.grid.width()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable grid access for scenario setup (garbage drops, puzzles, tests)
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    /// Replace the active piece (scripted scenarios and simulations)
    pub fn set_active(&mut self, piece: Option<ActivePiece>) {
        self.active = piece;
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn chain_step(&self) -> u32 {
        self.chain_step
    }

    pub fn piece_id(&self) -> u32 {
        self.piece_id
    }

    pub fn seed(&self) -> u32 {
        self.queue.seed()
    }

    /// The game has ended once the death cell is occupied
    pub fn is_game_over(&self) -> bool {
        self.grid.is_death_cell_occupied()
    }

    /// Try to move the active piece sideways by `dx` columns
    fn try_shift(&mut self, dx: i8) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        match active.shifted(&self.grid, dx, 0) {
            Some(moved) => {
                self.active = Some(moved);
                true
            }
            None => false,
        }
    }

    /// Move one column left; blocked moves are ignored
    pub fn move_left(&mut self) -> bool {
        self.try_shift(-1)
    }

    /// Move one column right; blocked moves are ignored
    pub fn move_right(&mut self) -> bool {
        self.try_shift(1)
    }

    /// Try to rotate the active piece with the kick fallback
    fn try_rotate(&mut self, clockwise: bool) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        match active.rotated(&self.grid, clockwise) {
            Some(turned) => {
                self.active = Some(turned);
                true
            }
            None => false,
        }
    }

    /// Rotate clockwise; rejected rotations leave the piece untouched
    pub fn rotate_cw(&mut self) -> bool {
        self.try_rotate(true)
    }

    /// Rotate counter-clockwise; rejected rotations leave the piece untouched
    pub fn rotate_ccw(&mut self) -> bool {
        self.try_rotate(false)
    }

    /// Check whether the active piece would fit with its pivot in `column`, at its
    /// current row, in `orientation`. False when no piece is active.
    pub fn can_place(&self, column: i8, orientation: Orientation) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        ActivePiece {
            x: column,
            orientation,
            ..active
        }
        .is_valid(&self.grid)
    }

    /// Resting `(pivot, satellite)` coordinates if the active piece dropped now
    pub fn ghost_position(&self) -> Option<((i8, i8), (i8, i8))> {
        self.active?.landing(&self.grid)
    }

    /// Drop the active piece and write it into the grid.
    ///
    /// Resets the chain step for the coming resolution cycle. No-op without an active
    /// piece. A piece that overlaps the stack where it stands is discarded unwritten.
    /// Returns true if the piece was written.
    pub fn lock(&mut self) -> bool {
        let Some(active) = self.active.take() else {
            return false;
        };
        self.chain_step = 0;

        let Some(((px, py), (sx, sy))) = active.landing(&self.grid) else {
            return false;
        };
        let pivot_written = self.grid.set(px, py, active.pivot);
        let satellite_written = self.grid.set(sx, sy, active.satellite);
        debug_assert!(
            pivot_written.is_ok() && satellite_written.is_ok(),
            "landing cells are always in bounds"
        );
        true
    }

    /// Run one resolution step and fold its score into the running total
    pub fn resolve_chain_step(&mut self) -> ChainInfo {
        let info = chain::resolve_step(&mut self.grid, self.chain_step);
        if info.erased {
            self.chain_step = info.chain_step;
            self.score = self.score.saturating_add(info.score_delta());
        }
        info
    }

    /// Resolve until the field is stable
    pub fn resolve_chain(&mut self) -> ChainSummary {
        let mut summary = ChainSummary::default();
        loop {
            let info = self.resolve_chain_step();
            if !info.erased {
                return summary;
            }
            summary.record(&info);
        }
    }

    /// Lock the active piece and resolve the resulting chain
    pub fn lock_and_resolve(&mut self) -> ChainSummary {
        if !self.lock() {
            return ChainSummary::default();
        }
        self.resolve_chain()
    }

    /// Apply a game action. Returns false if the action had no effect.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::RotateCw => self.rotate_cw(),
            GameAction::RotateCcw => self.rotate_ccw(),
            GameAction::Drop => {
                if self.active.is_none() {
                    return false;
                }
                self.lock_and_resolve();
                if !self.is_game_over() {
                    self.generate_next();
                }
                true
            }
        }
    }

    pub fn snapshot_into(&self, out: &mut FieldSnapshot) {
        out.width = self.grid.width();
        out.height = self.grid.height();
        self.grid.write_u8_grid(&mut out.cells);
        out.board_hash = FieldSnapshot::hash_cells(&out.cells);
        out.active = self.active.map(ActiveSnapshot::from);
        out.ghost = self.ghost_position();
        out.next = self.peek_next(self.queue.depth());
        out.score = self.score;
        out.chain_step = self.chain_step;
        out.piece_id = self.piece_id;
        out.seed = self.queue.seed();
        out.game_over = self.is_game_over();
    }

    pub fn snapshot(&self) -> FieldSnapshot {
        let mut s = FieldSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for Field {
    fn default() -> Self {
        Self::new(DEFAULT_HEIGHT, DEFAULT_WIDTH)
    }
}

//! Legal placement enumeration shared by every strategy.
//!
//! A placement is reachable when the active piece can turn to the target orientation
//! (shorter direction first, kicks allowed) and then slide column by column at its current
//! row to the target column. At most `width * 4` candidates exist.

use crate::core::{ActivePiece, ChainSummary, Field};
use crate::types::Orientation;

use super::Move;

/// A reachable placement of the active piece
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub mv: Move,
    /// The piece at its target column and orientation, before dropping
    pub piece: ActivePiece,
    /// Resting `(pivot, satellite)` cells
    pub landing: ((i8, i8), (i8, i8)),
}

impl Candidate {
    pub fn orientation(&self) -> Orientation {
        self.piece.orientation
    }

    /// Clone `field`, drop this placement there and resolve to quiescence.
    ///
    /// The clone keeps the original queue untouched; the next piece is not promoted.
    pub fn simulate(&self, field: &Field) -> (Field, ChainSummary) {
        let mut sim = field.clone();
        sim.set_active(Some(self.piece));
        let summary = sim.lock_and_resolve();
        (sim, summary)
    }

    /// Cells covered after landing, order-independent (for double-color dedup)
    fn unordered_landing(&self) -> ((i8, i8), (i8, i8)) {
        let (a, b) = self.landing;
        if a <= b {
            (a, b)
        } else {
            (b, a)
        }
    }
}

/// Every reachable placement for the active piece of `field`.
///
/// Empty when there is no active piece or the piece does not fit where it stands.
/// For a pair of two equal colors, placements that fill the same cells are listed once.
pub fn legal_moves(field: &Field) -> Vec<Candidate> {
    let Some(active) = field.active() else {
        return Vec::new();
    };
    let grid = field.grid();
    if !active.is_valid(grid) {
        return Vec::new();
    }

    let double = active.colors().is_double();
    let mut out: Vec<Candidate> = Vec::with_capacity(grid.width() as usize * 4);

    for orientation in Orientation::ALL {
        let Some(turned) = active.rotated_to(grid, orientation) else {
            continue;
        };
        let rotation = active.orientation.cw_turns_to(orientation);

        let mut reachable = vec![turned];
        for dx in [-1, 1] {
            let mut piece = turned;
            while let Some(next) = piece.shifted(grid, dx, 0) {
                reachable.push(next);
                piece = next;
            }
        }
        reachable.sort_by_key(|p| p.x);

        for piece in reachable {
            let Some(landing) = piece.landing(grid) else {
                continue;
            };
            let candidate = Candidate {
                mv: Move::new(piece.x, rotation),
                piece,
                landing,
            };
            if double
                && out
                    .iter()
                    .any(|c| c.unordered_landing() == candidate.unordered_landing())
            {
                continue;
            }
            out.push(candidate);
        }
    }

    out
}

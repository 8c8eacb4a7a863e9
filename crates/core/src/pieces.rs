//! Pieces module - the falling pair and its rotation system
//!
//! A pair is a pivot cell plus a satellite that orbits it in four orientations.
//! Rotation tries the plain turn first, then a single kick that pushes the whole pair
//! one cell away from the satellite (off a wall, off a stack, or up from the floor).

use crate::grid::Grid;
use crate::types::{Cell, ColorPair, Orientation, HIDDEN_ROWS};

/// Offsets to try when rotating: the plain turn, then one kick
pub type KickList = [(i8, i8); 2];

/// Kick offsets for a rotation ending in `to`.
///
/// The kick is the opposite of the satellite offset, so a pair turned into the left wall
/// shifts right and a pair turned toward the floor climbs one row.
pub fn get_kicks(to: Orientation) -> KickList {
    let (dx, dy) = to.offset();
    [(0, 0), (-dx, -dy)]
}

/// Try to rotate a pair with a single kick fallback.
///
/// Returns Some(new_orientation, kick_offset) if successful, None if both attempts fail.
pub fn try_rotate(
    orientation: Orientation,
    x: i8,
    y: i8,
    clockwise: bool,
    is_valid: impl Fn(i8, i8) -> bool,
) -> Option<(Orientation, (i8, i8))> {
    let new_orientation = if clockwise {
        orientation.rotate_cw()
    } else {
        orientation.rotate_ccw()
    };
    let (sx, sy) = new_orientation.offset();

    get_kicks(new_orientation)
        .into_iter()
        .find(|&(kx, ky)| is_valid(x + kx, y + ky) && is_valid(x + kx + sx, y + ky + sy))
        .map(|kick| (new_orientation, kick))
}

/// Spawn position of the pivot `(x, y)` for a grid: center column, last hidden row
pub fn spawn_position(grid: &Grid) -> (i8, i8) {
    (grid.death_column(), HIDDEN_ROWS as i8 - 1)
}

/// Active falling pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub pivot: Cell,
    pub satellite: Cell,
    pub orientation: Orientation,
    /// Pivot column
    pub x: i8,
    /// Pivot row
    pub y: i8,
}

impl ActivePiece {
    /// Create a new pair at the spawn position of `grid`, satellite up
    pub fn spawn(colors: ColorPair, grid: &Grid) -> Self {
        let (x, y) = spawn_position(grid);
        Self {
            pivot: colors.pivot,
            satellite: colors.satellite,
            orientation: Orientation::Up,
            x,
            y,
        }
    }

    pub fn colors(&self) -> ColorPair {
        ColorPair::new(self.pivot, self.satellite)
    }

    pub fn pivot_pos(&self) -> (i8, i8) {
        (self.x, self.y)
    }

    pub fn satellite_pos(&self) -> (i8, i8) {
        let (dx, dy) = self.orientation.offset();
        (self.x + dx, self.y + dy)
    }

    /// Check if both sub-cells sit on empty in-bounds cells
    pub fn is_valid(&self, grid: &Grid) -> bool {
        let (sx, sy) = self.satellite_pos();
        grid.is_valid(self.x, self.y) && grid.is_valid(sx, sy)
    }

    /// Same pair moved by `(dx, dy)`, if it fits
    pub fn shifted(&self, grid: &Grid, dx: i8, dy: i8) -> Option<Self> {
        let moved = Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        };
        moved.is_valid(grid).then_some(moved)
    }

    /// Same pair rotated one quarter turn (with kick), if it fits
    pub fn rotated(&self, grid: &Grid, clockwise: bool) -> Option<Self> {
        let (orientation, (kx, ky)) = try_rotate(self.orientation, self.x, self.y, clockwise, |x, y| {
            grid.is_valid(x, y)
        })?;
        Some(Self {
            orientation,
            x: self.x + kx,
            y: self.y + ky,
            ..*self
        })
    }

    /// Rotate to `target` along the shorter direction (clockwise first on a tie).
    ///
    /// Falls back to the other direction when the first path is blocked.
    pub fn rotated_to(&self, grid: &Grid, target: Orientation) -> Option<Self> {
        let cw = self.orientation.cw_turns_to(target);
        let ccw = (4 - cw) % 4;

        let mut plans = [(true, cw), (false, ccw)];
        if plans[1].1 < plans[0].1 {
            plans.swap(0, 1);
        }

        plans.into_iter().find_map(|(clockwise, steps)| {
            let mut piece = *self;
            for _ in 0..steps {
                piece = piece.rotated(grid, clockwise)?;
            }
            (piece.orientation == target).then_some(piece)
        })
    }

    /// Resting positions `(pivot, satellite)` after dropping.
    ///
    /// Each sub-cell falls on its own; the lower one settles first so a vertical pair
    /// stays stacked. Returns None if the pair does not fit where it is.
    pub fn landing(&self, grid: &Grid) -> Option<((i8, i8), (i8, i8))> {
        if !self.is_valid(grid) {
            return None;
        }
        let (px, py) = self.pivot_pos();
        let (sx, sy) = self.satellite_pos();

        if px == sx {
            let (top, bottom) = if py < sy { (py, sy) } else { (sy, py) };
            let bottom_rest = grid.resting_row(px, bottom)?;
            let top_rest = bottom_rest - (bottom - top);
            if py < sy {
                Some(((px, top_rest), (sx, bottom_rest)))
            } else {
                Some(((px, bottom_rest), (sx, top_rest)))
            }
        } else {
            let pivot_rest = grid.resting_row(px, py)?;
            let satellite_rest = grid.resting_row(sx, sy)?;
            Some(((px, pivot_rest), (sx, satellite_rest)))
        }
    }
}

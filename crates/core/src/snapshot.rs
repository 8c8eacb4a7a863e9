use serde::Serialize;

use crate::pieces::ActivePiece;
use crate::types::{Cell, ColorPair, Orientation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ActiveSnapshot {
    pub pivot: Cell,
    pub satellite: Cell,
    pub orientation: Orientation,
    pub x: i8,
    pub y: i8,
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            pivot: value.pivot,
            satellite: value.satellite,
            orientation: value.orientation,
            x: value.x,
            y: value.y,
        }
    }
}

/// Read-only view of a field for hosts, logs and JSON output.
///
/// `cells` holds numeric cell codes (see [`Cell::as_u8`]) row by row, top first.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct FieldSnapshot {
    pub width: u8,
    pub height: u8,
    pub cells: Vec<Vec<u8>>,
    /// FNV-1a 64-bit over `cells` in row-major order.
    pub board_hash: u64,
    pub active: Option<ActiveSnapshot>,
    /// Resting `(pivot, satellite)` coordinates of the active piece.
    pub ghost: Option<((i8, i8), (i8, i8))>,
    pub next: Vec<ColorPair>,
    pub score: u32,
    pub chain_step: u32,
    pub piece_id: u32,
    pub seed: u32,
    pub game_over: bool,
}

impl FieldSnapshot {
    const FNV_OFFSET_BASIS: u64 = 0xcbf29ce484222325;
    const FNV_PRIME: u64 = 0x100000001b3;

    /// Stable hash of the cell codes.
    ///
    /// `DefaultHasher` output is not guaranteed stable across Rust versions.
    pub fn hash_cells(cells: &[Vec<u8>]) -> u64 {
        let mut h = Self::FNV_OFFSET_BASIS;
        for b in cells.iter().flat_map(|row| row.iter().copied()) {
            h ^= b as u64;
            h = h.wrapping_mul(Self::FNV_PRIME);
        }
        h
    }

    /// Text rendering of the cells, one string per row
    pub fn rows(&self) -> Vec<String> {
        self.cells
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&code| Cell::from_u8(code).map(|c| c.as_char()).unwrap_or('?'))
                    .collect()
            })
            .collect()
    }
}

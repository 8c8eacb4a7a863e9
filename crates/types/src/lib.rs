//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the engine.
//! All types are plain data with no behaviour beyond small conversions, making them
//! usable in any context (core rules, AI search, host rendering).
//!
//! # Field Dimensions
//!
//! The standard field is 6 columns by 14 rows. The top [`HIDDEN_ROWS`] rows are a
//! hidden buffer used for spawning; the visible play area starts right below it.
//!
//! - **Width**: 6 columns (indexed 0-5)
//! - **Height**: 14 rows (indexed 0-13, row 0 at the top)
//! - **Spawn**: pivot at column 2, row 1, satellite above it
//! - **Death cell**: column 2, row 2
//! - **Limits**: 3x2 up to 126x126 (`MIN_*`/`MAX_*`), so coordinates fit in `i8`
//!
//! # Scoring Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MIN_GROUP_SIZE` | 4 | Smallest connected group that erases |
//! | `POINTS_PER_CELL` | 10 | Base points per erased cell |
//! | `QUEUE_DEPTH` | 2 | Number of upcoming pairs kept visible |
//!
//! # Examples
//!
//! ```
//! use puyo_types::{Cell, Orientation, GameAction, DEFAULT_WIDTH, DEFAULT_HEIGHT};
//!
//! // Parse a cell from string (case-insensitive)
//! let red = Cell::from_str("RED").unwrap();
//! assert_eq!(red, Cell::Red);
//! assert!(red.is_color());
//!
//! // Rotate
//! let orientation = Orientation::Up;
//! assert_eq!(orientation.rotate_cw(), Orientation::Right);
//!
//! // Parse game action
//! let action = GameAction::from_str("rotateCw").unwrap();
//! assert_eq!(action, GameAction::RotateCw);
//!
//! assert_eq!(DEFAULT_WIDTH, 6);
//! assert_eq!(DEFAULT_HEIGHT, 14);
//! ```

use serde::{Deserialize, Serialize};

/// Default field width in cells (6 columns)
pub const DEFAULT_WIDTH: u8 = 6;

/// Default field height in cells, hidden buffer included (14 rows)
pub const DEFAULT_HEIGHT: u8 = 14;

/// Rows at the top of the field hidden from the player
pub const HIDDEN_ROWS: u8 = 2;

/// Narrowest field that can hold a horizontal pair
pub const MIN_WIDTH: u8 = 2;

/// Shortest field that still has a row below the hidden buffer
pub const MIN_HEIGHT: u8 = HIDDEN_ROWS + 1;

/// Widest field addressable with `i8` coordinates, leaving one cell of headroom
/// for rotation and kick offsets
pub const MAX_WIDTH: u8 = i8::MAX as u8 - 1;

/// Tallest field addressable with `i8` coordinates (same headroom as [`MAX_WIDTH`])
pub const MAX_HEIGHT: u8 = i8::MAX as u8 - 1;

/// Smallest connected same-color group that is erased
pub const MIN_GROUP_SIZE: usize = 4;

/// Base points per erased cell
pub const POINTS_PER_CELL: u32 = 10;

/// Number of upcoming pairs the queue keeps ahead of the active piece
pub const QUEUE_DEPTH: usize = 2;

/// Colors that the queue may spawn
pub const PRIMARY_COLORS: [Cell; 4] = [Cell::Red, Cell::Green, Cell::Yellow, Cell::Blue];

/// Content of a single grid cell
///
/// - **Empty**: nothing here
/// - **Red / Green / Yellow / Blue / Purple**: colored pieces that form groups
/// - **Garbage**: colorless blocker, cleared only next to an erased group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cell {
    #[default]
    Empty,
    Red,
    Green,
    Yellow,
    Blue,
    Purple,
    Garbage,
}

impl Cell {
    /// Parse a cell from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use puyo_types::Cell;
    ///
    /// assert_eq!(Cell::from_str("red"), Some(Cell::Red));
    /// assert_eq!(Cell::from_str("Garbage"), Some(Cell::Garbage));
    /// assert_eq!(Cell::from_str("wall"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "empty" | "." => Some(Cell::Empty),
            "red" | "r" => Some(Cell::Red),
            "green" | "g" => Some(Cell::Green),
            "yellow" | "y" => Some(Cell::Yellow),
            "blue" | "b" => Some(Cell::Blue),
            "purple" | "p" => Some(Cell::Purple),
            "garbage" | "o" => Some(Cell::Garbage),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Cell::Empty => "empty",
            Cell::Red => "red",
            Cell::Green => "green",
            Cell::Yellow => "yellow",
            Cell::Blue => "blue",
            Cell::Purple => "purple",
            Cell::Garbage => "garbage",
        }
    }

    /// Single character used by text dumps of the grid
    pub fn as_char(&self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Red => 'R',
            Cell::Green => 'G',
            Cell::Yellow => 'Y',
            Cell::Blue => 'B',
            Cell::Purple => 'P',
            Cell::Garbage => 'O',
        }
    }

    /// Compact numeric code used by snapshots (0 = empty)
    pub fn as_u8(&self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Red => 1,
            Cell::Green => 2,
            Cell::Yellow => 3,
            Cell::Blue => 4,
            Cell::Purple => 5,
            Cell::Garbage => 6,
        }
    }

    pub fn from_u8(code: u8) -> Option<Self> {
        match code {
            0 => Some(Cell::Empty),
            1 => Some(Cell::Red),
            2 => Some(Cell::Green),
            3 => Some(Cell::Yellow),
            4 => Some(Cell::Blue),
            5 => Some(Cell::Purple),
            6 => Some(Cell::Garbage),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Cell::Empty
    }

    /// True for cells that can form a group (non-empty, non-garbage)
    pub fn is_color(&self) -> bool {
        !matches!(self, Cell::Empty | Cell::Garbage)
    }
}

/// Position of the satellite relative to the pivot
///
/// The rotation cycle goes: Up → Right → Down → Left → Up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Satellite above the pivot (spawn orientation)
    #[default]
    Up,
    /// Satellite right of the pivot
    Right,
    /// Satellite below the pivot
    Down,
    /// Satellite left of the pivot
    Left,
}

impl Orientation {
    /// All orientations in clockwise order starting from spawn
    pub const ALL: [Orientation; 4] = [
        Orientation::Up,
        Orientation::Right,
        Orientation::Down,
        Orientation::Left,
    ];

    /// Rotate clockwise (90°)
    ///
    /// # Examples
    ///
    /// ```
    /// use puyo_types::Orientation;
    ///
    /// assert_eq!(Orientation::Up.rotate_cw(), Orientation::Right);
    /// assert_eq!(Orientation::Right.rotate_cw(), Orientation::Down);
    /// assert_eq!(Orientation::Down.rotate_cw(), Orientation::Left);
    /// assert_eq!(Orientation::Left.rotate_cw(), Orientation::Up);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        match self {
            Orientation::Up => Orientation::Right,
            Orientation::Right => Orientation::Down,
            Orientation::Down => Orientation::Left,
            Orientation::Left => Orientation::Up,
        }
    }

    /// Rotate counter-clockwise (-90°)
    ///
    /// # Examples
    ///
    /// ```
    /// use puyo_types::Orientation;
    ///
    /// assert_eq!(Orientation::Up.rotate_ccw(), Orientation::Left);
    /// assert_eq!(Orientation::Left.rotate_ccw(), Orientation::Down);
    /// ```
    pub fn rotate_ccw(&self) -> Self {
        match self {
            Orientation::Up => Orientation::Left,
            Orientation::Left => Orientation::Down,
            Orientation::Down => Orientation::Right,
            Orientation::Right => Orientation::Up,
        }
    }

    /// Satellite offset `(dx, dy)` from the pivot (rows grow downward)
    pub fn offset(&self) -> (i8, i8) {
        match self {
            Orientation::Up => (0, -1),
            Orientation::Right => (1, 0),
            Orientation::Down => (0, 1),
            Orientation::Left => (-1, 0),
        }
    }

    /// Clockwise index (Up = 0, Right = 1, Down = 2, Left = 3)
    pub fn index(&self) -> u8 {
        match self {
            Orientation::Up => 0,
            Orientation::Right => 1,
            Orientation::Down => 2,
            Orientation::Left => 3,
        }
    }

    /// Inverse of [`Orientation::index`], wrapping modulo 4
    pub fn from_index(index: u8) -> Self {
        Self::ALL[(index % 4) as usize]
    }

    /// Number of clockwise quarter turns needed to go from `self` to `target`
    ///
    /// ```
    /// use puyo_types::Orientation;
    ///
    /// assert_eq!(Orientation::Up.cw_turns_to(Orientation::Left), 3);
    /// assert_eq!(Orientation::Left.cw_turns_to(Orientation::Up), 1);
    /// ```
    pub fn cw_turns_to(&self, target: Orientation) -> u8 {
        (target.index() + 4 - self.index()) % 4
    }

    /// Parse orientation from string
    ///
    /// Accepts full names or single letters (case-insensitive):
    /// "up" | "u", "right" | "r", "down" | "d", "left" | "l"
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "u" => Some(Orientation::Up),
            "right" | "r" => Some(Orientation::Right),
            "down" | "d" => Some(Orientation::Down),
            "left" | "l" => Some(Orientation::Left),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Up => "up",
            Orientation::Right => "right",
            Orientation::Down => "down",
            Orientation::Left => "left",
        }
    }
}

/// Colors of one queued pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ColorPair {
    pub pivot: Cell,
    pub satellite: Cell,
}

impl ColorPair {
    pub fn new(pivot: Cell, satellite: Cell) -> Self {
        Self { pivot, satellite }
    }

    /// Both halves share a color, so mirrored placements are interchangeable
    pub fn is_double(&self) -> bool {
        self.pivot == self.satellite
    }
}

/// Game actions that can be applied to a field
///
/// These actions are used by both human input and AI control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameAction {
    /// Move the pair one column left
    MoveLeft,
    /// Move the pair one column right
    MoveRight,
    /// Rotate the satellite 90° clockwise around the pivot
    RotateCw,
    /// Rotate the satellite 90° counter-clockwise around the pivot
    RotateCcw,
    /// Drop and lock the pair, resolve chains, then spawn the next pair
    Drop,
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use puyo_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("drop"), Some(GameAction::Drop));
    /// assert_eq!(GameAction::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "rotatecw" => Some(GameAction::RotateCw),
            "rotateccw" => Some(GameAction::RotateCcw),
            "drop" | "harddrop" => Some(GameAction::Drop),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::RotateCw => "rotateCw",
            GameAction::RotateCcw => "rotateCcw",
            GameAction::Drop => "drop",
        }
    }
}

/// Chain power bonus indexed by chain step - 1 (step 1 gets no bonus)
///
/// Steps beyond the table reuse the last entry.
pub const CHAIN_POWER_TABLE: [u32; 19] = [
    0, 8, 16, 32, 64, 96, 128, 160, 192, 224, 256, 288, 320, 352, 384, 416, 448, 480, 512,
];

/// Color bonus indexed by number of distinct colors erased in one step
///
/// Index 0 is unused (a step with no colors never scores).
pub const COLOR_BONUS_TABLE: [u32; 6] = [0, 0, 3, 6, 12, 24];

/// Group bonus indexed by `group_size - MIN_GROUP_SIZE`
///
/// Groups larger than the table reuse the last entry.
pub const GROUP_BONUS_TABLE: [u32; 8] = [0, 2, 3, 4, 5, 6, 7, 10];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_round_trip_names() {
        for cell in [
            Cell::Empty,
            Cell::Red,
            Cell::Green,
            Cell::Yellow,
            Cell::Blue,
            Cell::Purple,
            Cell::Garbage,
        ] {
            assert_eq!(Cell::from_str(cell.as_str()), Some(cell));
        }
    }

    #[test]
    fn test_cell_classification() {
        assert!(Cell::Empty.is_empty());
        assert!(!Cell::Empty.is_color());
        assert!(!Cell::Garbage.is_color());
        assert!(!Cell::Garbage.is_empty());
        assert!(Cell::Purple.is_color());
        assert!(PRIMARY_COLORS.iter().all(|c| c.is_color()));
        assert!(!PRIMARY_COLORS.contains(&Cell::Purple));
    }

    #[test]
    fn test_orientation_offsets_are_unit_steps() {
        for o in Orientation::ALL {
            let (dx, dy) = o.offset();
            assert_eq!(dx.abs() + dy.abs(), 1);
            assert_eq!(o.rotate_cw().rotate_ccw(), o);
            assert_eq!(Orientation::from_index(o.index()), o);
        }
    }

    #[test]
    fn test_cw_turns_to() {
        assert_eq!(Orientation::Up.cw_turns_to(Orientation::Up), 0);
        assert_eq!(Orientation::Up.cw_turns_to(Orientation::Down), 2);
        assert_eq!(Orientation::Right.cw_turns_to(Orientation::Up), 3);
    }

    #[test]
    fn test_bonus_tables_are_monotonic() {
        assert_eq!(CHAIN_POWER_TABLE[0], 0);
        assert!(CHAIN_POWER_TABLE.windows(2).all(|w| w[0] <= w[1]));
        assert!(COLOR_BONUS_TABLE[1..].windows(2).all(|w| w[0] < w[1]));
        assert_eq!(GROUP_BONUS_TABLE[0], 0);
        assert!(GROUP_BONUS_TABLE.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_pair_double() {
        assert!(ColorPair::new(Cell::Red, Cell::Red).is_double());
        assert!(!ColorPair::new(Cell::Red, Cell::Blue).is_double());
    }
}

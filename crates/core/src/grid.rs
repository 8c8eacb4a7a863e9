//! Grid module - owns the cell storage of one field
//!
//! The grid is a `width x height` array where each cell holds exactly one [`Cell`].
//! Uses a flat vector (row-major, `y * width + x`) so clones for simulation are a single copy.
//! Coordinates: (x, y) where x is the column (0 = leftmost) and y the row (0 = top).
//! The top [`HIDDEN_ROWS`] rows are a hidden buffer for spawning.

use crate::error::GridError;
use crate::types::{Cell, HIDDEN_ROWS, MAX_HEIGHT, MAX_WIDTH};

/// Cell storage for one field
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    width: u8,
    height: u8,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with every cell `Empty`.
    ///
    /// Panics above [`MAX_HEIGHT`] x [`MAX_WIDTH`]: coordinates are `i8`.
    pub fn new(height: u8, width: u8) -> Self {
        assert!(
            height <= MAX_HEIGHT && width <= MAX_WIDTH,
            "grid must be at most {}x{} (got {}x{})",
            MAX_HEIGHT,
            MAX_WIDTH,
            height,
            width
        );
        Self {
            width,
            height,
            cells: vec![Cell::Empty; width as usize * height as usize],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i8, y: i8) -> Option<usize> {
        if self.is_out_of_bounds(x, y) {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Get cell at position (x, y)
    pub fn get(&self, x: i8, y: i8) -> Result<Cell, GridError> {
        self.index(x, y)
            .map(|idx| self.cells[idx])
            .ok_or(GridError::OutOfBounds { x, y })
    }

    /// Set cell at position (x, y)
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> Result<(), GridError> {
        let idx = self.index(x, y).ok_or(GridError::OutOfBounds { x, y })?;
        self.cells[idx] = cell;
        Ok(())
    }

    /// Check if the cell at (x, y) is empty
    pub fn is_empty(&self, x: i8, y: i8) -> Result<bool, GridError> {
        self.get(x, y).map(|cell| cell.is_empty())
    }

    /// Check if position is valid for a falling piece (within bounds and empty)
    pub fn is_valid(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Ok(Cell::Empty))
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Ok(cell) if !cell.is_empty())
    }

    pub fn is_out_of_bounds(&self, x: i8, y: i8) -> bool {
        x < 0 || x >= self.width as i8 || y < 0 || y >= self.height as i8
    }

    /// Column of the death cell (near the horizontal center)
    pub fn death_column(&self) -> i8 {
        ((self.width.max(1) - 1) / 2) as i8
    }

    /// The death cell: first row below the hidden buffer, center column
    pub fn death_cell(&self) -> (i8, i8) {
        (self.death_column(), HIDDEN_ROWS as i8)
    }

    /// Check whether the death cell holds anything
    pub fn is_death_cell_occupied(&self) -> bool {
        let (x, y) = self.death_cell();
        self.is_occupied(x, y)
    }

    /// Lowest empty row at or below `from_y` that a cell falling in column `x` reaches.
    ///
    /// Returns None when `(x, from_y)` itself is out of bounds or occupied.
    pub fn resting_row(&self, x: i8, from_y: i8) -> Option<i8> {
        if !self.is_valid(x, from_y) {
            return None;
        }
        let mut y = from_y;
        while self.is_valid(x, y + 1) {
            y += 1;
        }
        Some(y)
    }

    /// Number of filled cells counted from the floor up to the topmost occupied cell
    pub fn column_height(&self, x: i8) -> u8 {
        (0..self.height as i8)
            .find(|&y| self.is_occupied(x, y))
            .map(|top| self.height - top as u8)
            .unwrap_or(0)
    }

    /// Heights of every column, left to right
    pub fn column_heights(&self) -> Vec<u8> {
        (0..self.width as i8).map(|x| self.column_height(x)).collect()
    }

    pub fn max_height(&self) -> u8 {
        (0..self.width as i8)
            .map(|x| self.column_height(x))
            .max()
            .unwrap_or(0)
    }

    /// Sum of absolute height differences between neighbouring columns
    pub fn bumpiness(&self) -> u32 {
        self.column_heights()
            .windows(2)
            .map(|w| (w[0] as i32 - w[1] as i32).unsigned_abs())
            .sum()
    }

    /// Count of non-empty cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Compact every column downward, keeping the order of cells within a column.
    ///
    /// Two-pointer pass per column, bottom to top, with no allocation.
    /// Returns the number of cells that moved.
    pub fn apply_gravity(&mut self) -> usize {
        let width = self.width as usize;
        let mut moved = 0;

        for x in 0..width {
            let mut write_y = self.height as usize;
            for read_y in (0..self.height as usize).rev() {
                let cell = self.cells[read_y * width + x];
                if cell.is_empty() {
                    continue;
                }
                write_y -= 1;
                if write_y != read_y {
                    self.cells[write_y * width + x] = cell;
                    self.cells[read_y * width + x] = Cell::Empty;
                    moved += 1;
                }
            }
        }

        moved
    }

    /// Write numeric cell codes row by row into `out` (resized to fit)
    pub fn write_u8_grid(&self, out: &mut Vec<Vec<u8>>) {
        let width = self.width as usize;
        out.resize(self.height as usize, Vec::new());
        for (row, chunk) in out.iter_mut().zip(self.cells.chunks(width.max(1))) {
            row.clear();
            row.extend(chunk.iter().map(|c| c.as_u8()));
        }
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire grid
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = Cell::Empty;
        }
    }

    /// Build a grid from text rows, one character per cell (see [`Cell::from_str`]).
    ///
    /// Rows are bottom-aligned: fewer rows than `height` leaves the top empty.
    /// Unknown characters are read as `Empty`.
    pub fn from_rows(height: u8, width: u8, rows: &[&str]) -> Self {
        let mut grid = Self::new(height, width);
        let offset = height as usize - rows.len().min(height as usize);
        for (i, row) in rows.iter().take(height as usize).enumerate() {
            let y = (offset + i) as i8;
            for (x, ch) in row.chars().take(width as usize).enumerate() {
                let cell = Cell::from_str(&ch.to_string()).unwrap_or(Cell::Empty);
                let _ = grid.set(x as i8, y, cell);
            }
        }
        grid
    }

    /// Render as text rows (inverse of [`Grid::from_rows`])
    pub fn to_rows(&self) -> Vec<String> {
        self.cells
            .chunks(self.width.max(1) as usize)
            .map(|row| row.iter().map(|c| c.as_char()).collect())
            .collect()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(crate::types::DEFAULT_HEIGHT, crate::types::DEFAULT_WIDTH)
    }
}

//! Chain module - group detection, erasure and gravity
//!
//! One resolution step:
//! 1. flood-fill same-colored cells (4-adjacency) into groups,
//! 2. erase every group of at least [`MIN_GROUP_SIZE`] cells plus the garbage touching them,
//! 3. collapse every column,
//! 4. score the step.
//!
//! The caller repeats the step until it reports `erased == false`.

use arrayvec::ArrayVec;

use crate::grid::Grid;
use crate::scoring::{calculate_score, ScoreResult};
use crate::types::{Cell, MIN_GROUP_SIZE};

const NEIGHBORS: [(i8, i8); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

/// A connected run of same-colored cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub color: Cell,
    pub cells: Vec<(i8, i8)>,
}

impl Group {
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn is_erasable(&self) -> bool {
        self.cells.len() >= MIN_GROUP_SIZE
    }
}

/// Outcome of one resolution step
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChainInfo {
    /// Whether anything was erased this step
    pub erased: bool,
    /// Chain step after this iteration (1-based once something erased)
    pub chain_step: u32,
    /// Colored cells erased, group by group
    pub erased_cells: Vec<(i8, i8)>,
    /// Garbage cleared as collateral next to erased groups
    pub garbage_cleared: Vec<(i8, i8)>,
    /// Size of each erased group
    pub group_sizes: Vec<usize>,
    /// Distinct colors among the erased groups
    pub colors: ArrayVec<Cell, 5>,
    /// Colored cells erased (garbage excluded)
    pub total_erased: usize,
    pub score: ScoreResult,
}

impl ChainInfo {
    /// A step where nothing qualified
    pub fn quiet(chain_step: u32) -> Self {
        Self {
            chain_step,
            ..Self::default()
        }
    }

    pub fn group_count(&self) -> usize {
        self.group_sizes.len()
    }

    pub fn distinct_colors(&self) -> usize {
        self.colors.len()
    }

    pub fn score_delta(&self) -> u32 {
        self.score.total
    }
}

/// Totals over every step of one resolution cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChainSummary {
    /// Number of erasing steps (0 when nothing popped)
    pub chain_length: u32,
    pub erased_total: usize,
    pub garbage_cleared: usize,
    pub score_gained: u32,
}

impl ChainSummary {
    /// Fold one step into the totals
    pub fn record(&mut self, info: &ChainInfo) {
        if !info.erased {
            return;
        }
        self.chain_length = info.chain_step;
        self.erased_total += info.total_erased;
        self.garbage_cleared += info.garbage_cleared.len();
        self.score_gained = self.score_gained.saturating_add(info.score_delta());
    }
}

/// Find every connected same-color group, erasable or not.
///
/// Garbage and empty cells never start or join a group.
pub fn find_groups(grid: &Grid) -> Vec<Group> {
    let width = grid.width() as usize;
    let height = grid.height() as usize;
    let mut visited = vec![false; width * height];
    let mut groups = Vec::new();
    let mut stack: Vec<(i8, i8)> = Vec::new();

    for y in 0..height as i8 {
        for x in 0..width as i8 {
            let idx = y as usize * width + x as usize;
            if visited[idx] {
                continue;
            }
            let color = match grid.get(x, y) {
                Ok(cell) if cell.is_color() => cell,
                _ => continue,
            };

            visited[idx] = true;
            stack.push((x, y));
            let mut cells = Vec::new();

            while let Some((cx, cy)) = stack.pop() {
                cells.push((cx, cy));
                for (dx, dy) in NEIGHBORS {
                    let (nx, ny) = (cx + dx, cy + dy);
                    if grid.get(nx, ny) != Ok(color) {
                        continue;
                    }
                    let nidx = ny as usize * width + nx as usize;
                    if !visited[nidx] {
                        visited[nidx] = true;
                        stack.push((nx, ny));
                    }
                }
            }

            groups.push(Group { color, cells });
        }
    }

    groups
}

/// Groups large enough to erase
pub fn erasable_groups(grid: &Grid) -> Vec<Group> {
    find_groups(grid)
        .into_iter()
        .filter(Group::is_erasable)
        .collect()
}

/// Run one resolution step on `grid`.
///
/// `chain_step` is the step index before this iteration. When nothing qualifies the grid
/// is left untouched and the returned info carries `erased == false` and the same index.
pub fn resolve_step(grid: &mut Grid, chain_step: u32) -> ChainInfo {
    let groups = erasable_groups(grid);
    if groups.is_empty() {
        return ChainInfo::quiet(chain_step);
    }

    let step = chain_step + 1;
    let mut info = ChainInfo {
        erased: true,
        chain_step: step,
        ..ChainInfo::default()
    };

    for group in &groups {
        for &(x, y) in &group.cells {
            let _ = grid.set(x, y, Cell::Empty);
        }
        info.erased_cells.extend_from_slice(&group.cells);
        info.group_sizes.push(group.len());
        if !info.colors.contains(&group.color) {
            info.colors.push(group.color);
        }
    }
    info.total_erased = info.erased_cells.len();

    // Garbage touching any erased cell goes with it.
    for &(x, y) in &info.erased_cells {
        for (dx, dy) in NEIGHBORS {
            let (nx, ny) = (x + dx, y + dy);
            if grid.get(nx, ny) == Ok(Cell::Garbage) {
                let _ = grid.set(nx, ny, Cell::Empty);
                info.garbage_cleared.push((nx, ny));
            }
        }
    }

    grid.apply_gravity();

    info.score = calculate_score(
        info.total_erased,
        step,
        info.distinct_colors(),
        &info.group_sizes,
    );
    info
}

//! Grid module - the board and the pure move engine
//!
//! The grid is a 4x4 matrix of `u32` cells stored as a flat row-major array.
//! Coordinates: (row, col) where row 0 is the top and col 0 is the left edge.
//!
//! All four move directions are implemented with a single primitive,
//! [`slide_line`], by rotating the grid clockwise into "slide left"
//! orientation, sliding every row, and rotating back.

use arrayvec::ArrayVec;

use crate::error::GridError;
use crate::types::{can_merge, is_valid_cell, Direction, BLOCKER, CELL_COUNT, EMPTY, GRID_SIZE};

/// One row (or a rotated column) of the grid
pub type Line = [u32; GRID_SIZE];

/// The game grid - 4 rows x 4 columns using flat array storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid {
    /// Flat array of cells, row-major order (row * GRID_SIZE + col)
    cells: [u32; CELL_COUNT],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            cells: [EMPTY; CELL_COUNT],
        }
    }

    /// Build a grid from rows, rejecting any out-of-domain cell value
    pub fn from_rows(rows: [Line; GRID_SIZE]) -> Result<Self, GridError> {
        let mut grid = Self::new();
        for (r, row) in rows.iter().enumerate() {
            grid.set_row(r, *row);
        }
        grid.validate()?;
        Ok(grid)
    }

    #[inline(always)]
    fn index(row: usize, col: usize) -> Option<usize> {
        if row >= GRID_SIZE || col >= GRID_SIZE {
            return None;
        }
        Some(row * GRID_SIZE + col)
    }

    /// Get cell at (row, col). Returns None if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<u32> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col). Returns false if out of bounds
    pub fn set(&mut self, row: usize, col: usize, value: u32) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = value;
                true
            }
            None => false,
        }
    }

    pub fn row(&self, row: usize) -> Line {
        let mut line = [EMPTY; GRID_SIZE];
        line.copy_from_slice(&self.cells[row * GRID_SIZE..(row + 1) * GRID_SIZE]);
        line
    }

    pub fn set_row(&mut self, row: usize, line: Line) {
        self.cells[row * GRID_SIZE..(row + 1) * GRID_SIZE].copy_from_slice(&line);
    }

    /// Copy out as nested rows (for renderers and snapshots)
    pub fn rows(&self) -> [Line; GRID_SIZE] {
        let mut out = [[EMPTY; GRID_SIZE]; GRID_SIZE];
        for (r, row) in out.iter_mut().enumerate() {
            *row = self.row(r);
        }
        out
    }

    /// Empty cell coordinates in row-major order
    pub fn empty_cells(&self) -> ArrayVec<(usize, usize), CELL_COUNT> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &v)| v == EMPTY)
            .map(|(i, _)| (i / GRID_SIZE, i % GRID_SIZE))
            .collect()
    }

    pub fn is_full(&self) -> bool {
        !self.cells.contains(&EMPTY)
    }

    /// Largest tile on the grid (0 when there are no tiles). Blockers are ignored.
    pub fn highest_tile(&self) -> u32 {
        self.cells
            .iter()
            .copied()
            .filter(|&v| v != BLOCKER)
            .max()
            .unwrap_or(EMPTY)
    }

    pub fn count_blockers(&self) -> usize {
        self.cells.iter().filter(|&&v| v == BLOCKER).count()
    }

    /// Check the cell invariant, reporting the first offending cell
    pub fn validate(&self) -> Result<(), GridError> {
        match self.cells.iter().position(|&v| !is_valid_cell(v)) {
            Some(i) => Err(GridError::InvalidCell {
                row: i / GRID_SIZE,
                col: i % GRID_SIZE,
                value: self.cells[i],
            }),
            None => Ok(()),
        }
    }

    /// Clear the entire grid
    pub fn clear(&mut self) {
        self.cells = [EMPTY; CELL_COUNT];
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of sliding a single line left
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineSlide {
    pub line: Line,
    pub merged: bool,
    pub score_delta: u32,
}

/// Result of applying a move to a whole grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    pub grid: Grid,
    /// False when no cell changed (the move is a no-op)
    pub moved: bool,
    pub merged: bool,
    pub score_delta: u32,
}

/// Slide a line left, merging each equal adjacent tile pair at most once.
///
/// Blockers compact like tiles but never merge.
///
/// ```
/// use water_2048_core::grid::slide_line;
///
/// let s = slide_line([2, 2, 2, 2]);
/// assert_eq!(s.line, [4, 4, 0, 0]);
/// assert_eq!(s.score_delta, 8);
/// ```
pub fn slide_line(line: Line) -> LineSlide {
    let mut packed: ArrayVec<u32, GRID_SIZE> =
        line.iter().copied().filter(|&v| v != EMPTY).collect();

    let mut merged = false;
    let mut score_delta: u32 = 0;

    // Single sweep; a freshly merged cell is skipped so it cannot chain.
    let mut i = 0;
    while i + 1 < packed.len() {
        let v = packed[i];
        if can_merge(v) && v == packed[i + 1] {
            packed[i] = v * 2;
            packed[i + 1] = EMPTY;
            score_delta += v * 2;
            merged = true;
            i += 2;
        } else {
            i += 1;
        }
    }

    let mut out = [EMPTY; GRID_SIZE];
    for (slot, v) in out
        .iter_mut()
        .zip(packed.into_iter().filter(|&v| v != EMPTY))
    {
        *slot = v;
    }

    LineSlide {
        line: out,
        merged,
        score_delta,
    }
}

/// Rotate 90° clockwise: the cell at (row, col) moves to (col, N-1-row).
pub fn rotate_clockwise(grid: &Grid) -> Grid {
    let mut out = Grid::new();
    for r in 0..GRID_SIZE {
        for c in 0..GRID_SIZE {
            out.cells[c * GRID_SIZE + (GRID_SIZE - 1 - r)] = grid.cells[r * GRID_SIZE + c];
        }
    }
    out
}

/// Compute the grid after moving in `direction`. The input is not modified.
pub fn apply_move(grid: &Grid, direction: Direction) -> MoveResult {
    let turns = direction.rotations();

    let mut work = *grid;
    for _ in 0..turns {
        work = rotate_clockwise(&work);
    }

    let mut merged = false;
    let mut score_delta: u32 = 0;
    for r in 0..GRID_SIZE {
        let slide = slide_line(work.row(r));
        work.set_row(r, slide.line);
        merged |= slide.merged;
        score_delta += slide.score_delta;
    }

    for _ in 0..(4 - turns) % 4 {
        work = rotate_clockwise(&work);
    }

    MoveResult {
        moved: work != *grid,
        grid: work,
        merged,
        score_delta,
    }
}

/// True if any empty cell exists or two equal tiles are adjacent.
///
/// Checking right and below of every cell covers each adjacent pair once.
pub fn has_any_move(grid: &Grid) -> bool {
    for r in 0..GRID_SIZE {
        for c in 0..GRID_SIZE {
            let v = grid.cells[r * GRID_SIZE + c];
            if v == EMPTY {
                return true;
            }
            if !can_merge(v) {
                continue;
            }
            if r + 1 < GRID_SIZE && grid.cells[(r + 1) * GRID_SIZE + c] == v {
                return true;
            }
            if c + 1 < GRID_SIZE && grid.cells[r * GRID_SIZE + c + 1] == v {
                return true;
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LARGEST_TILE;

    fn grid(rows: [Line; GRID_SIZE]) -> Grid {
        Grid::from_rows(rows).unwrap()
    }

    #[test]
    fn test_grid_index_calculation() {
        assert_eq!(Grid::index(0, 0), Some(0));
        assert_eq!(Grid::index(0, 3), Some(3));
        assert_eq!(Grid::index(1, 0), Some(4));
        assert_eq!(Grid::index(3, 3), Some(15));
        assert_eq!(Grid::index(4, 0), None);
        assert_eq!(Grid::index(0, 4), None);
    }

    #[test]
    fn test_slide_merges_each_tile_once() {
        assert_eq!(slide_line([2, 2, 2, 2]).line, [4, 4, 0, 0]);
        assert_eq!(slide_line([4, 4, 8, 0]).line, [8, 8, 0, 0]);
        assert_eq!(slide_line([2, 2, 4, 0]).line, [4, 4, 0, 0]);
    }

    #[test]
    fn test_slide_compacts_gaps() {
        let s = slide_line([0, 2, 0, 4]);
        assert_eq!(s.line, [2, 4, 0, 0]);
        assert!(!s.merged);
        assert_eq!(s.score_delta, 0);

        let s = slide_line([2, 0, 0, 2]);
        assert_eq!(s.line, [4, 0, 0, 0]);
        assert!(s.merged);
        assert_eq!(s.score_delta, 4);
    }

    #[test]
    fn test_slide_three_equal_merges_leftmost_pair() {
        let s = slide_line([2, 2, 2, 0]);
        assert_eq!(s.line, [4, 2, 0, 0]);
        assert_eq!(s.score_delta, 4);
    }

    #[test]
    fn test_slide_blockers_compact_but_never_merge() {
        let s = slide_line([BLOCKER, 0, BLOCKER, 0]);
        assert_eq!(s.line, [BLOCKER, BLOCKER, 0, 0]);
        assert!(!s.merged);
        assert_eq!(s.score_delta, 0);

        let s = slide_line([2, BLOCKER, 2, 0]);
        assert_eq!(s.line, [2, BLOCKER, 2, 0]);
        assert!(!s.merged);
    }

    #[test]
    fn test_largest_tiles_stay_put() {
        let s = slide_line([LARGEST_TILE, LARGEST_TILE, 0, 0]);
        assert_eq!(s.line, [LARGEST_TILE, LARGEST_TILE, 0, 0]);
        assert!(!s.merged);
        assert_eq!(s.score_delta, 0);

        let s = slide_line([LARGEST_TILE / 2, LARGEST_TILE / 2, 0, 0]);
        assert_eq!(s.line, [LARGEST_TILE, 0, 0, 0]);

        // A full grid whose only equal pair is two largest tiles is stuck.
        let g = grid([
            [LARGEST_TILE, LARGEST_TILE, 2, 4],
            [4, 2, 4, 2],
            [2, 4, 2, 4],
            [4, 2, 4, 2],
        ]);
        assert!(!has_any_move(&g));
        for dir in Direction::ALL {
            let r = apply_move(&g, dir);
            assert!(!r.moved);
            assert!(r.grid.validate().is_ok());
        }
    }

    #[test]
    fn test_rotate_clockwise_moves_top_left_to_top_right() {
        let mut g = Grid::new();
        g.set(0, 0, 2);
        let r = rotate_clockwise(&g);
        assert_eq!(r.get(0, 3), Some(2));
        assert_eq!(r.get(0, 0), Some(EMPTY));
    }

    #[test]
    fn test_apply_move_each_direction() {
        let g = grid([[0, 0, 0, 0], [0, 2, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);

        let left = apply_move(&g, Direction::Left);
        assert_eq!(left.grid.get(1, 0), Some(2));

        let right = apply_move(&g, Direction::Right);
        assert_eq!(right.grid.get(1, 3), Some(2));

        let up = apply_move(&g, Direction::Up);
        assert_eq!(up.grid.get(0, 1), Some(2));

        let down = apply_move(&g, Direction::Down);
        assert_eq!(down.grid.get(3, 1), Some(2));

        for r in [left, right, up, down] {
            assert!(r.moved);
            assert!(!r.merged);
        }
    }

    #[test]
    fn test_apply_move_vertical_merge() {
        let g = grid([[2, 0, 0, 0], [2, 0, 0, 0], [4, 0, 0, 0], [4, 0, 0, 0]]);

        let up = apply_move(&g, Direction::Up);
        assert_eq!(up.grid.row(0), [4, 0, 0, 0]);
        assert_eq!(up.grid.row(1), [8, 0, 0, 0]);
        assert_eq!(up.score_delta, 12);

        let down = apply_move(&g, Direction::Down);
        assert_eq!(down.grid.row(3), [8, 0, 0, 0]);
        assert_eq!(down.grid.row(2), [4, 0, 0, 0]);
    }

    #[test]
    fn test_has_any_move_ignores_blocker_pairs() {
        let g = grid([
            [2, 4, 2, 4],
            [4, 2, 4, 2],
            [2, 4, 2, 4],
            [BLOCKER, BLOCKER, 4, 2],
        ]);
        assert!(!has_any_move(&g));
    }

    #[test]
    fn test_validate_reports_first_bad_cell() {
        let mut g = Grid::new();
        g.set(2, 1, 6);
        assert_eq!(
            g.validate(),
            Err(GridError::InvalidCell {
                row: 2,
                col: 1,
                value: 6
            })
        );
    }

    #[test]
    fn test_empty_cells_row_major() {
        let g = grid([[2, 0, 2, 2], [2, 2, 2, 2], [2, 2, 2, 2], [2, 2, 2, 0]]);
        let empty = g.empty_cells();
        assert_eq!(empty.as_slice(), &[(0, 1), (3, 3)]);
    }

    #[test]
    fn test_highest_tile_skips_blockers() {
        let g = grid([[BLOCKER, 0, 0, 0], [0, 64, 0, 0], [0, 0, 8, 0], [0, 0, 0, 0]]);
        assert_eq!(g.highest_tile(), 64);
        assert_eq!(g.count_blockers(), 1);
    }
}

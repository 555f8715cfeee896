//! The [`Grid`] type: an N×N array of [`Cell`]s.
//!
//! The grid owns its cells exclusively; callers address them by [`Pos`] and
//! never hold references across edits. Cells are stored row-major, so the
//! flat index of `(row, col)` is `row * size + col`.

use std::fmt;

use crate::cell::{Cell, CellState};
use crate::geom::Pos;

/// Errors raised when constructing a [`Grid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// The requested side length was not in `1..=Grid::MAX_SIZE`.
    InvalidSize(i32),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize(n) => write!(
                f,
                "grid: invalid size {n}, must be between 1 and {}",
                Grid::MAX_SIZE
            ),
        }
    }
}

impl std::error::Error for GridError {}

/// A square grid of tagged cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: i32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Largest accepted side length. Flat indices and terminal coordinates
    /// stay well inside `i32` and `u16` below it.
    pub const MAX_SIZE: i32 = 1024;

    /// Build a `size`×`size` grid of empty cells.
    pub fn new(size: i32) -> Result<Self, GridError> {
        if !(1..=Self::MAX_SIZE).contains(&size) {
            return Err(GridError::InvalidSize(size));
        }
        let cells = (0..size)
            .flat_map(|row| (0..size).map(move |col| Cell::new(Pos::new(row, col))))
            .collect();
        Ok(Self { size, cells })
    }

    /// Side length of the grid.
    #[inline]
    pub fn size(&self) -> i32 {
        self.size
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`: a grid has at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `p` lies on the grid.
    #[inline]
    pub fn contains(&self, p: Pos) -> bool {
        p.row >= 0 && p.col >= 0 && p.row < self.size && p.col < self.size
    }

    /// Convert a position to a flat index. Returns `None` if off the grid.
    #[inline]
    pub fn idx(&self, p: Pos) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some((p.row * self.size + p.col) as usize)
    }

    /// Convert a flat index back to a position.
    #[inline]
    pub fn pos(&self, idx: usize) -> Pos {
        let n = self.size as usize;
        Pos::new((idx / n) as i32, (idx % n) as i32)
    }

    /// The cell at `p`, or `None` if off the grid.
    #[inline]
    pub fn cell(&self, p: Pos) -> Option<&Cell> {
        self.idx(p).map(|i| &self.cells[i])
    }

    /// The state tag at `p`, or `None` if off the grid.
    #[inline]
    pub fn state(&self, p: Pos) -> Option<CellState> {
        self.cell(p).map(|c| c.state)
    }

    /// Set the state tag at `p`. Does nothing if out of bounds.
    #[inline]
    pub fn set_state(&mut self, p: Pos, state: CellState) {
        if let Some(i) = self.idx(p) {
            self.cells[i].state = state;
        }
    }

    /// Set the state tag by flat index.
    #[inline]
    pub fn set_state_at(&mut self, idx: usize, state: CellState) {
        self.cells[idx].state = state;
    }

    /// Row-major iterator over every cell.
    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Mutable row-major iterator over every cell.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Cell> {
        self.cells.iter_mut()
    }

    /// Count cells carrying `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|c| c.state == state).count()
    }

    /// Position of the first cell (row-major) carrying `state`.
    pub fn find(&self, state: CellState) -> Option<Pos> {
        self.cells.iter().find(|c| c.state == state).map(Cell::pos)
    }

    /// Append the passable cardinal neighbours of `p` into `buf`, in the
    /// order down, up, right, left. Barriers and off-grid positions are
    /// skipped. The caller clears `buf` before calling.
    pub fn neighbors_into(&self, p: Pos, buf: &mut Vec<Pos>) {
        for n in p.neighbors_4() {
            let Some(i) = self.idx(n) else {
                continue;
            };
            if !self.cells[i].is_barrier() {
                buf.push(n);
            }
        }
    }

    /// Passable cardinal neighbours of `p` in the order down, up, right, left.
    ///
    /// The result reflects the barrier layout at the time of the call; it is
    /// not cached.
    pub fn neighbors_of(&self, p: Pos) -> Vec<Pos> {
        let mut buf = Vec::with_capacity(4);
        self.neighbors_into(p, &mut buf);
        buf
    }

    /// Set every cell to [`CellState::Empty`].
    pub fn reset(&mut self) {
        for c in &mut self.cells {
            c.reset();
        }
    }

    /// Revert Open, Closed and Path tags to Empty, keeping endpoints and
    /// barriers. Returns the number of cells cleared.
    pub fn clear_search(&mut self) -> usize {
        let mut cleared = 0;
        for c in &mut self.cells {
            if c.state.is_search_mark() {
                c.reset();
                cleared += 1;
            }
        }
        cleared
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_size() {
        assert_eq!(Grid::new(0), Err(GridError::InvalidSize(0)));
        assert_eq!(Grid::new(-4), Err(GridError::InvalidSize(-4)));
    }

    #[test]
    fn rejects_oversized_grid() {
        let n = Grid::MAX_SIZE + 1;
        assert_eq!(Grid::new(n), Err(GridError::InvalidSize(n)));
        assert_eq!(Grid::new(46341), Err(GridError::InvalidSize(46341)));
        let g = Grid::new(Grid::MAX_SIZE).unwrap();
        let last = Pos::new(Grid::MAX_SIZE - 1, Grid::MAX_SIZE - 1);
        assert_eq!(g.idx(last), Some(g.len() - 1));
    }

    #[test]
    fn cells_match_their_positions() {
        let g = Grid::new(4).unwrap();
        assert_eq!(g.len(), 16);
        for (i, c) in g.iter().enumerate() {
            assert_eq!(g.idx(c.pos()), Some(i));
            assert_eq!(g.pos(i), c.pos());
            assert_eq!(c.state, CellState::Empty);
        }
    }

    #[test]
    fn idx_rejects_out_of_bounds() {
        let g = Grid::new(3).unwrap();
        assert_eq!(g.idx(Pos::new(-1, 0)), None);
        assert_eq!(g.idx(Pos::new(0, 3)), None);
        assert_eq!(g.idx(Pos::new(2, 2)), Some(8));
        assert_eq!(g.state(Pos::new(3, 0)), None);
    }

    #[test]
    fn neighbor_counts_corner_edge_interior() {
        let g = Grid::new(5).unwrap();
        assert_eq!(g.neighbors_of(Pos::new(0, 0)).len(), 2);
        assert_eq!(g.neighbors_of(Pos::new(0, 2)).len(), 3);
        assert_eq!(g.neighbors_of(Pos::new(4, 2)).len(), 3);
        assert_eq!(g.neighbors_of(Pos::new(2, 2)).len(), 4);
    }

    #[test]
    fn neighbors_skip_barriers_and_keep_order() {
        let mut g = Grid::new(5).unwrap();
        let p = Pos::new(2, 2);
        assert_eq!(
            g.neighbors_of(p),
            vec![
                Pos::new(3, 2),
                Pos::new(1, 2),
                Pos::new(2, 3),
                Pos::new(2, 1)
            ]
        );
        g.set_state(Pos::new(1, 2), CellState::Barrier);
        g.set_state(Pos::new(2, 1), CellState::Barrier);
        assert_eq!(g.neighbors_of(p), vec![Pos::new(3, 2), Pos::new(2, 3)]);
    }

    #[test]
    fn neighbors_reflect_edits() {
        let mut g = Grid::new(3).unwrap();
        g.set_state(Pos::new(1, 0), CellState::Barrier);
        assert_eq!(g.neighbors_of(Pos::new(0, 0)), vec![Pos::new(0, 1)]);
        g.set_state(Pos::new(1, 0), CellState::Empty);
        assert_eq!(g.neighbors_of(Pos::new(0, 0)).len(), 2);
    }

    #[test]
    fn set_state_out_of_bounds_is_noop() {
        let mut g = Grid::new(2).unwrap();
        let before = g.clone();
        g.set_state(Pos::new(5, 5), CellState::Barrier);
        assert_eq!(g, before);
    }

    #[test]
    fn reset_and_clear_search() {
        let mut g = Grid::new(3).unwrap();
        g.set_state(Pos::new(0, 0), CellState::Start);
        g.set_state(Pos::new(2, 2), CellState::End);
        g.set_state(Pos::new(1, 1), CellState::Barrier);
        g.set_state(Pos::new(0, 1), CellState::Open);
        g.set_state(Pos::new(1, 0), CellState::Closed);
        g.set_state(Pos::new(2, 1), CellState::Path);

        assert_eq!(g.clear_search(), 3);
        assert_eq!(g.count(CellState::Empty), 6);
        assert_eq!(g.find(CellState::Start), Some(Pos::new(0, 0)));
        assert_eq!(g.find(CellState::End), Some(Pos::new(2, 2)));
        assert_eq!(g.count(CellState::Barrier), 1);

        g.reset();
        assert_eq!(g.count(CellState::Empty), 9);
    }
}

//! The [`Cell`] type: one grid unit with a single state tag.

use crate::geom::Pos;

/// The editing/search tag of a cell. Exactly one applies at any time.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    #[default]
    Empty,
    Start,
    End,
    Barrier,
    /// Discovered by the search and currently on the frontier.
    Open,
    /// Expanded by the search.
    Closed,
    /// Part of the reconstructed path.
    Path,
}

impl CellState {
    /// Whether the tag was written by a search run (Open, Closed or Path).
    #[inline]
    pub const fn is_search_mark(self) -> bool {
        matches!(self, Self::Open | Self::Closed | Self::Path)
    }

    /// Whether the tag is one of the two endpoints.
    #[inline]
    pub const fn is_endpoint(self) -> bool {
        matches!(self, Self::Start | Self::End)
    }
}

/// A grid cell: its fixed position and its current state tag.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pos: Pos,
    pub state: CellState,
}

impl Cell {
    /// Create an empty cell at `pos`.
    #[inline]
    pub const fn new(pos: Pos) -> Self {
        Self {
            pos,
            state: CellState::Empty,
        }
    }

    /// The cell's position. Fixed for the lifetime of the cell.
    #[inline]
    pub const fn pos(&self) -> Pos {
        self.pos
    }

    #[inline]
    pub const fn row(&self) -> i32 {
        self.pos.row
    }

    #[inline]
    pub const fn col(&self) -> i32 {
        self.pos.col
    }

    #[inline]
    pub fn is_barrier(&self) -> bool {
        self.state == CellState::Barrier
    }

    /// Reset the tag to [`CellState::Empty`].
    #[inline]
    pub fn reset(&mut self) {
        self.state = CellState::Empty;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_cell_is_empty() {
        let c = Cell::new(Pos::new(2, 3));
        assert_eq!(c.state, CellState::Empty);
        assert_eq!((c.row(), c.col()), (2, 3));
    }

    #[test]
    fn search_marks() {
        assert!(CellState::Open.is_search_mark());
        assert!(CellState::Closed.is_search_mark());
        assert!(CellState::Path.is_search_mark());
        assert!(!CellState::Barrier.is_search_mark());
        assert!(CellState::Start.is_endpoint());
        assert!(!CellState::Empty.is_endpoint());
    }
}

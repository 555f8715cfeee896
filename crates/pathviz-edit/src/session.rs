//! Pointer-driven grid editing.
//!
//! The first left click places the start, the second the end; later left
//! clicks paint barriers and keep painting while the button is held. A right
//! click erases (start and end included) and keeps erasing while dragged.
//! Drags skip the cell touched last so holding the pointer still writes once.

use pathviz_core::{CellState, Grid, GridError, Pos};

use crate::error::EditError;
use crate::obstacles;

/// What a held pointer button does to cells it passes over.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DragMode {
    Barrier,
    Erase,
}

/// Observable phase of a [`GridEditSession`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EditPhase {
    /// No start placed yet; the next left click places it.
    NoStart,
    /// Start placed, end missing; the next left click places the end.
    HasStart,
    /// Both endpoints placed; left clicks paint barriers.
    HasStartEnd,
    /// A pointer button is held and dragging.
    Painting(DragMode),
}

/// Editing state over an owned [`Grid`].
///
/// The session is the only writer of Start and End tags, so at most one cell
/// carries each.
#[derive(Debug, Clone)]
pub struct GridEditSession {
    grid: Grid,
    start: Option<Pos>,
    end: Option<Pos>,
    drag: Option<DragMode>,
    last: Option<Pos>,
}

impl GridEditSession {
    /// Start a session on a fresh `size`×`size` grid.
    pub fn new(size: i32) -> Result<Self, GridError> {
        Ok(Self::with_grid(Grid::new(size)?))
    }

    /// Start a session on an existing grid, adopting its first Start and End
    /// tags. Any further Start/End tags are cleared.
    pub fn with_grid(mut grid: Grid) -> Self {
        let start = grid.find(CellState::Start);
        let end = grid.find(CellState::End);
        for cell in grid.iter_mut() {
            let stray = match cell.state {
                CellState::Start => Some(cell.pos()) != start,
                CellState::End => Some(cell.pos()) != end,
                _ => false,
            };
            if stray {
                cell.reset();
            }
        }
        Self {
            grid,
            start,
            end,
            drag: None,
            last: None,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn start(&self) -> Option<Pos> {
        self.start
    }

    pub fn end(&self) -> Option<Pos> {
        self.end
    }

    /// Both endpoints, if placed.
    pub fn endpoints(&self) -> Option<(Pos, Pos)> {
        self.start.zip(self.end)
    }

    pub fn drag_mode(&self) -> Option<DragMode> {
        self.drag
    }

    pub fn phase(&self) -> EditPhase {
        match (self.drag, self.start, self.end) {
            (Some(mode), _, _) => EditPhase::Painting(mode),
            (None, None, _) => EditPhase::NoStart,
            (None, Some(_), None) => EditPhase::HasStart,
            (None, Some(_), Some(_)) => EditPhase::HasStartEnd,
        }
    }

    /// Primary button pressed on `p`.
    pub fn left_click(&mut self, p: Pos) {
        if !self.grid.contains(p) {
            return;
        }
        if self.start.is_none() && self.end != Some(p) {
            self.grid.set_state(p, CellState::Start);
            self.start = Some(p);
            self.drag = None;
            self.last = None;
            log::trace!("edit: start at {p}");
        } else if self.end.is_none() && self.start != Some(p) {
            self.grid.set_state(p, CellState::End);
            self.end = Some(p);
            self.drag = None;
            self.last = None;
            log::trace!("edit: end at {p}");
        } else {
            self.paint(p);
            self.drag = Some(DragMode::Barrier);
            self.last = Some(p);
        }
    }

    /// Secondary button pressed on `p`: erase it and begin an erase drag.
    pub fn right_click(&mut self, p: Pos) {
        if !self.grid.contains(p) {
            return;
        }
        self.erase(p);
        self.drag = Some(DragMode::Erase);
        self.last = Some(p);
    }

    /// Pointer moved onto `p` while a button may be held.
    ///
    /// Ignored when no drag is active or when `p` is the cell touched last.
    pub fn drag(&mut self, p: Pos) {
        let Some(mode) = self.drag else {
            return;
        };
        if !self.grid.contains(p) || self.last == Some(p) {
            return;
        }
        match mode {
            DragMode::Barrier => self.paint(p),
            DragMode::Erase => self.erase(p),
        }
        self.last = Some(p);
    }

    /// Pointer button released: end any drag.
    pub fn release_drag(&mut self) {
        self.drag = None;
        self.last = None;
    }

    /// Discard every edit: all cells Empty, no endpoints, no drag.
    pub fn hard_reset(&mut self) {
        self.grid.reset();
        self.start = None;
        self.end = None;
        self.release_drag();
        log::debug!("edit: hard reset");
    }

    /// Clear the board. Same effect as [`hard_reset`](Self::hard_reset).
    pub fn soft_clear(&mut self) {
        self.hard_reset();
    }

    /// Scatter random barriers; see [`obstacles::randomize`].
    ///
    /// Without protection the endpoints are wiped along with everything else,
    /// so both slots become unset.
    pub fn randomize_obstacles(
        &mut self,
        density: f64,
        protect_start_end: bool,
        seed: Option<u64>,
    ) -> Result<usize, EditError> {
        let placed = obstacles::randomize(&mut self.grid, density, protect_start_end, seed)?;
        if !protect_start_end {
            self.start = None;
            self.end = None;
        }
        self.release_drag();
        Ok(placed)
    }

    fn paint(&mut self, p: Pos) {
        if self.start == Some(p) || self.end == Some(p) {
            return;
        }
        self.grid.set_state(p, CellState::Barrier);
    }

    fn erase(&mut self, p: Pos) {
        if self.start == Some(p) {
            self.start = None;
        }
        if self.end == Some(p) {
            self.end = None;
        }
        self.grid.set_state(p, CellState::Empty);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> GridEditSession {
        GridEditSession::new(5).unwrap()
    }

    fn assert_single_endpoints(s: &GridEditSession) {
        assert!(s.grid().count(CellState::Start) <= 1);
        assert!(s.grid().count(CellState::End) <= 1);
        assert_eq!(s.grid().find(CellState::Start), s.start());
        assert_eq!(s.grid().find(CellState::End), s.end());
    }

    #[test]
    fn first_clicks_place_start_then_end() {
        let mut s = session();
        assert_eq!(s.phase(), EditPhase::NoStart);

        s.left_click(Pos::new(0, 0));
        assert_eq!(s.phase(), EditPhase::HasStart);
        assert_eq!(s.start(), Some(Pos::new(0, 0)));

        // Clicking the start again does not make it the end.
        s.left_click(Pos::new(0, 0));
        assert_eq!(s.end(), None);
        assert_eq!(s.phase(), EditPhase::Painting(DragMode::Barrier));
        s.release_drag();
        assert_eq!(s.grid().state(Pos::new(0, 0)), Some(CellState::Start));

        s.left_click(Pos::new(4, 4));
        assert_eq!(s.phase(), EditPhase::HasStartEnd);
        assert_eq!(s.endpoints(), Some((Pos::new(0, 0), Pos::new(4, 4))));
        assert_single_endpoints(&s);
    }

    #[test]
    fn third_click_paints_and_drags() {
        let mut s = session();
        s.left_click(Pos::new(0, 0));
        s.left_click(Pos::new(4, 4));

        s.left_click(Pos::new(2, 0));
        assert_eq!(s.phase(), EditPhase::Painting(DragMode::Barrier));
        for col in 1..5 {
            s.drag(Pos::new(2, col));
        }
        s.drag(Pos::new(4, 4));
        s.release_drag();

        assert_eq!(s.phase(), EditPhase::HasStartEnd);
        assert_eq!(s.grid().count(CellState::Barrier), 5);
        assert_eq!(s.grid().state(Pos::new(4, 4)), Some(CellState::End));

        // Motion without a held button does nothing.
        s.drag(Pos::new(3, 3));
        assert_eq!(s.grid().state(Pos::new(3, 3)), Some(CellState::Empty));
    }

    #[test]
    fn drag_skips_last_touched_cell() {
        let mut s = session();
        s.left_click(Pos::new(0, 0));
        s.left_click(Pos::new(4, 4));
        s.left_click(Pos::new(1, 1));

        // Simulate an outside write; a repeated drag over the same cell
        // must not re-touch it.
        s.grid_mut().set_state(Pos::new(1, 1), CellState::Open);
        s.drag(Pos::new(1, 1));
        assert_eq!(s.grid().state(Pos::new(1, 1)), Some(CellState::Open));

        s.drag(Pos::new(1, 2));
        s.drag(Pos::new(1, 1));
        assert_eq!(s.grid().state(Pos::new(1, 1)), Some(CellState::Barrier));
    }

    #[test]
    fn right_click_erases_and_unsets_endpoints() {
        let mut s = session();
        s.left_click(Pos::new(0, 0));
        s.left_click(Pos::new(4, 4));
        s.left_click(Pos::new(2, 2));
        s.release_drag();

        s.right_click(Pos::new(2, 2));
        assert_eq!(s.phase(), EditPhase::Painting(DragMode::Erase));
        assert_eq!(s.grid().state(Pos::new(2, 2)), Some(CellState::Empty));

        s.drag(Pos::new(0, 0));
        s.release_drag();
        assert_eq!(s.start(), None);
        assert_eq!(s.end(), Some(Pos::new(4, 4)));
        assert_eq!(s.phase(), EditPhase::NoStart);
        assert_single_endpoints(&s);

        // The next left click refills the start slot.
        s.left_click(Pos::new(1, 3));
        assert_eq!(s.start(), Some(Pos::new(1, 3)));
        assert_eq!(s.phase(), EditPhase::HasStartEnd);
        assert_single_endpoints(&s);
    }

    #[test]
    fn left_click_on_end_without_start_paints_nothing() {
        let mut s = session();
        s.left_click(Pos::new(0, 0));
        s.left_click(Pos::new(1, 1));
        s.right_click(Pos::new(0, 0));
        s.release_drag();

        s.left_click(Pos::new(1, 1));
        assert_eq!(s.start(), None);
        assert_eq!(s.grid().state(Pos::new(1, 1)), Some(CellState::End));
        assert_single_endpoints(&s);
    }

    #[test]
    fn clicks_outside_are_ignored() {
        let mut s = session();
        s.left_click(Pos::new(-1, 0));
        s.right_click(Pos::new(0, 9));
        assert_eq!(s.phase(), EditPhase::NoStart);
        assert_eq!(s.grid().count(CellState::Empty), 25);
    }

    #[test]
    fn resets_clear_everything() {
        let mut s = session();
        s.left_click(Pos::new(0, 0));
        s.left_click(Pos::new(4, 4));
        s.left_click(Pos::new(2, 2));
        s.hard_reset();
        assert_eq!(s.phase(), EditPhase::NoStart);
        assert_eq!(s.end(), None);
        assert_eq!(s.grid().count(CellState::Empty), 25);

        s.left_click(Pos::new(1, 1));
        s.soft_clear();
        assert_eq!(s.start(), None);
        assert_eq!(s.grid().count(CellState::Empty), 25);
    }

    #[test]
    fn randomize_keeps_endpoints_in_sync() {
        let mut s = session();
        s.left_click(Pos::new(0, 0));
        s.left_click(Pos::new(4, 4));

        s.randomize_obstacles(1.0, true, Some(5)).unwrap();
        assert_eq!(s.grid().count(CellState::Barrier), 23);
        assert_single_endpoints(&s);

        s.randomize_obstacles(0.0, false, Some(5)).unwrap();
        assert_eq!(s.phase(), EditPhase::NoStart);
        assert_single_endpoints(&s);

        assert_eq!(
            s.randomize_obstacles(2.0, true, None),
            Err(EditError::InvalidDensity(2.0))
        );
    }

    #[test]
    fn with_grid_drops_duplicate_endpoints() {
        let mut g = Grid::new(3).unwrap();
        g.set_state(Pos::new(0, 0), CellState::Start);
        g.set_state(Pos::new(0, 1), CellState::Start);
        g.set_state(Pos::new(2, 2), CellState::End);
        let s = GridEditSession::with_grid(g);
        assert_eq!(s.start(), Some(Pos::new(0, 0)));
        assert_eq!(s.end(), Some(Pos::new(2, 2)));
        assert_single_endpoints(&s);
    }

    #[test]
    fn arbitrary_edit_sequences_keep_single_endpoints() {
        let mut s = session();
        let script: &[(u8, i32, i32)] = &[
            (0, 0, 0),
            (0, 0, 0),
            (1, 0, 0),
            (0, 3, 3),
            (0, 3, 3),
            (2, 3, 4),
            (3, 0, 0),
            (1, 3, 3),
            (2, 0, 0),
            (3, 0, 0),
            (0, 2, 2),
            (0, 1, 1),
            (0, 4, 0),
            (2, 1, 1),
            (2, 2, 2),
            (3, 0, 0),
            (1, 1, 1),
            (0, 2, 2),
        ];
        for &(op, row, col) in script {
            let p = Pos::new(row, col);
            match op {
                0 => s.left_click(p),
                1 => s.right_click(p),
                2 => s.drag(p),
                _ => s.release_drag(),
            }
            assert_single_endpoints(&s);
        }
    }
}

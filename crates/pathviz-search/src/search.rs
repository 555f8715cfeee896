use pathviz_core::{CellState, Grid, Pos};

use crate::cancel::CancelToken;
use crate::distance::octile;
use crate::error::SearchError;
use crate::frontier::Frontier;
use crate::traits::{NoopObserver, StepObserver};

/// Sentinel g-score for cells the search has not reached.
pub const UNREACHABLE: u32 = u32::MAX;

// ---------------------------------------------------------------------------
// Per-cell search state
// ---------------------------------------------------------------------------

#[derive(Clone, Debug)]
struct Node {
    g: u32,
    f: f64,
    parent: Option<usize>,
    /// Whether the cell currently counts as a frontier member.
    open: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: UNREACHABLE,
            f: f64::INFINITY,
            parent: None,
            open: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Outcomes
// ---------------------------------------------------------------------------

/// Result of a single [`Search::step`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// A cell was expanded; the frontier may hold more work.
    Continue,
    /// The end was reached. Holds the path from start to end, inclusive.
    Found(Vec<Pos>),
    /// The frontier ran dry without reaching the end.
    Exhausted,
}

/// Terminal result of [`Search::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchOutcome {
    /// Path from start to end, both included.
    Found(Vec<Pos>),
    /// No path exists between start and end.
    NoPath,
    /// The cancel token fired between steps.
    Cancelled,
}

impl SearchOutcome {
    /// The found path, if any.
    pub fn path(&self) -> Option<&[Pos]> {
        match self {
            Self::Found(p) => Some(p),
            _ => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// One A* run over a grid, advanced a step at a time.
///
/// The barrier layout is read once, when the search is created; the grid is
/// borrowed mutably for the whole run so it cannot change underneath.
/// Every step writes Open tags for newly queued cells and a Closed tag for
/// the expanded cell (never for the start), then calls the observer.
pub struct Search<'g> {
    grid: &'g mut Grid,
    start: usize,
    end: usize,
    goal: Pos,
    adjacency: Vec<Vec<usize>>,
    nodes: Vec<Node>,
    frontier: Frontier<usize>,
    expanded: usize,
    finished: bool,
}

impl<'g> Search<'g> {
    /// Prepare a search from `start` to `end`.
    ///
    /// Neighbour sets are computed here, once, from the current barriers.
    pub fn new(grid: &'g mut Grid, start: Pos, end: Pos) -> Result<Self, SearchError> {
        let start_idx = grid.idx(start).ok_or(SearchError::OutOfBounds(start))?;
        let end_idx = grid.idx(end).ok_or(SearchError::OutOfBounds(end))?;

        let mut nbuf = Vec::with_capacity(4);
        let adjacency: Vec<Vec<usize>> = (0..grid.len())
            .map(|i| {
                nbuf.clear();
                grid.neighbors_into(grid.pos(i), &mut nbuf);
                nbuf.iter().filter_map(|&p| grid.idx(p)).collect()
            })
            .collect();

        let mut nodes = vec![Node::default(); grid.len()];
        let f = octile(start, end);
        nodes[start_idx] = Node {
            g: 0,
            f,
            parent: None,
            open: true,
        };

        let mut frontier = Frontier::new();
        frontier.push(start_idx, f);

        log::debug!(
            "search: {start} -> {end} on a {n}x{n} grid",
            n = grid.size()
        );

        Ok(Self {
            grid,
            start: start_idx,
            end: end_idx,
            goal: end,
            adjacency,
            nodes,
            frontier,
            expanded: 0,
            finished: false,
        })
    }

    /// Run a single iteration: pop the best frontier cell and expand it.
    ///
    /// Returns [`SearchError::Finished`] if the run already ended.
    pub fn step<O: StepObserver + ?Sized>(&mut self, observer: &mut O) -> Result<Step, SearchError> {
        if self.finished {
            return Err(SearchError::Finished);
        }
        if self.frontier.is_empty() {
            self.finished = true;
            log::debug!("search: no path after {} expansions", self.expanded);
            return Ok(Step::Exhausted);
        }

        let ci = self.frontier.pop_min()?;
        self.nodes[ci].open = false;
        self.expanded += 1;

        if ci == self.end {
            self.finished = true;
            let path = self.reconstruct(observer);
            if self.end != self.start {
                self.grid.set_state_at(self.end, CellState::End);
            }
            log::debug!(
                "search: found path of {} moves after {} expansions",
                path.len() - 1,
                self.expanded
            );
            return Ok(Step::Found(path));
        }

        let tentative_g = self.nodes[ci].g + 1;
        for &ni in &self.adjacency[ci] {
            let n = &mut self.nodes[ni];
            if tentative_g >= n.g {
                continue;
            }
            n.parent = Some(ci);
            n.g = tentative_g;
            n.f = f64::from(tentative_g) + octile(self.grid.pos(ni), self.goal);
            if !n.open {
                n.open = true;
                self.frontier.push(ni, n.f);
                self.grid.set_state_at(ni, CellState::Open);
            }
        }

        observer.on_step(&*self.grid);

        if ci != self.start {
            self.grid.set_state_at(ci, CellState::Closed);
        }
        Ok(Step::Continue)
    }

    /// Step until the run ends or `cancel` fires.
    ///
    /// The token is checked before every step. On cancellation the Open and
    /// Closed tags written so far stay in the grid.
    pub fn run<O: StepObserver + ?Sized>(
        &mut self,
        observer: &mut O,
        cancel: &CancelToken,
    ) -> Result<SearchOutcome, SearchError> {
        loop {
            if cancel.is_cancelled() {
                log::debug!("search: cancelled after {} expansions", self.expanded);
                return Ok(SearchOutcome::Cancelled);
            }
            match self.step(observer)? {
                Step::Continue => {}
                Step::Found(path) => return Ok(SearchOutcome::Found(path)),
                Step::Exhausted => return Ok(SearchOutcome::NoPath),
            }
        }
    }

    /// Walk parents back from the end, tagging every cell strictly between
    /// start and end as Path and notifying the observer after each tag.
    fn reconstruct<O: StepObserver + ?Sized>(&mut self, observer: &mut O) -> Vec<Pos> {
        let mut path = vec![self.goal];
        let mut ci = self.end;
        while let Some(pi) = self.nodes[ci].parent {
            path.push(self.grid.pos(pi));
            if pi != self.start {
                self.grid.set_state_at(pi, CellState::Path);
                observer.on_step(&*self.grid);
            }
            ci = pi;
        }
        path.reverse();
        path
    }

    /// Number of frontier pops so far.
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    /// Number of queued frontier entries, stale duplicates included.
    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    /// Whether the run reached a terminal state.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Best known cost from start to `p`, or `None` if unreached or off-grid.
    pub fn g_score(&self, p: Pos) -> Option<u32> {
        let i = self.grid.idx(p)?;
        let g = self.nodes[i].g;
        (g != UNREACHABLE).then_some(g)
    }

    /// The cell `p` was reached from, if any.
    pub fn came_from(&self, p: Pos) -> Option<Pos> {
        let i = self.grid.idx(p)?;
        self.nodes[i].parent.map(|pi| self.grid.pos(pi))
    }

    /// The grid being searched.
    pub fn grid(&self) -> &Grid {
        &*self.grid
    }
}

/// Run a full search from `start` to `end` with no observer and no
/// cancellation.
pub fn find_path(grid: &mut Grid, start: Pos, end: Pos) -> Result<SearchOutcome, SearchError> {
    Search::new(grid, start, end)?.run(&mut NoopObserver, &CancelToken::new())
}

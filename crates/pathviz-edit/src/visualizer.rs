//! The command surface an input layer drives.
//!
//! [`Visualizer`] owns the editing session and forwards pointer events to it,
//! and runs searches over the session's grid.

use pathviz_core::{CellState, Grid, Pos};
use pathviz_search::{CancelToken, Search, SearchOutcome, StepObserver};

use crate::config::VisualizerConfig;
use crate::error::EditError;
use crate::session::{EditPhase, GridEditSession};

/// Editing session plus search and reset commands.
#[derive(Debug, Clone)]
pub struct Visualizer {
    session: GridEditSession,
    config: VisualizerConfig,
}

impl Visualizer {
    /// Build a visualizer with an empty grid of `config.grid_size`.
    pub fn new(config: VisualizerConfig) -> Result<Self, EditError> {
        config.validate()?;
        let session = GridEditSession::new(config.grid_size)?;
        Ok(Self { session, config })
    }

    pub fn config(&self) -> &VisualizerConfig {
        &self.config
    }

    pub fn session(&self) -> &GridEditSession {
        &self.session
    }

    pub fn grid(&self) -> &Grid {
        self.session.grid()
    }

    pub fn phase(&self) -> EditPhase {
        self.session.phase()
    }

    pub fn left_click(&mut self, p: Pos) {
        self.session.left_click(p);
    }

    pub fn right_click(&mut self, p: Pos) {
        self.session.right_click(p);
    }

    pub fn drag(&mut self, p: Pos) {
        self.session.drag(p);
    }

    pub fn release_drag(&mut self) {
        self.session.release_drag();
    }

    /// Search from the session's start to its end.
    ///
    /// Marks left by an earlier run are cleared first. The observer is called
    /// after every step; `cancel` is checked before each one. Start and End
    /// tags are restored afterwards, so a cancelled run never leaves an
    /// endpoint tagged Open.
    pub fn run_search<O: StepObserver + ?Sized>(
        &mut self,
        observer: &mut O,
        cancel: &CancelToken,
    ) -> Result<SearchOutcome, EditError> {
        let (start, end) = self.session.endpoints().ok_or(EditError::MissingEndpoints)?;
        self.session.release_drag();

        let grid = self.session.grid_mut();
        grid.clear_search();
        let outcome = Search::new(grid, start, end)?.run(observer, cancel)?;
        grid.set_state(start, CellState::Start);
        grid.set_state(end, CellState::End);

        match &outcome {
            SearchOutcome::Found(path) => log::debug!("visualizer: path of {} moves", path.len() - 1),
            SearchOutcome::NoPath => log::debug!("visualizer: no path found"),
            SearchOutcome::Cancelled => log::debug!("visualizer: search cancelled"),
        }
        Ok(outcome)
    }

    pub fn soft_clear(&mut self) {
        self.session.soft_clear();
    }

    pub fn hard_reset(&mut self) {
        self.session.hard_reset();
    }

    /// Scatter random barriers with explicit settings.
    pub fn randomize_obstacles(
        &mut self,
        density: f64,
        protect_start_end: bool,
        seed: Option<u64>,
    ) -> Result<usize, EditError> {
        self.session
            .randomize_obstacles(density, protect_start_end, seed)
    }

    /// Scatter random barriers using the configured density, protection and
    /// seed.
    pub fn randomize_default(&mut self) -> Result<usize, EditError> {
        let VisualizerConfig {
            density,
            protect_start_end,
            seed,
            ..
        } = self.config;
        self.randomize_obstacles(density, protect_start_end, seed)
    }
}

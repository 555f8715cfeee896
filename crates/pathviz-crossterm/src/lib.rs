//! Crossterm terminal collaborators for pathviz.
//!
//! [`TerminalView`] draws the grid and acts as the search's
//! [`StepObserver`], polling for Esc between steps so a long search can be
//! aborted. [`input`] maps raw terminal events to grid commands.

pub mod input;
mod renderer;

use std::io::{self, Stdout, Write};
use std::thread;
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{self, ClearType},
};

use pathviz_core::Grid;
use pathviz_search::{CancelToken, StepObserver};

pub use input::{CELL_COLUMNS, Command, cell_at, translate};
pub use renderer::state_color;

/// Settings for [`TerminalView`].
#[derive(Clone, Debug)]
pub struct ViewConfig {
    /// Pause after each drawn search step.
    pub step_delay: Duration,
    /// Capture mouse events.
    pub mouse: bool,
    /// Help text shown under the grid.
    pub hint: String,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            step_delay: Duration::from_millis(5),
            mouse: true,
            hint: "Left: start/end, then walls (drag) | Right: erase (drag) | \
                   Space: run A* | c/r: clear | q: random walls | Esc: quit"
                .to_string(),
        }
    }
}

/// Terminal renderer and in-search input poller.
pub struct TerminalView {
    out: Stdout,
    config: ViewConfig,
    cancel: CancelToken,
    status: String,
    error: Option<io::Error>,
}

impl TerminalView {
    pub fn new(config: ViewConfig) -> Self {
        Self {
            out: io::stdout(),
            config,
            cancel: CancelToken::new(),
            status: String::new(),
            error: None,
        }
    }

    /// Enter raw mode and the alternate screen.
    pub fn init(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(
            self.out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )?;
        if self.config.mouse {
            execute!(self.out, EnableMouseCapture)?;
        }
        Ok(())
    }

    /// Restore the terminal. Errors are ignored.
    pub fn close(&mut self) {
        if self.config.mouse {
            let _ = execute!(self.out, DisableMouseCapture);
        }
        let _ = execute!(self.out, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }

    /// Replace the status line shown under the hint.
    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }

    /// Draw the grid, hint and status lines.
    pub fn draw(&mut self, grid: &Grid) -> io::Result<()> {
        let below = u16::try_from(grid.size()).unwrap_or(u16::MAX);
        renderer::draw_grid(&mut self.out, grid)?;
        renderer::draw_line(&mut self.out, below, &self.config.hint)?;
        renderer::draw_line(&mut self.out, below.saturating_add(1), &self.status)?;
        self.out.flush()
    }

    /// Fresh cancel token for the next search run.
    pub fn begin_run(&mut self) -> CancelToken {
        self.cancel = CancelToken::new();
        self.cancel.clone()
    }

    /// The first I/O error hit while observing a search, if any.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    fn poll_cancel(&mut self) -> io::Result<()> {
        while event::poll(Duration::ZERO)? {
            if input::is_cancel(&event::read()?) {
                self.cancel.cancel();
            }
        }
        Ok(())
    }
}

impl StepObserver for TerminalView {
    fn on_step(&mut self, grid: &Grid) {
        let res = self.draw(grid).and_then(|()| self.poll_cancel());
        if let Err(e) = res {
            log::warn!("terminal: {e}; cancelling search");
            self.error.get_or_insert(e);
            self.cancel.cancel();
            return;
        }
        if !self.config.step_delay.is_zero() {
            thread::sleep(self.config.step_delay);
        }
    }
}

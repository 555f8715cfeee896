//! Interactive A* visualizer in the terminal.
//!
//! Run: cargo run --bin pathviz [grid-size]

use std::error::Error;

use crossterm::event;

use pathviz_core::Grid;
use pathviz_crossterm::{Command, TerminalView, ViewConfig, translate};
use pathviz_edit::{Visualizer, VisualizerConfig};
use pathviz_search::SearchOutcome;

/// Terminal rows are roughly twice as tall as columns are wide, and each cell
/// takes two columns, so this fits an ordinary full-screen terminal.
const DEFAULT_SIZE: i32 = 40;

fn main() {
    let size = match std::env::args().nth(1).map(|s| s.parse::<i32>()) {
        None => DEFAULT_SIZE,
        Some(Ok(n)) => n,
        Some(Err(e)) => {
            eprintln!("Error: grid size: {e}");
            std::process::exit(2);
        }
    };

    let mut view = TerminalView::new(ViewConfig::default());
    let res = match view.init() {
        Ok(()) => run(&mut view, size),
        Err(e) => Err(e.into()),
    };
    view.close();

    if let Err(e) = res {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(view: &mut TerminalView, size: i32) -> Result<(), Box<dyn Error>> {
    let mut vis = Visualizer::new(VisualizerConfig::default().with_grid_size(size))?;
    view.set_status("Place a start cell.");

    loop {
        view.draw(vis.grid())?;

        let ev = event::read()?;
        let Some(cmd) = translate(&ev, vis.grid().size()) else {
            continue;
        };
        match cmd {
            Command::LeftClick(p) => vis.left_click(p),
            Command::RightClick(p) => vis.right_click(p),
            Command::Drag(p) => vis.drag(p),
            Command::Release => vis.release_drag(),
            Command::RunSearch => {
                if vis.session().endpoints().is_none() {
                    view.set_status("Place a start and an end first.");
                    continue;
                }
                view.set_status("Searching... (Esc to stop)");
                let cancel = view.begin_run();
                let outcome = vis.run_search(&mut *view, &cancel)?;
                if let Some(e) = view.take_error() {
                    return Err(e.into());
                }
                view.set_status(describe(&outcome, vis.grid()));
            }
            Command::SoftClear => {
                vis.soft_clear();
                view.set_status("Cleared.");
            }
            Command::HardReset => {
                vis.hard_reset();
                view.set_status("Reset.");
            }
            Command::Randomize => {
                let placed = vis.randomize_default()?;
                view.set_status(format!("Placed {placed} random walls."));
            }
            Command::Quit => return Ok(()),
        }
    }
}

fn describe(outcome: &SearchOutcome, grid: &Grid) -> String {
    match outcome {
        SearchOutcome::Found(path) => format!(
            "Path found: {} moves on a {n}x{n} grid.",
            path.len() - 1,
            n = grid.size()
        ),
        SearchOutcome::NoPath => "No path found.".to_string(),
        SearchOutcome::Cancelled => "Search cancelled.".to_string(),
    }
}

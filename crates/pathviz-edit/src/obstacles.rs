//! Random barrier placement.
//!
//! Every unprotected cell is first reset to Empty, then independently turned
//! into a Barrier with probability `density`. Draws happen in row-major order,
//! one per unprotected cell, so a fixed seed always yields the same layout.

use pathviz_core::{CellState, Grid};
use rand::rngs::StdRng;
use rand::{Rng, RngExt, SeedableRng};

use crate::error::EditError;

/// Fill `grid` with random barriers at `density`.
///
/// With `protect_start_end`, Start and End cells are left untouched. A `seed`
/// makes the layout reproducible; without one the thread RNG is used.
/// Returns the number of barriers placed.
pub fn randomize(
    grid: &mut Grid,
    density: f64,
    protect_start_end: bool,
    seed: Option<u64>,
) -> Result<usize, EditError> {
    match seed {
        Some(seed) => randomize_with(
            grid,
            density,
            protect_start_end,
            &mut StdRng::seed_from_u64(seed),
        ),
        None => randomize_with(grid, density, protect_start_end, &mut rand::rng()),
    }
}

/// Like [`randomize`] but drawing from a caller-supplied RNG.
pub fn randomize_with(
    grid: &mut Grid,
    density: f64,
    protect_start_end: bool,
    rng: &mut impl Rng,
) -> Result<usize, EditError> {
    if !(0.0..=1.0).contains(&density) {
        return Err(EditError::InvalidDensity(density));
    }
    let protected = |state: CellState| protect_start_end && state.is_endpoint();

    for cell in grid.iter_mut() {
        if !protected(cell.state) {
            cell.reset();
        }
    }

    let mut placed = 0;
    for cell in grid.iter_mut() {
        if protected(cell.state) {
            continue;
        }
        if rng.random::<f64>() < density {
            cell.state = CellState::Barrier;
            placed += 1;
        }
    }

    log::debug!(
        "obstacles: placed {placed} of {} cells at density {density}",
        grid.len()
    );
    Ok(placed)
}

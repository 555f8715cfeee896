//! Draws grid cells as coloured blocks.

use std::io::{self, Write};

use crossterm::{
    cursor, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};

use pathviz_core::{CellState, Grid};

/// One grid cell: [`CELL_COLUMNS`](crate::input::CELL_COLUMNS) blank columns.
const BLOCK: &str = "  ";

/// Background colour for each cell state.
pub fn state_color(state: CellState) -> Color {
    match state {
        CellState::Empty => Color::Rgb { r: 255, g: 255, b: 255 },
        CellState::Start => Color::Rgb { r: 255, g: 165, b: 0 },
        CellState::End => Color::Rgb { r: 64, g: 224, b: 208 },
        CellState::Barrier => Color::Rgb { r: 0, g: 0, b: 0 },
        CellState::Open => Color::Rgb { r: 0, g: 255, b: 0 },
        CellState::Closed => Color::Rgb { r: 255, g: 0, b: 0 },
        CellState::Path => Color::Rgb { r: 128, g: 0, b: 128 },
    }
}

/// Queue every cell of `grid`, one row of blocks per grid row.
pub(crate) fn draw_grid(out: &mut impl Write, grid: &Grid) -> io::Result<()> {
    let size = grid.size();
    let mut prev = None;
    for cell in grid.iter() {
        if cell.col() == 0 {
            queue!(out, cursor::MoveTo(0, cell.row() as u16))?;
        }
        // Only switch colour when it changes along a row.
        if prev != Some(cell.state) || cell.col() == 0 {
            queue!(out, SetBackgroundColor(state_color(cell.state)))?;
            prev = Some(cell.state);
        }
        queue!(out, Print(BLOCK))?;
        if cell.col() == size - 1 {
            queue!(out, ResetColor)?;
            prev = None;
        }
    }
    Ok(())
}

/// Queue a single line of text on terminal row `row`.
pub(crate) fn draw_line(out: &mut impl Write, row: u16, text: &str) -> io::Result<()> {
    queue!(
        out,
        cursor::MoveTo(0, row),
        Clear(ClearType::CurrentLine),
        SetForegroundColor(Color::Grey),
        Print(text),
        ResetColor
    )
}

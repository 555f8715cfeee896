//! Translates crossterm events into visualizer [`Command`]s.
//!
//! Each grid cell is drawn [`CELL_COLUMNS`] terminal columns wide, starting
//! at the top-left corner of the screen. Positions outside the grid are
//! dropped here, never passed on.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use pathviz_core::Pos;

/// Terminal columns per grid cell, so cells look roughly square.
pub const CELL_COLUMNS: u16 = 2;

/// A user request, already mapped to grid coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    LeftClick(Pos),
    RightClick(Pos),
    Drag(Pos),
    Release,
    RunSearch,
    SoftClear,
    HardReset,
    Randomize,
    Quit,
}

/// Map a terminal cell to a grid position, or `None` if it lies outside the
/// `grid_size`×`grid_size` drawing area.
pub fn cell_at(column: u16, row: u16, grid_size: i32) -> Option<Pos> {
    let p = Pos::new(i32::from(row), i32::from(column / CELL_COLUMNS));
    (p.row < grid_size && p.col < grid_size).then_some(p)
}

/// Translate one terminal event.
pub fn translate(event: &Event, grid_size: i32) -> Option<Command> {
    match event {
        Event::Key(key) => translate_key(key),
        Event::Mouse(mouse) => translate_mouse(mouse, grid_size),
        _ => None,
    }
}

/// Whether `event` asks to abort a running search.
pub fn is_cancel(event: &Event) -> bool {
    matches!(translate(event, 0), Some(Command::Quit))
}

fn translate_key(key: &KeyEvent) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Command::Quit),
        KeyCode::Char(' ') => Some(Command::RunSearch),
        KeyCode::Char('c') => Some(Command::SoftClear),
        KeyCode::Char('r') => Some(Command::HardReset),
        KeyCode::Char('q') => Some(Command::Randomize),
        KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}

fn translate_mouse(mouse: &MouseEvent, grid_size: i32) -> Option<Command> {
    let pos = cell_at(mouse.column, mouse.row, grid_size);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => pos.map(Command::LeftClick),
        MouseEventKind::Down(MouseButton::Right) => pos.map(Command::RightClick),
        MouseEventKind::Drag(_) => pos.map(Command::Drag),
        MouseEventKind::Up(_) => Some(Command::Release),
        _ => None,
    }
}

//! **pathviz-core**: grid and cell model for step-by-step pathfinding.
//!
//! This crate provides the data types shared by the search engine and the
//! editing layer: [`Pos`] coordinates, tagged [`Cell`]s and the square
//! [`Grid`] that owns them. It knows nothing about pixels, fonts or windows;
//! a rendering layer reads [`CellState`] tags and draws them however it likes.

pub mod cell;
pub mod geom;
pub mod grid;

pub use cell::{Cell, CellState};
pub use geom::Pos;
pub use grid::{Grid, GridError};

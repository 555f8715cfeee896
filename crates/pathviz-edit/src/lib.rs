//! Editing layer for pathviz: the pointer-driven [`GridEditSession`], random
//! obstacle generation, and the [`Visualizer`] command surface an input
//! layer talks to.

pub mod config;
pub mod error;
pub mod obstacles;
pub mod session;
pub mod visualizer;

pub use config::VisualizerConfig;
pub use error::EditError;
pub use obstacles::{randomize, randomize_with};
pub use session::{DragMode, EditPhase, GridEditSession};
pub use visualizer::Visualizer;

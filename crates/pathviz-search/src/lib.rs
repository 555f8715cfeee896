//! Steppable A* search over a [`pathviz_core::Grid`].
//!
//! The search runs one frontier pop at a time, writing Open/Closed/Path tags
//! into the grid as it goes and handing the grid to a [`StepObserver`] after
//! every step so a rendering layer can redraw.
//!
//! - [`octile`] is the heuristic used for every estimate.
//! - [`Frontier`] orders entries by `(f, insertion sequence)`, so equal
//!   scores come out first-in first-out.
//! - [`Search`] drives one run; [`find_path`] is the one-shot wrapper.
//!
//! Cancellation is cooperative through a [`CancelToken`] checked before each
//! step.

mod cancel;
mod distance;
mod error;
mod frontier;
mod search;
mod traits;

pub use cancel::CancelToken;
pub use distance::{manhattan, octile};
pub use error::SearchError;
pub use frontier::Frontier;
pub use search::{Search, SearchOutcome, Step, UNREACHABLE, find_path};
pub use traits::{NoopObserver, StepObserver};

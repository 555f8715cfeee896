use std::fmt;

use pathviz_core::Pos;

/// Errors raised by the search engine.
///
/// Failing to find a path is not an error; see
/// [`SearchOutcome::NoPath`](crate::SearchOutcome::NoPath).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// `pop_min` was called on an empty frontier.
    EmptyFrontier,
    /// A start or end position lies outside the grid.
    OutOfBounds(Pos),
    /// `step` was called after the run had already ended.
    Finished,
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyFrontier => f.write_str("search: pop from an empty frontier"),
            Self::OutOfBounds(p) => write!(f, "search: endpoint {p} is outside the grid"),
            Self::Finished => f.write_str("search: run already finished"),
        }
    }
}

impl std::error::Error for SearchError {}

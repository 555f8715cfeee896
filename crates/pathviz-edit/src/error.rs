use std::fmt;

use pathviz_core::GridError;
use pathviz_search::SearchError;

/// Errors raised by editing commands.
#[derive(Debug, Clone, PartialEq)]
pub enum EditError {
    /// Obstacle density outside `[0, 1]`.
    InvalidDensity(f64),
    /// A search was requested before both start and end were placed.
    MissingEndpoints,
    Grid(GridError),
    Search(SearchError),
}

impl fmt::Display for EditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDensity(d) => write!(f, "edit: invalid density {d}, must be within [0, 1]"),
            Self::MissingEndpoints => f.write_str("edit: start and end must both be set"),
            Self::Grid(e) => write!(f, "edit: {e}"),
            Self::Search(e) => write!(f, "edit: {e}"),
        }
    }
}

impl std::error::Error for EditError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::Search(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for EditError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<SearchError> for EditError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

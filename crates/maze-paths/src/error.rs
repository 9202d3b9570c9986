use std::fmt;

use maze_core::{Coord, CoordIssue};

/// Errors returned by a search whose inputs break its preconditions.
///
/// An unreachable end is not an error; it is [`PathResult::NotFound`].
///
/// [`PathResult::NotFound`]: crate::PathResult::NotFound
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathError {
    /// Start or end is outside the grid or on a wall.
    InvalidCoordinate { pos: Coord, reason: CoordIssue },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCoordinate { pos, reason } => {
                write!(f, "cannot search from or to {pos}: {reason}")
            }
        }
    }
}

impl std::error::Error for PathError {}

//! Errors raised while building or editing a maze.

use std::fmt;

use crate::geom::Coord;

/// Why a coordinate was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordIssue {
    /// Outside the grid.
    OutOfBounds,
    /// Start or end placed on a wall.
    Wall,
    /// A wall toggle aimed at the start or end cell.
    Endpoint,
}

impl fmt::Display for CoordIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds => f.write_str("out of bounds"),
            Self::Wall => f.write_str("is a wall"),
            Self::Endpoint => f.write_str("is the start or end cell"),
        }
    }
}

/// Errors that can occur when constructing or editing a maze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// Rows or columns below 1.
    InvalidDimensions { rows: i32, cols: i32 },
    /// More cells than the configured maximum.
    TooLarge { cells: usize, max: usize },
    /// A coordinate that is not usable for the requested operation.
    InvalidCoordinate { pos: Coord, reason: CoordIssue },
    /// A text layout line whose width differs from the first line.
    InconsistentWidth {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// A text layout character outside `S`, `E`, `#`, `.`.
    InvalidChar { ch: char, pos: Coord },
    /// A text layout without a start or end marker.
    MissingMarker(char),
    /// A second start or end marker in a text layout.
    DuplicateMarker { ch: char, pos: Coord },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { rows, cols } => {
                write!(f, "maze dimensions must be at least 1x1, got {rows}x{cols}")
            }
            Self::TooLarge { cells, max } => {
                write!(f, "maze has {cells} cells, the maximum is {max}")
            }
            Self::InvalidCoordinate { pos, reason } => {
                write!(f, "invalid coordinate {pos}: {reason}")
            }
            Self::InconsistentWidth {
                line,
                expected,
                found,
            } => write!(
                f,
                "layout line {line} has width {found}, expected {expected}"
            ),
            Self::InvalidChar { ch, pos } => {
                write!(f, "layout contains invalid character `{ch}` at {pos}")
            }
            Self::MissingMarker(ch) => write!(f, "layout has no `{ch}` marker"),
            Self::DuplicateMarker { ch, pos } => {
                write!(f, "layout has a second `{ch}` marker at {pos}")
            }
        }
    }
}

impl std::error::Error for MazeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_coordinate() {
        let e = MazeError::InvalidCoordinate {
            pos: Coord::new(9, 1),
            reason: CoordIssue::OutOfBounds,
        };
        assert_eq!(e.to_string(), "invalid coordinate (9, 1): out of bounds");
    }

    #[test]
    fn display_too_large() {
        let e = MazeError::TooLarge {
            cells: 10_000,
            max: 2500,
        };
        assert_eq!(e.to_string(), "maze has 10000 cells, the maximum is 2500");
    }

    #[test]
    fn display_layout_markers() {
        let e = MazeError::InvalidChar {
            ch: 'x',
            pos: Coord::new(0, 2),
        };
        assert_eq!(e.to_string(), "layout contains invalid character `x` at (0, 2)");
        assert_eq!(
            MazeError::MissingMarker('E').to_string(),
            "layout has no `E` marker"
        );
        let e = MazeError::DuplicateMarker {
            ch: 'S',
            pos: Coord::new(1, 0),
        };
        assert_eq!(e.to_string(), "layout has a second `S` marker at (1, 0)");
        assert!(e.to_string().is_ascii());
    }
}

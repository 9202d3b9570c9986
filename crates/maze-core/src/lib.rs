//! **maze-core**: grid maze types shared across the workspace.
//!
//! This crate provides the foundational types used by the solver, the
//! generators and the terminal front-end: geometry primitives, tiles, a
//! bounded grid, a validated maze, and plain-text rendering.

pub mod error;
pub mod geom;
pub mod grid;
pub mod maze;
pub mod render;
pub mod tile;

pub use error::{CoordIssue, MazeError};
pub use geom::{Coord, Range};
pub use grid::{DEFAULT_MAX_CELLS, Grid};
pub use maze::Maze;
pub use render::{Glyph, Overlay};
pub use tile::Tile;

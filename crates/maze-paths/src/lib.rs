//! Breadth-first shortest paths on grid mazes.
//!
//! [`solve`] finds a shortest path between two cells of a [`Grid`] moving
//! one step up, down, left or right at a time, never through walls. The
//! search is driven by [`PathFinder`], which works with any [`Pather`] so
//! that other neighbour rules can reuse the same traversal.
//!
//! Every call allocates its own visited set, predecessor map and queue and
//! drops them before returning; nothing is cached between calls.
//!
//! [`Grid`]: maze_core::Grid

mod bfs;
mod distance;
mod error;
mod pathfinder;
mod traits;

pub use bfs::{solve, solve_maze};
pub use distance::manhattan;
pub use error::PathError;
pub use pathfinder::{Path, PathFinder, PathResult};
pub use traits::{GridPather, Pather};

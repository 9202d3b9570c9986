//! Maze sources: the built-in sample maze, text layouts and a random
//! generator.

pub mod layout;
pub mod mapgen;
pub mod sample;

pub use layout::Layout;
pub use mapgen::{DEFAULT_WALL_PCT, MapGen};
pub use sample::sample_maze;

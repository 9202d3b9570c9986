//! Command-line arguments and the resolved session configuration.

use clap::{Parser, ValueEnum};
use maze_core::DEFAULT_MAX_CELLS;
use maze_crossterm::ColorMode;
use maze_gen::DEFAULT_WALL_PCT;

/// Colour choice as spelled on the command line.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(c: ColorChoice) -> Self {
        match c {
            ColorChoice::Auto => ColorMode::Auto,
            ColorChoice::Always => ColorMode::Always,
            ColorChoice::Never => ColorMode::Never,
        }
    }
}

/// Find shortest paths through grid mazes with breadth-first search.
///
/// Log output goes to stderr and is controlled by `RUST_LOG`.
#[derive(Debug, Parser)]
#[command(name = "maze-solver", version)]
pub struct Args {
    /// Seed for random maze generation; omit for a different maze each run.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Chance (0 to 1) for a generated cell to be a wall.
    #[arg(long, default_value_t = DEFAULT_WALL_PCT, value_parser = parse_pct)]
    pub wall_pct: f64,

    /// Largest maze accepted, in cells.
    #[arg(long, default_value_t = DEFAULT_MAX_CELLS as u32, value_parser = clap::value_parser!(u32).range(1..))]
    pub max_cells: u32,

    /// When to colour the maze output.
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,
}

fn parse_pct(s: &str) -> Result<f64, String> {
    let v: f64 = s.parse().map_err(|_| format!("`{s}` is not a number"))?;
    if (0.0..=1.0).contains(&v) {
        Ok(v)
    } else {
        Err(format!("{v} is not between 0 and 1"))
    }
}

/// Settings a [`Session`](crate::Session) runs with.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub seed: Option<u64>,
    pub wall_pct: f64,
    pub max_cells: usize,
    pub color: ColorMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            wall_pct: DEFAULT_WALL_PCT,
            max_cells: DEFAULT_MAX_CELLS,
            color: ColorMode::Auto,
        }
    }
}

impl From<Args> for Config {
    fn from(a: Args) -> Self {
        Self {
            seed: a.seed,
            wall_pct: a.wall_pct,
            max_cells: a.max_cells as usize,
            color: a.color.into(),
        }
    }
}

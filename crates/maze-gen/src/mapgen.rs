//! Random maze generation.
//!
//! Every cell independently becomes a wall with a fixed probability. The
//! start (top-left) and end (bottom-right) cells are cleared afterwards, so
//! a generated maze always has open endpoints, although it may have no path
//! between them.

use log::trace;
use maze_core::{Coord, DEFAULT_MAX_CELLS, Grid, Maze, MazeError, Tile};
use rand::Rng;

/// Default chance for a cell to become a wall.
pub const DEFAULT_WALL_PCT: f64 = 0.3;

/// Random maze generator.
pub struct MapGen<R: Rng> {
    pub rng: R,
    wall_pct: f64,
    max_cells: usize,
}

impl<R: Rng> MapGen<R> {
    /// Create a generator with [`DEFAULT_WALL_PCT`] and
    /// [`DEFAULT_MAX_CELLS`].
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            wall_pct: DEFAULT_WALL_PCT,
            max_cells: DEFAULT_MAX_CELLS,
        }
    }

    /// Set the wall probability. Values are clamped to `[0, 1]`; NaN
    /// falls back to the default.
    pub fn with_wall_pct(mut self, pct: f64) -> Self {
        self.wall_pct = if pct.is_nan() {
            DEFAULT_WALL_PCT
        } else {
            pct.clamp(0.0, 1.0)
        };
        self
    }

    /// Set the largest maze (in cells) the generator will build.
    pub fn with_max_cells(mut self, max_cells: usize) -> Self {
        self.max_cells = max_cells;
        self
    }

    /// Current wall probability.
    pub fn wall_pct(&self) -> f64 {
        self.wall_pct
    }

    /// Current cell limit.
    pub fn max_cells(&self) -> usize {
        self.max_cells
    }

    /// Overwrite every cell of `grid`: wall with probability
    /// [`wall_pct`](Self::wall_pct), otherwise open.
    ///
    /// Returns the number of walls placed.
    pub fn random_fill(&mut self, grid: &mut Grid) -> usize {
        let pct = self.wall_pct;
        let rng = &mut self.rng;
        grid.fill_fn(|_| {
            let r: f64 = rng.random();
            Tile::from(r < pct)
        });
        grid.count(Tile::Wall)
    }

    /// Generate a `rows × cols` maze with start `(0, 0)` and end
    /// `(rows - 1, cols - 1)`, both guaranteed open.
    pub fn random_maze(&mut self, rows: i32, cols: i32) -> Result<Maze, MazeError> {
        let mut grid = Grid::with_limit(rows, cols, self.max_cells)?;
        let walls = self.random_fill(&mut grid);

        let start = Coord::ZERO;
        let end = Coord::new(rows - 1, cols - 1);
        grid.set(start, Tile::Open)?;
        grid.set(end, Tile::Open)?;
        trace!(
            "generated {rows}x{cols} maze: {walls} walls drawn, {} kept",
            grid.count(Tile::Wall)
        );

        Maze::new(grid, start, end)
    }
}

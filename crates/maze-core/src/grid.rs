//! The [`Grid`] type: a rectangular field of [`Tile`]s.
//!
//! A `Grid` owns its tiles. It is sized once at construction and checked
//! against a cell limit so that searches over it stay bounded.

use crate::error::{CoordIssue, MazeError};
use crate::geom::{Coord, Range};
use crate::tile::Tile;

/// Largest number of cells a grid may hold unless a different limit is
/// passed to [`Grid::with_limit`] (50 rows by 50 columns).
pub const DEFAULT_MAX_CELLS: usize = 2500;

/// A 2D grid of [`Tile`]s stored in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "GridRepr", into = "GridRepr")
)]
pub struct Grid {
    tiles: Vec<Tile>,
    bounds: Range,
}

impl Grid {
    /// Create an all-open grid, limited to [`DEFAULT_MAX_CELLS`].
    pub fn new(rows: i32, cols: i32) -> Result<Self, MazeError> {
        Self::with_limit(rows, cols, DEFAULT_MAX_CELLS)
    }

    /// Create an all-open grid holding at most `max_cells` cells.
    pub fn with_limit(rows: i32, cols: i32, max_cells: usize) -> Result<Self, MazeError> {
        if rows < 1 || cols < 1 {
            return Err(MazeError::InvalidDimensions { rows, cols });
        }
        let bounds = Range::with_size(rows, cols);
        let cells = bounds.len();
        if cells > max_cells {
            return Err(MazeError::TooLarge {
                cells,
                max: max_cells,
            });
        }
        Ok(Self {
            tiles: vec![Tile::Open; cells],
            bounds,
        })
    }

    /// Build a grid from rows of tiles. Every row must have the same width.
    pub fn from_rows<R: AsRef<[Tile]>>(rows: &[R]) -> Result<Self, MazeError> {
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        let mut tiles = Vec::with_capacity(width * rows.len());
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(MazeError::InconsistentWidth {
                    line: i + 1,
                    expected: width,
                    found: row.len(),
                });
            }
            tiles.extend_from_slice(row);
        }
        let mut grid = Self::new(rows.len() as i32, width as i32)?;
        grid.tiles = tiles;
        Ok(grid)
    }

    /// The bounding range `[(0, 0), (rows, cols))`.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.bounds.rows()
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.bounds.cols()
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Always `false`: a grid has at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Coord) -> bool {
        self.bounds.contains(p)
    }

    /// Flat row-major index of `p`, or `None` if out of bounds.
    #[inline]
    pub fn index(&self, p: Coord) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some(p.row as usize * self.cols() as usize + p.col as usize)
    }

    /// The tile at `p`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Coord) -> Option<Tile> {
        self.index(p).map(|i| self.tiles[i])
    }

    /// Whether `p` is in bounds and a wall.
    #[inline]
    pub fn is_wall(&self, p: Coord) -> bool {
        self.at(p).is_some_and(Tile::is_wall)
    }

    /// Whether `p` is in bounds and open.
    #[inline]
    pub fn passable(&self, p: Coord) -> bool {
        self.at(p).is_some_and(Tile::is_open)
    }

    /// Set the tile at `p`.
    pub fn set(&mut self, p: Coord, tile: Tile) -> Result<(), MazeError> {
        let i = self.index(p).ok_or(MazeError::InvalidCoordinate {
            pos: p,
            reason: CoordIssue::OutOfBounds,
        })?;
        self.tiles[i] = tile;
        Ok(())
    }

    /// Fill every cell with `tile`.
    pub fn fill(&mut self, tile: Tile) {
        self.tiles.fill(tile);
    }

    /// Fill the grid using a function that takes each coordinate.
    pub fn fill_fn(&mut self, mut f: impl FnMut(Coord) -> Tile) {
        for (p, t) in self.bounds.iter().zip(self.tiles.iter_mut()) {
            *t = f(p);
        }
    }

    /// Count how many cells equal `tile`.
    pub fn count(&self, tile: Tile) -> usize {
        self.tiles.iter().filter(|&&t| t == tile).count()
    }

    /// Row-major iterator over `(Coord, Tile)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Tile)> + '_ {
        self.bounds.iter().zip(self.tiles.iter().copied())
    }
}

// ---------------------------------------------------------------------------
// serde representation
// ---------------------------------------------------------------------------

#[cfg(feature = "serde")]
#[derive(Clone, serde::Serialize, serde::Deserialize)]
struct GridRepr {
    rows: i32,
    cols: i32,
    tiles: Vec<Tile>,
}

#[cfg(feature = "serde")]
impl From<Grid> for GridRepr {
    fn from(g: Grid) -> Self {
        Self {
            rows: g.rows(),
            cols: g.cols(),
            tiles: g.tiles,
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<GridRepr> for Grid {
    type Error = MazeError;

    fn try_from(r: GridRepr) -> Result<Self, MazeError> {
        let mut grid = Grid::new(r.rows, r.cols)?;
        if r.tiles.len() != grid.len() {
            return Err(MazeError::InconsistentWidth {
                line: 1,
                expected: grid.len(),
                found: r.tiles.len(),
            });
        }
        grid.tiles = r.tiles;
        Ok(grid)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let mut g = Grid::new(2, 2).unwrap();
        g.set(Coord::new(1, 0), Tile::Wall).unwrap();
        let json = serde_json::to_string(&g).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, g);
    }

    #[test]
    fn grid_rejects_mismatched_tiles() {
        let json = r#"{"rows":2,"cols":2,"tiles":["Open"]}"#;
        assert!(serde_json::from_str::<Grid>(json).is_err());
    }
}

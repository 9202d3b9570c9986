use maze_core::render::Overlay;
use maze_core::{Coord, Range};
use std::collections::HashSet;

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

/// A shortest path, stored as the ordered cells from start to end inclusive.
///
/// Consecutive cells are always one axis-aligned step apart.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "Vec<Coord>", try_from = "Vec<Coord>")
)]
pub struct Path {
    cells: Vec<Coord>,
}

impl Path {
    pub(crate) fn new(cells: Vec<Coord>) -> Self {
        debug_assert!(!cells.is_empty());
        Self { cells }
    }

    /// Number of moves, i.e. one less than the number of cells.
    #[inline]
    pub fn steps(&self) -> usize {
        self.cells.len() - 1
    }

    /// The cells on the path, start first.
    #[inline]
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    /// First cell.
    #[inline]
    pub fn start(&self) -> Coord {
        self.cells[0]
    }

    /// Last cell.
    #[inline]
    pub fn end(&self) -> Coord {
        self.cells[self.cells.len() - 1]
    }

    /// Whether `p` lies on the path.
    pub fn contains(&self, p: Coord) -> bool {
        self.cells.contains(&p)
    }

    /// The path cells as a set, for fast membership tests.
    pub fn cell_set(&self) -> HashSet<Coord> {
        self.cells.iter().copied().collect()
    }
}

impl From<Path> for Vec<Coord> {
    fn from(p: Path) -> Self {
        p.cells
    }
}

impl TryFrom<Vec<Coord>> for Path {
    type Error = &'static str;

    /// Accepts a non-empty chain of adjacent cells.
    fn try_from(cells: Vec<Coord>) -> Result<Self, Self::Error> {
        if cells.is_empty() {
            return Err("a path has at least one cell");
        }
        if !cells.windows(2).all(|w| w[0].is_adjacent(w[1])) {
            return Err("path cells must be adjacent");
        }
        Ok(Self { cells })
    }
}

impl Overlay for Path {
    fn covers(&self, p: Coord) -> bool {
        self.contains(p)
    }
}

/// Outcome of a search.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathResult {
    /// A shortest path from start to end.
    Found(Path),
    /// The end cannot be reached from the start.
    NotFound,
}

impl PathResult {
    /// Whether a path was found.
    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// The path, if one was found.
    #[inline]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Found(p) => Some(p),
            Self::NotFound => None,
        }
    }

    /// Step count of the path, if one was found.
    #[inline]
    pub fn steps(&self) -> Option<usize> {
        self.path().map(Path::steps)
    }
}

// ---------------------------------------------------------------------------
// PathFinder
// ---------------------------------------------------------------------------

/// Breadth-first search over a grid rectangle.
///
/// `PathFinder` only knows the rectangle it searches; the visited set,
/// predecessor map and queue belong to each call of
/// [`path`](PathFinder::path), so repeated calls cannot influence each
/// other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathFinder {
    pub(crate) rng: Range,
    pub(crate) width: usize,
}

impl PathFinder {
    /// Create a new `PathFinder` for the given grid rectangle.
    pub fn new(rng: Range) -> Self {
        Self {
            rng,
            width: rng.cols().max(0) as usize,
        }
    }

    /// The grid rectangle being searched.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Coord` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Coord) -> Option<usize> {
        if !self.rng.contains(p) {
            return None;
        }
        let c = (p.col - self.rng.min.col) as usize;
        let r = (p.row - self.rng.min.row) as usize;
        Some(r * self.width + c)
    }

    /// Convert a flat index back to a `Coord`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Coord {
        let c = (idx % self.width) as i32 + self.rng.min.col;
        let r = (idx / self.width) as i32 + self.rng.min.row;
        Coord::new(r, c)
    }
}

/// Only the range is stored; the row width is recomputed on load.
#[cfg(feature = "serde")]
impl serde::Serialize for PathFinder {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&self.rng, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for PathFinder {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let range = <Range as serde::Deserialize>::deserialize(deserializer)?;
        Ok(PathFinder::new(range))
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn path_result_round_trip() {
        let r = PathResult::Found(Path::new(vec![Coord::new(0, 0), Coord::new(1, 0)]));
        let json = serde_json::to_string(&r).unwrap();
        let back: PathResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);

        let json = serde_json::to_string(&PathResult::NotFound).unwrap();
        let back: PathResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, PathResult::NotFound);
    }

    #[test]
    fn broken_path_is_rejected() {
        let json = r#"{"Found":[{"row":0,"col":0},{"row":2,"col":0}]}"#;
        assert!(serde_json::from_str::<PathResult>(json).is_err());
    }

    #[test]
    fn pathfinder_round_trip() {
        let pf = PathFinder::new(Range::with_size(4, 7));
        let json = serde_json::to_string(&pf).unwrap();
        let back: PathFinder = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pf);
        assert_eq!(json, serde_json::to_string(&pf.range()).unwrap());
    }

    #[test]
    fn pathfinder_width_follows_range() {
        let range = Range::with_size(2, 3);
        let mut json: serde_json::Value = serde_json::to_value(range).unwrap();
        json["width"] = serde_json::json!(0);
        let pf: PathFinder = serde_json::from_value(json).unwrap();
        assert_eq!(pf, PathFinder::new(range));

        let g = maze_core::Grid::new(2, 3).unwrap();
        let r = pf
            .path(&crate::GridPather::new(&g), Coord::new(0, 0), Coord::new(1, 2))
            .unwrap();
        assert_eq!(r.steps(), Some(3));
    }

    #[test]
    fn far_apart_cells_are_rejected() {
        let json = r#"{"Found":[{"row":-2147483648,"col":0},{"row":2147483647,"col":0}]}"#;
        assert!(serde_json::from_str::<PathResult>(json).is_err());
        let json = r#"{"Found":[{"row":-2147483648,"col":0},{"row":2147483647,"col":1}]}"#;
        assert!(serde_json::from_str::<PathResult>(json).is_err());
    }
}

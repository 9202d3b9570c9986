//! Mazes written as text.
//!
//! A [`Layout`] parses an ASCII picture of a maze, one line per row:
//!
//! ```text
//! S . # .
//! . . # E
//! ```
//!
//! `#` is a wall, `.` is open, `S` marks the start and `E` the end. Spaces
//! are ignored so that the output of the renderer (without a path overlay)
//! reads back as the same maze.

use maze_core::{Coord, Grid, Maze, MazeError, Tile};

/// Characters accepted in a layout.
pub const RUNES: &str = "SE#.";

/// A parsed text maze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    content: String,
    rows: i32,
    cols: i32,
}

impl Layout {
    /// Parse a layout.
    ///
    /// Leading and trailing blank lines are trimmed. Every remaining line
    /// must have the same width and contain only [`RUNES`].
    pub fn new(s: &str) -> Result<Self, MazeError> {
        let content: String = s.replace(' ', "").trim().to_string();
        let mut width: Option<usize> = None;
        let mut rows = 0;
        for (y, line) in content.lines().enumerate() {
            let line = line.trim_end_matches('\r');
            let mut w = 0;
            for (x, ch) in line.chars().enumerate() {
                if !RUNES.contains(ch) {
                    return Err(MazeError::InvalidChar {
                        ch,
                        pos: Coord::new(y as i32, x as i32),
                    });
                }
                w += 1;
            }
            match width {
                None => width = Some(w),
                Some(expected) if expected != w => {
                    return Err(MazeError::InconsistentWidth {
                        line: y + 1,
                        expected,
                        found: w,
                    });
                }
                Some(_) => {}
            }
            rows += 1;
        }
        Ok(Self {
            content,
            rows,
            cols: width.unwrap_or(0) as i32,
        })
    }

    /// The layout text with spaces removed.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Number of rows.
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// All positions and their characters, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, char)> + '_ {
        self.content.lines().enumerate().flat_map(|(r, line)| {
            line.trim_end_matches('\r')
                .chars()
                .enumerate()
                .map(move |(c, ch)| (Coord::new(r as i32, c as i32), ch))
        })
    }

    /// Build the maze described by this layout, holding at most
    /// `max_cells` cells. Exactly one `S` and one `E` are required.
    pub fn to_maze_with_limit(&self, max_cells: usize) -> Result<Maze, MazeError> {
        let mut grid = Grid::with_limit(self.rows, self.cols, max_cells)?;
        let mut start = None;
        let mut end = None;
        for (p, ch) in self.cells() {
            let slot = match ch {
                'S' => &mut start,
                'E' => &mut end,
                '#' => {
                    grid.set(p, Tile::Wall)?;
                    continue;
                }
                _ => continue,
            };
            if slot.is_some() {
                return Err(MazeError::DuplicateMarker { ch, pos: p });
            }
            *slot = Some(p);
        }
        let start = start.ok_or(MazeError::MissingMarker('S'))?;
        let end = end.ok_or(MazeError::MissingMarker('E'))?;
        Maze::new(grid, start, end)
    }

    /// Build the maze described by this layout with the default cell limit.
    pub fn to_maze(&self) -> Result<Maze, MazeError> {
        self.to_maze_with_limit(maze_core::DEFAULT_MAX_CELLS)
    }
}

impl std::str::FromStr for Layout {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, MazeError> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOM: &str = "\
S . # .
. . # E
";

    #[test]
    fn parse_and_size() {
        let l = Layout::new(ROOM).unwrap();
        assert_eq!(l.rows(), 2);
        assert_eq!(l.cols(), 4);
        assert_eq!(l.content(), "S.#.\n..#E");
    }

    #[test]
    fn cells_in_row_order() {
        let l = Layout::new(ROOM).unwrap();
        let cells: Vec<(Coord, char)> = l.cells().collect();
        assert_eq!(cells.len(), 8);
        assert_eq!(cells[0], (Coord::new(0, 0), 'S'));
        assert_eq!(cells[6], (Coord::new(1, 2), '#'));
    }

    #[test]
    fn builds_maze() {
        let m: Maze = ROOM.parse::<Layout>().unwrap().to_maze().unwrap();
        assert_eq!(m.start(), Coord::new(0, 0));
        assert_eq!(m.end(), Coord::new(1, 3));
        assert!(m.grid().is_wall(Coord::new(0, 2)));
        assert!(m.grid().is_wall(Coord::new(1, 2)));
        assert_eq!(m.grid().count(Tile::Wall), 2);
    }

    #[test]
    fn rendered_maze_reads_back() {
        let m = Layout::new(ROOM).unwrap().to_maze().unwrap();
        let again = Layout::new(&m.to_string()).unwrap().to_maze().unwrap();
        assert_eq!(again, m);
    }

    #[test]
    fn inconsistent_width() {
        assert_eq!(
            Layout::new("S..\n.E"),
            Err(MazeError::InconsistentWidth {
                line: 2,
                expected: 3,
                found: 2,
            })
        );
    }

    #[test]
    fn invalid_char() {
        assert_eq!(
            Layout::new("S.x\n..E"),
            Err(MazeError::InvalidChar {
                ch: 'x',
                pos: Coord::new(0, 2),
            })
        );
    }

    #[test]
    fn missing_and_duplicate_markers() {
        let l = Layout::new("S..\n...").unwrap();
        assert_eq!(l.to_maze(), Err(MazeError::MissingMarker('E')));

        let l = Layout::new("S.S\n..E").unwrap();
        assert_eq!(
            l.to_maze(),
            Err(MazeError::DuplicateMarker {
                ch: 'S',
                pos: Coord::new(0, 2),
            })
        );
    }

    #[test]
    fn empty_layout_is_rejected() {
        let l = Layout::new("   \n").unwrap();
        assert_eq!(l.rows(), 0);
        assert!(matches!(
            l.to_maze(),
            Err(MazeError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn respects_cell_limit() {
        let l = Layout::new(ROOM).unwrap();
        assert_eq!(
            l.to_maze_with_limit(4),
            Err(MazeError::TooLarge { cells: 8, max: 4 })
        );
    }
}

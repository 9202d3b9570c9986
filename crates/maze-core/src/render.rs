//! Plain-text rendering of a [`Maze`], optionally overlaid with a path.

use std::collections::{BTreeSet, HashSet};

use crate::geom::Coord;
use crate::maze::Maze;

/// A set of cells drawn on top of the maze (usually a solution path).
pub trait Overlay {
    /// Whether `p` belongs to the overlay.
    fn covers(&self, p: Coord) -> bool;
}

impl Overlay for HashSet<Coord> {
    fn covers(&self, p: Coord) -> bool {
        self.contains(&p)
    }
}

impl Overlay for BTreeSet<Coord> {
    fn covers(&self, p: Coord) -> bool {
        self.contains(&p)
    }
}

impl Overlay for [Coord] {
    fn covers(&self, p: Coord) -> bool {
        self.contains(&p)
    }
}

impl Overlay for Vec<Coord> {
    fn covers(&self, p: Coord) -> bool {
        self.as_slice().covers(p)
    }
}

/// What a single cell is drawn as.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Glyph {
    Start,
    End,
    Path,
    Wall,
    Open,
}

impl Glyph {
    /// The character printed for this glyph.
    pub const fn ch(self) -> char {
        match self {
            Self::Start => 'S',
            Self::End => 'E',
            Self::Path => '*',
            Self::Wall => '#',
            Self::Open => '.',
        }
    }

    /// Classify `p`. Precedence is start, end, path, wall, open.
    pub fn of(maze: &Maze, p: Coord, overlay: Option<&dyn Overlay>) -> Self {
        if p == maze.start() {
            Self::Start
        } else if p == maze.end() {
            Self::End
        } else if overlay.is_some_and(|o| o.covers(p)) {
            Self::Path
        } else if maze.grid().is_wall(p) {
            Self::Wall
        } else {
            Self::Open
        }
    }
}

/// One row of glyphs per grid row.
pub fn glyph_rows(maze: &Maze, overlay: Option<&dyn Overlay>) -> Vec<Vec<Glyph>> {
    let grid = maze.grid();
    (0..grid.rows())
        .map(|r| {
            (0..grid.cols())
                .map(|c| Glyph::of(maze, Coord::new(r, c), overlay))
                .collect()
        })
        .collect()
}

/// Render the maze as text: one line per row, glyphs separated by a space,
/// every line terminated by `'\n'`.
pub fn render_text(maze: &Maze, overlay: Option<&dyn Overlay>) -> String {
    let grid = maze.grid();
    let mut out = String::with_capacity(grid.len() * 2);
    for row in glyph_rows(maze, overlay) {
        for (i, g) in row.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push(g.ch());
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;
    use crate::tile::Tile;

    fn maze_3x3() -> Maze {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set(Coord::new(1, 1), Tile::Wall).unwrap();
        Maze::new(grid, Coord::new(0, 0), Coord::new(2, 2)).unwrap()
    }

    #[test]
    fn renders_without_overlay() {
        assert_eq!(render_text(&maze_3x3(), None), "S . .\n. # .\n. . E\n");
    }

    #[test]
    fn renders_path_overlay() {
        let path = vec![
            Coord::new(0, 0),
            Coord::new(0, 1),
            Coord::new(0, 2),
            Coord::new(1, 2),
            Coord::new(2, 2),
        ];
        assert_eq!(
            render_text(&maze_3x3(), Some(&path)),
            "S * *\n. # *\n. . E\n"
        );
    }

    #[test]
    fn start_and_end_win_over_path() {
        let m = maze_3x3();
        let all: HashSet<Coord> = m.grid().bounds().iter().collect();
        assert_eq!(Glyph::of(&m, m.start(), Some(&all)), Glyph::Start);
        assert_eq!(Glyph::of(&m, m.end(), Some(&all)), Glyph::End);
        assert_eq!(Glyph::of(&m, Coord::new(1, 0), Some(&all)), Glyph::Path);
    }

    #[test]
    fn path_wins_over_wall() {
        let m = maze_3x3();
        let overlay: BTreeSet<Coord> = [Coord::new(1, 1)].into_iter().collect();
        assert_eq!(Glyph::of(&m, Coord::new(1, 1), Some(&overlay)), Glyph::Path);
        assert_eq!(Glyph::of(&m, Coord::new(1, 1), None), Glyph::Wall);
    }

    #[test]
    fn single_cell_maze_shows_start() {
        let grid = Grid::new(1, 1).unwrap();
        let m = Maze::new(grid, Coord::ZERO, Coord::ZERO).unwrap();
        assert_eq!(render_text(&m, None), "S\n");
    }

    #[test]
    fn glyph_rows_shape() {
        let rows = glyph_rows(&maze_3x3(), None);
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|r| r.len() == 3));
        assert_eq!(rows[1][1], Glyph::Wall);
    }
}

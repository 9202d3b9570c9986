//! The built-in sample maze.

use maze_core::{Maze, MazeError};

use crate::layout::Layout;

/// A 6×8 demo maze with the start at the top-left and the end at the
/// bottom-right corner.
pub const SAMPLE: &str = "\
S . . . # . . .
# # . # # . # .
. . . . . . # .
. # # # . # . .
. . . # . . . #
# # . . . # . E
";

/// Load the sample maze.
pub fn sample_maze() -> Result<Maze, MazeError> {
    Layout::new(SAMPLE)?.to_maze()
}

#[cfg(test)]
mod tests {
    use super::*;
    use maze_core::{Coord, Overlay, Tile};

    #[test]
    fn sample_shape() {
        let m = sample_maze().unwrap();
        assert_eq!(m.grid().rows(), 6);
        assert_eq!(m.grid().cols(), 8);
        assert_eq!(m.start(), Coord::new(0, 0));
        assert_eq!(m.end(), Coord::new(5, 7));
        assert_eq!(m.grid().count(Tile::Wall), 16);
    }

    #[test]
    fn sample_shortest_path() {
        let m = sample_maze().unwrap();
        let r = maze_paths::solve_maze(&m).unwrap();
        let expected: Vec<Coord> = [
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 2),
            (2, 2),
            (2, 3),
            (2, 4),
            (3, 4),
            (4, 4),
            (4, 5),
            (4, 6),
            (5, 6),
            (5, 7),
        ]
        .into_iter()
        .map(Coord::from)
        .collect();
        assert_eq!(r.steps(), Some(12));
        assert_eq!(r.path().unwrap().cells(), expected.as_slice());
    }

    #[test]
    fn sample_solution_rendering() {
        let m = sample_maze().unwrap();
        let r = maze_paths::solve_maze(&m).unwrap();
        let text = maze_core::render::render_text(&m, r.path().map(|p| p as &dyn Overlay));
        assert_eq!(
            text,
            "\
S * * . # . . .
# # * # # . # .
. . * * * . # .
. # # # * # . .
. . . # * * * #
# # . . . # * E
"
        );
    }
}

use std::io::Cursor;

use maze_core::Coord;
use maze_crossterm::ColorMode;
use maze_solver::{Config, Flow, Session};

fn config(seed: u64) -> Config {
    Config {
        seed: Some(seed),
        color: ColorMode::Never,
        ..Config::default()
    }
}

fn transcript(cfg: &Config, input: &str) -> String {
    let mut out = Vec::new();
    Session::new(cfg, Cursor::new(input), &mut out).run().unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn menu_is_shown_before_every_choice() {
    let t = transcript(&config(0), "3\n9\n0\n");
    assert_eq!(t.matches("=== Maze Solver (BFS) ===").count(), 3);
    assert_eq!(t.matches("Choose an option: ").count(), 3);
}

#[test]
fn sample_solution_is_drawn() {
    let t = transcript(&config(0), "1\n4\n0\n");
    let expected = "\
Shortest path length: 12 steps
S * * . # . . .
# # * # # . # .
. . * * * . # .
. # # # * # . .
. . . # * * * #
# # . . . # * E
";
    assert!(t.contains(expected), "{t}");
}

#[test]
fn session_keeps_the_edited_maze() {
    let mut out = Vec::new();
    let input = "1\n6\n2\n0\n7\n0\n1\n";
    let mut s = Session::new(&config(0), Cursor::new(input), &mut out);
    while s.step().unwrap() == Flow::Continue {}
    let maze = s.maze().unwrap();
    assert_eq!(maze.start(), Coord::new(2, 0));
    assert_eq!(maze.end(), Coord::new(0, 1));
}

#[test]
fn same_seed_generates_the_same_maze() {
    let input = "2\n6\n6\n3\n0\n";
    assert_eq!(
        transcript(&config(5), input),
        transcript(&config(5), input)
    );
}

#[test]
fn wall_pct_and_cell_limit_come_from_config() {
    let open = Config {
        wall_pct: 0.0,
        ..config(0)
    };
    let t = transcript(&open, "2\n2\n3\n3\n0\n");
    assert!(t.contains("S . .\n. . E\n"));

    let small = Config {
        max_cells: 4,
        ..config(0)
    };
    let t = transcript(&small, "2\n3\n3\n3\n0\n");
    assert!(t.contains("Cannot generate maze: maze has 9 cells, the maximum is 4"));
    assert!(t.contains("Load a maze first."));
}

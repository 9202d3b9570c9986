//! The interactive menu loop.
//!
//! A [`Session`] owns the current maze (if any) and reads menu choices from
//! any [`BufRead`], writing the transcript to any [`Write`]. The maze is
//! passed to the solver by reference on each request; nothing else keeps it.

use std::io::{self, BufRead, Write};

use log::{info, warn};
use maze_core::{Coord, Maze, MazeError, Overlay};
use maze_crossterm::TermPrinter;
use maze_gen::{MapGen, sample_maze};
use maze_paths::{PathResult, solve_maze};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::Config;

const MENU: &str = "\
=== Maze Solver (BFS) ===
1. Load sample maze
2. Generate random maze
3. Show maze
4. Solve (BFS shortest path)
5. Toggle wall at (row, col)
6. Set START (row, col)
7. Set END (row, col)
0. Exit";

/// Whether the menu loop keeps going.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Which endpoint an edit moves.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Endpoint {
    Start,
    End,
}

/// One run of the interactive menu.
pub struct Session<R: BufRead, W: Write> {
    input: R,
    out: W,
    maze: Option<Maze>,
    mapgen: MapGen<StdRng>,
    printer: TermPrinter,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session with no maze loaded.
    pub fn new(config: &Config, input: R, out: W) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let mapgen = MapGen::new(rng)
            .with_wall_pct(config.wall_pct)
            .with_max_cells(config.max_cells);
        Self {
            input,
            out,
            maze: None,
            mapgen,
            printer: TermPrinter::new(config.color.enabled()),
        }
    }

    /// The currently loaded maze.
    pub fn maze(&self) -> Option<&Maze> {
        self.maze.as_ref()
    }

    /// Run until the user exits or the input ends.
    pub fn run(&mut self) -> io::Result<()> {
        while self.step()? == Flow::Continue {}
        Ok(())
    }

    /// Show the menu once and carry out one choice.
    pub fn step(&mut self) -> io::Result<Flow> {
        writeln!(self.out)?;
        writeln!(self.out, "{MENU}")?;
        let Some(choice) = self.ask_int("Choose an option: ")? else {
            return self.quit();
        };

        match choice {
            1 => self.load_sample()?,
            2 => return self.generate(),
            3 => self.show()?,
            4 => self.solve()?,
            5 => return self.toggle_wall(),
            6 => return self.move_endpoint(Endpoint::Start),
            7 => return self.move_endpoint(Endpoint::End),
            0 => return self.quit(),
            _ => writeln!(self.out, "Invalid choice.")?,
        }
        Ok(Flow::Continue)
    }

    fn quit(&mut self) -> io::Result<Flow> {
        writeln!(self.out, "Goodbye!")?;
        self.out.flush()?;
        Ok(Flow::Quit)
    }

    fn load_sample(&mut self) -> io::Result<()> {
        match sample_maze() {
            Ok(m) => {
                info!("loaded sample maze");
                self.maze = Some(m);
                writeln!(self.out, "Sample maze loaded.")
            }
            Err(e) => writeln!(self.out, "Cannot load sample maze: {e}"),
        }
    }

    fn generate(&mut self) -> io::Result<Flow> {
        let Some(rows) = self.ask_int("Rows: ")? else {
            return self.quit();
        };
        let Some(cols) = self.ask_int("Cols: ")? else {
            return self.quit();
        };
        match self.mapgen.random_maze(rows, cols) {
            Ok(m) => {
                info!("generated {rows}x{cols} maze");
                self.maze = Some(m);
                writeln!(self.out, "Random maze generated ({rows}x{cols}).")?;
            }
            Err(e) => {
                warn!("maze generation rejected: {e}");
                writeln!(self.out, "Cannot generate maze: {e}")?;
            }
        }
        Ok(Flow::Continue)
    }

    fn show(&mut self) -> io::Result<()> {
        let Some(maze) = &self.maze else {
            return writeln!(self.out, "Load a maze first.");
        };
        self.printer.print_maze(&mut self.out, maze, None)
    }

    fn solve(&mut self) -> io::Result<()> {
        let Some(maze) = &self.maze else {
            return writeln!(self.out, "Load a maze first.");
        };
        match solve_maze(maze) {
            Ok(PathResult::Found(path)) => {
                writeln!(self.out, "Shortest path length: {} steps", path.steps())?;
                let cells = path.cell_set();
                self.printer
                    .print_maze(&mut self.out, maze, Some(&cells as &dyn Overlay))
            }
            Ok(PathResult::NotFound) => {
                writeln!(self.out, "No path found!")?;
                self.printer.print_maze(&mut self.out, maze, None)
            }
            Err(e) => writeln!(self.out, "Cannot solve: {e}"),
        }
    }

    fn toggle_wall(&mut self) -> io::Result<Flow> {
        if self.maze.is_none() {
            writeln!(self.out, "Load a maze first.")?;
            return Ok(Flow::Continue);
        }
        let Some(p) = self.ask_coord("Row: ", "Col: ")? else {
            return self.quit();
        };
        let Some(maze) = self.maze.as_mut() else {
            return Ok(Flow::Continue);
        };
        let result = maze.toggle_wall(p).map(|_| ());
        self.report_edit(p, result, "Toggled.")?;
        Ok(Flow::Continue)
    }

    fn move_endpoint(&mut self, which: Endpoint) -> io::Result<Flow> {
        if self.maze.is_none() {
            writeln!(self.out, "Load a maze first.")?;
            return Ok(Flow::Continue);
        }
        let (row_prompt, col_prompt) = match which {
            Endpoint::Start => ("Start row: ", "Start col: "),
            Endpoint::End => ("End row: ", "End col: "),
        };
        let Some(p) = self.ask_coord(row_prompt, col_prompt)? else {
            return self.quit();
        };
        let Some(maze) = self.maze.as_mut() else {
            return Ok(Flow::Continue);
        };
        let result = match which {
            Endpoint::Start => maze.set_start(p),
            Endpoint::End => maze.set_end(p),
        };
        self.report_edit(p, result, "Set.")?;
        Ok(Flow::Continue)
    }

    /// Print the outcome of an edit followed by the maze.
    fn report_edit(
        &mut self,
        p: Coord,
        result: Result<(), MazeError>,
        ok_msg: &str,
    ) -> io::Result<()> {
        match result {
            Ok(()) => writeln!(self.out, "{ok_msg}")?,
            Err(e) => {
                warn!("rejected edit at {p}: {e}");
                writeln!(self.out, "Invalid: {e}.")?;
            }
        }
        self.show()
    }

    // -----------------------------------------------------------------------
    // Input helpers
    // -----------------------------------------------------------------------

    /// Read one line, without its terminator. `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Prompt until an integer is entered. `None` at end of input.
    fn ask_int(&mut self, prompt: &str) -> io::Result<Option<i32>> {
        loop {
            write!(self.out, "{prompt}")?;
            self.out.flush()?;
            let Some(line) = self.read_line()? else {
                writeln!(self.out)?;
                return Ok(None);
            };
            match line.parse::<i32>() {
                Ok(v) => return Ok(Some(v)),
                Err(_) => writeln!(self.out, "Enter an integer.")?,
            }
        }
    }

    fn ask_coord(&mut self, row_prompt: &str, col_prompt: &str) -> io::Result<Option<Coord>> {
        let Some(row) = self.ask_int(row_prompt)? else {
            return Ok(None);
        };
        let Some(col) = self.ask_int(col_prompt)? else {
            return Ok(None);
        };
        Ok(Some(Coord::new(row, col)))
    }
}

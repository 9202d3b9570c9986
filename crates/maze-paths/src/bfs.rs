use std::collections::VecDeque;

use log::debug;
use maze_core::{Coord, CoordIssue, Grid, Maze, Tile};

use crate::distance::manhattan;
use crate::error::PathError;
use crate::pathfinder::{Path, PathFinder, PathResult};
use crate::traits::{GridPather, Pather};

impl PathFinder {
    /// Compute a shortest path from `from` to `to` using breadth-first
    /// search over the neighbours produced by `pather`.
    ///
    /// Every step has cost 1. Neighbours are enqueued in the order the
    /// pather yields them, which decides between equally short paths.
    /// Both endpoints must lie inside the range.
    pub fn path<P: Pather>(
        &self,
        pather: &P,
        from: Coord,
        to: Coord,
    ) -> Result<PathResult, PathError> {
        let start_idx = self.idx(from).ok_or(PathError::InvalidCoordinate {
            pos: from,
            reason: CoordIssue::OutOfBounds,
        })?;
        let goal_idx = self.idx(to).ok_or(PathError::InvalidCoordinate {
            pos: to,
            reason: CoordIssue::OutOfBounds,
        })?;

        let len = self.rng.len();
        let mut visited = vec![false; len];
        // The start never gets a predecessor.
        let mut prev: Vec<Option<usize>> = vec![None; len];
        let mut queue: VecDeque<usize> = VecDeque::new();
        let mut nbuf: Vec<Coord> = Vec::with_capacity(4);

        visited[start_idx] = true;
        queue.push_back(start_idx);
        let mut expanded = 0usize;

        let found = loop {
            let Some(ci) = queue.pop_front() else {
                break false;
            };
            if ci == goal_idx {
                break true;
            }
            expanded += 1;

            nbuf.clear();
            pather.neighbors(self.point(ci), &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                if visited[ni] {
                    continue;
                }
                visited[ni] = true;
                prev[ni] = Some(ci);
                queue.push_back(ni);
            }
        };

        if !found {
            debug!("no path from {from} to {to} after expanding {expanded} cells");
            return Ok(PathResult::NotFound);
        }

        // Walk predecessors back from the goal.
        let mut cells = vec![to];
        let mut ci = goal_idx;
        while let Some(pi) = prev[ci] {
            cells.push(self.point(pi));
            ci = pi;
        }
        cells.reverse();

        let path = Path::new(cells);
        debug!(
            "path from {from} to {to}: {} steps (lower bound {}), {expanded} cells expanded",
            path.steps(),
            manhattan(from, to)
        );
        Ok(PathResult::Found(path))
    }
}

/// Shortest path between `start` and `end` on `grid`, moving up, down,
/// left or right through open cells.
///
/// Both endpoints must be inside the grid and open; otherwise
/// [`PathError::InvalidCoordinate`] is returned before any search happens.
pub fn solve(grid: &Grid, start: Coord, end: Coord) -> Result<PathResult, PathError> {
    check_endpoint(grid, start)?;
    check_endpoint(grid, end)?;
    PathFinder::new(grid.bounds()).path(&GridPather::new(grid), start, end)
}

/// Shortest path between the start and end of `maze`.
pub fn solve_maze(maze: &Maze) -> Result<PathResult, PathError> {
    solve(maze.grid(), maze.start(), maze.end())
}

fn check_endpoint(grid: &Grid, p: Coord) -> Result<(), PathError> {
    match grid.at(p) {
        Some(Tile::Open) => Ok(()),
        Some(Tile::Wall) => Err(PathError::InvalidCoordinate {
            pos: p,
            reason: CoordIssue::Wall,
        }),
        None => Err(PathError::InvalidCoordinate {
            pos: p,
            reason: CoordIssue::OutOfBounds,
        }),
    }
}

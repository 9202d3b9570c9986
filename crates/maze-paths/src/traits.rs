use maze_core::{Coord, Grid};

/// Minimal pathfinding interface: neighbor enumeration.
pub trait Pather {
    /// Append the cells reachable in one step from `p` into `buf`, in a
    /// fixed order. The caller clears `buf` before calling.
    fn neighbors(&self, p: Coord, buf: &mut Vec<Coord>);
}

/// Cardinal pather over a [`Grid`]: in-bounds, non-wall cells in the order
/// up, down, left, right.
#[derive(Debug, Clone, Copy)]
pub struct GridPather<'a> {
    grid: &'a Grid,
}

impl<'a> GridPather<'a> {
    pub fn new(grid: &'a Grid) -> Self {
        Self { grid }
    }
}

impl Pather for GridPather<'_> {
    fn neighbors(&self, p: Coord, buf: &mut Vec<Coord>) {
        for np in p.neighbors_4() {
            if self.grid.passable(np) {
                buf.push(np);
            }
        }
    }
}

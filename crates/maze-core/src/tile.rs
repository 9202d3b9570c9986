//! The [`Tile`] type: the state of a single maze cell.

/// A maze cell: either passable or a wall.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    #[default]
    Open,
    Wall,
}

impl Tile {
    /// Whether this tile blocks movement.
    #[inline]
    pub const fn is_wall(self) -> bool {
        matches!(self, Self::Wall)
    }

    /// Whether this tile can be walked through.
    #[inline]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    /// The other state (wall becomes open and vice versa).
    #[inline]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Open => Self::Wall,
            Self::Wall => Self::Open,
        }
    }
}

impl From<bool> for Tile {
    /// `true` is a wall, `false` is open.
    fn from(wall: bool) -> Self {
        if wall { Self::Wall } else { Self::Open }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_open() {
        assert_eq!(Tile::default(), Tile::Open);
        assert!(Tile::default().is_open());
    }

    #[test]
    fn toggle_flips_state() {
        assert_eq!(Tile::Open.toggled(), Tile::Wall);
        assert_eq!(Tile::Wall.toggled(), Tile::Open);
        assert!(Tile::Wall.is_wall());
    }

    #[test]
    fn from_wall_flag() {
        assert_eq!(Tile::from(true), Tile::Wall);
        assert_eq!(Tile::from(false), Tile::Open);
    }
}

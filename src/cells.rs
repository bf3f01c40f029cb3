use std::convert::From;

use crate::units::{ColumnIndex, RowIndex};

/// A cell position on a rectangular grid. Row 0 is the top (north) row, column 0 the west column.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct Cell {
    pub row: usize,
    pub column: usize,
}

/// The four directions away from a square cell.
///
/// `North` is up (decreasing row), `East` is right (increasing column), `South` is down and `West` is left.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub enum CompassPrimary {
    North,
    East,
    South,
    West,
}

impl CompassPrimary {
    /// Clockwise from north: up, right, down, left.
    /// The maze carvers rely on this being the order neighbours are listed in before shuffling.
    pub const ALL: [CompassPrimary; 4] = [CompassPrimary::North,
                                          CompassPrimary::East,
                                          CompassPrimary::South,
                                          CompassPrimary::West];

    pub fn opposite(self) -> CompassPrimary {
        match self {
            CompassPrimary::North => CompassPrimary::South,
            CompassPrimary::East => CompassPrimary::West,
            CompassPrimary::South => CompassPrimary::North,
            CompassPrimary::West => CompassPrimary::East,
        }
    }

    /// Does moving in this direction keep the row and change the column?
    #[inline]
    pub fn is_horizontal(self) -> bool {
        match self {
            CompassPrimary::East | CompassPrimary::West => true,
            CompassPrimary::North | CompassPrimary::South => false,
        }
    }
}

impl Cell {
    #[inline]
    pub fn new(row: usize, column: usize) -> Cell {
        Cell { row, column }
    }

    #[inline]
    pub fn from_indices(row_index: RowIndex, column_index: ColumnIndex) -> Cell {
        let (RowIndex(row), ColumnIndex(column)) = (row_index, column_index);
        Cell::new(row, column)
    }

    /// Creates a new `Cell` offset 1 cell away in the given direction.
    /// Returns None if the position is not representable (negative row or column).
    /// There is no upper bound check, that depends on the grid dimensions.
    pub fn offset(self, dir: CompassPrimary) -> Option<Cell> {
        let (row, column) = (self.row, self.column);
        match dir {
            CompassPrimary::North => row.checked_sub(1).map(|r| Cell::new(r, column)),
            CompassPrimary::East => column.checked_add(1).map(|c| Cell::new(row, c)),
            CompassPrimary::South => row.checked_add(1).map(|r| Cell::new(r, column)),
            CompassPrimary::West => column.checked_sub(1).map(|c| Cell::new(row, c)),
        }
    }

    /// The direction to travel to reach an orthogonally adjacent cell.
    pub fn direction_to(self, other: Cell) -> Option<CompassPrimary> {
        CompassPrimary::ALL.iter()
                           .cloned()
                           .find(|dir| self.offset(*dir) == Some(other))
    }
}

impl From<(usize, usize)> for Cell {
    fn from(row_column_pair: (usize, usize)) -> Cell {
        Cell::new(row_column_pair.0, row_column_pair.1)
    }
}

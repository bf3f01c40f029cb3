use std::error::Error;
use std::fmt;

use smallvec::SmallVec;

use crate::cells::{Cell, CompassPrimary};
use crate::grid_iterators::{CellIter, RowIter};
use crate::random::RandomSource;
use crate::units::{ColumnsCount, EdgesCount, NodesCount, RowsCount};

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum GridDimensionError {
    /// A grid needs at least one row and one column.
    InvalidDimension { rows: usize, columns: usize },
}

impl fmt::Display for GridDimensionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            GridDimensionError::InvalidDimension { rows, columns } => {
                write!(f, "invalid grid dimension {} rows x {} columns, both must be at least 1", rows, columns)
            }
        }
    }
}

impl Error for GridDimensionError {}

/// The size of a rectangular grid of cells, always at least 1 x 1.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct GridDimensions {
    rows: RowsCount,
    columns: ColumnsCount,
}

impl GridDimensions {
    pub fn new(rows: RowsCount, columns: ColumnsCount) -> Result<GridDimensions, GridDimensionError> {
        if rows.0 < 1 || columns.0 < 1 {
            Err(GridDimensionError::InvalidDimension {
                rows: rows.0,
                columns: columns.0,
            })
        } else {
            Ok(GridDimensions { rows, columns })
        }
    }

    #[inline(always)]
    pub fn rows(&self) -> RowsCount {
        self.rows
    }

    #[inline(always)]
    pub fn columns(&self) -> ColumnsCount {
        self.columns
    }

    #[inline(always)]
    pub fn size(&self) -> NodesCount {
        NodesCount(self.rows.0 * self.columns.0)
    }

    /// Cell count and the number of passages in a perfect maze covering every cell.
    pub fn graph_size(&self) -> (NodesCount, EdgesCount) {
        let cells_count = self.size();
        (cells_count, EdgesCount(cells_count.0 - 1))
    }

    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.rows.0 && cell.column < self.columns.0
    }

    /// Convert a cell to a one dimensional index in the range 0...size.
    /// Returns None if the cell is outside the grid.
    #[inline]
    pub fn cell_to_index(&self, cell: Cell) -> Option<usize> {
        if self.contains(cell) {
            Some(cell.row * self.columns.0 + cell.column)
        } else {
            None
        }
    }

    #[inline]
    pub fn index_to_cell(&self, index: usize) -> Option<Cell> {
        if index < self.size().0 {
            let ColumnsCount(width) = self.columns;
            Some(Cell::new(index / width, index % width))
        } else {
            None
        }
    }

    pub fn neighbour_at_direction(&self, cell: Cell, direction: CompassPrimary) -> Option<Cell> {
        cell.offset(direction).filter(|neighbour| self.contains(*neighbour))
    }

    /// Cells to the North, East, South or West of a particular cell, in that order, but not necessarily linked by a
    /// passage.
    pub fn neighbours(&self, cell: Cell) -> SmallVec<[Cell; 4]> {
        CompassPrimary::ALL.iter()
                           .filter_map(|dir| self.neighbour_at_direction(cell, *dir))
                           .collect()
    }

    /// Choose a row then a column uniformly at random.
    pub fn random_cell<R: RandomSource + ?Sized>(&self, random_source: &mut R) -> Cell {
        let row = random_source.uniform_index(self.rows.0);
        let column = random_source.uniform_index(self.columns.0);
        Cell::new(row, column)
    }

    /// Top left, where the player starts.
    #[inline]
    pub fn start_corner(&self) -> Cell {
        Cell::new(0, 0)
    }

    /// Bottom right, opposite the start corner.
    #[inline]
    pub fn goal_corner(&self) -> Cell {
        Cell::new(self.rows.0 - 1, self.columns.0 - 1)
    }

    /// The dimensions of the next level, `step` more rows and columns.
    pub fn grown(&self, step: usize) -> GridDimensions {
        GridDimensions {
            rows: RowsCount(self.rows.0.saturating_add(step)),
            columns: ColumnsCount(self.columns.0.saturating_add(step)),
        }
    }

    #[inline]
    pub fn iter(&self) -> CellIter {
        CellIter::new(*self)
    }

    #[inline]
    pub fn iter_row(&self) -> RowIter {
        RowIter::new(*self)
    }
}

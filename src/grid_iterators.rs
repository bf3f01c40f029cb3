use std::fmt;

use crate::cells::Cell;
use crate::grid_dimensions::GridDimensions;
use crate::units::{ColumnsCount, RowsCount};

/// Row major iteration over every cell of a grid.
#[derive(Clone)]
pub struct CellIter {
    dimensions: GridDimensions,
    current_cell_number: usize,
    cells_count: usize,
}

impl CellIter {
    pub(crate) fn new(dimensions: GridDimensions) -> CellIter {
        CellIter {
            dimensions,
            current_cell_number: 0,
            cells_count: dimensions.size().0,
        }
    }
}

impl fmt::Debug for CellIter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f,
               "CellIter :: current_cell_number: {:?}, cells_count: {:?}",
               self.current_cell_number,
               self.cells_count)
    }
}

impl ExactSizeIterator for CellIter {} // default impl using size_hint()
impl Iterator for CellIter {
    type Item = Cell;
    fn next(&mut self) -> Option<Self::Item> {
        if self.current_cell_number < self.cells_count {
            let cell = self.dimensions.index_to_cell(self.current_cell_number);
            self.current_cell_number += 1;
            cell
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let lower_bound = self.cells_count - self.current_cell_number;
        let upper_bound = lower_bound;
        (lower_bound, Some(upper_bound))
    }
}

/// Iteration over the grid one row of cells at a time, north to south.
#[derive(Debug, Copy, Clone)]
pub struct RowIter {
    current_row: usize,
    rows_size: RowsCount,
    row_length: ColumnsCount,
}

impl RowIter {
    pub(crate) fn new(dimensions: GridDimensions) -> RowIter {
        RowIter {
            current_row: 0,
            rows_size: dimensions.rows(),
            row_length: dimensions.columns(),
        }
    }
}

impl ExactSizeIterator for RowIter {}
impl Iterator for RowIter {
    type Item = Vec<Cell>;
    fn next(&mut self) -> Option<Self::Item> {
        let RowsCount(count) = self.rows_size;
        if self.current_row < count {
            let ColumnsCount(length) = self.row_length;
            let row = self.current_row;
            let cells = (0..length).map(|column| Cell::new(row, column)).collect();
            self.current_row += 1;
            Some(cells)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.rows_size.0 - self.current_row;
        (remaining, Some(remaining))
    }
}

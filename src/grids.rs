//! Boolean grids backing a generated maze.
//!
//! A `VisitedGrid` has one flag per cell. `HorizontalWalls` has one flag per wall between vertically adjacent cells:
//! entry `(row, column)` sits between cells `(row, column)` and `(row + 1, column)`. `VerticalWalls` has one flag
//! per wall between horizontally adjacent cells: entry `(row, column)` sits between cells `(row, column)` and
//! `(row, column + 1)`. A set wall flag means the wall is open, a passage has been carved.

use std::marker::PhantomData;

use bit_set::BitSet;

use crate::cells::Cell;
use crate::grid_dimensions::GridDimensions;
use crate::units::{ColumnsCount, RowsCount};

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct Visited;
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct Horizontal;
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct Vertical;

pub type VisitedGrid = FlagGrid<Visited>;
pub type HorizontalWalls = FlagGrid<Horizontal>;
pub type VerticalWalls = FlagGrid<Vertical>;

/// A `rows x columns` grid of flags, all initially unset.
#[derive(Eq, PartialEq, Clone, Debug)]
pub struct FlagGrid<Kind> {
    flags: BitSet,
    rows: RowsCount,
    columns: ColumnsCount,
    kind: PhantomData<Kind>,
}

impl<Kind> FlagGrid<Kind> {
    fn with_size(rows: usize, columns: usize) -> FlagGrid<Kind> {
        FlagGrid {
            flags: BitSet::with_capacity(rows * columns),
            rows: RowsCount(rows),
            columns: ColumnsCount(columns),
            kind: PhantomData,
        }
    }

    #[inline]
    pub fn rows(&self) -> RowsCount {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> ColumnsCount {
        self.columns
    }

    /// Number of entries, set or unset.
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.0 * self.columns.0
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The flag at `(row, column)`, or None when outside the grid.
    #[inline]
    pub fn get(&self, row: usize, column: usize) -> Option<bool> {
        self.bit_index(row, column).map(|i| self.flags.contains(i))
    }

    /// Is the flag at `(row, column)` set? Out of range entries never are.
    #[inline]
    pub fn is_set(&self, row: usize, column: usize) -> bool {
        self.get(row, column).unwrap_or(false)
    }

    pub fn count_set(&self) -> usize {
        self.flags.len()
    }

    /// The `(row, column)` positions of set flags, row major.
    pub fn iter_set<'a>(&'a self) -> impl Iterator<Item = Cell> + 'a {
        let ColumnsCount(width) = self.columns;
        self.flags.iter().map(move |i| Cell::new(i / width, i % width))
    }

    /// Copy out the flags as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        (0..self.rows.0).map(|row| (0..self.columns.0).map(|column| self.is_set(row, column))
                                                      .collect())
                        .collect()
    }

    /// Sets a flag, returning true if it was previously unset.
    ///
    /// Panics if `(row, column)` is outside the grid.
    pub(crate) fn set(&mut self, row: usize, column: usize) -> bool {
        let i = self.bit_index(row, column)
                    .unwrap_or_else(|| panic!("flag ({}, {}) outside {:?} x {:?} grid", row, column,
                                              self.rows, self.columns));
        self.flags.insert(i)
    }

    #[inline]
    fn bit_index(&self, row: usize, column: usize) -> Option<usize> {
        if row < self.rows.0 && column < self.columns.0 {
            Some(row * self.columns.0 + column)
        } else {
            None
        }
    }
}

impl FlagGrid<Visited> {
    pub(crate) fn for_dimensions(dimensions: &GridDimensions) -> VisitedGrid {
        FlagGrid::with_size(dimensions.rows().0, dimensions.columns().0)
    }

    #[inline]
    pub fn is_visited(&self, cell: Cell) -> bool {
        self.is_set(cell.row, cell.column)
    }
}

impl FlagGrid<Horizontal> {
    pub(crate) fn for_dimensions(dimensions: &GridDimensions) -> HorizontalWalls {
        FlagGrid::with_size(dimensions.rows().0 - 1, dimensions.columns().0)
    }
}

impl FlagGrid<Vertical> {
    pub(crate) fn for_dimensions(dimensions: &GridDimensions) -> VerticalWalls {
        FlagGrid::with_size(dimensions.rows().0, dimensions.columns().0 - 1)
    }
}

use std::fmt;

use petgraph::algo;
use petgraph::graph::NodeIndex;
use petgraph::{Graph, Undirected};
use smallvec::SmallVec;

use crate::cells::{Cell, CompassPrimary};
use crate::grid_dimensions::GridDimensions;
use crate::grid_iterators::CellIter;
use crate::grids::{HorizontalWalls, VerticalWalls, VisitedGrid};

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum CellError {
    OutOfBounds(Cell),
}

impl fmt::Display for CellError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            CellError::OutOfBounds(cell) => {
                write!(f, "cell (row {}, column {}) is outside the maze", cell.row, cell.column)
            }
        }
    }
}

impl std::error::Error for CellError {}

/// Passages between cells as an undirected graph, one node per cell in row major order.
pub type PassageGraph = Graph<Cell, (), Undirected, u32>;

/// A generated maze: which walls between adjacent cells are open.
///
/// Built once by a generator and read only from then on.
#[derive(Clone, PartialEq, Eq)]
pub struct Maze {
    dimensions: GridDimensions,
    start: Cell,
    visited: VisitedGrid,
    horizontals: HorizontalWalls,
    verticals: VerticalWalls,
}

impl fmt::Debug for Maze {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Maze :: dimensions: {:?}, start: {:?}, passages: {:?}",
               self.dimensions, self.start, self.passages_count())
    }
}

impl Maze {
    /// A maze with every wall closed and no cell visited yet.
    pub(crate) fn unvisited(dimensions: GridDimensions, start: Cell) -> Maze {
        Maze {
            dimensions,
            start,
            visited: VisitedGrid::for_dimensions(&dimensions),
            horizontals: HorizontalWalls::for_dimensions(&dimensions),
            verticals: VerticalWalls::for_dimensions(&dimensions),
        }
    }

    #[inline]
    pub fn dimensions(&self) -> &GridDimensions {
        &self.dimensions
    }

    /// The cell carving began from.
    #[inline]
    pub fn start(&self) -> Cell {
        self.start
    }

    #[inline]
    pub fn visited(&self) -> &VisitedGrid {
        &self.visited
    }

    #[inline]
    pub fn horizontals(&self) -> &HorizontalWalls {
        &self.horizontals
    }

    #[inline]
    pub fn verticals(&self) -> &VerticalWalls {
        &self.verticals
    }

    pub fn into_parts(self) -> (VisitedGrid, HorizontalWalls, VerticalWalls) {
        (self.visited, self.horizontals, self.verticals)
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.dimensions.size().0
    }

    /// Number of open walls.
    pub fn passages_count(&self) -> usize {
        self.horizontals.count_set() + self.verticals.count_set()
    }

    #[inline]
    pub fn iter(&self) -> CellIter {
        self.dimensions.iter()
    }

    #[inline]
    pub(crate) fn is_visited(&self, cell: Cell) -> bool {
        self.visited.is_visited(cell)
    }

    #[inline]
    pub(crate) fn mark_visited(&mut self, cell: Cell) {
        let _ = self.visited.set(cell.row, cell.column);
    }

    /// Carve a passage from `cell` to its neighbour in `direction`.
    ///
    /// Left and right passages live in the vertical walls at column `min(column, neighbour column)`, up and down
    /// passages in the horizontal walls at row `min(row, neighbour row)`.
    /// Panics if either cell lies outside the maze.
    pub(crate) fn carve(&mut self, cell: Cell, direction: CompassPrimary) {
        let neighbour = self.dimensions
                            .neighbour_at_direction(cell, direction)
                            .unwrap_or_else(|| panic!("no neighbour {:?} of {:?} to carve to", direction, cell));
        let (row, column) = wall_position(cell, neighbour);
        if direction.is_horizontal() {
            self.verticals.set(row, column);
        } else {
            self.horizontals.set(row, column);
        }
    }

    /// Is there an open passage between two cells?
    /// False for cells that are not adjacent or not in the maze.
    pub fn is_passage(&self, a: Cell, b: Cell) -> bool {
        if !(self.dimensions.contains(a) && self.dimensions.contains(b)) {
            return false;
        }
        match a.direction_to(b) {
            Some(direction) => {
                let (row, column) = wall_position(a, b);
                if direction.is_horizontal() {
                    self.verticals.is_set(row, column)
                } else {
                    self.horizontals.is_set(row, column)
                }
            }
            None => false,
        }
    }

    pub fn is_neighbour_linked(&self, cell: Cell, direction: CompassPrimary) -> bool {
        self.dimensions
            .neighbour_at_direction(cell, direction)
            .map_or(false, |neighbour| self.is_passage(cell, neighbour))
    }

    /// Cells linked to a particular cell by a passage, clockwise from north.
    pub fn links(&self, cell: Cell) -> Result<SmallVec<[Cell; 4]>, CellError> {
        if !self.dimensions.contains(cell) {
            return Err(CellError::OutOfBounds(cell));
        }
        Ok(self.dimensions
               .neighbours(cell)
               .into_iter()
               .filter(|neighbour| self.is_passage(cell, *neighbour))
               .collect())
    }

    /// Every open passage as a pair of cells, the first north or west of the second.
    /// Vertical wall passages (east-west) come before horizontal wall passages (north-south).
    pub fn iter_passages<'a>(&'a self) -> impl Iterator<Item = (Cell, Cell)> + 'a {
        let east_west = self.verticals
                            .iter_set()
                            .map(|wall| (wall, Cell::new(wall.row, wall.column + 1)));
        let north_south = self.horizontals
                              .iter_set()
                              .map(|wall| (wall, Cell::new(wall.row + 1, wall.column)));
        east_west.chain(north_south)
    }

    pub fn passage_graph(&self) -> PassageGraph {
        let (nodes, edges) = self.dimensions.graph_size();
        let mut graph = PassageGraph::with_capacity(nodes.0, edges.0);
        for cell in self.iter() {
            let _ = graph.add_node(cell);
        }
        for (a, b) in self.iter_passages() {
            let index = |cell| {
                self.dimensions
                    .cell_to_index(cell)
                    .map(NodeIndex::new)
                    .expect("passage outside of the maze")
            };
            let _ = graph.add_edge(index(a), index(b), ());
        }
        graph
    }

    /// A perfect maze has exactly one route between any two cells: its passages form a spanning tree.
    pub fn is_perfect(&self) -> bool {
        let graph = self.passage_graph();
        graph.edge_count() == self.size() - 1 && algo::connected_components(&graph) == 1 &&
        !algo::is_cyclic_undirected(&graph)
    }
}

/// Index of the wall entry between two adjacent cells, in whichever wall grid separates them.
#[inline]
fn wall_position(a: Cell, b: Cell) -> (usize, usize) {
    (a.row.min(b.row), a.column.min(b.column))
}

#[cfg(test)]
mod tests {

    use itertools::Itertools;

    use super::*;
    use crate::units::{ColumnsCount, RowsCount};

    fn open_maze(rows: usize, columns: usize) -> Maze {
        let d = GridDimensions::new(RowsCount(rows), ColumnsCount(columns)).unwrap();
        Maze::unvisited(d, Cell::new(0, 0))
    }

    fn sorted_links(maze: &Maze, cell: Cell) -> Vec<Cell> {
        maze.links(cell).expect("cell is invalid").iter().cloned().sorted().collect()
    }

    #[test]
    fn new_maze_has_no_passages() {
        let m = open_maze(3, 4);
        assert_eq!(m.passages_count(), 0);
        assert_eq!(m.iter_passages().count(), 0);
        for cell in m.iter() {
            assert!(m.links(cell).unwrap().is_empty());
            assert!(!m.is_visited(cell));
        }
    }

    #[test]
    fn carving_cells() {
        let mut m = open_maze(4, 4);
        let a = Cell::new(1, 0);
        let b = Cell::new(2, 0);
        let c = Cell::new(3, 0);

        m.carve(a, CompassPrimary::South);
        assert!(m.is_passage(a, b) && m.is_passage(b, a));
        assert!(!m.is_passage(a, c));
        assert_eq!(sorted_links(&m, a), vec![b]);
        assert_eq!(sorted_links(&m, b), vec![a]);
        assert!(m.is_neighbour_linked(a, CompassPrimary::South));
        assert!(m.is_neighbour_linked(b, CompassPrimary::North));
        assert!(!m.is_neighbour_linked(a, CompassPrimary::North));
        assert!(m.horizontals().is_set(1, 0));

        // carving from the other side uses the same wall
        m.carve(c, CompassPrimary::North);
        assert!(m.horizontals().is_set(2, 0));
        assert_eq!(sorted_links(&m, b), vec![a, c]);
        assert_eq!(m.passages_count(), 2);

        m.carve(c, CompassPrimary::East);
        assert!(m.verticals().is_set(3, 0));
        m.carve(Cell::new(3, 2), CompassPrimary::West);
        assert!(m.verticals().is_set(3, 1));
        assert_eq!(sorted_links(&m, Cell::new(3, 1)), vec![Cell::new(3, 0), Cell::new(3, 2)]);
    }

    #[test]
    fn passages_need_adjacent_cells_in_the_maze() {
        let mut m = open_maze(2, 2);
        m.carve(Cell::new(0, 0), CompassPrimary::East);
        assert!(!m.is_passage(Cell::new(0, 0), Cell::new(0, 0)));
        assert!(!m.is_passage(Cell::new(0, 0), Cell::new(1, 1)));
        assert!(!m.is_passage(Cell::new(0, 1), Cell::new(0, 2)));
        assert!(!m.is_neighbour_linked(Cell::new(0, 1), CompassPrimary::East));
        assert_eq!(m.links(Cell::new(2, 0)), Err(CellError::OutOfBounds(Cell::new(2, 0))));
    }

    #[test]
    #[should_panic]
    fn carving_off_the_edge_panics() {
        let mut m = open_maze(2, 2);
        m.carve(Cell::new(0, 1), CompassPrimary::East);
    }

    #[test]
    fn passages_iter() {
        let mut m = open_maze(2, 2);
        m.carve(Cell::new(1, 1), CompassPrimary::West);
        m.carve(Cell::new(0, 0), CompassPrimary::South);
        assert_eq!(m.iter_passages().collect::<Vec<_>>(),
                   vec![(Cell::new(1, 0), Cell::new(1, 1)), (Cell::new(0, 0), Cell::new(1, 0))]);
    }

    #[test]
    fn perfect_maze_detection() {
        let mut m = open_maze(2, 2);
        assert!(!m.is_perfect());
        m.carve(Cell::new(0, 0), CompassPrimary::East);
        m.carve(Cell::new(0, 0), CompassPrimary::South);
        assert!(!m.is_perfect());
        m.carve(Cell::new(1, 0), CompassPrimary::East);
        assert!(m.is_perfect());
        m.carve(Cell::new(0, 1), CompassPrimary::South);
        assert!(!m.is_perfect());
        assert!(algo::is_cyclic_undirected(&m.passage_graph()));

        assert!(open_maze(1, 1).is_perfect());
    }

    #[test]
    fn graph_nodes_are_row_major_cells() {
        let mut m = open_maze(2, 3);
        m.carve(Cell::new(0, 2), CompassPrimary::South);
        let g = m.passage_graph();
        assert_eq!(g.node_count(), 6);
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g[NodeIndex::new(4)], Cell::new(1, 1));
        assert!(g.find_edge(NodeIndex::new(2), NodeIndex::new(5)).is_some());
    }

    #[test]
    fn cell_error_message() {
        assert_eq!(CellError::OutOfBounds(Cell::new(3, 4)).to_string(),
                   "cell (row 3, column 4) is outside the maze");
    }
}

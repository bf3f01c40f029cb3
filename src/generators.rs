use log::{debug, trace};

use crate::cells::{Cell, CompassPrimary};
use crate::grid_dimensions::{GridDimensionError, GridDimensions};
use crate::maze::{CellError, Maze};
use crate::random::{self, RandomSource};
use crate::units::{ColumnsCount, RowsCount};

/// Generate a perfect `rows x columns` maze with the recursive backtracker, starting from a random cell.
///
/// Fails before doing any work if either dimension is zero.
pub fn generate<R>(rows: usize, columns: usize, random_source: &mut R) -> Result<Maze, GridDimensionError>
    where R: RandomSource + ?Sized
{
    let dimensions = GridDimensions::new(RowsCount(rows), ColumnsCount(columns))?;
    Ok(recursive_backtracker(&dimensions, random_source))
}

/// Generate a perfect maze with the recursive backtracker, carving from a given start cell.
pub fn generate_from<R>(dimensions: &GridDimensions,
                        start: Cell,
                        random_source: &mut R)
                        -> Result<Maze, CellError>
    where R: RandomSource + ?Sized
{
    if !dimensions.contains(start) {
        return Err(CellError::OutOfBounds(start));
    }
    Ok(carve_depth_first(dimensions, start, random_source))
}

/// Apply the recursive backtracker maze generation algorithm from a random start cell.
///
/// This is a randomised depth first walk: from the current cell visit the neighbours in a random order, knocking
/// down the wall to each one not yet visited and walking on from there. When a cell has no unvisited neighbours left
/// we back up to the cell we came from. Every cell is visited exactly once, so the passages form a spanning tree:
/// a perfect maze. The mazes have long twisty corridors with few dead ends.
pub fn recursive_backtracker<R>(dimensions: &GridDimensions, random_source: &mut R) -> Maze
    where R: RandomSource + ?Sized
{
    let start = dimensions.random_cell(random_source);
    carve_depth_first(dimensions, start, random_source)
}

/// A cell on the walk, with its neighbours still to try.
#[derive(Debug)]
struct Frame {
    cell: Cell,
    directions: [CompassPrimary; 4],
    next: usize,
}

fn carve_depth_first<R>(dimensions: &GridDimensions, start: Cell, random_source: &mut R) -> Maze
    where R: RandomSource + ?Sized
{
    debug!("carving {} x {} maze from {:?}", dimensions.rows().0, dimensions.columns().0, start);

    let mut maze = Maze::unvisited(*dimensions, start);

    // An explicit stack rather than recursion, the walk can be as deep as the number of cells.
    // Frames are entered and left in the same order as the recursive formulation, so the random source is consumed
    // identically and the same choices carve the same maze.
    let mut stack = vec![enter_cell(&mut maze, start, random_source)];

    while let Some(frame) = stack.last_mut() {
        if frame.next == frame.directions.len() {
            let _ = stack.pop();
            continue;
        }

        let cell = frame.cell;
        let direction = frame.directions[frame.next];
        frame.next += 1;

        match dimensions.neighbour_at_direction(cell, direction) {
            Some(neighbour) if !maze.is_visited(neighbour) => {
                maze.carve(cell, direction);
                trace!("carved {:?} from {:?} to {:?}", direction, cell, neighbour);
                stack.push(enter_cell(&mut maze, neighbour, random_source));
            }
            _ => {}
        }
    }

    debug!("carved {} passages", maze.passages_count());
    maze
}

fn enter_cell<R>(maze: &mut Maze, cell: Cell, random_source: &mut R) -> Frame
    where R: RandomSource + ?Sized
{
    maze.mark_visited(cell);
    let mut directions = CompassPrimary::ALL;
    random::shuffle(&mut directions, random_source);
    Frame {
        cell,
        directions,
        next: 0,
    }
}

use std::fmt::{Debug, Display, LowerHex};

use itertools::Itertools;
use num::traits::{Bounded, One, Unsigned, Zero};
use smallvec::SmallVec;

use crate::cells::Cell;
use crate::maze::Maze;
use crate::utils::{self, FnvHashMap};

// Trait (hack) used purely as a generic type parameter alias because it looks ugly to type this out each time
pub trait MaxDistance
    : Zero + One + Bounded + Unsigned + Debug + Clone + Copy + Display + LowerHex + Ord
    {
}
impl<T: Zero + One + Bounded + Unsigned + Debug + Clone + Copy + Display + LowerHex + Ord> MaxDistance for T {}

/// Flood fill step counts from a start cell to every cell reachable through open passages.
#[derive(Debug, Clone)]
pub struct Distances<MaxDistanceT = u32> {
    start_coordinate: Cell,
    distances: FnvHashMap<Cell, MaxDistanceT>,
    max_distance: MaxDistanceT,
}

impl<MaxDistanceT> Distances<MaxDistanceT>
    where MaxDistanceT: MaxDistance
{
    /// None if the start cell is not in the maze.
    pub fn new(maze: &Maze, start_coordinate: Cell) -> Option<Distances<MaxDistanceT>> {

        if !maze.dimensions().contains(start_coordinate) {
            return None;
        }

        let mut max = Zero::zero();
        let mut distances = utils::fnv_hashmap(maze.size());
        distances.insert(start_coordinate, Zero::zero());

        // Every step is one more than the previous cell, so the first distance recorded for a cell is the shortest.
        // The distances map doubles as the visited set.
        let mut frontier = vec![start_coordinate];
        while !frontier.is_empty() {

            let mut new_frontier = vec![];
            for cell in &frontier {

                let distance_to_cell: MaxDistanceT = distances[cell];
                if distance_to_cell > max {
                    max = distance_to_cell;
                }

                let links = maze.links(*cell).expect("Frontier cell outside of the maze.");
                for link in &links {
                    if !distances.contains_key(link) {
                        distances.insert(*link, distance_to_cell + One::one());
                        new_frontier.push(*link);
                    }
                }
            }
            frontier = new_frontier;
        }

        Some(Distances {
            start_coordinate,
            distances,
            max_distance: max,
        })
    }

    #[inline(always)]
    pub fn start(&self) -> Cell {
        self.start_coordinate
    }

    #[inline(always)]
    pub fn max(&self) -> MaxDistanceT {
        self.max_distance
    }

    /// None if the cell is unreachable from the start or not in the maze.
    #[inline(always)]
    pub fn distance_from_start_to(&self, cell: Cell) -> Option<MaxDistanceT> {
        self.distances.get(&cell).cloned()
    }

    /// Cells the maximum distance from the start, in row major order.
    pub fn furthest_points_on_grid(&self) -> SmallVec<[Cell; 8]> {
        let furthest_distance = self.max();
        self.distances
            .iter()
            .filter(|&(_, distance)| *distance == furthest_distance)
            .map(|(cell, _)| *cell)
            .sorted()
            .collect()
    }
}

/// The route from the start of `distances_from_start` to `end_point`, both ends included.
/// None when the end point cannot be reached.
pub fn shortest_path<MaxDistanceT>(maze: &Maze,
                                   distances_from_start: &Distances<MaxDistanceT>,
                                   end_point: Cell)
                                   -> Option<Vec<Cell>>
    where MaxDistanceT: MaxDistance
{
    distances_from_start.distance_from_start_to(end_point)?;

    let mut path = vec![end_point];
    let start = distances_from_start.start();
    let mut current_coord = end_point;

    while current_coord != start {

        let current_distance_to_start = distances_from_start.distance_from_start_to(current_coord)?;

        // Step back along whichever linked neighbour is closest to the start.
        let closest_to_start = maze.links(current_coord)
                                   .ok()?
                                   .iter()
                                   .filter_map(|coord| {
                                       distances_from_start.distance_from_start_to(*coord)
                                                           .map(|distance| (*coord, distance))
                                   })
                                   .min_by_key(|&(_, distance)| distance);

        match closest_to_start {
            Some((closer_coord, closer_distance)) if closer_distance < current_distance_to_start => {
                current_coord = closer_coord;
                path.push(current_coord);
            }
            // No linked neighbour gets us any closer, the distances are from some other maze.
            _ => return None,
        }
    }

    path.reverse();
    Some(path)
}

/// The longest route through a perfect maze, found by two flood fills: the furthest cell from an arbitrary cell is
/// one end of the longest path, the furthest cell from that end is the other.
/// On a maze that is not perfect this is just some long path.
pub fn longest_path<MaxDistanceT>(maze: &Maze) -> Vec<Cell>
    where MaxDistanceT: MaxDistance
{
    let arbitrary_start_point = maze.dimensions().start_corner();
    let first_distances = Distances::<MaxDistanceT>::new(maze, arbitrary_start_point)
        .expect("Start corner is always in the maze.");
    let long_path_start = first_distances.furthest_points_on_grid()[0];

    let distances_from_start = Distances::<MaxDistanceT>::new(maze, long_path_start)
        .expect("Furthest point is always in the maze.");
    let end_point = distances_from_start.furthest_points_on_grid()[0];

    shortest_path(maze, &distances_from_start, end_point).unwrap_or_else(Vec::new)
}

/// The route the player has to take from the start corner to the goal corner.
pub fn solution(maze: &Maze) -> Option<Vec<Cell>> {
    let dimensions = maze.dimensions();
    let distances = Distances::<u32>::new(maze, dimensions.start_corner())?;
    shortest_path(maze, &distances, dimensions.goal_corner())
}


#[cfg(test)]
mod tests {

    use rand::SeedableRng;
    use rand_xorshift::XorShiftRng;

    use super::*;
    use crate::cells::CompassPrimary;
    use crate::generators;
    use crate::grid_dimensions::GridDimensions;
    use crate::units::{ColumnsCount, RowsCount};

    type SmallDistances = Distances<u8>;

    static OUT_OF_GRID_COORDINATE: Cell = Cell {
        row: usize::MAX,
        column: usize::MAX,
    };

    fn walled_maze(rows: usize, columns: usize) -> Maze {
        let d = GridDimensions::new(RowsCount(rows), ColumnsCount(columns)).unwrap();
        Maze::unvisited(d, Cell::new(0, 0))
    }

    // A 2x2 maze with every wall open: a loop.
    fn open_square() -> Maze {
        let mut m = walled_maze(2, 2);
        m.carve(Cell::new(0, 0), CompassPrimary::East);
        m.carve(Cell::new(0, 0), CompassPrimary::South);
        m.carve(Cell::new(1, 1), CompassPrimary::North);
        m.carve(Cell::new(1, 1), CompassPrimary::West);
        m
    }

    #[test]
    fn distances_construction_requires_valid_start_coordinate() {
        let m = walled_maze(3, 3);
        assert!(SmallDistances::new(&m, OUT_OF_GRID_COORDINATE).is_none());
    }

    #[test]
    fn start() {
        let m = walled_maze(3, 3);
        let start_coordinate = Cell::new(1, 1);
        let distances = SmallDistances::new(&m, start_coordinate).unwrap();
        assert_eq!(start_coordinate, distances.start());
    }

    #[test]
    fn distances_to_unreachable_cells_is_none() {
        let m = walled_maze(3, 3);
        let start_coordinate = Cell::new(0, 0);
        let distances = SmallDistances::new(&m, start_coordinate).unwrap();
        for cell in m.iter() {
            let d = distances.distance_from_start_to(cell);
            if cell != start_coordinate {
                assert!(d.is_none());
            } else {
                assert_eq!(d, Some(0));
            }
        }
        assert_eq!(distances.distance_from_start_to(OUT_OF_GRID_COORDINATE), None);
    }

    #[test]
    fn distances_on_open_grid() {
        let m = open_square();
        let distances = SmallDistances::new(&m, Cell::new(0, 0)).unwrap();
        assert_eq!(distances.distance_from_start_to(Cell::new(0, 0)), Some(0));
        assert_eq!(distances.distance_from_start_to(Cell::new(0, 1)), Some(1));
        assert_eq!(distances.distance_from_start_to(Cell::new(1, 0)), Some(1));
        assert_eq!(distances.distance_from_start_to(Cell::new(1, 1)), Some(2));
        assert_eq!(distances.max(), 2);
        assert_eq!(&*distances.furthest_points_on_grid(), &[Cell::new(1, 1)]);
    }

    #[test]
    fn furthest_points_are_sorted() {
        let m = open_square();
        let distances = SmallDistances::new(&m, Cell::new(0, 1)).unwrap();
        assert_eq!(&*distances.furthest_points_on_grid(), &[Cell::new(1, 0)]);
        let distances = SmallDistances::new(&walled_maze(2, 2), Cell::new(0, 1)).unwrap();
        assert_eq!(&*distances.furthest_points_on_grid(), &[Cell::new(0, 1)]);
    }

    #[test]
    fn shortest_path_through_a_corridor() {
        // 1 x 4 corridor, fully open
        let mut m = walled_maze(1, 4);
        for column in 0..3 {
            m.carve(Cell::new(0, column), CompassPrimary::East);
        }
        let distances = Distances::<u32>::new(&m, Cell::new(0, 3)).unwrap();
        assert_eq!(shortest_path(&m, &distances, Cell::new(0, 0)),
                   Some(vec![Cell::new(0, 3), Cell::new(0, 2), Cell::new(0, 1), Cell::new(0, 0)]));
        assert_eq!(shortest_path(&m, &distances, Cell::new(0, 3)), Some(vec![Cell::new(0, 3)]));
    }

    #[test]
    fn no_path_to_unreachable_cells() {
        let m = walled_maze(2, 2);
        let distances = Distances::<u32>::new(&m, Cell::new(0, 0)).unwrap();
        assert_eq!(shortest_path(&m, &distances, Cell::new(1, 1)), None);
        assert_eq!(shortest_path(&m, &distances, OUT_OF_GRID_COORDINATE), None);
        assert_eq!(solution(&m), None);
    }

    #[test]
    fn paths_through_generated_mazes_follow_passages() {
        let mut rng = XorShiftRng::seed_from_u64(11);
        let maze = generators::generate(15, 20, &mut rng).unwrap();
        let path = solution(&maze).expect("perfect mazes always have a solution");
        assert_eq!(path.first(), Some(&Cell::new(0, 0)));
        assert_eq!(path.last(), Some(&Cell::new(14, 19)));
        for (a, b) in path.iter().tuple_windows() {
            assert!(maze.is_passage(*a, *b));
        }
        // a simple path never revisits a cell
        assert_eq!(path.iter().unique().count(), path.len());
    }

    #[test]
    fn longest_path_is_at_least_as_long_as_the_solution() {
        let mut rng = XorShiftRng::seed_from_u64(12);
        let maze = generators::generate(10, 10, &mut rng).unwrap();
        let longest = longest_path::<u32>(&maze);
        let solution = solution(&maze).unwrap();
        assert!(longest.len() >= solution.len());
        for (a, b) in longest.iter().tuple_windows() {
            assert!(maze.is_passage(*a, *b));
        }
        let from_end = Distances::<u32>::new(&maze, longest[0]).unwrap();
        assert_eq!(from_end.max() as usize, longest.len() - 1);
    }

    #[test]
    fn single_cell_paths() {
        let m = walled_maze(1, 1);
        assert_eq!(solution(&m), Some(vec![Cell::new(0, 0)]));
        assert_eq!(longest_path::<u8>(&m), vec![Cell::new(0, 0)]);
    }
}

use std::fmt;

use smallvec::SmallVec;

use crate::cells::{Cell, CompassPrimary};
use crate::maze::Maze;
use crate::pathing::{Distances, MaxDistance};
use crate::utils::FnvHashSet;

pub trait GridDisplay {
    /// Render the contents of a grid cell as text.
    /// The String should be 3 glyphs long, padded if required.
    fn render_cell_body(&self, _: Cell) -> String {
        String::from("   ")
    }
}

impl<MaxDistanceT> GridDisplay for Distances<MaxDistanceT>
    where MaxDistanceT: MaxDistance
{
    fn render_cell_body(&self, coord: Cell) -> String {
        if let Some(d) = self.distance_from_start_to(coord) {
            // centre align, padding 3, lowercase hexadecimal
            format!("{:^3x}", d)
        } else {
            String::from("   ")
        }
    }
}

#[derive(Debug)]
pub struct PathDisplay {
    on_path_coordinates: FnvHashSet<Cell>,
}
impl PathDisplay {
    pub fn new(path: &[Cell]) -> Self {
        PathDisplay { on_path_coordinates: path.iter().cloned().collect() }
    }
}
impl GridDisplay for PathDisplay {
    fn render_cell_body(&self, coord: Cell) -> String {
        if self.on_path_coordinates.contains(&coord) {
            String::from(" . ")
        } else {
            String::from("   ")
        }
    }
}

#[derive(Debug)]
pub struct StartEndPointsDisplay {
    start_coordinates: SmallVec<[Cell; 4]>,
    end_coordinates: SmallVec<[Cell; 4]>,
}
impl StartEndPointsDisplay {
    pub fn new(starts: SmallVec<[Cell; 4]>, ends: SmallVec<[Cell; 4]>) -> StartEndPointsDisplay {
        StartEndPointsDisplay {
            start_coordinates: starts,
            end_coordinates: ends,
        }
    }

    /// Marks the player start and goal corners of a maze.
    pub fn corners(maze: &Maze) -> StartEndPointsDisplay {
        let dimensions = maze.dimensions();
        let mut starts = SmallVec::new();
        starts.push(dimensions.start_corner());
        let mut ends = SmallVec::new();
        ends.push(dimensions.goal_corner());
        StartEndPointsDisplay::new(starts, ends)
    }
}
impl GridDisplay for StartEndPointsDisplay {
    fn render_cell_body(&self, coord: Cell) -> String {

        let contains_coordinate = |coordinates: &SmallVec<[Cell; 4]>| coordinates.iter().any(|&c| c == coord);

        if contains_coordinate(&self.start_coordinates) {
            String::from(" S ")

        } else if contains_coordinate(&self.end_coordinates) {

            String::from(" E ")

        } else {
            String::from("   ")
        }
    }
}

/// A maze drawn with box drawing characters, each cell body filled in by an optional `GridDisplay`.
pub struct TextMaze<'a> {
    maze: &'a Maze,
    display: Option<&'a dyn GridDisplay>,
}

impl<'a> TextMaze<'a> {
    pub fn new(maze: &'a Maze) -> TextMaze<'a> {
        TextMaze {
            maze,
            display: None,
        }
    }

    pub fn with_display(maze: &'a Maze, display: &'a dyn GridDisplay) -> TextMaze<'a> {
        TextMaze {
            maze,
            display: Some(display),
        }
    }
}

impl<'a> fmt::Debug for TextMaze<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "TextMaze :: maze: {:?}, has display: {}", self.maze, self.display.is_some())
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&TextMaze::new(self), f)
    }
}

impl<'a> fmt::Display for TextMaze<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        const WALL_L: &str = "╴";
        const WALL_R: &str = "╶";
        const WALL_U: &str = "╵";
        const WALL_D: &str = "╷";
        const WALL_LR_3: &str = "───";
        const WALL_LR: &str = "─";
        const WALL_UD: &str = "│";
        const WALL_LD: &str = "┐";
        const WALL_RU: &str = "└";
        const WALL_LU: &str = "┘";
        const WALL_RD: &str = "┌";
        const WALL_LRU: &str = "┴";
        const WALL_LRD: &str = "┬";
        const WALL_LRUD: &str = "┼";
        const WALL_RUD: &str = "├";
        const WALL_LUD: &str = "┤";
        let default_cell_body = String::from("   ");

        let maze = self.maze;
        let dimensions = maze.dimensions();
        let columns_count = dimensions.columns().0;
        let rows_count = dimensions.rows().0;

        // Start by special case rendering the text for the north most boundary
        let mut output = String::from(WALL_RD);
        for column in 0..columns_count {
            output.push_str(WALL_LR_3);
            let is_east_open = maze.is_neighbour_linked(Cell::new(0, column), CompassPrimary::East);
            if is_east_open {
                output.push_str(WALL_LR);
            } else if column == columns_count - 1 {
                output.push_str(WALL_LD);
            } else {
                output.push_str(WALL_LRD);
            }
        }
        output.push('\n');

        for (index_row, row) in dimensions.iter_row().enumerate() {

            let is_last_row = index_row == (rows_count - 1);

            // Starts of by special case rendering the west most boundary of the row
            // The top section of the cell is done by the previous row.
            let mut row_middle_section_render = String::from(WALL_UD);
            let mut row_bottom_section_render = String::new();

            for (index_column, cell) in row.into_iter().enumerate() {

                let render_cell_side = |direction, passage_clear_text, blocking_wall_text| {
                    if maze.is_neighbour_linked(cell, direction) {
                        passage_clear_text
                    } else {
                        blocking_wall_text
                    }
                };
                let is_first_column = index_column == 0;
                let is_last_column = index_column == (columns_count - 1);
                let east_open = maze.is_neighbour_linked(cell, CompassPrimary::East);
                let south_open = maze.is_neighbour_linked(cell, CompassPrimary::South);

                // Each cell will simply use the southern wall of the cell above
                // it as its own northern wall, so we only need to worry about the cell’s body (room space),
                // its eastern boundary ('|'), and its southern boundary ('---+') minus the south west corner.
                let east_boundary = render_cell_side(CompassPrimary::East, " ", WALL_UD);

                // Cell Body
                if let Some(displayer) = self.display {
                    row_middle_section_render.push_str(&displayer.render_cell_body(cell));
                } else {
                    row_middle_section_render.push_str(&default_cell_body);
                }

                row_middle_section_render.push_str(east_boundary);

                if is_first_column {
                    row_bottom_section_render = if is_last_row {
                        String::from(WALL_RU)
                    } else if south_open {
                        String::from(WALL_UD)
                    } else {
                        String::from(WALL_RUD)
                    };
                }
                let south_boundary = render_cell_side(CompassPrimary::South, "   ", WALL_LR_3);
                row_bottom_section_render.push_str(south_boundary);

                let corner = match (is_last_row, is_last_column) {
                    (true, true) => WALL_LU,
                    (true, false) => if east_open { WALL_LR } else { WALL_LRU },
                    (false, true) => if south_open { WALL_UD } else { WALL_LUD },
                    (false, false) => {
                        let access_se_from_east =
                            dimensions.neighbour_at_direction(cell, CompassPrimary::East)
                                      .map_or(false, |c| maze.is_neighbour_linked(c, CompassPrimary::South));
                        let access_se_from_south =
                            dimensions.neighbour_at_direction(cell, CompassPrimary::South)
                                      .map_or(false, |c| maze.is_neighbour_linked(c, CompassPrimary::East));
                        let show_right_section = !access_se_from_east;
                        let show_down_section = !access_se_from_south;
                        let show_up_section = !east_open;
                        let show_left_section = !south_open;

                        match (show_left_section,
                               show_right_section,
                               show_up_section,
                               show_down_section) {
                            (true, true, true, true) => WALL_LRUD,
                            (true, true, true, false) => WALL_LRU,
                            (true, true, false, true) => WALL_LRD,
                            (true, false, true, true) => WALL_LUD,
                            (false, true, true, true) => WALL_RUD,
                            (true, true, false, false) => WALL_LR,
                            (false, false, true, true) => WALL_UD,
                            (false, true, true, false) => WALL_RU,
                            (true, false, false, true) => WALL_LD,
                            (true, false, true, false) => WALL_LU,
                            (false, true, false, true) => WALL_RD,
                            (true, false, false, false) => WALL_L,
                            (false, true, false, false) => WALL_R,
                            (false, false, true, false) => WALL_U,
                            (false, false, false, true) => WALL_D,
                            _ => " ",
                        }
                    }
                };

                row_bottom_section_render.push_str(corner);
            }

            output.push_str(&row_middle_section_render);
            output.push('\n');
            output.push_str(&row_bottom_section_render);
            output.push('\n');
        }

        write!(f, "{}", output)
    }
}

#[cfg(test)]
mod tests {

    use smallvec::smallvec;

    use super::*;
    use crate::generators;
    use crate::random::ScriptedSource;

    #[test]
    fn single_cell() {
        let maze = generators::generate(1, 1, &mut ScriptedSource::zeros()).unwrap();
        assert_eq!(maze.to_string(), "┌───┐\n│   │\n└───┘\n");
    }

    #[test]
    fn open_corridor() {
        let maze = generators::generate(1, 2, &mut ScriptedSource::zeros()).unwrap();
        assert_eq!(maze.to_string(), "┌───────┐\n│       │\n└───────┘\n");
    }

    #[test]
    fn scripted_maze_text() {
        let maze = generators::generate(3, 3, &mut ScriptedSource::zeros()).unwrap();
        let expected = ["┌───────────┐",
                        "│           │",
                        "├───────┐   │",
                        "│       │   │",
                        "│   ╶───┘   │",
                        "│           │",
                        "└───────────┘",
                        ""];
        assert_eq!(maze.to_string(), expected.join("\n"));
    }

    #[test]
    fn start_and_end_markers() {
        let maze = generators::generate(1, 2, &mut ScriptedSource::zeros()).unwrap();
        let markers = StartEndPointsDisplay::corners(&maze);
        let text = TextMaze::with_display(&maze, &markers).to_string();
        assert_eq!(text.lines().nth(1), Some("│ S   E │"));

        let nothing = StartEndPointsDisplay::new(smallvec![], smallvec![]);
        assert_eq!(nothing.render_cell_body(Cell::new(0, 0)), "   ");
    }

    #[test]
    fn path_cells_are_dotted() {
        let path = PathDisplay::new(&[Cell::new(0, 0), Cell::new(0, 1)]);
        assert_eq!(path.render_cell_body(Cell::new(0, 1)), " . ");
        assert_eq!(path.render_cell_body(Cell::new(1, 1)), "   ");
    }

    #[test]
    fn distances_in_hex() {
        let maze = generators::generate(1, 12, &mut ScriptedSource::zeros()).unwrap();
        let distances = Distances::<u32>::new(&maze, Cell::new(0, 0)).unwrap();
        assert_eq!(distances.render_cell_body(Cell::new(0, 0)), " 0 ");
        assert_eq!(distances.render_cell_body(Cell::new(0, 11)), " b ");
        assert_eq!(distances.render_cell_body(Cell::new(1, 0)), "   ");
        let text = TextMaze::with_display(&maze, &distances).to_string();
        assert!(text.contains(" a   b │"));
    }
}

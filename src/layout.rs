//! Playfield geometry for a maze: where the solid bodies of a physics world go.
//!
//! Every closed wall becomes a thin static rectangle on the boundary between two cells, the playfield gets a border,
//! the goal sits in the bottom right cell and the ball starts in the top left cell.

use crate::cells::Cell;
use crate::maze::Maze;
use crate::units::{Height, Width};

#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub enum BodyLabel {
    Border,
    Wall,
    Goal,
}

/// An axis aligned rectangle given by its centre, the way physics engines usually position bodies.
#[derive(PartialEq, Copy, Clone, Debug)]
pub struct Rectangle {
    pub centre_x: f32,
    pub centre_y: f32,
    pub width: f32,
    pub height: f32,
    pub label: BodyLabel,
}

impl Rectangle {
    pub fn new(centre_x: f32, centre_y: f32, width: f32, height: f32, label: BodyLabel) -> Rectangle {
        Rectangle {
            centre_x,
            centre_y,
            width,
            height,
            label,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.centre_x - self.width / 2.0
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.centre_x + self.width / 2.0
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.centre_y - self.height / 2.0
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.centre_y + self.height / 2.0
    }
}

#[derive(PartialEq, Copy, Clone, Debug)]
pub struct Ball {
    pub centre_x: f32,
    pub centre_y: f32,
    pub radius: f32,
}

#[derive(PartialEq, Copy, Clone, Debug)]
pub struct LayoutOptions {
    pub width: Width,
    pub height: Height,
    pub wall_width: f32,
    pub border_width: f32,
}

impl Default for LayoutOptions {
    fn default() -> LayoutOptions {
        LayoutOptions {
            width: Width(800.0),
            height: Height(600.0),
            wall_width: 2.0,
            border_width: 1.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MazeLayout {
    unit_length_x: f32,
    unit_length_y: f32,
    width: f32,
    height: f32,
    rows: usize,
    columns: usize,
    borders: Vec<Rectangle>,
    walls: Vec<Rectangle>,
    goal: Rectangle,
    ball: Ball,
}

impl MazeLayout {
    pub fn new(maze: &Maze, options: &LayoutOptions) -> MazeLayout {
        let (Width(width), Height(height)) = (options.width, options.height);
        let dimensions = maze.dimensions();
        let (rows, columns) = (dimensions.rows().0, dimensions.columns().0);
        let unit_length_x = width / columns as f32;
        let unit_length_y = height / rows as f32;

        let border_width = options.border_width;
        let borders = vec![
            Rectangle::new(width / 2.0, 0.0, width, border_width, BodyLabel::Border),
            Rectangle::new(width / 2.0, height, width, border_width, BodyLabel::Border),
            Rectangle::new(0.0, height / 2.0, border_width, height, BodyLabel::Border),
            Rectangle::new(width, height / 2.0, border_width, height, BodyLabel::Border),
        ];

        let closed_count = maze.horizontals().len() + maze.verticals().len() - maze.passages_count();
        let mut walls = Vec::with_capacity(closed_count);

        // Closed horizontal walls run along the bottom edge of the cell above them
        for row in 0..maze.horizontals().rows().0 {
            for column in 0..maze.horizontals().columns().0 {
                if !maze.horizontals().is_set(row, column) {
                    walls.push(Rectangle::new(column as f32 * unit_length_x + unit_length_x / 2.0,
                                              row as f32 * unit_length_y + unit_length_y,
                                              unit_length_x,
                                              options.wall_width,
                                              BodyLabel::Wall));
                }
            }
        }
        // Closed vertical walls run along the right edge of the cell to their left
        for row in 0..maze.verticals().rows().0 {
            for column in 0..maze.verticals().columns().0 {
                if !maze.verticals().is_set(row, column) {
                    walls.push(Rectangle::new(column as f32 * unit_length_x + unit_length_x,
                                              row as f32 * unit_length_y + unit_length_y / 2.0,
                                              options.wall_width,
                                              unit_length_y,
                                              BodyLabel::Wall));
                }
            }
        }

        let goal_cell = dimensions.goal_corner();
        let goal = Rectangle::new(goal_cell.column as f32 * unit_length_x + unit_length_x / 2.0,
                                  goal_cell.row as f32 * unit_length_y + unit_length_y / 2.0,
                                  unit_length_x * 0.5,
                                  unit_length_y * 0.5,
                                  BodyLabel::Goal);

        let start_cell = dimensions.start_corner();
        let ball = Ball {
            centre_x: start_cell.column as f32 * unit_length_x + unit_length_x / 2.0,
            centre_y: start_cell.row as f32 * unit_length_y + unit_length_y / 2.0,
            radius: unit_length_x.min(unit_length_y) / 4.0,
        };

        MazeLayout {
            unit_length_x,
            unit_length_y,
            width,
            height,
            rows,
            columns,
            borders,
            walls,
            goal,
            ball,
        }
    }

    /// Width and height of one cell.
    #[inline]
    pub fn unit_lengths(&self) -> (f32, f32) {
        (self.unit_length_x, self.unit_length_y)
    }

    #[inline]
    pub fn size(&self) -> (Width, Height) {
        (Width(self.width), Height(self.height))
    }

    #[inline]
    pub fn borders(&self) -> &[Rectangle] {
        &self.borders
    }

    #[inline]
    pub fn walls(&self) -> &[Rectangle] {
        &self.walls
    }

    #[inline]
    pub fn goal(&self) -> &Rectangle {
        &self.goal
    }

    #[inline]
    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    /// All static bodies the ball collides with except the goal.
    pub fn obstacles<'a>(&'a self) -> impl Iterator<Item = &'a Rectangle> + 'a {
        self.borders.iter().chain(self.walls.iter())
    }

    /// Centre point of a cell.
    pub fn cell_centre(&self, cell: Cell) -> (f32, f32) {
        (cell.column as f32 * self.unit_length_x + self.unit_length_x / 2.0,
         cell.row as f32 * self.unit_length_y + self.unit_length_y / 2.0)
    }

    /// The cell under a point on the playfield, None if the point is outside it.
    pub fn cell_at(&self, x: f32, y: f32) -> Option<Cell> {
        if x < 0.0 || y < 0.0 || x >= self.width || y >= self.height {
            return None;
        }
        let column = ((x / self.unit_length_x) as usize).min(self.columns - 1);
        let row = ((y / self.unit_length_y) as usize).min(self.rows - 1);
        Some(Cell::new(row, column))
    }
}

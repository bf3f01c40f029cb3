use std::path::Path;

use image::{ImageResult, Rgb, RgbImage};
use log::info;

use crate::cells::Cell;
use crate::layout::{Ball, BodyLabel, LayoutOptions, MazeLayout, Rectangle};
use crate::maze::Maze;
use crate::units::{Height, Width};

const BACKGROUND: Rgb<u8> = Rgb([0x14, 0x15, 0x1f]);
const WALL: Rgb<u8> = Rgb([0x80, 0x00, 0x80]);
const BORDER: Rgb<u8> = Rgb([0x80, 0x80, 0x80]);
const GOAL: Rgb<u8> = Rgb([0x00, 0x80, 0x00]);
const BALL: Rgb<u8> = Rgb([0x00, 0x00, 0xff]);
const PATH: Rgb<u8> = Rgb([0xff, 0xa5, 0x00]);

#[derive(Debug)]
pub struct RenderOptions<'a> {
    cell_side_pixels_length: u8,
    wall_pixels: u8,
    mark_start_end: bool,
    path: Option<&'a [Cell]>,
    output_file: Option<&'a Path>,
}

impl<'a> RenderOptions<'a> {
    #[inline]
    pub fn cell_side_pixels_length(&self) -> u8 {
        self.cell_side_pixels_length
    }

    #[inline]
    pub fn output_file(&self) -> Option<&'a Path> {
        self.output_file
    }
}

pub struct RenderOptionsBuilder<'a> {
    options: RenderOptions<'a>,
}

impl<'a> RenderOptionsBuilder<'a> {
    pub fn new() -> RenderOptionsBuilder<'a> {
        RenderOptionsBuilder {
            options: RenderOptions {
                cell_side_pixels_length: 10,
                wall_pixels: 2,
                mark_start_end: true,
                path: None,
                output_file: None,
            },
        }
    }
    pub fn cell_side_pixels_length(mut self, cell_side_pixels_length: u8) -> Self {
        self.options.cell_side_pixels_length = cell_side_pixels_length.max(1);
        self
    }
    pub fn wall_pixels(mut self, wall_pixels: u8) -> Self {
        self.options.wall_pixels = wall_pixels.max(1);
        self
    }
    pub fn mark_start_end(mut self, on: bool) -> Self {
        self.options.mark_start_end = on;
        self
    }
    pub fn path(mut self, path: Option<&'a [Cell]>) -> Self {
        self.options.path = path;
        self
    }
    pub fn output_file(mut self, output_file: Option<&'a Path>) -> Self {
        self.options.output_file = output_file;
        self
    }
    pub fn build(self) -> RenderOptions<'a> {
        self.options
    }
}

impl<'a> Default for RenderOptionsBuilder<'a> {
    fn default() -> Self {
        RenderOptionsBuilder::new()
    }
}

/// Draw the maze playfield into an image, one `cell_side_pixels_length` square per cell.
pub fn render_maze_image(maze: &Maze, options: &RenderOptions) -> RgbImage {
    let cell_size = u32::from(options.cell_side_pixels_length);
    let image_width = cell_size * maze.dimensions().columns().0 as u32;
    let image_height = cell_size * maze.dimensions().rows().0 as u32;

    let layout = MazeLayout::new(maze,
                                 &LayoutOptions {
                                     width: Width(image_width as f32),
                                     height: Height(image_height as f32),
                                     wall_width: f32::from(options.wall_pixels),
                                     border_width: f32::from(options.wall_pixels),
                                 });

    let mut img = RgbImage::from_pixel(image_width, image_height, BACKGROUND);

    if let Some(path) = options.path {
        let (unit_x, unit_y) = layout.unit_lengths();
        for cell in path {
            let (x, y) = layout.cell_centre(*cell);
            fill_rectangle(&mut img,
                           &Rectangle::new(x, y, unit_x / 3.0, unit_y / 3.0, BodyLabel::Goal),
                           PATH);
        }
    }

    for border in layout.borders() {
        fill_rectangle(&mut img, border, BORDER);
    }
    for wall in layout.walls() {
        fill_rectangle(&mut img, wall, WALL);
    }

    if options.mark_start_end {
        fill_rectangle(&mut img, layout.goal(), GOAL);
        fill_circle(&mut img, layout.ball(), BALL);
    }

    img
}

/// Render the maze and write it out as a PNG file, if the options name one.
pub fn render_and_save(maze: &Maze, options: &RenderOptions) -> ImageResult<RgbImage> {
    let img = render_maze_image(maze, options);
    if let Some(path) = options.output_file {
        img.save(path)?;
        info!("maze image written to {}", path.display());
    }
    Ok(img)
}

fn fill_rectangle(img: &mut RgbImage, rect: &Rectangle, colour: Rgb<u8>) {
    let (x0, x1) = pixel_span(rect.left(), rect.right(), img.width());
    let (y0, y1) = pixel_span(rect.top(), rect.bottom(), img.height());
    for y in y0..y1 {
        for x in x0..x1 {
            img.put_pixel(x, y, colour);
        }
    }
}

fn fill_circle(img: &mut RgbImage, ball: &Ball, colour: Rgb<u8>) {
    let (x0, x1) = pixel_span(ball.centre_x - ball.radius, ball.centre_x + ball.radius, img.width());
    let (y0, y1) = pixel_span(ball.centre_y - ball.radius, ball.centre_y + ball.radius, img.height());
    let radius_squared = ball.radius * ball.radius;
    for y in y0..y1 {
        for x in x0..x1 {
            let dx = x as f32 + 0.5 - ball.centre_x;
            let dy = y as f32 + 0.5 - ball.centre_y;
            if dx * dx + dy * dy <= radius_squared {
                img.put_pixel(x, y, colour);
            }
        }
    }
}

/// The pixel range covering `[low, high)`, clamped to `[0, limit)`.
fn pixel_span(low: f32, high: f32, limit: u32) -> (u32, u32) {
    let clamp = |v: f32| v.max(0.0).min(limit as f32) as u32;
    (clamp(low.floor()), clamp(high.ceil()))
}

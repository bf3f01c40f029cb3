use docopt::Docopt;
use error_chain::bail;
use log::{debug, info};
use maze_carver::{
    cells::Cell,
    generators,
    grid_dimensions::GridDimensions,
    grid_displays::{PathDisplay, StartEndPointsDisplay, TextMaze},
    maze::Maze,
    pathing,
    renderers,
    units::{ColumnsCount, RowsCount},
};
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;
use serde_derive::Deserialize;
use std::{
    fs::File,
    io,
    io::prelude::*,
    path::Path,
};

const USAGE: &str = "Maze Carver

Usage:
    maze_driver -h | --help
    maze_driver [options]
    maze_driver text [--text-out=<path> --show-path] [options]
    maze_driver image --image-out=<path> [--cell-pixels=<n> --wall-pixels=<n> --show-path] [options]

Options:
    -h --help              Show this screen.
    --rows=<r>             Number of rows in the maze [default: 4].
    --columns=<c>          Number of columns in the maze [default: 6].
    --grid-size=<n>        The maze is n * n, overrides rows and columns.
    --level=<n>            Game level, each level past the first adds a row and a column [default: 1].
    --seed=<s>             Seed for a reproducible maze.
    --start-row=<y>        Row of the cell carving starts from. Random if not given.
    --start-column=<x>     Column of the cell carving starts from. Random if not given.
    --text-out=<path>      Output file path for a textual rendering of a maze.
    --show-path            Show the path from the start corner to the goal corner.
    --image-out=<path>     Output file path for an image rendering of a maze. Always PNG format.
    --cell-pixels=<n>      Pixel count to render one cell side in a maze [default: 10] max 255.
    --wall-pixels=<n>      Pixel thickness of a wall [default: 2] max 255.
    --save-edges=<path>    Serialize the maze to a text file: each line is a pair of numbers. Line 1: n(#vertices) m(#edges). Line 2+ edge between vertices. Uses 1-based vertex indices.
";

#[derive(Debug, Deserialize)]
struct MazeArgs {
    flag_rows: usize,
    flag_columns: usize,
    flag_grid_size: Option<usize>,
    flag_level: usize,
    flag_seed: Option<u64>,
    flag_start_row: Option<usize>,
    flag_start_column: Option<usize>,
    cmd_text: bool,
    flag_text_out: String,
    flag_show_path: bool,
    cmd_image: bool,
    flag_image_out: String,
    flag_cell_pixels: u8,
    flag_wall_pixels: u8,
    flag_save_edges: String,
}

// Error, ErrorKind, ResultExt (chain_err) and Result for the driver.
mod errors {
    use error_chain::*;
    error_chain! {

        foreign_links {
            DocOptFailure(::docopt::Error);
            ImageFailure(::image::ImageError);
            Io(::std::io::Error);
            InvalidGrid(::maze_carver::grid_dimensions::GridDimensionError);
            InvalidStart(::maze_carver::maze::CellError);
        }
    }
}
use crate::errors::*;

fn main() -> Result<()> {

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: MazeArgs = Docopt::new(USAGE).and_then(|d| d.deserialize())?;

    let dimensions = level_dimensions(&args)?;
    let maze = generate_maze(&dimensions, &args)?;
    info!("generated a {} x {} maze with {} passages",
          dimensions.rows().0,
          dimensions.columns().0,
          maze.passages_count());

    if !args.flag_save_edges.is_empty() {
        save_maze_graph(&maze, &args.flag_save_edges)?;
    }

    let solution = if args.flag_show_path {
        Some(pathing::solution(&maze).ok_or("No route from the start corner to the goal corner.")?)
    } else {
        None
    };

    // Text is the default output when no render command is given
    let do_text_render = args.cmd_text || !args.cmd_image;

    if do_text_render {
        let text = render_text(&maze, solution.as_ref().map(Vec::as_slice));
        if args.flag_text_out.is_empty() {
            print!("{}", text);
        } else {
            write_text_to_file(&text, &args.flag_text_out)
                .chain_err(|| format!("Failed to write maze to text file {}", args.flag_text_out))?;
            info!("maze text written to {}", args.flag_text_out);
        }
    }

    if args.cmd_image {
        let render_options = renderers::RenderOptionsBuilder::new()
            .cell_side_pixels_length(args.flag_cell_pixels)
            .wall_pixels(args.flag_wall_pixels)
            .path(solution.as_ref().map(Vec::as_slice))
            .output_file(Some(Path::new(&args.flag_image_out)))
            .build();
        renderers::render_and_save(&maze, &render_options)
            .chain_err(|| format!("Failed to write maze image {}", args.flag_image_out))?;
    }

    Ok(())
}

/// The grid size from the arguments, grown once per level past the first.
fn level_dimensions(args: &MazeArgs) -> Result<GridDimensions> {
    let (rows, columns) = if let Some(square_grid_size) = args.flag_grid_size {
        (square_grid_size, square_grid_size)
    } else {
        (args.flag_rows, args.flag_columns)
    };
    let first_level = GridDimensions::new(RowsCount(rows), ColumnsCount(columns))?;
    let dimensions = first_level.grown(args.flag_level.saturating_sub(1));
    debug!("level {} grid is {:?}", args.flag_level, dimensions);
    Ok(dimensions)
}

fn generate_maze(dimensions: &GridDimensions, args: &MazeArgs) -> Result<Maze> {
    let mut rng = match args.flag_seed {
        Some(seed) => XorShiftRng::seed_from_u64(seed),
        None => XorShiftRng::from_rng(rand::thread_rng()).chain_err(|| "Failed to seed the random number generator")?,
    };

    let maze = match (args.flag_start_row, args.flag_start_column) {
        (Some(row), Some(column)) => generators::generate_from(dimensions, Cell::new(row, column), &mut rng)?,
        (None, None) => generators::recursive_backtracker(dimensions, &mut rng),
        _ => bail!("Both --start-row and --start-column are needed to choose the start cell."),
    };
    Ok(maze)
}

fn render_text(maze: &Maze, solution: Option<&[Cell]>) -> String {
    if let Some(path) = solution {
        let display = PathDisplay::new(path);
        TextMaze::with_display(maze, &display).to_string()
    } else {
        let display = StartEndPointsDisplay::corners(maze);
        TextMaze::with_display(maze, &display).to_string()
    }
}

fn write_text_to_file(data: &str, file_name: &str) -> io::Result<()> {
    let mut f = File::create(file_name)?;
    f.write_all(data.as_bytes())?;
    Ok(())
}

fn save_maze_graph(maze: &Maze, file_path: &str) -> Result<()> {

    let dimensions = maze.dimensions();
    let mut graph_data = String::new();
    graph_data.push_str(&format!("{} {}\n", maze.size(), maze.passages_count()));

    for (src, dst) in maze.iter_passages() {
        let index_a = dimensions.cell_to_index(src).ok_or("Passage from a cell outside the maze")?;
        let index_b = dimensions.cell_to_index(dst).ok_or("Passage to a cell outside the maze")?;
        graph_data.push_str(&format!("{} {}\n", index_a + 1, index_b + 1));
    }

    write_text_to_file(&graph_data, file_path)
        .chain_err(|| format!("Failed to write maze graph to text file {}", file_path))?;
    info!("maze edges written to {}", file_path);

    Ok(())
}

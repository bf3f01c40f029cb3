//! **maze_carver** generates perfect rectangular mazes with a randomised depth first walk (the recursive backtracker)
//! and lays them out for display: as box drawing text, as playfield geometry for a physics world and as PNG images.
//!
//! A maze is described by which cells were visited and which walls between neighbouring cells were opened. Every
//! cell can reach every other cell by exactly one route.

pub mod cells;
pub mod generators;
pub mod grid_dimensions;
pub mod grid_displays;
pub mod grid_iterators;
pub mod grids;
pub mod layout;
pub mod maze;
pub mod pathing;
pub mod random;
pub mod renderers;
pub mod units;
mod utils;

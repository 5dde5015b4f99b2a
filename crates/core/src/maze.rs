//! Procedural maze generation split into carving, marker placement and lattice helpers.

mod carve;
mod draw;
mod generator;
mod grid;
mod path;
mod placement;

pub use draw::{ScriptedDraws, UniformDraw};
pub use generator::{GeneratedMaze, MazeDimensions, MazeGenerator};
pub use grid::Grid;
pub use path::{reachable_open_cells, shortest_path};
pub use placement::{MAX_EXIT_ATTEMPTS, MIN_EXIT_DISTANCE_SQ};

use crate::types::MazeError;

/// Validates the dimensions and generates one maze from `rng`.
pub fn generate<R: UniformDraw + ?Sized>(
    width: usize,
    height: usize,
    rng: &mut R,
) -> Result<GeneratedMaze, MazeError> {
    let dimensions = MazeDimensions::new(width, height)?;
    Ok(MazeGenerator::new(dimensions).generate(rng))
}

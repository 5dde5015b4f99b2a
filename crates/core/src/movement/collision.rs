//! Axis-aligned overlap tests between the player box and blocking cells.

use crate::maze::Grid;
use crate::types::{CELL_SIZE, Cell, Pos, WorldPos};

pub const PLAYER_HALF_EXTENT: f32 = 0.5;
pub const BLOCK_HALF_EXTENT: f32 = 1.0;

/// Whether `cell` stops movement. A locked exit behaves like a wall.
pub fn blocks(cell: Cell, has_key: bool) -> bool {
    match cell {
        Cell::Wall => true,
        Cell::Exit => !has_key,
        Cell::Path | Cell::Key => false,
    }
}

/// Whether the player box centred at `pos` overlaps any blocking cell.
/// Cells beyond the grid read as walls, so leaving the maze always collides.
pub fn collides(grid: &Grid, pos: WorldPos, has_key: bool) -> bool {
    let reach = PLAYER_HALF_EXTENT + BLOCK_HALF_EXTENT;
    let (min_x, max_x) = candidate_range(pos.x, reach);
    let (min_y, max_y) = candidate_range(pos.z, reach);

    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let cell = Pos { y, x };
            if blocks(grid.cell_at(cell), has_key) && overlaps(pos, cell.world_center(), reach) {
                return true;
            }
        }
    }
    false
}

/// Lattice indices whose block could overlap a player centred at `coordinate`.
fn candidate_range(coordinate: f32, reach: f32) -> (i32, i32) {
    let low = ((coordinate - reach) / CELL_SIZE).floor() as i32;
    let high = ((coordinate + reach) / CELL_SIZE).ceil() as i32;
    (low, high)
}

/// Strict overlap on both axes; touching edges do not collide.
fn overlaps(player: WorldPos, block: WorldPos, reach: f32) -> bool {
    (player.x - block.x).abs() < reach && (player.z - block.z).abs() < reach
}

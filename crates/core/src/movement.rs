//! Per-tick movement resolution: yaw-relative displacement, collision with wall sliding, and
//! key/exit proximity events. The resolver is stateless; callers thread `has_key` through.

pub mod collision;

pub use collision::{BLOCK_HALF_EXTENT, PLAYER_HALF_EXTENT, blocks, collides};

use crate::maze::Grid;
use crate::types::{MovementEvent, MovementIntent, WorldPos};

pub const KEY_PICKUP_RADIUS: f32 = 1.0;
pub const EXIT_ESCAPE_RADIUS: f32 = 1.2;

#[derive(Clone, Debug, PartialEq)]
pub struct Resolution {
    pub position: WorldPos,
    pub events: Vec<MovementEvent>,
}

/// World-space displacement for `intent` when facing `yaw`. Pitch never contributes.
pub fn displacement(yaw: f32, intent: &MovementIntent) -> (f32, f32) {
    let (sin, cos) = yaw.sin_cos();
    let forward = (-sin, -cos);
    let right = (cos, -sin);
    let dx = (forward.0 * intent.forward + right.0 * intent.strafe) * intent.speed;
    let dz = (forward.1 * intent.forward + right.1 * intent.strafe) * intent.speed;
    (dx, dz)
}

pub fn resolve(
    current: WorldPos,
    yaw: f32,
    intent: &MovementIntent,
    grid: &Grid,
    has_key: bool,
) -> Resolution {
    let (dx, dz) = displacement(yaw, intent);
    let position = slide(grid, current, dx, dz, has_key);
    let events = proximity_events(grid, position, has_key);
    Resolution { position, events }
}

/// Applies the full move when it is clear; otherwise tries each axis alone from `current`.
pub fn slide(grid: &Grid, current: WorldPos, dx: f32, dz: f32, has_key: bool) -> WorldPos {
    let full = current.offset(dx, dz);
    if !collides(grid, full, has_key) {
        return full;
    }

    let along_x = current.offset(dx, 0.0);
    let along_z = current.offset(0.0, dz);
    let x_clear = !collides(grid, along_x, has_key);
    let z_clear = !collides(grid, along_z, has_key);
    match (x_clear, z_clear) {
        // Both axes clear means the diagonal clips an outside corner, and applying both would
        // land on the blocked full move. X is resolved first, so it wins.
        (true, _) => along_x,
        (false, true) => along_z,
        (false, false) => current,
    }
}

pub fn proximity_events(grid: &Grid, position: WorldPos, has_key: bool) -> Vec<MovementEvent> {
    let mut events = Vec::new();
    if !has_key
        && let Some(key) = grid.key_cell()
        && position.distance_to(key.world_center()) < KEY_PICKUP_RADIUS
    {
        events.push(MovementEvent::KeyCollected);
    }
    if has_key
        && let Some(exit) = grid.exit_cell()
        && position.distance_to(exit.world_center()) < EXIT_ESCAPE_RADIUS
    {
        events.push(MovementEvent::ExitReached);
    }
    events
}

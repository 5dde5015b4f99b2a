//! Route-following steering: walks the player along cell centres to the key, then the exit.
//! Drives demo play in the app and end-to-end tests; the simulation never depends on it.

use std::f32::consts::{PI, TAU};

use crate::input::TickInput;
use crate::maze::{Grid, shortest_path};
use crate::player::PlayerState;
use crate::types::{CELL_SIZE, LookDelta, MovementIntent, Pos, WorldPos};

#[derive(Clone, Debug, PartialEq)]
pub struct Autopilot {
    route: Vec<Pos>,
    next: usize,
    speed: f32,
}

impl Autopilot {
    /// Plans from the player's current cell. Returns `None` when the route to the key would
    /// have to pass through the still-locked exit, or when a marker is missing.
    pub fn plan(grid: &Grid, player: &PlayerState, speed: f32) -> Option<Self> {
        let here = lattice_cell(player.position);
        let exit = grid.exit_cell()?;

        let route = if player.has_key {
            shortest_path(grid, here, exit)?
        } else {
            let key = grid.key_cell()?;
            let to_key = shortest_path(grid, here, key)?;
            if to_key.contains(&exit) {
                return None;
            }
            let to_exit = shortest_path(grid, key, exit)?;
            to_key.into_iter().chain(to_exit.into_iter().skip(1)).collect()
        };

        Some(Self { route, next: 0, speed })
    }

    pub fn route(&self) -> &[Pos] {
        &self.route
    }

    pub fn is_finished(&self) -> bool {
        self.next >= self.route.len()
    }

    /// Input that turns toward the next waypoint and moves at most up to it.
    pub fn steer(&mut self, player: &PlayerState) -> TickInput {
        while let Some(&waypoint) = self.route.get(self.next) {
            let target = waypoint.world_center();
            let distance = player.position.distance_to(target);
            if distance > 1e-3 {
                return self.head_toward(player, target, distance);
            }
            self.next += 1;
        }
        TickInput::IDLE
    }

    fn head_toward(&self, player: &PlayerState, target: WorldPos, distance: f32) -> TickInput {
        let dx = target.x - player.position.x;
        let dz = target.z - player.position.z;
        let desired_yaw = (-dx).atan2(-dz);
        let turn = shortest_turn(desired_yaw - player.orientation.yaw);
        TickInput {
            intent: MovementIntent { forward: 1.0, strafe: 0.0, speed: self.speed.min(distance) },
            look: LookDelta { yaw: turn, pitch: -player.orientation.pitch },
        }
    }
}

fn lattice_cell(position: WorldPos) -> Pos {
    Pos { y: (position.z / CELL_SIZE).round() as i32, x: (position.x / CELL_SIZE).round() as i32 }
}

fn shortest_turn(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(TAU);
    if wrapped > PI { wrapped - TAU } else { wrapped }
}

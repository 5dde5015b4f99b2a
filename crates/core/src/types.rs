use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Side length of one lattice cell in world units.
pub const CELL_SIZE: f32 = 2.0;

/// Lattice coordinate. `x` is the column, `y` the row; `y` maps onto world `z`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

impl Pos {
    pub fn world_center(self) -> WorldPos {
        WorldPos { x: self.x as f32 * CELL_SIZE, z: self.y as f32 * CELL_SIZE }
    }

    /// Squared distance between two cells measured in world units (lattice delta scaled by 2).
    pub fn world_distance_sq(self, other: Pos) -> i64 {
        let dx = i64::from(self.x - other.x) * 2;
        let dz = i64::from(self.y - other.y) * 2;
        dx * dx + dz * dz
    }

    pub fn neighbors(self) -> [Pos; 4] {
        [
            Pos { y: self.y - 1, x: self.x },
            Pos { y: self.y, x: self.x + 1 },
            Pos { y: self.y + 1, x: self.x },
            Pos { y: self.y, x: self.x - 1 },
        ]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Wall,
    Path,
    Key,
    Exit,
}

impl Cell {
    pub fn is_open(self) -> bool {
        self != Cell::Wall
    }

    pub fn symbol(self) -> char {
        match self {
            Cell::Wall => '#',
            Cell::Path => '.',
            Cell::Key => 'K',
            Cell::Exit => 'E',
        }
    }
}

/// Continuous horizontal position in world space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WorldPos {
    pub x: f32,
    pub z: f32,
}

impl WorldPos {
    pub fn offset(self, dx: f32, dz: f32) -> WorldPos {
        WorldPos { x: self.x + dx, z: self.z + dz }
    }

    pub fn distance_to(self, other: WorldPos) -> f32 {
        let dx = self.x - other.x;
        let dz = self.z - other.z;
        (dx * dx + dz * dz).sqrt()
    }
}

/// Per-tick movement request in camera space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MovementIntent {
    pub forward: f32,
    pub strafe: f32,
    pub speed: f32,
}

impl MovementIntent {
    pub const IDLE: MovementIntent = MovementIntent { forward: 0.0, strafe: 0.0, speed: 0.0 };

    /// Builds an intent whose (forward, strafe) vector never exceeds unit length, so diagonal
    /// input is not faster than straight input.
    pub fn from_axes(forward: f32, strafe: f32, speed: f32) -> Self {
        let forward = sanitize_axis(forward);
        let strafe = sanitize_axis(strafe);
        let length = (forward * forward + strafe * strafe).sqrt();
        if length > 1.0 {
            Self { forward: forward / length, strafe: strafe / length, speed }
        } else {
            Self { forward, strafe, speed }
        }
    }

    pub fn is_idle(&self) -> bool {
        self.speed == 0.0 || (self.forward == 0.0 && self.strafe == 0.0)
    }
}

fn sanitize_axis(value: f32) -> f32 {
    if value.is_finite() { value.clamp(-1.0, 1.0) } else { 0.0 }
}

/// Orientation change requested this tick, in radians.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LookDelta {
    pub yaw: f32,
    pub pitch: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MovementEvent {
    KeyCollected,
    ExitReached,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControlScheme {
    MouseKeyboard,
    Touch,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundOutcome {
    Escaped,
    TimedOut,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Width,
    Height,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Width => f.write_str("width"),
            Axis::Height => f.write_str("height"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    #[error("maze {axis} must be an odd number of at least 5 cells, got {value}")]
    InvalidDimension { axis: Axis, value: usize },
    #[error("layout row {row} has {found} cells, expected {expected}")]
    RaggedLayout { row: usize, expected: usize, found: usize },
    #[error("unknown cell symbol {symbol:?} at row {row}, column {column}")]
    UnknownSymbol { row: usize, column: usize, symbol: char },
    #[error("layout contains more than one {symbol:?} cell")]
    DuplicateMarker { symbol: char },
    #[error("layout is empty")]
    EmptyLayout,
}

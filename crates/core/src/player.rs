use std::f32::consts::{PI, TAU};

use crate::types::{LookDelta, Pos, WorldPos};

/// Pitch never exceeds this magnitude, in radians.
pub const PITCH_LIMIT: f32 = PI / 2.5;
pub const EYE_HEIGHT: f32 = 1.6;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Orientation {
    pub yaw: f32,
    pub pitch: f32,
}

impl Orientation {
    /// Adds `delta`, wrapping yaw into `(-PI, PI]` and clamping pitch to the limit.
    pub fn apply(&mut self, delta: LookDelta) {
        if delta.yaw.is_finite() {
            self.yaw = wrap_angle(self.yaw + delta.yaw);
        }
        if delta.pitch.is_finite() {
            self.pitch = (self.pitch + delta.pitch).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }
    }
}

fn wrap_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(TAU);
    if wrapped > PI { wrapped - TAU } else { wrapped }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlayerState {
    pub position: WorldPos,
    pub orientation: Orientation,
    pub has_key: bool,
}

impl PlayerState {
    /// Fresh player at the centre of `start`, facing -z, without the key.
    pub fn spawn_at(start: Pos) -> Self {
        Self { position: start.world_center(), orientation: Orientation::default(), has_key: false }
    }
}

//! Touch controls: a floating joystick on the left half of the screen and look drags on the
//! right half.

use macroquad::input::{Touch, TouchPhase};
use macroquad::math::Vec2;

/// Stick travel in pixels that maps to full speed.
pub const JOYSTICK_RADIUS: f32 = 50.0;

/// `(forward, strafe)` for a stick dragged from `origin` to `current`. Travel is clamped to the
/// joystick radius and normalized, so both axes stay within `[-1, 1]`. Screen-down is backward.
pub fn stick_axes(origin: Vec2, current: Vec2) -> (f32, f32) {
    let offset = (current - origin).clamp_length_max(JOYSTICK_RADIUS) / JOYSTICK_RADIUS;
    (-offset.y, offset.x)
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct StickTouch {
    id: u64,
    origin: Vec2,
    current: Vec2,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct LookTouch {
    id: u64,
    last: Vec2,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TouchFrame {
    pub forward: f32,
    pub strafe: f32,
    /// Look drag this frame in pixels.
    pub look_pixels: Vec2,
}

#[derive(Clone, Debug, Default)]
pub struct TouchTracker {
    stick: Option<StickTouch>,
    look: Option<LookTouch>,
}

impl TouchTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Joystick origin and knob position while the stick is held.
    pub fn stick(&self) -> Option<(Vec2, Vec2)> {
        self.stick.map(|stick| (stick.origin, stick.current))
    }

    pub fn update(&mut self, touches: &[Touch], screen_width: f32) -> TouchFrame {
        let mut look_pixels = Vec2::ZERO;

        for touch in touches {
            match touch.phase {
                TouchPhase::Started => {
                    if touch.position.x < screen_width / 2.0 {
                        if self.stick.is_none() {
                            self.stick = Some(StickTouch {
                                id: touch.id,
                                origin: touch.position,
                                current: touch.position,
                            });
                        }
                    } else if self.look.is_none() {
                        self.look = Some(LookTouch { id: touch.id, last: touch.position });
                    }
                }
                TouchPhase::Moved | TouchPhase::Stationary => {
                    if let Some(stick) = self.stick.as_mut()
                        && stick.id == touch.id
                    {
                        stick.current = touch.position;
                    }
                    if let Some(look) = self.look.as_mut()
                        && look.id == touch.id
                    {
                        look_pixels += touch.position - look.last;
                        look.last = touch.position;
                    }
                }
                TouchPhase::Ended | TouchPhase::Cancelled => {
                    if self.stick.is_some_and(|stick| stick.id == touch.id) {
                        self.stick = None;
                    }
                    if self.look.is_some_and(|look| look.id == touch.id) {
                        self.look = None;
                    }
                }
            }
        }

        let (forward, strafe) =
            self.stick.map_or((0.0, 0.0), |stick| stick_axes(stick.origin, stick.current));
        TouchFrame { forward, strafe, look_pixels }
    }
}

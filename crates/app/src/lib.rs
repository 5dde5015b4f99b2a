pub mod app_loop;
pub mod brightness;
pub mod config_file;
pub mod seed;
pub mod settings_file;
pub mod touch;

use maze_core::{ControlScheme, LookDelta, RoundOutcome};

pub const APP_NAME: &str = "Maze Escape";

/// Countdown as `Time left: MM:SS`. Minutes are not capped at 59.
pub fn format_countdown(seconds: u32) -> String {
    format!("Time left: {:02}:{:02}", seconds / 60, seconds % 60)
}

pub fn key_status_text(has_key: bool) -> &'static str {
    if has_key { "Key: found! The exit is open" } else { "Key: not found" }
}

pub fn outcome_text(outcome: RoundOutcome) -> &'static str {
    match outcome {
        RoundOutcome::Escaped => "Congratulations! You opened the door and escaped!",
        RoundOutcome::TimedOut => "Time's up! You did not manage to escape.",
    }
}

pub fn control_label(control: ControlScheme) -> &'static str {
    match control {
        ControlScheme::MouseKeyboard => "mouse + keyboard",
        ControlScheme::Touch => "touch",
    }
}

/// Look change for a pointer drag of `(dx, dy)` pixels. Dragging right turns right and dragging
/// down looks down.
pub fn look_from_drag(dx: f32, dy: f32, sensitivity: f32) -> LookDelta {
    LookDelta { yaw: -dx * sensitivity, pitch: -dy * sensitivity }
}

/// Format a seed as an exact decimal string with no prefix or suffix.
pub fn format_seed(seed: u64) -> String {
    seed.to_string()
}

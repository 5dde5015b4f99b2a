//! 2D overlay: status and timer while playing, setup and outcome screens, settings panel.

use macroquad::prelude::*;
use maze_app::app_loop::AppState;
use maze_app::brightness::{MAX_BRIGHTNESS, MIN_BRIGHTNESS};
use maze_app::touch::JOYSTICK_RADIUS;
use maze_app::{control_label, format_countdown, format_seed, key_status_text, outcome_text};
use maze_core::{ControlScheme, SessionPhase, SessionSnapshot};

const PAD: f32 = 20.0;
const FONT_SIZE: f32 = 28.0;
const LINE_STEP: f32 = 34.0;
const KEY_MISSING_COLOR: Color = Color::new(1.0, 0.0, 0.0, 1.0);
const KEY_FOUND_COLOR: Color = Color::new(0.0, 1.0, 0.0, 1.0);
const PANEL_COLOR: Color = Color::new(0.0, 0.0, 0.0, 0.75);

/// Centre-screen lines for the phases that are not live play.
pub fn screen_lines(snapshot: &SessionSnapshot<'_>, seed: u64) -> Vec<String> {
    match snapshot.phase {
        SessionPhase::Setup => vec![
            "Maze Escape".to_string(),
            "Find the key, then reach the exit before time runs out.".to_string(),
            format!("1: play with {}", control_label(ControlScheme::MouseKeyboard)),
            format!("2: play with {}", control_label(ControlScheme::Touch)),
            "Tab: settings".to_string(),
            format!("Seed {}", format_seed(seed)),
        ],
        SessionPhase::Won | SessionPhase::Lost => {
            let mut lines = Vec::new();
            if let Some(outcome) = snapshot.last_outcome {
                lines.push(outcome_text(outcome).to_string());
            }
            lines.push("Enter: continue    R: new maze".to_string());
            lines
        }
        SessionPhase::Playing => Vec::new(),
    }
}

pub fn settings_lines(brightness: f32) -> Vec<String> {
    vec![
        "Settings (paused)".to_string(),
        format!("Brightness: {brightness:.1}  [{MIN_BRIGHTNESS:.1} - {MAX_BRIGHTNESS:.1}]"),
        "[ / ]: adjust    0: reset    Tab: resume".to_string(),
    ]
}

pub fn draw_hud(
    snapshot: &SessionSnapshot<'_>,
    app: &AppState,
    stick: Option<(Vec2, Vec2)>,
    seed: u64,
) {
    if snapshot.phase == SessionPhase::Playing {
        draw_play_status(snapshot, app.autopilot_active());
        draw_crosshair();
        if let Some((origin, knob)) = stick {
            draw_circle_lines(origin.x, origin.y, JOYSTICK_RADIUS, 2.0, WHITE);
            draw_circle(knob.x, knob.y, JOYSTICK_RADIUS * 0.4, Color::new(1.0, 1.0, 1.0, 0.5));
        }
    } else {
        draw_centered_panel(&screen_lines(snapshot, seed));
    }

    if app.is_paused() {
        draw_centered_panel(&settings_lines(app.brightness));
    }
}

fn draw_play_status(snapshot: &SessionSnapshot<'_>, autopilot: bool) {
    let has_key = snapshot.player.has_key;
    let key_colour = if has_key { KEY_FOUND_COLOR } else { KEY_MISSING_COLOR };
    draw_text(key_status_text(has_key), PAD, PAD + FONT_SIZE, FONT_SIZE, key_colour);
    draw_text(
        &format_countdown(snapshot.time_left),
        PAD,
        PAD + FONT_SIZE + LINE_STEP,
        FONT_SIZE,
        WHITE,
    );
    if autopilot {
        draw_text("Autopilot (P to stop)", PAD, PAD + FONT_SIZE + 2.0 * LINE_STEP, FONT_SIZE, GRAY);
    }
}

fn draw_crosshair() {
    let (cx, cy) = (screen_width() / 2.0, screen_height() / 2.0);
    draw_line(cx - 8.0, cy, cx + 8.0, cy, 2.0, WHITE);
    draw_line(cx, cy - 8.0, cx, cy + 8.0, 2.0, WHITE);
}

fn draw_centered_panel(lines: &[String]) {
    if lines.is_empty() {
        return;
    }
    let widest = lines
        .iter()
        .map(|line| measure_text(line, None, FONT_SIZE as u16, 1.0).width)
        .fold(0.0_f32, f32::max);
    let width = widest + 2.0 * PAD;
    let height = lines.len() as f32 * LINE_STEP + 2.0 * PAD;
    let x = (screen_width() - width) / 2.0;
    let y = (screen_height() - height) / 2.0;

    draw_rectangle(x, y, width, height, PANEL_COLOR);
    let mut text_y = y + PAD + FONT_SIZE * 0.8;
    for line in lines {
        draw_text(line, x + PAD, text_y, FONT_SIZE, WHITE);
        text_y += LINE_STEP;
    }
}

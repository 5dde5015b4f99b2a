mod frame_input;
mod hud;
mod scene_render;
mod window_config;

use std::env;

use macroquad::prelude::*;
use maze_app::app_loop::AppState;
use maze_app::brightness::DEFAULT_BRIGHTNESS;
use maze_app::config_file::{default_config_path, load_config_or_default};
use maze_app::seed::{generate_runtime_seed, parse_launch_args};
use maze_app::settings_file::SettingsFile;
use maze_app::touch::TouchTracker;
use maze_core::{ControlScheme, Session, SessionPhase};

use crate::frame_input::capture_frame_input;

fn window_conf() -> Conf {
    window_config::build_window_conf()
}

fn load_brightness() -> f32 {
    let Some(path) = SettingsFile::get_default_path() else {
        return DEFAULT_BRIGHTNESS;
    };
    match SettingsFile::load(&path) {
        Ok(settings) => settings.brightness,
        Err(err) => {
            log::debug!("no saved settings at {}: {err}", path.display());
            DEFAULT_BRIGHTNESS
        }
    }
}

fn save_brightness(brightness: f32) {
    let Some(path) = SettingsFile::get_default_path() else {
        return;
    };
    if let Err(err) = SettingsFile::with_brightness(brightness).write_atomic(&path) {
        log::warn!("failed to save settings to {}: {err}", path.display());
    }
}

fn wants_cursor_grab(session: &Session, app: &AppState) -> bool {
    session.phase() == SessionPhase::Playing
        && session.control() == Some(ControlScheme::MouseKeyboard)
        && !app.is_paused()
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();
    let options = match parse_launch_args(&args, generate_runtime_seed()) {
        Ok(options) => options,
        Err(err) => {
            log::error!("{err}");
            return;
        }
    };
    let seed = options.seed.value();
    let config_path = options.config_path.or_else(default_config_path);
    let config = load_config_or_default(config_path.as_deref());

    let mut session = match Session::new(config, seed) {
        Ok(session) => session,
        Err(err) => {
            log::error!("cannot start: {err}");
            return;
        }
    };
    log::info!("seed {seed} ({:?})", options.seed);

    let mut app = AppState::new(load_brightness());
    let mut touch = TouchTracker::new();
    let mut cursor_grabbed = false;

    loop {
        let frame = capture_frame_input(session.control(), session.config(), &mut touch);
        for event in app.tick(&mut session, &frame.keys_pressed, frame.tick, get_frame_time()) {
            log::debug!("{event:?}");
        }

        if app.brightness_dirty {
            save_brightness(app.brightness);
            app.brightness_dirty = false;
        }

        let grab = wants_cursor_grab(&session, &app);
        if grab != cursor_grabbed {
            set_cursor_grab(grab);
            show_mouse(!grab);
            cursor_grabbed = grab;
        }

        let snapshot = session.snapshot();
        scene_render::draw_scene(&snapshot, app.brightness);
        hud::draw_hud(&snapshot, &app, touch.stick(), seed);

        next_frame().await
    }
}

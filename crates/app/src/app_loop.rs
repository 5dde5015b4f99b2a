use macroquad::prelude::KeyCode;
use maze_core::{Autopilot, ControlScheme, Session, SessionEvent, SessionPhase, TickInput};

use crate::brightness::{BrightnessAction, DEFAULT_BRIGHTNESS, apply_brightness_action};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overlay {
    #[default]
    Hidden,
    Settings,
}

pub struct AppState {
    pub overlay: Overlay,
    pub brightness: f32,
    /// Set when the brightness changed this frame. The caller persists it and clears the flag.
    pub brightness_dirty: bool,
    autopilot: Option<Autopilot>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DEFAULT_BRIGHTNESS)
    }
}

impl AppState {
    pub fn new(brightness: f32) -> Self {
        Self { overlay: Overlay::Hidden, brightness, brightness_dirty: false, autopilot: None }
    }

    pub fn is_paused(&self) -> bool {
        self.overlay == Overlay::Settings
    }

    pub fn autopilot_active(&self) -> bool {
        self.autopilot.is_some()
    }

    /// Handles this frame's key presses, then advances the simulation by one tick and the
    /// countdown by `frame_secs` unless play is paused or not in progress.
    pub fn tick(
        &mut self,
        session: &mut Session,
        keys_pressed: &[KeyCode],
        input: TickInput,
        frame_secs: f32,
    ) -> Vec<SessionEvent> {
        if keys_pressed.contains(&KeyCode::Tab) {
            self.overlay = match self.overlay {
                Overlay::Hidden => Overlay::Settings,
                Overlay::Settings => Overlay::Hidden,
            };
        }

        if self.is_paused() {
            self.handle_settings_keys(keys_pressed);
            return Vec::new();
        }

        match session.phase() {
            SessionPhase::Setup => self.handle_setup_keys(session, keys_pressed),
            SessionPhase::Playing => {
                if keys_pressed.contains(&KeyCode::R) {
                    self.autopilot = None;
                    session.restart();
                    return Vec::new();
                }
                if keys_pressed.contains(&KeyCode::P) {
                    self.toggle_autopilot(session);
                }
            }
            SessionPhase::Won | SessionPhase::Lost => {
                if keys_pressed.contains(&KeyCode::R) {
                    session.restart();
                } else if keys_pressed.contains(&KeyCode::Enter)
                    || keys_pressed.contains(&KeyCode::Space)
                {
                    if let Err(err) = session.acknowledge() {
                        log::warn!("{err}");
                    }
                }
                return Vec::new();
            }
        }

        if session.phase() != SessionPhase::Playing {
            return Vec::new();
        }

        let input = match self.autopilot.as_mut() {
            Some(pilot) => pilot.steer(session.player()),
            None => input,
        };
        let mut events = session.step(&input);
        if session.phase() == SessionPhase::Playing {
            events.extend(session.advance_clock(frame_secs));
        }
        if session.phase() != SessionPhase::Playing {
            self.autopilot = None;
        }
        events
    }

    fn handle_setup_keys(&mut self, session: &mut Session, keys_pressed: &[KeyCode]) {
        let control = if keys_pressed.contains(&KeyCode::Key1) {
            ControlScheme::MouseKeyboard
        } else if keys_pressed.contains(&KeyCode::Key2) {
            ControlScheme::Touch
        } else {
            return;
        };
        if let Err(err) = session.begin(control) {
            log::warn!("{err}");
        }
    }

    fn handle_settings_keys(&mut self, keys_pressed: &[KeyCode]) {
        let action = if keys_pressed.contains(&KeyCode::RightBracket) {
            BrightnessAction::Increase
        } else if keys_pressed.contains(&KeyCode::LeftBracket) {
            BrightnessAction::Decrease
        } else if keys_pressed.contains(&KeyCode::Key0) {
            BrightnessAction::Reset
        } else {
            return;
        };
        let next = apply_brightness_action(self.brightness, action);
        if next != self.brightness {
            self.brightness = next;
            self.brightness_dirty = true;
        }
    }

    fn toggle_autopilot(&mut self, session: &Session) {
        if self.autopilot.take().is_some() {
            return;
        }
        let speed = session.config().move_speed;
        self.autopilot = Autopilot::plan(session.grid(), session.player(), speed);
        if self.autopilot.is_none() {
            log::warn!("no route to the key avoids the locked exit; autopilot unavailable");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maze_core::{GameConfig, LookDelta, MovementIntent};

    fn session(time_limit_secs: u32) -> Session {
        let config = GameConfig { time_limit_secs, ..GameConfig::default() };
        Session::new(config, 17).expect("valid config")
    }

    #[test]
    fn number_keys_pick_the_control_scheme() {
        let mut session = session(60);
        let mut app = AppState::default();

        app.tick(&mut session, &[], TickInput::IDLE, 0.016);
        assert_eq!(session.phase(), SessionPhase::Setup);

        app.tick(&mut session, &[KeyCode::Key2], TickInput::IDLE, 0.016);
        assert_eq!(session.phase(), SessionPhase::Playing);
        assert_eq!(session.control(), Some(ControlScheme::Touch));
    }

    #[test]
    fn settings_overlay_freezes_movement_and_the_clock() {
        let mut session = session(60);
        let mut app = AppState::default();
        app.tick(&mut session, &[KeyCode::Key1], TickInput::IDLE, 0.0);
        app.tick(&mut session, &[KeyCode::Tab], TickInput::IDLE, 0.0);
        assert!(app.is_paused());

        let before = *session.player();
        let walk = TickInput {
            intent: MovementIntent::from_axes(1.0, 0.0, 0.5),
            look: LookDelta { yaw: 0.4, pitch: 0.0 },
        };
        for _ in 0..10 {
            app.tick(&mut session, &[], walk, 1.0);
        }
        assert_eq!(*session.player(), before);
        assert_eq!(session.time_left(), 60);

        app.tick(&mut session, &[KeyCode::Tab], TickInput::IDLE, 1.0);
        assert!(!app.is_paused());
        assert_eq!(session.time_left(), 59);
    }

    #[test]
    fn brackets_adjust_brightness_only_in_settings() {
        let mut session = session(60);
        let mut app = AppState::default();

        app.tick(&mut session, &[KeyCode::RightBracket], TickInput::IDLE, 0.0);
        assert_eq!(app.brightness, 1.0);
        assert!(!app.brightness_dirty);

        app.tick(&mut session, &[KeyCode::Tab], TickInput::IDLE, 0.0);
        app.tick(&mut session, &[KeyCode::RightBracket], TickInput::IDLE, 0.0);
        assert!((app.brightness - 1.1).abs() < 0.0001);
        assert!(app.brightness_dirty);

        app.brightness_dirty = false;
        app.tick(&mut session, &[KeyCode::Key0], TickInput::IDLE, 0.0);
        assert_eq!(app.brightness, 1.0);
        assert!(app.brightness_dirty);
    }

    #[test]
    fn timeout_then_acknowledge_returns_to_setup() {
        let mut session = session(2);
        let mut app = AppState::default();
        app.tick(&mut session, &[KeyCode::Key1], TickInput::IDLE, 0.0);

        let events = app.tick(&mut session, &[], TickInput::IDLE, 2.5);
        assert_eq!(events, vec![SessionEvent::TimedOut]);
        assert_eq!(session.phase(), SessionPhase::Lost);

        app.tick(&mut session, &[KeyCode::Enter], TickInput::IDLE, 0.0);
        assert_eq!(session.phase(), SessionPhase::Setup);
        assert_eq!(session.time_left(), 2);
    }

    #[test]
    fn restart_key_replaces_the_maze_mid_round() {
        let mut session = session(60);
        let mut app = AppState::default();
        app.tick(&mut session, &[KeyCode::Key1], TickInput::IDLE, 0.0);
        app.tick(&mut session, &[], TickInput::IDLE, 3.0);
        assert_eq!(session.time_left(), 57);

        app.tick(&mut session, &[KeyCode::R], TickInput::IDLE, 0.0);
        assert_eq!(session.phase(), SessionPhase::Playing);
        assert_eq!(session.time_left(), 60);
        assert_eq!(session.mazes_generated(), 2);
    }
}

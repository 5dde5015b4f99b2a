//! Keyboard, mouse and touch collection for one rendered frame.

use macroquad::prelude::{
    KeyCode, is_key_down, is_key_pressed, mouse_delta_position, screen_height, screen_width,
    touches,
};
use maze_app::look_from_drag;
use maze_app::touch::TouchTracker;
use maze_core::{ControlScheme, GameConfig, LookDelta, MovementIntent, TickInput};

const ACTION_KEYS: [KeyCode; 10] = [
    KeyCode::Tab,
    KeyCode::Key0,
    KeyCode::Key1,
    KeyCode::Key2,
    KeyCode::LeftBracket,
    KeyCode::RightBracket,
    KeyCode::Enter,
    KeyCode::Space,
    KeyCode::R,
    KeyCode::P,
];

pub struct FrameInput {
    pub keys_pressed: Vec<KeyCode>,
    pub tick: TickInput,
}

pub fn capture_frame_input(
    control: Option<ControlScheme>,
    config: &GameConfig,
    touch: &mut TouchTracker,
) -> FrameInput {
    let keys_pressed = ACTION_KEYS.into_iter().filter(|&key| is_key_pressed(key)).collect();

    let mut forward = axis(KeyCode::W, KeyCode::S);
    let mut strafe = axis(KeyCode::D, KeyCode::A);
    let turn = axis(KeyCode::Left, KeyCode::Right) * config.keyboard_turn_speed;
    let mut look = LookDelta { yaw: turn, pitch: 0.0 };

    match control {
        Some(ControlScheme::MouseKeyboard) => {
            // Local coordinates span [-1, 1]; the delta is previous minus current.
            let delta = mouse_delta_position();
            let dx = -delta.x * screen_width() / 2.0;
            let dy = -delta.y * screen_height() / 2.0;
            add_look(&mut look, look_from_drag(dx, dy, config.mouse_sensitivity));
        }
        Some(ControlScheme::Touch) => {
            let frame = touch.update(&touches(), screen_width());
            forward += frame.forward;
            strafe += frame.strafe;
            let drag = look_from_drag(
                frame.look_pixels.x,
                frame.look_pixels.y,
                config.touch_sensitivity,
            );
            add_look(&mut look, drag);
        }
        None => {}
    }

    let intent = MovementIntent::from_axes(forward, strafe, config.move_speed);
    FrameInput { keys_pressed, tick: TickInput { intent, look } }
}

fn axis(positive: KeyCode, negative: KeyCode) -> f32 {
    let mut value = 0.0;
    if is_key_down(positive) {
        value += 1.0;
    }
    if is_key_down(negative) {
        value -= 1.0;
    }
    value
}

fn add_look(total: &mut LookDelta, delta: LookDelta) {
    total.yaw += delta.yaw;
    total.pitch += delta.pitch;
}

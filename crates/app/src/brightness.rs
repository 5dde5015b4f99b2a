//! Scene brightness model: the settings slider value and the light factors derived from it.

pub const DEFAULT_BRIGHTNESS: f32 = 1.0;
pub const MIN_BRIGHTNESS: f32 = 0.2;
pub const MAX_BRIGHTNESS: f32 = 2.0;
pub const BRIGHTNESS_STEP: f32 = 0.1;

const AMBIENT_PER_BRIGHTNESS: f32 = 0.4;
const FLASHLIGHT_PER_BRIGHTNESS: f32 = 8.0;
/// Beyond this distance the flashlight contributes nothing.
pub const FLASHLIGHT_RANGE: f32 = 40.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BrightnessAction {
    Increase,
    Decrease,
    Reset,
}

pub fn clamp_brightness(value: f32) -> f32 {
    if !value.is_finite() {
        return DEFAULT_BRIGHTNESS;
    }
    value.clamp(MIN_BRIGHTNESS, MAX_BRIGHTNESS)
}

pub fn apply_brightness_action(current: f32, action: BrightnessAction) -> f32 {
    match action {
        BrightnessAction::Increase => clamp_brightness(current + BRIGHTNESS_STEP),
        BrightnessAction::Decrease => clamp_brightness(current - BRIGHTNESS_STEP),
        BrightnessAction::Reset => DEFAULT_BRIGHTNESS,
    }
}

pub fn ambient_factor(brightness: f32) -> f32 {
    AMBIENT_PER_BRIGHTNESS * clamp_brightness(brightness)
}

pub fn flashlight_factor(brightness: f32) -> f32 {
    FLASHLIGHT_PER_BRIGHTNESS * clamp_brightness(brightness)
}

/// Light reaching a surface `distance` units in front of the camera, capped at full intensity.
pub fn light_at(distance: f32, brightness: f32) -> f32 {
    let distance = distance.max(0.0);
    let falloff = (1.0 - distance / FLASHLIGHT_RANGE).max(0.0);
    let attenuation = falloff * falloff / (1.0 + distance * distance);
    let flashlight = flashlight_factor(brightness) * attenuation;
    (ambient_factor(brightness) + flashlight).min(1.0)
}

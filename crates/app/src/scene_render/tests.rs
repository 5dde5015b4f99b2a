use super::{FOG_COLOR, fog_visibility, fogged, look_direction, shade};
use macroquad::prelude::Color;
use maze_core::player::Orientation;
use std::f32::consts::FRAC_PI_2;

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

#[test]
fn default_orientation_looks_down_negative_z() {
    let direction = look_direction(Orientation::default());
    assert!(close(direction.x, 0.0) && close(direction.y, 0.0) && close(direction.z, -1.0));
}

#[test]
fn quarter_turn_left_looks_down_negative_x() {
    let direction = look_direction(Orientation { yaw: FRAC_PI_2, pitch: 0.0 });
    assert!(close(direction.x, -1.0) && close(direction.z, 0.0));
}

#[test]
fn pitch_tilts_the_view_up() {
    let direction = look_direction(Orientation { yaw: 0.0, pitch: 0.5 });
    assert!(direction.y > 0.0);
    assert!(close(direction.length(), 1.0));
}

#[test]
fn fog_thickens_with_distance() {
    assert_eq!(fog_visibility(0.0), 1.0);
    assert!(fog_visibility(10.0) > fog_visibility(30.0));
    assert!(fog_visibility(200.0) < 0.01);
}

#[test]
fn nearby_surfaces_keep_their_colour_and_distant_ones_fade_into_fog() {
    let base = Color::new(0.5, 0.25, 0.75, 1.0);
    assert_eq!(shade(base, 0.0, 1.0), base);

    let far = shade(base, 500.0, 1.0);
    assert!(close(far.r, FOG_COLOR.r) && close(far.g, FOG_COLOR.g) && close(far.b, FOG_COLOR.b));
    assert_eq!(far.a, 1.0);
}

#[test]
fn fog_keeps_alpha_for_translucent_surfaces() {
    let panel = Color::new(0.0, 1.0, 0.0, 0.5);
    assert_eq!(fogged(panel, 0.0), panel);
    assert_eq!(fogged(panel, 40.0).a, 0.5);
}

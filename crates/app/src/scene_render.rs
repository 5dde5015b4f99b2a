//! First-person 3D rendering of the maze.

use macroquad::prelude::*;
use maze_app::brightness::light_at;
use maze_core::player::{EYE_HEIGHT, Orientation};
use maze_core::{CELL_SIZE, Cell, Grid, Pos, SessionSnapshot, WorldPos};

const WALL_COLOR: Color = Color::new(0.333, 0.333, 0.333, 1.0);
const WALL_EDGE_COLOR: Color = Color::new(0.18, 0.18, 0.2, 1.0);
const FLOOR_COLOR: Color = Color::new(0.067, 0.067, 0.2, 1.0);
const FOG_COLOR: Color = Color::new(0.039, 0.039, 0.125, 1.0);
const KEY_COLOR: Color = Color::new(1.0, 0.0, 0.0, 1.0);
const EXIT_LOCKED_COLOR: Color = Color::new(0.0, 0.6, 0.0, 0.5);
const EXIT_OPEN_COLOR: Color = Color::new(0.0, 1.0, 0.0, 0.8);

const WALL_HEIGHT: f32 = 4.0;
const KEY_HEIGHT: f32 = 1.0;
const KEY_RADIUS: f32 = 0.3;
const EXIT_THICKNESS: f32 = 0.1;
const FOG_DENSITY: f32 = 0.02;

pub fn look_direction(orientation: Orientation) -> Vec3 {
    let (sin_yaw, cos_yaw) = orientation.yaw.sin_cos();
    let (sin_pitch, cos_pitch) = orientation.pitch.sin_cos();
    vec3(-sin_yaw * cos_pitch, sin_pitch, -cos_yaw * cos_pitch)
}

/// Exponential-squared fog: 1.0 is fully visible, 0.0 is fully fogged.
pub fn fog_visibility(distance: f32) -> f32 {
    let density = FOG_DENSITY * distance.max(0.0);
    (-(density * density)).exp()
}

/// Blends `base` toward the fog colour for a surface `distance` units away. Alpha is kept.
pub fn fogged(base: Color, distance: f32) -> Color {
    let visibility = fog_visibility(distance);
    let mix = |channel: f32, fog: f32| channel * visibility + fog * (1.0 - visibility);
    Color::new(
        mix(base.r, FOG_COLOR.r),
        mix(base.g, FOG_COLOR.g),
        mix(base.b, FOG_COLOR.b),
        base.a,
    )
}

/// Lit and fogged colour for a surface `distance` units away.
pub fn shade(base: Color, distance: f32, brightness: f32) -> Color {
    let light = light_at(distance, brightness);
    fogged(Color::new(base.r * light, base.g * light, base.b * light, base.a), distance)
}

fn world_point(pos: Pos, height: f32) -> Vec3 {
    let centre = pos.world_center();
    vec3(centre.x, height, centre.z)
}

pub fn draw_scene(snapshot: &SessionSnapshot<'_>, brightness: f32) {
    clear_background(FOG_COLOR);

    let player = snapshot.player;
    let eye = vec3(player.position.x, EYE_HEIGHT, player.position.z);
    set_camera(&Camera3D {
        position: eye,
        target: eye + look_direction(player.orientation),
        up: Vec3::Y,
        ..Default::default()
    });

    draw_floor(snapshot.grid, brightness);
    draw_walls(snapshot.grid, player.position, brightness);

    if !player.has_key
        && let Some(key) = snapshot.grid.key_cell()
    {
        let distance = player.position.distance_to(key.world_center());
        draw_sphere(world_point(key, KEY_HEIGHT), KEY_RADIUS, None, fogged(KEY_COLOR, distance));
    }

    // Translucent, so it goes after everything it can be seen through.
    if let Some(exit) = snapshot.grid.exit_cell() {
        let colour = if player.has_key { EXIT_OPEN_COLOR } else { EXIT_LOCKED_COLOR };
        let distance = player.position.distance_to(exit.world_center());
        draw_cube(
            world_point(exit, WALL_HEIGHT / 2.0),
            vec3(CELL_SIZE, WALL_HEIGHT, EXIT_THICKNESS),
            None,
            fogged(colour, distance),
        );
    }

    set_default_camera();
}

fn draw_floor(grid: &Grid, brightness: f32) {
    let half_width = grid.width() as f32 * CELL_SIZE / 2.0;
    let half_depth = grid.height() as f32 * CELL_SIZE / 2.0;
    let centre = vec3(half_width - CELL_SIZE / 2.0, 0.0, half_depth - CELL_SIZE / 2.0);
    let colour = shade(FLOOR_COLOR, EYE_HEIGHT, brightness);
    draw_plane(centre, vec2(half_width, half_depth), None, colour);
}

fn draw_walls(grid: &Grid, viewer: WorldPos, brightness: f32) {
    let size = vec3(CELL_SIZE, WALL_HEIGHT, CELL_SIZE);
    for y in 0..grid.height() as i32 {
        for x in 0..grid.width() as i32 {
            let pos = Pos { y, x };
            if grid.cell_at(pos) != Cell::Wall {
                continue;
            }
            let distance = viewer.distance_to(pos.world_center());
            let centre = world_point(pos, WALL_HEIGHT / 2.0);
            draw_cube(centre, size, None, shade(WALL_COLOR, distance, brightness));
            draw_cube_wires(centre, size, shade(WALL_EDGE_COLOR, distance, brightness));
        }
    }
}

#[cfg(test)]
mod tests;

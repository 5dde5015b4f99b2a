//! Tunable game parameters. Every field has a default, so partial config files are valid.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::maze::MazeDimensions;
use crate::types::MazeError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Maze(#[from] MazeError),
    /// Speeds of a cell half-width or more could carry the player through a wall in one tick.
    #[error("move_speed must be a finite value in (0, 1), got {0}")]
    MoveSpeed(f32),
    #[error("time_limit_secs must be at least 1")]
    ZeroTimeLimit,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub maze_width: usize,
    pub maze_height: usize,
    pub time_limit_secs: u32,
    /// World units moved per tick at full input.
    pub move_speed: f32,
    /// Radians per pixel of mouse motion.
    pub mouse_sensitivity: f32,
    /// Radians per pixel of touch drag.
    pub touch_sensitivity: f32,
    /// Radians per tick while a turn key is held.
    pub keyboard_turn_speed: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            maze_width: 11,
            maze_height: 11,
            time_limit_secs: 300,
            move_speed: 0.08,
            mouse_sensitivity: 0.002,
            touch_sensitivity: 0.005,
            keyboard_turn_speed: 0.03,
        }
    }
}

impl GameConfig {
    pub fn dimensions(&self) -> Result<MazeDimensions, MazeError> {
        MazeDimensions::new(self.maze_width, self.maze_height)
    }

    /// Checks every field a session depends on and returns the validated maze size.
    pub fn validate(&self) -> Result<MazeDimensions, ConfigError> {
        let dimensions = self.dimensions()?;
        if !(self.move_speed > 0.0 && self.move_speed < 1.0) {
            return Err(ConfigError::MoveSpeed(self.move_speed));
        }
        if self.time_limit_secs == 0 {
            return Err(ConfigError::ZeroTimeLimit);
        }
        Ok(dimensions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Axis;

    #[test]
    fn partial_toml_keeps_defaults_for_missing_fields() {
        let config: GameConfig =
            toml::from_str("maze_width = 15\ntime_limit_secs = 90\n").expect("valid toml");
        assert_eq!(config.maze_width, 15);
        assert_eq!(config.time_limit_secs, 90);
        assert_eq!(config.maze_height, 11);
        assert_eq!(config.move_speed, 0.08);
    }

    #[test]
    fn default_config_has_valid_dimensions() {
        let dimensions = GameConfig::default().dimensions().expect("defaults are valid");
        assert_eq!((dimensions.width(), dimensions.height()), (11, 11));
    }

    #[test]
    fn even_width_is_rejected() {
        let config = GameConfig { maze_width: 8, ..GameConfig::default() };
        assert_eq!(
            config.dimensions(),
            Err(MazeError::InvalidDimension { axis: Axis::Width, value: 8 })
        );
    }

    #[test]
    fn default_config_validates() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn move_speed_outside_the_open_unit_interval_is_rejected() {
        for speed in [0.0, -0.1, 1.0, 2.5, f32::INFINITY] {
            let config = GameConfig { move_speed: speed, ..GameConfig::default() };
            assert_eq!(config.validate(), Err(ConfigError::MoveSpeed(speed)), "speed {speed}");
        }
        let config = GameConfig { move_speed: 0.99, ..GameConfig::default() };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn nan_move_speed_from_toml_is_rejected() {
        let config: GameConfig = toml::from_str("move_speed = nan\n").expect("valid toml");
        let err = config.validate().expect_err("nan speed");
        assert!(matches!(err, ConfigError::MoveSpeed(speed) if speed.is_nan()));
    }

    #[test]
    fn zero_time_limit_is_rejected() {
        let config = GameConfig { time_limit_secs: 0, ..GameConfig::default() };
        assert_eq!(config.validate(), Err(ConfigError::ZeroTimeLimit));
    }

    #[test]
    fn dimension_errors_take_precedence() {
        let config = GameConfig { maze_width: 3, move_speed: 5.0, ..GameConfig::default() };
        assert_eq!(
            config.validate(),
            Err(ConfigError::Maze(MazeError::InvalidDimension { axis: Axis::Width, value: 3 }))
        );
    }
}

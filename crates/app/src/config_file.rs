//! `config.toml` loading for the tunable game parameters.

use directories::ProjectDirs;
use maze_core::GameConfig;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::APP_NAME;

pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", APP_NAME).map(|proj_dirs| {
        let mut path = proj_dirs.config_dir().to_path_buf();
        path.push("config.toml");
        path
    })
}

/// Parses and validates a config file. Missing fields keep their defaults.
pub fn load_config(path: &Path) -> io::Result<GameConfig> {
    let content = fs::read_to_string(path)?;
    let config: GameConfig =
        toml::from_str(&content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    config.validate().map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    Ok(config)
}

/// Config from `path` when it exists, defaults when it does not. Invalid files are reported
/// and replaced by defaults so the game still starts.
pub fn load_config_or_default(path: Option<&Path>) -> GameConfig {
    let Some(path) = path else {
        return GameConfig::default();
    };
    match load_config(path) {
        Ok(config) => {
            log::info!("loaded config from {}", path.display());
            config
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => GameConfig::default(),
        Err(err) => {
            log::warn!("ignoring config at {}: {err}", path.display());
            GameConfig::default()
        }
    }
}

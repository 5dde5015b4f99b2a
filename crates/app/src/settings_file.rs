//! Persistent user settings.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::APP_NAME;
use crate::brightness::{DEFAULT_BRIGHTNESS, clamp_brightness};

pub const SETTINGS_FORMAT_VERSION: u32 = 1;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SettingsFile {
    pub format_version: u32,
    pub brightness: f32,
}

impl Default for SettingsFile {
    fn default() -> Self {
        Self { format_version: SETTINGS_FORMAT_VERSION, brightness: DEFAULT_BRIGHTNESS }
    }
}

impl SettingsFile {
    pub fn with_brightness(brightness: f32) -> Self {
        Self { brightness: clamp_brightness(brightness), ..Self::default() }
    }

    pub fn get_default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", APP_NAME).map(|proj_dirs| {
            let mut path = proj_dirs.data_dir().to_path_buf();
            path.push("settings.json");
            path
        })
    }

    pub fn write_atomic(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let tmp_path = path.with_extension("json.tmp");
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, path)?;
        Ok(())
    }

    /// Loads and clamps the stored values; out-of-range brightness is pulled back into range.
    pub fn load(path: &Path) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        let settings: Self = serde_json::from_str(&content)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(Self { brightness: clamp_brightness(settings.brightness), ..settings })
    }
}

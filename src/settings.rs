//! Persisted view settings.
//!
//! A small JSON file under the user config dir: active scene, render
//! quality, texture resolution, the explore tracking flag, and the
//! simulation speed. Loading falls back to defaults so a missing or
//! corrupt file never blocks startup.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::celestial::TextureResolution;
use crate::quality::RenderQuality;
use crate::scene::Scene;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewSettings {
    pub scene: Scene,
    pub quality: RenderQuality,
    pub texture_resolution: TextureResolution,
    pub explore_tracks_target: bool,
    pub sim_speed: f64,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            scene: Scene::ExploreView,
            quality: RenderQuality::Low,
            texture_resolution: TextureResolution::R2048,
            explore_tracks_target: false,
            sim_speed: 1.0,
        }
    }
}

impl ViewSettings {
    /// Loads from `path`. A missing or malformed file yields the defaults.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(data) => match serde_json::from_str(&data) {
                Ok(settings) => settings,
                Err(e) => {
                    log::warn!("ignoring malformed settings {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}

/// Default settings location under the user config dir.
pub fn settings_path() -> PathBuf {
    dirs_config().join("space-map").join("settings.json")
}

fn dirs_config() -> PathBuf {
    if let Some(home) = std::env::var_os("HOME") {
        PathBuf::from(home).join(".config")
    } else {
        PathBuf::from(".")
    }
}

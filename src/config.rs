use std::fs;
use std::path::Path;

use bevy_ecs::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Canvas geometry knobs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub sprite_size: f32,
    pub columns: usize,
    pub spacing_ratio: f32,
    pub min_spacing: f32,
    pub max_spacing: f32,
    /// Gap between the bottom of the title region and the first grid row.
    pub title_gap: f32,
    /// Top of the grid when the title region cannot be measured.
    pub fallback_top: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            sprite_size: 128.0,
            columns: 3,
            spacing_ratio: 0.15,
            min_spacing: 150.0,
            max_spacing: 200.0,
            title_gap: 40.0,
            // page padding + title height + title margin + gap
            fallback_top: 80.0 + 60.0 + 32.0 + 40.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub click_jump_ms: u64,
    pub celebration_jump_ms: u64,
    pub celebration_stagger_ms: u64,
    pub auto_enter_delay_ms: u64,
    pub assessment_delay_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            click_jump_ms: 250,
            celebration_jump_ms: 600,
            celebration_stagger_ms: 100,
            auto_enter_delay_ms: 300,
            assessment_delay_ms: 1500,
        }
    }
}

/// Parameters handed to the particle effect on celebrate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfettiBurst {
    pub particle_count: u32,
    pub spread_degrees: f32,
    pub origin_y: f32,
}

impl Default for ConfettiBurst {
    fn default() -> Self {
        Self {
            particle_count: 100,
            spread_degrees: 70.0,
            origin_y: 0.6,
        }
    }
}

#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartyConfig {
    pub layout: LayoutConfig,
    pub timing: TimingConfig,
    pub confetti: ConfettiBurst,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

pub fn load_party_config(path: impl AsRef<Path>) -> Result<PartyConfig, ConfigError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ConfigError::Json {
        path: path.display().to_string(),
        source,
    })
}

impl PartyConfig {
    /// Loads the file if present; any failure falls back to the built-in defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match load_party_config(path) {
            Ok(config) => config,
            Err(err) => {
                warn!("using default party config: {}", err);
                PartyConfig::default()
            }
        }
    }
}

use std::path::Path;

use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};

use slashbeat_input::{ControlMode, DeviceInput};
use slashbeat_model::Difficulty;

pub const DEFAULT_CONFIG_FILE: &str = "slashbeat.json";

pub const MIN_CUSTOM_BPM: f64 = 40.0;
pub const MAX_CUSTOM_BPM: f64 = 300.0;
const DEFAULT_CUSTOM_BPM: f64 = 120.0;

/// Settings applied when analysing an uploaded track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
pub struct CustomTrackConfig {
    pub bpm: f64,
    pub difficulty: Difficulty,
}

impl Default for CustomTrackConfig {
    fn default() -> Self {
        Self {
            bpm: DEFAULT_CUSTOM_BPM,
            difficulty: Difficulty::Medium,
        }
    }
}

impl CustomTrackConfig {
    pub fn validate(&mut self) {
        if !self.bpm.is_finite() {
            self.bpm = DEFAULT_CUSTOM_BPM;
        }
        self.bpm = self.bpm.clamp(MIN_CUSTOM_BPM, MAX_CUSTOM_BPM);
    }
}

/// Touch surface size in pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
pub struct TouchConfig {
    pub surface_width: f32,
    pub surface_height: f32,
}

impl Default for TouchConfig {
    fn default() -> Self {
        Self {
            surface_width: 1280.0,
            surface_height: 720.0,
        }
    }
}

impl TouchConfig {
    pub fn validate(&mut self) {
        if !self.surface_width.is_finite() {
            self.surface_width = 1.0;
        }
        if !self.surface_height.is_finite() {
            self.surface_height = 1.0;
        }
        self.surface_width = self.surface_width.max(1.0);
        self.surface_height = self.surface_height.max(1.0);
    }
}

/// Game configuration (slashbeat.json).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
pub struct GameConfig {
    pub control_mode: ControlMode,
    pub custom_track: CustomTrackConfig,
    /// Fixed seed for chart generation. Unset means a fresh seed per chart.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chart_seed: Option<u64>,
    pub touch: TouchConfig,
    pub log_level: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            control_mode: ControlMode::HandTracking,
            custom_track: CustomTrackConfig::default(),
            chart_seed: None,
            touch: TouchConfig::default(),
            log_level: "info".to_string(),
        }
    }
}

impl GameConfig {
    pub fn validate(&mut self) {
        self.custom_track.validate();
        self.touch.validate();

        if self.log_level.trim().is_empty() {
            self.log_level = "info".to_string();
        }
    }

    /// Player input for the configured control mode and touch surface.
    pub fn device_input(&self) -> DeviceInput {
        DeviceInput::new(
            self.control_mode,
            self.touch.surface_width,
            self.touch.surface_height,
        )
    }

    /// Read config from a JSON file.
    pub fn read(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let mut config: GameConfig = serde_json::from_str(&data)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;
        config.validate();
        Ok(config)
    }

    /// Write config to a JSON file.
    pub fn write(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }

    /// Read config, falling back to defaults when the file does not exist.
    pub fn read_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::read(path)
    }
}

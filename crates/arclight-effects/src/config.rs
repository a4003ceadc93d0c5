//! Effects core configuration.
//!
//! Tuning knobs for pooling, trails, and tick cadence. Configuration can be
//! loaded from and saved to a TOML file; a missing or unreadable file falls
//! back to defaults so an embedding game always starts.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Configuration file name.
pub const CONFIG_FILE: &str = "arclight.toml";

/// Errors that can occur while loading or saving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read or write the file.
    #[error("Failed to access config file: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse TOML.
    #[error("Failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// Failed to serialize TOML.
    #[error("Failed to serialize config TOML: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Tuning parameters for the effects core.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectConfig {
    // === Pooling ===
    /// Reusable slots for standard projectiles
    pub pool_capacity: usize,

    // === Visuals ===
    /// Maximum trail points retained per projectile
    pub max_trail_length: usize,
    /// Screen-space margin before an instance is culled
    pub cull_margin: f32,

    // === Combat cadence ===
    /// Seconds between beam damage ticks
    pub beam_tick_interval: f32,
    /// Radius within which homing shots acquire targets
    pub homing_sense_radius: f32,
    /// Default summon lifetime in seconds
    pub default_summon_lifetime: f32,

    // === Diagnostics ===
    /// Combat event channel capacity
    pub event_capacity: usize,
}

impl Default for EffectConfig {
    fn default() -> Self {
        Self {
            pool_capacity: 100,
            max_trail_length: 10,
            cull_margin: 100.0,
            beam_tick_interval: 0.1,
            homing_sense_radius: 500.0,
            default_summon_lifetime: 15.0,
            event_capacity: 256,
        }
    }
}

impl EffectConfig {
    /// Loads configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }

    /// Loads configuration, falling back to defaults on any failure.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path.as_ref()) {
            Ok(config) => config,
            Err(err) => {
                warn!(path = ?path.as_ref(), %err, "using default effect config");
                Self::default()
            }
        }
    }

    /// Saves configuration to a TOML file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let text = toml::to_string_pretty(self)?;
        fs::write(path, text)?;
        Ok(())
    }
}

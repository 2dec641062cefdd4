//! Visualizer configuration.
//!
//! A [`VisualizerConfig`] is the whole control-panel state: array size,
//! algorithm, direction, speed and the running flag. It can be loaded from a
//! TOML file where every key is optional:
//!
//! ```toml
//! array_size = 80
//! algorithm = "quick"
//! ascending = false
//! speed = 90
//! ```
//!
//! Reconfiguration while the program runs goes through [`ConfigChange`]
//! events handed to the driver.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sort::Algorithm;
use crate::step::Direction;

pub const MIN_ARRAY_SIZE: usize = 10;
pub const MAX_ARRAY_SIZE: usize = 200;
pub const MIN_SPEED: u32 = 1;
pub const MAX_SPEED: u32 = 100;
/// Delay between steps is `MAX_DELAY_MS - speed`.
pub const MAX_DELAY_MS: u64 = 101;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("array size {0} is outside {min}..={max}", min = MIN_ARRAY_SIZE, max = MAX_ARRAY_SIZE)]
    ArraySize(usize),
    #[error("speed {0} is outside {min}..={max}", min = MIN_SPEED, max = MAX_SPEED)]
    Speed(u32),
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VisualizerConfig {
    pub array_size: usize,
    pub algorithm: Algorithm,
    pub ascending: bool,
    pub speed: u32,
    pub running: bool,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            array_size: 50,
            algorithm: Algorithm::Bubble,
            ascending: true,
            speed: 50,
            running: false,
        }
    }
}

impl VisualizerConfig {
    /// Load a config file. Missing keys take their default values.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_ARRAY_SIZE..=MAX_ARRAY_SIZE).contains(&self.array_size) {
            return Err(ConfigError::ArraySize(self.array_size));
        }
        if !(MIN_SPEED..=MAX_SPEED).contains(&self.speed) {
            return Err(ConfigError::Speed(self.speed));
        }
        Ok(())
    }

    /// Copy with size and speed saturated into their ranges, the way a
    /// slider would hold them.
    pub fn clamped(self) -> Self {
        Self {
            array_size: self.array_size.clamp(MIN_ARRAY_SIZE, MAX_ARRAY_SIZE),
            speed: self.speed.clamp(MIN_SPEED, MAX_SPEED),
            ..self
        }
    }

    pub fn direction(&self) -> Direction {
        Direction::from(self.ascending)
    }

    /// Pause between two pulled steps.
    pub fn step_delay(&self) -> Duration {
        let speed = u64::from(self.speed.clamp(MIN_SPEED, MAX_SPEED));
        Duration::from_millis(MAX_DELAY_MS - speed)
    }
}

/// A single reconfiguration event from the controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigChange {
    ArraySize(usize),
    Algorithm(Algorithm),
    /// `true` for ascending.
    Direction(bool),
    Speed(u32),
    Running(bool),
    /// Stop and draw a fresh array at the current size.
    Reset,
}

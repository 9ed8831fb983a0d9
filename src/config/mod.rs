//! User configuration
//!
//! Optional TOML file controlling the initial playback speed and the shape of
//! generated arrays. Every field has a default, so an absent file or an
//! absent table behaves exactly like the built-in settings.

mod loader;

pub use loader::ConfigError;

use crate::playback::{DEFAULT_SPEED, DEFAULT_SPEED_STEP};
use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub playback: PlaybackConfig,
    pub generator: GeneratorConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Initial speed setting; higher is faster
    pub speed: u64,
    /// Amount one `+`/`-` key press changes the speed by
    pub speed_step: u64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        PlaybackConfig {
            speed: DEFAULT_SPEED,
            speed_step: DEFAULT_SPEED_STEP,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub length: usize,
    /// Inclusive lower bound
    pub min: i64,
    /// Exclusive upper bound
    pub max: i64,
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            length: 10,
            min: 0,
            max: 100,
            seed: None,
        }
    }
}

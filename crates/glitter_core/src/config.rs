//! # Glitter Configuration
//!
//! Five physics knobs plus scheduling and seeding, loaded once at startup.
//!
//! ```toml
//! count = 12
//! size = 20.0
//! gravity = 2.5
//! spread = 40.0
//! decay = 0.5
//! tick_interval_ms = 66
//! seed = 42
//! ```
//!
//! Missing keys fall back to the defaults below. Values are not validated:
//! `decay = 0` keeps glyphs alive forever, a negative `spread` mirrors the
//! jitter, and so on.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{GlitterError, GlitterResult};

/// Configuration of one glitter effect.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlitterConfig {
    /// Particles spawned per consumed input.
    pub count: u32,
    /// Starting radius of every particle.
    pub size: f32,
    /// Downward drift added to `y` on each tick.
    pub gravity: f32,
    /// Width of the spawn jitter window centred on the input point.
    pub spread: f32,
    /// Radius lost per tick. Also shifts position by half its value.
    pub decay: f32,
    /// Scheduler period in milliseconds.
    pub tick_interval_ms: u64,
    /// RNG seed. `None` seeds from the system time.
    pub seed: Option<u64>,
}

impl GlitterConfig {
    /// Default particles per burst.
    pub const DEFAULT_COUNT: u32 = 8;
    /// Default starting radius.
    pub const DEFAULT_SIZE: f32 = 16.0;
    /// Default gravity.
    pub const DEFAULT_GRAVITY: f32 = 2.5;
    /// Default spread.
    pub const DEFAULT_SPREAD: f32 = 25.0;
    /// Default decay.
    pub const DEFAULT_DECAY: f32 = 0.4;
    /// Default tick period (ms).
    pub const DEFAULT_TICK_INTERVAL_MS: u64 = 70;

    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`GlitterError::InvalidConfig`] if the text is not valid TOML
    /// or a key has the wrong type.
    pub fn from_toml_str(text: &str) -> GlitterResult<Self> {
        toml::from_str(text).map_err(|e| GlitterError::InvalidConfig(e.to_string()))
    }

    /// Reads and parses a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`GlitterError::ConfigRead`] if the file cannot be read and
    /// [`GlitterError::InvalidConfig`] if it cannot be parsed.
    pub fn load(path: impl AsRef<Path>) -> GlitterResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| GlitterError::ConfigRead {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config = Self::from_toml_str(&text)?;
        tracing::info!(path = %path.display(), ?config, "loaded glitter config");
        Ok(config)
    }

    /// Returns the scheduler period.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

impl Default for GlitterConfig {
    fn default() -> Self {
        Self {
            count: Self::DEFAULT_COUNT,
            size: Self::DEFAULT_SIZE,
            gravity: Self::DEFAULT_GRAVITY,
            spread: Self::DEFAULT_SPREAD,
            decay: Self::DEFAULT_DECAY,
            tick_interval_ms: Self::DEFAULT_TICK_INTERVAL_MS,
            seed: None,
        }
    }
}

//! Strip interaction configuration
//!
//! [`StripConfig`] carries the tunables for drag tracking, click veto and
//! momentum. Every field defaults to the matching value in
//! [`crate::constants`], so a partial TOML document only overrides what it
//! names.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::{click, drag, momentum};
use crate::error::{ConfigError, Result};

/// Tunables for one strip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StripConfig {
    /// Minimum spacing between accepted pointer moves (ms).
    pub move_throttle_ms: u64,
    /// Drags shorter than this (ms) are reported as taps.
    pub tap_threshold_ms: u64,
    /// Per-axis pointer travel that turns a click into a drag.
    pub click_slop: f64,
    /// Per-frame velocity multiplier during momentum.
    pub momentum_decay: f64,
    /// Velocity magnitude (units/ms) at which momentum stops.
    pub momentum_stop_velocity: f64,
    /// Velocity to per-frame offset conversion factor.
    pub momentum_time_scale: f64,
}

impl Default for StripConfig {
    fn default() -> Self {
        Self {
            move_throttle_ms: drag::MOVE_THROTTLE_MS,
            tap_threshold_ms: drag::TAP_THRESHOLD_MS,
            click_slop: click::SLOP,
            momentum_decay: momentum::DECAY,
            momentum_stop_velocity: momentum::STOP_VELOCITY,
            momentum_time_scale: momentum::TIME_SCALE,
        }
    }
}

impl StripConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let cfg: Self = toml::from_str(raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw =
            std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        let cfg = Self::from_toml_str(&raw)?;
        log::debug!("loaded strip config from {}", path.display());
        Ok(cfg)
    }

    /// Reject values that would stall or never stop the momentum loop.
    pub fn validate(&self) -> Result<()> {
        if !(self.momentum_decay > 0.0 && self.momentum_decay < 1.0) {
            return Err(ConfigError::Invalid {
                field: "momentum_decay",
                reason: format!(
                    "must be in (0, 1), got {}",
                    self.momentum_decay
                ),
            });
        }
        if !(self.momentum_stop_velocity > 0.0) {
            return Err(ConfigError::Invalid {
                field: "momentum_stop_velocity",
                reason: format!(
                    "must be positive, got {}",
                    self.momentum_stop_velocity
                ),
            });
        }
        if !(self.momentum_time_scale > 0.0) {
            return Err(ConfigError::Invalid {
                field: "momentum_time_scale",
                reason: format!(
                    "must be positive, got {}",
                    self.momentum_time_scale
                ),
            });
        }
        if !(self.click_slop >= 0.0) {
            return Err(ConfigError::Invalid {
                field: "click_slop",
                reason: format!(
                    "must be zero or positive, got {}",
                    self.click_slop
                ),
            });
        }
        Ok(())
    }
}

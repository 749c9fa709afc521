//! Gameplay tuning
//!
//! Per-tick balance values, separate from the fixed playfield geometry in
//! [`crate::consts`]. Defaults are the tuned-for-60-FPS values; a JSON file
//! named by `GAP_GLIDER_TUNING` overrides them for experimentation.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Gameplay balance values, all per-tick
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Downward acceleration applied to the bird every tick
    pub gravity: f32,
    /// Velocity a flap resets the bird to (negative = upward)
    pub flap_velocity: f32,
    /// Leftward pipe speed per tick
    pub pipe_speed: f32,
    /// Ticks between pipe spawns, measured from the previous spawn
    pub spawn_interval_ticks: u64,
    /// Vertical size of the passable gap, identical for every pipe
    pub gap_height: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: 0.25,
            flap_velocity: -7.0,
            pipe_speed: 3.0,
            spawn_interval_ticks: 90,
            gap_height: 150.0,
        }
    }
}

impl Tuning {
    /// Environment variable naming a JSON overrides file
    const TUNING_ENV: &'static str = "GAP_GLIDER_TUNING";

    /// Load tuning, applying overrides from the file named by
    /// `GAP_GLIDER_TUNING` if set. Unreadable or unparsable files fall back
    /// to defaults with a warning; values that make play impossible panic in
    /// [`Tuning::validate`].
    pub fn load() -> Self {
        let Ok(path) = std::env::var(Self::TUNING_ENV) else {
            return Self::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(tuning) => {
                    log::info!("loaded tuning overrides from {path}");
                    tuning
                }
                Err(e) => {
                    log::warn!("ignoring malformed tuning file {path}: {e}");
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("ignoring unreadable tuning file {path}: {e}");
                Self::default()
            }
        }
    }

    /// Assert the configuration can actually be played. A gap that cannot
    /// fit between the spawn margins is an authoring error, not a runtime
    /// condition to recover from.
    pub fn validate(&self) {
        assert!(self.gravity > 0.0, "gravity must pull downward");
        assert!(
            self.flap_velocity < 0.0,
            "flap velocity must point upward (negative)"
        );
        assert!(self.pipe_speed > 0.0, "pipes must move leftward");
        assert!(self.spawn_interval_ticks > 0, "spawn interval must be nonzero");
        assert!(
            self.gap_height > 0.0
                && self.gap_height < PLAYFIELD_HEIGHT - GROUND_HEIGHT - 2.0 * GAP_MARGIN as f32,
            "gap height {} does not fit between the spawn margins",
            self.gap_height
        );
    }
}

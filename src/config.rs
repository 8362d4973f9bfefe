//! Game tuning configuration
//!
//! Defaults reproduce the classic feel. On the web a JSON override can be
//! placed in LocalStorage under `flappy_config`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Rejected configuration
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("surface must have a positive size, got {width}x{height}")]
    EmptySurface { width: f32, height: f32 },
    #[error(
        "no room for a gate: surface height {surface_height} - gap {gate_gap} - margin {margin} must be positive"
    )]
    NoGateRoom {
        surface_height: f32,
        gate_gap: f32,
        margin: f32,
    },
    #[error("pipe width must be positive, got {0}")]
    PipeWidth(f32),
    #[error("pipe speed must be positive, got {0}")]
    PipeSpeed(f32),
    #[error(
        "spawn interval must be finite and at least one max frame step ({max_dt}s), got {0}s",
        max_dt = MAX_FRAME_DT
    )]
    SpawnInterval(f32),
    #[error("input lock must be finite and not negative, got {0}s")]
    InputLock(f32),
    #[error("invalid config json: {0}")]
    Json(String),
}

/// Tunable game constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub surface_width: f32,
    pub surface_height: f32,
    pub bird_x: f32,
    pub bird_start_y: f32,
    pub bird_width: f32,
    pub bird_height: f32,
    /// Added to vertical velocity every frame
    pub gravity: f32,
    /// Vertical velocity set by a jump (negative is up)
    pub jump_impulse: f32,
    /// Leftward pipe movement per frame
    pub pipe_speed: f32,
    pub pipe_width: f32,
    pub gate_gap: f32,
    pub spawn_margin: f32,
    pub spawn_interval_secs: f32,
    pub input_lock_secs: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            surface_width: BOARD_WIDTH,
            surface_height: BOARD_HEIGHT,
            bird_x: BIRD_X,
            bird_start_y: BIRD_START_Y,
            bird_width: BIRD_WIDTH,
            bird_height: BIRD_HEIGHT,
            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,
            pipe_speed: PIPE_SPEED,
            pipe_width: PIPE_WIDTH,
            gate_gap: PIPE_GAP,
            spawn_margin: SPAWN_MARGIN,
            spawn_interval_secs: SPAWN_INTERVAL_SECS,
            input_lock_secs: INPUT_LOCK_SECS,
        }
    }
}

impl GameConfig {
    /// Check the preconditions the simulation relies on. Comparisons are
    /// written so that NaN fails them.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.surface_width > 0.0 && self.surface_height > 0.0) {
            return Err(ConfigError::EmptySurface {
                width: self.surface_width,
                height: self.surface_height,
            });
        }
        if !(self.max_top_height() > 0.0) {
            return Err(ConfigError::NoGateRoom {
                surface_height: self.surface_height,
                gate_gap: self.gate_gap,
                margin: self.spawn_margin,
            });
        }
        if !(self.pipe_width > 0.0) {
            return Err(ConfigError::PipeWidth(self.pipe_width));
        }
        if !(self.pipe_speed > 0.0) {
            return Err(ConfigError::PipeSpeed(self.pipe_speed));
        }
        if !(self.spawn_interval_secs.is_finite() && self.spawn_interval_secs >= MAX_FRAME_DT) {
            return Err(ConfigError::SpawnInterval(self.spawn_interval_secs));
        }
        if !(self.input_lock_secs.is_finite() && self.input_lock_secs >= 0.0) {
            return Err(ConfigError::InputLock(self.input_lock_secs));
        }
        Ok(())
    }

    /// Exclusive upper bound for a top pipe's height
    pub fn max_top_height(&self) -> f32 {
        self.surface_height - self.gate_gap - self.spawn_margin
    }

    /// Parse and validate a JSON config; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Json(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "flappy_config";

    /// Load the config override from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(config) => {
                        log::info!("Loaded config override from LocalStorage");
                        return config;
                    }
                    Err(e) => log::warn!("Ignoring stored config: {}", e),
                }
            }
        }

        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(GameConfig::default().validate(), Ok(()));
        assert_eq!(GameConfig::default().max_top_height(), 390.0);
    }

    #[test]
    fn test_rejects_gate_without_room() {
        let config = GameConfig {
            gate_gap: 590.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NoGateRoom { .. })
        ));
    }

    #[test]
    fn test_rejects_bad_timers_and_sizes() {
        let bad = [
            GameConfig {
                pipe_width: 0.0,
                ..Default::default()
            },
            GameConfig {
                spawn_interval_secs: 0.0,
                ..Default::default()
            },
            GameConfig {
                input_lock_secs: -1.0,
                ..Default::default()
            },
            GameConfig {
                surface_width: 0.0,
                ..Default::default()
            },
        ];
        for config in &bad {
            assert!(config.validate().is_err(), "{:?} should be rejected", config);
        }
    }

    #[test]
    fn test_rejects_stalled_or_reversed_pipes() {
        for speed in [0.0, -2.0, f32::NAN] {
            let config = GameConfig {
                pipe_speed: speed,
                ..Default::default()
            };
            assert!(matches!(config.validate(), Err(ConfigError::PipeSpeed(_))));
        }
        assert!(matches!(
            GameConfig::from_json(r#"{ "pipe_speed": 0 }"#),
            Err(ConfigError::PipeSpeed(_))
        ));
    }

    #[test]
    fn test_rejects_tiny_spawn_interval() {
        for interval in [1e-9, 0.05, f32::INFINITY, f32::NAN] {
            let config = GameConfig {
                spawn_interval_secs: interval,
                ..Default::default()
            };
            assert!(matches!(
                config.validate(),
                Err(ConfigError::SpawnInterval(_))
            ));
        }
        assert!(matches!(
            GameConfig::from_json(r#"{ "spawn_interval_secs": 1e-9 }"#),
            Err(ConfigError::SpawnInterval(_))
        ));

        let config = GameConfig {
            spawn_interval_secs: MAX_FRAME_DT,
            ..Default::default()
        };
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_rejects_nan_fields() {
        let bad = [
            GameConfig {
                surface_height: f32::NAN,
                ..Default::default()
            },
            GameConfig {
                gate_gap: f32::NAN,
                ..Default::default()
            },
            GameConfig {
                pipe_width: f32::NAN,
                ..Default::default()
            },
            GameConfig {
                input_lock_secs: f32::NAN,
                ..Default::default()
            },
        ];
        for config in &bad {
            assert!(config.validate().is_err(), "{:?} should be rejected", config);
        }
    }

    #[test]
    fn test_from_json_partial_override() {
        let config = GameConfig::from_json(r#"{ "gravity": 0.25, "gate_gap": 180 }"#).unwrap();
        assert_eq!(config.gravity, 0.25);
        assert_eq!(config.gate_gap, 180.0);
        assert_eq!(config.pipe_speed, PIPE_SPEED);
    }

    #[test]
    fn test_from_json_errors() {
        assert!(matches!(
            GameConfig::from_json("not json"),
            Err(ConfigError::Json(_))
        ));
        assert!(matches!(
            GameConfig::from_json(r#"{ "surface_height": 100 }"#),
            Err(ConfigError::NoGateRoom { .. })
        ));
    }
}

use bevy::prelude::*;
use serde::Deserialize;
use std::{fs, path::Path};

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
            title: "Marble Racer".into(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PhysicsConfig {
    pub gravity_y: f32,
    pub debug_render: bool,
}
impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity_y: -9.81,
            debug_render: false,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct LevelConfig {
    /// Number of obstacle segments between the start and finish pads.
    pub count: u32,
    /// Fixed assembly seed; `None` draws a fresh one per run.
    pub seed: Option<u64>,
}
impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            count: 5,
            seed: None,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PlayerConfig {
    pub radius: f32,
    pub impulse_strength: f32,
    pub torque_strength: f32,
    pub jump_impulse: f32,
    pub linear_damping: f32,
    pub angular_damping: f32,
}
impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            radius: 0.3,
            impulse_strength: 1.0,
            torque_strength: 1.0,
            jump_impulse: 0.5,
            linear_damping: 0.5,
            angular_damping: 0.5,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    /// Exponential follow rate (per second) for both position and look target.
    pub follow_rate: f32,
    pub height_offset: f32,
    pub trail_offset: f32,
    pub target_height_offset: f32,
}
impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            follow_rate: 5.0,
            height_offset: 1.0,
            trail_offset: 3.0,
            target_height_offset: 0.5,
        }
    }
}

#[derive(Debug, Deserialize, Resource, Clone, Default, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub physics: PhysicsConfig,
    pub level: LevelConfig,
    pub player: PlayerConfig,
    pub camera: CameraConfig,
}

impl GameConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read config: {e}"))?;
        ron::from_str(&data).map_err(|e| format!("parse RON: {e}"))
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<String>) {
        match Self::load_from_file(&path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Non-fatal sanity checks; each entry is worth a log line, not a crash.
    pub fn validate_warnings(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.player.radius <= 0.0 {
            w.push("player.radius must be > 0".into());
        }
        if self.player.impulse_strength <= 0.0 {
            w.push("player.impulse_strength <= 0 (marble cannot accelerate)".into());
        }
        if self.player.jump_impulse <= 0.0 {
            w.push("player.jump_impulse <= 0 (jump will do nothing)".into());
        }
        if self.camera.follow_rate <= 0.0 {
            w.push("camera.follow_rate <= 0 (camera will never move)".into());
        }
        if self.level.count == 0 {
            w.push("level.count = 0 (start pad straight into finish pad)".into());
        }
        w
    }
}

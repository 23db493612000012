//! Locomotion tuning loaded from data/config/controller.toml.

use anyhow::{Context, Result};
use serde::Deserialize;

pub const DEFAULT_SPEED_MPS: f32 = 2.0;
pub const DEFAULT_JUMP_HEIGHT_M: f32 = 1.0;
pub const DEFAULT_GRAVITY_MPS2: f32 = -9.81;
pub const DEFAULT_ROTATION_SPEED: f32 = 5.0;
pub const DEFAULT_ANIM_SMOOTH_TIME_S: f32 = 0.1;
pub const DEFAULT_AIM_DISTANCE_M: f32 = 15.0;

#[derive(Debug, Clone, Deserialize)]
pub struct ControllerCfg {
    pub speed_mps: Option<f32>,
    pub jump_height_m: Option<f32>,
    /// Negative is downward.
    pub gravity_mps2: Option<f32>,
    /// Dimensionless per-second approach factor toward camera yaw.
    pub rotation_speed: Option<f32>,
    pub anim_smooth_time_s: Option<f32>,
    pub aim_distance_m: Option<f32>,
}

impl Default for ControllerCfg {
    fn default() -> Self {
        Self {
            speed_mps: Some(DEFAULT_SPEED_MPS),
            jump_height_m: Some(DEFAULT_JUMP_HEIGHT_M),
            gravity_mps2: Some(DEFAULT_GRAVITY_MPS2),
            rotation_speed: Some(DEFAULT_ROTATION_SPEED),
            anim_smooth_time_s: Some(DEFAULT_ANIM_SMOOTH_TIME_S),
            aim_distance_m: Some(DEFAULT_AIM_DISTANCE_M),
        }
    }
}

pub fn load_default() -> Result<ControllerCfg> {
    let path = crate::data_root().join("config/controller.toml");
    let mut cfg = if path.is_file() {
        let txt =
            std::fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
        toml::from_str::<ControllerCfg>(&txt).context("parse controller TOML")?
    } else {
        ControllerCfg::default()
    };
    // Env overrides for quick tuning (optional)
    if let Ok(s) = std::env::var("PC_SPEED_MPS") {
        cfg.speed_mps = s.parse().ok();
    }
    if let Ok(s) = std::env::var("PC_JUMP_HEIGHT_M") {
        cfg.jump_height_m = s.parse().ok();
    }
    if let Ok(s) = std::env::var("PC_GRAVITY_MPS2") {
        cfg.gravity_mps2 = s.parse().ok();
    }
    if let Ok(s) = std::env::var("PC_ROTATION_SPEED") {
        cfg.rotation_speed = s.parse().ok();
    }
    if let Ok(s) = std::env::var("PC_ANIM_SMOOTH_TIME_S") {
        cfg.anim_smooth_time_s = s.parse().ok();
    }
    if let Ok(s) = std::env::var("PC_AIM_DISTANCE_M") {
        cfg.aim_distance_m = s.parse().ok();
    }
    Ok(cfg)
}

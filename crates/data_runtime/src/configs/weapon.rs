//! Weapon/magazine tuning loaded from data/config/weapon.toml.

use anyhow::{Context, Result};
use serde::Deserialize;

pub const DEFAULT_MAGAZINE_CAPACITY: u32 = 5;
pub const DEFAULT_MAX_SHOT_DISTANCE_M: f32 = 25.0;
pub const DEFAULT_RELOAD_TIME_S: f32 = 1.5;
pub const DEFAULT_CROSS_FADE_S: f32 = 0.15;

#[derive(Debug, Clone, Deserialize)]
pub struct WeaponCfg {
    pub magazine_capacity: Option<u32>,
    /// Target distance for a ray that strikes nothing.
    pub max_shot_distance_m: Option<f32>,
    /// Firing is gated for this long after the magazine empties.
    pub reload_time_s: Option<f32>,
    /// Blend duration for every combat cross-fade.
    pub cross_fade_s: Option<f32>,
}

impl Default for WeaponCfg {
    fn default() -> Self {
        Self {
            magazine_capacity: Some(DEFAULT_MAGAZINE_CAPACITY),
            max_shot_distance_m: Some(DEFAULT_MAX_SHOT_DISTANCE_M),
            reload_time_s: Some(DEFAULT_RELOAD_TIME_S),
            cross_fade_s: Some(DEFAULT_CROSS_FADE_S),
        }
    }
}

pub fn load_default() -> Result<WeaponCfg> {
    let path = crate::data_root().join("config/weapon.toml");
    let mut cfg = if path.is_file() {
        let txt =
            std::fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
        toml::from_str::<WeaponCfg>(&txt).context("parse weapon TOML")?
    } else {
        WeaponCfg::default()
    };
    // Env overrides for quick tuning (optional)
    if let Ok(s) = std::env::var("WEAPON_MAG_CAPACITY") {
        cfg.magazine_capacity = s.parse().ok();
    }
    if let Ok(s) = std::env::var("WEAPON_MAX_SHOT_DISTANCE_M") {
        cfg.max_shot_distance_m = s.parse().ok();
    }
    if let Ok(s) = std::env::var("WEAPON_RELOAD_TIME_S") {
        cfg.reload_time_s = s.parse().ok();
    }
    if let Ok(s) = std::env::var("WEAPON_CROSS_FADE_S") {
        cfg.cross_fade_s = s.parse().ok();
    }
    Ok(cfg)
}

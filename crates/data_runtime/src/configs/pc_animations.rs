//! PC animation names: exact clip/parameter strings loaded from
//! data/config/pc_animations.toml with optional env overrides.

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct PcAnimCfg {
    pub jump: Option<String>,
    pub pistol_jump: Option<String>,
    pub recoil: Option<String>,
    pub reload: Option<String>,
    pub draw: Option<String>,
    pub move_x: Option<String>,
    pub move_z: Option<String>,
    pub equipped_flag: Option<String>,
    pub shooting_flag: Option<String>,
}

impl PcAnimCfg {
    #[must_use]
    pub fn jump_clip(&self) -> &str {
        self.jump.as_deref().unwrap_or("Jump")
    }
    #[must_use]
    pub fn pistol_jump_clip(&self) -> &str {
        self.pistol_jump.as_deref().unwrap_or("PistolJump")
    }
    #[must_use]
    pub fn recoil_clip(&self) -> &str {
        self.recoil.as_deref().unwrap_or("RecoilShooting")
    }
    #[must_use]
    pub fn reload_clip(&self) -> &str {
        self.reload.as_deref().unwrap_or("ReloadPistol")
    }
    /// Draw/holster clip; the same clip plays both directions.
    #[must_use]
    pub fn draw_clip(&self) -> &str {
        self.draw.as_deref().unwrap_or("EquipPistol")
    }
    #[must_use]
    pub fn move_x_param(&self) -> &str {
        self.move_x.as_deref().unwrap_or("MoveX")
    }
    #[must_use]
    pub fn move_z_param(&self) -> &str {
        self.move_z.as_deref().unwrap_or("MoveZ")
    }
    #[must_use]
    pub fn equipped_flag_param(&self) -> &str {
        self.equipped_flag.as_deref().unwrap_or("hasPistolEquipped")
    }
    #[must_use]
    pub fn shooting_flag_param(&self) -> &str {
        self.shooting_flag.as_deref().unwrap_or("shooting")
    }
}

pub fn load_default() -> Result<PcAnimCfg> {
    let path = crate::data_root().join("config/pc_animations.toml");
    let mut cfg = if path.is_file() {
        let txt =
            std::fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
        toml::from_str::<PcAnimCfg>(&txt).context("parse pc_animations TOML")?
    } else {
        PcAnimCfg::default()
    };
    // Env overrides
    if let Ok(v) = std::env::var("PC_ANIM_JUMP") {
        cfg.jump = Some(v);
    }
    if let Ok(v) = std::env::var("PC_ANIM_PISTOL_JUMP") {
        cfg.pistol_jump = Some(v);
    }
    if let Ok(v) = std::env::var("PC_ANIM_RECOIL") {
        cfg.recoil = Some(v);
    }
    if let Ok(v) = std::env::var("PC_ANIM_RELOAD") {
        cfg.reload = Some(v);
    }
    if let Ok(v) = std::env::var("PC_ANIM_DRAW") {
        cfg.draw = Some(v);
    }
    Ok(cfg)
}

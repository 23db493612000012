//! Weapon equip/fire/reload state machine.
//!
//! Firing casts from the camera, not the muzzle: the projectile entity is
//! spawned at the muzzle but flies toward where the camera ray landed.

use data_runtime::configs::weapon::{
    DEFAULT_CROSS_FADE_S, DEFAULT_MAGAZINE_CAPACITY, DEFAULT_MAX_SHOT_DISTANCE_M,
    DEFAULT_RELOAD_TIME_S, WeaponCfg,
};
use engine_api::components::{AnimId, CameraPose, ParamId, ProjectileRecord};
use engine_api::hooks::EngineHooks;
use tracing::{debug, info};

/// Animation ids the combat loop dispatches on, resolved at construction.
#[derive(Debug, Clone, Copy)]
pub struct CombatAnimIds {
    pub draw_clip: AnimId,
    pub recoil_clip: AnimId,
    pub reload_clip: AnimId,
    pub equipped_flag: ParamId,
    pub shooting_flag: ParamId,
}

#[derive(Debug, Clone)]
pub struct WeaponState {
    equipped: bool,
    shots_fired: u32,
    reload_remaining_s: f32,
    magazine_capacity: u32,
    max_shot_distance_m: f32,
    reload_time_s: f32,
    cross_fade_s: f32,
    ids: CombatAnimIds,
}

impl WeaponState {
    #[must_use]
    pub fn from_cfg(cfg: &WeaponCfg, ids: CombatAnimIds) -> Self {
        Self {
            equipped: false,
            shots_fired: 0,
            reload_remaining_s: 0.0,
            magazine_capacity: cfg.magazine_capacity.unwrap_or(DEFAULT_MAGAZINE_CAPACITY),
            max_shot_distance_m: cfg
                .max_shot_distance_m
                .unwrap_or(DEFAULT_MAX_SHOT_DISTANCE_M),
            reload_time_s: cfg.reload_time_s.unwrap_or(DEFAULT_RELOAD_TIME_S),
            cross_fade_s: cfg.cross_fade_s.unwrap_or(DEFAULT_CROSS_FADE_S),
            ids,
        }
    }

    #[must_use]
    pub fn equipped(&self) -> bool {
        self.equipped
    }
    #[must_use]
    pub fn shots_fired(&self) -> u32 {
        self.shots_fired
    }
    /// True while the reload countdown runs; firing is gated the whole time.
    #[must_use]
    pub fn reloading(&self) -> bool {
        self.reload_remaining_s > 0.0
    }

    /// Count the reload timer down by one tick.
    pub fn tick(&mut self, dt: f32) {
        if self.reloading() {
            self.reload_remaining_s = (self.reload_remaining_s - dt).max(0.0);
            if !self.reloading() {
                debug!(target: "combat", "reload complete");
            }
        }
    }

    /// Draw or holster: same cross-fade clip both directions.
    pub fn toggle(&mut self, hooks: &mut EngineHooks<'_>) {
        self.equipped = !self.equipped;
        hooks.anim.cross_fade(self.ids.draw_clip, self.cross_fade_s);
        hooks.weapon.set_visible(self.equipped);
        hooks.anim.set_flag(self.ids.equipped_flag, self.equipped);
        info!(target: "combat", equipped = self.equipped, "weapon toggled");
    }

    /// One trigger pull. No-op (beyond the transient shooting flag) while
    /// unequipped or reloading; otherwise spawns exactly one projectile and
    /// advances the magazine.
    pub fn fire(&mut self, cam: &CameraPose, hooks: &mut EngineHooks<'_>) {
        hooks.anim.set_flag(self.ids.shooting_flag, true);
        if self.equipped && !self.reloading() {
            let dir = cam.look_dir.normalize_or_zero();
            let record = match hooks.scene.raycast(cam.eye, dir) {
                Some(point) => ProjectileRecord {
                    target: point,
                    hit: true,
                },
                None => ProjectileRecord {
                    target: cam.eye + dir * self.max_shot_distance_m,
                    hit: false,
                },
            };
            let origin = hooks.weapon.muzzle_world();
            let id = hooks.projectiles.spawn(origin, record);
            debug!(target: "combat", id = id.0, hit = record.hit, "projectile spawned");
            if self.shots_fired < self.magazine_capacity {
                hooks.anim.cross_fade(self.ids.recoil_clip, self.cross_fade_s);
                self.shots_fired += 1;
            } else {
                hooks.anim.cross_fade(self.ids.reload_clip, self.cross_fade_s);
                self.shots_fired = 0;
                self.reload_remaining_s = self.reload_time_s;
                info!(target: "combat", "magazine empty, reloading");
            }
        }
        hooks.anim.set_flag(self.ids.shooting_flag, false);
    }
}

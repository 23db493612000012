//! Third-person motion + combat controller, advanced one tick at a time.
//!
//! The host samples input and camera, then calls [`PlayerController::update`]
//! once per simulated frame. Discrete fire/toggle commands arrive through the
//! [`crate::input::InputQueue`] and are drained inside the same tick.

use crate::combat::{CombatAnimIds, WeaponState};
use crate::input::{InputCommand, InputQueue, InputState};
use crate::systems::{aim, anim_blend, facing, move_intent};
use anyhow::{Context, Result};
use data_runtime::configs::controller::{
    ControllerCfg, DEFAULT_AIM_DISTANCE_M, DEFAULT_ANIM_SMOOTH_TIME_S, DEFAULT_GRAVITY_MPS2,
    DEFAULT_JUMP_HEIGHT_M, DEFAULT_ROTATION_SPEED, DEFAULT_SPEED_MPS,
};
use data_runtime::configs::pc_animations::PcAnimCfg;
use data_runtime::configs::weapon::{DEFAULT_CROSS_FADE_S, WeaponCfg};
use engine_api::components::{AnimId, CameraPose, ParamId};
use engine_api::hooks::{AnimationDriver, EngineHooks, HostEvent};
use glam::{Vec2, Vec3};
use tracing::info;

pub struct PlayerController {
    // Locomotion state, re-derived every tick from the previous tick's values
    vertical_vel: f32,
    grounded: bool,
    blend: Vec2,
    blend_vel: Vec2,
    yaw: f32,
    aim_point: Vec3,
    active: bool,
    // Tuning
    speed_mps: f32,
    jump_height_m: f32,
    gravity_mps2: f32,
    rotation_speed: f32,
    smooth_time_s: f32,
    aim_distance_m: f32,
    cross_fade_s: f32,
    // Resolved animation ids
    move_x: ParamId,
    move_z: ParamId,
    jump_clip: AnimId,
    pistol_jump_clip: AnimId,
    weapon: WeaponState,
}

fn clip(driver: &dyn AnimationDriver, name: &str) -> Result<AnimId> {
    driver
        .clip_id(name)
        .with_context(|| format!("missing animation clip `{name}`"))
}

fn param(driver: &dyn AnimationDriver, name: &str) -> Result<ParamId> {
    driver
        .param_id(name)
        .with_context(|| format!("missing animation parameter `{name}`"))
}

impl PlayerController {
    /// Build a controller, resolving every animation name to an id up front.
    /// A name the driver does not know is a fatal configuration error.
    pub fn new(
        cfg: &ControllerCfg,
        weapon_cfg: &WeaponCfg,
        anims: &PcAnimCfg,
        driver: &dyn AnimationDriver,
    ) -> Result<Self> {
        let ids = CombatAnimIds {
            draw_clip: clip(driver, anims.draw_clip())?,
            recoil_clip: clip(driver, anims.recoil_clip())?,
            reload_clip: clip(driver, anims.reload_clip())?,
            equipped_flag: param(driver, anims.equipped_flag_param())?,
            shooting_flag: param(driver, anims.shooting_flag_param())?,
        };
        Ok(Self {
            vertical_vel: 0.0,
            grounded: false,
            blend: Vec2::ZERO,
            blend_vel: Vec2::ZERO,
            yaw: 0.0,
            aim_point: Vec3::ZERO,
            active: false,
            speed_mps: cfg.speed_mps.unwrap_or(DEFAULT_SPEED_MPS),
            jump_height_m: cfg.jump_height_m.unwrap_or(DEFAULT_JUMP_HEIGHT_M),
            gravity_mps2: cfg.gravity_mps2.unwrap_or(DEFAULT_GRAVITY_MPS2),
            rotation_speed: cfg.rotation_speed.unwrap_or(DEFAULT_ROTATION_SPEED),
            smooth_time_s: cfg.anim_smooth_time_s.unwrap_or(DEFAULT_ANIM_SMOOTH_TIME_S),
            aim_distance_m: cfg.aim_distance_m.unwrap_or(DEFAULT_AIM_DISTANCE_M),
            cross_fade_s: weapon_cfg.cross_fade_s.unwrap_or(DEFAULT_CROSS_FADE_S),
            move_x: param(driver, anims.move_x_param())?,
            move_z: param(driver, anims.move_z_param())?,
            jump_clip: clip(driver, anims.jump_clip())?,
            pistol_jump_clip: clip(driver, anims.pistol_jump_clip())?,
            weapon: WeaponState::from_cfg(weapon_cfg, ids),
        })
    }

    /// Begin the active lifetime: capture the pointer and start consuming
    /// queued commands on subsequent ticks.
    pub fn activate(&mut self, out: &mut Vec<HostEvent>) {
        self.active = true;
        out.push(HostEvent::PointerLockRequest(true));
        info!(target: "controls", active = true, reason = "activate");
    }

    /// End the active lifetime: release the pointer; queued commands are no
    /// longer consumed.
    pub fn deactivate(&mut self, out: &mut Vec<HostEvent>) {
        self.active = false;
        out.push(HostEvent::PointerLockRequest(false));
        info!(target: "controls", active = false, reason = "deactivate");
    }

    #[must_use]
    pub fn active(&self) -> bool {
        self.active
    }
    #[must_use]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }
    #[must_use]
    pub fn vertical_velocity(&self) -> f32 {
        self.vertical_vel
    }
    #[must_use]
    pub fn grounded(&self) -> bool {
        self.grounded
    }
    /// Marker kept a fixed distance in front of the camera, for aim rigs.
    #[must_use]
    pub fn aim_point(&self) -> Vec3 {
        self.aim_point
    }
    #[must_use]
    pub fn weapon(&self) -> &WeaponState {
        &self.weapon
    }

    /// Fire handler; also reachable through the queue as [`InputCommand::Fire`].
    pub fn fire_weapon(&mut self, cam: &CameraPose, hooks: &mut EngineHooks<'_>) {
        self.weapon.fire(cam, hooks);
    }

    /// Toggle handler; also reachable through the queue as
    /// [`InputCommand::ToggleWeapon`].
    pub fn toggle_weapon(&mut self, hooks: &mut EngineHooks<'_>) {
        self.weapon.toggle(hooks);
    }

    /// Advance one simulated tick of `dt` seconds.
    pub fn update(
        &mut self,
        input: &InputState,
        queue: &mut InputQueue,
        cam: &CameraPose,
        dt: f32,
        hooks: &mut EngineHooks<'_>,
    ) {
        if !self.active {
            return;
        }

        self.aim_point = aim::aim_point(cam, self.aim_distance_m);

        self.grounded = hooks.motion.grounded();
        if self.grounded && self.vertical_vel < 0.0 {
            self.vertical_vel = 0.0;
        }

        self.blend = anim_blend::smooth_damp(
            self.blend,
            input.move_axis,
            &mut self.blend_vel,
            self.smooth_time_s,
            dt,
        );

        let basis = move_intent::basis_from_camera(cam.look_dir);
        let mv = move_intent::world_move_xz(self.blend, basis);
        hooks
            .motion
            .move_by(Vec3::new(mv.x, 0.0, mv.y) * self.speed_mps * dt);

        hooks.anim.set_f32(self.move_x, self.blend.x);
        hooks.anim.set_f32(self.move_z, self.blend.y);

        if input.jump_pressed && self.grounded {
            self.vertical_vel += (self.jump_height_m * -3.0 * self.gravity_mps2).sqrt();
            let jump = if self.weapon.equipped() {
                self.pistol_jump_clip
            } else {
                self.jump_clip
            };
            hooks.anim.cross_fade(jump, self.cross_fade_s);
        }

        self.vertical_vel += self.gravity_mps2 * dt;
        hooks.motion.move_by(Vec3::new(0.0, self.vertical_vel, 0.0) * dt);

        self.yaw = facing::face_camera_step(self.yaw, cam.yaw, self.rotation_speed, dt);

        // Discrete events: delivered synchronously, interleaved with the tick
        for cmd in queue.drain() {
            match cmd {
                InputCommand::Fire => self.weapon.fire(cam, hooks),
                InputCommand::ToggleWeapon => self.weapon.toggle(hooks),
            }
        }
        self.weapon.tick(dt);
    }
}

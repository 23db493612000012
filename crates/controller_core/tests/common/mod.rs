//! Shared recording host for controller integration tests.
#![allow(dead_code)]

use controller_core::PlayerController;
use data_runtime::configs::controller::ControllerCfg;
use data_runtime::configs::pc_animations::PcAnimCfg;
use data_runtime::configs::weapon::WeaponCfg;
use engine_api::components::{AnimId, CameraPose, EntityId, ParamId, ProjectileRecord};
use engine_api::hooks::{
    AnimationDriver, EngineHooks, HostEvent, MotionSolver, ProjectileSpawner, SceneRaycaster,
    WeaponRig,
};
use glam::Vec3;

fn name_hash(name: &str) -> u32 {
    name.bytes()
        .fold(2_166_136_261_u32, |h, b| (h ^ u32::from(b)).wrapping_mul(16_777_619))
}

/// Deterministic id for a clip name, matching what `TestAnim` resolves.
pub fn cid(name: &str) -> AnimId {
    AnimId(name_hash(name))
}

/// Deterministic id for a parameter name, matching what `TestAnim` resolves.
pub fn pid(name: &str) -> ParamId {
    ParamId(name_hash(name))
}

#[derive(Default)]
pub struct TestMotion {
    pub grounded: bool,
    pub moves: Vec<Vec3>,
}

impl MotionSolver for TestMotion {
    fn move_by(&mut self, displacement: Vec3) {
        self.moves.push(displacement);
    }
    fn grounded(&self) -> bool {
        self.grounded
    }
}

#[derive(Default)]
pub struct TestAnim {
    pub floats: Vec<(ParamId, f32)>,
    pub flags: Vec<(ParamId, bool)>,
    pub fades: Vec<(AnimId, f32)>,
}

impl AnimationDriver for TestAnim {
    fn clip_id(&self, name: &str) -> Option<AnimId> {
        Some(cid(name))
    }
    fn param_id(&self, name: &str) -> Option<ParamId> {
        Some(pid(name))
    }
    fn set_f32(&mut self, param: ParamId, value: f32) {
        self.floats.push((param, value));
    }
    fn set_flag(&mut self, param: ParamId, value: bool) {
        self.flags.push((param, value));
    }
    fn cross_fade(&mut self, clip: AnimId, blend_s: f32) {
        self.fades.push((clip, blend_s));
    }
}

#[derive(Default)]
pub struct TestScene {
    pub hit: Option<Vec3>,
}

impl SceneRaycaster for TestScene {
    fn raycast(&self, _origin: Vec3, _dir: Vec3) -> Option<Vec3> {
        self.hit
    }
}

#[derive(Default)]
pub struct TestSpawner {
    pub spawned: Vec<(Vec3, ProjectileRecord)>,
}

impl ProjectileSpawner for TestSpawner {
    fn spawn(&mut self, origin: Vec3, record: ProjectileRecord) -> EntityId {
        self.spawned.push((origin, record));
        EntityId(self.spawned.len() as u64)
    }
}

pub struct TestRig {
    pub visible: bool,
    pub muzzle: Vec3,
}

impl Default for TestRig {
    fn default() -> Self {
        Self {
            visible: false,
            muzzle: Vec3::new(0.2, 1.3, 0.4),
        }
    }
}

impl WeaponRig for TestRig {
    fn set_visible(&mut self, shown: bool) {
        self.visible = shown;
    }
    fn muzzle_world(&self) -> Vec3 {
        self.muzzle
    }
}

#[derive(Default)]
pub struct Host {
    pub motion: TestMotion,
    pub anim: TestAnim,
    pub scene: TestScene,
    pub spawner: TestSpawner,
    pub rig: TestRig,
}

impl Host {
    pub fn hooks(&mut self) -> EngineHooks<'_> {
        EngineHooks {
            motion: &mut self.motion,
            anim: &mut self.anim,
            scene: &self.scene,
            projectiles: &mut self.spawner,
            weapon: &mut self.rig,
        }
    }
}

/// Controller with default tuning, already activated.
pub fn controller(host: &Host) -> PlayerController {
    controller_with(host, &ControllerCfg::default(), &WeaponCfg::default())
}

pub fn controller_with(host: &Host, cfg: &ControllerCfg, weapon: &WeaponCfg) -> PlayerController {
    let mut pc =
        PlayerController::new(cfg, weapon, &PcAnimCfg::default(), &host.anim).expect("build");
    let mut ev: Vec<HostEvent> = Vec::new();
    pc.activate(&mut ev);
    assert_eq!(ev, vec![HostEvent::PointerLockRequest(true)]);
    pc
}

/// Camera at head height looking down +Z.
pub fn camera() -> CameraPose {
    CameraPose {
        eye: Vec3::new(0.0, 1.6, 0.0),
        ..Default::default()
    }
}

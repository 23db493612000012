//! Host capability traits consumed by the controller.
//!
//! The host (engine integration or a test fixture) implements these; the
//! controller only ever sees the trait objects bundled in [`EngineHooks`].

use crate::components::{AnimId, EntityId, ParamId, ProjectileRecord};
use glam::Vec3;

/// Character motion solver: accepts displacement requests and reports ground
/// contact for the character's collision volume.
pub trait MotionSolver {
    /// Request a world-space displacement for this tick. May be called more
    /// than once per tick (horizontal and vertical requests are separate).
    fn move_by(&mut self, displacement: Vec3);
    /// Whether the collision volume currently rests on walkable geometry.
    fn grounded(&self) -> bool;
}

/// Animation graph driver: named parameters plus clip cross-fades.
///
/// Names are resolved to ids once at controller construction; per-tick calls
/// use the resolved ids only.
pub trait AnimationDriver {
    fn clip_id(&self, name: &str) -> Option<AnimId>;
    fn param_id(&self, name: &str) -> Option<ParamId>;
    fn set_f32(&mut self, param: ParamId, value: f32);
    fn set_flag(&mut self, param: ParamId, value: bool);
    /// Blend from the current clip to `clip` over `blend_s` seconds.
    fn cross_fade(&mut self, clip: AnimId, blend_s: f32);
}

/// Scene raycast query, effectively unbounded range.
pub trait SceneRaycaster {
    /// First hit point along `dir` from `origin`, if any geometry is struck.
    fn raycast(&self, origin: Vec3, dir: Vec3) -> Option<Vec3>;
}

/// Instantiates one projectile entity carrying its targeting record.
pub trait ProjectileSpawner {
    fn spawn(&mut self, origin: Vec3, record: ProjectileRecord) -> EntityId;
}

/// The weapon's visual representation and muzzle transform.
pub trait WeaponRig {
    fn set_visible(&mut self, shown: bool);
    fn muzzle_world(&self) -> Vec3;
}

/// One mutable borrow of every host capability the controller needs.
///
/// Constructing this is the "all required handles resolved" part of the
/// init contract; a missing collaborator is a compile error on the host
/// side, not a runtime branch.
pub struct EngineHooks<'a> {
    pub motion: &'a mut dyn MotionSolver,
    pub anim: &'a mut dyn AnimationDriver,
    pub scene: &'a dyn SceneRaycaster,
    pub projectiles: &'a mut dyn ProjectileSpawner,
    pub weapon: &'a mut dyn WeaponRig,
}

/// Requests the controller raises to its host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    /// Capture (true) or release (false) the pointer.
    PointerLockRequest(bool),
}

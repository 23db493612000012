//! Plain data shared across the controller/host boundary.

use glam::Vec3;

/// Opaque entity identifier (host-assigned). Stable for the entity's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityId(pub u64);

/// Pre-resolved animation clip identifier for fast cross-fade dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnimId(pub u32);

/// Pre-resolved animation-graph parameter identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParamId(pub u32);

/// Read-only camera pose sampled once per tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub eye: Vec3,
    pub look_dir: Vec3,
    pub up: Vec3,
    pub yaw: f32,
}

impl Default for CameraPose {
    fn default() -> Self {
        Self {
            eye: Vec3::ZERO,
            look_dir: Vec3::Z,
            up: Vec3::Y,
            yaw: 0.0,
        }
    }
}

/// Targeting record written onto a spawned projectile entity.
///
/// `hit` is true when the camera ray struck geometry; otherwise `target` is
/// the capped-distance point along the camera forward vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectileRecord {
    pub target: Vec3,
    pub hit: bool,
}

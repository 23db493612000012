//! Camera-relative movement basis in the XZ plane.

use glam::{Vec2, Vec3};

/// Horizontal movement basis derived from the camera.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BasisXZ {
    pub fwd: Vec2,
    pub right: Vec2,
}

/// Project the camera look direction onto the horizontal plane.
/// A camera looking straight up or down yields a zero basis (no movement).
#[must_use]
pub fn basis_from_camera(look_dir: Vec3) -> BasisXZ {
    let fwd = Vec2::new(look_dir.x, look_dir.z).normalize_or_zero();
    let right = Vec2::new(fwd.y, -fwd.x);
    BasisXZ { fwd, right }
}

/// Resolve the blend vector into a world-space XZ direction. Clamped to unit
/// length so diagonals are not faster.
#[must_use]
pub fn world_move_xz(blend: Vec2, basis: BasisXZ) -> Vec2 {
    let mut v = basis.right * blend.x + basis.fwd * blend.y;
    if v.length_squared() > 1.0 {
        v = v.normalize();
    }
    v
}

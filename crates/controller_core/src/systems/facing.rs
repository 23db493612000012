//! Facing helpers: yaw wrapping and the per-tick approach toward camera yaw.

use std::f32::consts::{PI, TAU};

/// Wrap an angle to (-π, π].
#[must_use]
pub fn wrap_angle(a: f32) -> f32 {
    let mut x = a;
    while x > PI {
        x -= TAU;
    }
    while x < -PI {
        x += TAU;
    }
    x
}

/// One tick of facing: rotate `cur_yaw` toward `cam_yaw` by the fraction
/// `rotation_speed * dt` of the remaining (shortest-path) difference.
/// Converges asymptotically; never snaps.
#[must_use]
pub fn face_camera_step(cur_yaw: f32, cam_yaw: f32, rotation_speed: f32, dt: f32) -> f32 {
    let t = (rotation_speed * dt).clamp(0.0, 1.0);
    let diff = wrap_angle(cam_yaw - cur_yaw);
    wrap_angle(cur_yaw + diff * t)
}

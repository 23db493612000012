//! Aim-marker placement from the camera pose.

use engine_api::components::CameraPose;
use glam::Vec3;

/// Marker position kept a fixed distance in front of the camera.
#[must_use]
pub fn aim_point(cam: &CameraPose, distance_m: f32) -> Vec3 {
    cam.eye + cam.look_dir.normalize_or_zero() * distance_m
}

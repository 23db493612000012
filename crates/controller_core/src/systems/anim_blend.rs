//! Critically damped smoothing for the animation blend vector.
//!
//! Same spring form throughout: the filter tracks a moving target without
//! oscillation, so raw input jitter never reaches the blend tree.

use glam::Vec2;

/// Advance `current` toward `target` with a critically damped spring.
/// `velocity` is the filter state and must persist across ticks.
/// `smooth_time_s` is roughly the time to cover most of the remaining gap.
#[must_use]
pub fn smooth_damp(
    current: Vec2,
    target: Vec2,
    velocity: &mut Vec2,
    smooth_time_s: f32,
    dt: f32,
) -> Vec2 {
    let smooth_time = smooth_time_s.max(1e-4);
    let omega = 2.0 / smooth_time;
    let x = omega * dt;
    // Padé-style approximation of e^-x, stable for large steps.
    let exp = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);
    let change = current - target;
    let temp = (*velocity + change * omega) * dt;
    *velocity = (*velocity - temp * omega) * exp;
    target + (change + temp) * exp
}

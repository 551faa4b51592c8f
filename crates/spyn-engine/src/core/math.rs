// core/math.rs
//
// Scalar and vector interpolation primitives.
//
// Everything in the engine blends field-by-field through `lerp`; the vector
// helpers are the same formula applied per axis, so rotations are plain Euler
// lerps rather than shortest-path slerps.

use glam::{DVec2, DVec3};

/// Linearly interpolate between two values. `t` is not clamped.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Bound `value` to `[min, max]`, boundaries included.
///
/// Unlike `f64::clamp` this never panics when `min > max`; `min` wins.
#[inline]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    min.max(max.min(value))
}

/// Per-axis lerp of two 2D vectors.
#[inline]
pub fn lerp_dvec2(a: DVec2, b: DVec2, t: f64) -> DVec2 {
    DVec2::new(lerp(a.x, b.x, t), lerp(a.y, b.y, t))
}

/// Per-axis lerp of two 3D vectors.
#[inline]
pub fn lerp_dvec3(a: DVec3, b: DVec3, t: f64) -> DVec3 {
    DVec3::new(lerp(a.x, b.x, t), lerp(a.y, b.y, t), lerp(a.z, b.z, t))
}

#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg.to_radians()
}

#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad.to_degrees()
}

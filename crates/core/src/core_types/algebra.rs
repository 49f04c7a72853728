//! Free-function vector algebra: products, normalization and the two
//! scattering directions a path tracer needs.
//!
//! Everything here is pure and takes its arguments by value.
//!
//! # Refraction
//!
//! [`refract`] follows Snell's law split into a component perpendicular to
//! the normal and one parallel to it:
//!
//! ```text
//! cos θ     = min(-v · n, 1)
//! r_perp    = η (v + cos θ n)
//! r_par     = -sqrt(|1 - |r_perp|²|) n
//! ```
//!
//! The absolute value keeps the square root real when `|r_perp| > 1`. That is
//! the total internal reflection case; callers decide between [`reflect`] and
//! [`refract`] before calling.

use super::vec3::Vec3;

#[inline]
pub fn dot(u: Vec3, v: Vec3) -> f32 {
    u.x() * v.x() + u.y() * v.y() + u.z() * v.z()
}

/// Right-handed cross product.
#[inline]
pub fn cross(u: Vec3, v: Vec3) -> Vec3 {
    Vec3::new(
        u.y() * v.z() - u.z() * v.y(),
        u.z() * v.x() - u.x() * v.z(),
        u.x() * v.y() - u.y() * v.x(),
    )
}

/// `v` scaled to length 1. A zero-length input yields NaN components.
#[inline]
pub fn unit_vector(v: Vec3) -> Vec3 {
    v / v.length()
}

/// Mirror `v` about the surface normal `n` (expected unit length).
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * dot(v, n) * n
}

/// Bend the unit incident direction `v` through a surface with unit normal
/// `n`, where `eta_ratio` is η_incident / η_transmitted.
#[inline]
pub fn refract(v: Vec3, n: Vec3, eta_ratio: f32) -> Vec3 {
    let cos_theta = dot(-v, n).min(1.0);
    let r_out_perp = eta_ratio * (v + cos_theta * n);
    let r_out_parallel = -(1.0 - r_out_perp.length_squared()).abs().sqrt() * n;
    r_out_perp + r_out_parallel
}

//! Core types and utilities

pub mod algebra;
pub mod error;
pub mod vec3;

pub use algebra::{cross, dot, reflect, refract, unit_vector};
pub use error::{VecError, VecErrorCode};
pub use vec3::{Color, Point3, Vec3, NEAR_ZERO_EPSILON};

//! Ray Tracing Vector Core Library
//!
//! The numeric backbone of a ray tracer: a three-component `f32` vector used
//! for points, directions and colors, the free-function algebra a renderer
//! needs (dot and cross products, normalization, reflection, refraction) and
//! random direction sampling for diffuse bounces.
//!
//! ## Randomness
//!
//! Sampling never touches a process-wide generator. Pass any [`rand::Rng`] to
//! the free functions in [`sampling`], own a [`Sampler`] per thread, or use
//! [`sampling::par_sample`] for seeded, thread-count independent batches.
//!
//! ```
//! use ray_vec_core::{cross, reflect, Vec3};
//!
//! let x = Vec3::new(1.0, 0.0, 0.0);
//! let y = Vec3::new(0.0, 1.0, 0.0);
//! assert_eq!(cross(x, y), Vec3::new(0.0, 0.0, 1.0));
//! assert_eq!(reflect(Vec3::new(1.0, -1.0, 0.0), y), Vec3::new(1.0, 1.0, 0.0));
//! ```

// Core types and utilities
pub mod core_types;

// Random sampling on top of the core types
pub mod sampling;

// Re-export core types
pub use core_types::{cross, dot, reflect, refract, unit_vector};
pub use core_types::{Color, Point3, Vec3, VecError, VecErrorCode};

// Re-export sampling entry points
pub use sampling::{
    random_in_unit_sphere, random_unit_vector, random_vector, random_vector_range, Sampler,
    SamplerConfig,
};

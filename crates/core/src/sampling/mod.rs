//! Random vector sampling
//!
//! Every function takes the generator explicitly. There is no hidden global
//! source, so a seeded [`rand::rngs::StdRng`] gives reproducible samples and
//! each worker thread can own its own generator.
//!
//! - [`random_vector`] / [`random_vector_range`]: independent uniform components
//! - [`random_in_unit_sphere`]: rejection sampling inside the unit ball
//! - [`random_unit_vector`]: uniformly distributed direction
//!
//! [`Sampler`] bundles a generator with a [`SamplerConfig`], and
//! [`par_sample`] fans sampling out over rayon with per-chunk generators.

pub mod batch;
pub mod config;
pub mod sampler;

pub use batch::{par_random_in_unit_sphere, par_random_unit_vector, par_sample};
pub use config::{SamplerConfig, DEFAULT_MAX_REJECTION_ATTEMPTS};
pub use sampler::Sampler;

use crate::core_types::{unit_vector, Vec3, VecError};
use rand::Rng;
use tracing::warn;

/// Uniform value in [0, 1).
#[inline]
pub fn random_f32<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    rng.random::<f32>()
}

/// Uniform value in [min, max).
///
/// Computed as `min + (max - min) * u`, so `min == max` returns `min`
/// instead of panicking on an empty range. Rounding can land that sum on
/// `max`; such draws are pulled back to the largest float below `max`.
#[inline]
pub fn random_f32_range<R: Rng + ?Sized>(rng: &mut R, min: f32, max: f32) -> f32 {
    let v = min + (max - min) * random_f32(rng);
    if v >= max && max > min {
        next_below(max)
    } else {
        v
    }
}

/// Largest finite `f32` strictly less than `x` (for finite `x`).
#[inline]
fn next_below(x: f32) -> f32 {
    if x > 0.0 {
        f32::from_bits(x.to_bits() - 1)
    } else if x == 0.0 {
        -f32::from_bits(1)
    } else {
        f32::from_bits(x.to_bits() + 1)
    }
}

/// Vector with each component uniform in [0, 1).
#[inline]
pub fn random_vector<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    Vec3::new(random_f32(rng), random_f32(rng), random_f32(rng))
}

/// Vector with each component uniform in [min, max).
#[inline]
pub fn random_vector_range<R: Rng + ?Sized>(rng: &mut R, min: f32, max: f32) -> Vec3 {
    Vec3::new(
        random_f32_range(rng, min, max),
        random_f32_range(rng, min, max),
        random_f32_range(rng, min, max),
    )
}

/// Point strictly inside the unit sphere.
///
/// Draws from the cube [-1, 1)³ until a candidate has squared length below 1.
/// Each draw is accepted with probability π/6 (about 52%), so the loop ends
/// quickly for any reasonable generator, but it has no upper bound. Use
/// [`random_in_unit_sphere_capped`] when the generator is not trusted.
pub fn random_in_unit_sphere<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    loop {
        let p = random_vector_range(rng, -1.0, 1.0);
        if p.length_squared() < 1.0 {
            return p;
        }
    }
}

/// [`random_in_unit_sphere`] with at most `max_attempts` draws.
///
/// # Errors
/// Returns [`VecError::RejectionLimitExceeded`] if every candidate was rejected.
pub fn random_in_unit_sphere_capped<R: Rng + ?Sized>(
    rng: &mut R,
    max_attempts: u32,
) -> Result<Vec3, VecError> {
    for _ in 0..max_attempts {
        let p = random_vector_range(rng, -1.0, 1.0);
        if p.length_squared() < 1.0 {
            return Ok(p);
        }
    }
    warn!(
        attempts = max_attempts,
        "Rejection sampling exhausted its attempt budget"
    );
    Err(VecError::RejectionLimitExceeded {
        attempts: max_attempts,
    })
}

/// Uniformly distributed unit-length direction.
#[inline]
pub fn random_unit_vector<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    unit_vector(random_in_unit_sphere(rng))
}

#[cfg(test)]
pub(crate) mod test_rng {
    use rand::RngCore;

    /// Generator that always returns the maximum value, so every unit-cube
    /// candidate lands in the far corner and is rejected.
    pub struct Saturated;

    impl RngCore for Saturated {
        fn next_u32(&mut self) -> u32 {
            u32::MAX
        }

        fn next_u64(&mut self) -> u64 {
            u64::MAX
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            dst.fill(u8::MAX);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_rng::Saturated;
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_f32_range_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let v = random_f32_range(&mut rng, -2.0, 3.0);
            assert!((-2.0..3.0).contains(&v), "out of range: {v}");
        }
        assert_eq!(random_f32_range(&mut rng, 4.0, 4.0), 4.0);
    }

    #[test]
    fn test_random_f32_range_never_returns_max() {
        // The saturated generator draws u = 1 - 2^-24, which rounds onto max
        let v = random_f32_range(&mut Saturated, 0.5, 0.6);
        assert!((0.5..0.6).contains(&v), "out of range: {v}");

        let v = random_f32_range(&mut Saturated, 1e7, 1e7 + 1.0);
        assert_eq!(v, 1e7);

        let p = random_vector_range(&mut Saturated, 0.5, 0.6);
        for i in 0..3 {
            assert!(p[i] < 0.6, "component reached max: {}", p[i]);
        }

        assert_eq!(random_f32_range(&mut Saturated, 2.0, 2.0), 2.0);
    }

    #[test]
    fn test_next_below() {
        assert!(next_below(0.6) < 0.6);
        assert_eq!(next_below(1.0), 1.0 - f32::EPSILON / 2.0);
        assert!(next_below(0.0) < 0.0);
        assert_eq!(next_below(-1.0), -1.0 - f32::EPSILON);
    }

    #[test]
    fn test_random_vector_components_in_unit_interval() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..1000 {
            let v = random_vector(&mut rng);
            for i in 0..3 {
                assert!((0.0..1.0).contains(&v[i]));
            }
        }
    }

    #[test]
    fn test_seeded_generators_repeat() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            assert_eq!(random_in_unit_sphere(&mut a), random_in_unit_sphere(&mut b));
        }
    }

    #[test]
    fn test_random_unit_vector_is_normalised() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..1000 {
            assert_relative_eq!(random_unit_vector(&mut rng).length(), 1.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_capped_sampling_gives_up() {
        let result = random_in_unit_sphere_capped(&mut Saturated, 16);
        assert_eq!(result, Err(VecError::RejectionLimitExceeded { attempts: 16 }));
    }

    #[test]
    fn test_capped_sampling_accepts_with_real_rng() {
        let mut rng = StdRng::seed_from_u64(5);
        let p = random_in_unit_sphere_capped(&mut rng, 1000).unwrap();
        assert!(p.length_squared() < 1.0);
    }
}

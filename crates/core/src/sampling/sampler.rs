//! Owned generator plus configuration.

use super::config::SamplerConfig;
use super::{
    random_f32, random_f32_range, random_in_unit_sphere, random_in_unit_sphere_capped,
    random_vector, random_vector_range,
};
use crate::core_types::{unit_vector, Vec3, VecError};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

/// Random vector source for one thread of rendering work.
///
/// Not shared between threads: give each worker its own `Sampler` (or use
/// [`par_sample`](super::par_sample), which does this per chunk).
///
/// # Example
///
/// ```
/// use ray_vec_core::sampling::Sampler;
///
/// let mut sampler = Sampler::seeded(7);
/// let dir = sampler.random_unit_vector().unwrap();
/// assert!((dir.length() - 1.0).abs() < 1e-5);
/// ```
#[derive(Debug, Clone)]
pub struct Sampler {
    rng: StdRng,
    config: SamplerConfig,
}

impl Sampler {
    /// Build a sampler from a validated configuration.
    ///
    /// # Errors
    /// Returns [`VecError::InvalidConfig`] if `config` fails validation.
    pub fn new(config: SamplerConfig) -> Result<Self, VecError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Ok(Self::from_parts(rng, config))
    }

    /// Deterministic sampler with the default rejection cap.
    pub fn seeded(seed: u64) -> Self {
        Self::from_parts(
            StdRng::seed_from_u64(seed),
            SamplerConfig::default().with_seed(seed),
        )
    }

    fn from_parts(rng: StdRng, config: SamplerConfig) -> Self {
        debug!(
            seed = ?config.seed,
            max_rejection_attempts = ?config.max_rejection_attempts,
            "Created sampler"
        );
        Self { rng, config }
    }

    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    /// Borrow the generator for use with the free sampling functions.
    pub fn rng_mut(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    pub fn random_f32(&mut self) -> f32 {
        random_f32(&mut self.rng)
    }

    pub fn random_f32_range(&mut self, min: f32, max: f32) -> f32 {
        random_f32_range(&mut self.rng, min, max)
    }

    pub fn random_vector(&mut self) -> Vec3 {
        random_vector(&mut self.rng)
    }

    pub fn random_vector_range(&mut self, min: f32, max: f32) -> Vec3 {
        random_vector_range(&mut self.rng, min, max)
    }

    /// Point inside the unit sphere, bounded by the configured attempt cap.
    ///
    /// # Errors
    /// Returns [`VecError::RejectionLimitExceeded`] when the cap is reached.
    pub fn random_in_unit_sphere(&mut self) -> Result<Vec3, VecError> {
        match self.config.max_rejection_attempts {
            Some(cap) => random_in_unit_sphere_capped(&mut self.rng, cap),
            None => Ok(random_in_unit_sphere(&mut self.rng)),
        }
    }

    /// # Errors
    /// Same as [`Sampler::random_in_unit_sphere`].
    pub fn random_unit_vector(&mut self) -> Result<Vec3, VecError> {
        self.random_in_unit_sphere().map(unit_vector)
    }
}

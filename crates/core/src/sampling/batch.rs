//! Parallel batch sampling
//!
//! Work is split into fixed-size chunks and every chunk gets its own
//! `StdRng`, seeded from the batch seed and the chunk index. Output therefore
//! depends only on `(count, seed)`, not on how rayon schedules chunks.

use super::config::SamplerConfig;
use super::{random_in_unit_sphere, random_in_unit_sphere_capped};
use crate::core_types::{unit_vector, Vec3, VecError};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use tracing::debug;

/// Samples drawn per chunk (one generator each).
pub const CHUNK_SIZE: usize = 1024;

/// Seed for chunk `chunk` of a batch seeded with `seed`.
#[inline]
fn chunk_seed(seed: u64, chunk: usize) -> u64 {
    seed ^ (chunk as u64).wrapping_add(1).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

/// Draw `count` values with `f`, in parallel and in a deterministic order.
///
/// # Example
///
/// ```
/// use ray_vec_core::sampling::{par_sample, random_vector};
///
/// let a = par_sample(3000, 17, random_vector);
/// let b = par_sample(3000, 17, random_vector);
/// assert_eq!(a, b);
/// ```
pub fn par_sample<T, F>(count: usize, seed: u64, f: F) -> Vec<T>
where
    T: Send,
    F: Fn(&mut StdRng) -> T + Sync,
{
    let chunks = count.div_ceil(CHUNK_SIZE);
    debug!(count, chunks, seed, "Sampling in parallel");

    let f = &f;
    (0..chunks)
        .into_par_iter()
        .flat_map_iter(|chunk| {
            let mut rng = StdRng::seed_from_u64(chunk_seed(seed, chunk));
            let len = CHUNK_SIZE.min(count - chunk * CHUNK_SIZE);
            (0..len).map(move |_| f(&mut rng))
        })
        .collect()
}

/// `count` points inside the unit sphere, honouring the config's rejection
/// cap. An unseeded config draws a batch seed from the thread-local generator.
///
/// # Errors
/// Returns [`VecError::InvalidConfig`] for an invalid config, or the first
/// [`VecError::RejectionLimitExceeded`] hit by any chunk.
pub fn par_random_in_unit_sphere(
    count: usize,
    config: &SamplerConfig,
) -> Result<Vec<Vec3>, VecError> {
    config.validate()?;
    let seed = config.seed.unwrap_or_else(rand::random);
    let cap = config.max_rejection_attempts;

    par_sample(count, seed, |rng| match cap {
        Some(max) => random_in_unit_sphere_capped(rng, max),
        None => Ok(random_in_unit_sphere(rng)),
    })
    .into_iter()
    .collect()
}

/// `count` unit-length directions.
///
/// # Errors
/// Same as [`par_random_in_unit_sphere`].
pub fn par_random_unit_vector(
    count: usize,
    config: &SamplerConfig,
) -> Result<Vec<Vec3>, VecError> {
    let mut samples = par_random_in_unit_sphere(count, config)?;
    samples.par_iter_mut().for_each(|v| *v = unit_vector(*v));
    Ok(samples)
}

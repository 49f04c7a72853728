//! Sampler configuration

use crate::core_types::VecError;
use serde::{Deserialize, Serialize};

/// Default cap on rejection-sampling draws. With a 52% acceptance rate the
/// chance of a healthy generator hitting it is below 10^-300.
pub const DEFAULT_MAX_REJECTION_ATTEMPTS: u32 = 1000;

/// How a [`Sampler`](super::Sampler) seeds itself and bounds rejection loops.
///
/// # Example
///
/// ```
/// use ray_vec_core::sampling::SamplerConfig;
///
/// let config = SamplerConfig::default().with_seed(1234);
/// assert_eq!(config.seed, Some(1234));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplerConfig {
    /// Fixed seed for reproducible output. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Upper bound on draws per rejection-sampled vector. `None` = unbounded.
    pub max_rejection_attempts: Option<u32>,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            seed: None,
            max_rejection_attempts: Some(DEFAULT_MAX_REJECTION_ATTEMPTS),
        }
    }
}

impl SamplerConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_max_rejection_attempts(mut self, attempts: u32) -> Self {
        self.max_rejection_attempts = Some(attempts);
        self
    }

    /// Let rejection sampling loop until it succeeds.
    pub fn unbounded(mut self) -> Self {
        self.max_rejection_attempts = None;
        self
    }

    /// # Errors
    /// Returns [`VecError::InvalidConfig`] when the rejection cap is zero,
    /// since no sample could ever be produced.
    pub fn validate(&self) -> Result<(), VecError> {
        if self.max_rejection_attempts == Some(0) {
            return Err(VecError::invalid_config(
                "max_rejection_attempts",
                "must be at least 1",
            ));
        }
        Ok(())
    }
}

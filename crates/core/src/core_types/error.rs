//! Error type shared by the vector and sampling APIs.
//!
//! Arithmetic never produces a `VecError`: division by zero and normalizing a
//! zero-length vector follow IEEE semantics. Errors only come from checked
//! indexing, capped rejection sampling and sampler configuration.

use std::fmt;

/// Flat error codes, stable across releases.
/// Follows standard C convention: 0 = success, non-zero = error.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VecErrorCode {
    /// Operation completed successfully.
    Ok = 0,

    /// Component index outside 0..=2.
    IndexOutOfRange = 1,

    /// Rejection sampling hit its attempt cap without accepting a candidate.
    RejectionLimitExceeded = 2,

    /// Sampler configuration failed validation.
    InvalidConfig = 3,
}

/// Errors raised by [`Vec3`](crate::Vec3) accessors and the samplers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VecError {
    /// A component index other than 0, 1 or 2 was requested.
    IndexOutOfRange {
        /// The rejected index
        index: usize,
    },

    /// Rejection sampling gave up after `attempts` rejected candidates.
    RejectionLimitExceeded {
        /// Number of candidates drawn before giving up
        attempts: u32,
    },

    /// Invalid sampler configuration.
    InvalidConfig(String),
}

impl VecError {
    /// Create error for an invalid configuration value.
    ///
    /// # Arguments
    /// * `param_name` - The name of the offending field (e.g., `"max_rejection_attempts"`)
    /// * `message` - A description of the validation error
    pub fn invalid_config(param_name: &str, message: &str) -> Self {
        VecError::InvalidConfig(format!("Config parameter {param_name}: {message}"))
    }

    pub fn code(&self) -> VecErrorCode {
        match self {
            VecError::IndexOutOfRange { .. } => VecErrorCode::IndexOutOfRange,
            VecError::RejectionLimitExceeded { .. } => VecErrorCode::RejectionLimitExceeded,
            VecError::InvalidConfig(_) => VecErrorCode::InvalidConfig,
        }
    }
}

impl fmt::Display for VecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VecError::IndexOutOfRange { index } => {
                write!(f, "Vec3 index {index} out of range (expected 0, 1 or 2)")
            }
            VecError::RejectionLimitExceeded { attempts } => {
                write!(f, "Rejection sampling gave up after {attempts} attempts")
            }
            VecError::InvalidConfig(msg) => f.write_str(msg),
        }
    }
}

impl std::error::Error for VecError {}

impl From<VecError> for VecErrorCode {
    fn from(error: VecError) -> Self {
        error.code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            VecError::IndexOutOfRange { index: 4 }.code(),
            VecErrorCode::IndexOutOfRange
        );
        assert_eq!(
            VecErrorCode::from(VecError::RejectionLimitExceeded { attempts: 10 }),
            VecErrorCode::RejectionLimitExceeded
        );
        assert_eq!(VecErrorCode::Ok as i32, 0);
    }

    #[test]
    fn test_messages() {
        let err = VecError::invalid_config("max_rejection_attempts", "must be at least 1");
        assert_eq!(
            err.to_string(),
            "Config parameter max_rejection_attempts: must be at least 1"
        );
        assert_eq!(err.code(), VecErrorCode::InvalidConfig);
        assert_eq!(
            VecError::IndexOutOfRange { index: 3 }.to_string(),
            "Vec3 index 3 out of range (expected 0, 1 or 2)"
        );
    }
}

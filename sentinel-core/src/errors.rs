//! Error Types for Risk Scoring
//!
//! ## Design Philosophy
//!
//! The scoring engine has no error path in normal operation: every numeric
//! input is clamped onto its risk scale, never rejected. Errors only exist for
//! the strict `try_*` entry points, which refuse readings that are not numbers
//! at all (NaN, ±infinity) instead of sanitizing them.
//!
//! Like the rest of the crate, errors are:
//!
//! 1. **Small**: a discriminant plus one `&'static str`, no heap data.
//! 2. **Copy**: cheap to return from the control loop and to queue.
//! 3. **Actionable**: the offending input is named, so the caller can flag
//!    the sensor that produced it.
//!
//! ```rust
//! use sentinel_core::{try_compute_combined_index, ScoringError};
//!
//! let result = try_compute_combined_index(f32::NAN, 25.0, 40.0, 0.0, 0.0, 98.0, 55.0);
//! assert_eq!(result, Err(ScoringError::NonFinite { input: "heart_rate" }));
//! ```

use thiserror_no_std::Error;

/// Result type for strict scoring operations
pub type ScoringResult<T> = Result<T, ScoringError>;

/// Scoring errors - kept small for embedded use
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoringError {
    /// Input is NaN or infinite and cannot be placed on a risk scale
    #[error("Input '{input}' is not a finite number")]
    NonFinite {
        /// Name of the offending input (e.g. `"heart_rate"`)
        input: &'static str,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for ScoringError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::NonFinite { input } => defmt::write!(fmt, "Non-finite input: {}", input),
        }
    }
}

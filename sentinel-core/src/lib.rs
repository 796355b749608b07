//! Core scoring engine for Harmony Sentinel
//!
//! Fuses raw sensor readings into normalized health and safety indices.
//! Designed for edge devices with limited resources.
//!
//! Key constraints:
//! - Runs on the sensor node's control loop (ESP32 class)
//! - No heap allocation, no state between calls
//! - Bit-identical results across devices for the same readings
//!
//! ```no_run
//! use sentinel_core::{compute_combined_index, compute_predictive_maintenance};
//!
//! let cis = compute_combined_index(88.0, 31.0, 60.0, 5.0, 40.0, 97.0, 72.0);
//! let pdm = compute_predictive_maintenance(85.0, 90.0, 4.0, 0.002, 55.0);
//!
//! // Serialize both into the telemetry payload
//! # let _ = (cis, pdm);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[macro_use]
mod macros;

pub mod constants;
pub mod errors;
pub mod scoring;
pub mod traits;

// Public API
pub use errors::{ScoringError, ScoringResult};
pub use scoring::{
    compute_combined_index, try_compute_combined_index,
    compute_predictive_maintenance, try_compute_predictive_maintenance,
    ClampReport, CombinedIndexScore, Input, MachineSample, MaintenanceStatus,
    PredictiveMaintenanceScore, RiskLevel, SensorSample,
};
pub use traits::{ScoreBand, Validatable};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}

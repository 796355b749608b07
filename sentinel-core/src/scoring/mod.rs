//! Risk Scoring Engine
//!
//! ## Overview
//!
//! Converts raw multi-sensor readings into normalized, comparable indices
//! using fixed weights and clamps. There is no learning and no state across
//! calls: every function here is a pure, bounded-time computation on the
//! stack, safe to call from the sampling loop or an interrupt-driven task.
//!
//! Two scores are provided:
//!
//! - [`compute_combined_index`]: worker/environment risk in `[0, 1]`
//!   with a Safe / Warning / Critical level and two dashboard sub-scores
//! - [`compute_predictive_maintenance`]: machine health in `[0, 100]` with a
//!   Healthy / Degraded / At Risk / Critical status
//!
//! ## Clamping Policy
//!
//! Readings are never rejected. Out-of-range values are pinned to the nearest
//! end of their risk scale, and the [`ClampReport`] attached to every score
//! says which inputs were affected. NaN and infinite readings are treated as
//! a failed sensor and score the worst case; callers that would rather refuse
//! them use the `try_*` variants.
//!
//! ```rust
//! use sentinel_core::scoring::{SensorSample, RiskLevel};
//!
//! let sample = SensorSample {
//!     heart_rate: 126.0,
//!     temperature: 36.0,
//!     humidity: 70.0,
//!     gas: 20.0,
//!     machine_stress: 80.0,
//!     spo2: 95.0,
//!     noise: 85.0,
//! };
//!
//! let cis = sample.score();
//! assert_eq!(cis.level, RiskLevel::Warning);
//! ```

mod combined;
mod maintenance;
mod report;
mod utils;

pub use combined::{
    compute_combined_index, try_compute_combined_index,
    CombinedIndexScore, RiskLevel, SensorSample,
};
pub use maintenance::{
    compute_predictive_maintenance, try_compute_predictive_maintenance,
    MachineSample, MaintenanceStatus, PredictiveMaintenanceScore,
};
pub use report::{ClampReport, Input};

//! Constants for Sentinel Core
//!
//! Centralized, documented constants used by the scoring engine. Tests assert
//! on these directly, so thresholds and clamp boundaries are never repeated as
//! magic numbers.
//!
//! ## Usage Guidelines
//!
//! 1. Always use these constants instead of magic numbers
//! 2. Include units in constant names
//! 3. Keep related constants together

/// Baselines, spans, weights and classification bands for risk scoring.
pub mod scoring;

pub use scoring::{
    CIS_WARNING_THRESHOLD, CIS_CRITICAL_THRESHOLD,
    PDM_HEALTHY_THRESHOLD, PDM_DEGRADED_THRESHOLD, PDM_AT_RISK_THRESHOLD,
    PDM_FULL_HEALTH,
};

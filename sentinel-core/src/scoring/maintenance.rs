//! Predictive Maintenance (PdM) health score
//!
//! Subtractive degradation model. A machine starts at 100 health and loses
//! points for each stressor independently:
//!
//! | Stressor       | Active when | Penalty             |
//! |----------------|-------------|---------------------|
//! | Engine load    | > 80 %      | (load − 80) · 1.5   |
//! | Coolant temp   | > 85 °C     | (temp − 85) · 2.0   |
//! | Vibration      | > 6 mm/s    | (vib − 6) · 3.0     |
//! | Wear           | always      | degradation · 500   |
//! | Stress index   | > 60        | (stress − 60) · 0.5 |
//!
//! Thresholds are one-sided: a stressor exactly at its threshold costs
//! nothing, and the derivative jumps at the boundary. Health is clamped to
//! `[0, 100]` and classified Healthy / Degraded / At Risk / Critical at
//! 80 / 50 / 20.

use crate::{
    constants::scoring::*,
    errors::{ScoringError, ScoringResult},
    traits::{ScoreBand, Validatable},
};

use super::{
    report::{ClampReport, Input},
    utils::clamp,
};

/// Categorical machine health status, ordered from healthy to critical
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MaintenanceStatus {
    /// 80 and above
    Healthy,
    /// 50 up to 80
    Degraded,
    /// 20 up to 50
    #[cfg_attr(feature = "serde", serde(rename = "At Risk"))]
    AtRisk,
    /// Below 20
    Critical,
}

impl ScoreBand for MaintenanceStatus {
    fn classify(health: f32) -> Self {
        if health >= PDM_HEALTHY_THRESHOLD {
            MaintenanceStatus::Healthy
        } else if health >= PDM_DEGRADED_THRESHOLD {
            MaintenanceStatus::Degraded
        } else if health >= PDM_AT_RISK_THRESHOLD {
            MaintenanceStatus::AtRisk
        } else {
            MaintenanceStatus::Critical
        }
    }

    fn label(&self) -> &'static str {
        match self {
            MaintenanceStatus::Healthy => "Healthy",
            MaintenanceStatus::Degraded => "Degraded",
            MaintenanceStatus::AtRisk => "At Risk",
            MaintenanceStatus::Critical => "Critical",
        }
    }

    fn is_alarming(&self) -> bool {
        matches!(self, MaintenanceStatus::AtRisk | MaintenanceStatus::Critical)
    }
}

impl core::fmt::Display for MaintenanceStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of one maintenance computation
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PredictiveMaintenanceScore {
    /// Machine health in `[0, 100]`
    pub health: f32,
    /// Band of `health`
    pub status: MaintenanceStatus,
    /// Clamping diagnostics, not part of the telemetry record
    #[cfg_attr(feature = "serde", serde(skip))]
    pub report: ClampReport,
}

/// One set of machine telemetry readings
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MachineSample {
    /// Engine load (%)
    pub engine_load: f32,
    /// Coolant temperature (°C)
    pub coolant_temp: f32,
    /// Vibration velocity (mm/s)
    pub vibration: f32,
    /// Cumulative wear (fraction, grows per operating hour)
    pub degradation: f32,
    /// Machine stress index (0-100)
    pub stress_index: f32,
}

impl MachineSample {
    /// Score this sample
    pub fn score(&self) -> PredictiveMaintenanceScore {
        compute_predictive_maintenance(
            self.engine_load,
            self.coolant_temp,
            self.vibration,
            self.degradation,
            self.stress_index,
        )
    }

    /// Score this sample, rejecting NaN and infinite readings
    pub fn try_score(&self) -> ScoringResult<PredictiveMaintenanceScore> {
        try_compute_predictive_maintenance(
            self.engine_load,
            self.coolant_temp,
            self.vibration,
            self.degradation,
            self.stress_index,
        )
    }
}

/// Penalty for `value` above `threshold`, zero at or below it
fn threshold_penalty(value: f32, threshold: f32, weight: f64) -> f64 {
    if value > threshold {
        (f64::from(value) - f64::from(threshold)) * weight
    } else {
        0.0
    }
}

/// Compute machine health from raw readings
///
/// Never fails. A non-finite reading is treated as a failed sensor on the
/// machine and pins health to 0.
pub fn compute_predictive_maintenance(
    engine_load: f32,
    coolant_temp: f32,
    vibration: f32,
    degradation: f32,
    stress_index: f32,
) -> PredictiveMaintenanceScore {
    let mut report = ClampReport::new();

    let readings = [
        (engine_load, Input::EngineLoad),
        (coolant_temp, Input::CoolantTemp),
        (vibration, Input::Vibration),
        (degradation, Input::Degradation),
        (stress_index, Input::StressIndex),
    ];
    for (value, input) in readings {
        if !value.is_valid() {
            log_warn!("non-finite {} reading, scoring machine as failed", input.name());
            report.mark_non_finite(input);
        }
    }

    if report.has_non_finite() {
        report.mark_output_clamped();
        return PredictiveMaintenanceScore {
            health: 0.0,
            status: MaintenanceStatus::Critical,
            report,
        };
    }

    // Penalties are evaluated in f64 and the running health narrowed back to
    // f32 after every step. Deployed nodes do the same, so scores stay
    // bit-identical across the fleet.
    let mut health = PDM_FULL_HEALTH;
    health = (f64::from(health)
        - threshold_penalty(engine_load, ENGINE_LOAD_THRESHOLD_PCT, f64::from(ENGINE_LOAD_PENALTY))) as f32;
    health = (f64::from(health)
        - threshold_penalty(coolant_temp, COOLANT_TEMP_THRESHOLD_C, f64::from(COOLANT_TEMP_PENALTY))) as f32;
    health = (f64::from(health)
        - threshold_penalty(vibration, VIBRATION_THRESHOLD_MM_S, f64::from(VIBRATION_PENALTY))) as f32;
    health = (f64::from(health) - f64::from(degradation) * f64::from(DEGRADATION_PENALTY)) as f32;
    health = (f64::from(health)
        - threshold_penalty(stress_index, STRESS_INDEX_THRESHOLD, f64::from(STRESS_INDEX_PENALTY))) as f32;

    let (health, clamped) = clamp(health, 0.0, PDM_FULL_HEALTH);
    if clamped {
        report.mark_output_clamped();
    }

    let status = MaintenanceStatus::classify(health);
    log_trace!("pdm health={} status={}", health, status);

    PredictiveMaintenanceScore {
        health,
        status,
        report,
    }
}

/// Compute machine health, rejecting NaN and infinite readings
pub fn try_compute_predictive_maintenance(
    engine_load: f32,
    coolant_temp: f32,
    vibration: f32,
    degradation: f32,
    stress_index: f32,
) -> ScoringResult<PredictiveMaintenanceScore> {
    let readings = [
        (engine_load, Input::EngineLoad),
        (coolant_temp, Input::CoolantTemp),
        (vibration, Input::Vibration),
        (degradation, Input::Degradation),
        (stress_index, Input::StressIndex),
    ];

    if let Some((_, input)) = readings.iter().find(|(value, _)| !value.is_valid()) {
        return Err(ScoringError::NonFinite { input: input.name() });
    }

    Ok(compute_predictive_maintenance(
        engine_load,
        coolant_temp,
        vibration,
        degradation,
        stress_index,
    ))
}

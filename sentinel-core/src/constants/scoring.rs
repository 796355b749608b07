//! Risk Scoring Baselines, Spans and Weights
//!
//! Every number the scoring engine uses lives here. Each normalized risk is a
//! linear map from a "safe" baseline to a "max risk" ceiling:
//!
//! ```text
//! risk = clamp((value - BASELINE) / SPAN, 0, 1)        rising risk
//! risk = clamp((BASELINE - value) / SPAN, 0, 1)        falling risk (SpO2)
//! ```
//!
//! The values are shared by every deployed node so that indices stay
//! comparable across devices and with historical data. Changing a baseline or
//! span changes what a given index means; re-derive the clamp, not just the
//! weight.

// ===== HEART RATE =====

/// Resting heart rate at which heart-rate risk starts rising (bpm).
///
/// Typical adult resting rate.
pub const HEART_RATE_BASELINE_BPM: f32 = 72.0;

/// Heart-rate span from baseline to full risk (bpm).
///
/// Full risk is reached at 72 + 108 = 180 bpm, the usual age-predicted
/// maximum for a working-age adult.
pub const HEART_RATE_SPAN_BPM: f32 = 108.0;

// ===== BLOOD OXYGEN =====

/// Blood-oxygen saturation with no associated risk (%).
pub const SPO2_BASELINE_PCT: f32 = 98.0;

/// SpO2 drop from baseline to full risk (%).
///
/// Full risk at 88%, the common clinical hypoxemia threshold.
pub const SPO2_SPAN_PCT: f32 = 10.0;

// ===== NOISE =====

/// Ambient noise level where noise risk starts rising (dB).
pub const NOISE_BASELINE_DB: f32 = 60.0;

/// Noise span from baseline to full risk (dB). Full risk at 100 dB.
pub const NOISE_SPAN_DB: f32 = 40.0;

// ===== ENVIRONMENT =====

/// Ambient temperature where heat risk starts rising (°C).
pub const HEAT_BASELINE_C: f32 = 30.0;

/// Temperature span from baseline to full heat risk (°C). Full risk at 45°C.
pub const HEAT_SPAN_C: f32 = 15.0;

/// Gas concentration producing full gas risk (sensor units, 0 = clean air).
pub const GAS_FULL_SCALE: f32 = 100.0;

// ===== MACHINE PROXIMITY =====

/// Machine-stress index producing full proximity risk (0-100 scale).
pub const MACHINE_STRESS_FULL_SCALE: f32 = 100.0;

// ===== FUSION WEIGHTS =====
//
// Weights sum to 1.0, so the fused index already lies in [0, 1] for
// normalized inputs. The final clamp only guards rounding.

/// Weight of heart-rate risk in the combined index.
pub const WEIGHT_HEART_RATE: f32 = 0.2;

/// Weight of SpO2 risk in the combined index.
pub const WEIGHT_SPO2: f32 = 0.2;

/// Weight of noise risk in the combined index.
pub const WEIGHT_NOISE: f32 = 0.1;

/// Weight of environmental (heat + gas) risk in the combined index.
pub const WEIGHT_ENVIRONMENT: f32 = 0.2;

/// Weight of machine-proximity risk in the combined index.
pub const WEIGHT_MACHINE: f32 = 0.3;

// ===== DISPLAY AIDS =====

/// Scale from heart-rate risk to the fatigue sub-score (0-100).
pub const FATIGUE_SCALE: f32 = 100.0;

/// Share of heart-rate risk in the stress sub-score.
pub const STRESS_HEART_RATE_SCALE: f32 = 50.0;

/// Share of noise risk in the stress sub-score.
pub const STRESS_NOISE_SCALE: f32 = 50.0;

// ===== COMBINED INDEX BANDS =====

/// Lowest combined index classified as Warning (inclusive).
pub const CIS_WARNING_THRESHOLD: f32 = 0.40;

/// Lowest combined index classified as Critical (inclusive).
pub const CIS_CRITICAL_THRESHOLD: f32 = 0.75;

// ===== PREDICTIVE MAINTENANCE =====

/// Health of a machine with no recorded stressors.
pub const PDM_FULL_HEALTH: f32 = 100.0;

/// Engine load above which a penalty applies (%).
pub const ENGINE_LOAD_THRESHOLD_PCT: f32 = 80.0;

/// Health lost per % of engine load above threshold.
pub const ENGINE_LOAD_PENALTY: f32 = 1.5;

/// Coolant temperature above which a penalty applies (°C).
pub const COOLANT_TEMP_THRESHOLD_C: f32 = 85.0;

/// Health lost per °C of coolant temperature above threshold.
pub const COOLANT_TEMP_PENALTY: f32 = 2.0;

/// Vibration above which a penalty applies (mm/s).
pub const VIBRATION_THRESHOLD_MM_S: f32 = 6.0;

/// Health lost per mm/s of vibration above threshold.
pub const VIBRATION_PENALTY: f32 = 3.0;

/// Health lost per unit of cumulative wear. Always applied.
///
/// Degradation is a small cumulative fraction (wear units per operating
/// hour), so 0.01 costs 5 health points.
pub const DEGRADATION_PENALTY: f32 = 500.0;

/// Machine stress index above which a penalty applies (0-100 scale).
pub const STRESS_INDEX_THRESHOLD: f32 = 60.0;

/// Health lost per point of stress index above threshold.
pub const STRESS_INDEX_PENALTY: f32 = 0.5;

// ===== MAINTENANCE BANDS =====

/// Lowest health classified as Healthy (inclusive).
pub const PDM_HEALTHY_THRESHOLD: f32 = 80.0;

/// Lowest health classified as Degraded (inclusive).
pub const PDM_DEGRADED_THRESHOLD: f32 = 50.0;

/// Lowest health classified as At Risk (inclusive).
pub const PDM_AT_RISK_THRESHOLD: f32 = 20.0;

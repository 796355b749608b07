//! Combined Index Score (CIS)
//!
//! Fuses worker vitals, environment and machine proximity into one index in
//! `[0, 1]`:
//!
//! ```text
//! hr      = clamp((hr - 72) / 108)
//! spo2    = clamp((98 - spo2) / 10)
//! noise   = clamp((noise - 60) / 40)
//! env     = min(1, clamp((temp - 30) / 15) + clamp(gas / 100))
//! machine = clamp(machine_stress / 100)
//!
//! CIS = 0.2·hr + 0.2·spo2 + 0.1·noise + 0.2·env + 0.3·machine
//! ```
//!
//! Heat and gas compound rather than average: a hot room full of fumes is
//! worse than either alone, up to the cap. Humidity is accepted for interface
//! stability with the sensor sample but carries no weight.

use crate::{
    constants::scoring::*,
    errors::{ScoringError, ScoringResult},
    traits::{ScoreBand, Validatable},
};

use super::{
    report::{ClampReport, Input},
    utils::{clamp, rising_risk, falling_risk},
};

/// Categorical level of the combined index, ordered from safe to critical
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RiskLevel {
    /// Below 0.40
    Safe,
    /// 0.40 up to 0.75
    Warning,
    /// 0.75 and above
    Critical,
}

impl ScoreBand for RiskLevel {
    fn classify(index: f32) -> Self {
        if index >= CIS_CRITICAL_THRESHOLD {
            RiskLevel::Critical
        } else if index >= CIS_WARNING_THRESHOLD {
            RiskLevel::Warning
        } else {
            RiskLevel::Safe
        }
    }

    fn label(&self) -> &'static str {
        match self {
            RiskLevel::Safe => "Safe",
            RiskLevel::Warning => "Warning",
            RiskLevel::Critical => "Critical",
        }
    }

    fn is_alarming(&self) -> bool {
        !matches!(self, RiskLevel::Safe)
    }
}

impl core::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of one combined-index computation
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombinedIndexScore {
    /// Fused index in `[0, 1]`
    pub index: f32,
    /// Band of `index`
    pub level: RiskLevel,
    /// Dashboard fatigue bar in `[0, 100]`
    pub fatigue: f32,
    /// Dashboard stress bar in `[0, 100]`
    pub stress: f32,
    /// Clamping diagnostics, not part of the telemetry record
    #[cfg_attr(feature = "serde", serde(skip))]
    pub report: ClampReport,
}

/// One set of worker and environment readings
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SensorSample {
    /// Heart rate (bpm)
    pub heart_rate: f32,
    /// Ambient temperature (°C)
    pub temperature: f32,
    /// Relative humidity (%)
    pub humidity: f32,
    /// Gas concentration (sensor units, 0 = clean air)
    pub gas: f32,
    /// Stress index of the nearest machine (0-100)
    pub machine_stress: f32,
    /// Blood-oxygen saturation (%)
    pub spo2: f32,
    /// Ambient noise (dB)
    pub noise: f32,
}

impl SensorSample {
    /// Score this sample, clamping out-of-range readings
    pub fn score(&self) -> CombinedIndexScore {
        compute_combined_index(
            self.heart_rate,
            self.temperature,
            self.humidity,
            self.gas,
            self.machine_stress,
            self.spo2,
            self.noise,
        )
    }

    /// Score this sample, rejecting NaN and infinite readings
    pub fn try_score(&self) -> ScoringResult<CombinedIndexScore> {
        try_compute_combined_index(
            self.heart_rate,
            self.temperature,
            self.humidity,
            self.gas,
            self.machine_stress,
            self.spo2,
            self.noise,
        )
    }
}

/// Compute the combined index from raw readings
///
/// Never fails. Out-of-range readings are clamped onto their risk scale and
/// non-finite readings score full risk for their factor; both are recorded in
/// [`CombinedIndexScore::report`].
pub fn compute_combined_index(
    hr: f32,
    temp: f32,
    humidity: f32,
    gas: f32,
    machine_stress: f32,
    spo2: f32,
    noise: f32,
) -> CombinedIndexScore {
    let mut report = ClampReport::new();

    let hr_risk = rising_risk(hr, HEART_RATE_BASELINE_BPM, HEART_RATE_SPAN_BPM, Input::HeartRate, &mut report);
    let spo2_risk = falling_risk(spo2, SPO2_BASELINE_PCT, SPO2_SPAN_PCT, Input::Spo2, &mut report);
    let noise_risk = rising_risk(noise, NOISE_BASELINE_DB, NOISE_SPAN_DB, Input::Noise, &mut report);

    let heat_risk = rising_risk(temp, HEAT_BASELINE_C, HEAT_SPAN_C, Input::Temperature, &mut report);
    let gas_risk = rising_risk(gas, 0.0, GAS_FULL_SCALE, Input::Gas, &mut report);
    let env_risk = (heat_risk + gas_risk).min(1.0);

    let machine_risk = rising_risk(
        machine_stress,
        0.0,
        MACHINE_STRESS_FULL_SCALE,
        Input::MachineStress,
        &mut report,
    );

    if !humidity.is_valid() {
        report.mark_non_finite(Input::Humidity);
    }

    let raw = WEIGHT_HEART_RATE * hr_risk
        + WEIGHT_SPO2 * spo2_risk
        + WEIGHT_NOISE * noise_risk
        + WEIGHT_ENVIRONMENT * env_risk
        + WEIGHT_MACHINE * machine_risk;

    let (index, output_clamped) = clamp(raw, 0.0, 1.0);
    if output_clamped {
        report.mark_output_clamped();
    }

    let fatigue = hr_risk * FATIGUE_SCALE;
    let stress = hr_risk * STRESS_HEART_RATE_SCALE + noise_risk * STRESS_NOISE_SCALE;
    let level = RiskLevel::classify(index);

    log_trace!("cis={} level={} fatigue={} stress={}", index, level, fatigue, stress);

    CombinedIndexScore {
        index,
        level,
        fatigue,
        stress,
        report,
    }
}

/// Compute the combined index, rejecting NaN and infinite readings
pub fn try_compute_combined_index(
    hr: f32,
    temp: f32,
    humidity: f32,
    gas: f32,
    machine_stress: f32,
    spo2: f32,
    noise: f32,
) -> ScoringResult<CombinedIndexScore> {
    let readings = [
        (hr, Input::HeartRate),
        (temp, Input::Temperature),
        (humidity, Input::Humidity),
        (gas, Input::Gas),
        (machine_stress, Input::MachineStress),
        (spo2, Input::Spo2),
        (noise, Input::Noise),
    ];

    if let Some((_, input)) = readings.iter().find(|(value, _)| !value.is_valid()) {
        return Err(ScoringError::NonFinite { input: input.name() });
    }

    Ok(compute_combined_index(hr, temp, humidity, gas, machine_stress, spo2, noise))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn baseline() -> SensorSample {
        SensorSample {
            heart_rate: HEART_RATE_BASELINE_BPM,
            temperature: HEAT_BASELINE_C,
            humidity: 50.0,
            gas: 0.0,
            machine_stress: 0.0,
            spo2: SPO2_BASELINE_PCT,
            noise: NOISE_BASELINE_DB,
        }
    }

    #[test]
    fn baseline_scores_zero() {
        let score = baseline().score();

        assert_eq!(score.index, 0.0);
        assert_eq!(score.level, RiskLevel::Safe);
        assert_eq!(score.fatigue, 0.0);
        assert_eq!(score.stress, 0.0);
        assert!(score.report.is_clean());
    }

    #[test]
    fn level_boundaries_are_inclusive() {
        assert_eq!(RiskLevel::classify(0.40), RiskLevel::Warning);
        assert_eq!(RiskLevel::classify(0.39999), RiskLevel::Safe);
        assert_eq!(RiskLevel::classify(0.75), RiskLevel::Critical);
        assert_eq!(RiskLevel::classify(0.74999), RiskLevel::Warning);
        assert_eq!(RiskLevel::classify(0.0), RiskLevel::Safe);
        assert_eq!(RiskLevel::classify(1.0), RiskLevel::Critical);
    }

    #[test]
    fn machine_at_full_stress() {
        let sample = SensorSample { machine_stress: 100.0, ..baseline() };
        let score = sample.score();

        assert!((score.index - WEIGHT_MACHINE).abs() < 1e-6);
        assert_eq!(score.level, RiskLevel::Safe);
    }

    #[test]
    fn heat_and_gas_compound_up_to_cap() {
        // Half heat risk plus half gas risk saturates the environment factor
        let sample = SensorSample { temperature: 37.5, gas: 50.0, ..baseline() };
        assert!((sample.score().index - WEIGHT_ENVIRONMENT).abs() < 1e-6);

        // Both at full risk still caps at 1.0
        let sample = SensorSample { temperature: 60.0, gas: 300.0, ..baseline() };
        assert!((sample.score().index - WEIGHT_ENVIRONMENT).abs() < 1e-6);
    }

    #[test]
    fn sub_scores_follow_heart_rate_and_noise() {
        let sample = SensorSample { heart_rate: 180.0, noise: 80.0, ..baseline() };
        let score = sample.score();

        assert_eq!(score.fatigue, 100.0);
        assert_eq!(score.stress, 75.0);
    }

    #[test]
    fn everything_maxed_is_critical() {
        let sample = SensorSample {
            heart_rate: 220.0,
            temperature: 50.0,
            humidity: 95.0,
            gas: 150.0,
            machine_stress: 120.0,
            spo2: 80.0,
            noise: 120.0,
        };
        let score = sample.score();

        assert!(score.index <= 1.0);
        assert!(score.index > 0.99);
        assert_eq!(score.level, RiskLevel::Critical);
        assert!(score.report.was_clamped(Input::HeartRate));
        assert!(score.report.was_clamped(Input::MachineStress));
        assert!(!score.report.was_clamped(Input::Humidity));
    }

    #[test]
    fn below_baseline_is_clamped_to_zero() {
        let sample = SensorSample { heart_rate: 50.0, spo2: 100.0, noise: 30.0, ..baseline() };
        let score = sample.score();

        assert_eq!(score.index, 0.0);
        assert!(score.report.was_clamped(Input::HeartRate));
        assert!(score.report.was_clamped(Input::Spo2));
        assert!(score.report.was_clamped(Input::Noise));
    }

    #[test]
    fn nan_reading_scores_full_risk_for_its_factor() {
        let sample = SensorSample { spo2: f32::NAN, ..baseline() };
        let score = sample.score();

        assert!(score.index.is_finite());
        assert!((score.index - WEIGHT_SPO2).abs() < 1e-6);
        assert!(score.report.was_non_finite(Input::Spo2));
    }

    #[test]
    fn strict_variant_names_first_bad_input() {
        let sample = SensorSample { noise: f32::INFINITY, gas: f32::NAN, ..baseline() };
        assert_eq!(sample.try_score(), Err(ScoringError::NonFinite { input: "gas" }));
        assert!(baseline().try_score().is_ok());
    }

    #[test]
    fn labels_match_wire_format() {
        assert_eq!(RiskLevel::Safe.label(), "Safe");
        assert_eq!(RiskLevel::Warning.label(), "Warning");
        assert_eq!(RiskLevel::Critical.label(), "Critical");
        assert!(!RiskLevel::Safe.is_alarming());
        assert!(RiskLevel::Warning.is_alarming());
    }
}

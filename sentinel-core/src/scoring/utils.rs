//! Normalization helpers shared by the scorers
//!
//! All helpers are pure and allocation-free. They work in `f32` with the same
//! operation order as deployed firmware so results stay bit-identical.

use super::report::{ClampReport, Input};
use crate::traits::Validatable;

/// Clamp a value to `[min, max]`, reporting whether it moved
///
/// NaN is passed through unchanged; callers sanitize before clamping.
pub fn clamp(value: f32, min: f32, max: f32) -> (f32, bool) {
    if value < min {
        (min, true)
    } else if value > max {
        (max, true)
    } else {
        (value, false)
    }
}

/// Map `raw` (already offset and scaled) onto `[0, 1]` for `input`
///
/// Non-finite readings are treated as a sensor fault and score full risk.
pub fn unit_risk(raw: f32, reading: f32, input: Input, report: &mut ClampReport) -> f32 {
    if !reading.is_valid() {
        log_warn!("non-finite {} reading, scoring as full risk", input.name());
        report.mark_non_finite(input);
        return 1.0;
    }

    let (risk, clamped) = clamp(raw, 0.0, 1.0);
    if clamped {
        report.mark_clamped(input);
    }
    risk
}

/// Risk rising linearly from `baseline` to `baseline + span`
pub fn rising_risk(value: f32, baseline: f32, span: f32, input: Input, report: &mut ClampReport) -> f32 {
    unit_risk((value - baseline) / span, value, input, report)
}

/// Risk rising linearly as `value` falls from `baseline` to `baseline - span`
pub fn falling_risk(value: f32, baseline: f32, span: f32, input: Input, report: &mut ClampReport) -> f32 {
    unit_risk((baseline - value) / span, value, input, report)
}

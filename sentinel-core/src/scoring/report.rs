//! Clamp diagnostics
//!
//! Scoring silently clamps out-of-range readings. That is policy, not a bug,
//! but it hides sensor trouble: a heart-rate strap reporting 400 bpm scores the
//! same as one reporting 180. `ClampReport` records which inputs left their
//! linear range and which were not numbers at all, so the caller can surface it
//! in telemetry without changing the score.

/// Named scoring input
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Input {
    HeartRate = 0,
    Temperature = 1,
    Humidity = 2,
    Gas = 3,
    MachineStress = 4,
    Spo2 = 5,
    Noise = 6,
    EngineLoad = 7,
    CoolantTemp = 8,
    Vibration = 9,
    Degradation = 10,
    StressIndex = 11,
}

impl Input {
    /// Get the input name as used in telemetry field names
    pub const fn name(&self) -> &'static str {
        match self {
            Input::HeartRate => "heart_rate",
            Input::Temperature => "temperature",
            Input::Humidity => "humidity",
            Input::Gas => "gas",
            Input::MachineStress => "machine_stress",
            Input::Spo2 => "spo2",
            Input::Noise => "noise",
            Input::EngineLoad => "engine_load",
            Input::CoolantTemp => "coolant_temp",
            Input::Vibration => "vibration",
            Input::Degradation => "degradation",
            Input::StressIndex => "stress_index",
        }
    }

    const fn bit(self) -> u16 {
        1 << (self as u8)
    }
}

/// Which inputs were clamped or sanitized during one scoring call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClampReport {
    clamped: u16,
    non_finite: u16,
    output_clamped: bool,
}

impl ClampReport {
    /// Report with nothing flagged
    pub const fn new() -> Self {
        Self {
            clamped: 0,
            non_finite: 0,
            output_clamped: false,
        }
    }

    pub(crate) fn mark_clamped(&mut self, input: Input) {
        self.clamped |= input.bit();
    }

    pub(crate) fn mark_non_finite(&mut self, input: Input) {
        self.non_finite |= input.bit();
    }

    pub(crate) fn mark_output_clamped(&mut self) {
        self.output_clamped = true;
    }

    /// Input fell outside its linear range and was pinned to 0 or 1
    pub fn was_clamped(&self, input: Input) -> bool {
        self.clamped & input.bit() != 0
    }

    /// Input was NaN or infinite and was replaced by its worst case
    pub fn was_non_finite(&self, input: Input) -> bool {
        self.non_finite & input.bit() != 0
    }

    /// The final score had to be pinned to its range
    pub fn output_clamped(&self) -> bool {
        self.output_clamped
    }

    /// Any non-finite input was seen
    pub fn has_non_finite(&self) -> bool {
        self.non_finite != 0
    }

    /// Nothing was clamped or sanitized
    pub fn is_clean(&self) -> bool {
        self.clamped == 0 && self.non_finite == 0 && !self.output_clamped
    }

    /// Number of inputs that were clamped
    pub fn clamped_count(&self) -> u32 {
        self.clamped.count_ones()
    }
}

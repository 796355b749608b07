//! Core traits for scoring
//!
//! Keep them simple - embedded devices don't need complex abstractions.

/// Trait for values that can be placed on a risk scale
pub trait Validatable {
    /// Check if the value is a usable number (not NaN, infinite, etc)
    fn is_valid(&self) -> bool;
}

impl Validatable for f32 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}

/// Categorical band derived from a continuous score by fixed thresholds
///
/// Bands partition the score range without overlap; each band includes its
/// lower bound.
pub trait ScoreBand: Sized + Copy {
    /// Classify a score into its band
    fn classify(score: f32) -> Self;

    /// Label used on the wire and on dashboards
    fn label(&self) -> &'static str;

    /// Whether this band should raise an alert upstream
    fn is_alarming(&self) -> bool;
}

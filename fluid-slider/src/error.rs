//! Errors reported when host-supplied slider configuration is invalid.

use thiserror::Error;

/// Configuration errors detected at the host boundary.
///
/// Internal invariants (e.g. a normalized position escaping `[0, 1]`) are
/// not represented here; they are checked with debug assertions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SliderError {
    /// `min` is greater than `max`.
    #[error("slider range is inverted: min {min} > max {max}")]
    InvertedRange {
        /// Lower bound supplied by the host.
        min: f64,
        /// Upper bound supplied by the host.
        max: f64,
    },
    /// The current value lies outside `[min, max]`.
    #[error("slider value {value} is outside [{min}, {max}]")]
    ValueOutOfRange {
        /// Offending value.
        value: f64,
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
    },
    /// A numeric field is NaN or infinite.
    #[error("slider {field} must be finite, got {value}")]
    NonFinite {
        /// Name of the offending field.
        field: &'static str,
        /// Offending value.
        value: f64,
    },
    /// The thumb diameter is zero, negative or non-finite.
    #[error("thumb diameter must be positive, got {0}")]
    InvalidThumbDiameter(f32),
}

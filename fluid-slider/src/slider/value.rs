use crate::SliderError;

/// A validated `[min, max]` interval and the mapping between it and the
/// normalized drag position `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    min: f64,
    max: f64,
}

impl ValueRange {
    /// Creates a range, rejecting non-finite bounds and `min > max`.
    pub fn new(min: f64, max: f64) -> Result<Self, SliderError> {
        if !min.is_finite() {
            return Err(SliderError::NonFinite {
                field: "min",
                value: min,
            });
        }
        if !max.is_finite() {
            return Err(SliderError::NonFinite {
                field: "max",
                value: max,
            });
        }
        if min > max {
            return Err(SliderError::InvertedRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Lower bound.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Whether the range has zero width.
    pub fn is_degenerate(&self) -> bool {
        self.max <= self.min
    }

    /// Whether `value` lies inside the closed interval.
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Maps a normalized position in `[0, 1]` to the external range.
    ///
    /// The ends map exactly to `min` and `max`, and rounding never carries a
    /// result outside `[min, max]`.
    pub fn to_external(&self, normalized: f64) -> f64 {
        debug_assert!(
            (0.0..=1.0).contains(&normalized),
            "normalized position {normalized} outside [0, 1]"
        );
        if normalized >= 1.0 {
            return self.max;
        }
        (normalized * (self.max - self.min) + self.min).clamp(self.min, self.max)
    }

    /// Maps an external value to a normalized position.
    ///
    /// A zero-width range always maps to `0.0`.
    pub fn to_normalized(&self, value: f64) -> f64 {
        debug_assert!(
            self.contains(value),
            "value {value} outside [{}, {}]",
            self.min,
            self.max
        );
        if self.max > self.min {
            (value - self.min) / (self.max - self.min)
        } else {
            0.0
        }
    }
}

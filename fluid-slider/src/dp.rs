//! # Density-Independent Pixels (Dp)
//!
//! All slider geometry is expressed in logical, density-independent units.
//! The host maps them to physical pixels when it replays a
//! [`Scene`](crate::scene::Scene) onto its surface.
//!
//! ```
//! use fluid_slider::Dp;
//!
//! let padding = Dp(8.0);
//! let thumb = Dp(60.0);
//! assert_eq!((thumb + padding * 2.0).0, 76.0);
//! ```

use std::ops::{Add, Mul, Neg, Sub};

/// Density-independent length used for every slider measurement.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct Dp(pub f32);

impl Dp {
    /// A zero-length value.
    pub const ZERO: Dp = Dp(0.0);

    /// Linearly interpolates between two lengths. `t` is not clamped.
    pub fn lerp(a: Dp, b: Dp, t: f32) -> Dp {
        Dp(a.0 + (b.0 - a.0) * t)
    }

    /// Returns whether the value is finite and strictly positive.
    pub fn is_positive(self) -> bool {
        self.0.is_finite() && self.0 > 0.0
    }
}

impl Add for Dp {
    type Output = Dp;

    fn add(self, rhs: Self) -> Self::Output {
        Dp(self.0 + rhs.0)
    }
}

impl Sub for Dp {
    type Output = Dp;

    fn sub(self, rhs: Self) -> Self::Output {
        Dp(self.0 - rhs.0)
    }
}

impl Mul<f32> for Dp {
    type Output = Dp;

    fn mul(self, rhs: f32) -> Self::Output {
        Dp(self.0 * rhs)
    }
}

impl Neg for Dp {
    type Output = Dp;

    fn neg(self) -> Self::Output {
        Dp(-self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dp_arithmetic() {
        let a = Dp(10.0);
        let b = Dp(4.0);

        assert_eq!(a + b, Dp(14.0));
        assert_eq!(a - b, Dp(6.0));
        assert_eq!(a * 0.5, Dp(5.0));
        assert_eq!(-a, Dp(-10.0));
    }

    #[test]
    fn test_dp_lerp() {
        assert_eq!(Dp::lerp(Dp(8.0), Dp(224.0), 0.0), Dp(8.0));
        assert_eq!(Dp::lerp(Dp(8.0), Dp(224.0), 1.0), Dp(224.0));
        assert_eq!(Dp::lerp(Dp(8.0), Dp(224.0), 0.5), Dp(116.0));
        // Reversed endpoints walk the other way.
        assert_eq!(Dp::lerp(Dp(224.0), Dp(8.0), 0.25), Dp(170.0));
    }

    #[test]
    fn test_dp_is_positive() {
        assert!(Dp(1.0).is_positive());
        assert!(!Dp(0.0).is_positive());
        assert!(!Dp(-3.0).is_positive());
        assert!(!Dp(f32::NAN).is_positive());
        assert!(!Dp(f32::INFINITY).is_positive());
    }
}

use crate::{DimensionValue, Dp, Rect, RelativeRect, Size};

use super::{DEFAULT_WIDTH, POP_LIFT, THUMB_PADDING};

/// Resolves the slider width from the host constraint.
///
/// Unbounded, non-finite or non-positive widths fall back to
/// [`DEFAULT_WIDTH`].
pub(super) fn resolve_width(constraint: DimensionValue) -> Dp {
    match constraint.max_width() {
        Some(width) if width.is_positive() => width,
        _ => DEFAULT_WIDTH,
    }
}

/// Thumb geometry for one slider width, thumb diameter and value.
///
/// The thumb box is positioned with insets relative to the track, which is
/// `width` wide and `thumb_diameter` tall.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderLayout {
    /// Track width.
    pub width: Dp,
    /// Track height; equal to the thumb diameter.
    pub height: Dp,
    /// Diameter of the outer thumb circle.
    pub thumb_diameter: Dp,
    /// Thumb box when the slider is at rest.
    pub resting: RelativeRect,
    /// Thumb box when the slider is fully popped.
    pub popped: RelativeRect,
}

impl SliderLayout {
    /// Computes the resting and popped thumb boxes.
    ///
    /// `factor` is the normalized thumb position and is clamped to `[0, 1]`.
    pub fn compute(width: Dp, thumb_diameter: Dp, factor: f32) -> Self {
        let factor = factor.clamp(0.0, 1.0);
        let remaining = width - thumb_diameter - THUMB_PADDING * 2.0;

        let left = Dp::lerp(THUMB_PADDING, remaining, factor);
        let right = Dp::lerp(remaining, THUMB_PADDING, factor);
        let lift = thumb_diameter + POP_LIFT;

        Self {
            width,
            height: thumb_diameter,
            thumb_diameter,
            resting: RelativeRect::from_ltrb(left, Dp::ZERO, right, Dp::ZERO),
            popped: RelativeRect::from_ltrb(left, -lift, right, lift),
        }
    }

    /// Size of the track.
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Width available to the thumb's travel, `width - diameter - 2 * padding`.
    pub fn remaining_width(&self) -> Dp {
        self.width - self.thumb_diameter - THUMB_PADDING * 2.0
    }

    /// Thumb box insets at the given eased animation progress.
    pub fn thumb_rect(&self, progress: f32) -> RelativeRect {
        RelativeRect::lerp(self.resting, self.popped, progress)
    }

    /// Thumb box in track coordinates at the given eased animation progress.
    pub fn thumb_bounds(&self, progress: f32) -> Rect {
        self.thumb_rect(progress).to_rect(self.size())
    }
}

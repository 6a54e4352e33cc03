//! Geometry primitives shared by layout, splash and render code.
//!
//! Everything is in logical units ([`Dp`]) with the origin at the top-left
//! corner of the slider track and `y` growing downwards.

use crate::Dp;

/// Defines how the available width of the slider is expressed by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DimensionValue {
    /// An exact width.
    Fixed(Dp),
    /// Size to content, optionally bounded.
    Wrap {
        /// Lower bound.
        min: Option<Dp>,
        /// Upper bound. `None` means unbounded.
        max: Option<Dp>,
    },
    /// Fill the available space, optionally bounded.
    Fill {
        /// Lower bound.
        min: Option<Dp>,
        /// Upper bound. `None` means unbounded.
        max: Option<Dp>,
    },
}

impl DimensionValue {
    /// Fill with no bounds, i.e. an unbounded width.
    pub const UNBOUNDED: DimensionValue = DimensionValue::Fill {
        min: None,
        max: None,
    };

    /// Returns the largest width this constraint allows, if bounded.
    pub fn max_width(&self) -> Option<Dp> {
        match *self {
            DimensionValue::Fixed(width) => Some(width),
            DimensionValue::Wrap { max, .. } | DimensionValue::Fill { max, .. } => max,
        }
    }
}

impl Default for DimensionValue {
    fn default() -> Self {
        Self::UNBOUNDED
    }
}

/// A width/height pair.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Size {
    /// Horizontal extent.
    pub width: Dp,
    /// Vertical extent.
    pub height: Dp,
}

impl Size {
    /// Creates a new size.
    pub const fn new(width: Dp, height: Dp) -> Self {
        Self { width, height }
    }
}

/// A point in the slider's coordinate space.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Position {
    /// Horizontal coordinate.
    pub x: Dp,
    /// Vertical coordinate.
    pub y: Dp,
}

impl Position {
    /// The origin.
    pub const ZERO: Position = Position {
        x: Dp::ZERO,
        y: Dp::ZERO,
    };

    /// Creates a new position.
    pub const fn new(x: Dp, y: Dp) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Top-left corner.
    pub origin: Position,
    /// Extent.
    pub size: Size,
}

impl Rect {
    /// Creates a rectangle from its left, top, width and height.
    pub fn from_ltwh(left: Dp, top: Dp, width: Dp, height: Dp) -> Self {
        Self {
            origin: Position::new(left, top),
            size: Size::new(width, height),
        }
    }

    /// Left edge.
    pub fn left(&self) -> Dp {
        self.origin.x
    }

    /// Top edge.
    pub fn top(&self) -> Dp {
        self.origin.y
    }

    /// Right edge.
    pub fn right(&self) -> Dp {
        self.origin.x + self.size.width
    }

    /// Bottom edge.
    pub fn bottom(&self) -> Dp {
        self.origin.y + self.size.height
    }

    /// Center point.
    pub fn center(&self) -> Position {
        Position::new(
            self.origin.x + self.size.width * 0.5,
            self.origin.y + self.size.height * 0.5,
        )
    }
}

/// A rectangle described by its insets from the edges of a container.
///
/// Negative insets place an edge outside the container, which is how the
/// popped thumb rises above the track.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct RelativeRect {
    /// Distance from the container's left edge to the rectangle's left edge.
    pub left: Dp,
    /// Distance from the container's top edge to the rectangle's top edge.
    pub top: Dp,
    /// Distance from the rectangle's right edge to the container's right edge.
    pub right: Dp,
    /// Distance from the rectangle's bottom edge to the container's bottom edge.
    pub bottom: Dp,
}

impl RelativeRect {
    /// Creates a relative rectangle from its four insets.
    pub const fn from_ltrb(left: Dp, top: Dp, right: Dp, bottom: Dp) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Interpolates every inset independently.
    pub fn lerp(a: RelativeRect, b: RelativeRect, t: f32) -> RelativeRect {
        RelativeRect {
            left: Dp::lerp(a.left, b.left, t),
            top: Dp::lerp(a.top, b.top, t),
            right: Dp::lerp(a.right, b.right, t),
            bottom: Dp::lerp(a.bottom, b.bottom, t),
        }
    }

    /// Resolves the insets against a container of the given size.
    pub fn to_rect(self, container: Size) -> Rect {
        Rect::from_ltwh(
            self.left,
            self.top,
            container.width - self.left - self.right,
            container.height - self.top - self.bottom,
        )
    }
}

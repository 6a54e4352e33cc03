//! Themed defaults for colors and text styles.
//!
//! The host supplies a [`SliderTheme`]; anything the slider args leave unset
//! falls back to it.

use crate::{Color, Dp};

/// Font weight hint passed through to the host's text renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontWeight {
    /// Regular weight.
    #[default]
    Normal,
    /// Bold weight.
    Bold,
}

/// Describes how a piece of text should be drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Font size.
    pub font_size: Dp,
    /// Text color.
    pub color: Color,
    /// Font weight.
    pub weight: FontWeight,
}

impl TextStyle {
    /// Creates a regular-weight style.
    pub const fn new(font_size: Dp, color: Color) -> Self {
        Self {
            font_size,
            color,
            weight: FontWeight::Normal,
        }
    }

    /// Returns the style with a bold weight.
    pub const fn bold(self) -> Self {
        Self {
            weight: FontWeight::Bold,
            ..self
        }
    }
}

/// Host-provided palette and typography for sliders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderTheme {
    /// Track color for enabled sliders.
    pub primary: Color,
    /// Color of the inner thumb circle for enabled sliders.
    pub thumb: Color,
    /// Track color for disabled sliders.
    pub disabled_track: Color,
    /// Inner thumb color for disabled sliders.
    pub disabled_thumb: Color,
    /// Style of the min/max labels.
    pub label_text: TextStyle,
    /// Style of the value text inside the thumb.
    pub value_text: TextStyle,
}

impl Default for SliderTheme {
    fn default() -> Self {
        Self {
            primary: Color::from_rgb_u8(0x21, 0x96, 0xF3),
            thumb: Color::WHITE,
            disabled_track: Color::GREY,
            disabled_thumb: Color::from_rgb_u8(0xE0, 0xE0, 0xE0),
            label_text: TextStyle::new(Dp(20.0), Color::WHITE).bold(),
            value_text: TextStyle::new(Dp(20.0), Color::BLACK).bold(),
        }
    }
}

//! Retained draw output of a slider frame.
//!
//! [`FluidSlider::render`](crate::FluidSlider::render) produces a [`Scene`]:
//! an ordered, back-to-front list of [`DrawCommand`]s. Hosts replay it onto
//! their own surface through the [`Canvas`] trait.

use std::sync::Arc;

use smallvec::SmallVec;

use crate::{Color, Dp, Position, Rect, TextStyle};

/// Vector path type carried by [`DrawCommand::Path`].
pub use lyon_path::Path as LyonPath;

/// Horizontal alignment of text inside its bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    /// Align to the left edge.
    Start,
    /// Center horizontally.
    Center,
    /// Align to the right edge.
    End,
}

/// A single drawing primitive.
#[derive(Debug, Clone)]
pub enum DrawCommand {
    /// A filled rectangle with uniformly rounded corners.
    RoundedRect {
        /// Bounds.
        rect: Rect,
        /// Corner radius.
        radius: Dp,
        /// Fill color.
        color: Color,
    },
    /// A filled circle.
    Circle {
        /// Center point.
        center: Position,
        /// Radius.
        radius: Dp,
        /// Fill color.
        color: Color,
    },
    /// A filled vector path expressed in local coordinates.
    Path {
        /// Path geometry, shared with the splash cache.
        path: Arc<LyonPath>,
        /// Translation applied to every point of `path`.
        origin: Position,
        /// Fill color.
        color: Color,
    },
    /// A single line of text, vertically centered in `bounds`.
    Text {
        /// Content.
        text: String,
        /// Layout box.
        bounds: Rect,
        /// Horizontal alignment inside `bounds`.
        align: TextAlign,
        /// Typography.
        style: TextStyle,
    },
}

/// Drawing surface supplied by the host.
pub trait Canvas {
    /// Fills a rounded rectangle.
    fn draw_rounded_rect(&mut self, rect: Rect, radius: Dp, color: Color);
    /// Fills a circle.
    fn draw_circle(&mut self, center: Position, radius: Dp, color: Color);
    /// Fills `path` translated by `origin`.
    fn fill_path(&mut self, path: &LyonPath, origin: Position, color: Color);
    /// Draws a line of text.
    fn draw_text(&mut self, text: &str, bounds: Rect, align: TextAlign, style: &TextStyle);
}

/// Ordered draw commands for one frame.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    commands: SmallVec<[DrawCommand; 8]>,
}

impl Scene {
    /// Creates an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a command on top of everything pushed before it.
    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    /// Appends several commands in order.
    pub fn extend(&mut self, commands: impl IntoIterator<Item = DrawCommand>) {
        self.commands.extend(commands);
    }

    /// Commands in back-to-front order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether the scene has no commands.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Replays every command onto `canvas`, back to front.
    pub fn replay<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        for command in &self.commands {
            match command {
                DrawCommand::RoundedRect {
                    rect,
                    radius,
                    color,
                } => canvas.draw_rounded_rect(*rect, *radius, *color),
                DrawCommand::Circle {
                    center,
                    radius,
                    color,
                } => canvas.draw_circle(*center, *radius, *color),
                DrawCommand::Path {
                    path,
                    origin,
                    color,
                } => canvas.fill_path(path, *origin, *color),
                DrawCommand::Text {
                    text,
                    bounds,
                    align,
                    style,
                } => canvas.draw_text(text, *bounds, *align, style),
            }
        }
    }
}

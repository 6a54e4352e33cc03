use std::sync::Arc;

use lyon_geom::point;
use lyon_path::Path as LyonPath;
use tracing::trace;

use crate::{Color, Dp, Size};

/// Animation progress from which the splash is drawn.
pub const SPLASH_THRESHOLD: f32 = 0.5;

/// How far the splash reaches below the thumb box.
const SPLASH_OVERHANG: f32 = 6.0;

/// Builds the droplet shape joining the thumb box to the track below it.
///
/// Coordinates are local to the thumb box. The shape starts below the
/// bottom-left corner, curves in to the circle's left edge at mid height,
/// runs straight across and mirrors back out below the bottom-right corner.
pub fn splash_path(size: Size, padding: Dp) -> LyonPath {
    let width = size.width.0;
    let height = size.height.0;
    let center_y = height / 2.0;
    let inset = padding.0 / 2.0;

    let mut builder = LyonPath::builder().with_svg();
    builder.move_to(point(0.0, height + SPLASH_OVERHANG));
    builder.quadratic_bezier_to(point(inset, height), point(inset, center_y));
    builder.line_to(point(width - inset, center_y));
    builder.quadratic_bezier_to(
        point(width - inset, height),
        point(width, height + SPLASH_OVERHANG),
    );
    builder.close();
    builder.build()
}

/// Inputs that decide whether the splash must be rebuilt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplashKey {
    /// Linear animation progress.
    pub progress: f32,
    /// Fill color, the track's current color.
    pub color: Color,
    /// Horizontal slack between the thumb box and the thumb circle.
    pub padding: Dp,
}

impl SplashKey {
    /// Whether the splash is drawn at this progress.
    pub fn is_visible(&self) -> bool {
        self.progress >= SPLASH_THRESHOLD
    }
}

/// Memoizing splash painter.
///
/// The path is rebuilt only when the [`SplashKey`] or the thumb box size
/// differs from the previous paint.
#[derive(Debug, Default)]
pub struct SplashPainter {
    cached: Option<(SplashKey, Size, Arc<LyonPath>)>,
    rebuilds: usize,
}

impl SplashPainter {
    /// Creates an empty painter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether moving from `old` to `new` requires rebuilding the path.
    pub fn should_repaint(old: &SplashKey, new: &SplashKey) -> bool {
        old.progress != new.progress || old.color != new.color || old.padding != new.padding
    }

    /// Returns the splash for this frame, or `None` below the threshold.
    pub fn paint(&mut self, key: SplashKey, size: Size) -> Option<Arc<LyonPath>> {
        if !key.is_visible() {
            return None;
        }

        if let Some((old_key, old_size, path)) = &self.cached
            && *old_size == size
            && !Self::should_repaint(old_key, &key)
        {
            trace!(progress = key.progress, "splash cache hit");
            return Some(Arc::clone(path));
        }

        let path = Arc::new(splash_path(size, key.padding));
        self.rebuilds += 1;
        trace!(progress = key.progress, rebuilds = self.rebuilds, "splash rebuilt");
        self.cached = Some((key, size, Arc::clone(&path)));
        Some(path)
    }

    /// Number of times the path has been rebuilt.
    pub fn rebuild_count(&self) -> usize {
        self.rebuilds
    }
}

//! A draggable slider whose thumb pops out of the track on press and stays
//! joined to it by a fluid splash while dragging.
//!
//! ## Usage
//!
//! The slider is controlled: the host owns the value, passes it in through
//! [`FluidSliderArgs`] and stores whatever the change callback reports.
//!
//! ```
//! use std::time::Instant;
//!
//! use fluid_slider::{DimensionValue, Dp, DragEvent, FluidSlider, FluidSliderArgs, Position};
//!
//! let args = FluidSliderArgs::default()
//!     .min(0.0)
//!     .max(100.0)
//!     .value(50.0)
//!     .on_change(|value| println!("value: {value}"));
//! let mut slider = FluidSlider::new(args)?;
//! slider.measure(DimensionValue::Fixed(Dp(300.0)));
//!
//! slider.handle_event(DragEvent::Down);
//! slider.handle_event(DragEvent::Start {
//!     local_position: Position::new(Dp(150.0), Dp(30.0)),
//! });
//! slider.handle_event(DragEvent::Update { primary_delta: Dp(30.0) });
//! slider.tick(Instant::now());
//! let scene = slider.render();
//! assert!(!scene.is_empty());
//! # Ok::<(), fluid_slider::SliderError>(())
//! ```
use std::time::{Duration, Instant};

use derive_setters::Setters;
use parking_lot::Mutex;
use tracing::{debug, warn};

use crate::{
    AnimationController, Callback, CallbackWith, Color, Curve, DimensionValue, DrawCommand, Dp,
    Rect, Scene, SliderError, SliderTheme, Size, TextStyle,
};

pub use interaction::{
    DragEvent, DragSession, GestureContext, GestureController, GestureEffect, GestureEffects,
    GesturePhase,
};
pub use layout::SliderLayout;
pub use render::format_value;
pub use splash::{SPLASH_THRESHOLD, SplashKey, SplashPainter, splash_path};
pub use value::ValueRange;

mod interaction;
mod layout;
mod render;
mod splash;
mod value;

/// Horizontal gap between the track edges and the thumb box.
pub const THUMB_PADDING: Dp = Dp(8.0);
/// Extra lift of the popped thumb above the track, on top of its diameter.
pub const POP_LIFT: Dp = Dp(5.0);
/// Width used when the host offers an unbounded width.
pub const DEFAULT_WIDTH: Dp = Dp(200.0);
/// Thumb diameter used when the args do not override it.
pub const DEFAULT_THUMB_DIAMETER: Dp = Dp(60.0);
/// Length of the pop animation.
pub const ANIMATION_DURATION: Duration = Duration::from_millis(400);

const LABEL_INSET: Dp = Dp(16.0);
const TRACK_CORNER_RADIUS: Dp = Dp(10.0);
const INNER_THUMB_SCALE: f32 = 0.75;

/// Content shown at one end of the track.
#[derive(Clone, PartialEq, Debug)]
pub enum SliderLabel {
    /// Plain text drawn with the label text style.
    Text(String),
    /// Arbitrary draw commands produced for the label bounds.
    Custom(CallbackWith<Rect, Vec<DrawCommand>>),
}

impl SliderLabel {
    /// Builds a custom label from a closure receiving the label bounds.
    pub fn custom<F>(content: F) -> Self
    where
        F: Fn(Rect) -> Vec<DrawCommand> + Send + Sync + 'static,
    {
        Self::Custom(CallbackWith::new(content))
    }
}

impl From<&str> for SliderLabel {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for SliderLabel {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// Arguments for the fluid slider.
///
/// The slider is enabled exactly when [`on_change`](Self::on_change) is set.
#[derive(PartialEq, Clone, Debug, Setters)]
pub struct FluidSliderArgs {
    /// Current value, within `[min, max]`.
    pub value: f64,
    /// Lower bound of the range.
    pub min: f64,
    /// Upper bound of the range.
    pub max: f64,
    /// Called with every distinct value produced while dragging.
    #[setters(skip)]
    pub on_change: Option<CallbackWith<f64>>,
    /// Called once per drag with the value before the drag.
    #[setters(skip)]
    pub on_change_start: Option<CallbackWith<f64>>,
    /// Called once per drag, on end or cancel, with the final value.
    #[setters(skip)]
    pub on_change_end: Option<CallbackWith<f64>>,
    /// Diameter of the outer thumb circle; also the track height.
    pub thumb_diameter: Dp,
    /// Show one decimal place in the value and default labels.
    pub show_decimal_value: bool,
    /// Custom value-to-text mapping for the thumb.
    #[setters(skip)]
    pub map_value_to_string: Option<CallbackWith<f64, String>>,
    /// Track color override.
    #[setters(strip_option)]
    pub slider_color: Option<Color>,
    /// Inner thumb color override.
    #[setters(strip_option)]
    pub thumb_color: Option<Color>,
    /// Text style override for the min/max labels.
    #[setters(strip_option)]
    pub label_text_style: Option<TextStyle>,
    /// Text style override for the value text.
    #[setters(strip_option)]
    pub value_text_style: Option<TextStyle>,
    /// Content replacing the default min label.
    #[setters(strip_option, into)]
    pub start: Option<SliderLabel>,
    /// Content replacing the default max label.
    #[setters(strip_option, into)]
    pub end: Option<SliderLabel>,
}

impl Default for FluidSliderArgs {
    fn default() -> Self {
        Self {
            value: 0.0,
            min: 0.0,
            max: 1.0,
            on_change: None,
            on_change_start: None,
            on_change_end: None,
            thumb_diameter: DEFAULT_THUMB_DIAMETER,
            show_decimal_value: false,
            map_value_to_string: None,
            slider_color: None,
            thumb_color: None,
            label_text_style: None,
            value_text_style: None,
            start: None,
            end: None,
        }
    }
}

impl FluidSliderArgs {
    /// Sets the change handler, enabling the slider.
    pub fn on_change<F>(mut self, on_change: F) -> Self
    where
        F: Fn(f64) + Send + Sync + 'static,
    {
        self.on_change = Some(CallbackWith::new(on_change));
        self
    }

    /// Sets the change handler using a shared callback.
    pub fn on_change_shared(mut self, on_change: impl Into<CallbackWith<f64>>) -> Self {
        self.on_change = Some(on_change.into());
        self
    }

    /// Sets the drag-start handler.
    pub fn on_change_start<F>(mut self, on_change_start: F) -> Self
    where
        F: Fn(f64) + Send + Sync + 'static,
    {
        self.on_change_start = Some(CallbackWith::new(on_change_start));
        self
    }

    /// Sets the drag-end handler.
    pub fn on_change_end<F>(mut self, on_change_end: F) -> Self
    where
        F: Fn(f64) + Send + Sync + 'static,
    {
        self.on_change_end = Some(CallbackWith::new(on_change_end));
        self
    }

    /// Sets a custom formatter for the thumb text.
    pub fn map_value_to_string<F>(mut self, map: F) -> Self
    where
        F: Fn(f64) -> String + Send + Sync + 'static,
    {
        self.map_value_to_string = Some(CallbackWith::new(map));
        self
    }

    /// Whether the slider reacts to input.
    pub fn is_enabled(&self) -> bool {
        self.on_change.is_some()
    }

    /// Checks the range, the value and the thumb diameter.
    pub fn validate(&self) -> Result<ValueRange, SliderError> {
        let range = ValueRange::new(self.min, self.max)?;
        if !self.value.is_finite() {
            return Err(SliderError::NonFinite {
                field: "value",
                value: self.value,
            });
        }
        if !range.contains(self.value) {
            return Err(SliderError::ValueOutOfRange {
                value: self.value,
                min: self.min,
                max: self.max,
            });
        }
        if !self.thumb_diameter.is_positive() {
            return Err(SliderError::InvalidThumbDiameter(self.thumb_diameter.0));
        }
        Ok(range)
    }
}

/// Colors and text styles resolved for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderPalette {
    /// Track, outer thumb circle and splash color.
    pub track: Color,
    /// Inner thumb circle color.
    pub thumb: Color,
    /// Min/max label style.
    pub label_text: TextStyle,
    /// Value text style.
    pub value_text: TextStyle,
}

impl SliderPalette {
    /// Resolves overrides against the theme. Disabled sliders always use the
    /// theme's disabled colors.
    pub fn resolve(args: &FluidSliderArgs, theme: &SliderTheme) -> Self {
        let (track, thumb) = if args.is_enabled() {
            (
                args.slider_color.unwrap_or(theme.primary),
                args.thumb_color.unwrap_or(theme.thumb),
            )
        } else {
            (theme.disabled_track, theme.disabled_thumb)
        };
        Self {
            track,
            thumb,
            label_text: args.label_text_style.unwrap_or(theme.label_text),
            value_text: args.value_text_style.unwrap_or(theme.value_text),
        }
    }
}

/// Stateful fluid slider instance.
///
/// Owns the drag session, the pop animation and the splash cache. Create one
/// per mounted slider and call [`dispose`](Self::dispose) (or drop it) on
/// unmount.
pub struct FluidSlider {
    args: FluidSliderArgs,
    range: ValueRange,
    theme: SliderTheme,
    width: Dp,
    gesture: GestureController,
    animation: AnimationController,
    splash: Mutex<SplashPainter>,
    listeners: Vec<Callback>,
    disposed: bool,
}

impl FluidSlider {
    /// Mounts a slider with the default theme.
    pub fn new(args: FluidSliderArgs) -> Result<Self, SliderError> {
        Self::with_theme(args, SliderTheme::default())
    }

    /// Mounts a slider with a host theme.
    pub fn with_theme(args: FluidSliderArgs, theme: SliderTheme) -> Result<Self, SliderError> {
        let range = args.validate()?;
        debug!(min = range.min(), max = range.max(), value = args.value, "slider mounted");
        Ok(Self {
            args,
            range,
            theme,
            width: DEFAULT_WIDTH,
            gesture: GestureController::new(),
            animation: AnimationController::new(ANIMATION_DURATION, Curve::BounceOut, Curve::Linear),
            splash: Mutex::new(SplashPainter::new()),
            listeners: Vec::new(),
            disposed: false,
        })
    }

    /// Current arguments.
    pub fn args(&self) -> &FluidSliderArgs {
        &self.args
    }

    /// Replaces the arguments for the next frame.
    ///
    /// Disabling the slider mid-gesture drops the session and returns the
    /// thumb to rest without invoking callbacks.
    pub fn set_args(&mut self, args: FluidSliderArgs) -> Result<(), SliderError> {
        let range = args.validate()?;
        if self.args == args {
            return Ok(());
        }
        if self.args.is_enabled() && !args.is_enabled() && self.gesture.is_active() {
            debug!("slider disabled during a gesture, dropping session");
            self.gesture.reset();
            self.animation.reverse();
        }
        self.gesture.sync_value(args.value);
        self.args = args;
        self.range = range;
        self.notify();
        Ok(())
    }

    /// Replaces the theme.
    pub fn set_theme(&mut self, theme: SliderTheme) {
        if self.theme != theme {
            self.theme = theme;
            self.notify();
        }
    }

    /// Validated range of the current arguments.
    pub fn range(&self) -> ValueRange {
        self.range
    }

    /// Whether a change callback is present.
    pub fn is_enabled(&self) -> bool {
        self.args.is_enabled()
    }

    /// Gesture phase.
    pub fn phase(&self) -> GesturePhase {
        self.gesture.phase()
    }

    /// Running normalized drag position, `0.0` when not dragging.
    pub fn running_position(&self) -> f64 {
        self.gesture.running_position()
    }

    /// Linear progress of the pop animation.
    pub fn animation_progress(&self) -> f32 {
        self.animation.raw_value()
    }

    /// Eased progress of the pop animation.
    pub fn eased_progress(&self) -> f32 {
        self.animation.value()
    }

    /// Whether the pop animation is still running.
    pub fn is_animating(&self) -> bool {
        self.animation.is_animating()
    }

    /// Whether the splash is currently drawn.
    pub fn is_popped(&self) -> bool {
        self.animation.raw_value() >= SPLASH_THRESHOLD
    }

    /// Number of times the splash path has been rebuilt.
    pub fn splash_rebuild_count(&self) -> usize {
        self.splash.lock().rebuild_count()
    }

    /// Registers a listener called whenever the slider needs a repaint.
    pub fn add_listener(&mut self, listener: impl Into<Callback>) {
        let listener = listener.into();
        self.animation.add_listener(listener.clone());
        self.listeners.push(listener);
    }

    /// Removes a listener registered with [`add_listener`](Self::add_listener).
    pub fn remove_listener(&mut self, listener: &Callback) {
        self.animation.remove_listener(listener);
        self.listeners.retain(|l| l != listener);
    }

    fn notify(&self) {
        for listener in &self.listeners {
            listener.call();
        }
    }

    /// Resolves the slider width from the host constraint and returns the
    /// slider size.
    pub fn measure(&mut self, constraint: DimensionValue) -> Size {
        self.width = layout::resolve_width(constraint);
        self.layout().size()
    }

    /// Thumb geometry for the current value and measured width.
    pub fn layout(&self) -> SliderLayout {
        let factor = self.range.to_normalized(self.args.value) as f32;
        SliderLayout::compute(self.width, self.args.thumb_diameter, factor)
    }

    /// Feeds a pointer event and applies the resulting effects.
    pub fn handle_event(&mut self, event: DragEvent) {
        if self.disposed {
            warn!(?event, "event delivered to a disposed slider");
            return;
        }
        let ctx = GestureContext {
            enabled: self.args.is_enabled(),
            range: self.range,
            value: self.args.value,
            width: self.width,
        };
        for effect in self.gesture.handle(event, &ctx) {
            self.apply(effect);
        }
    }

    fn apply(&mut self, effect: GestureEffect) {
        match effect {
            GestureEffect::AnimateForward => self.animation.forward(),
            GestureEffect::AnimateReverse => self.animation.reverse(),
            GestureEffect::ChangeStart(value) => {
                if let Some(on_change_start) = &self.args.on_change_start {
                    on_change_start.call(value);
                }
            }
            GestureEffect::Change(value) => {
                if let Some(on_change) = &self.args.on_change {
                    on_change.call(value);
                }
            }
            GestureEffect::ChangeEnd(value) => {
                if let Some(on_change_end) = &self.args.on_change_end {
                    on_change_end.call(value);
                }
            }
        }
    }

    /// Advances the pop animation to the frame time `now`.
    ///
    /// Returns `true` when the next frame differs from the previous one.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.animation.tick(now)
    }

    /// Composes the current frame.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn render(&self) -> Scene {
        let args = &self.args;
        let show_decimal = args.show_decimal_value;
        let input = render::FrameInput {
            layout: self.layout(),
            palette: SliderPalette::resolve(args, &self.theme),
            value_text: format_value(args.value, args.map_value_to_string.as_ref(), show_decimal),
            min_text: render::format_number(args.min, show_decimal),
            max_text: render::format_number(args.max, show_decimal),
            start_label: args.start.as_ref(),
            end_label: args.end.as_ref(),
            eased_progress: self.animation.value(),
            raw_progress: self.animation.raw_value(),
        };
        render::compose(input, &mut self.splash.lock())
    }

    /// Releases the animation clock and drops any drag session. Idempotent.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        self.gesture.reset();
        self.animation.dispose();
        self.listeners.clear();
        debug!("slider disposed");
    }

    /// Whether [`dispose`](Self::dispose) has run.
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }
}

impl Drop for FluidSlider {
    fn drop(&mut self) {
        self.dispose();
    }
}

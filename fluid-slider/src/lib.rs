//! A slider control with a fluid splash animation.
//!
//! The thumb rests inside the track. When the pointer goes down it pops up
//! above the track with a bounce, and once it is more than halfway up a
//! droplet-shaped splash joins it back to the track. Dragging maps the
//! horizontal movement onto a value in `[min, max]` and reports it through
//! change callbacks.
//!
//! # Host integration
//!
//! The crate is framework-agnostic. A host feeds it:
//!
//! - a width constraint through [`FluidSlider::measure`],
//! - pointer input as [`DragEvent`]s through [`FluidSlider::handle_event`],
//! - frame times through [`FluidSlider::tick`],
//!
//! and draws the [`Scene`] returned by [`FluidSlider::render`] by implementing
//! [`Canvas`].
//!
//! ```
//! use std::time::{Duration, Instant};
//!
//! use fluid_slider::{DimensionValue, Dp, DragEvent, FluidSlider, FluidSliderArgs, Position};
//!
//! let mut slider = FluidSlider::new(
//!     FluidSliderArgs::default()
//!         .max(10.0)
//!         .value(5.0)
//!         .show_decimal_value(true)
//!         .on_change(|_| {}),
//! )?;
//! slider.measure(DimensionValue::Fixed(Dp(240.0)));
//!
//! let t0 = Instant::now();
//! slider.handle_event(DragEvent::Down);
//! slider.tick(t0);
//! slider.tick(t0 + Duration::from_millis(400));
//! assert!(slider.is_popped());
//! # Ok::<(), fluid_slider::SliderError>(())
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod animation;
pub mod color;
pub mod dp;
pub mod error;
pub mod geometry;
pub mod prop;
pub mod scene;
pub mod slider;
pub mod theme;

pub use animation::{AnimationController, AnimationStatus, Curve};
pub use color::Color;
pub use dp::Dp;
pub use error::SliderError;
pub use geometry::{DimensionValue, Position, Rect, RelativeRect, Size};
pub use prop::{Callback, CallbackWith};
pub use scene::{Canvas, DrawCommand, Scene, TextAlign};
pub use slider::{
    DragEvent, FluidSlider, FluidSliderArgs, GesturePhase, SliderLabel, SliderLayout,
    SliderPalette, ValueRange,
};
pub use theme::{FontWeight, SliderTheme, TextStyle};

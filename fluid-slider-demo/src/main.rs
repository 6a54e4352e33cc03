//! Headless driver for `fluid-slider`.
//!
//! Plays a scripted press, drag and release against a slider at a fixed
//! frame rate and logs every frame it draws. Use `RUST_LOG=debug` to see the
//! individual draw calls.

mod canvas;

use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use anyhow::{Context, Result, ensure};
use clap::Parser;
use fluid_slider::{DimensionValue, Dp, DragEvent, FluidSlider, FluidSliderArgs};
use parking_lot::Mutex;
use tracing::{debug, info};

use crate::canvas::LogCanvas;

const FRAME: Duration = Duration::from_millis(16);

#[derive(Parser)]
#[command(name = "fluid-slider-demo")]
#[command(version, about = "Drive a fluid slider through a scripted drag", long_about = None)]
struct Cli {
    /// Width offered to the slider, in dp
    #[arg(short, long, default_value_t = 320.0)]
    width: f32,
    /// Lower bound of the value range
    #[arg(long, default_value_t = 0.0)]
    min: f64,
    /// Upper bound of the value range
    #[arg(long, default_value_t = 100.0)]
    max: f64,
    /// Initial value
    #[arg(short, long, default_value_t = 25.0)]
    value: f64,
    /// Show the value with one decimal place
    #[arg(short, long)]
    decimal: bool,
    /// Number of drag updates to send
    #[arg(short, long, default_value_t = 12)]
    steps: u32,
    /// Horizontal movement per drag update, in dp
    #[arg(long, default_value_t = 10.0, allow_negative_numbers = true)]
    delta: f32,
    /// Render the slider disabled (no change callback)
    #[arg(long)]
    disabled: bool,
}

fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new(
            "error,fluid_slider=info,fluid_slider_demo=info",
        ) {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("error"),
        },
    };

    let _ = tracing_subscriber::fmt()
        .pretty()
        .with_env_filter(filter)
        .try_init();
}

/// Owns the slider and the externally held value, like a host widget tree.
struct Host {
    slider: FluidSlider,
    value: Arc<Mutex<f64>>,
    clock: Instant,
    canvas: LogCanvas,
}

impl Host {
    fn new(cli: &Cli) -> Result<Self> {
        let value = Arc::new(Mutex::new(cli.value));
        let mut args = FluidSliderArgs::default()
            .min(cli.min)
            .max(cli.max)
            .value(cli.value)
            .show_decimal_value(cli.decimal)
            .on_change_start(|v| info!(value = v, "drag started"))
            .on_change_end(|v| info!(value = v, "drag ended"));
        if !cli.disabled {
            let sink = value.clone();
            args = args.on_change(move |v| *sink.lock() = v);
        }

        let mut slider = FluidSlider::new(args).context("invalid slider configuration")?;
        let size = slider.measure(DimensionValue::Fixed(Dp(cli.width)));
        info!(width = size.width.0, height = size.height.0, "slider measured");

        Ok(Self {
            slider,
            value,
            clock: Instant::now(),
            canvas: LogCanvas::default(),
        })
    }

    /// Advances one frame: feeds the held value back, ticks and draws.
    fn frame(&mut self) -> Result<()> {
        let held = *self.value.lock();
        if held != self.slider.args().value {
            let args = self.slider.args().clone().value(held);
            self.slider.set_args(args)?;
        }

        self.clock += FRAME;
        self.slider.tick(self.clock);

        let scene = self.slider.render();
        scene.replay(&mut self.canvas);
        debug!(
            commands = scene.len(),
            progress = self.slider.animation_progress(),
            "frame"
        );
        Ok(())
    }

    fn frames(&mut self, count: usize) -> Result<()> {
        for _ in 0..count {
            self.frame()?;
        }
        Ok(())
    }

    fn settle(&mut self) -> Result<()> {
        self.frame()?;
        while self.slider.is_animating() {
            self.frame()?;
        }
        Ok(())
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    ensure!(cli.width.is_finite() && cli.width > 0.0, "width must be positive");

    let mut host = Host::new(&cli)?;
    host.frame()?;

    host.slider.handle_event(DragEvent::Down);
    host.settle()?;
    info!(popped = host.slider.is_popped(), "pressed");

    let layout = host.slider.layout();
    let thumb = layout.thumb_bounds(host.slider.eased_progress());
    host.slider.handle_event(DragEvent::Start {
        local_position: thumb.center(),
    });
    for _ in 0..cli.steps {
        host.slider.handle_event(DragEvent::Update {
            primary_delta: Dp(cli.delta),
        });
        host.frames(1)?;
    }
    host.slider.handle_event(DragEvent::End);
    host.settle()?;

    info!(
        value = *host.value.lock(),
        draw_calls = host.canvas.draw_calls,
        "done"
    );
    host.slider.dispose();
    Ok(())
}

//! Animation clock primitives for the slider.
//!
//! The host owns the frame clock and calls [`AnimationController::tick`] with
//! the frame time. Playback requests made between frames are anchored at the
//! next tick, so the controller never reads the wall clock itself.

use std::time::{Duration, Instant};

use tracing::{trace, warn};

use crate::prop::Callback;

/// Easing curves applied to the linear animation value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Curve {
    /// Identity mapping.
    #[default]
    Linear,
    /// Decelerating curve that bounces at the end.
    BounceOut,
}

impl Curve {
    /// Maps linear progress in `[0, 1]` to eased progress.
    pub fn transform(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Curve::Linear => t,
            Curve::BounceOut => bounce(t),
        }
    }
}

fn bounce(mut t: f32) -> f32 {
    const N: f32 = 7.5625;
    const D: f32 = 2.75;
    if t < 1.0 / D {
        N * t * t
    } else if t < 2.0 / D {
        t -= 1.5 / D;
        N * t * t + 0.75
    } else if t < 2.5 / D {
        t -= 2.25 / D;
        N * t * t + 0.9375
    } else {
        t -= 2.625 / D;
        N * t * t + 0.984375
    }
}

/// Playback state of an [`AnimationController`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationStatus {
    /// Stopped at the beginning.
    Dismissed,
    /// Running towards the end.
    Forward,
    /// Running towards the beginning.
    Reverse,
    /// Stopped at the end.
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Reverse,
}

#[derive(Debug, Clone, Copy)]
struct Run {
    from: f32,
    started_at: Option<Instant>,
}

/// Drives a single progress value in `[0, 1]` forward and backward in time.
pub struct AnimationController {
    duration: Duration,
    curve: Curve,
    reverse_curve: Curve,
    value: f32,
    direction: Direction,
    run: Option<Run>,
    listeners: Vec<Callback>,
    disposed: bool,
}

impl AnimationController {
    /// Creates a dismissed controller.
    ///
    /// `curve` eases forward playback and `reverse_curve` eases reverse
    /// playback.
    pub fn new(duration: Duration, curve: Curve, reverse_curve: Curve) -> Self {
        Self {
            duration,
            curve,
            reverse_curve,
            value: 0.0,
            direction: Direction::Forward,
            run: None,
            listeners: Vec::new(),
            disposed: false,
        }
    }

    /// Total time to travel the whole `[0, 1]` interval.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Linear progress in `[0, 1]`.
    pub fn raw_value(&self) -> f32 {
        self.value
    }

    /// Progress eased by the curve of the current playback direction.
    pub fn value(&self) -> f32 {
        match self.direction {
            Direction::Forward => self.curve.transform(self.value),
            Direction::Reverse => self.reverse_curve.transform(self.value),
        }
    }

    /// Current playback status.
    pub fn status(&self) -> AnimationStatus {
        match (self.run.is_some(), self.direction) {
            (true, Direction::Forward) => AnimationStatus::Forward,
            (true, Direction::Reverse) => AnimationStatus::Reverse,
            (false, _) if self.value >= 1.0 => AnimationStatus::Completed,
            (false, _) => AnimationStatus::Dismissed,
        }
    }

    /// Whether a playback run is in progress.
    pub fn is_animating(&self) -> bool {
        self.run.is_some()
    }

    /// Whether [`dispose`](Self::dispose) has been called.
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Starts playing towards `1.0` from the current value.
    pub fn forward(&mut self) {
        self.start(Direction::Forward);
    }

    /// Starts playing towards `0.0` from the current value.
    pub fn reverse(&mut self) {
        self.start(Direction::Reverse);
    }

    fn start(&mut self, direction: Direction) {
        if self.disposed {
            warn!(?direction, "playback requested on a disposed animation controller");
            return;
        }
        self.direction = direction;
        let target = self.target();
        if self.value == target {
            self.run = None;
            self.notify();
            return;
        }
        self.run = Some(Run {
            from: self.value,
            started_at: None,
        });
        self.notify();
    }

    fn target(&self) -> f32 {
        match self.direction {
            Direction::Forward => 1.0,
            Direction::Reverse => 0.0,
        }
    }

    /// Advances the animation to the frame time `now`.
    ///
    /// Returns `true` when the value changed. The first tick after a
    /// playback request anchors the run and leaves the value unchanged.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.disposed {
            return false;
        }
        let Some(run) = self.run.as_mut() else {
            return false;
        };
        let started_at = *run.started_at.get_or_insert(now);
        let from = run.from;

        let elapsed = now.saturating_duration_since(started_at);
        let travelled = if self.duration.is_zero() {
            1.0
        } else {
            elapsed.as_secs_f32() / self.duration.as_secs_f32()
        };
        let target = self.target();
        let next = match self.direction {
            Direction::Forward => (from + travelled).min(target),
            Direction::Reverse => (from - travelled).max(target),
        };

        let changed = next != self.value;
        self.value = next;
        if next == target {
            self.run = None;
        }
        trace!(value = self.value, status = ?self.status(), "animation tick");
        if changed || self.run.is_none() {
            self.notify();
        }
        changed
    }

    /// Registers a listener invoked whenever the value or status changes.
    pub fn add_listener(&mut self, listener: impl Into<Callback>) {
        if self.disposed {
            warn!("listener added to a disposed animation controller");
            return;
        }
        self.listeners.push(listener.into());
    }

    /// Removes a previously registered listener.
    pub fn remove_listener(&mut self, listener: &Callback) {
        self.listeners.retain(|l| l != listener);
    }

    /// Stops playback and releases listeners. Idempotent.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        self.run = None;
        self.listeners.clear();
        trace!("animation controller disposed");
    }

    fn notify(&self) {
        for listener in &self.listeners {
            listener.call();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    use super::*;

    fn controller() -> AnimationController {
        AnimationController::new(Duration::from_millis(400), Curve::BounceOut, Curve::Linear)
    }

    #[test]
    fn test_bounce_out_endpoints() {
        assert_eq!(Curve::BounceOut.transform(0.0), 0.0);
        assert!((Curve::BounceOut.transform(1.0) - 1.0).abs() < 1e-6);
        for i in 0..=100 {
            let v = Curve::BounceOut.transform(i as f32 / 100.0);
            assert!((0.0..=1.0 + 1e-6).contains(&v), "{v}");
        }
    }

    #[test]
    fn test_bounce_out_interior_values() {
        assert!((Curve::BounceOut.transform(0.5) - 0.765625).abs() < 1e-6);
        assert!((Curve::BounceOut.transform(0.25) - 0.472656).abs() < 1e-5);
        assert!((Curve::BounceOut.transform(0.9) - 0.988125).abs() < 1e-5);
        assert_ne!(Curve::BounceOut.transform(0.5), Curve::Linear.transform(0.5));
    }

    #[test]
    fn test_forward_runs_to_completion() {
        let mut c = controller();
        let t0 = Instant::now();
        c.forward();
        assert_eq!(c.status(), AnimationStatus::Forward);

        assert!(!c.tick(t0));
        assert_eq!(c.raw_value(), 0.0);

        assert!(c.tick(t0 + Duration::from_millis(200)));
        assert!((c.raw_value() - 0.5).abs() < 1e-4);

        c.tick(t0 + Duration::from_millis(500));
        assert_eq!(c.raw_value(), 1.0);
        assert_eq!(c.status(), AnimationStatus::Completed);
        assert!(!c.is_animating());
    }

    #[test]
    fn test_reverse_uses_reverse_curve() {
        let mut c = controller();
        let t0 = Instant::now();
        c.forward();
        c.tick(t0);
        c.tick(t0 + Duration::from_millis(400));
        assert_eq!(c.status(), AnimationStatus::Completed);

        let t0 = t0 + Duration::from_millis(500);
        c.reverse();
        c.tick(t0);
        c.tick(t0 + Duration::from_millis(100));
        assert_eq!(c.status(), AnimationStatus::Reverse);
        // Linear on the way back.
        assert!((c.value() - 0.75).abs() < 1e-4);

        c.tick(t0 + Duration::from_millis(400));
        assert_eq!(c.status(), AnimationStatus::Dismissed);
        assert_eq!(c.value(), 0.0);
    }

    #[test]
    fn test_reverse_mid_flight_starts_from_current_value() {
        let mut c = controller();
        let t0 = Instant::now();
        c.forward();
        c.tick(t0);
        c.tick(t0 + Duration::from_millis(100));
        let reached = c.raw_value();

        let t1 = t0 + Duration::from_millis(150);
        c.reverse();
        c.tick(t1);
        assert_eq!(c.raw_value(), reached);
        c.tick(t1 + Duration::from_millis(50));
        assert!((c.raw_value() - (reached - 0.125)).abs() < 1e-4);
    }

    #[test]
    fn test_listeners_are_notified_until_disposed() {
        let mut c = controller();
        let hits = Arc::new(AtomicUsize::new(0));
        let hits_clone = hits.clone();
        c.add_listener(move || {
            hits_clone.fetch_add(1, Ordering::SeqCst);
        });

        let t0 = Instant::now();
        c.forward();
        c.tick(t0);
        c.tick(t0 + Duration::from_millis(100));
        let before = hits.load(Ordering::SeqCst);
        assert!(before >= 2);

        c.dispose();
        c.reverse();
        assert!(!c.tick(t0 + Duration::from_millis(200)));
        assert_eq!(hits.load(Ordering::SeqCst), before);
        assert!(c.is_disposed());
    }
}

use smallvec::SmallVec;
use tracing::debug;

use crate::{Dp, Position};

use super::ValueRange;

/// Pointer input delivered by the host, in slider-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragEvent {
    /// The pointer went down on the slider.
    Down,
    /// A horizontal drag was recognized at `local_position`.
    Start {
        /// Pointer position relative to the slider's top-left corner.
        local_position: Position,
    },
    /// The pointer moved horizontally by `primary_delta` since the last event.
    Update {
        /// Horizontal movement.
        primary_delta: Dp,
    },
    /// The pointer was released without a drag having started.
    Up,
    /// The drag finished normally.
    End,
    /// The drag was interrupted by the host.
    Cancel,
}

/// Gesture state machine phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GesturePhase {
    /// No pointer interaction.
    #[default]
    Idle,
    /// Pointer is down but no drag has been recognized yet.
    Pressed,
    /// A drag session is active.
    Dragging,
}

/// Side effect requested by the gesture controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEffect {
    /// Play the pop animation forward.
    AnimateForward,
    /// Play the pop animation back to rest.
    AnimateReverse,
    /// Report the pre-drag value to the change-start callback.
    ChangeStart(f64),
    /// Report a new value to the change callback.
    Change(f64),
    /// Report the final value to the change-end callback.
    ChangeEnd(f64),
}

/// Effects produced by a single event, in the order they must be applied.
pub type GestureEffects = SmallVec<[GestureEffect; 2]>;

/// Per-event inputs taken from the slider configuration and layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureContext {
    /// Whether a change callback is present.
    pub enabled: bool,
    /// Value range of the slider.
    pub range: ValueRange,
    /// Value currently held by the host.
    pub value: f64,
    /// Measured slider width.
    pub width: Dp,
}

/// State that lives from drag start to drag end or cancel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Accumulated normalized position. Not clamped until consumed.
    pub position: f64,
    /// Last external value reported through, or received from, the host.
    pub last_value: f64,
}

impl DragSession {
    fn clamped(&self) -> f64 {
        self.position.clamp(0.0, 1.0)
    }
}

/// Turns [`DragEvent`]s into normalized positions and [`GestureEffect`]s.
#[derive(Debug, Clone, Default)]
pub struct GestureController {
    phase: GesturePhase,
    session: Option<DragSession>,
}

fn usable_width(width: Dp) -> Option<f64> {
    let width = f64::from(width.0);
    (width.is_finite() && width > 0.0).then_some(width)
}

impl GestureController {
    /// Creates an idle controller.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase.
    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    /// Active drag session, if any.
    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Running normalized position; `0.0` outside a drag session.
    pub fn running_position(&self) -> f64 {
        self.session.map_or(0.0, |s| s.position)
    }

    /// Whether the pointer is down or dragging.
    pub fn is_active(&self) -> bool {
        self.phase != GesturePhase::Idle
    }

    /// Records a value pushed by the host while a drag is in progress, so
    /// the next update compares against it.
    pub fn sync_value(&mut self, value: f64) {
        if let Some(session) = self.session.as_mut() {
            session.last_value = value;
        }
    }

    /// Drops any session and returns to idle without producing effects.
    pub fn reset(&mut self) {
        self.phase = GesturePhase::Idle;
        self.session = None;
    }

    /// Feeds one event through the state machine.
    pub fn handle(&mut self, event: DragEvent, ctx: &GestureContext) -> GestureEffects {
        let mut effects = GestureEffects::new();
        if !ctx.enabled {
            return effects;
        }

        match event {
            DragEvent::Down => {
                if self.phase == GesturePhase::Idle {
                    self.phase = GesturePhase::Pressed;
                    effects.push(GestureEffect::AnimateForward);
                }
            }
            DragEvent::Start { local_position } => {
                if self.phase == GesturePhase::Dragging {
                    debug!("drag start while already dragging, restarting session");
                }
                if self.phase == GesturePhase::Idle {
                    effects.push(GestureEffect::AnimateForward);
                }
                effects.push(GestureEffect::ChangeStart(ctx.value));

                let position = match usable_width(ctx.width) {
                    Some(width) => f64::from(local_position.x.0) / width,
                    None => {
                        debug!(width = ctx.width.0, "unusable slider width, seeding from value");
                        ctx.range.to_normalized(ctx.value)
                    }
                };
                self.session = Some(DragSession {
                    position,
                    last_value: ctx.value,
                });
                self.phase = GesturePhase::Dragging;
                debug!(position, "drag started");
            }
            DragEvent::Update { primary_delta } => {
                let Some(session) = self.session.as_mut() else {
                    return effects;
                };
                let Some(width) = usable_width(ctx.width) else {
                    debug!(width = ctx.width.0, "ignoring drag update on unusable width");
                    return effects;
                };
                session.position += f64::from(primary_delta.0) / width;
                let value = ctx.range.to_external(session.clamped());
                if value != session.last_value {
                    session.last_value = value;
                    effects.push(GestureEffect::Change(value));
                }
            }
            DragEvent::End | DragEvent::Cancel => match self.phase {
                GesturePhase::Dragging => {
                    let value = self
                        .session
                        .map_or(ctx.value, |s| ctx.range.to_external(s.clamped()));
                    effects.push(GestureEffect::ChangeEnd(value));
                    effects.push(GestureEffect::AnimateReverse);
                    self.reset();
                    debug!(value, ?event, "drag finished");
                }
                GesturePhase::Pressed => {
                    effects.push(GestureEffect::AnimateReverse);
                    self.reset();
                }
                GesturePhase::Idle => {}
            },
            DragEvent::Up => {
                if self.phase == GesturePhase::Pressed {
                    effects.push(GestureEffect::AnimateReverse);
                    self.reset();
                }
            }
        }
        effects
    }
}

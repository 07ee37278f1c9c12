//! Two-stage transition animation
//!
//! A transition rotates the old icon away, then swaps in the new icon and
//! bounces it into place:
//!
//! ```text
//!   ROTATING ──rotation done──▶ BOUNCING ──bounce done──▶ SETTLED
//!              (swap icon)                 (completed)
//! ```
//!
//! The sequencer is driven by frame deltas. It never calls back into the
//! widget; each call returns the events the widget has to apply, in order.

use fave_animation::{Easing, Timeline, TimelineEntryId, Tween};
use fave_core::fsm::StateMachine;
use fave_theme::IconId;
use smallvec::SmallVec;

use super::config::{AnimationConfig, Direction};
use crate::surface::IconTransform;

/// Stage of a running transition
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    Rotating,
    Bouncing,
    Settled,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum Stage {
    RotationDone,
    BounceDone,
}

/// Output of the sequencer, applied by the widget in order
#[derive(Clone, Debug, PartialEq)]
pub enum SequencerEvent {
    /// Show the new state's icon; emitted once, as the bounce stage begins
    SwapIcon(IconId),
    /// Current transform of the icon
    Frame(IconTransform),
    /// Both stages are done; carries the state the transition went to
    Completed(bool),
}

/// Events produced by one sequencer call
pub type SequencerEvents = SmallVec<[SequencerEvent; 4]>;

/// One transition in flight
struct Transition {
    to_favorite: bool,
    icon: IconId,
    timeline: Timeline,
    rotation: TimelineEntryId,
    scale_x: TimelineEntryId,
    scale_y: TimelineEntryId,
    phases: StateMachine<Phase, Stage>,
}

impl Transition {
    fn new(to_favorite: bool, icon: IconId, config: AnimationConfig) -> Self {
        let direction = Direction::toward(to_favorite);
        let (angle_from, angle_to) = config.rotation_sweep(direction);
        let (scale_from, scale_to) = config.bounce_envelope(direction);
        let rotation_ms = config.rotation_duration_ms();
        let bounce_ms = config.bounce_duration_ms();

        let mut timeline = Timeline::new();
        let rotation = timeline.add(
            0,
            Tween::new(angle_from, angle_to, rotation_ms, Easing::ACCELERATE),
        );
        // Both scale channels start when the rotation ends
        let scale_x = timeline.add(
            rotation_ms,
            Tween::new(scale_from, scale_to, bounce_ms, Easing::POP),
        );
        let scale_y = timeline.add(
            rotation_ms,
            Tween::new(scale_from, scale_to, bounce_ms, Easing::POP),
        );
        timeline.start();

        let phases = StateMachine::builder(Phase::Rotating)
            .on(Phase::Rotating, Stage::RotationDone, Phase::Bouncing)
            .on(Phase::Bouncing, Stage::BounceDone, Phase::Settled)
            .build();

        Self {
            to_favorite,
            icon,
            timeline,
            rotation,
            scale_x,
            scale_y,
            phases,
        }
    }

    fn phase(&self) -> Phase {
        self.phases.current_state()
    }

    fn transform(&self) -> IconTransform {
        let rotation_deg = self.timeline.value(self.rotation).unwrap_or(0.0);
        if self.phases.is_in(Phase::Rotating) {
            return IconTransform::rotated(rotation_deg);
        }
        IconTransform {
            rotation_deg,
            scale_x: self.timeline.value(self.scale_x).unwrap_or(1.0),
            scale_y: self.timeline.value(self.scale_y).unwrap_or(1.0),
        }
    }

    /// Take whatever stage transitions the timeline has reached
    fn advance(&mut self, events: &mut SequencerEvents) {
        if self.phases.is_in(Phase::Rotating) && self.timeline.has_finished(self.rotation) {
            self.phases.send(Stage::RotationDone);
            tracing::debug!(to_favorite = self.to_favorite, icon = %self.icon, "bounce stage");
            events.push(SequencerEvent::SwapIcon(self.icon.clone()));
        }

        events.push(SequencerEvent::Frame(self.transform()));

        let bounced = self.timeline.has_finished(self.scale_x)
            && self.timeline.has_finished(self.scale_y);
        if self.phases.is_in(Phase::Bouncing) && bounced {
            self.phases.send(Stage::BounceDone);
            tracing::debug!(
                to_favorite = self.to_favorite,
                stages = ?self.phases.history(),
                "transition settled"
            );
            events.push(SequencerEvent::Completed(self.to_favorite));
        }
    }
}

/// Runs rotate-then-bounce transitions, one at a time
#[derive(Default)]
pub struct AnimationSequencer {
    active: Option<Transition>,
}

impl AnimationSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a transition is in flight
    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    /// Stage of the transition in flight
    pub fn phase(&self) -> Option<Phase> {
        self.active.as_ref().map(Transition::phase)
    }

    /// State the transition in flight is heading to
    pub fn target(&self) -> Option<bool> {
        self.active.as_ref().map(|t| t.to_favorite)
    }

    /// Start a transition toward `to_favorite`, showing `icon` once the
    /// rotation stage ends.
    ///
    /// The config is captured; later config changes do not affect this
    /// transition. A transition already in flight is dropped without
    /// completing; use [`finish_now`](Self::finish_now) first to settle it.
    pub fn run_transition(
        &mut self,
        to_favorite: bool,
        icon: IconId,
        config: AnimationConfig,
    ) -> SequencerEvents {
        if let Some(previous) = self.active.take() {
            tracing::debug!(
                to_favorite = previous.to_favorite,
                phase = ?previous.phase(),
                "dropping unfinished transition"
            );
        }

        tracing::debug!(
            to_favorite,
            rotation_ms = config.rotation_duration_ms(),
            bounce_ms = config.bounce_duration_ms(),
            total_ms = config.total_duration_ms(),
            "rotation stage"
        );
        let mut transition = Transition::new(to_favorite, icon, config);
        let mut events = SequencerEvents::new();
        // Zero-length stages are taken right away
        transition.advance(&mut events);
        if !transition.phases.is_in(Phase::Settled) {
            self.active = Some(transition);
        }
        events
    }

    /// Advance the transition in flight by `dt_ms` milliseconds.
    ///
    /// A single call may cross both stage boundaries; the swap is still
    /// reported before completion.
    pub fn tick(&mut self, dt_ms: f32) -> SequencerEvents {
        let mut events = SequencerEvents::new();
        let Some(transition) = self.active.as_mut() else {
            return events;
        };

        transition.timeline.tick(dt_ms);
        tracing::trace!(
            elapsed_ms = transition.timeline.elapsed_ms(),
            phase = ?transition.phase(),
            "transition frame"
        );
        transition.advance(&mut events);

        if transition.phases.is_in(Phase::Settled) {
            self.active = None;
        }
        events
    }

    /// Jump the transition in flight to its last frame and complete it
    pub fn finish_now(&mut self) -> SequencerEvents {
        let mut events = SequencerEvents::new();
        let Some(mut transition) = self.active.take() else {
            return events;
        };

        tracing::debug!(
            to_favorite = transition.to_favorite,
            phase = ?transition.phase(),
            "settling transition early"
        );
        transition.timeline.finish();
        transition.advance(&mut events);
        events
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Toast visibility state machine.
//!
//! The controller walks `Hidden → Entering → Visible → Exiting → Hidden`,
//! driving the presence transition and the auto-dismiss timer. It owns no
//! clock: every entry point takes `now`, and the host delivers time through
//! [`Controller::subscription`]. Timers are plain deadlines, so dropping the
//! controller (or moving to a phase that does not subscribe) is what cancels
//! them.

use super::provider::ToastVisibilityState;
use super::request::ToastRequest;
use super::transition::{self, Transition, TRANSITION_DURATION};
use iced::{time, window, Subscription};
use std::time::{Duration, Instant};

/// How often a visible toast re-checks its auto-dismiss deadline.
const TIMER_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Messages the toast consumes.
#[derive(Debug, Clone)]
pub enum Message {
    /// The close affordance was pressed.
    Close,
    /// An animation frame during entry or exit.
    Frame(Instant),
    /// A periodic tick while the toast is resting.
    Tick(Instant),
}

/// Effects reported back to the owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// The exit transition finished and the shared state was cleared.
    Hidden,
}

/// Lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Hidden,
    Entering,
    Visible,
    Exiting,
}

/// One-shot auto-dismiss deadline.
///
/// `None` when `now + duration` is past what `Instant` can hold; such a
/// timer never fires and the toast stays until closed or hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DismissTimer {
    deadline: Option<Instant>,
}

impl DismissTimer {
    fn arm(now: Instant, duration: Duration) -> Self {
        Self {
            deadline: now.checked_add(duration),
        }
    }

    fn is_due(self, now: Instant) -> bool {
        self.deadline.is_some_and(|deadline| now >= deadline)
    }
}

#[derive(Debug, Clone)]
pub struct Controller {
    phase: Phase,
    transition: Option<Transition>,
    transition_duration: Duration,
    /// Presence sampled at the last update, read by the view.
    presence: f32,
    displayed: Option<ToastRequest>,
    /// Generation of the request currently displayed.
    generation: u64,
    timer: Option<DismissTimer>,
}

impl Default for Controller {
    fn default() -> Self {
        Self::new(TRANSITION_DURATION)
    }
}

impl Controller {
    #[must_use]
    pub fn new(transition_duration: Duration) -> Self {
        Self {
            phase: Phase::Hidden,
            transition: None,
            transition_duration,
            presence: 0.0,
            displayed: None,
            generation: 0,
            timer: None,
        }
    }

    /// Observes the shared state and advances the state machine to `now`.
    ///
    /// Returns `Some(Effect::Hidden)` on the update where the exit
    /// transition completes; that is the only place the effect is produced.
    pub fn update(&mut self, state: &mut ToastVisibilityState, now: Instant) -> Option<Effect> {
        let mut effect = None;
        loop {
            let before = self.phase;
            // At most one exit completes per update. A request queued during
            // the exit re-enters below, and a second completion waits for the
            // next frame.
            if let Some(e) = self.step(state, now, effect.is_none()) {
                effect = Some(e);
            }
            if self.phase == before {
                break;
            }
        }
        self.sample(now);
        effect
    }

    /// Handles a tap on the close affordance.
    ///
    /// Starts the exit and cancels the pending timer. Returns `false` (and
    /// does nothing) unless the toast is entering or resting.
    pub fn dismiss(&mut self, now: Instant) -> bool {
        match self.phase {
            Phase::Entering | Phase::Visible => {
                tracing::debug!("toast closed by user");
                self.begin_exit(now);
                self.sample(now);
                true
            }
            Phase::Hidden | Phase::Exiting => false,
        }
    }

    fn step(
        &mut self,
        state: &mut ToastVisibilityState,
        now: Instant,
        may_finish: bool,
    ) -> Option<Effect> {
        match self.phase {
            Phase::Hidden => {
                if state.is_requested {
                    self.enter(state, now);
                }
                None
            }
            Phase::Entering | Phase::Visible => {
                if !state.is_requested {
                    tracing::debug!("toast hide requested");
                    self.begin_exit(now);
                    return None;
                }
                if state.generation != self.generation {
                    self.replace(state, now);
                }
                if self.timer.is_some_and(|timer| timer.is_due(now)) {
                    tracing::debug!("toast auto-dismiss timer fired");
                    self.begin_exit(now);
                    return None;
                }
                if self.phase == Phase::Entering && self.transition_complete(now) {
                    self.phase = Phase::Visible;
                }
                None
            }
            Phase::Exiting => {
                if may_finish && self.transition_complete(now) {
                    Some(self.finish_exit(state))
                } else {
                    None
                }
            }
        }
    }

    fn enter(&mut self, state: &mut ToastVisibilityState, now: Instant) {
        let request = state.request.clone();
        tracing::debug!(
            category = ?request.category(),
            duration_ms = request.duration().as_millis() as u64,
            "toast entering"
        );
        // Armed at entry start, not when fully visible.
        self.timer = Some(DismissTimer::arm(now, request.duration()));
        self.transition = Some(Transition::new(0.0, 1.0, now, self.transition_duration));
        self.generation = state.generation;
        self.displayed = Some(request);
        self.phase = Phase::Entering;
        state.is_rendered = true;
    }

    /// Swaps in a newer request while on screen, re-arming the timer.
    fn replace(&mut self, state: &ToastVisibilityState, now: Instant) {
        let request = state.request.clone();
        tracing::debug!(category = ?request.category(), "toast content replaced");
        self.timer = Some(DismissTimer::arm(now, request.duration()));
        self.generation = state.generation;
        self.displayed = Some(request);
    }

    fn begin_exit(&mut self, now: Instant) {
        let from = self.presence_at(now);
        self.timer = None;
        self.transition = Some(Transition::new(from, 0.0, now, self.transition_duration));
        self.phase = Phase::Exiting;
    }

    fn finish_exit(&mut self, state: &mut ToastVisibilityState) -> Effect {
        tracing::debug!("toast hidden");
        self.phase = Phase::Hidden;
        self.transition = None;
        self.timer = None;
        self.displayed = None;
        // A request that arrived during the exit stays pending and re-enters.
        if state.generation == self.generation {
            state.is_requested = false;
        }
        state.is_rendered = false;
        Effect::Hidden
    }

    /// Releases the shared state when the controller is torn down.
    ///
    /// A toast that was already leaving gets the same cleanup as a finished
    /// exit, minus the effect: its request is withdrawn unless a newer one
    /// arrived. A toast still entering or resting keeps its request pending.
    pub(super) fn release(&mut self, state: &mut ToastVisibilityState) {
        if self.phase == Phase::Exiting && state.generation == self.generation {
            state.is_requested = false;
        }
        state.is_rendered = false;
        self.phase = Phase::Hidden;
        self.transition = None;
        self.timer = None;
        self.displayed = None;
    }

    fn transition_complete(&self, now: Instant) -> bool {
        self.transition.is_none_or(|t| t.is_complete(now))
    }

    fn presence_at(&self, now: Instant) -> f32 {
        self.transition.map_or(0.0, |t| t.value(now))
    }

    fn sample(&mut self, now: Instant) {
        self.presence = self.presence_at(now);
    }

    /// Time subscription for the current phase.
    ///
    /// Frames while a transition runs, a coarse tick while resting, nothing
    /// while hidden.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.is_animating() {
            window::frames().map(Message::Frame)
        } else if self.phase == Phase::Visible {
            time::every(TIMER_POLL_INTERVAL).map(Message::Tick)
        } else {
            Subscription::none()
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The request on screen, if any.
    #[must_use]
    pub fn request(&self) -> Option<&ToastRequest> {
        self.displayed.as_ref()
    }

    #[must_use]
    pub fn presence(&self) -> f32 {
        self.presence
    }

    #[must_use]
    pub fn opacity(&self) -> f32 {
        transition::opacity(self.presence)
    }

    #[must_use]
    pub fn offset(&self) -> f32 {
        transition::offset(self.presence)
    }

    #[must_use]
    pub fn has_pending_timer(&self) -> bool {
        self.timer.is_some()
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        matches!(self.phase, Phase::Entering | Phase::Exiting)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, ms, F32_EPSILON};
    use crate::ui::toast::request::Category;

    fn requested(request: ToastRequest) -> ToastVisibilityState {
        let mut state = ToastVisibilityState::default();
        state.request = request;
        state.is_requested = true;
        state.generation = 1;
        state
    }

    /// Advances in 16ms frames up to `until`, collecting effects.
    fn run_until(
        controller: &mut Controller,
        state: &mut ToastVisibilityState,
        from: Instant,
        until: Instant,
    ) -> Vec<Effect> {
        let mut effects = Vec::new();
        let mut now = from;
        while now <= until {
            effects.extend(controller.update(state, now));
            now += ms(16);
        }
        effects.extend(controller.update(state, until));
        effects
    }

    #[test]
    fn starts_hidden_without_subscription_work() {
        let controller = Controller::default();
        assert_eq!(controller.phase(), Phase::Hidden);
        assert!(controller.request().is_none());
        assert!(!controller.has_pending_timer());
        assert_abs_diff_eq!(controller.opacity(), 0.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn idle_update_without_request_stays_hidden() {
        let mut controller = Controller::default();
        let mut state = ToastVisibilityState::default();

        assert_eq!(controller.update(&mut state, Instant::now()), None);
        assert_eq!(controller.phase(), Phase::Hidden);
        assert!(!state.is_rendered);
    }

    #[test]
    fn request_starts_entry_and_arms_timer() {
        let t0 = Instant::now();
        let mut controller = Controller::default();
        let mut state = requested(ToastRequest::info("Hello"));

        controller.update(&mut state, t0);

        assert_eq!(controller.phase(), Phase::Entering);
        assert!(controller.has_pending_timer());
        assert!(state.is_rendered);
        assert_eq!(controller.request().map(ToastRequest::message), Some("Hello"));
        assert_abs_diff_eq!(controller.opacity(), 0.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn entry_completes_into_visible() {
        let t0 = Instant::now();
        let mut controller = Controller::default();
        let mut state = requested(ToastRequest::new("Saved"));

        controller.update(&mut state, t0);
        controller.update(&mut state, t0 + ms(150));
        assert_eq!(controller.phase(), Phase::Entering);
        assert!(controller.opacity() > 0.0 && controller.opacity() < 1.0);

        controller.update(&mut state, t0 + ms(300));
        assert_eq!(controller.phase(), Phase::Visible);
        assert_abs_diff_eq!(controller.opacity(), 1.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(controller.offset(), 0.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn animates_only_while_entering_or_exiting() {
        let t0 = Instant::now();
        let mut controller = Controller::default();
        let mut state = requested(ToastRequest::new("Saved"));
        assert!(!controller.is_animating());

        controller.update(&mut state, t0);
        assert!(controller.is_animating());

        controller.update(&mut state, t0 + ms(300));
        assert_eq!(controller.phase(), Phase::Visible);
        assert!(!controller.is_animating());

        controller.dismiss(t0 + ms(400));
        assert!(controller.is_animating());

        controller.update(&mut state, t0 + ms(700));
        assert_eq!(controller.phase(), Phase::Hidden);
        assert!(!controller.is_animating());
    }

    #[test]
    fn auto_dismiss_hides_exactly_once() {
        let t0 = Instant::now();
        let mut controller = Controller::default();
        let mut state = requested(ToastRequest::new("Saved"));

        let effects = run_until(&mut controller, &mut state, t0, t0 + ms(3000 + 300 + 500));

        assert_eq!(effects, vec![Effect::Hidden]);
        assert_eq!(controller.phase(), Phase::Hidden);
        assert!(!state.is_requested);
        assert!(!state.is_rendered);
    }

    #[test]
    fn timer_fires_at_duration_from_entry_start() {
        let t0 = Instant::now();
        let mut controller = Controller::default();
        let mut state = requested(ToastRequest::new("Saved").with_duration(ms(1000)));

        controller.update(&mut state, t0);
        controller.update(&mut state, t0 + ms(999));
        assert_eq!(controller.phase(), Phase::Visible);

        controller.update(&mut state, t0 + ms(1000));
        assert_eq!(controller.phase(), Phase::Exiting);
        assert!(!controller.has_pending_timer());

        assert_eq!(
            controller.update(&mut state, t0 + ms(1300)),
            Some(Effect::Hidden)
        );
    }

    #[test]
    fn manual_dismiss_cancels_timer() {
        let t0 = Instant::now();
        let mut controller = Controller::default();
        let mut state = requested(ToastRequest::new("Saved"));

        controller.update(&mut state, t0);
        controller.update(&mut state, t0 + ms(500));
        assert!(controller.dismiss(t0 + ms(500)));
        assert!(!controller.has_pending_timer());
        assert_eq!(controller.phase(), Phase::Exiting);

        let effects = run_until(&mut controller, &mut state, t0 + ms(516), t0 + ms(5000));
        assert_eq!(effects, vec![Effect::Hidden]);
        assert!(!state.is_requested);
    }

    #[test]
    fn dismiss_when_hidden_or_exiting_is_noop() {
        let t0 = Instant::now();
        let mut controller = Controller::default();
        assert!(!controller.dismiss(t0));

        let mut state = requested(ToastRequest::new("x"));
        controller.update(&mut state, t0);
        assert!(controller.dismiss(t0 + ms(10)));
        assert!(!controller.dismiss(t0 + ms(20)));
        assert_eq!(controller.phase(), Phase::Exiting);
    }

    #[test]
    fn hide_request_starts_exit() {
        let t0 = Instant::now();
        let mut controller = Controller::default();
        let mut state = requested(ToastRequest::new("Saved"));

        controller.update(&mut state, t0);
        controller.update(&mut state, t0 + ms(400));
        state.is_requested = false;
        controller.update(&mut state, t0 + ms(450));

        assert_eq!(controller.phase(), Phase::Exiting);
        assert!(!controller.has_pending_timer());
        // Still rendered until the exit finishes.
        assert!(state.is_rendered);

        assert_eq!(
            controller.update(&mut state, t0 + ms(750)),
            Some(Effect::Hidden)
        );
        assert!(!state.is_rendered);
    }

    #[test]
    fn short_duration_exits_before_entry_finishes() {
        let t0 = Instant::now();
        let mut controller = Controller::default();
        let mut state = requested(ToastRequest::new("Blink").with_duration(ms(100)));

        controller.update(&mut state, t0);
        controller.update(&mut state, t0 + ms(100));

        assert_eq!(controller.phase(), Phase::Exiting);
        // The exit starts from wherever the entry had reached.
        assert!(controller.presence() > 0.0);
        assert!(controller.presence() < 1.0);
        assert_eq!(
            controller.update(&mut state, t0 + ms(400)),
            Some(Effect::Hidden)
        );
    }

    #[test]
    fn replacement_while_visible_swaps_content_and_rearms_timer() {
        let t0 = Instant::now();
        let mut controller = Controller::default();
        let mut state = requested(ToastRequest::new("First"));

        controller.update(&mut state, t0);
        controller.update(&mut state, t0 + ms(2000));
        assert_eq!(controller.phase(), Phase::Visible);

        state.request = ToastRequest::error("Second").with_duration(ms(2000));
        state.generation += 1;
        controller.update(&mut state, t0 + ms(2500));

        assert_eq!(controller.phase(), Phase::Visible);
        let shown = controller.request().expect("request on screen");
        assert_eq!(shown.message(), "Second");
        assert_eq!(shown.category(), Category::Error);

        // The original deadline (t0 + 3000) no longer applies.
        controller.update(&mut state, t0 + ms(3500));
        assert_eq!(controller.phase(), Phase::Visible);
        controller.update(&mut state, t0 + ms(4500));
        assert_eq!(controller.phase(), Phase::Exiting);
    }

    #[test]
    fn request_during_exit_reenters_after_hidden() {
        let t0 = Instant::now();
        let mut controller = Controller::default();
        let mut state = requested(ToastRequest::new("First"));

        controller.update(&mut state, t0);
        controller.update(&mut state, t0 + ms(300));
        controller.dismiss(t0 + ms(400));
        assert_eq!(controller.phase(), Phase::Exiting);

        state.request = ToastRequest::info("Second");
        state.generation += 1;
        state.is_requested = true;

        // Exit is not interrupted.
        controller.update(&mut state, t0 + ms(500));
        assert_eq!(controller.phase(), Phase::Exiting);
        assert_eq!(controller.request().map(ToastRequest::message), Some("First"));

        let effect = controller.update(&mut state, t0 + ms(700));
        assert_eq!(effect, Some(Effect::Hidden));
        assert_eq!(controller.phase(), Phase::Entering);
        assert_eq!(controller.request().map(ToastRequest::message), Some("Second"));
        assert!(state.is_requested);
        assert!(state.is_rendered);
    }

    #[test]
    fn zero_transition_hides_on_the_next_update() {
        let t0 = Instant::now();
        let mut controller = Controller::new(Duration::ZERO);
        let mut state = requested(ToastRequest::new("Instant"));

        controller.update(&mut state, t0);
        assert_eq!(controller.phase(), Phase::Visible);
        assert_abs_diff_eq!(controller.opacity(), 1.0, epsilon = F32_EPSILON);

        controller.dismiss(t0 + ms(10));
        assert_eq!(
            controller.update(&mut state, t0 + ms(10)),
            Some(Effect::Hidden)
        );
    }

    #[test]
    fn dropping_controller_with_pending_timer_is_silent() {
        let t0 = Instant::now();
        let mut controller = Controller::default();
        let mut state = requested(ToastRequest::new("Bye"));
        controller.update(&mut state, t0);
        assert!(controller.has_pending_timer());

        drop(controller);
        // Nothing left to fire; the state is untouched by the drop itself.
        assert!(state.is_requested);
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Shared toast state, its owning provider and the dispatcher handle.
//!
//! The provider is built once at the composition root and owns both the
//! shared [`ToastVisibilityState`] and the mounted [`Controller`]. Code that
//! needs to raise a toast receives a [`ToastDispatcher`], which only holds a
//! weak reference: once the provider is gone, every call reports a
//! [`UsageError`] instead of silently doing nothing.

use super::controller::{Controller, Effect, Message};
use super::request::{Category, ToastRequest};
use super::transition::TRANSITION_DURATION;
use crate::config::ToastConfig;
use crate::error::UsageError;
use iced::{Element, Subscription};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::{Duration, Instant};

/// The single piece of shared toast state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastVisibilityState {
    /// Whether a caller currently wants a toast shown.
    pub(super) is_requested: bool,
    /// Whether the toast is mounted (entering, resting or exiting).
    pub(super) is_rendered: bool,
    pub(super) request: ToastRequest,
    /// Bumped by every `show_toast`.
    pub(super) generation: u64,
}

impl ToastVisibilityState {
    #[must_use]
    pub fn is_requested(&self) -> bool {
        self.is_requested
    }

    #[must_use]
    pub fn is_rendered(&self) -> bool {
        self.is_rendered
    }

    #[must_use]
    pub fn request(&self) -> &ToastRequest {
        &self.request
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

type SharedState = Arc<Mutex<ToastVisibilityState>>;

// The state is plain data with no cross-field invariant a panic could break.
fn lock(state: &Mutex<ToastVisibilityState>) -> MutexGuard<'_, ToastVisibilityState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Cloneable handle for requesting and dismissing the toast.
///
/// Cheap to clone and `Send`, so it can be passed down to screens or moved
/// into background tasks.
#[derive(Clone, Debug)]
pub struct ToastDispatcher {
    state: Option<Weak<Mutex<ToastVisibilityState>>>,
    default_duration: Duration,
}

impl ToastDispatcher {
    /// A dispatcher attached to no provider. Every call fails with
    /// [`UsageError::Detached`].
    #[must_use]
    pub fn detached() -> Self {
        Self {
            state: None,
            default_duration: ToastRequest::default().duration(),
        }
    }

    fn with_state<R>(
        &self,
        f: impl FnOnce(&mut ToastVisibilityState) -> R,
    ) -> Result<R, UsageError> {
        let weak = self.state.as_ref().ok_or(UsageError::Detached)?;
        let state = weak.upgrade().ok_or(UsageError::ProviderDropped)?;
        let mut guard = lock(&state);
        Ok(f(&mut guard))
    }

    /// Requests a toast, replacing any request still pending or on screen.
    #[must_use = "a UsageError means the toast provider is gone"]
    pub fn show_toast(&self, request: impl Into<ToastRequest>) -> Result<(), UsageError> {
        let request = request.into();
        self.with_state(|state| {
            tracing::trace!(category = ?request.category(), "toast requested");
            state.request = request;
            state.is_requested = true;
            state.generation = state.generation.wrapping_add(1);
        })
    }

    /// Asks the toast to leave. The exit animation still plays; this only
    /// withdraws the request. A no-op when nothing is requested.
    #[must_use = "a UsageError means the toast provider is gone"]
    pub fn hide_toast(&self) -> Result<(), UsageError> {
        self.with_state(|state| {
            if state.is_requested {
                tracing::trace!("toast hide requested");
                state.is_requested = false;
            }
        })
    }

    /// Shows a success toast with the configured default duration.
    #[must_use = "a UsageError means the toast provider is gone"]
    pub fn success(&self, message: impl Into<String>) -> Result<(), UsageError> {
        self.show_with_default(message, Category::Success)
    }

    /// Shows an error toast with the configured default duration.
    #[must_use = "a UsageError means the toast provider is gone"]
    pub fn error(&self, message: impl Into<String>) -> Result<(), UsageError> {
        self.show_with_default(message, Category::Error)
    }

    /// Shows an info toast with the configured default duration.
    #[must_use = "a UsageError means the toast provider is gone"]
    pub fn info(&self, message: impl Into<String>) -> Result<(), UsageError> {
        self.show_with_default(message, Category::Info)
    }

    fn show_with_default(
        &self,
        message: impl Into<String>,
        category: Category,
    ) -> Result<(), UsageError> {
        self.show_toast(
            ToastRequest::new(message)
                .with_category(category)
                .with_duration(self.default_duration),
        )
    }

    /// Snapshot of the shared state.
    pub fn state(&self) -> Result<ToastVisibilityState, UsageError> {
        self.with_state(|state| state.clone())
    }
}

/// Owner of the shared toast state and the mounted controller.
#[derive(Debug)]
pub struct ToastProvider {
    state: SharedState,
    controller: Option<Controller>,
    default_duration: Duration,
    transition_duration: Duration,
}

impl Default for ToastProvider {
    fn default() -> Self {
        Self::with_durations(ToastRequest::default().duration(), TRANSITION_DURATION)
    }
}

impl ToastProvider {
    /// Creates a provider with a mounted controller, timings from `config`.
    #[must_use]
    pub fn new(config: &ToastConfig) -> Self {
        Self::with_durations(config.default_duration(), config.transition())
    }

    #[must_use]
    pub fn with_durations(default_duration: Duration, transition_duration: Duration) -> Self {
        Self {
            state: Arc::new(Mutex::new(ToastVisibilityState::default())),
            controller: Some(Controller::new(transition_duration)),
            default_duration,
            transition_duration,
        }
    }

    /// Hands out a dispatcher bound to this provider.
    #[must_use]
    pub fn dispatcher(&self) -> ToastDispatcher {
        ToastDispatcher {
            state: Some(Arc::downgrade(&self.state)),
            default_duration: self.default_duration,
        }
    }

    /// Snapshot of the shared state.
    #[must_use]
    pub fn state(&self) -> ToastVisibilityState {
        lock(&self.state).clone()
    }

    /// Lets the controller observe the shared state at `now`.
    ///
    /// Call after every application message so dispatcher calls made while
    /// handling it are acted upon.
    pub fn sync(&mut self, now: Instant) -> Option<Effect> {
        let controller = self.controller.as_mut()?;
        let mut state = lock(&self.state);
        controller.update(&mut state, now)
    }

    /// Routes a toast message.
    pub fn handle_message(&mut self, message: &Message, now: Instant) -> Option<Effect> {
        match message {
            Message::Close => {
                if let Some(controller) = self.controller.as_mut() {
                    controller.dismiss(now);
                }
                self.sync(now)
            }
            Message::Frame(at) | Message::Tick(at) => self.sync(*at),
        }
    }

    /// Mounts a fresh controller if none is mounted. A request that is still
    /// pending is picked up on the next sync.
    pub fn mount(&mut self) {
        if self.controller.is_none() {
            self.controller = Some(Controller::new(self.transition_duration));
        }
    }

    /// Tears the controller down.
    ///
    /// Its timer and transition go with it and no `Effect::Hidden` is
    /// produced. A toast that was already leaving is cleaned up as if its
    /// exit had finished; one still entering or resting stays requested and
    /// is shown again by the next mounted controller.
    pub fn unmount(&mut self) {
        if let Some(mut controller) = self.controller.take() {
            tracing::debug!(phase = ?controller.phase(), "toast controller unmounted");
            controller.release(&mut lock(&self.state));
        }
    }

    #[must_use]
    pub fn controller(&self) -> Option<&Controller> {
        self.controller.as_ref()
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.controller.is_some()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        self.controller
            .as_ref()
            .map_or_else(Subscription::none, Controller::subscription)
    }

    /// Renders the toast overlay, empty when nothing is on screen.
    pub fn view(&self) -> Element<'_, Message> {
        super::widget::view_overlay(self.controller.as_ref())
    }
}

impl Drop for ToastProvider {
    fn drop(&mut self) {
        self.unmount();
    }
}

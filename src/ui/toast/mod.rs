// SPDX-License-Identifier: MPL-2.0
//! Single-slot toast notifications.
//!
//! One toast is on screen at a time. Callers request it through a
//! [`ToastDispatcher`]; the [`ToastProvider`] owns the shared state and the
//! [`Controller`] that animates the toast in, waits for the auto-dismiss
//! timer (or a close tap, or `hide_toast`), and animates it out.
//!
//! # Components
//!
//! - [`request`] - `ToastRequest` and `Category`
//! - [`provider`] - shared state, provider and dispatcher handle
//! - [`controller`] - the `Hidden → Entering → Visible → Exiting` state machine
//! - [`transition`] - eased presence interpolation (opacity + offset)
//! - [`widget`] - Iced rendering
//!
//! # Usage
//!
//! ```ignore
//! use iced_toast::ui::toast::{ToastProvider, ToastRequest, Category};
//!
//! // At the composition root
//! let mut toasts = ToastProvider::new(&config.toast);
//! let dispatcher = toasts.dispatcher();
//!
//! // Anywhere the dispatcher was passed
//! dispatcher.show_toast(ToastRequest::new("Saved").with_category(Category::Success))?;
//!
//! // After every message in `update`
//! toasts.sync(Instant::now());
//! ```
//!
//! # Timing
//!
//! - Entry/exit: 300ms ease-in-out by default
//! - Auto-dismiss: 3s by default, counted from the start of the entry
//! - A request made while the toast is leaving is shown once it has left

pub mod controller;
pub mod provider;
pub mod request;
pub mod transition;
pub mod widget;

pub use controller::{Controller, Effect, Message as ToastMessage, Phase};
pub use provider::{ToastDispatcher, ToastProvider, ToastVisibilityState};
pub use request::{Category, ToastRequest};

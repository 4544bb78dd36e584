// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern.
//!
//! - [`toast`] - Single-slot toast notifications and their provider
//! - [`voice_settings`] - Voice picker screen that reports actions as toasts
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod theming;
pub mod toast;
pub mod voice_settings;

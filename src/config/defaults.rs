// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Toast**: Auto-dismiss duration and entry/exit transition timing
//! - **Locales**: Location of the JSON locale catalogs

// ==========================================================================
// Toast Defaults
// ==========================================================================

/// Default time a toast stays up before auto-dismiss (in milliseconds).
pub const DEFAULT_TOAST_DURATION_MS: u64 = 3000;

/// Minimum configurable auto-dismiss duration (in milliseconds).
pub const MIN_TOAST_DURATION_MS: u64 = 500;

/// Maximum configurable auto-dismiss duration (in milliseconds).
pub const MAX_TOAST_DURATION_MS: u64 = 60_000;

/// Default length of the entry and exit transitions (in milliseconds).
pub const DEFAULT_TRANSITION_MS: u64 = 300;

/// Maximum configurable transition length (in milliseconds).
/// Zero disables the animation entirely.
pub const MAX_TRANSITION_MS: u64 = 2000;

// ==========================================================================
// Locale Defaults
// ==========================================================================

/// Directory scanned by `patch-locales` when none is given.
pub const DEFAULT_LOCALES_DIR: &str = "assets/locales";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_TOAST_DURATION_MS > 0);
    assert!(DEFAULT_TOAST_DURATION_MS >= MIN_TOAST_DURATION_MS);
    assert!(DEFAULT_TOAST_DURATION_MS <= MAX_TOAST_DURATION_MS);
    assert!(DEFAULT_TRANSITION_MS <= MAX_TRANSITION_MS);
};

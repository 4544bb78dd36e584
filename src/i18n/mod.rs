// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Locale files are nested JSON string maps embedded at build time from
//! `assets/locales/`. Strings are looked up by dotted key.
//!
//! # Features
//!
//! - Locale detection from CLI, config, or system settings
//! - `{{name}}` placeholder interpolation
//! - Fallback to `en-US` when a translation is missing

pub mod catalog;
pub mod translator;

pub use catalog::Catalog;
pub use translator::I18n;

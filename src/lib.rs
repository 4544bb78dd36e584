// SPDX-License-Identifier: MPL-2.0
//! `iced_toast` provides single-slot toast notifications for Iced
//! applications, a provider/dispatcher pair to raise them from anywhere in
//! the UI, and a maintenance tool that keeps JSON locale files in sync with
//! the keys the toasts use.

#![doc(html_root_url = "https://docs.rs/iced_toast/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod locale_patch;
pub mod logging;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;

// SPDX-License-Identifier: MPL-2.0
//! Toast request data: message, category and display duration.

use crate::config::DEFAULT_TOAST_DURATION_MS;
use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::Duration;

/// Category determines the icon and background color of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Category {
    /// Operation completed successfully (checkmark on green).
    #[default]
    Success,
    /// Something went wrong (alert on red).
    Error,
    /// Neutral information (info glyph on teal).
    Info,
}

impl Category {
    /// Returns the background color for this category.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Category::Success => palette::SUCCESS_500,
            Category::Error => palette::ERROR_500,
            Category::Info => palette::TEAL_500,
        }
    }

    /// Returns the glyph drawn in the icon slot.
    #[must_use]
    pub fn icon(self) -> char {
        match self {
            Category::Success => '\u{2714}', // heavy check mark
            Category::Error => '\u{26A0}',   // warning sign
            Category::Info => '\u{2139}',    // information source
        }
    }
}

/// One notification request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastRequest {
    message: String,
    category: Category,
    duration: Duration,
}

impl Default for ToastRequest {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl ToastRequest {
    /// Creates a success request with the default 3s duration.
    ///
    /// An empty message is accepted and renders as a blank toast.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            category: Category::default(),
            duration: Duration::from_millis(DEFAULT_TOAST_DURATION_MS),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message).with_category(Category::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message).with_category(Category::Error)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message).with_category(Category::Info)
    }

    #[must_use]
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    /// Sets the auto-dismiss duration.
    ///
    /// The timer starts when the entry transition starts, so a duration
    /// shorter than the transition makes the toast leave before it has
    /// fully arrived.
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl From<&str> for ToastRequest {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for ToastRequest {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use crate::ui::toast::ToastProvider;
use iced::Subscription;

/// Frames while the toast animates, a slow tick while its timer is armed,
/// nothing while it is hidden.
pub fn create_toast_subscription(toasts: &ToastProvider) -> Subscription<Message> {
    toasts.subscription().map(Message::Toast)
}

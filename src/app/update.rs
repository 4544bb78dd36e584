// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::Message;
use crate::i18n::I18n;
use crate::ui::toast::{Effect, ToastDispatcher, ToastMessage, ToastProvider};
use crate::ui::voice_settings::{self, Event as VoiceEvent};
use iced::Task;
use std::time::Instant;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub voice_settings: &'a mut voice_settings::State,
    pub toasts: &'a mut ToastProvider,
    pub dispatcher: &'a ToastDispatcher,
}

/// Routes one message, then lets the toast controller catch up with
/// whatever the handler requested.
pub fn update(ctx: &mut UpdateContext<'_>, message: Message) -> Task<Message> {
    let task = match message {
        Message::VoiceSettings(msg) => handle_voice_settings_message(ctx, msg),
        Message::Toast(msg) => handle_toast_message(ctx, &msg),
    };

    if let Some(effect) = ctx.toasts.sync(Instant::now()) {
        log_effect(effect);
    }
    task
}

fn handle_voice_settings_message(
    ctx: &mut UpdateContext<'_>,
    message: voice_settings::Message,
) -> Task<Message> {
    let update_ctx = voice_settings::UpdateContext {
        i18n: ctx.i18n,
        toasts: ctx.dispatcher,
    };

    match ctx.voice_settings.update(message, &update_ctx) {
        Ok(VoiceEvent::VoiceChanged(voice)) => {
            tracing::info!(?voice, "voice changed");
        }
        Ok(VoiceEvent::None) => {}
        Err(err) => {
            tracing::error!(%err, "toast request rejected");
            debug_assert!(false, "toast dispatcher misuse: {err}");
        }
    }
    Task::none()
}

fn handle_toast_message(ctx: &mut UpdateContext<'_>, message: &ToastMessage) -> Task<Message> {
    let now = match message {
        ToastMessage::Frame(at) | ToastMessage::Tick(at) => *at,
        ToastMessage::Close => Instant::now(),
    };
    if let Some(effect) = ctx.toasts.handle_message(message, now) {
        log_effect(effect);
    }
    Task::none()
}

fn log_effect(effect: Effect) {
    match effect {
        Effect::Hidden => tracing::debug!("toast hidden"),
    }
}

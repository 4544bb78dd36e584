// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The active screen is drawn underneath and the toast overlay is stacked
//! on top of it.

use super::Message;
use crate::i18n::I18n;
use crate::ui::toast::ToastProvider;
use crate::ui::voice_settings::{self, ViewContext as VoiceViewContext};
use iced::{
    widget::{stack, Container},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub voice_settings: &'a voice_settings::State,
    pub toasts: &'a ToastProvider,
}

/// Renders the current screen with the toast overlay above it.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let screen = ctx
        .voice_settings
        .view(VoiceViewContext { i18n: ctx.i18n })
        .map(Message::VoiceSettings);

    let overlay = ctx.toasts.view().map(Message::Toast);

    Container::new(stack![screen, overlay])
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

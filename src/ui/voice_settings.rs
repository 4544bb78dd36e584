// SPDX-License-Identifier: MPL-2.0
//! Voice picker screen.
//!
//! Lists the available voices and reports every action through the toast
//! dispatcher: a changed voice shows a success toast, re-selecting the
//! current voice an info toast, and the unavailable voice an error toast.

use crate::error::UsageError;
use crate::i18n::I18n;
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use crate::ui::toast::{Category, ToastDispatcher, ToastRequest};
use iced::{
    alignment::Horizontal,
    widget::{button, container, Column, Container, Row, Text},
    Border, Element, Length, Theme,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Voice {
    #[default]
    Aria,
    Milo,
    Sol,
}

impl Voice {
    pub const ALL: [Voice; 3] = [Voice::Aria, Voice::Milo, Voice::Sol];

    fn name_key(self) -> &'static str {
        match self {
            Voice::Aria => "voice.names.aria",
            Voice::Milo => "voice.names.milo",
            Voice::Sol => "voice.names.sol",
        }
    }
}

/// Contextual data needed to render the screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Dependencies the screen needs while handling a message.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub toasts: &'a ToastDispatcher,
}

#[derive(Debug, Clone)]
pub enum Message {
    Select(Voice),
    Preview(Voice),
    SelectUnavailable,
    HideToast,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    VoiceChanged(Voice),
}

#[derive(Debug, Clone, Default)]
pub struct State {
    selected: Voice,
}

impl State {
    #[must_use]
    pub fn new(selected: Voice) -> Self {
        Self { selected }
    }

    #[must_use]
    pub fn selected(&self) -> Voice {
        self.selected
    }

    /// Applies a message and requests the matching toast.
    ///
    /// # Errors
    ///
    /// Returns the dispatcher's [`UsageError`] when no provider is alive.
    pub fn update(&mut self, message: Message, ctx: &UpdateContext<'_>) -> Result<Event, UsageError> {
        match message {
            Message::Select(voice) if voice == self.selected => {
                ctx.toasts
                    .info(ctx.i18n.tr("voice.actions.voiceSelected"))?;
                Ok(Event::None)
            }
            Message::Select(voice) => {
                self.selected = voice;
                ctx.toasts.success(ctx.i18n.tr("voice.actions.success"))?;
                Ok(Event::VoiceChanged(voice))
            }
            Message::Preview(voice) => {
                let name = ctx.i18n.tr(voice.name_key());
                let text = ctx.i18n.tr_with_args("voice.preview", &[("voice", &name)]);
                ctx.toasts
                    .show_toast(ToastRequest::new(text).with_category(Category::Info))?;
                Ok(Event::None)
            }
            Message::SelectUnavailable => {
                ctx.toasts
                    .error(ctx.i18n.tr("voice.actions.errorSelectingVoice"))?;
                Ok(Event::None)
            }
            Message::HideToast => {
                ctx.toasts.hide_toast()?;
                Ok(Event::None)
            }
        }
    }

    #[must_use]
    #[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let i18n = ctx.i18n;
        let current_name = i18n.tr(self.selected.name_key());

        let title = Text::new(i18n.tr("voice.title")).size(typography::TITLE_MD);
        let subtitle = Text::new(i18n.tr("voice.subtitle")).size(typography::CAPTION);
        let current = Text::new(i18n.tr_with_args("voice.current", &[("voice", &current_name)]))
            .size(typography::BODY);

        let voices = Voice::ALL
            .into_iter()
            .fold(Column::new().spacing(spacing::XS), |column, voice| {
                column.push(self.voice_row(voice, i18n))
            });

        let unavailable = button(Text::new(i18n.tr("voice.buttons.broken")).size(typography::BODY))
            .on_press(Message::SelectUnavailable)
            .style(button::danger);
        let dismiss = button(Text::new(i18n.tr("voice.buttons.dismiss")).size(typography::BODY))
            .on_press(Message::HideToast)
            .style(button::secondary);
        let actions = Row::new()
            .spacing(spacing::SM)
            .push(unavailable)
            .push(dismiss);

        let content = Column::new()
            .width(Length::Fixed(sizing::VOICE_LIST_WIDTH))
            .spacing(spacing::MD)
            .push(title)
            .push(subtitle)
            .push(current)
            .push(voices)
            .push(actions);

        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .padding(spacing::LG)
            .into()
    }

    fn voice_row<'a>(&self, voice: Voice, i18n: &I18n) -> Element<'a, Message> {
        let is_selected = voice == self.selected;

        let select = button(Text::new(i18n.tr(voice.name_key())).size(typography::BODY))
            .width(Length::Fill)
            .on_press(Message::Select(voice))
            .style(move |theme: &Theme, status| {
                if is_selected {
                    button::primary(theme, status)
                } else {
                    button::text(theme, status)
                }
            });

        let preview = button(Text::new(i18n.tr("voice.buttons.preview")).size(typography::CAPTION))
            .on_press(Message::Preview(voice))
            .style(button::secondary);

        Container::new(
            Row::new()
                .spacing(spacing::SM)
                .push(select)
                .push(preview),
        )
        .padding(spacing::XXS)
        .style(move |theme: &Theme| row_style(theme, is_selected))
        .into()
    }
}

fn row_style(theme: &Theme, is_selected: bool) -> container::Style {
    let palette = theme.extended_palette();
    let border_color = if is_selected {
        palette.primary.base.color
    } else {
        palette.background.strong.color
    };

    container::Style {
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::SM.into(),
        },
        ..Default::default()
    }
}

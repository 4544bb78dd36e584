// SPDX-License-Identifier: MPL-2.0
//! Toast rendering.
//!
//! A toast is a pill of the category color holding an icon glyph, the
//! message and a close button. Opacity and vertical offset come from the
//! controller's sampled presence.

use super::controller::{Controller, Message};
use super::request::{Category, ToastRequest};
use crate::ui::design_tokens::{motion, opacity, palette, radius, shadow, sizing, spacing, typography};
use iced::widget::{button, container, text, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Padding, Theme};

/// Glyph used by the close button.
const CLOSE_GLYPH: &str = "\u{2715}";

/// Renders the overlay for the mounted controller, or an empty element.
pub fn view_overlay(controller: Option<&Controller>) -> Element<'_, Message> {
    let Some((controller, request)) =
        controller.and_then(|c| c.request().map(|request| (c, request)))
    else {
        return empty();
    };

    let top = (motion::TOAST_TOP_MARGIN + controller.offset()).max(0.0);

    Container::new(view_toast(request, controller.opacity()))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Top)
        .padding(Padding {
            top,
            ..Padding::ZERO
        })
        .into()
}

/// Renders a single toast at the given opacity.
pub fn view_toast(request: &ToastRequest, alpha: f32) -> Element<'_, Message> {
    let category = request.category();
    let foreground = faded(palette::WHITE, alpha);

    let icon = Text::new(category.icon().to_string())
        .size(sizing::ICON_MD)
        .style(move |_theme: &Theme| text::Style {
            color: Some(foreground),
        });

    let message = Text::new(request.message())
        .size(typography::BODY)
        .style(move |_theme: &Theme| text::Style {
            color: Some(foreground),
        });

    let close = button(Text::new(CLOSE_GLYPH).size(sizing::ICON_SM))
        .on_press(Message::Close)
        .padding(spacing::XXS)
        .style(move |theme: &Theme, status| close_button_style(theme, status, alpha));

    let content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Container::new(icon).padding(spacing::XXS))
        .push(
            Container::new(message)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Left),
        )
        .push(close);

    Container::new(content)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(move |_theme: &Theme| toast_container_style(category, alpha))
        .into()
}

fn empty<'a>() -> Element<'a, Message> {
    Container::new(text(""))
        .width(Length::Shrink)
        .height(Length::Shrink)
        .into()
}

fn faded(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha.clamp(opacity::TRANSPARENT, opacity::OPAQUE),
        ..color
    }
}

/// Style function for the toast body.
fn toast_container_style(category: Category, alpha: f32) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(faded(category.color(), alpha))),
        border: iced::Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: radius::MD.into(),
        },
        shadow: iced::Shadow {
            color: faded(Color { a: opacity::OVERLAY_MEDIUM, ..palette::BLACK }, alpha),
            ..shadow::MD
        },
        text_color: Some(faded(palette::WHITE, alpha)),
        ..Default::default()
    }
}

/// Style function for the close button.
fn close_button_style(_theme: &Theme, status: button::Status, alpha: f32) -> button::Style {
    let text_color = faded(palette::WHITE, alpha);
    let hover_background = |strength: f32| {
        Some(iced::Background::Color(faded(
            Color {
                a: strength,
                ..palette::GRAY_400
            },
            alpha,
        )))
    };

    let (background, text_color) = match status {
        button::Status::Active => (None, text_color),
        button::Status::Hovered => (hover_background(opacity::OVERLAY_SUBTLE), text_color),
        button::Status::Pressed => (hover_background(opacity::OVERLAY_MEDIUM), text_color),
        button::Status::Disabled => (
            None,
            Color {
                a: text_color.a * opacity::OVERLAY_MEDIUM,
                ..text_color
            },
        ),
    };

    button::Style {
        background,
        text_color,
        border: iced::Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};

    #[test]
    fn container_style_uses_category_color() {
        let style = toast_container_style(Category::Error, 1.0);
        assert_eq!(
            style.background,
            Some(iced::Background::Color(palette::ERROR_500))
        );
    }

    #[test]
    fn container_fades_with_presence() {
        let style = toast_container_style(Category::Info, 0.25);
        match style.background {
            Some(iced::Background::Color(color)) => {
                assert_abs_diff_eq!(color.a, 0.25, epsilon = F32_EPSILON);
            }
            other => panic!("expected solid background, got {other:?}"),
        }
    }

    #[test]
    fn close_button_hover_is_visible() {
        let theme = Theme::Dark;
        let active = close_button_style(&theme, button::Status::Active, 1.0);
        let hovered = close_button_style(&theme, button::Status::Hovered, 1.0);
        assert!(active.background.is_none());
        assert!(hovered.background.is_some());
    }

    #[test]
    fn views_build_for_every_category() {
        for request in [
            ToastRequest::success("ok"),
            ToastRequest::error("bad"),
            ToastRequest::info(""),
        ] {
            let _ = view_toast(&request, 0.5);
        }
        let _ = view_overlay(None);
    }
}

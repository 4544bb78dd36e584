// SPDX-License-Identifier: MPL-2.0
//! Application root state.
//!
//! `App` is the composition root: it owns the [`ToastProvider`] and hands a
//! [`ToastDispatcher`] to the screens that raise toasts. Every message is
//! followed by a provider sync so toast requests made while handling it are
//! picked up in the same update.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::i18n::I18n;
use crate::ui::theming::ThemeMode;
use crate::ui::toast::{Category, ToastDispatcher, ToastProvider, ToastRequest};
use crate::ui::voice_settings;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    voice_settings: voice_settings::State,
    theme_mode: ThemeMode,
    toasts: ToastProvider,
    dispatcher: ToastDispatcher,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("voice", &self.voice_settings.selected())
            .field("toast", &self.toasts.controller().map(|c| c.phase()))
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 560;
pub const WINDOW_DEFAULT_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 420;
pub const MIN_WINDOW_WIDTH: u32 = 400;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot closure; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self::with_config(I18n::default(), &config::Config::default())
    }
}

impl App {
    fn with_config(i18n: I18n, config: &config::Config) -> Self {
        let toasts = ToastProvider::new(&config.toast);
        let dispatcher = toasts.dispatcher();
        Self {
            i18n,
            voice_settings: voice_settings::State::default(),
            theme_mode: config.general.theme_mode,
            toasts,
            dispatcher,
        }
    }

    /// Loads config and locale, then reports a config problem as a toast.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, &config);
        let mut app = Self::with_config(i18n, &config);

        if let Some(key) = config_warning {
            let request = ToastRequest::new(app.i18n.tr(&key)).with_category(Category::Error);
            if let Err(err) = app.dispatcher.show_toast(request) {
                tracing::error!(%err, "could not report config warning");
            }
            app.toasts.sync(Instant::now());
        }

        tracing::info!(locale = %app.i18n.current_locale(), "application started");
        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("app.title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.to_iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_toast_subscription(&self.toasts)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &self.i18n,
            voice_settings: &mut self.voice_settings,
            toasts: &mut self.toasts,
            dispatcher: &self.dispatcher,
        };
        update::update(&mut ctx, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            voice_settings: &self.voice_settings,
            toasts: &self.toasts,
        })
    }
}

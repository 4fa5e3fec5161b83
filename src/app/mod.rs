// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the page components.
//!
//! The `App` struct wires together the page components (navigation, scroll
//! effects, forms, notifications) and translates their events into side
//! effects like toasts, dialogs, clipboard writes, and the mail-client
//! handoff. This file intentionally keeps policy decisions (window sizing,
//! which side effect answers which event) close to the main update loop so it
//! is easy to audit user-facing behavior.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::i18n::fluent::I18n;
use crate::mail;
use crate::ui::notifications::Presenter;
use crate::ui::theming::ThemeMode;
use crate::ui::{contact_form, copy_button, effects, hero, quote_form};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const MIN_WINDOW_WIDTH: u32 = 800;
pub const MIN_WINDOW_HEIGHT: u32 = 650;

/// Root Iced application state bridging the page components, localization,
/// and persisted preferences.
pub struct App {
    pub i18n: I18n,
    theme_mode: ThemeMode,
    /// Whether the hamburger menu is open.
    menu_open: bool,
    /// Scroll-derived animation state.
    effects: effects::State,
    /// The hero headline animation.
    typewriter: hero::Typewriter,
    /// Toast presenter owning the live notification.
    notifications: Presenter,
    contact: contact_form::State,
    quote: quote_form::State,
    copy_email: copy_button::State,
    /// Card currently under the pointer, for the hover lift.
    hovered_card: Option<crate::content::CardId>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("menu_open", &self.menu_open)
            .field("has_toast", &self.notifications.has_toast())
            .field("submitting", &self.contact.is_submitting())
            .finish()
    }
}

/// Id of the page scrollable, shared between the view and the scroll tasks.
pub fn page_scroll_id() -> iced::widget::Id {
    iced::widget::Id::new("portfolio-page")
}

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

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(|state: &App| state.title())
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from persisted preferences and startup
    /// flags.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let i18n = I18n::new(flags.lang, &config);
        let reduce_motion = config.reduce_motion.unwrap_or(false);

        let mut typewriter = hero::Typewriter::new(reduce_motion);
        typewriter.start(Instant::now());

        let copy_email = copy_button::State::new(
            mail::RECIPIENT,
            i18n.tr("contact-copy-button"),
            i18n.tr("contact-copied-label"),
        );

        let app = App {
            i18n,
            theme_mode: config.theme_mode,
            menu_open: false,
            effects: effects::State::new(reduce_motion),
            typewriter,
            notifications: Presenter::new(),
            contact: contact_form::State::default(),
            quote: quote_form::State::default(),
            copy_email,
            hovered_card: None,
        };

        tracing::info!("portfolio page loaded");
        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.resolve()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::subscription(self)
    }
}

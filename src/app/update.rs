// SPDX-License-Identifier: MPL-2.0
//! Message handling for the application.
//!
//! Every side effect lives here: scroll tasks, toasts, blocking dialogs, the
//! clipboard fallback, and the mail-client handoff. Components only report
//! events; this loop decides what they mean for the user. Errors never leave
//! this module: each one is answered at its detection point with a toast, a
//! dialog, or a log line.

use super::{page_scroll_id, App, Message};
use crate::clipboard::SystemClipboard;
use crate::content::{layout, Section};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::ui::notifications::Toast;
use crate::ui::{contact_form, copy_button, hero, navbar, quote_form};
use iced::widget::operation;
use iced::widget::scrollable::AbsoluteOffset;
use iced::Task;
use std::time::Instant;

pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Navbar(m) => match navbar::update(m, &mut app.menu_open) {
            navbar::Event::None => Task::none(),
            navbar::Event::ScrollToSection(section) => scroll_to_section(section),
        },

        Message::Hero(hero::Message::Navigate(section)) => scroll_to_section(section),

        Message::PageScrolled(viewport) => {
            let offset = viewport.absolute_offset();
            app.effects.on_scroll(offset.y, viewport.bounds().height);
            Task::none()
        }

        Message::BackToTop => {
            operation::scroll_to(page_scroll_id(), AbsoluteOffset { x: 0.0, y: 0.0 })
        }

        Message::CardHovered(card) => {
            app.hovered_card = card;
            Task::none()
        }

        Message::Tick(now) => {
            app.typewriter.tick(now);
            app.effects.tick(now);
            app.notifications.tick(now);
            app.copy_email.tick(now);
            if let contact_form::Event::Notify {
                severity,
                message_key,
            } = contact_form::tick(&mut app.contact, now)
            {
                app.notifications
                    .notify(Toast::new(severity, message_key, now));
            }
            Task::none()
        }

        Message::Toast(m) => {
            app.notifications.handle_message(&m, Instant::now());
            Task::none()
        }

        Message::Contact(m) => {
            let now = Instant::now();
            match contact_form::update(&mut app.contact, m, now) {
                contact_form::Event::None => {}
                contact_form::Event::Notify {
                    severity,
                    message_key,
                } => {
                    app.notifications
                        .notify(Toast::new(severity, message_key, now));
                }
                contact_form::Event::LaunchMail(uri) => {
                    launch_mail(app, &uri);
                }
            }
            Task::none()
        }

        Message::Quote(m) => {
            match quote_form::update(&mut app.quote, m) {
                quote_form::Event::None => {}
                quote_form::Event::MissingFields(missing) => {
                    tracing::warn!(?missing, "quote request rejected");
                    show_missing_fields_alert(&app.i18n, &missing);
                }
                quote_form::Event::LaunchMail(uri) => {
                    if launch_mail(app, &uri) {
                        show_quote_confirmation(&app.i18n);
                    }
                }
            }
            Task::none()
        }

        Message::CopyEmail(copy_button::Message::Pressed) => {
            let now = Instant::now();
            match app
                .copy_email
                .attempt(&mut SystemClipboard, true, now)
            {
                copy_button::Event::None => Task::none(),
                copy_button::Event::RuntimeCopy(text) => iced::clipboard::write(text),
                copy_button::Event::ManualCopy(text) => {
                    show_manual_copy_alert(&app.i18n, &text);
                    Task::none()
                }
            }
        }
    }
}

/// Smooth-scrolls the page so the section heading lands below the fixed bar.
fn scroll_to_section(section: Section) -> Task<Message> {
    let y = (section.top() - layout::NAVBAR_HEIGHT).max(0.0);
    operation::scroll_to(page_scroll_id(), AbsoluteOffset { x: 0.0, y })
}

/// Hands a `mailto:` URI to the OS mail handler. Returns whether the launch
/// was accepted; failure surfaces as an error toast.
fn launch_mail(app: &mut App, uri: &str) -> bool {
    match open::that(uri).map_err(|err| Error::Mail(err.to_string())) {
        Ok(()) => {
            tracing::info!("mail client launched");
            true
        }
        Err(err) => {
            tracing::error!(error = %err, "failed to launch the mail client");
            app.notifications.notify(Toast::error(
                "notification-mail-failed",
                Instant::now(),
            ));
            false
        }
    }
}

/// Blocking dialog listing every blank quote field in one report.
fn show_missing_fields_alert(i18n: &I18n, missing: &[&'static str]) {
    let fields = missing.join(", ");
    rfd::MessageDialog::new()
        .set_level(rfd::MessageLevel::Warning)
        .set_title(i18n.tr("quote-missing-title"))
        .set_description(i18n.tr_with_args("quote-missing-body", &[("fields", &fields)]))
        .show();
}

/// Blocking dialog confirming the mail client should now be open.
fn show_quote_confirmation(i18n: &I18n) {
    rfd::MessageDialog::new()
        .set_level(rfd::MessageLevel::Info)
        .set_title(i18n.tr("quote-sent-title"))
        .set_description(i18n.tr("quote-sent-body"))
        .show();
}

/// Terminal copy fallback: a blocking dialog carrying the address verbatim.
fn show_manual_copy_alert(i18n: &I18n, text: &str) {
    rfd::MessageDialog::new()
        .set_level(rfd::MessageLevel::Error)
        .set_title(i18n.tr("copy-manual-title"))
        .set_description(i18n.tr_with_args("copy-manual-body", &[("address", text)]))
        .show();
}

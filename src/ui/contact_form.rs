// SPDX-License-Identifier: MPL-2.0
//! Contact form with validation and a simulated submission.
//!
//! The form has two states: `Idle` and `Submitting`. A submission intent
//! first validates presence of name, email, and message plus the email
//! format; failure emits an error toast and leaves the state untouched.
//! An accepted submission disables the control for a fixed simulated latency,
//! then clears the fields and emits a success toast. Nothing is transmitted
//! anywhere: the latency is a deliberate, deterministic mock.
//!
//! A secondary affordance hands the same fields to the inquiry composer and
//! opens the user's mail client instead.

use crate::i18n::fluent::I18n;
use crate::mail::{self, Inquiry};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::notifications::Severity;
use crate::ui::styles;
use iced::{
    alignment::Horizontal,
    widget::{button, text_input, Column, Container, Row, Text},
    Element, Length,
};
use std::time::{Duration, Instant};

/// Fixed simulated submission latency.
pub const SUBMIT_LATENCY: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    Idle,
    Submitting { since: Instant },
}

/// Form fields plus the submission state machine.
#[derive(Debug)]
pub struct State {
    pub name: String,
    pub email: String,
    pub project: String,
    pub message: String,
    status: Status,
}

impl Default for State {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            project: String::new(),
            message: String::new(),
            status: Status::Idle,
        }
    }
}

/// Messages emitted by the contact form.
#[derive(Debug, Clone)]
pub enum Message {
    NameChanged(String),
    EmailChanged(String),
    ProjectChanged(String),
    MessageChanged(String),
    Submit,
    OpenMailClient,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// Show a toast with the given severity and message key.
    Notify {
        severity: Severity,
        message_key: &'static str,
    },
    /// Hand the given `mailto:` URI to the OS mail handler.
    LaunchMail(String),
}

impl State {
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        matches!(self.status, Status::Submitting { .. })
    }

    fn has_required_fields(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.message.trim().is_empty()
    }

    fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.project.clear();
        self.message.clear();
    }
}

/// Process a contact-form message and return the corresponding event.
pub fn update(state: &mut State, message: Message, now: Instant) -> Event {
    match message {
        Message::NameChanged(value) => {
            state.name = value;
            Event::None
        }
        Message::EmailChanged(value) => {
            state.email = value;
            Event::None
        }
        Message::ProjectChanged(value) => {
            state.project = value;
            Event::None
        }
        Message::MessageChanged(value) => {
            state.message = value;
            Event::None
        }
        Message::Submit => submit(state, now),
        Message::OpenMailClient => open_mail_client(state),
    }
}

fn submit(state: &mut State, now: Instant) -> Event {
    // The control is disabled while submitting, but a queued message could
    // still land here; a second submission must not restart the latency.
    if state.is_submitting() {
        return Event::None;
    }

    if !state.has_required_fields() {
        return Event::Notify {
            severity: Severity::Error,
            message_key: "notification-contact-missing",
        };
    }

    if !mail::is_valid_email(&state.email) {
        return Event::Notify {
            severity: Severity::Error,
            message_key: "notification-contact-invalid-email",
        };
    }

    state.status = Status::Submitting { since: now };
    tracing::info!("contact form submission started (simulated)");
    Event::None
}

fn open_mail_client(state: &State) -> Event {
    if !state.has_required_fields() {
        return Event::Notify {
            severity: Severity::Error,
            message_key: "notification-contact-missing",
        };
    }

    let inquiry = Inquiry {
        name: state.name.clone(),
        email: state.email.clone(),
        project: state.project.clone(),
        message: state.message.clone(),
    };
    Event::LaunchMail(inquiry.to_mailto())
}

/// Advances the simulated submission. After the latency elapses the form
/// returns to `Idle`, the fields clear, and a success toast is requested.
pub fn tick(state: &mut State, now: Instant) -> Event {
    if let Status::Submitting { since } = state.status {
        if now.duration_since(since) >= SUBMIT_LATENCY {
            state.status = Status::Idle;
            state.clear();
            tracing::info!("contact form submission completed (simulated)");
            return Event::Notify {
                severity: Severity::Success,
                message_key: "notification-contact-success",
            };
        }
    }
    Event::None
}

/// Render the contact form.
pub fn view<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let title = Text::new(i18n.tr("contact-title")).size(typography::TITLE);
    let lead = Text::new(i18n.tr("contact-lead")).size(typography::BODY);

    let name = text_input(&i18n.tr("contact-name-placeholder"), &state.name)
        .on_input(Message::NameChanged)
        .padding(spacing::SM);
    let email = text_input(&i18n.tr("contact-email-placeholder"), &state.email)
        .on_input(Message::EmailChanged)
        .padding(spacing::SM);
    let project = text_input(&i18n.tr("contact-project-placeholder"), &state.project)
        .on_input(Message::ProjectChanged)
        .padding(spacing::SM);
    let message = text_input(&i18n.tr("contact-message-placeholder"), &state.message)
        .on_input(Message::MessageChanged)
        .padding(spacing::SM);

    let submit_label = if state.is_submitting() {
        i18n.tr("contact-submitting")
    } else {
        i18n.tr("contact-submit")
    };
    let mut submit = button(Text::new(submit_label))
        .padding([spacing::SM, spacing::LG])
        .style(styles::button::primary);
    if !state.is_submitting() {
        submit = submit.on_press(Message::Submit);
    }

    let open_mail = button(Text::new(i18n.tr("contact-open-mail")))
        .on_press(Message::OpenMailClient)
        .padding([spacing::SM, spacing::LG])
        .style(styles::button::nav_link);

    let actions = Row::new().spacing(spacing::MD).push(submit).push(open_mail);

    let form = Column::new()
        .spacing(spacing::MD)
        .max_width(sizing::FORM_WIDTH)
        .push(title)
        .push(lead)
        .push(name)
        .push(email)
        .push(project)
        .push(message)
        .push(actions);

    Container::new(form).width(Length::Fill).align_x(Horizontal::Center).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_state() -> State {
        State {
            name: "Sam".into(),
            email: "sam@example.com".into(),
            project: "Portfolio".into(),
            message: "Hello there".into(),
            ..State::default()
        }
    }

    #[test]
    fn valid_submission_enters_submitting() {
        let mut state = filled_state();
        let event = update(&mut state, Message::Submit, Instant::now());
        assert!(matches!(event, Event::None));
        assert!(state.is_submitting());
    }

    #[test]
    fn missing_message_blocks_submission_with_error_toast() {
        let mut state = filled_state();
        state.message.clear();

        let event = update(&mut state, Message::Submit, Instant::now());
        assert!(matches!(
            event,
            Event::Notify {
                severity: Severity::Error,
                message_key: "notification-contact-missing",
            }
        ));
        assert!(!state.is_submitting());
    }

    #[test]
    fn malformed_email_blocks_submission_with_error_toast() {
        let mut state = filled_state();
        state.email = "sam@example".into();

        let event = update(&mut state, Message::Submit, Instant::now());
        assert!(matches!(
            event,
            Event::Notify {
                severity: Severity::Error,
                message_key: "notification-contact-invalid-email",
            }
        ));
        assert!(!state.is_submitting());
    }

    #[test]
    fn submission_completes_after_the_latency() {
        let t0 = Instant::now();
        let mut state = filled_state();
        update(&mut state, Message::Submit, t0);

        // Still pending just before the deadline.
        let event = tick(&mut state, t0 + SUBMIT_LATENCY - Duration::from_millis(1));
        assert!(matches!(event, Event::None));
        assert!(state.is_submitting());

        let event = tick(&mut state, t0 + SUBMIT_LATENCY);
        assert!(matches!(
            event,
            Event::Notify {
                severity: Severity::Success,
                message_key: "notification-contact-success",
            }
        ));
        assert!(!state.is_submitting());
        assert!(state.name.is_empty());
        assert!(state.email.is_empty());
        assert!(state.project.is_empty());
        assert!(state.message.is_empty());
    }

    #[test]
    fn completion_fires_exactly_once() {
        let t0 = Instant::now();
        let mut state = filled_state();
        update(&mut state, Message::Submit, t0);

        let first = tick(&mut state, t0 + SUBMIT_LATENCY);
        assert!(matches!(first, Event::Notify { .. }));
        let second = tick(&mut state, t0 + SUBMIT_LATENCY * 2);
        assert!(matches!(second, Event::None));
    }

    #[test]
    fn resubmission_while_pending_does_not_restart_the_latency() {
        let t0 = Instant::now();
        let mut state = filled_state();
        update(&mut state, Message::Submit, t0);
        update(&mut state, Message::Submit, t0 + Duration::from_millis(500));

        // Completion still happens at the original deadline.
        let event = tick(&mut state, t0 + SUBMIT_LATENCY);
        assert!(matches!(event, Event::Notify { .. }));
    }

    #[test]
    fn open_mail_client_builds_an_inquiry_link() {
        let mut state = filled_state();
        let event = update(&mut state, Message::OpenMailClient, Instant::now());
        match event {
            Event::LaunchMail(uri) => {
                assert!(uri.starts_with(&format!("mailto:{}?", mail::RECIPIENT)));
                assert!(uri.contains("Website%20Inquiry%20from%20Sam"));
            }
            other => panic!("expected LaunchMail, got {other:?}"),
        }
        // The mail-client path never clears fields.
        assert_eq!(state.name, "Sam");
    }

    #[test]
    fn open_mail_client_requires_the_same_fields() {
        let mut state = filled_state();
        state.email.clear();
        let event = update(&mut state, Message::OpenMailClient, Instant::now());
        assert!(matches!(
            event,
            Event::Notify {
                severity: Severity::Error,
                ..
            }
        ));
    }

    #[test]
    fn view_renders_in_both_states() {
        let i18n = I18n::default();
        let mut state = filled_state();
        let _ = view(&state, &i18n);

        update(&mut state, Message::Submit, Instant::now());
        let _ = view(&state, &i18n);
    }
}

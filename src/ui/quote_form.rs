// SPDX-License-Identifier: MPL-2.0
//! Quote request form handing off to the mail client.
//!
//! Unlike the contact form there is no simulated submission here: a complete
//! form becomes a [`crate::mail::QuoteRequest`] and the resulting `mailto:`
//! URI is handed to the OS. An incomplete form reports every blank field in
//! one pass, so the missing-field dialog never plays whack-a-mole.

use crate::i18n::fluent::I18n;
use crate::mail::QuoteRequest;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Horizontal,
    widget::{button, pick_list, text_input, Column, Container, Text},
    Element, Length,
};

/// Service types offered on the quote form.
pub const SERVICE_OPTIONS: [&str; 5] = [
    "Business Website",
    "E-commerce Store",
    "Portfolio Site",
    "Landing Page",
    "Web Application",
];

/// Delivery timelines offered on the quote form.
pub const TIMELINE_OPTIONS: [&str; 4] = ["ASAP", "2-4 weeks", "1-2 months", "Flexible"];

/// Quote form fields. The pick lists stay `None` until the user chooses,
/// which reads as a blank required field at submission time.
#[derive(Debug, Default)]
pub struct State {
    pub name: String,
    pub email: String,
    pub service: Option<&'static str>,
    pub timeline: Option<&'static str>,
    pub description: String,
}

/// Messages emitted by the quote form.
#[derive(Debug, Clone)]
pub enum Message {
    NameChanged(String),
    EmailChanged(String),
    ServicePicked(&'static str),
    TimelinePicked(&'static str),
    DescriptionChanged(String),
    Submit,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// Every required field still blank, reported jointly.
    MissingFields(Vec<&'static str>),
    /// Hand the given `mailto:` URI to the OS mail handler.
    LaunchMail(String),
}

impl State {
    fn to_request(&self) -> QuoteRequest {
        QuoteRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            service: self.service.unwrap_or_default().to_owned(),
            timeline: self.timeline.unwrap_or_default().to_owned(),
            description: self.description.clone(),
        }
    }
}

/// Process a quote-form message and return the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::NameChanged(value) => {
            state.name = value;
            Event::None
        }
        Message::EmailChanged(value) => {
            state.email = value;
            Event::None
        }
        Message::ServicePicked(value) => {
            state.service = Some(value);
            Event::None
        }
        Message::TimelinePicked(value) => {
            state.timeline = Some(value);
            Event::None
        }
        Message::DescriptionChanged(value) => {
            state.description = value;
            Event::None
        }
        Message::Submit => {
            let request = state.to_request();
            let missing = request.missing_fields();
            if missing.is_empty() {
                Event::LaunchMail(request.to_mailto())
            } else {
                Event::MissingFields(missing)
            }
        }
    }
}

/// Render the quote form.
pub fn view<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let title = Text::new(i18n.tr("quote-title")).size(typography::TITLE);
    let lead = Text::new(i18n.tr("quote-lead")).size(typography::BODY);

    let name = text_input(&i18n.tr("quote-name-placeholder"), &state.name)
        .on_input(Message::NameChanged)
        .padding(spacing::SM);
    let email = text_input(&i18n.tr("quote-email-placeholder"), &state.email)
        .on_input(Message::EmailChanged)
        .padding(spacing::SM);

    let service = pick_list(SERVICE_OPTIONS, state.service, Message::ServicePicked)
        .placeholder(i18n.tr("quote-service-placeholder"))
        .padding(spacing::SM)
        .width(Length::Fill);
    let timeline = pick_list(TIMELINE_OPTIONS, state.timeline, Message::TimelinePicked)
        .placeholder(i18n.tr("quote-timeline-placeholder"))
        .padding(spacing::SM)
        .width(Length::Fill);

    let description = text_input(&i18n.tr("quote-description-placeholder"), &state.description)
        .on_input(Message::DescriptionChanged)
        .padding(spacing::SM);

    let submit = button(Text::new(i18n.tr("quote-submit")))
        .on_press(Message::Submit)
        .padding([spacing::SM, spacing::LG])
        .style(styles::button::primary);

    let form = Column::new()
        .spacing(spacing::MD)
        .max_width(sizing::FORM_WIDTH)
        .push(title)
        .push(lead)
        .push(name)
        .push(email)
        .push(service)
        .push(timeline)
        .push(description)
        .push(submit);

    Container::new(form).width(Length::Fill).align_x(Horizontal::Center).into()
}

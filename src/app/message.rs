// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and startup flags.

use crate::ui::{contact_form, copy_button, hero, navbar, notifications, quote_form};
use iced::widget::scrollable;
use std::time::Instant;

/// Top-level messages consumed by the update loop. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Hero(hero::Message),
    Contact(contact_form::Message),
    Quote(quote_form::Message),
    CopyEmail(copy_button::Message),
    Toast(notifications::Message),
    /// The page scrollable moved; carries the new viewport.
    PageScrolled(scrollable::Viewport),
    /// The floating back-to-top affordance was activated.
    BackToTop,
    /// A card gained or lost the pointer.
    CardHovered(Option<crate::content::CardId>),
    /// Periodic tick driving every timed state machine.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
}

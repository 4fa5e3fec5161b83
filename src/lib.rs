// SPDX-License-Identifier: MPL-2.0
//! `iced_folio` is a personal portfolio application built with the Iced GUI framework.
//!
//! It renders a single scrolling page (hero, about, services, portfolio,
//! contact) and implements the page's interactivity layer: navigation,
//! scroll-triggered effects, toast notifications, a contact form with a
//! simulated submission, two `mailto:` composers, and a clipboard-copy
//! utility with an ordered fallback chain. It also demonstrates
//! internationalization with Fluent, user preference management, and modular
//! UI design.

pub mod app;
pub mod clipboard;
pub mod config;
pub mod content;
pub mod error;
pub mod i18n;
pub mod mail;
pub mod ui;

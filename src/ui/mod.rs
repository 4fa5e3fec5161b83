// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Page components
//!
//! - [`navbar`] - Fixed navigation bar with hamburger menu and scrolled styling
//! - [`hero`] - Landing section with the typewriter headline
//! - [`effects`] - Scroll-derived one-shot reveals, counters, stagger, parallax
//! - [`contact_form`] - Contact form with validation and a simulated submission
//! - [`quote_form`] - Quote request form handing off to the mail client
//! - [`copy_button`] - Clipboard-copy button with timed feedback
//! - [`notifications`] - Toast notification system for user feedback
//!
//! # Shared infrastructure
//!
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - Glyph helpers for the handful of symbols the page uses

pub mod contact_form;
pub mod copy_button;
pub mod design_tokens;
pub mod effects;
pub mod hero;
pub mod icons;
pub mod navbar;
pub mod notifications;
pub mod quote_form;
pub mod styles;
pub mod theming;

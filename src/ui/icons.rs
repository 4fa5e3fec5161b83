// SPDX-License-Identifier: MPL-2.0
//! Glyph helpers for the handful of symbols the page uses.
//!
//! The page needs only a few simple marks, so these are text glyphs rather
//! than image assets; they render consistently across platforms and inherit
//! the surrounding text color.
//!
//! Icons use generic visual names describing the glyph's appearance,
//! not the action context (e.g., `cross` not `dismiss_toast`).

use iced::widget::{text, Text};

pub fn checkmark<'a>() -> Text<'a> {
    text("✓")
}

pub fn warning<'a>() -> Text<'a> {
    text("⚠")
}

pub fn cross<'a>() -> Text<'a> {
    text("×")
}

pub fn menu<'a>() -> Text<'a> {
    text("☰")
}

pub fn arrow_up<'a>() -> Text<'a> {
    text("↑")
}

/// Applies a fixed size to a glyph.
pub fn sized(glyph: Text<'_>, size: f32) -> Text<'_> {
    glyph.size(size)
}

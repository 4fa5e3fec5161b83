// SPDX-License-Identifier: MPL-2.0
//! Clipboard-copy button with timed feedback.
//!
//! On a successful copy the button swaps its label and its three
//! imperatively-set colors to the "Copied" state, holds them for a fixed
//! window, then restores the exact prior snapshot field-for-field. The
//! snapshot is captured once: re-copying inside the window only refreshes the
//! deadline, so the restored state can never be the feedback state itself.
//!
//! The strategy chain lives in [`State::attempt`]: the direct platform
//! clipboard first, then the windowing runtime's clipboard, then a
//! manual-copy prompt carrying the text verbatim.

use crate::clipboard::Strategy;
use crate::ui::design_tokens::{copy_feedback, palette, spacing, typography};
use crate::ui::styles;
use iced::{
    widget::{button, Text},
    Color, Element,
};
use std::time::{Duration, Instant};

/// How long the "Copied" state is held before restoring the snapshot.
pub const FEEDBACK_DURATION: Duration = Duration::from_millis(2000);

/// The button's imperatively-set colors. Swapped and restored as a unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonPalette {
    pub background: Color,
    pub text: Color,
    pub border: Color,
}

impl ButtonPalette {
    /// Resting look of the copy button.
    #[must_use]
    pub fn resting() -> Self {
        Self {
            background: palette::WHITE,
            text: palette::GRAY_900,
            border: palette::GRAY_200,
        }
    }

    /// The "Copied" look.
    #[must_use]
    pub fn feedback() -> Self {
        Self {
            background: copy_feedback::BACKGROUND,
            text: copy_feedback::TEXT,
            border: copy_feedback::BORDER,
        }
    }
}

/// Exact state captured before feedback and restored after it.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub label: String,
    pub palette: ButtonPalette,
}

#[derive(Debug)]
struct Feedback {
    snapshot: Snapshot,
    since: Instant,
}

/// Copy button state: the text it copies, its current presentation, and the
/// feedback window if one is active.
#[derive(Debug)]
pub struct State {
    text: String,
    label: String,
    copied_label: String,
    palette: ButtonPalette,
    feedback: Option<Feedback>,
}

/// Messages emitted by the copy button.
#[derive(Debug, Clone)]
pub enum Message {
    Pressed,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// The direct strategy failed; write the text through the runtime clipboard.
    RuntimeCopy(String),
    /// Every strategy failed; show a manual-copy prompt with this text.
    ManualCopy(String),
}

impl State {
    /// Creates a button that copies `text`, labeled `label`, showing
    /// `copied_label` during feedback.
    pub fn new(
        text: impl Into<String>,
        label: impl Into<String>,
        copied_label: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            label: label.into(),
            copied_label: copied_label.into(),
            palette: ButtonPalette::resting(),
            feedback: None,
        }
    }

    /// The text this button copies.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The label currently shown on the button.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The colors currently shown on the button.
    #[must_use]
    pub fn palette(&self) -> ButtonPalette {
        self.palette
    }

    #[must_use]
    pub fn is_feedback_active(&self) -> bool {
        self.feedback.is_some()
    }

    /// Captures the current presentation.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            label: self.label.clone(),
            palette: self.palette,
        }
    }

    /// Runs the copy chain. The direct strategy always goes first; only its
    /// failure consults the runtime clipboard; only the absence of both ends
    /// in the manual prompt.
    pub fn attempt(
        &mut self,
        strategy: &mut dyn Strategy,
        runtime_available: bool,
        now: Instant,
    ) -> Event {
        tracing::info!("attempting to copy the contact address");
        match strategy.copy(&self.text) {
            Ok(()) => {
                tracing::info!("direct clipboard copy succeeded");
                self.begin_feedback(now);
                Event::None
            }
            Err(err) => {
                tracing::warn!(error = %err, "direct clipboard copy failed");
                if runtime_available {
                    tracing::info!("falling back to the runtime clipboard");
                    self.begin_feedback(now);
                    Event::RuntimeCopy(self.text.clone())
                } else {
                    tracing::error!("all copy strategies exhausted");
                    Event::ManualCopy(self.text.clone())
                }
            }
        }
    }

    fn begin_feedback(&mut self, now: Instant) {
        match &mut self.feedback {
            // A copy inside the window only refreshes the deadline; the
            // original snapshot must survive.
            Some(feedback) => feedback.since = now,
            None => {
                let snapshot = self.snapshot();
                self.label = self.copied_label.clone();
                self.palette = ButtonPalette::feedback();
                self.feedback = Some(Feedback { snapshot, since: now });
            }
        }
    }

    /// Restores the snapshot once the feedback window has elapsed.
    pub fn tick(&mut self, now: Instant) {
        let expired = self
            .feedback
            .as_ref()
            .is_some_and(|feedback| now.duration_since(feedback.since) >= FEEDBACK_DURATION);
        if expired {
            let Feedback { snapshot, .. } = self.feedback.take().expect("feedback checked above");
            self.label = snapshot.label;
            self.palette = snapshot.palette;
        }
    }
}

/// Render the copy button.
pub fn view(state: &State) -> Element<'_, Message> {
    button(Text::new(state.label().to_owned()).size(typography::BODY))
        .on_press(Message::Pressed)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::from_palette(state.palette()))
        .into()
}

// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Toast` struct and `Severity` enum used by the
//! notification presenter. A toast moves through three phases: a short
//! slide-in, a visible window, and an exit transition before detachment.
//! Every transition is driven by instants handed in from the tick
//! subscription, never by sampling the clock here.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// Slide-in transition length.
pub const ENTER_DURATION: Duration = Duration::from_millis(100);
/// How long a toast stays fully visible before auto-dismissing.
pub const DISPLAY_DURATION: Duration = Duration::from_millis(5000);
/// Exit transition length between dismissal and detachment.
pub const EXIT_DURATION: Duration = Duration::from_millis(300);

/// Severity level determines the visual accent of the toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Operation completed successfully (green).
    Success,
    /// Something needs the user's attention (red).
    Error,
}

impl Severity {
    /// Returns the accent color for this severity level.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Error => palette::ERROR_500,
        }
    }

}

/// Lifecycle phase of a displayed toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Sliding in.
    Entering,
    /// Fully on screen, waiting for dismissal or expiry.
    Visible,
    /// Playing the exit transition; detaches when it completes.
    Leaving { since: Instant },
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Toast {
    severity: Severity,
    /// The i18n key for the toast message.
    message_key: String,
    /// When this toast was displayed.
    shown_at: Instant,
    phase: Phase,
    /// Presentation opacity, updated as the phases advance.
    alpha: f32,
}

impl Toast {
    /// Creates a toast displayed at `now`.
    pub fn new(severity: Severity, message_key: impl Into<String>, now: Instant) -> Self {
        Self {
            severity,
            message_key: message_key.into(),
            shown_at: now,
            phase: Phase::Entering,
            alpha: 0.0,
        }
    }

    /// Creates a success toast.
    pub fn success(message_key: impl Into<String>, now: Instant) -> Self {
        Self::new(Severity::Success, message_key, now)
    }

    /// Creates an error toast.
    pub fn error(message_key: impl Into<String>, now: Instant) -> Self {
        Self::new(Severity::Error, message_key, now)
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_leaving(&self) -> bool {
        matches!(self.phase, Phase::Leaving { .. })
    }

    /// Current presentation opacity in `0.0..=1.0`.
    #[must_use]
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Starts the exit transition. Returns `false` when the toast is already
    /// leaving, so a second dismissal (manual plus expiry) is a no-op.
    pub fn begin_leaving(&mut self, now: Instant) -> bool {
        if self.is_leaving() {
            return false;
        }
        self.phase = Phase::Leaving { since: now };
        true
    }

    /// Advances the lifecycle to `now`. Returns `true` once the exit
    /// transition has completed and the toast should be detached.
    pub fn advance(&mut self, now: Instant) -> bool {
        match self.phase {
            Phase::Entering => {
                let elapsed = now.duration_since(self.shown_at);
                if elapsed >= ENTER_DURATION {
                    self.phase = Phase::Visible;
                    self.alpha = 1.0;
                } else {
                    self.alpha = elapsed.as_secs_f32() / ENTER_DURATION.as_secs_f32();
                }
            }
            Phase::Visible => {
                if now.duration_since(self.shown_at) >= DISPLAY_DURATION {
                    self.phase = Phase::Leaving { since: now };
                }
            }
            Phase::Leaving { since } => {
                let elapsed = now.duration_since(since);
                if elapsed >= EXIT_DURATION {
                    return true;
                }
                self.alpha = 1.0 - elapsed.as_secs_f32() / EXIT_DURATION.as_secs_f32();
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_colors_are_distinct() {
        assert_ne!(Severity::Success.color(), Severity::Error.color());
    }

    #[test]
    fn constructors_set_severity() {
        let now = Instant::now();
        assert_eq!(Toast::success("k", now).severity(), Severity::Success);
        assert_eq!(Toast::error("k", now).severity(), Severity::Error);
    }

    #[test]
    fn enters_then_becomes_visible() {
        let t0 = Instant::now();
        let mut toast = Toast::success("k", t0);
        assert_eq!(toast.phase(), Phase::Entering);

        assert!(!toast.advance(t0 + ENTER_DURATION));
        assert_eq!(toast.phase(), Phase::Visible);
        assert_eq!(toast.alpha(), 1.0);
    }

    #[test]
    fn expires_into_leaving_after_display_window() {
        let t0 = Instant::now();
        let mut toast = Toast::success("k", t0);
        toast.advance(t0 + ENTER_DURATION);

        assert!(!toast.advance(t0 + DISPLAY_DURATION));
        assert!(toast.is_leaving());
    }

    #[test]
    fn detaches_after_exit_transition() {
        let t0 = Instant::now();
        let mut toast = Toast::success("k", t0);
        toast.advance(t0 + ENTER_DURATION);
        toast.advance(t0 + DISPLAY_DURATION);

        let leave_started = t0 + DISPLAY_DURATION;
        assert!(!toast.advance(leave_started + EXIT_DURATION / 2));
        assert!(toast.advance(leave_started + EXIT_DURATION));
    }

    #[test]
    fn second_dismissal_is_a_no_op() {
        let t0 = Instant::now();
        let mut toast = Toast::error("k", t0);
        toast.advance(t0 + ENTER_DURATION);

        assert!(toast.begin_leaving(t0 + Duration::from_secs(1)));
        assert!(!toast.begin_leaving(t0 + Duration::from_secs(2)));
    }

    #[test]
    fn alpha_fades_out_while_leaving() {
        let t0 = Instant::now();
        let mut toast = Toast::error("k", t0);
        toast.advance(t0 + ENTER_DURATION);
        toast.begin_leaving(t0 + Duration::from_secs(1));

        toast.advance(t0 + Duration::from_secs(1) + EXIT_DURATION / 2);
        assert!(toast.alpha() < 1.0);
        assert!(toast.alpha() > 0.0);
    }
}

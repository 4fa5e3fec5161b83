// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Presenter` owns the single live toast. There is no queue: a new toast
//! evicts whatever is showing, so overlapping calls collapse to "last call
//! wins visibly". That is a product decision, not an ordering guarantee.

use super::notification::Toast;
use std::time::Instant;

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss the live toast via its close affordance.
    Dismiss,
}

/// Owns the currently displayed toast, if any.
#[derive(Debug, Default)]
pub struct Presenter {
    current: Option<Toast>,
}

impl Presenter {
    /// Creates a presenter with no toast displayed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Displays a toast, evicting any prior one.
    pub fn notify(&mut self, toast: Toast) {
        self.current = Some(toast);
    }

    /// Starts the exit transition on the live toast.
    ///
    /// Returns `true` if a transition actually started. Dismissing twice, or
    /// dismissing after the toast already detached, is a harmless no-op.
    pub fn dismiss(&mut self, now: Instant) -> bool {
        match &mut self.current {
            Some(toast) => toast.begin_leaving(now),
            None => false,
        }
    }

    /// Advances the toast lifecycle, detaching it once its exit transition
    /// has completed.
    pub fn tick(&mut self, now: Instant) {
        if let Some(toast) = &mut self.current {
            if toast.advance(now) {
                self.current = None;
            }
        }
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: &Message, now: Instant) {
        match message {
            Message::Dismiss => {
                self.dismiss(now);
            }
        }
    }

    /// Returns the live toast, if any.
    #[must_use]
    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    /// Returns whether a toast is attached (visible or transitioning).
    #[must_use]
    pub fn has_toast(&self) -> bool {
        self.current.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::super::notification::{
        Phase, Toast, DISPLAY_DURATION, ENTER_DURATION, EXIT_DURATION,
    };
    use super::*;
    use std::time::Duration;

    #[test]
    fn new_presenter_has_no_toast() {
        let presenter = Presenter::new();
        assert!(!presenter.has_toast());
    }

    #[test]
    fn notify_attaches_a_toast() {
        let mut presenter = Presenter::new();
        presenter.notify(Toast::success("saved", Instant::now()));
        assert!(presenter.has_toast());
    }

    #[test]
    fn rapid_notifications_keep_only_the_second_message() {
        let now = Instant::now();
        let mut presenter = Presenter::new();

        presenter.notify(Toast::error("first", now));
        presenter.notify(Toast::success("second", now));

        let live = presenter.current().expect("one toast attached");
        assert_eq!(live.message_key(), "second");
    }

    #[test]
    fn auto_dismiss_detaches_after_display_and_exit() {
        let t0 = Instant::now();
        let mut presenter = Presenter::new();
        presenter.notify(Toast::success("saved", t0));

        presenter.tick(t0 + ENTER_DURATION);
        presenter.tick(t0 + DISPLAY_DURATION);
        assert!(presenter.current().expect("still attached").is_leaving());

        presenter.tick(t0 + DISPLAY_DURATION + EXIT_DURATION);
        assert!(!presenter.has_toast());
    }

    #[test]
    fn manual_dismiss_then_expiry_is_idempotent() {
        let t0 = Instant::now();
        let mut presenter = Presenter::new();
        presenter.notify(Toast::success("saved", t0));
        presenter.tick(t0 + ENTER_DURATION);

        assert!(presenter.dismiss(t0 + Duration::from_secs(1)));
        // The auto-dismiss deadline passing must not restart the transition.
        assert!(!presenter.dismiss(t0 + DISPLAY_DURATION));

        presenter.tick(t0 + Duration::from_secs(1) + EXIT_DURATION);
        assert!(!presenter.has_toast());

        // A stale dismissal after detachment is also a no-op.
        assert!(!presenter.dismiss(t0 + Duration::from_secs(30)));
    }

    #[test]
    fn eviction_discards_the_leaving_toast() {
        let t0 = Instant::now();
        let mut presenter = Presenter::new();
        presenter.notify(Toast::error("first", t0));
        presenter.tick(t0 + ENTER_DURATION);
        presenter.dismiss(t0 + Duration::from_millis(200));

        presenter.notify(Toast::success("second", t0 + Duration::from_millis(250)));
        let live = presenter.current().expect("replacement attached");
        assert_eq!(live.message_key(), "second");
        assert_eq!(live.phase(), Phase::Entering);
    }

    #[test]
    fn handle_message_dismisses() {
        let t0 = Instant::now();
        let mut presenter = Presenter::new();
        presenter.notify(Toast::success("saved", t0));
        presenter.tick(t0 + ENTER_DURATION);

        presenter.handle_message(&Message::Dismiss, t0 + Duration::from_secs(1));
        assert!(presenter.current().expect("still transitioning").is_leaving());
    }
}

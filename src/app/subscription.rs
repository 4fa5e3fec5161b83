// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! A single periodic tick drives every timed state machine: the typewriter,
//! the scroll-triggered ramps, the toast lifecycle, the copy feedback, and
//! the simulated submission. The subscription only runs while one of them has
//! pending work, so an idle page schedules nothing.

use super::{App, Message};
use iced::{time, Subscription};
use std::time::Duration;

const TICK_INTERVAL: Duration = Duration::from_millis(100);

pub fn subscription(app: &App) -> Subscription<Message> {
    let has_timed_work = !app.typewriter.is_done()
        || app.effects.is_animating()
        || app.notifications.has_toast()
        || app.copy_email.is_feedback_active()
        || app.contact.is_submitting();

    if has_timed_work {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

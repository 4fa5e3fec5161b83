// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering the live notification.
//!
//! The toast appears as a severity-colored card anchored to the top-right
//! corner, with a close affordance. Phase transitions show up as opacity
//! changes driven by the tick subscription.

use super::notification::{Severity, Toast};
use super::presenter::{Message, Presenter};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::{icons, styles};
use iced::widget::{button, container, text, Container, Row, Text};
use iced::{alignment, Element, Length};

/// Renders the live toast as a card.
pub fn view<'a>(toast: &'a Toast, i18n: &'a I18n) -> Element<'a, Message> {
    let severity = toast.severity();

    let glyph = icons::sized(severity_glyph(severity), typography::SUBTITLE);
    let message = text(i18n.tr(toast.message_key())).size(typography::BODY);

    let dismiss = button(icons::sized(icons::cross(), typography::SUBTITLE))
        .on_press(Message::Dismiss)
        .padding(spacing::XXS)
        .style(styles::button::dismiss);

    let content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(glyph)
        .push(Container::new(message).width(Length::Fill))
        .push(dismiss);

    Container::new(content)
        .max_width(sizing::TOAST_WIDTH)
        .padding([spacing::MD, spacing::LG])
        .style(styles::container::toast(severity.color(), toast.alpha()))
        .into()
}

/// Renders the toast overlay anchored to the top-right corner.
///
/// Returns an empty, zero-sized element when nothing is displayed so the
/// overlay never intercepts input.
pub fn view_overlay<'a>(presenter: &'a Presenter, i18n: &'a I18n) -> Element<'a, Message> {
    match presenter.current() {
        Some(toast) => Container::new(view(toast, i18n))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Top)
            .padding(spacing::LG)
            .into(),
        None => container(text(""))
            .width(Length::Shrink)
            .height(Length::Shrink)
            .into(),
    }
}

/// Returns the appropriate glyph for the severity level.
fn severity_glyph<'a>(severity: Severity) -> Text<'a> {
    match severity {
        Severity::Success => icons::checkmark(),
        Severity::Error => icons::warning(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::notification::Toast as ToastData;
    use std::time::Instant;

    #[test]
    fn view_renders_for_both_severities() {
        let i18n = I18n::default();
        let now = Instant::now();
        let _ = view(&ToastData::success("notification-contact-success", now), &i18n);
        let _ = view(&ToastData::error("notification-contact-missing", now), &i18n);
    }

    #[test]
    fn overlay_renders_with_and_without_a_toast() {
        let i18n = I18n::default();
        let mut presenter = Presenter::new();
        let _ = view_overlay(&presenter, &i18n);

        presenter.notify(ToastData::success("notification-contact-success", Instant::now()));
        let _ = view_overlay(&presenter, &i18n);
    }
}

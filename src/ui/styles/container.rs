// SPDX-License-Identifier: MPL-2.0
//! Centralized container styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Fixed navigation bar. Transparent over the hero, switching to an opaque
/// elevated backdrop once the page is scrolled.
pub fn navbar(scrolled: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let base = theme.extended_palette().background.base;

        if scrolled {
            container::Style {
                background: Some(Background::Color(Color {
                    a: opacity::NAVBAR_SCROLLED,
                    ..base.color
                })),
                shadow: shadow::SM,
                text_color: Some(base.text),
                ..Default::default()
            }
        } else {
            container::Style {
                background: None,
                text_color: Some(base.text),
                ..Default::default()
            }
        }
    }
}

/// Card surface for services and portfolio items. Unrevealed cards render
/// dimmed until the scroll animator marks them visible; hovering lifts the
/// shadow.
pub fn card(revealed: bool, hovered: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let extended = theme.extended_palette();
        let text = if revealed {
            extended.background.base.text
        } else {
            Color {
                a: opacity::DIMMED,
                ..extended.background.base.text
            }
        };

        container::Style {
            background: Some(Background::Color(extended.background.weak.color)),
            border: Border {
                color: extended.background.strong.color,
                width: 1.0,
                radius: radius::MD.into(),
            },
            shadow: if hovered { shadow::LG } else { shadow::SM },
            text_color: Some(text),
            ..Default::default()
        }
    }
}

/// Toast card: severity-colored background, white text, rounded, floating.
pub fn toast(accent: Color, alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color { a: alpha, ..accent })),
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(Color {
            a: alpha,
            ..palette::WHITE
        }),
        ..Default::default()
    }
}

/// Quiet alternate backdrop for every other page section.
pub fn section_alt(theme: &Theme) -> container::Style {
    let extended = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(extended.background.weak.color)),
        text_color: Some(extended.background.base.text),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navbar_backdrop_appears_when_scrolled() {
        let theme = Theme::Light;
        assert!(navbar(true)(&theme).background.is_some());
        assert!(navbar(false)(&theme).background.is_none());
    }

    #[test]
    fn hovered_card_lifts_shadow() {
        let theme = Theme::Light;
        let resting = card(true, false)(&theme);
        let hovered = card(true, true)(&theme);
        assert!(hovered.shadow.blur_radius > resting.shadow.blur_radius);
    }

    #[test]
    fn toast_alpha_fades_background() {
        let theme = Theme::Dark;
        let style = toast(palette::SUCCESS_500, 0.5)(&theme);
        match style.background {
            Some(Background::Color(color)) => assert_eq!(color.a, 0.5),
            _ => panic!("expected a colored background"),
        }
    }
}

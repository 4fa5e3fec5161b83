// SPDX-License-Identifier: MPL-2.0
//! Landing section with the typewriter headline.
//!
//! The headline types itself out after a short delay: the plain intro first,
//! then the highlighted name, one character at a time. Scrolling inside the
//! hero raises its content at half the scroll speed (the parallax effect).

use crate::content::Section;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Horizontal,
    widget::{button, Column, Container, Row, Text},
    Element, Length,
};
use std::time::{Duration, Instant};

/// Pause before the first character appears.
pub const START_DELAY: Duration = Duration::from_millis(500);
/// Cadence between characters.
pub const CHAR_INTERVAL: Duration = Duration::from_millis(80);

/// Headline copy. The name is a proper noun and stays unlocalized.
pub const INTRO: &str = "Hi, I'm ";
pub const HIGHLIGHT: &str = "Leo Bell";

/// Tick-driven typewriter over the headline text.
#[derive(Debug)]
pub struct Typewriter {
    started: Option<Instant>,
    typed: usize,
    reduce_motion: bool,
}

impl Typewriter {
    #[must_use]
    pub fn new(reduce_motion: bool) -> Self {
        Self {
            started: None,
            typed: if reduce_motion { Self::total() } else { 0 },
            reduce_motion,
        }
    }

    fn total() -> usize {
        INTRO.chars().count() + HIGHLIGHT.chars().count()
    }

    /// Arms the animation; the first character appears [`START_DELAY`] later.
    pub fn start(&mut self, now: Instant) {
        if self.started.is_none() {
            self.started = Some(now);
        }
    }

    pub fn tick(&mut self, now: Instant) {
        if self.reduce_motion {
            return;
        }
        let Some(started) = self.started else {
            return;
        };
        let elapsed = now.duration_since(started);
        self.typed = if elapsed < START_DELAY {
            0
        } else {
            let after_delay = elapsed - START_DELAY;
            let by_interval = after_delay.as_millis() / CHAR_INTERVAL.as_millis();
            ((1 + by_interval) as usize).min(Self::total())
        };
    }

    /// Characters of the plain intro typed so far.
    #[must_use]
    pub fn intro_text(&self) -> String {
        INTRO.chars().take(self.typed).collect()
    }

    /// Characters of the highlighted name typed so far.
    #[must_use]
    pub fn highlight_text(&self) -> String {
        let intro_len = INTRO.chars().count();
        HIGHLIGHT
            .chars()
            .take(self.typed.saturating_sub(intro_len))
            .collect()
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.typed >= Self::total()
    }
}

/// Messages emitted by the hero's call-to-action buttons.
#[derive(Debug, Clone)]
pub enum Message {
    Navigate(Section),
}

/// Contextual data needed to render the hero.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub typewriter: &'a Typewriter,
    /// Upward shift from the parallax effect, in logical pixels.
    pub parallax_rise: f32,
}

/// Resting top padding of the hero content; the parallax rise eats into it.
const TOP_PADDING: f32 = 160.0;

/// Render the hero section.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Row::new()
        .push(Text::new(ctx.typewriter.intro_text()).size(typography::HERO))
        .push(
            Text::new(ctx.typewriter.highlight_text())
                .size(typography::HERO)
                .color(palette::PRIMARY_500),
        );

    let subtitle = Text::new(ctx.i18n.tr("hero-subtitle")).size(typography::SUBTITLE);

    let actions = Row::new()
        .spacing(spacing::MD)
        .push(
            button(Text::new(ctx.i18n.tr("hero-cta-work")))
                .on_press(Message::Navigate(Section::Portfolio))
                .padding([spacing::SM, spacing::LG])
                .style(styles::button::primary),
        )
        .push(
            button(Text::new(ctx.i18n.tr("hero-cta-contact")))
                .on_press(Message::Navigate(Section::Contact))
                .padding([spacing::SM, spacing::LG])
                .style(styles::button::nav_link),
        );

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(title)
        .push(subtitle)
        .push(actions);

    let top_padding = (TOP_PADDING - ctx.parallax_rise).max(0.0);

    Container::new(content)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .padding([top_padding, spacing::XL])
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_typed_before_the_start_delay() {
        let t0 = Instant::now();
        let mut tw = Typewriter::new(false);
        tw.start(t0);
        tw.tick(t0 + START_DELAY - Duration::from_millis(1));
        assert_eq!(tw.intro_text(), "");
        assert_eq!(tw.highlight_text(), "");
    }

    #[test]
    fn first_character_lands_at_the_delay() {
        let t0 = Instant::now();
        let mut tw = Typewriter::new(false);
        tw.start(t0);
        tw.tick(t0 + START_DELAY);
        assert_eq!(tw.intro_text(), "H");
    }

    #[test]
    fn intro_completes_before_the_highlight_starts() {
        let t0 = Instant::now();
        let mut tw = Typewriter::new(false);
        tw.start(t0);

        let intro_len = INTRO.chars().count() as u32;
        tw.tick(t0 + START_DELAY + CHAR_INTERVAL * (intro_len - 1));
        assert_eq!(tw.intro_text(), INTRO);
        assert_eq!(tw.highlight_text(), "");

        tw.tick(t0 + START_DELAY + CHAR_INTERVAL * intro_len);
        assert_eq!(tw.highlight_text(), "L");
    }

    #[test]
    fn finishes_and_stays_finished() {
        let t0 = Instant::now();
        let mut tw = Typewriter::new(false);
        tw.start(t0);
        tw.tick(t0 + Duration::from_secs(10));
        assert!(tw.is_done());
        assert_eq!(tw.intro_text(), INTRO);
        assert_eq!(tw.highlight_text(), HIGHLIGHT);
    }

    #[test]
    fn start_is_idempotent() {
        let t0 = Instant::now();
        let mut tw = Typewriter::new(false);
        tw.start(t0);
        tw.tick(t0 + START_DELAY + CHAR_INTERVAL * 3);
        let typed_before = tw.intro_text();

        // A later start must not rewind the animation.
        tw.start(t0 + Duration::from_secs(5));
        tw.tick(t0 + START_DELAY + CHAR_INTERVAL * 3);
        assert_eq!(tw.intro_text(), typed_before);
    }

    #[test]
    fn reduced_motion_shows_the_full_headline() {
        let tw = Typewriter::new(true);
        assert!(tw.is_done());
        assert_eq!(tw.intro_text(), INTRO);
        assert_eq!(tw.highlight_text(), HIGHLIGHT);
    }

    #[test]
    fn hero_view_renders() {
        let i18n = I18n::default();
        let tw = Typewriter::new(true);
        let ctx = ViewContext {
            i18n: &i18n,
            typewriter: &tw,
            parallax_rise: 0.0,
        };
        let _element = view(ctx);
    }
}

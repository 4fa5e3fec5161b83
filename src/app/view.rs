// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page is one scrollable column of sections under a fixed navigation
//! bar, with the toast overlay and the back-to-top affordance stacked on
//! top. Sections render their reveal state from the scroll animator; nothing
//! here owns state of its own.

use super::{page_scroll_id, App, Message};
use crate::content::{self, layout, CardId};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::notifications::toast;
use crate::ui::{contact_form, copy_button, hero, icons, navbar, quote_form, styles};
use crate::ui::effects::RevealTarget;
use chrono::Datelike;
use iced::widget::{button, mouse_area, scrollable, text, Column, Container, Row, Stack, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Color, Element, Length, Theme,
};

pub fn view(app: &App) -> Element<'_, Message> {
    let navbar = navbar::view(navbar::ViewContext {
        i18n: &app.i18n,
        menu_open: app.menu_open,
        scrolled: app.effects.navbar_scrolled(),
    })
    .map(Message::Navbar);

    let page = scrollable(page_content(app))
        .id(page_scroll_id())
        .on_scroll(Message::PageScrolled)
        .width(Length::Fill)
        .height(Length::Fill);

    let base = Column::new().push(navbar).push(page);

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(base)
        .push(toast::view_overlay(&app.notifications, &app.i18n).map(Message::Toast));

    if app.effects.show_back_to_top() {
        layers = layers.push(back_to_top_overlay());
    }

    layers.into()
}

fn page_content(app: &App) -> Element<'_, Message> {
    Column::new()
        .push(hero_section(app))
        .push(about_section(app))
        .push(services_section(app))
        .push(portfolio_section(app))
        .push(contact_section(app))
        .push(footer(&app.i18n))
        .into()
}

fn hero_section(app: &App) -> Element<'_, Message> {
    let hero = hero::view(hero::ViewContext {
        i18n: &app.i18n,
        typewriter: &app.typewriter,
        parallax_rise: app.effects.parallax_rise(),
    })
    .map(Message::Hero);

    Container::new(hero)
        .width(Length::Fill)
        .height(Length::Fixed(layout::HERO_HEIGHT))
        .into()
}

fn about_section(app: &App) -> Element<'_, Message> {
    let revealed = app.effects.is_revealed(RevealTarget::AboutText);

    let title = Text::new(app.i18n.tr("about-title")).size(typography::TITLE);
    let first = reveal_text(app.i18n.tr("about-text-1"), revealed);
    let second = reveal_text(app.i18n.tr("about-text-2"), revealed);

    let mut stats = Row::new().spacing(spacing::XXL);
    for stat in &content::STATS {
        stats = stats.push(
            Column::new()
                .align_x(Horizontal::Center)
                .push(
                    Text::new(app.effects.counter_value(stat.target).to_string())
                        .size(typography::STAT)
                        .color(palette::PRIMARY_500),
                )
                .push(Text::new(app.i18n.tr(stat.label_key)).size(typography::CAPTION)),
        );
    }

    let mut skills = Row::new().spacing(spacing::SM);
    for (index, skill) in content::SKILLS.iter().copied().enumerate() {
        skills = skills.push(skill_chip(skill, app.effects.skill_visible(index)));
    }

    let column = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(title)
        .push(first)
        .push(second)
        .push(stats)
        .push(Text::new(app.i18n.tr("skills-title")).size(typography::SUBTITLE))
        .push(skills);

    Container::new(column)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .padding([spacing::SECTION, spacing::XL])
        .style(styles::container::section_alt)
        .into()
}

fn services_section(app: &App) -> Element<'_, Message> {
    let revealed = app.effects.is_revealed(RevealTarget::Services);
    let title = Text::new(app.i18n.tr("services-title")).size(typography::TITLE);

    let mut cards = Row::new().spacing(spacing::LG);
    for (index, service) in content::SERVICES.iter().enumerate() {
        let id = CardId::Service(index);
        let body = Column::new()
            .spacing(spacing::SM)
            .align_x(Horizontal::Center)
            .push(Text::new(service.glyph).size(typography::TITLE))
            .push(Text::new(app.i18n.tr(service.title_key)).size(typography::SUBTITLE))
            .push(Text::new(app.i18n.tr(service.blurb_key)).size(typography::BODY));

        cards = cards.push(hover_card(body.into(), id, revealed, app.hovered_card));
    }

    section(title, cards.into())
}

fn portfolio_section(app: &App) -> Element<'_, Message> {
    let revealed = app.effects.is_revealed(RevealTarget::Portfolio);
    let title = Text::new(app.i18n.tr("portfolio-title")).size(typography::TITLE);

    let mut cards = Row::new().spacing(spacing::LG);
    for (index, item) in content::PORTFOLIO_ITEMS.iter().enumerate() {
        let id = CardId::Portfolio(index);

        let mut tags = Row::new().spacing(spacing::XS);
        for tag in item.tags {
            tags = tags.push(
                Text::new(*tag)
                    .size(typography::CAPTION)
                    .color(palette::PRIMARY_600),
            );
        }

        let body = Column::new()
            .spacing(spacing::SM)
            .push(Text::new(app.i18n.tr(item.title_key)).size(typography::SUBTITLE))
            .push(Text::new(app.i18n.tr(item.blurb_key)).size(typography::BODY))
            .push(tags);

        cards = cards.push(hover_card(body.into(), id, revealed, app.hovered_card));
    }

    section(title, cards.into())
}

fn contact_section(app: &App) -> Element<'_, Message> {
    let email_row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(Text::new(app.i18n.tr("contact-email-label")).size(typography::BODY))
        .push(
            Text::new(app.copy_email.text().to_owned())
                .size(typography::BODY)
                .color(palette::PRIMARY_600),
        )
        .push(copy_button::view(&app.copy_email).map(Message::CopyEmail));

    let column = Column::new()
        .spacing(spacing::SECTION)
        .align_x(Horizontal::Center)
        .push(contact_form::view(&app.contact, &app.i18n).map(Message::Contact))
        .push(email_row)
        .push(quote_form::view(&app.quote, &app.i18n).map(Message::Quote));

    Container::new(column)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .padding([spacing::SECTION, spacing::XL])
        .style(styles::container::section_alt)
        .into()
}

fn footer(i18n: &I18n) -> Element<'_, Message> {
    let year = chrono::Local::now().year();
    let line = Text::new(format!("© {} Leo Bell · {}", year, i18n.tr("footer-tagline")))
        .size(typography::CAPTION);

    Container::new(line)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .padding(spacing::XL)
        .into()
}

/// Wraps a section title and body in the shared page framing.
fn section<'a>(title: Text<'a>, body: Element<'a, Message>) -> Element<'a, Message> {
    let column = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(title)
        .push(body);

    Container::new(column)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .padding([spacing::SECTION, spacing::XL])
        .into()
}

/// A card that reports pointer enter/exit so the update loop can track the
/// hover lift, mirroring the page's hover transforms.
fn hover_card<'a>(
    body: Element<'a, Message>,
    id: CardId,
    revealed: bool,
    hovered_card: Option<CardId>,
) -> Element<'a, Message> {
    let hovered = hovered_card == Some(id);

    let card = Container::new(body)
        .width(Length::Fixed(sizing::CARD_WIDTH))
        .padding(spacing::LG)
        .style(styles::container::card(revealed, hovered));

    mouse_area(card)
        .on_enter(Message::CardHovered(Some(id)))
        .on_exit(Message::CardHovered(None))
        .into()
}

/// Body text that stays dimmed until its reveal fires.
fn reveal_text<'a>(content: String, revealed: bool) -> Text<'a> {
    Text::new(content)
        .size(typography::BODY)
        .style(move |theme: &Theme| text::Style {
            color: if revealed {
                None
            } else {
                Some(Color {
                    a: opacity::DIMMED,
                    ..theme.palette().text
                })
            },
        })
}

/// Skill chip that appears in stagger order.
fn skill_chip(name: &'static str, visible: bool) -> Element<'static, Message> {
    let label = Text::new(name)
        .size(typography::CAPTION)
        .style(move |theme: &Theme| text::Style {
            color: if visible {
                Some(theme.palette().text)
            } else {
                Some(Color {
                    a: opacity::HIDDEN,
                    ..theme.palette().text
                })
            },
        });

    Container::new(label)
        .padding([spacing::XXS, spacing::SM])
        .style(styles::container::section_alt)
        .into()
}

fn back_to_top_overlay<'a>() -> Element<'a, Message> {
    let affordance = button(icons::sized(icons::arrow_up(), typography::SUBTITLE))
        .on_press(Message::BackToTop)
        .padding(spacing::SM)
        .style(styles::button::back_to_top);

    Container::new(affordance)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Right)
        .align_y(Vertical::Bottom)
        .padding(spacing::XL)
        .into()
}

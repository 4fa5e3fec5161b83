// SPDX-License-Identifier: MPL-2.0
//! Navigation bar module for page-level navigation.
//!
//! This module provides the brand mark, the section links, and the hamburger
//! menu that replaces them on narrow windows. The bar sits above the page and
//! switches to an elevated style once the page is scrolled.

use crate::content::Section;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, Column, Container, Row, Text},
    Element, Length,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub menu_open: bool,
    /// Whether the page is scrolled past the styling threshold.
    pub scrolled: bool,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleMenu,
    CloseMenu,
    Navigate(Section),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// Smooth-scroll the page to the given section.
    ScrollToSection(Section),
}

/// Process a navbar message and return the corresponding event.
///
/// Activating any link closes the menu, so the mobile dropdown never lingers
/// over the section it navigated to.
pub fn update(message: Message, menu_open: &mut bool) -> Event {
    match message {
        Message::ToggleMenu => {
            *menu_open = !*menu_open;
            Event::None
        }
        Message::CloseMenu => {
            *menu_open = false;
            Event::None
        }
        Message::Navigate(section) => {
            *menu_open = false;
            Event::ScrollToSection(section)
        }
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new().width(Length::Fill);

    let top_bar = build_top_bar(&ctx);
    content = content.push(top_bar);

    // Dropdown menu (if open)
    if ctx.menu_open {
        let dropdown = build_dropdown(&ctx);
        content = content.push(dropdown);
    }

    Container::new(content)
        .width(Length::Fill)
        .style(styles::container::navbar(ctx.scrolled))
        .into()
}

/// Build the top bar with the brand mark, inline links, and hamburger button.
fn build_top_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let brand = Text::new("Leo Bell").size(typography::SUBTITLE);

    let mut links = Row::new().spacing(spacing::MD).align_y(Vertical::Center);
    for section in Section::ALL {
        links = links.push(
            button(Text::new(ctx.i18n.tr(section.label_key())))
                .on_press(Message::Navigate(section))
                .padding([spacing::XXS, spacing::XS])
                .style(styles::button::nav_link),
        );
    }

    let menu_button = button(icons::sized(icons::menu(), typography::SUBTITLE))
        .on_press(Message::ToggleMenu)
        .padding(spacing::XS)
        .style(styles::button::nav_link);

    let row = Row::new()
        .spacing(spacing::LG)
        .padding([spacing::SM, spacing::LG])
        .align_y(Vertical::Center)
        .push(brand)
        .push(Container::new(links).width(Length::Fill))
        .push(menu_button);

    Container::new(row).width(Length::Fill).into()
}

/// Build the dropdown menu listing every section link.
fn build_dropdown<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut menu_column = Column::new().spacing(spacing::XXS);

    for section in Section::ALL {
        menu_column = menu_column.push(
            button(Text::new(ctx.i18n.tr(section.label_key())))
                .on_press(Message::Navigate(section))
                .padding([spacing::XS, spacing::SM])
                .width(Length::Fill)
                .style(styles::button::nav_link),
        );
    }

    Container::new(menu_column)
        .padding(spacing::XS)
        .width(Length::Fill)
        .style(styles::container::section_alt)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fluent::I18n;

    #[test]
    fn navbar_view_renders() {
        let i18n = I18n::default();
        let ctx = ViewContext {
            i18n: &i18n,
            menu_open: false,
            scrolled: false,
        };
        let _element = view(ctx);
    }

    #[test]
    fn navbar_view_renders_with_menu_open_and_scrolled() {
        let i18n = I18n::default();
        let ctx = ViewContext {
            i18n: &i18n,
            menu_open: true,
            scrolled: true,
        };
        let _element = view(ctx);
    }

    #[test]
    fn toggle_menu_changes_state() {
        let mut menu_open = false;
        let event = update(Message::ToggleMenu, &mut menu_open);
        assert!(menu_open);
        assert!(matches!(event, Event::None));

        let event = update(Message::ToggleMenu, &mut menu_open);
        assert!(!menu_open);
        assert!(matches!(event, Event::None));
    }

    #[test]
    fn navigation_closes_menu_and_emits_event() {
        let mut menu_open = true;
        let event = update(Message::Navigate(Section::Contact), &mut menu_open);
        assert!(!menu_open);
        assert!(matches!(event, Event::ScrollToSection(Section::Contact)));
    }

    #[test]
    fn close_menu_is_idempotent() {
        let mut menu_open = false;
        let event = update(Message::CloseMenu, &mut menu_open);
        assert!(!menu_open);
        assert!(matches!(event, Event::None));
    }
}

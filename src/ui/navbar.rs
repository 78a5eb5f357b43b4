// SPDX-License-Identifier: MPL-2.0
//! Top navigation bar with the drawer menu and language switcher.
//!
//! The language buttons appear twice: in the bar itself and inside the
//! drawer. Both fragments derive their active/inactive styling from
//! `I18n::current_locale` on every render, so there is exactly one source
//! of language state.

use crate::app::Screen;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{button, tooltip, Column, Container, Row, Text};
use iced::{Element, Length};
use unic_langid::LanguageIdentifier;

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub menu_open: bool,
    pub screen: Screen,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleMenu,
    GoHome,
    GoReservation,
    SelectLanguage(LanguageIdentifier),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    GoHome,
    GoReservation,
    LanguageSelected(LanguageIdentifier),
}

/// Process a navbar message and return the corresponding event.
/// Picking any entry closes the drawer.
pub fn update(message: Message, menu_open: &mut bool) -> Event {
    match message {
        Message::ToggleMenu => {
            *menu_open = !*menu_open;
            Event::None
        }
        Message::GoHome => {
            *menu_open = false;
            Event::GoHome
        }
        Message::GoReservation => {
            *menu_open = false;
            Event::GoReservation
        }
        Message::SelectLanguage(locale) => {
            *menu_open = false;
            Event::LanguageSelected(locale)
        }
    }
}

/// Render the navigation bar, with the drawer below it when open.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new().width(Length::Fill);
    content = content.push(build_top_bar(&ctx));
    if ctx.menu_open {
        content = content.push(build_drawer(&ctx));
    }
    content.into()
}

fn build_top_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let menu_button = tooltip::Tooltip::new(
        button(Text::new("☰").size(typography::TITLE_SM))
            .on_press(Message::ToggleMenu)
            .padding(spacing::XS),
        Text::new(ctx.i18n.tr("nav-menu")).size(typography::CAPTION),
        tooltip::Position::FollowCursor,
    )
    .gap(spacing::XXS);

    let title = Text::new(ctx.i18n.tr("window-title")).size(typography::TITLE_MD);

    let row = Row::new()
        .spacing(spacing::SM)
        .padding(spacing::SM)
        .align_y(Vertical::Center)
        .push(menu_button)
        .push(Container::new(title).width(Length::Fill))
        .push(language_buttons(ctx.i18n));

    Container::new(row)
        .width(Length::Fill)
        .style(styles::toolbar)
        .into()
}

/// The drawer carries the navigation links plus its own copy of the
/// language buttons, prominently at the top.
fn build_drawer<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let home = drawer_item(
        ctx.i18n.tr("nav-home"),
        ctx.screen == Screen::Home,
        Message::GoHome,
    );
    let reserve = drawer_item(
        ctx.i18n.tr("nav-reserve"),
        ctx.screen == Screen::Reservation,
        Message::GoReservation,
    );

    let column = Column::new()
        .spacing(spacing::XXS)
        .push(language_buttons(ctx.i18n))
        .push(home)
        .push(reserve);

    Container::new(column)
        .padding(spacing::XS)
        .width(Length::Fill)
        .style(styles::card)
        .into()
}

fn drawer_item(label: String, current: bool, message: Message) -> Element<'static, Message> {
    let text = Text::new(label).size(typography::BODY);
    let item = button(text)
        .padding([spacing::XS, spacing::SM])
        .width(Length::Fill);
    if current {
        item.style(button::secondary).into()
    } else {
        item.on_press(message).style(button::text).into()
    }
}

/// One button per supported locale; the active one is highlighted based on
/// the shared i18n state, never on fragment-local state.
fn language_buttons(i18n: &I18n) -> Element<'_, Message> {
    let mut row = Row::new().spacing(spacing::XXS);
    for locale in &i18n.available_locales {
        let label = i18n.tr(&format!("language-name-{locale}"));
        let is_active = i18n.current_locale() == locale;
        let mut lang_button = button(Text::new(label).size(typography::CAPTION))
            .padding([spacing::XXS, spacing::XS])
            .on_press(Message::SelectLanguage(locale.clone()));
        lang_button = if is_active {
            lang_button.style(styles::lang_active)
        } else {
            lang_button.style(styles::lang_inactive)
        };
        row = row.push(lang_button);
    }
    row.into()
}

#[cfg(test)]
mod tests {
    use super::*;

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
        let event = update(Message::GoHome, &mut menu_open);
        assert!(!menu_open);
        assert!(matches!(event, Event::GoHome));

        menu_open = true;
        let event = update(Message::GoReservation, &mut menu_open);
        assert!(!menu_open);
        assert!(matches!(event, Event::GoReservation));
    }

    #[test]
    fn language_selection_closes_menu_and_carries_locale() {
        let mut menu_open = true;
        let locale: LanguageIdentifier = "it".parse().expect("valid locale");
        let event = update(Message::SelectLanguage(locale.clone()), &mut menu_open);
        assert!(!menu_open);
        match event {
            Event::LanguageSelected(selected) => assert_eq!(selected, locale),
            _ => panic!("expected LanguageSelected"),
        }
    }

    #[test]
    fn navbar_view_renders_with_and_without_drawer() {
        let i18n = I18n::default();
        for menu_open in [false, true] {
            let _element = view(ViewContext {
                i18n: &i18n,
                menu_open,
                screen: Screen::Home,
            });
        }
    }
}

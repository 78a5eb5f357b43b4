// SPDX-License-Identifier: MPL-2.0
//! Home screen: the three listing cards, each with a collapsible details
//! section and a reserve action.

use crate::i18n::fluent::I18n;
use crate::listings::{self, Listing};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{Element, Length};
use std::collections::HashSet;

/// Tracks which listing cards are expanded.
#[derive(Debug, Default)]
pub struct State {
    expanded: HashSet<&'static str>,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self, listing_id: &str) -> bool {
        self.expanded.contains(listing_id)
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    ToggleDetails(&'static str),
    Reserve(&'static str),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    Reserve(&'static str),
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::ToggleDetails(listing_id) => {
            if !state.expanded.remove(listing_id) {
                state.expanded.insert(listing_id);
            }
            Event::None
        }
        Message::Reserve(listing_id) => Event::Reserve(listing_id),
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("home-title")).size(typography::TITLE_LG);
    let subtitle = Text::new(ctx.i18n.tr("home-subtitle")).size(typography::BODY);

    let mut cards = Column::new().spacing(spacing::MD);
    for listing in listings::LISTINGS {
        cards = cards.push(listing_card(&ctx, listing));
    }

    Container::new(
        Column::new()
            .spacing(spacing::LG)
            .padding(spacing::XL)
            .push(title)
            .push(subtitle)
            .push(cards),
    )
    .width(Length::Fill)
    .into()
}

fn listing_card<'a>(ctx: &ViewContext<'a>, listing: &'static Listing) -> Element<'a, Message> {
    let name = Text::new(listing.name).size(typography::TITLE_MD);

    let details_button = button(Text::new(ctx.i18n.tr("home-details-button")).size(typography::BODY))
        .on_press(Message::ToggleDetails(listing.id))
        .style(button::secondary)
        .padding([spacing::XXS, spacing::SM]);

    let reserve_button = button(Text::new(ctx.i18n.tr("home-reserve-button")).size(typography::BODY))
        .on_press(Message::Reserve(listing.id))
        .style(styles::primary_button)
        .padding([spacing::XXS, spacing::SM]);

    let actions = Row::new()
        .spacing(spacing::SM)
        .push(details_button)
        .push(reserve_button);

    let mut card = Column::new().spacing(spacing::SM).push(name).push(actions);

    if ctx.state.is_expanded(listing.id) {
        let details_key = format!("listing-details-{}", listing.id);
        card = card.push(Text::new(ctx.i18n.tr(&details_key)).size(typography::BODY));
    }

    Container::new(card)
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(styles::card)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_details_flips_expansion() {
        let mut state = State::new();
        assert!(!state.is_expanded("sea-breeze"));

        let event = update(&mut state, Message::ToggleDetails("sea-breeze"));
        assert!(matches!(event, Event::None));
        assert!(state.is_expanded("sea-breeze"));

        let _ = update(&mut state, Message::ToggleDetails("sea-breeze"));
        assert!(!state.is_expanded("sea-breeze"));
    }

    #[test]
    fn toggles_are_independent_per_listing() {
        let mut state = State::new();
        let _ = update(&mut state, Message::ToggleDetails("sea-breeze"));
        let _ = update(&mut state, Message::ToggleDetails("garden-view"));
        let _ = update(&mut state, Message::ToggleDetails("sea-breeze"));
        assert!(!state.is_expanded("sea-breeze"));
        assert!(state.is_expanded("garden-view"));
    }

    #[test]
    fn reserve_emits_event_with_listing_id() {
        let mut state = State::new();
        let event = update(&mut state, Message::Reserve("garden-view"));
        match event {
            Event::Reserve(id) => assert_eq!(id, "garden-view"),
            Event::None => panic!("expected Reserve event"),
        }
    }

    #[test]
    fn home_view_renders_expanded_and_collapsed() {
        let i18n = I18n::default();
        let mut state = State::new();
        let _ = view(ViewContext {
            i18n: &i18n,
            state: &state,
        });
        let _ = update(&mut state, Message::ToggleDetails("city-comfort"));
        let _ = view(ViewContext {
            i18n: &i18n,
            state: &state,
        });
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! This module contains the specialized message handlers that `App::update`
//! dispatches to, plus language persistence.

use super::{Message, Screen};
use crate::config;
use crate::i18n::fluent::I18n;
use crate::listings;
use crate::outbound;
use crate::ui::home;
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::notifications;
use crate::ui::reservation::{self, Event as ReservationEvent};
use iced::Task;
use unic_langid::LanguageIdentifier;

/// Mutable borrows of the application state handed to the handlers, so the
/// `App` struct itself stays out of this module.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub screen: &'a mut Screen,
    pub menu_open: &'a mut bool,
    pub home: &'a mut home::State,
    pub reservation: &'a mut reservation::State,
    pub external_links: bool,
    pub notifications: &'a mut notifications::Manager,
}

pub fn handle_navbar_message(
    ctx: &mut UpdateContext<'_>,
    message: navbar::Message,
) -> Task<Message> {
    match navbar::update(message, ctx.menu_open) {
        NavbarEvent::None => {}
        NavbarEvent::GoHome => {
            *ctx.screen = Screen::Home;
        }
        NavbarEvent::GoReservation => {
            // Re-entering the screen behaves like a fresh page load, so the
            // inquiry modal comes back up.
            *ctx.reservation =
                reservation::State::new(ctx.reservation.listing(), ctx.external_links);
            *ctx.screen = Screen::Reservation;
        }
        NavbarEvent::LanguageSelected(locale) => {
            apply_language_change(ctx.i18n, &locale, ctx.notifications);
        }
    }
    Task::none()
}

pub fn handle_home_message(ctx: &mut UpdateContext<'_>, message: home::Message) -> Task<Message> {
    match home::update(ctx.home, message) {
        home::Event::None => {}
        home::Event::Reserve(listing_id) => {
            *ctx.reservation =
                reservation::State::new(listings::lookup(Some(listing_id)), ctx.external_links);
            *ctx.screen = Screen::Reservation;
        }
    }
    Task::none()
}

pub fn handle_reservation_message(
    ctx: &mut UpdateContext<'_>,
    message: reservation::Message,
) -> Task<Message> {
    match ctx.reservation.update(message) {
        ReservationEvent::None => {}
        ReservationEvent::OpenLink(link) => match link.and_then(|url| outbound::open(&url)) {
            Ok(()) => {
                ctx.notifications
                    .push(notifications::Notification::info("notification-link-opened"));
            }
            Err(err) => {
                log::warn!("failed to open external link: {err}");
                ctx.notifications
                    .push(notifications::Notification::error("notification-link-error"));
            }
        },
    }
    Task::none()
}

/// Switches the active locale and persists the choice. A failed save keeps
/// the in-memory language and surfaces a warning toast.
pub fn apply_language_change(
    i18n: &mut I18n,
    locale: &LanguageIdentifier,
    notifications: &mut notifications::Manager,
) {
    i18n.set_locale(locale.clone());

    let mut config = config::load().unwrap_or_default();
    config.language = Some(i18n.current_locale().to_string());
    if let Err(err) = config::save(&config) {
        log::warn!("failed to persist language preference: {err}");
        notifications.push(notifications::Notification::warning(
            "notification-config-save-error",
        ));
    }
}

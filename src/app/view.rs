// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current screen
//! based on application state, with the toast overlay stacked on top.

use super::{Message, Screen};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::spacing;
use crate::ui::home::{self, ViewContext as HomeViewContext};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications;
use crate::ui::reservation;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{Column, Container, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub menu_open: bool,
    pub home: &'a home::State,
    pub reservation: &'a reservation::State,
    pub notifications: &'a notifications::Manager,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let navbar_view = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        menu_open: ctx.menu_open,
        screen: ctx.screen,
    })
    .map(Message::Navbar);

    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Home => home::view(HomeViewContext {
            i18n: ctx.i18n,
            state: ctx.home,
        })
        .map(Message::Home),
        Screen::Reservation => ctx.reservation.view(ctx.i18n).map(Message::Reservation),
    };

    let page = Column::new().push(navbar_view).push(
        Container::new(current_view)
            .width(Length::Fill)
            .height(Length::Fill),
    );

    if ctx.notifications.has_notifications() {
        let toasts = Container::new(ctx.notifications.view(ctx.i18n).map(Message::Notification))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Right)
            .align_y(Vertical::Bottom)
            .padding(spacing::MD);
        Stack::new().push(page).push(toasts).into()
    } else {
        page.into()
    }
}

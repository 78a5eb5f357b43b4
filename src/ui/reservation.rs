// SPDX-License-Identifier: MPL-2.0
//! Reservation screen for one listing: inquiry modal, location section,
//! availability calendar, and the request form.
//!
//! The modal opens unconditionally whenever the screen is (re)built, so the
//! form is in front of the visitor immediately. Form fields are passed to
//! the outbound link untouched; there is no field validation.

use crate::calendar::MonthView;
use crate::error::Result;
use crate::i18n::fluent::I18n;
use crate::listings::Listing;
use crate::outbound::ReservationRequest;
use crate::ui::calendar_panel;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::map_panel::{self, MapSupport};
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::{
    button, center, mouse_area, opaque, scrollable, text_input, Column, Container, Row, Stack,
    Text,
};
use iced::{Element, Length};
use url::Url;

/// State of the reservation flow for one listing.
#[derive(Debug)]
pub struct State {
    listing: &'static Listing,
    calendar: MonthView,
    map: MapSupport,
    modal_open: bool,
    check_in: String,
    check_out: String,
    guests: String,
    notes: String,
}

#[derive(Debug, Clone)]
pub enum Message {
    CloseModal,
    Calendar(calendar_panel::Message),
    Map(map_panel::Message),
    CheckInChanged(String),
    CheckOutChanged(String),
    GuestsChanged(String),
    NotesChanged(String),
    Submit,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// A link should be opened externally (WhatsApp request or map).
    OpenLink(Result<Url>),
}

impl State {
    /// Builds the flow for one listing. The calendar starts on the current
    /// real-world month and the modal starts open.
    pub fn new(listing: &'static Listing, external_links: bool) -> Self {
        Self {
            listing,
            calendar: MonthView::new(listing.booked_dates),
            map: MapSupport::select(listing, external_links),
            modal_open: true,
            check_in: String::new(),
            check_out: String::new(),
            guests: String::new(),
            notes: String::new(),
        }
    }

    pub fn listing(&self) -> &'static Listing {
        self.listing
    }

    pub fn calendar(&self) -> &MonthView {
        &self.calendar
    }

    pub fn modal_open(&self) -> bool {
        self.modal_open
    }

    /// Snapshot of the current form contents.
    pub fn request(&self) -> ReservationRequest {
        ReservationRequest {
            listing_name: self.listing.name.to_string(),
            check_in: self.check_in.clone(),
            check_out: self.check_out.clone(),
            guests: self.guests.clone(),
            notes: self.notes.clone(),
        }
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::CloseModal => {
                self.modal_open = false;
                Event::None
            }
            Message::Calendar(calendar_panel::Message::PreviousMonth) => {
                self.calendar.change_month(-1);
                Event::None
            }
            Message::Calendar(calendar_panel::Message::NextMonth) => {
                self.calendar.change_month(1);
                Event::None
            }
            Message::Map(map_panel::Message::OpenExternal) => match self.map.link() {
                Some(link) => Event::OpenLink(link),
                None => Event::None,
            },
            Message::CheckInChanged(value) => {
                self.check_in = value;
                Event::None
            }
            Message::CheckOutChanged(value) => {
                self.check_out = value;
                Event::None
            }
            Message::GuestsChanged(value) => {
                self.guests = value;
                Event::None
            }
            Message::NotesChanged(value) => {
                self.notes = value;
                Event::None
            }
            Message::Submit => Event::OpenLink(self.request().whatsapp_link()),
        }
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let heading = Text::new(format!(
            "{} — {}",
            self.listing.name,
            i18n.tr("reservation-heading")
        ))
        .size(typography::TITLE_LG);

        let map_section = map_panel::view(map_panel::ViewContext {
            i18n,
            map: &self.map,
        })
        .map(Message::Map);

        let grid = self.calendar.month_grid();
        let calendar_section =
            calendar_panel::view(calendar_panel::ViewContext { i18n, grid: &grid })
                .map(Message::Calendar);

        let page = scrollable(
            Column::new()
                .spacing(spacing::LG)
                .padding(spacing::XL)
                .push(heading)
                .push(map_section)
                .push(calendar_section)
                .push(self.form_view(i18n)),
        );

        let base = Container::new(page)
            .width(Length::Fill)
            .height(Length::Fill);

        if self.modal_open {
            Stack::new()
                .push(base)
                .push(self.modal_view(i18n))
                .into()
        } else {
            base.into()
        }
    }

    fn form_view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let date_placeholder = i18n.tr("reservation-date-placeholder");

        let labeled = |key: &str, input| {
            Column::new()
                .spacing(spacing::XXS)
                .push(Text::new(i18n.tr(key)).size(typography::CAPTION))
                .push(input)
        };

        let check_in = text_input(&date_placeholder, &self.check_in)
            .on_input(Message::CheckInChanged)
            .padding(spacing::XS);
        let check_out = text_input(&date_placeholder, &self.check_out)
            .on_input(Message::CheckOutChanged)
            .padding(spacing::XS);
        let guests = text_input("2", &self.guests)
            .on_input(Message::GuestsChanged)
            .padding(spacing::XS);
        let notes = text_input(&i18n.tr("reservation-notes-placeholder"), &self.notes)
            .on_input(Message::NotesChanged)
            .padding(spacing::XS);

        let submit = button(
            Text::new(i18n.tr("reservation-submit-button")).size(typography::BODY),
        )
        .on_press(Message::Submit)
        .style(styles::primary_button)
        .padding([spacing::XS, spacing::MD]);

        Container::new(
            Column::new()
                .spacing(spacing::SM)
                .width(sizing::FORM_WIDTH)
                .push(labeled("reservation-checkin-label", check_in))
                .push(labeled("reservation-checkout-label", check_out))
                .push(labeled("reservation-guests-label", guests))
                .push(labeled("reservation-notes-label", notes))
                .push(submit),
        )
        .padding(spacing::MD)
        .style(styles::card)
        .into()
    }

    /// Centered inquiry modal over a dimmed backdrop. Clicking the backdrop
    /// or the close button dismisses it.
    fn modal_view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let close = button(
            Text::new(i18n.tr("reservation-modal-close")).size(typography::BODY),
        )
        .on_press(Message::CloseModal)
        .style(button::secondary)
        .padding([spacing::XXS, spacing::SM]);

        let surface = Container::new(
            Column::new()
                .spacing(spacing::SM)
                .push(Text::new(i18n.tr("reservation-modal-title")).size(typography::TITLE_MD))
                .push(Text::new(i18n.tr("reservation-modal-body")).size(typography::BODY))
                .push(
                    Row::new()
                        .push(Container::new(close).width(Length::Fill).align_x(Horizontal::Right)),
                ),
        )
        .padding(spacing::LG)
        .width(sizing::MODAL_WIDTH)
        .style(styles::modal_surface);

        opaque(
            mouse_area(
                Container::new(center(opaque(surface)))
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .style(styles::modal_backdrop),
            )
            .on_press(Message::CloseModal),
        )
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Renders a [`MonthGrid`] as a 7-column availability grid with month
//! navigation.
//!
//! The month label is localized through the i18n month-name keys; the
//! weekday header row intentionally keeps the fixed English abbreviations
//! from [`calendar::WEEKDAY_HEADERS`] in every locale.

use crate::calendar::{self, DayState, MonthGrid};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, container, tooltip, Column, Container, Row, Space, Text};
use iced::{Element, Length};

#[derive(Debug, Clone, Copy)]
pub enum Message {
    PreviousMonth,
    NextMonth,
}

pub struct ViewContext<'a, 'g> {
    pub i18n: &'a I18n,
    pub grid: &'g MonthGrid,
}

/// Month label in the form `November 2025`, month name localized.
pub fn month_label(i18n: &I18n, grid: &MonthGrid) -> String {
    format!("{} {}", i18n.month_name(grid.month0), grid.year)
}

pub fn view<'a>(ctx: ViewContext<'a, '_>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("calendar-title")).size(typography::TITLE_SM);

    let prev = tooltip::Tooltip::new(
        button(Text::new("‹").size(typography::TITLE_SM))
            .on_press(Message::PreviousMonth)
            .style(button::secondary)
            .padding([spacing::XXS, spacing::XS]),
        Text::new(ctx.i18n.tr("calendar-prev-month")).size(typography::CAPTION),
        tooltip::Position::FollowCursor,
    )
    .gap(spacing::XXS);
    let next = tooltip::Tooltip::new(
        button(Text::new("›").size(typography::TITLE_SM))
            .on_press(Message::NextMonth)
            .style(button::secondary)
            .padding([spacing::XXS, spacing::XS]),
        Text::new(ctx.i18n.tr("calendar-next-month")).size(typography::CAPTION),
        tooltip::Position::FollowCursor,
    )
    .gap(spacing::XXS);
    let label = Text::new(month_label(ctx.i18n, ctx.grid)).size(typography::TITLE_MD);

    let header = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(prev)
        .push(
            Container::new(label)
                .width(Length::Fill)
                .align_x(Horizontal::Center),
        )
        .push(next);

    let grid = build_grid(ctx.grid);
    let legend = build_legend(ctx.i18n);

    Container::new(
        Column::new()
            .spacing(spacing::SM)
            .push(title)
            .push(header)
            .push(grid)
            .push(legend),
    )
    .padding(spacing::MD)
    .style(styles::card)
    .into()
}

fn build_grid(grid: &MonthGrid) -> Element<'static, Message> {
    let mut rows = Column::new().spacing(spacing::XXS);

    let mut header_row = Row::new().spacing(spacing::XXS);
    for abbrev in calendar::WEEKDAY_HEADERS {
        header_row = header_row.push(
            sized_cell(Text::new(abbrev).size(typography::CAPTION)).style(styles::header_cell),
        );
    }
    rows = rows.push(header_row);

    // Leading blanks, then day cells, wrapped into weeks of seven.
    let mut week = Row::new().spacing(spacing::XXS);
    let mut column_index = 0;
    for _ in 0..grid.first_day_offset {
        week = week.push(blank_cell());
        column_index += 1;
    }
    for cell in &grid.days {
        let tint = match cell.state {
            DayState::Booked => palette::BOOKED,
            DayState::Available => palette::AVAILABLE,
        };
        week = week.push(
            sized_cell(Text::new(cell.day.to_string()).size(typography::BODY))
                .style(styles::day_cell(tint)),
        );
        column_index += 1;
        if column_index == 7 {
            rows = rows.push(week);
            week = Row::new().spacing(spacing::XXS);
            column_index = 0;
        }
    }
    if column_index > 0 {
        rows = rows.push(week);
    }

    rows.into()
}

fn sized_cell<'a>(
    content: impl Into<Element<'a, Message>>,
) -> Container<'a, Message> {
    Container::new(content)
        .width(sizing::CALENDAR_CELL)
        .height(sizing::CALENDAR_CELL)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
}

fn blank_cell() -> Element<'static, Message> {
    Container::new(Space::new())
        .width(sizing::CALENDAR_CELL)
        .height(sizing::CALENDAR_CELL)
        .into()
}

fn build_legend(i18n: &I18n) -> Element<'_, Message> {
    let swatch = |tint| {
        container(Space::new())
            .width(sizing::LEGEND_SWATCH)
            .height(sizing::LEGEND_SWATCH)
            .style(styles::day_cell(tint))
    };

    Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(swatch(palette::BOOKED))
        .push(Text::new(i18n.tr("calendar-legend-booked")).size(typography::CAPTION))
        .push(swatch(palette::AVAILABLE))
        .push(Text::new(i18n.tr("calendar-legend-available")).size(typography::CAPTION))
        .into()
}

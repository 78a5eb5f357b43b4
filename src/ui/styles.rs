// SPDX-License-Identifier: MPL-2.0
//! Centralized widget styles built on the design tokens.

use crate::ui::design_tokens::{opacity, palette, radius};
use iced::widget::{button, container};
use iced::{Background, Border, Color, Theme};

/// Primary action button (submit, reserve).
pub fn primary_button(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::PRIMARY_700,
        _ => palette::PRIMARY_500,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::WHITE,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..button::Style::default()
    }
}

/// Language button for the locale currently active.
pub fn lang_active(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: Some(Background::Color(palette::PRIMARY_500)),
        text_color: palette::WHITE,
        border: Border {
            color: palette::PRIMARY_700,
            width: 1.0,
            radius: radius::SM.into(),
        },
        ..button::Style::default()
    }
}

/// Language button for an inactive locale.
pub fn lang_inactive(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::PRIMARY_200,
        _ => palette::GRAY_200,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::GRAY_700,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..button::Style::default()
    }
}

/// Top navigation bar surface.
pub fn toolbar(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(palette.background.weak.color.into()),
        ..Default::default()
    }
}

/// Card surface for listings and page sections.
pub fn card(theme: &Theme) -> container::Style {
    let extended = theme.extended_palette();
    container::Style {
        background: Some(extended.background.weak.color.into()),
        border: Border {
            radius: radius::MD.into(),
            width: 1.0,
            color: extended.background.strong.color,
        },
        ..Default::default()
    }
}

/// Dimmed backdrop behind the reservation modal.
pub fn modal_backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::BLACK
        })),
        ..Default::default()
    }
}

/// The modal surface itself.
pub fn modal_surface(theme: &Theme) -> container::Style {
    let extended = theme.extended_palette();
    let base = extended.background.base.color;
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..base
        })),
        border: Border {
            radius: radius::LG.into(),
            width: 1.0,
            color: extended.background.strong.color,
        },
        ..Default::default()
    }
}

/// Weekday header cell of the calendar grid.
pub fn header_cell(theme: &Theme) -> container::Style {
    let extended = theme.extended_palette();
    container::Style {
        text_color: Some(extended.background.weak.text),
        ..Default::default()
    }
}

/// Calendar day cell, tinted by availability.
pub fn day_cell(tint: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(tint)),
        text_color: Some(palette::BLACK),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Toast surface, accented with the notification severity color.
pub fn toast(accent: Color) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let base = theme.extended_palette().background.base.color;
        container::Style {
            background: Some(Background::Color(Color {
                a: opacity::SURFACE,
                ..base
            })),
            border: Border {
                color: accent,
                width: 2.0,
                radius: radius::MD.into(),
            },
            ..Default::default()
        }
    }
}

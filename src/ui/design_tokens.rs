// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by every screen.
//!
//! - **Palette**: base and semantic colors
//! - **Opacity**: standardized opacity levels
//! - **Spacing**: spacing scale (8px grid)
//! - **Sizing**: component sizes
//! - **Typography**: font size scale
//! - **Radius**: border radii

use iced::Color;

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);

    // Brand colors (sea-blue scale)
    pub const PRIMARY_200: Color = Color::from_rgb(0.7, 0.86, 0.95);
    pub const PRIMARY_500: Color = Color::from_rgb(0.16, 0.55, 0.75);
    pub const PRIMARY_700: Color = Color::from_rgb(0.1, 0.38, 0.55);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);

    /// Calendar day marked unavailable.
    pub const BOOKED: Color = Color::from_rgb(0.95, 0.67, 0.67);
    /// Calendar day open for booking.
    pub const AVAILABLE: Color = Color::from_rgb(0.78, 0.92, 0.8);
}

pub mod opacity {
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const SURFACE: f32 = 0.95;
}

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
}

pub mod sizing {
    /// Width and height of one calendar cell.
    pub const CALENDAR_CELL: f32 = 40.0;
    /// Swatch size in the calendar legend.
    pub const LEGEND_SWATCH: f32 = 14.0;
    pub const MODAL_WIDTH: f32 = 420.0;
    pub const FORM_WIDTH: f32 = 420.0;
    pub const TOAST_WIDTH: f32 = 320.0;
}

pub mod typography {
    /// Large title - screen headings
    pub const TITLE_LG: f32 = 30.0;
    /// Medium title - listing names, modal title
    pub const TITLE_MD: f32 = 20.0;
    /// Small title - section headers
    pub const TITLE_SM: f32 = 18.0;
    /// Standard body - most UI text
    pub const BODY: f32 = 14.0;
    /// Caption - legend labels, hints
    pub const CAPTION: f32 = 12.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
}

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::BODY > typography::CAPTION);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn calendar_states_use_distinct_colors() {
        assert_ne!(palette::BOOKED, palette::AVAILABLE);
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Listing location section, modeled as a two-variant capability.
//!
//! The variant is selected once when the reservation screen is built:
//! either external map links are allowed and the section offers an
//! OpenStreetMap action, or they are not and a textual fallback is shown.
//! Rendering never re-checks availability.

use crate::error::Result;
use crate::i18n::fluent::I18n;
use crate::listings::Listing;
use crate::outbound;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{Element, Length};
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MapSupport {
    /// External links allowed; the section links out to OpenStreetMap.
    External { latitude: f64, longitude: f64 },
    /// Fallback text only.
    Unavailable,
}

impl MapSupport {
    /// Chooses the variant for one listing at initialization time.
    pub fn select(listing: &Listing, external_links: bool) -> Self {
        if external_links {
            MapSupport::External {
                latitude: listing.latitude,
                longitude: listing.longitude,
            }
        } else {
            MapSupport::Unavailable
        }
    }

    /// The link this capability opens, if any.
    pub fn link(&self) -> Option<Result<Url>> {
        match self {
            MapSupport::External {
                latitude,
                longitude,
            } => Some(outbound::osm_link(*latitude, *longitude)),
            MapSupport::Unavailable => None,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    OpenExternal,
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub map: &'a MapSupport,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("map-title")).size(typography::TITLE_SM);

    let body: Element<'a, Message> = match ctx.map {
        MapSupport::External {
            latitude,
            longitude,
        } => {
            let coords =
                Text::new(format!("{latitude:.3}, {longitude:.3}")).size(typography::CAPTION);
            let open = button(Text::new(ctx.i18n.tr("map-open-button")).size(typography::BODY))
                .on_press(Message::OpenExternal)
                .style(button::secondary)
                .padding([spacing::XXS, spacing::SM]);
            Row::new()
                .spacing(spacing::SM)
                .push(coords)
                .push(open)
                .into()
        }
        MapSupport::Unavailable => Text::new(ctx.i18n.tr("map-unavailable"))
            .size(typography::BODY)
            .into(),
    };

    Container::new(Column::new().spacing(spacing::SM).push(title).push(body))
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(styles::card)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listings;

    fn sea_breeze() -> &'static Listing {
        listings::lookup(Some("sea-breeze"))
    }

    #[test]
    fn select_prefers_external_when_links_enabled() {
        let map = MapSupport::select(sea_breeze(), true);
        assert!(matches!(map, MapSupport::External { .. }));
    }

    #[test]
    fn select_falls_back_when_links_disabled() {
        let map = MapSupport::select(sea_breeze(), false);
        assert_eq!(map, MapSupport::Unavailable);
        assert!(map.link().is_none());
    }

    #[test]
    fn external_link_points_at_listing_coordinates() {
        let map = MapSupport::select(sea_breeze(), true);
        let url = map
            .link()
            .expect("external variant has a link")
            .expect("link should build");
        let query = url.query().expect("query missing");
        assert!(query.contains("mlat=27.858"));
        assert!(query.contains("mlon=34.308"));
    }

    #[test]
    fn both_variants_render() {
        let i18n = I18n::default();
        for map in [
            MapSupport::select(sea_breeze(), true),
            MapSupport::Unavailable,
        ] {
            let _ = view(ViewContext {
                i18n: &i18n,
                map: &map,
            });
        }
    }
}

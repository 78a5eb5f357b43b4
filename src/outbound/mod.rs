// SPDX-License-Identifier: MPL-2.0
//! Outbound deep links: the WhatsApp reservation request and the
//! OpenStreetMap listing location.
//!
//! Link construction is pure and unit-tested here; the side effect of
//! actually opening a link in the system browser lives in [`open`], called
//! from the update handlers.

use crate::error::{Error, Result};
use url::Url;

/// Fixed destination number for reservation requests.
pub const WHATSAPP_NUMBER: &str = "201000000000";

/// Zoom level used for listing locations on OpenStreetMap.
const OSM_ZOOM: u8 = 13;

/// Raw form contents of one reservation request. Fields are passed through
/// untouched; validation is out of scope.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReservationRequest {
    pub listing_name: String,
    pub check_in: String,
    pub check_out: String,
    pub guests: String,
    pub notes: String,
}

impl ReservationRequest {
    /// Multi-line message body, fields in fixed order.
    pub fn message(&self) -> String {
        format!(
            "Reservation request: {}\nCheck-in: {}\nCheck-out: {}\nGuests: {}\nNotes: {}",
            self.listing_name, self.check_in, self.check_out, self.guests, self.notes
        )
    }

    /// Pre-filled `wa.me` link carrying [`Self::message`] as the URL-encoded
    /// `text` parameter.
    pub fn whatsapp_link(&self) -> Result<Url> {
        let base = format!("https://wa.me/{WHATSAPP_NUMBER}");
        Url::parse_with_params(&base, &[("text", self.message())])
            .map_err(|err| Error::Link(err.to_string()))
    }
}

/// Link to the listing location on OpenStreetMap.
pub fn osm_link(latitude: f64, longitude: f64) -> Result<Url> {
    Url::parse_with_params(
        "https://www.openstreetmap.org/",
        &[
            ("mlat", latitude.to_string()),
            ("mlon", longitude.to_string()),
            ("zoom", OSM_ZOOM.to_string()),
        ],
    )
    .map_err(|err| Error::Link(err.to_string()))
}

/// Opens a link in the system browser (a new browsing context).
pub fn open(url: &Url) -> Result<()> {
    opener::open(url.as_str())?;
    Ok(())
}

// SPDX-License-Identifier: MPL-2.0
//! Static apartment listing dataset.
//!
//! The records stand in for a real data source: three rentable units with a
//! display name, geographic coordinates, and a set of booked calendar dates.
//! Records are immutable and resolved by identifier; unrecognized or absent
//! identifiers fall back to [`DEFAULT_LISTING_ID`] so the rest of the app
//! never has to handle a missing listing.

/// Identifier substituted whenever a requested listing does not exist.
pub const DEFAULT_LISTING_ID: &str = "sea-breeze";

/// One rentable unit with static descriptive data and a booked-date set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Listing {
    pub id: &'static str,
    pub name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
    /// ISO `YYYY-MM-DD` dates during which the unit is unavailable.
    pub booked_dates: &'static [&'static str],
}

pub const LISTINGS: &[Listing] = &[
    Listing {
        id: "sea-breeze",
        name: "Sea Breeze Apartment",
        // Hadaba area
        latitude: 27.858,
        longitude: 34.308,
        booked_dates: &["2025-11-12", "2025-11-13", "2025-11-20", "2025-12-05"],
    },
    Listing {
        id: "garden-view",
        name: "Garden View Apartment",
        // Nabq area
        latitude: 28.025,
        longitude: 34.425,
        booked_dates: &["2025-11-10", "2025-11-22", "2025-12-10"],
    },
    Listing {
        id: "city-comfort",
        name: "City Comfort Studio",
        // Naama Bay area
        latitude: 27.915,
        longitude: 34.329,
        booked_dates: &["2025-11-08", "2025-11-24"],
    },
];

/// Resolves a listing by identifier, substituting the default listing for
/// unrecognized or absent identifiers.
pub fn lookup(id: Option<&str>) -> &'static Listing {
    id.and_then(|wanted| LISTINGS.iter().find(|listing| listing.id == wanted))
        .unwrap_or_else(|| {
            LISTINGS
                .iter()
                .find(|listing| listing.id == DEFAULT_LISTING_ID)
                .expect("default listing must exist in the dataset")
        })
}

// SPDX-License-Identifier: MPL-2.0
use breeze_stays::calendar::MonthView;
use breeze_stays::config::{self, Config};
use breeze_stays::i18n::fluent::I18n;
use breeze_stays::listings;
use breeze_stays::outbound::ReservationRequest;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en
    let initial_config = Config {
        language: Some("en".to_string()),
        external_links: Some(true),
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en");

    // 2. Change config to it
    let italian_config = Config {
        language: Some("it".to_string()),
        external_links: Some(true),
    };
    config::save_to_path(&italian_config, &temp_config_file_path)
        .expect("Failed to write italian config file");

    let loaded_italian_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load italian config from path");
    let i18n_it = I18n::new(None, &loaded_italian_config);
    assert_eq!(i18n_it.current_locale().to_string(), "it");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_booked_dates_flow_from_listing_into_calendar() {
    let listing = listings::lookup(Some("sea-breeze"));
    let mut view = MonthView::starting_at(2025, 10, listing.booked_dates);

    let grid = view.month_grid();
    let day_12 = grid
        .days
        .iter()
        .find(|cell| cell.day == 12)
        .expect("November has a 12th");
    assert!(matches!(
        day_12.state,
        breeze_stays::calendar::DayState::Booked
    ));

    // 2025-12-05 is booked too, one month forward
    view.change_month(1);
    assert!(view.is_booked(5));
    assert!(!view.is_booked(12));
}

#[test]
fn test_reservation_request_builds_whatsapp_link_for_listing() {
    let listing = listings::lookup(Some("city-comfort"));
    let request = ReservationRequest {
        listing_name: listing.name.to_string(),
        check_in: "2026-01-10".to_string(),
        check_out: "2026-01-17".to_string(),
        guests: "3".to_string(),
        notes: String::new(),
    };

    let url = request.whatsapp_link().expect("link should build");
    assert_eq!(url.host_str(), Some("wa.me"));
    assert!(url.path().contains("201000000000"));

    let (key, text) = url.query_pairs().next().expect("text parameter missing");
    assert_eq!(key, "text");
    assert!(text.contains(listing.name));
    assert!(text.contains("2026-01-10"));
}

#[test]
fn test_month_navigation_round_trip_over_year_boundary() {
    let listing = listings::lookup(None);
    let mut view = MonthView::starting_at(2025, 10, listing.booked_dates);

    for _ in 0..14 {
        view.change_month(1);
    }
    assert_eq!((view.year(), view.month0()), (2027, 0));

    for _ in 0..14 {
        view.change_month(-1);
    }
    assert_eq!((view.year(), view.month0()), (2025, 10));
}

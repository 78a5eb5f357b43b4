// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::home;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::reservation;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Home(home::Message),
    Reservation(reservation::Message),
    Notification(notifications::NotificationMessage),
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `it`, `en-US`).
    pub lang: Option<String>,
    /// Optional listing id to open the reservation screen for on startup.
    pub apartment: Option<String>,
}

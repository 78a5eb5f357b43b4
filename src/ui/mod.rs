// SPDX-License-Identifier: MPL-2.0
//! User interface components, following the Elm-style "state down,
//! messages up" pattern.
//!
//! # Screens
//!
//! - [`home`] - Listing overview with expandable cards
//! - [`reservation`] - Per-listing reservation flow with modal, map,
//!   calendar, and request form
//!
//! # Shared Infrastructure
//!
//! - [`navbar`] - Top bar with drawer navigation and language switcher
//! - [`calendar_panel`] - Month availability grid
//! - [`map_panel`] - Listing location section
//! - [`notifications`] - Transient toast notifications
//! - [`design_tokens`] - Palette, spacing, sizing, and typography constants
//! - [`styles`] - Widget style functions built on the design tokens

pub mod calendar_panel;
pub mod design_tokens;
pub mod home;
pub mod map_panel;
pub mod navbar;
pub mod notifications;
pub mod reservation;
pub mod styles;

// SPDX-License-Identifier: MPL-2.0
//! `breeze_stays` is a bilingual desktop companion for a small apartment
//! rental catalog, built with the Iced GUI framework.
//!
//! It shows the listings, a month-by-month availability calendar, and a
//! reservation flow that hands the request off to WhatsApp. It demonstrates
//! internationalization with Fluent, user preference management, and
//! modular UI design.

#![doc(html_root_url = "https://docs.rs/breeze_stays/0.2.0")]

pub mod app;
pub mod calendar;
pub mod config;
pub mod error;
pub mod i18n;
pub mod listings;
pub mod outbound;
pub mod ui;

// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the home and
//! reservation screens.
//!
//! The `App` struct wires together localization, navigation, and the
//! per-screen component states, and translates messages into side effects
//! like config persistence or opening external links. Policy decisions
//! (language persistence, which listing the reservation screen shows,
//! toast lifecycle) stay close to the main update loop so user-facing
//! behavior is easy to audit.

mod message;
mod screen;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config;
use crate::i18n::fluent::I18n;
use crate::listings;
use crate::ui::home;
use crate::ui::notifications;
use crate::ui::reservation;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state that bridges UI components, localization,
/// and persisted preferences.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    /// Whether the hamburger menu is open.
    menu_open: bool,
    home: home::State,
    reservation: reservation::State,
    /// Whether external links (map, WhatsApp) may be opened.
    external_links: bool,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("listing", &self.reservation.listing().id)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const MIN_WINDOW_HEIGHT: u32 = 560;
pub const MIN_WINDOW_WIDTH: u32 = 480;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            screen: Screen::Home,
            menu_open: false,
            home: home::State::default(),
            reservation: reservation::State::new(listings::lookup(None), true),
            external_links: true,
            notifications: notifications::Manager::new(),
        }
    }
}

impl App {
    /// Initializes application state from `Flags` received from the launcher.
    /// An unreadable config falls back to defaults; the app still starts.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = match config::load() {
            Ok(config) => config,
            Err(err) => {
                log::warn!("failed to load configuration: {err}");
                config::Config::default()
            }
        };
        let i18n = I18n::new(flags.lang.clone(), &config);
        let external_links = config.external_links.unwrap_or(true);

        let listing = listings::lookup(flags.apartment.as_deref());
        let screen = if flags.apartment.is_some() {
            Screen::Reservation
        } else {
            Screen::Home
        };

        let app = App {
            i18n,
            screen,
            reservation: reservation::State::new(listing, external_links),
            external_links,
            ..Self::default()
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.screen {
            Screen::Home => app_name,
            Screen::Reservation => {
                format!("{} - {app_name}", self.reservation.listing().name)
            }
        }
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    /// Ticks only while toasts are visible, so an idle window stays idle.
    fn subscription(&self) -> Subscription<Message> {
        if self.notifications.has_notifications() {
            iced::time::every(std::time::Duration::from_millis(250)).map(Message::Tick)
        } else {
            Subscription::none()
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &mut self.i18n,
            screen: &mut self.screen,
            menu_open: &mut self.menu_open,
            home: &mut self.home,
            reservation: &mut self.reservation,
            external_links: self.external_links,
            notifications: &mut self.notifications,
        };

        match message {
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::Home(home_message) => update::handle_home_message(&mut ctx, home_message),
            Message::Reservation(reservation_message) => {
                update::handle_reservation_message(&mut ctx, reservation_message)
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(notification_message);
                Task::none()
            }
            Message::Tick(_instant) => {
                self.notifications.tick();
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            menu_open: self.menu_open,
            home: &self.home,
            reservation: &self.reservation,
            notifications: &self.notifications,
        })
    }
}

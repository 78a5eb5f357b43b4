// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for user feedback.
//!
//! Messages are stored as i18n keys and resolved at render time, so an open
//! toast re-translates when the language changes.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, Column, Row, Text};
use iced::{Color, Element, Length};
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    fn next() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// Severity determines accent color and auto-dismiss behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    pub fn color(self) -> Color {
        match self {
            Severity::Info => palette::INFO_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    /// `None` means manual dismiss only.
    pub fn auto_dismiss_after(self) -> Option<Duration> {
        match self {
            Severity::Info => Some(Duration::from_secs(3)),
            Severity::Warning => Some(Duration::from_secs(5)),
            Severity::Error => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    message_key: String,
    created_at: Instant,
}

impl Notification {
    pub fn new(severity: Severity, message_key: impl Into<String>) -> Self {
        Self {
            id: NotificationId::next(),
            severity,
            message_key: message_key.into(),
            created_at: Instant::now(),
        }
    }

    pub fn info(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Info, message_key)
    }

    pub fn warning(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message_key)
    }

    pub fn error(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Error, message_key)
    }

    pub fn id(&self) -> NotificationId {
        self.id
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    fn expired(&self) -> bool {
        self.severity
            .auto_dismiss_after()
            .is_some_and(|after| self.created_at.elapsed() >= after)
    }
}

#[derive(Debug, Clone)]
pub enum NotificationMessage {
    Dismiss(NotificationId),
}

/// Holds active toasts, newest last.
#[derive(Debug, Default)]
pub struct Manager {
    notifications: Vec<Notification>,
}

impl Manager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    pub fn has_notifications(&self) -> bool {
        !self.notifications.is_empty()
    }

    pub fn handle_message(&mut self, message: NotificationMessage) {
        match message {
            NotificationMessage::Dismiss(id) => {
                self.notifications.retain(|n| n.id() != id);
            }
        }
    }

    /// Drops notifications whose auto-dismiss window has elapsed. Driven by
    /// the app's periodic tick.
    pub fn tick(&mut self) {
        self.notifications.retain(|n| !n.expired());
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, NotificationMessage> {
        let mut column = Column::new().spacing(spacing::XS).width(sizing::TOAST_WIDTH);

        for notification in &self.notifications {
            let text = Text::new(i18n.tr(notification.message_key())).size(typography::BODY);
            let dismiss = button(Text::new("×").size(typography::BODY))
                .on_press(NotificationMessage::Dismiss(notification.id()))
                .padding(spacing::XXS)
                .style(button::text);

            let row = Row::new()
                .spacing(spacing::SM)
                .push(container(text).width(Length::Fill))
                .push(dismiss);

            column = column.push(
                container(row)
                    .padding(spacing::SM)
                    .width(Length::Fill)
                    .style(styles::toast(notification.severity().color())),
            );
        }

        column.into()
    }

    #[cfg(test)]
    fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.notifications.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_ids_are_unique() {
        let a = Notification::info("x");
        let b = Notification::info("x");
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn errors_never_auto_dismiss() {
        assert!(Severity::Error.auto_dismiss_after().is_none());
        let mut manager = Manager::new();
        manager.push(Notification::error("notification-link-error"));
        manager.tick();
        assert!(manager.has_notifications());
    }

    #[test]
    fn dismiss_removes_only_the_target() {
        let mut manager = Manager::new();
        let keep = Notification::warning("a");
        let drop = Notification::warning("b");
        let drop_id = drop.id();
        manager.push(keep);
        manager.push(drop);

        manager.handle_message(NotificationMessage::Dismiss(drop_id));

        let keys: Vec<&str> = manager.iter().map(|n| n.message_key()).collect();
        assert_eq!(keys, vec!["a"]);
    }

    #[test]
    fn severity_colors_are_distinct() {
        assert_ne!(Severity::Info.color(), Severity::Warning.color());
        assert_ne!(Severity::Warning.color(), Severity::Error.color());
    }

    #[test]
    fn view_renders_without_panicking() {
        let mut manager = Manager::new();
        manager.push(Notification::info("notification-link-opened"));
        let i18n = I18n::default();
        let _element = manager.view(&i18n);
    }
}

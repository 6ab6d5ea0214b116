//! Custom actions for the notification actor.

use crate::model::{NotificationId, NotificationKind};

#[derive(Debug, Clone, PartialEq)]
pub enum NotificationAction {
    /// Replace whatever is showing with a new notification.
    Show {
        message: String,
        kind: NotificationKind,
    },
    /// Hide `id` if it is still the one showing.
    Dismiss(NotificationId),
    /// Hide whatever is showing.
    DismissCurrent,
}

/// Results from NotificationActions - `Show` maps to `Shown`, both dismissals to `Dismissed`.
#[derive(Debug, Clone, PartialEq)]
pub enum NotificationActionResult {
    Shown(NotificationId),
    /// `true` if a notification was actually hidden.
    Dismissed(bool),
}

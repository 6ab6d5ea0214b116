//! [`ActorEntity`] implementation for the single notification slot.
//!
//! At most one notification is visible. Showing a new one replaces the old one and
//! replaces its auto-dismiss timer; dropping the old [`ScheduledTask`] aborts it, so a
//! stale timer can never hide the newer notification.

use super::actions::{NotificationAction, NotificationActionResult};
use super::error::NotificationError;
use crate::framework::{ActorEntity, ScheduledTask};
use crate::model::{Notification, NotificationId, NotificationKind};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tracing::debug;

pub struct NotificationCenter {
    display_for: Duration,
    next_id: u64,
    slot: Arc<watch::Sender<Option<Notification>>>,
    dismiss_timer: Option<ScheduledTask>,
}

impl NotificationCenter {
    /// An empty slot whose notifications auto-dismiss after `display_for`.
    pub fn new(display_for: Duration) -> Self {
        let (slot, _) = watch::channel(None);
        Self {
            display_for,
            next_id: 1,
            slot: Arc::new(slot),
            dismiss_timer: None,
        }
    }

    /// Receiver for the presentation layer. Sees every change of the slot.
    pub fn subscribe(&self) -> watch::Receiver<Option<Notification>> {
        self.slot.subscribe()
    }

    fn show(&mut self, message: String, kind: NotificationKind) -> NotificationId {
        let id = NotificationId(self.next_id);
        self.next_id += 1;

        if let Some(timer) = self.dismiss_timer.take() {
            timer.cancel();
        }
        debug!(%id, ?kind, message = %message, "Show");
        self.slot.send_replace(Some(Notification { id, message, kind }));

        let slot = self.slot.clone();
        self.dismiss_timer = Some(ScheduledTask::after(self.display_for, async move {
            if clear_if_showing(&slot, Some(id)) {
                debug!(%id, "Auto-dismissed");
            }
        }));
        id
    }

    fn dismiss(&mut self, id: Option<NotificationId>) -> bool {
        let hidden = clear_if_showing(&self.slot, id);
        if hidden {
            self.dismiss_timer = None;
        }
        hidden
    }
}

/// Empty the slot if it holds `id` (or anything, for `None`). Returns whether it did.
fn clear_if_showing(slot: &watch::Sender<Option<Notification>>, id: Option<NotificationId>) -> bool {
    slot.send_if_modified(|current| {
        let matches = match (current.as_ref(), id) {
            (Some(shown), Some(id)) => shown.id == id,
            (Some(_), None) => true,
            (None, _) => false,
        };
        if matches {
            *current = None;
        }
        matches
    })
}

#[async_trait]
impl ActorEntity for NotificationCenter {
    type View = Option<Notification>;
    type Action = NotificationAction;
    type ActionResult = NotificationActionResult;
    type Context = ();
    type Error = NotificationError;

    fn view(&self) -> Option<Notification> {
        self.slot.borrow().clone()
    }

    async fn handle_action(
        &mut self,
        action: NotificationAction,
        _ctx: &(),
    ) -> Result<NotificationActionResult, NotificationError> {
        match action {
            NotificationAction::Show { message, kind } => {
                Ok(NotificationActionResult::Shown(self.show(message, kind)))
            }
            NotificationAction::Dismiss(id) => {
                Ok(NotificationActionResult::Dismissed(self.dismiss(Some(id))))
            }
            NotificationAction::DismissCurrent => {
                Ok(NotificationActionResult::Dismissed(self.dismiss(None)))
            }
        }
    }

    async fn on_stop(&mut self, _ctx: &()) {
        self.dismiss_timer = None;
        self.slot.send_replace(None);
    }
}

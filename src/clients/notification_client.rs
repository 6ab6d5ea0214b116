//! # Notification Client
//!
//! Wraps a `StateClient<NotificationCenter>` and keeps a watch receiver on the slot, so
//! the presentation layer can read or await the current notification without a round
//! trip through the mailbox.
use crate::framework::{ActorClient, FrameworkError, StateClient};
use crate::model::{Notification, NotificationId, NotificationKind};
use crate::notification_actor::{
    NotificationAction, NotificationActionResult, NotificationCenter, NotificationError,
};
use async_trait::async_trait;
use tokio::sync::watch;
use tracing::{debug, instrument, warn};

/// Client for interacting with the notification actor.
#[derive(Clone)]
pub struct NotificationClient {
    inner: StateClient<NotificationCenter>,
    slot: watch::Receiver<Option<Notification>>,
}

impl NotificationClient {
    pub fn new(
        inner: StateClient<NotificationCenter>,
        slot: watch::Receiver<Option<Notification>>,
    ) -> Self {
        Self { inner, slot }
    }

    /// Show `message`, replacing whatever is visible.
    #[instrument(skip(self, message))]
    pub async fn notify(
        &self,
        message: impl Into<String> + Send,
        kind: NotificationKind,
    ) -> Result<NotificationId, NotificationError> {
        let message = message.into();
        debug!(message = %message, "Sending request");
        match self
            .inner
            .perform_action(NotificationAction::Show { message, kind })
            .await
        {
            Ok(NotificationActionResult::Shown(id)) => Ok(id),
            Ok(_) => unreachable!("Show action must return Shown result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    pub async fn success(
        &self,
        message: impl Into<String> + Send,
    ) -> Result<NotificationId, NotificationError> {
        self.notify(message, NotificationKind::Success).await
    }

    pub async fn info(
        &self,
        message: impl Into<String> + Send,
    ) -> Result<NotificationId, NotificationError> {
        self.notify(message, NotificationKind::Info).await
    }

    pub async fn error(
        &self,
        message: impl Into<String> + Send,
    ) -> Result<NotificationId, NotificationError> {
        self.notify(message, NotificationKind::Error).await
    }

    /// Fire-and-log variant for side effects of other operations.
    ///
    /// Other actors notify as a courtesy; a notification that cannot be shown must not
    /// fail the cart or checkout operation that triggered it.
    pub async fn post(&self, message: &str, kind: NotificationKind) {
        if let Err(e) = self.notify(message, kind).await {
            warn!(error = %e, message, "Notification dropped");
        }
    }

    /// Hide `id` if it is still showing. Returns whether it was.
    #[instrument(skip(self))]
    pub async fn dismiss(&self, id: NotificationId) -> Result<bool, NotificationError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(NotificationAction::Dismiss(id))
            .await
        {
            Ok(NotificationActionResult::Dismissed(hidden)) => Ok(hidden),
            Ok(_) => unreachable!("Dismiss action must return Dismissed result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    #[instrument(skip(self))]
    pub async fn dismiss_current(&self) -> Result<bool, NotificationError> {
        match self
            .inner
            .perform_action(NotificationAction::DismissCurrent)
            .await
        {
            Ok(NotificationActionResult::Dismissed(hidden)) => Ok(hidden),
            Ok(_) => unreachable!("DismissCurrent action must return Dismissed result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// The notification showing right now, if any.
    pub fn current(&self) -> Option<Notification> {
        self.slot.borrow().clone()
    }

    /// A fresh receiver on the slot for the presentation layer.
    pub fn subscribe(&self) -> watch::Receiver<Option<Notification>> {
        self.slot.clone()
    }
}

#[async_trait]
impl ActorClient<NotificationCenter> for NotificationClient {
    type Error = NotificationError;

    fn inner(&self) -> &StateClient<NotificationCenter> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        NotificationError::ActorCommunicationError(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_client, expect_action};

    #[tokio::test]
    async fn test_notify_sends_show_action() {
        let (client, mut receiver) = create_mock_client::<NotificationCenter>(10);
        let (_tx, slot) = watch::channel(None);
        let notifier = NotificationClient::new(client, slot);

        let task = tokio::spawn(async move { notifier.error("Please fill in all required fields").await });

        let (action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(
            action,
            NotificationAction::Show {
                message: "Please fill in all required fields".into(),
                kind: NotificationKind::Error,
            }
        );
        responder
            .send(Ok(NotificationActionResult::Shown(NotificationId(7))))
            .unwrap();

        assert_eq!(task.await.unwrap().unwrap(), NotificationId(7));
    }

    #[tokio::test]
    async fn test_post_swallows_closed_actor() {
        let (client, receiver) = create_mock_client::<NotificationCenter>(1);
        drop(receiver);
        let (_tx, slot) = watch::channel(None);
        let notifier = NotificationClient::new(client, slot);

        notifier.post("Removed from cart", NotificationKind::Info).await;
        assert!(matches!(
            notifier.info("Removed from cart").await,
            Err(NotificationError::ActorCommunicationError(_))
        ));
    }
}

use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use crate::framework::message::ActorRequest;
use tokio::sync::{mpsc, oneshot};

/// A type-safe handle for interacting with a `StateActor`.
///
/// Holds only the mailbox sender, so cloning is cheap and clones can be handed to other
/// actors as part of their context. The actor shuts down once every clone is dropped.
pub struct StateClient<T: ActorEntity> {
    sender: mpsc::Sender<ActorRequest<T>>,
}

impl<T: ActorEntity> Clone for StateClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: ActorEntity> StateClient<T> {
    pub fn new(sender: mpsc::Sender<ActorRequest<T>>) -> Self {
        Self { sender }
    }

    /// Fetch a snapshot of the entity's view.
    pub async fn get(&self) -> Result<T::View, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ActorRequest::Get { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    /// Run an action on the entity and wait for its result.
    pub async fn perform_action(&self, action: T::Action) -> Result<T::ActionResult, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ActorRequest::Action { action, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    /// True once the actor's mailbox has been closed.
    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}

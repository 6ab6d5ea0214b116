//! # Generic Messages
//!
//! Message types exchanged between a [`StateClient`](crate::framework::StateClient)
//! and its [`StateActor`](crate::framework::StateActor).

use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Request sent to an actor's mailbox.
///
/// Every component exposes the same two verbs:
///
/// - **Get**: read a snapshot of the entity's [`ActorEntity::View`].
/// - **Action**: run a component-specific [`ActorEntity::Action`], which may mutate
///   state, persist it and signal other actors.
///
/// The enum is generic over `T: ActorEntity`, so the payload and response types are
/// fixed by the entity. A theme action cannot reach the cart mailbox.
#[derive(Debug)]
pub enum ActorRequest<T: ActorEntity> {
    Get {
        respond_to: Response<T::View>,
    },
    Action {
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}

//! # Generic Actor Server
//!
//! This module defines the `StateActor`, the component that owns an entity and runs
//! its message loop. It is the "Server" side of the Actor Model: messages are processed
//! one at a time, so the entity never sees concurrent mutation.

use crate::framework::client::StateClient;
use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use crate::framework::message::ActorRequest;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that owns a single entity.
///
/// # Architecture Note
/// This struct owns the state (`entity`) and the receiver end of the channel.
///
/// **Concurrency Model**:
/// The cart, theme, notification and checkout actors each run in their own task and
/// process their mailbox *sequentially*. Mutations of one component are therefore
/// strictly ordered by arrival and need no `Mutex`. Components still run in parallel
/// with each other.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `StateActor::new()` to get the `actor` (server) and `client` (interface).
/// 2.  **Wire**: Pass dependencies (other clients, the store) into `actor.run(context)`.
/// 3.  **Run**: Spawn the run loop in a background task.
///
/// ```rust
/// use storefront_state::framework::{ActorEntity, StateActor};
/// use async_trait::async_trait;
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("counter error")]
/// struct CounterError;
///
/// struct Counter { hits: u32 }
///
/// #[async_trait]
/// impl ActorEntity for Counter {
///     type View = u32;
///     type Action = u32;
///     type ActionResult = u32;
///     type Context = ();
///     type Error = CounterError;
///
///     fn view(&self) -> u32 { self.hits }
///
///     async fn handle_action(&mut self, by: u32, _: &()) -> Result<u32, CounterError> {
///         self.hits += by;
///         Ok(self.hits)
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = StateActor::new(8, Counter { hits: 0 });
///     tokio::spawn(actor.run(()));
///
///     assert_eq!(client.perform_action(2).await.unwrap(), 2);
///     assert_eq!(client.get().await.unwrap(), 2);
/// }
/// ```
///
/// ## Operations
///
/// * **Start**: calls the `on_start` hook once. A failing hook is logged and the actor
///   keeps running with whatever state the entity holds.
/// * **Get**: returns `entity.view()`.
/// * **Action**: calls `handle_action` and returns its result, wrapping entity errors
///   in [`FrameworkError::EntityError`].
/// * **Stop**: when every client is dropped the loop ends and `on_stop` runs.
pub struct StateActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ActorRequest<T>>,
    entity: T,
}

impl<T: ActorEntity> StateActor<T> {
    /// Creates a new `StateActor` owning `entity` and its associated `StateClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client wait until there is space.
    /// * `entity` - The initial state. `on_start` may replace it from storage.
    pub fn new(buffer_size: usize, entity: T) -> (Self, StateClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self { receiver, entity };
        let client = StateClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    ///
    /// # Context Injection
    /// The `context` argument is injected into every entity hook. It is dropped when the
    /// loop ends, which releases any client clones it holds and lets downstream actors
    /// shut down in turn.
    pub async fn run(mut self, context: T::Context) {
        // "CartState" instead of "storefront_state::cart_actor::entity::CartState"
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        if let Err(e) = self.entity.on_start(&context).await {
            warn!(entity_type, error = %e, "on_start failed");
        }

        let mut handled: u64 = 0;
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ActorRequest::Get { respond_to } => {
                    debug!(entity_type, "Get");
                    let _ = respond_to.send(Ok(self.entity.view()));
                }
                ActorRequest::Action { action, respond_to } => {
                    debug!(entity_type, ?action, "Action");
                    let result = self
                        .entity
                        .handle_action(action, &context)
                        .await
                        .map_err(|e| FrameworkError::EntityError(Box::new(e)));
                    match &result {
                        Ok(_) => info!(entity_type, "Action ok"),
                        Err(e) => warn!(entity_type, error = %e, "Action failed"),
                    }
                    handled += 1;
                    let _ = respond_to.send(result);
                }
            }
        }

        self.entity.on_stop(&context).await;
        info!(entity_type, handled, "Shutdown");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    #[derive(Debug, thiserror::Error)]
    #[error("tally overflow")]
    struct TallyError;

    #[derive(Debug)]
    enum TallyAction {
        Add(u8),
        Reset,
    }

    struct Tally {
        total: u8,
        restored: bool,
    }

    #[async_trait]
    impl ActorEntity for Tally {
        type View = (u8, bool);
        type Action = TallyAction;
        type ActionResult = u8;
        type Context = Arc<AtomicBool>;
        type Error = TallyError;

        async fn on_start(&mut self, _ctx: &Self::Context) -> Result<(), TallyError> {
            self.restored = true;
            Ok(())
        }

        fn view(&self) -> (u8, bool) {
            (self.total, self.restored)
        }

        async fn handle_action(
            &mut self,
            action: TallyAction,
            _ctx: &Self::Context,
        ) -> Result<u8, TallyError> {
            match action {
                TallyAction::Add(n) => {
                    self.total = self.total.checked_add(n).ok_or(TallyError)?;
                    Ok(self.total)
                }
                TallyAction::Reset => {
                    self.total = 0;
                    Ok(0)
                }
            }
        }

        async fn on_stop(&mut self, ctx: &Self::Context) {
            ctx.store(true, Ordering::SeqCst);
        }
    }

    #[tokio::test]
    async fn test_actor_runs_hooks_and_actions() {
        let stopped = Arc::new(AtomicBool::new(false));
        let (actor, client) = StateActor::new(4, Tally { total: 0, restored: false });
        let handle = tokio::spawn(actor.run(stopped.clone()));

        assert_eq!(client.get().await.unwrap(), (0, true));
        assert_eq!(client.perform_action(TallyAction::Add(5)).await.unwrap(), 5);
        assert_eq!(client.perform_action(TallyAction::Add(7)).await.unwrap(), 12);

        // Entity errors surface wrapped, state is untouched
        let err = client.perform_action(TallyAction::Add(250)).await.unwrap_err();
        assert!(matches!(err, FrameworkError::EntityError(_)));
        assert_eq!(client.get().await.unwrap().0, 12);

        assert_eq!(client.perform_action(TallyAction::Reset).await.unwrap(), 0);

        drop(client);
        handle.await.unwrap();
        assert!(stopped.load(Ordering::SeqCst), "on_stop should run after the mailbox closes");
    }

    #[tokio::test]
    async fn test_client_reports_closed_actor() {
        let (actor, client) = StateActor::new(4, Tally { total: 0, restored: false });
        drop(actor);
        let err = client.get().await.unwrap_err();
        assert!(matches!(err, FrameworkError::ActorClosed));
    }
}

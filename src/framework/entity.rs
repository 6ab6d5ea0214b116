//! # ActorEntity Trait
//!
//! The `ActorEntity` trait is the contract every stateful storefront component (cart,
//! notifications, theme, checkout) implements to be driven by the generic [`StateActor`].
//!
//! # Architecture Note
//! Each component owns exactly one piece of state. Instead of a global mutable cart or
//! theme, the state lives inside an entity value that is moved into its actor task.
//! Only that task can touch it, so every mutation is ordered by mailbox arrival and
//! no locks are needed.
//!
//! We use associated types (`Action`, `ActionResult`, `View`) so a cart action can
//! never be sent to the theme actor. The compiler rejects it.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_start`] runs once before the first message (restore from storage).
//! - [`ActorEntity::on_stop`] runs once after the mailbox closes.
//!
//! Both default to doing nothing.
//!
//! [`StateActor`]: crate::framework::StateActor

use async_trait::async_trait;
use std::fmt::Debug;

/// Trait that any stateful component must implement to be managed by a `StateActor`.
///
/// # Async & Context
/// The trait is `#[async_trait]` so hooks can await other actors (checkout awaits the
/// cart, the cart awaits the notification queue). Dependencies arrive through
/// `Context`, which is handed to `run()` rather than `new()`. This late binding keeps
/// actor construction free of ordering constraints.
#[async_trait]
pub trait ActorEntity: Send + 'static {
    /// Read model returned by `Get` requests. Always a snapshot by value.
    type View: Clone + Send + Debug;

    /// Enum of component-specific operations (e.g. `CartAction::Add`).
    type Action: Send + Debug;

    /// The result type returned by actions.
    type ActionResult: Send + Debug;

    /// The runtime dependencies injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// One enum per actor rather than one per action. Clients deal with a single
    /// error type and can pattern match on it after mapping.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Called once when the actor starts, before any message is processed.
    /// Use this hook to restore state from the persistent store.
    async fn on_start(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Produce the current read model.
    fn view(&self) -> Self::View;

    /// Handle a component-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;

    /// Called once after the mailbox has closed and drained.
    async fn on_stop(&mut self, _ctx: &Self::Context) {}
}

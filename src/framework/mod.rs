//! Generic actor framework for owned client state.
//!
//! This module provides the building blocks every storefront component is made of:
//! a piece of state owned exclusively by one Tokio task, a mailbox, and a typed
//! handle that sends requests to it.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that stateful components implement to be driven by an actor
//! - [`StateActor`] - Generic actor that owns one entity and runs its message loop
//! - [`StateClient`] - Cloneable handle used to query and mutate the entity
//! - [`ActorClient`] - Trait that domain clients implement to inherit `view()`
//! - [`FrameworkError`] - Common error types
//! - [`ScheduledTask`] / [`Debouncer`] - Cancellable timers
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning full actors.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod timer;

pub use actor::StateActor;
pub use client::StateClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ActorRequest, Response};
pub use timer::{Debouncer, ScheduledTask};

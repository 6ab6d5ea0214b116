//! Type-safe wrappers around [`StateClient`](crate::framework::StateClient).
//!
//! One client per actor. Each implements [`ActorClient`] for the shared `view()` read and
//! maps framework failures into the actor's own error type.

pub mod cart_client;
pub mod checkout_client;
pub mod notification_client;
pub mod theme_client;

pub use crate::framework::ActorClient;
pub use cart_client::*;
pub use checkout_client::*;
pub use notification_client::*;
pub use theme_client::*;

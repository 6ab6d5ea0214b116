//! # Notification Actor
//!
//! Ephemeral, single-slot UI messages ("Added to cart successfully!", validation
//! errors, ...). Independent of cart and order state; nothing here is persisted.
//!
//! ## Structure
//!
//! - [`entity`] - [`NotificationCenter`], the slot and its auto-dismiss timer
//! - [`actions`] - [`NotificationAction`] and [`NotificationActionResult`]
//! - [`error`] - [`NotificationError`]
//! - [`new()`] - Factory function that creates the actor and its client
//!
//! ## Usage
//!
//! ```rust
//! use storefront_state::notification_actor;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = notification_actor::new(8, Duration::from_millis(3000));
//!     tokio::spawn(actor.run(()));
//!
//!     let id = client.success("Added to cart successfully!").await?;
//!     assert_eq!(client.current().map(|n| n.id), Some(id));
//!     assert!(client.dismiss(id).await?);
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use entity::NotificationCenter;
pub use error::*;

use crate::clients::NotificationClient;
use crate::framework::StateActor;
use std::time::Duration;

/// Creates a new notification actor and its client.
pub fn new(capacity: usize, display_for: Duration) -> (StateActor<NotificationCenter>, NotificationClient) {
    let center = NotificationCenter::new(display_for);
    let slot = center.subscribe();
    let (actor, generic_client) = StateActor::new(capacity, center);
    (actor, NotificationClient::new(generic_client, slot))
}

//! # Cart Actor
//!
//! Owns the shopping cart. Every mutation is applied in memory, written to the
//! [`PersistentStore`](crate::store::PersistentStore) under `cart`, and then announced
//! through the notification actor.
//!
//! ## Structure
//!
//! - [`entity`] - [`CartState`] and its injected [`CartContext`]
//! - [`actions`] - [`CartAction`] and [`CartActionResult`]
//! - [`error`] - [`CartError`]
//! - [`new()`] - Factory function that creates the actor and its client
//!
//! ## Usage
//!
//! ```rust
//! use storefront_state::cart_actor::{self, CartContext};
//! use storefront_state::catalog::Catalog;
//! use storefront_state::model::{AddOutcome, ItemId};
//! use storefront_state::notification_actor;
//! use storefront_state::store::PersistentStore;
//! use rust_decimal::Decimal;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = PersistentStore::in_memory();
//!     let (notify_actor, notifier) = notification_actor::new(8, Duration::from_secs(3));
//!     let (cart_actor, cart) = cart_actor::new(8, Decimal::new(10, 2));
//!     tokio::spawn(notify_actor.run(()));
//!     tokio::spawn(cart_actor.run(CartContext { store, notifier }));
//!
//!     let catalog = Catalog::standard();
//!     let product = catalog.find(ItemId(1)).unwrap();
//!     assert_eq!(cart.add_product(product).await?, AddOutcome::Added);
//!     assert_eq!(cart.add_product(product).await?, AddOutcome::AlreadyInCart);
//!     assert_eq!(cart.total().await?, Decimal::new(299, 0));
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use entity::{CartContext, CartState, ADDED_TO_CART, ALREADY_IN_CART, REMOVED_FROM_CART};
pub use error::*;

use crate::clients::CartClient;
use crate::framework::StateActor;
use rust_decimal::Decimal;

/// Creates a new cart actor and its client. The cart is restored when the actor runs.
pub fn new(capacity: usize, tax_rate: Decimal) -> (StateActor<CartState>, CartClient) {
    let (actor, generic_client) = StateActor::new(capacity, CartState::new(tax_rate));
    (actor, CartClient::new(generic_client))
}

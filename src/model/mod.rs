//! Plain data carried between the storefront actors and persisted by the store.
//!
//! Nothing in here talks to a channel. The actors in [`cart_actor`](crate::cart_actor),
//! [`theme_actor`](crate::theme_actor), [`notification_actor`](crate::notification_actor)
//! and [`checkout_actor`](crate::checkout_actor) own values of these types.

pub mod cart;
pub mod money;
pub mod notification;
pub mod order;
pub mod theme;

pub use cart::*;
pub use money::format_usd;
pub use notification::*;
pub use order::*;
pub use theme::*;

//! # System Lifecycle & Orchestration
//!
//! Starting, wiring and stopping the storefront actors.
//!
//! ## The StorefrontSystem Pattern
//!
//! 1. **Create** every actor and its client. Nothing depends on anything yet.
//! 2. **Run** each actor with its context: the shared
//!    [`PersistentStore`](crate::store::PersistentStore) plus clones of the clients it
//!    talks to.
//! 3. **Shut down** by dropping the clients and awaiting the actor tasks.
//!
//! ## Dependency Injection via Context
//!
//! ```rust,ignore
//! impl ActorEntity for NotificationCenter { type Context = (); }
//! impl ActorEntity for CartState { type Context = CartContext; }         // store, notifier
//! impl ActorEntity for ThemeState { type Context = ThemeContext; }       // store, appearance
//! impl ActorEntity for CheckoutProcessor { type Context = CheckoutContext; } // store, cart, notifier
//! ```
//!
//! Context is handed to `run()`, not to the constructor, so the clients can be created
//! before any actor runs.
//!
//! ## Configuration
//!
//! [`StorefrontConfig`] holds the tax rate, timings, mailbox size and storage location.
//! Load it with [`StorefrontConfig::from_env`] or [`StorefrontConfig::load`].
//!
//! ## Observability
//!
//! [`setup_tracing`] installs the log subscriber. See the [`tracing`] module.

pub mod config;
pub mod storefront_system;
pub mod tracing;

pub use config::*;
pub use storefront_system::*;
pub use self::tracing::setup_tracing;

//! # Storefront State
//!
//! > **The client-side state layer of a small digital-goods storefront.**
//!
//! The storefront sells website templates. This crate owns everything the pages share:
//! the cart, theme selection, transient notifications, the checkout workflow and order
//! history. Each concern is an actor with isolated state; the presentation layer talks
//! to it through a typed client and observes it through watch channels.
//!
//! ## 🚀 Core Concepts
//!
//! ### One Loop, Many Entities
//! Every actor is a [`StateActor<T>`](framework::StateActor) around an entity that
//! implements [`ActorEntity`](framework::ActorEntity). The loop that receives requests,
//! calls the entity and answers is written once in [`framework`].
//!
//! ### Persisted State
//! The cart, theme preference, accent colours and order history survive restarts
//! through the [`store::PersistentStore`]. Reads never fail: a missing or malformed
//! value yields the default and a warning in the log.
//!
//! ### Observable State
//! The current notification, effective theme, accent palette, checkout phase and search
//! results are published on `tokio::sync::watch` channels, so a view can re-render on
//! change without polling an actor.
//!
//! ## 👩‍💻 Architecture Notes
//!
//! ### 1. Type-Safe Error Handling
//! Each actor defines its own error type (`CartError`, `ThemeError`, `CheckoutError`,
//! ...). Checkout validation failures reach the caller as
//! [`CheckoutError::Validation`](checkout_actor::CheckoutError::Validation) with every
//! failing field listed.
//!
//! ### 2. Async Context Injection
//! Dependencies are injected via `run()`, not at construction time. The checkout actor
//! receives the cart and notification clients this way.
//!
//! ### 3. Concurrency Model
//! Actors process their mailbox sequentially, so a second checkout submission waits
//! behind the first and cart mutations never interleave.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! - **Key items**: [`ActorEntity`](framework::ActorEntity),
//!   [`StateActor`](framework::StateActor), [`MockClient`](framework::mock::MockClient),
//!   [`Debouncer`](framework::Debouncer).
//!
//! ### 2. The Orchestrator ([`lifecycle`])
//! - **Key items**: [`StorefrontSystem`](lifecycle::StorefrontSystem),
//!   [`StorefrontConfig`](lifecycle::StorefrontConfig).
//!
//! ### 3. The Interface ([`clients`])
//! - **Key items**: [`CartClient`](clients::CartClient),
//!   [`CheckoutClient`](clients::CheckoutClient), [`ThemeClient`](clients::ThemeClient),
//!   [`NotificationClient`](clients::NotificationClient).
//!
//! ### 4. The Actors ([`cart_actor`], [`theme_actor`], [`notification_actor`], [`checkout_actor`])
//!
//! ### 5. Data ([`model`], [`catalog`], [`store`])
//! Plain data types, the product catalog with its debounced search, and persistence.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! RUST_LOG=info cargo run
//! STOREFRONT_CONFIG=storefront.toml cargo run
//! cargo test
//! ```

pub mod cart_actor;
pub mod catalog;
pub mod checkout_actor;
pub mod clients;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod notification_actor;
pub mod store;
pub mod theme_actor;

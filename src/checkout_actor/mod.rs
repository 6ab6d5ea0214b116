//! # Checkout Actor
//!
//! Turns a submitted checkout form into a committed order.
//!
//! 1. **Validating** - required, payment-specific and email fields are checked. On
//!    failure error notifications are shown and nothing else changes.
//! 2. **Settling** - the cart is snapshotted, tax applied, and the simulated payment
//!    takes `settlement_delay`. Payment always succeeds.
//! 3. **Committed** - the order is appended to `orders`, written to `lastOrder`, and
//!    the cart is cleared.
//!
//! ## Structure
//!
//! - [`entity`] - [`CheckoutProcessor`] and its injected [`CheckoutContext`]
//! - [`validation`] - [`FormConfig`], [`FormSnapshot`], [`ValidationError`]
//! - [`actions`] - [`CheckoutAction`], [`CheckoutPhase`], [`Confirmation`]
//! - [`error`] - [`CheckoutError`]
//! - [`new()`] - Factory function that creates the actor and its client
//!
//! ## Dependencies
//!
//! The checkout actor holds clients of the cart and notification actors in its context.
//! Neither of them depends back on checkout, so shutdown by dropping clients works.

pub mod actions;
pub mod entity;
pub mod error;
pub mod validation;

pub use actions::*;
pub use entity::{CheckoutContext, CheckoutProcessor, DOWNLOAD_STARTED, INVALID_EMAIL, MISSING_FIELDS};
pub use error::*;
pub use validation::{fields, CheckoutSubmission, FormConfig, FormSnapshot, ValidationError};

use crate::clients::CheckoutClient;
use crate::framework::StateActor;
use rust_decimal::Decimal;
use std::time::Duration;

/// Creates a new checkout actor and its client.
pub fn new(
    capacity: usize,
    tax_rate: Decimal,
    settlement_delay: Duration,
) -> (StateActor<CheckoutProcessor>, CheckoutClient) {
    let processor = CheckoutProcessor::new(FormConfig::checkout(), tax_rate, settlement_delay);
    let phase = processor.subscribe_phase();
    let (actor, generic_client) = StateActor::new(capacity, processor);
    (actor, CheckoutClient::new(generic_client, phase))
}

//! Error types for the checkout actor.

use super::validation::ValidationError;
use crate::cart_actor::CartError;
use thiserror::Error;

/// Errors that can occur during checkout.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CheckoutError {
    /// The form failed validation. Nothing was committed.
    #[error("Checkout validation failed: {0}")]
    Validation(ValidationError),

    /// A previous submission is still being processed.
    #[error("Checkout already in progress")]
    InProgress,

    /// The cart could not be read.
    #[error("Cart unavailable: {0}")]
    Cart(#[from] CartError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for CheckoutError {
    fn from(msg: String) -> Self {
        CheckoutError::ActorCommunicationError(msg)
    }
}

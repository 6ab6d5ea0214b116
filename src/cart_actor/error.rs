//! Error types for the cart actor.

use thiserror::Error;

/// Cart operations do not fail for ordinary inputs; only the actor plumbing can.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for CartError {
    fn from(msg: String) -> Self {
        CartError::ActorCommunicationError(msg)
    }
}

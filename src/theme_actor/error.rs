//! Error types for the theme actor.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ThemeError {
    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for ThemeError {
    fn from(msg: String) -> Self {
        ThemeError::ActorCommunicationError(msg)
    }
}

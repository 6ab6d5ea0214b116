//! Error types for the notification actor.

use thiserror::Error;

/// The notification slot itself never fails; only reaching it can.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum NotificationError {
    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for NotificationError {
    fn from(msg: String) -> Self {
        NotificationError::ActorCommunicationError(msg)
    }
}

//! # Framework Errors
//!
//! Common error types shared by every actor and client. Entity-specific failures
//! travel inside [`FrameworkError::EntityError`] and are mapped back to typed errors
//! by each domain client.

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

use crate::framework::{ActorEntity, FrameworkError, StateClient};
use async_trait::async_trait;

/// Trait for component-specific clients to inherit the standard read operation.
///
/// Domain clients (`CartClient`, `ThemeClient`, ...) wrap a [`StateClient`] and expose
/// typed methods. Implementing this trait gives them `view()` for free and centralizes
/// how framework errors become the client's own error type.
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The component-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic StateClient.
    fn inner(&self) -> &StateClient<T>;

    /// Map framework errors to the specific component error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch a snapshot of the component's state.
    #[tracing::instrument(skip(self))]
    async fn view(&self) -> Result<T::View, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get().await.map_err(Self::map_error)
    }
}

//! # Cart Client
//!
//! Provides a high‑level API for the cart actor. Mutations go through actions; reads
//! are derived from a `Get` snapshot of the cart.
use crate::cart_actor::{CartAction, CartActionResult, CartError, CartState};
use crate::catalog::Product;
use crate::framework::{ActorClient, FrameworkError, StateClient};
use crate::model::{AddOutcome, Cart, CartItemInput, CartSummary, ItemId};
use async_trait::async_trait;
use rust_decimal::Decimal;
use tracing::{debug, instrument};

/// Client for interacting with the cart actor.
#[derive(Clone)]
pub struct CartClient {
    inner: StateClient<CartState>,
}

impl CartClient {
    pub fn new(inner: StateClient<CartState>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, item), fields(id = %item.id))]
    pub async fn add(&self, item: CartItemInput) -> Result<AddOutcome, CartError> {
        debug!("Sending request");
        match self.inner.perform_action(CartAction::Add(item)).await {
            Ok(CartActionResult::Add(outcome)) => Ok(outcome),
            Ok(_) => unreachable!("Add action must return Add result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    pub async fn add_product(&self, product: &Product) -> Result<AddOutcome, CartError> {
        self.add(CartItemInput::from(product)).await
    }

    #[instrument(skip(self))]
    pub async fn remove(&self, id: ItemId) -> Result<bool, CartError> {
        debug!("Sending request");
        match self.inner.perform_action(CartAction::Remove(id)).await {
            Ok(CartActionResult::Remove(removed)) => Ok(removed),
            Ok(_) => unreachable!("Remove action must return Remove result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    #[instrument(skip(self))]
    pub async fn clear(&self) -> Result<(), CartError> {
        debug!("Sending request");
        match self.inner.perform_action(CartAction::Clear).await {
            Ok(CartActionResult::Clear) => Ok(()),
            Ok(_) => unreachable!("Clear action must return Clear result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Snapshot of the cart, by value.
    pub async fn cart(&self) -> Result<Cart, CartError> {
        self.view().await
    }

    /// Σ price × quantity over the current cart.
    pub async fn total(&self) -> Result<Decimal, CartError> {
        Ok(self.view().await?.total())
    }

    pub async fn item_count(&self) -> Result<u32, CartError> {
        Ok(self.view().await?.item_count())
    }

    #[instrument(skip(self))]
    pub async fn summary(&self) -> Result<CartSummary, CartError> {
        match self.inner.perform_action(CartAction::Summary).await {
            Ok(CartActionResult::Summary(summary)) => Ok(summary),
            Ok(_) => unreachable!("Summary action must return Summary result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }
}

#[async_trait]
impl ActorClient<CartState> for CartClient {
    type Error = CartError;

    fn inner(&self) -> &StateClient<CartState> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        CartError::ActorCommunicationError(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_client, expect_get, MockClient};

    fn input(id: u32, price: i64) -> CartItemInput {
        CartItemInput {
            id: ItemId(id),
            title: format!("Project {id}"),
            price: Decimal::new(price, 0),
            image: String::new(),
        }
    }

    #[tokio::test]
    async fn test_total_is_derived_from_snapshot() {
        let (client, mut receiver) = create_mock_client::<CartState>(10);
        let cart_client = CartClient::new(client);

        let task = tokio::spawn(async move { cart_client.total().await });

        let responder = expect_get(&mut receiver).await.expect("Expected Get request");
        let mut cart = Cart::new();
        cart.insert(input(1, 299));
        cart.insert(input(2, 99));
        responder.send(Ok(cart)).unwrap();

        assert_eq!(task.await.unwrap().unwrap(), Decimal::new(398, 0));
    }

    #[tokio::test]
    async fn test_actions_and_errors_map_through() {
        let mut mock = MockClient::<CartState>::new();
        mock.expect_action().return_ok(CartActionResult::Add(AddOutcome::Added));
        mock.expect_action().return_ok(CartActionResult::Remove(false));
        mock.expect_action().return_err(FrameworkError::ActorClosed);

        let cart = CartClient::new(mock.client());
        assert_eq!(cart.add(input(3, 199)).await.unwrap(), AddOutcome::Added);
        assert!(!cart.remove(ItemId(9)).await.unwrap());
        assert!(matches!(
            cart.clear().await,
            Err(CartError::ActorCommunicationError(msg)) if msg == "Actor closed"
        ));

        mock.verify();
        assert_eq!(
            mock.received_actions(),
            vec![
                CartAction::Add(input(3, 199)),
                CartAction::Remove(ItemId(9)),
                CartAction::Clear
            ]
        );
    }
}

//! [`ActorEntity`] implementation for the shopping cart.
//!
//! The cart is restored from the store in `on_start` and written back after every
//! mutation, before the action's response is sent. Notifications are posted after the
//! write, so the presentation layer never announces a change the store does not hold.

use super::actions::{CartAction, CartActionResult};
use super::error::CartError;
use crate::clients::NotificationClient;
use crate::framework::ActorEntity;
use crate::model::{AddOutcome, Cart, CartItemInput, ItemId, NotificationKind};
use crate::store::{keys, PersistentStore};
use async_trait::async_trait;
use rust_decimal::Decimal;
use tracing::{debug, info};

pub const ALREADY_IN_CART: &str = "This item is already in your cart!";
pub const ADDED_TO_CART: &str = "Added to cart successfully!";
pub const REMOVED_FROM_CART: &str = "Removed from cart";

/// Dependencies injected into the cart actor.
#[derive(Clone)]
pub struct CartContext {
    pub store: PersistentStore,
    pub notifier: NotificationClient,
}

#[derive(Debug)]
pub struct CartState {
    cart: Cart,
    tax_rate: Decimal,
}

impl CartState {
    /// An empty cart. `on_start` replaces it with the stored one.
    pub fn new(tax_rate: Decimal) -> Self {
        Self {
            cart: Cart::new(),
            tax_rate,
        }
    }

    fn persist(&self, ctx: &CartContext) {
        ctx.store.set(keys::CART, &self.cart);
    }

    async fn add(&mut self, input: CartItemInput, ctx: &CartContext) -> AddOutcome {
        let id = input.id;
        if !self.cart.insert(input) {
            debug!(%id, "Already in cart");
            ctx.notifier.post(ALREADY_IN_CART, NotificationKind::Info).await;
            return AddOutcome::AlreadyInCart;
        }
        self.persist(ctx);
        info!(%id, items = self.cart.len(), "Added");
        ctx.notifier.post(ADDED_TO_CART, NotificationKind::Success).await;
        AddOutcome::Added
    }

    async fn remove(&mut self, id: ItemId, ctx: &CartContext) -> bool {
        let removed = self.cart.remove(id);
        self.persist(ctx);
        info!(%id, removed, items = self.cart.len(), "Removed");
        ctx.notifier.post(REMOVED_FROM_CART, NotificationKind::Info).await;
        removed
    }
}

#[async_trait]
impl ActorEntity for CartState {
    type View = Cart;
    type Action = CartAction;
    type ActionResult = CartActionResult;
    type Context = CartContext;
    type Error = CartError;

    async fn on_start(&mut self, ctx: &CartContext) -> Result<(), CartError> {
        self.cart = ctx.store.get_or_default(keys::CART);
        info!(items = self.cart.len(), "Cart restored");
        Ok(())
    }

    fn view(&self) -> Cart {
        self.cart.clone()
    }

    async fn handle_action(
        &mut self,
        action: CartAction,
        ctx: &CartContext,
    ) -> Result<CartActionResult, CartError> {
        match action {
            CartAction::Add(input) => Ok(CartActionResult::Add(self.add(input, ctx).await)),
            CartAction::Remove(id) => Ok(CartActionResult::Remove(self.remove(id, ctx).await)),
            CartAction::Clear => {
                self.cart.clear();
                self.persist(ctx);
                info!("Cleared");
                Ok(CartActionResult::Clear)
            }
            CartAction::Summary => Ok(CartActionResult::Summary(self.cart.summary(self.tax_rate))),
        }
    }
}

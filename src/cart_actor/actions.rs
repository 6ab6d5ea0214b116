//! Custom actions for the cart actor.
//!
//! Reads that need no state (`total`, `item_count`, the items themselves) go through
//! the `Get` view instead; only mutations and tax-dependent reads are actions.

use crate::model::{AddOutcome, CartItemInput, CartSummary, ItemId};

#[derive(Debug, Clone, PartialEq)]
pub enum CartAction {
    /// Append an item with quantity 1 unless its id is already in the cart.
    Add(CartItemInput),
    /// Remove every item with this id. Absent ids are not an error.
    Remove(ItemId),
    /// Empty the cart without notifying.
    Clear,
    /// Subtotal, tax and total at the configured tax rate.
    Summary,
}

/// Results from CartActions - variants match 1:1 with CartAction
#[derive(Debug, Clone, PartialEq)]
pub enum CartActionResult {
    Add(AddOutcome),
    /// `true` if something was removed.
    Remove(bool),
    Clear,
    Summary(CartSummary),
}

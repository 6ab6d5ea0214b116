//! The shopping cart and its line items.
//!
//! # Invariants
//! - at most one [`CartItem`] per [`ItemId`];
//! - every `quantity` is at least 1;
//! - every `price` is non-negative.
//!
//! They hold for carts built through [`Cart::insert`] and for carts decoded from the
//! store, which are normalised on the way in.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt::Display;

/// Type-safe identifier for catalogue items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u32);

impl From<u32> for ItemId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: ItemId,
    pub title: String,
    pub price: Decimal,
    pub image: String,
    pub quantity: u32,
}

impl CartItem {
    /// `price × quantity`, saturating at `Decimal::MAX`.
    pub fn line_total(&self) -> Decimal {
        self.price.saturating_mul(Decimal::from(self.quantity))
    }
}

/// Payload for adding an item. The cart assigns the quantity.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItemInput {
    pub id: ItemId,
    pub title: String,
    pub price: Decimal,
    pub image: String,
}

/// What happened on `add`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    AlreadyInCart,
}

/// Subtotal, tax and total of a cart at a given tax rate, each rounded to cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartSummary {
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

/// Ordered cart contents. Serialised as a plain JSON array of items.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<CartItem>", into = "Vec<CartItem>")]
pub struct Cart {
    items: Vec<CartItem>,
}

impl From<Vec<CartItem>> for Cart {
    fn from(items: Vec<CartItem>) -> Self {
        let mut seen = HashSet::new();
        let items = items
            .into_iter()
            .filter(|item| item.price >= Decimal::ZERO && seen.insert(item.id))
            .map(|mut item| {
                item.quantity = item.quantity.max(1);
                item
            })
            .collect();
        Self { items }
    }
}

impl From<Cart> for Vec<CartItem> {
    fn from(cart: Cart) -> Self {
        cart.items
    }
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `input` with quantity 1. Returns `false` (and changes nothing) if an item
    /// with the same id is already present. Negative prices are clamped to zero.
    pub fn insert(&mut self, input: CartItemInput) -> bool {
        if self.contains(input.id) {
            return false;
        }
        self.items.push(CartItem {
            id: input.id,
            title: input.title,
            price: input.price.max(Decimal::ZERO),
            image: input.image,
            quantity: 1,
        });
        true
    }

    /// Drop every item with `id`. Returns whether anything was removed.
    pub fn remove(&mut self, id: ItemId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Σ price × quantity. Zero for an empty cart, `Decimal::MAX` at most.
    pub fn total(&self) -> Decimal {
        self.items
            .iter()
            .fold(Decimal::ZERO, |acc, item| acc.saturating_add(item.line_total()))
    }

    /// Σ quantity, the number shown on the cart badge. Saturates at `u32::MAX`.
    pub fn item_count(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |acc, item| acc.saturating_add(item.quantity))
    }

    pub fn summary(&self, tax_rate: Decimal) -> CartSummary {
        let subtotal = self.total();
        let tax = subtotal.saturating_mul(tax_rate);
        CartSummary {
            subtotal: round_cents(subtotal),
            tax: round_cents(tax),
            total: round_cents(subtotal.saturating_add(tax)),
        }
    }

    /// `total × (1 + tax_rate)` rounded to cents, saturating at `Decimal::MAX`.
    pub fn total_with_tax(&self, tax_rate: Decimal) -> Decimal {
        round_cents(
            self.total()
                .saturating_mul(Decimal::ONE.saturating_add(tax_rate)),
        )
    }
}

/// Round to 2 decimal places, halves away from zero.
pub fn round_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(id: u32, price: i64) -> CartItemInput {
        CartItemInput {
            id: ItemId(id),
            title: format!("Project {id}"),
            price: Decimal::new(price, 0),
            image: format!("assets/img/project-{id}.jpg"),
        }
    }

    #[test]
    fn test_insert_rejects_duplicate_ids() {
        let mut cart = Cart::new();
        assert!(cart.insert(input(1, 299)));
        assert!(!cart.insert(input(1, 5)));
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items()[0].price, Decimal::new(299, 0));
        assert_eq!(cart.items()[0].quantity, 1);
    }

    #[test]
    fn test_total_and_item_count() {
        let mut cart = Cart::new();
        assert_eq!(cart.total(), Decimal::ZERO);
        cart.insert(input(1, 299));
        cart.insert(input(2, 99));
        assert_eq!(cart.total(), Decimal::new(398, 0));
        assert_eq!(cart.item_count(), 2);

        assert!(cart.remove(ItemId(1)));
        assert!(!cart.remove(ItemId(1)));
        assert_eq!(cart.total(), Decimal::new(99, 0));
    }

    #[test]
    fn test_summary_applies_tax() {
        let mut cart = Cart::new();
        cart.insert(input(3, 199));
        let summary = cart.summary(Decimal::new(10, 2));
        assert_eq!(summary.subtotal, Decimal::new(19900, 2));
        assert_eq!(summary.tax, Decimal::new(1990, 2));
        assert_eq!(summary.total, Decimal::new(21890, 2));
    }

    #[test]
    fn test_negative_price_is_clamped() {
        let mut cart = Cart::new();
        cart.insert(input(9, -5));
        assert_eq!(cart.total(), Decimal::ZERO);
    }

    #[test]
    fn test_decoding_normalises_stored_items() {
        let raw = r#"[
            {"id": 1, "title": "A", "price": "10", "image": "a.jpg", "quantity": 0},
            {"id": 1, "title": "B", "price": "20", "image": "b.jpg", "quantity": 1},
            {"id": 2, "title": "C", "price": "-1", "image": "c.jpg", "quantity": 1},
            {"id": 3, "title": "D", "price": 4.5, "image": "d.jpg", "quantity": 2}
        ]"#;
        let cart: Cart = serde_json::from_str(raw).unwrap();

        let ids: Vec<_> = cart.items().iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![ItemId(1), ItemId(3)]);
        assert_eq!(cart.items()[0].title, "A");
        assert_eq!(cart.items()[0].quantity, 1);
        assert_eq!(cart.total(), Decimal::new(19, 0));
    }

    #[test]
    fn test_huge_prices_saturate() {
        let mut cart = Cart::new();
        cart.insert(CartItemInput {
            id: ItemId(1),
            title: "Enterprise".into(),
            price: Decimal::MAX,
            image: String::new(),
        });
        cart.insert(input(2, 99));

        assert_eq!(cart.total(), Decimal::MAX);
        assert_eq!(cart.total_with_tax(Decimal::new(10, 2)), Decimal::MAX);
        let summary = cart.summary(Decimal::new(10, 2));
        assert_eq!(summary.subtotal, Decimal::MAX);
        assert_eq!(summary.total, Decimal::MAX);
    }

    #[test]
    fn test_huge_stored_quantities_saturate() {
        let raw = r#"[
            {"id": 1, "title": "A", "price": "1", "image": "a.jpg", "quantity": 4000000000},
            {"id": 2, "title": "B", "price": "1", "image": "b.jpg", "quantity": 4000000000}
        ]"#;
        let cart: Cart = serde_json::from_str(raw).unwrap();

        assert_eq!(cart.item_count(), u32::MAX);
        assert_eq!(cart.total(), Decimal::new(8_000_000_000, 0));
    }

    #[test]
    fn test_serialises_as_array() {
        let mut cart = Cart::new();
        cart.insert(input(4, 249));
        let json = serde_json::to_value(&cart).unwrap();
        assert_eq!(json[0]["id"], 4);
        assert_eq!(json[0]["quantity"], 1);

        let back: Cart = serde_json::from_value(json).unwrap();
        assert_eq!(back, cart);
    }
}

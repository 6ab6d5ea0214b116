use proptest::prelude::*;
use rust_decimal::Decimal;
use std::collections::HashSet;
use storefront_state::model::{round_cents, Cart, CartItem, CartItemInput, ItemId};

#[derive(Debug, Clone)]
enum Op {
    Add { id: u32, cents: i64 },
    Remove(u32),
    Clear,
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        6 => (0u32..8, -500i64..100_000).prop_map(|(id, cents)| Op::Add { id, cents }),
        3 => (0u32..8).prop_map(Op::Remove),
        1 => Just(Op::Clear),
    ]
}

fn apply(cart: &mut Cart, op: &Op) {
    match *op {
        Op::Add { id, cents } => {
            cart.insert(CartItemInput {
                id: ItemId(id),
                title: format!("Template {id}"),
                price: Decimal::new(cents, 2),
                image: String::new(),
            });
        }
        Op::Remove(id) => {
            cart.remove(ItemId(id));
        }
        Op::Clear => cart.clear(),
    }
}

proptest! {
    #[test]
    fn prop_cart_ids_unique_and_quantity_one(ops in prop::collection::vec(arb_op(), 0..40)) {
        let mut cart = Cart::new();
        for op in &ops {
            apply(&mut cart, op);
        }

        let ids: HashSet<ItemId> = cart.items().iter().map(|item| item.id).collect();
        prop_assert_eq!(ids.len(), cart.len());
        prop_assert!(cart.items().iter().all(|item| item.quantity == 1));
        prop_assert!(cart.items().iter().all(|item| item.price >= Decimal::ZERO));
        prop_assert_eq!(cart.item_count() as usize, cart.len());

        let sum: Decimal = cart.items().iter().map(|item| item.price).sum();
        prop_assert_eq!(cart.total(), sum);
    }

    #[test]
    fn prop_summary_adds_up(ops in prop::collection::vec(arb_op(), 0..20), rate in 0i64..30) {
        let mut cart = Cart::new();
        for op in &ops {
            apply(&mut cart, op);
        }
        let tax_rate = Decimal::new(rate, 2);
        let summary = cart.summary(tax_rate);

        prop_assert_eq!(summary.subtotal, cart.total());
        prop_assert_eq!(summary.total, round_cents(cart.total() * (Decimal::ONE + tax_rate)));
        prop_assert!((summary.subtotal + summary.tax - summary.total).abs() <= Decimal::new(1, 2));
    }

    #[test]
    fn prop_stored_cart_is_normalised(raw in prop::collection::vec((0u32..5, -100i64..1000, 0u32..4), 0..12)) {
        let items: Vec<CartItem> = raw
            .iter()
            .map(|&(id, cents, quantity)| CartItem {
                id: ItemId(id),
                title: String::new(),
                price: Decimal::new(cents, 2),
                image: String::new(),
                quantity,
            })
            .collect();
        let json = serde_json::to_string(&items).unwrap();
        let cart: Cart = serde_json::from_str(&json).unwrap();

        let ids: HashSet<ItemId> = cart.items().iter().map(|item| item.id).collect();
        prop_assert_eq!(ids.len(), cart.len());
        prop_assert!(cart.items().iter().all(|item| item.quantity >= 1));
        prop_assert!(cart.items().iter().all(|item| item.price >= Decimal::ZERO));
    }
}

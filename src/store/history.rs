//! Order history helpers on top of [`PersistentStore`].

use super::{keys, PersistentStore};
use crate::model::Order;

impl PersistentStore {
    /// Every committed order, oldest first. Empty if nothing was stored or the list is
    /// unreadable.
    pub fn orders(&self) -> Vec<Order> {
        self.get_or_default(keys::ORDERS)
    }

    pub fn last_order(&self) -> Option<Order> {
        self.get(keys::LAST_ORDER)
    }

    /// Append `order` to the history and make it the last order.
    ///
    /// Returns `false` if either write failed. The two writes are independent; a failed
    /// append still records `lastOrder`.
    pub fn record_order(&self, order: &Order) -> bool {
        let mut orders = self.orders();
        orders.push(order.clone());
        let appended = self.set(keys::ORDERS, &orders);
        let latest = self.set(keys::LAST_ORDER, order);
        appended && latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CartItem, Customer, ItemId, PaymentInfo};
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;

    fn order(at_millis: i64) -> Order {
        let customer = Customer {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            address: "1 Loop Rd".into(),
            city: "Springfield".into(),
            zip: "12345".into(),
            country: "US".into(),
        };
        let items = vec![CartItem {
            id: ItemId(1),
            title: "E-Commerce Platform".into(),
            price: Decimal::new(100, 0),
            image: "assets/ecommerce.jpg".into(),
            quantity: 1,
        }];
        let at = Utc.timestamp_millis_opt(at_millis).unwrap();
        Order::new(customer, PaymentInfo::paypal(), items, Decimal::new(11000, 2), at)
    }

    #[test]
    fn test_record_order_appends_and_sets_last() {
        let store = PersistentStore::in_memory();
        assert!(store.orders().is_empty());
        assert!(store.last_order().is_none());

        let first = order(1_700_000_000_000);
        let second = order(1_700_000_100_000);
        assert!(store.record_order(&first));
        assert!(store.record_order(&second));

        assert_eq!(store.orders(), vec![first, second.clone()]);
        assert_eq!(store.last_order(), Some(second));
    }

    #[test]
    fn test_orders_json_uses_camel_case() {
        let store = PersistentStore::in_memory();
        let placed = order(1_700_000_000_000);
        store.record_order(&placed);

        let raw: serde_json::Value = store.get(keys::LAST_ORDER).unwrap();
        assert_eq!(raw["orderId"], placed.order_id().as_str());
        assert!(raw["orderDate"].as_str().unwrap().starts_with("2023-11-14T"));
        assert_eq!(raw["payment"]["method"], "paypal");
    }
}

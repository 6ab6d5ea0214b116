//! Committed orders and the customer/payment data they carry.

use crate::model::CartItem;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Type-safe identifier for Orders: `ORD-<unix millis>-<8 hex chars>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    /// Fresh id for an order committed at `at`. The random suffix keeps ids unique
    /// when two orders land in the same millisecond.
    pub fn generate(at: DateTime<Utc>) -> Self {
        let suffix = uuid::Uuid::new_v4().simple().to_string();
        Self(format!("ORD-{}-{}", at.timestamp_millis(), &suffix[..8]))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub name: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub zip: String,
    pub country: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Card,
    Paypal,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 2] = [PaymentMethod::Card, PaymentMethod::Paypal];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "card",
            PaymentMethod::Paypal => "paypal",
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "card" => Ok(PaymentMethod::Card),
            "paypal" => Ok(PaymentMethod::Paypal),
            other => Err(format!("unknown payment method '{other}'")),
        }
    }
}

impl Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentInfo {
    pub method: PaymentMethod,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_name: Option<String>,
}

impl PaymentInfo {
    pub fn card(number: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            method: PaymentMethod::Card,
            card_number: Some(number.into()),
            card_name: Some(name.into()),
        }
    }

    pub fn paypal() -> Self {
        Self {
            method: PaymentMethod::Paypal,
            card_number: None,
            card_name: None,
        }
    }
}

/// A committed order. Immutable once built; fields are read through accessors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    order_id: OrderId,
    customer: Customer,
    payment: PaymentInfo,
    items: Vec<CartItem>,
    total: Decimal,
    order_date: DateTime<Utc>,
}

impl Order {
    /// Creates a new Order stamped at `at`.
    ///
    /// # Arguments
    /// * `items` - Snapshot of the cart, taken by value
    /// * `total` - Amount charged, tax included
    pub fn new(
        customer: Customer,
        payment: PaymentInfo,
        items: Vec<CartItem>,
        total: Decimal,
        at: DateTime<Utc>,
    ) -> Self {
        Self {
            order_id: OrderId::generate(at),
            customer,
            payment,
            items,
            total,
            order_date: at,
        }
    }

    pub fn order_id(&self) -> &OrderId {
        &self.order_id
    }

    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    pub fn payment(&self) -> &PaymentInfo {
        &self.payment
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn total(&self) -> Decimal {
        self.total
    }

    pub fn order_date(&self) -> DateTime<Utc> {
        self.order_date
    }
}

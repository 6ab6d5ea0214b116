//! Custom actions for the checkout actor.

use super::validation::FormSnapshot;
use crate::model::{ItemId, Order};

#[derive(Debug, Clone, PartialEq)]
pub enum CheckoutAction {
    /// Validate the form, settle, commit the order and clear the cart.
    Submit(FormSnapshot),
    /// Full order history, oldest first.
    ListOrders,
    /// Announce that a purchased item is downloading.
    StartDownload(ItemId),
}

/// Results from CheckoutActions - variants match 1:1 with CheckoutAction
#[derive(Debug, Clone, PartialEq)]
pub enum CheckoutActionResult {
    Submitted(Order),
    Orders(Vec<Order>),
    DownloadStarted,
}

/// Where a checkout currently is.
///
/// `Idle → Validating → Settling → Committed → Idle` on success,
/// `Idle → Validating → Rejected → Idle` when the form is invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckoutPhase {
    #[default]
    Idle,
    Validating,
    Settling,
    Committed,
    Rejected,
}

/// Read model of the checkout actor.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutView {
    pub phase: CheckoutPhase,
    pub last_order: Option<Order>,
    /// Orders committed since this actor started.
    pub orders_placed: u32,
}

/// What the order confirmation page should show.
#[derive(Debug, Clone, PartialEq)]
pub enum Confirmation {
    Show(Order),
    /// No order on record; send the visitor back to the shop.
    RedirectToCatalog,
}

//! [`ActorEntity`] implementation for the checkout processor.
//!
//! A submission runs entirely inside one `handle_action` call, so the actor mailbox
//! serialises submissions: a second one waits until the first has committed or been
//! rejected. The settlement delay is the only await on a timer; the phase is published
//! on a watch channel so callers can observe progress while the actor is busy.

use super::actions::{CheckoutAction, CheckoutActionResult, CheckoutPhase, CheckoutView};
use super::error::CheckoutError;
use super::validation::{FormConfig, FormSnapshot, ValidationError};
use crate::clients::{CartClient, NotificationClient};
use crate::framework::ActorEntity;
use crate::model::{ItemId, NotificationKind, Order};
use crate::store::PersistentStore;
use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use std::time::Duration;
use tokio::sync::watch;
use tracing::{debug, error, info, warn};

pub const INVALID_EMAIL: &str = "Please enter a valid email address";
pub const MISSING_FIELDS: &str = "Please fill in all required fields";
pub const DOWNLOAD_STARTED: &str = "Download started!";

/// Dependencies injected into the checkout actor.
#[derive(Clone)]
pub struct CheckoutContext {
    pub store: PersistentStore,
    pub cart: CartClient,
    pub notifier: NotificationClient,
}

pub struct CheckoutProcessor {
    form: FormConfig,
    tax_rate: Decimal,
    settlement_delay: Duration,
    phase: watch::Sender<CheckoutPhase>,
    last_order: Option<Order>,
    orders_placed: u32,
}

impl CheckoutProcessor {
    pub fn new(form: FormConfig, tax_rate: Decimal, settlement_delay: Duration) -> Self {
        let (phase, _) = watch::channel(CheckoutPhase::Idle);
        Self {
            form,
            tax_rate,
            settlement_delay,
            phase,
            last_order: None,
            orders_placed: 0,
        }
    }

    pub fn subscribe_phase(&self) -> watch::Receiver<CheckoutPhase> {
        self.phase.subscribe()
    }

    fn enter(&self, phase: CheckoutPhase) {
        debug!(?phase, "Checkout phase");
        self.phase.send_replace(phase);
    }

    async fn reject(&self, error: &ValidationError, ctx: &CheckoutContext) {
        for _ in &error.invalid_emails {
            ctx.notifier.post(INVALID_EMAIL, NotificationKind::Error).await;
        }
        ctx.notifier.post(MISSING_FIELDS, NotificationKind::Error).await;
    }

    async fn submit(&mut self, form: FormSnapshot, ctx: &CheckoutContext) -> Result<Order, CheckoutError> {
        self.enter(CheckoutPhase::Validating);
        let submission = match self.form.validate(&form) {
            Ok(submission) => submission,
            Err(error) => {
                self.enter(CheckoutPhase::Rejected);
                warn!(missing = ?error.missing, invalid_emails = ?error.invalid_emails, "Checkout rejected");
                self.reject(&error, ctx).await;
                self.enter(CheckoutPhase::Idle);
                return Err(CheckoutError::Validation(error));
            }
        };

        self.enter(CheckoutPhase::Settling);
        let cart = match ctx.cart.cart().await {
            Ok(cart) => cart,
            Err(e) => {
                self.enter(CheckoutPhase::Idle);
                return Err(e.into());
            }
        };
        let total = cart.total_with_tax(self.tax_rate);
        let order = Order::new(
            submission.customer,
            submission.payment,
            cart.items().to_vec(),
            total,
            Utc::now(),
        );
        info!(order_id = %order.order_id(), %total, items = cart.len(), "Settling payment");

        tokio::time::sleep(self.settlement_delay).await;

        if !ctx.store.record_order(&order) {
            // The cart is the only other copy of the purchase; keep it.
            error!(order_id = %order.order_id(), "Order not recorded in history, cart kept");
        } else if let Err(e) = ctx.cart.clear().await {
            warn!(error = %e, order_id = %order.order_id(), "Cart not cleared after commit");
        }
        self.last_order = Some(order.clone());
        self.orders_placed += 1;

        self.enter(CheckoutPhase::Committed);
        info!(order_id = %order.order_id(), "Order committed");
        self.enter(CheckoutPhase::Idle);
        Ok(order)
    }

    async fn start_download(&self, item: ItemId, ctx: &CheckoutContext) {
        info!(%item, "Download started");
        ctx.notifier.post(DOWNLOAD_STARTED, NotificationKind::Success).await;
    }
}

#[async_trait]
impl ActorEntity for CheckoutProcessor {
    type View = CheckoutView;
    type Action = CheckoutAction;
    type ActionResult = CheckoutActionResult;
    type Context = CheckoutContext;
    type Error = CheckoutError;

    async fn on_start(&mut self, ctx: &CheckoutContext) -> Result<(), CheckoutError> {
        self.last_order = ctx.store.last_order();
        Ok(())
    }

    fn view(&self) -> CheckoutView {
        CheckoutView {
            phase: *self.phase.borrow(),
            last_order: self.last_order.clone(),
            orders_placed: self.orders_placed,
        }
    }

    async fn handle_action(
        &mut self,
        action: CheckoutAction,
        ctx: &CheckoutContext,
    ) -> Result<CheckoutActionResult, CheckoutError> {
        match action {
            CheckoutAction::Submit(form) => {
                Ok(CheckoutActionResult::Submitted(self.submit(form, ctx).await?))
            }
            CheckoutAction::ListOrders => Ok(CheckoutActionResult::Orders(ctx.store.orders())),
            CheckoutAction::StartDownload(item) => {
                self.start_download(item, ctx).await;
                Ok(CheckoutActionResult::DownloadStarted)
            }
        }
    }
}

//! # Checkout Client
//!
//! Provides a high‑level API for the checkout actor. Unlike the other clients it keeps
//! the entity's own error type: validation failures travel through the framework as
//! [`FrameworkError::EntityError`] and are recovered by downcasting.
use crate::checkout_actor::{
    CheckoutAction, CheckoutActionResult, CheckoutError, CheckoutPhase, CheckoutProcessor,
    Confirmation, FormSnapshot,
};
use crate::framework::{ActorClient, FrameworkError, StateClient};
use crate::model::{ItemId, Order};
use async_trait::async_trait;
use tokio::sync::watch;
use tracing::{debug, instrument, warn};

/// Client for interacting with the checkout actor.
#[derive(Clone)]
pub struct CheckoutClient {
    inner: StateClient<CheckoutProcessor>,
    phase: watch::Receiver<CheckoutPhase>,
}

impl CheckoutClient {
    pub fn new(inner: StateClient<CheckoutProcessor>, phase: watch::Receiver<CheckoutPhase>) -> Self {
        Self { inner, phase }
    }

    /// Submit the checkout form. Resolves once the order is committed or rejected.
    ///
    /// Rejected with [`CheckoutError::InProgress`] while another submission is being
    /// processed.
    #[instrument(skip(self, form))]
    pub async fn submit(&self, form: FormSnapshot) -> Result<Order, CheckoutError> {
        let phase = self.phase();
        if phase != CheckoutPhase::Idle {
            warn!(?phase, "Submit rejected, checkout in progress");
            return Err(CheckoutError::InProgress);
        }
        debug!("Sending request");
        match self.inner.perform_action(CheckoutAction::Submit(form)).await {
            Ok(CheckoutActionResult::Submitted(order)) => Ok(order),
            Ok(_) => unreachable!("Submit action must return Submitted result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Every committed order, oldest first.
    #[instrument(skip(self))]
    pub async fn orders(&self) -> Result<Vec<Order>, CheckoutError> {
        match self.inner.perform_action(CheckoutAction::ListOrders).await {
            Ok(CheckoutActionResult::Orders(orders)) => Ok(orders),
            Ok(_) => unreachable!("ListOrders action must return Orders result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    pub async fn last_order(&self) -> Result<Option<Order>, CheckoutError> {
        Ok(self.view().await?.last_order)
    }

    /// What the confirmation page should display.
    pub async fn confirmation(&self) -> Result<Confirmation, CheckoutError> {
        Ok(match self.last_order().await? {
            Some(order) => Confirmation::Show(order),
            None => Confirmation::RedirectToCatalog,
        })
    }

    #[instrument(skip(self))]
    pub async fn start_download(&self, item: ItemId) -> Result<(), CheckoutError> {
        match self
            .inner
            .perform_action(CheckoutAction::StartDownload(item))
            .await
        {
            Ok(CheckoutActionResult::DownloadStarted) => Ok(()),
            Ok(_) => unreachable!("StartDownload action must return DownloadStarted result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// The published checkout phase.
    pub fn phase(&self) -> CheckoutPhase {
        *self.phase.borrow()
    }

    pub fn subscribe_phase(&self) -> watch::Receiver<CheckoutPhase> {
        self.phase.clone()
    }
}

#[async_trait]
impl ActorClient<CheckoutProcessor> for CheckoutClient {
    type Error = CheckoutError;

    fn inner(&self) -> &StateClient<CheckoutProcessor> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::EntityError(inner) => match inner.downcast::<CheckoutError>() {
                Ok(error) => *error,
                Err(other) => CheckoutError::ActorCommunicationError(other.to_string()),
            },
            other => CheckoutError::ActorCommunicationError(other.to_string()),
        }
    }
}

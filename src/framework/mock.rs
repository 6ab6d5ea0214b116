//! # Mock Framework
//!
//! Utilities for testing clients and actors without spawning the real dependencies.
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **Speed** | Instant (in-memory) | Fast (but involves tokio spawn) |
//! | **State** | No real state (expectations) | Real state management |
//! | **Use Case** | Testing logic *around* a client | Testing the actor itself or the full system |
//! | **Error Injection** | Easy (`return_err`) | Hard (requires specific state) |
//!
//! Two styles are available:
//!
//! - [`MockClient`]: queue expectations up front, hand `mock.client()` to the code under
//!   test, then `verify()` and inspect [`MockClient::received_actions`].
//! - [`create_mock_client`] plus [`expect_get`] / [`expect_action`]: drive the mailbox
//!   by hand from the test body, answering each request explicitly.
//!
//! ```rust
//! use storefront_state::framework::mock::MockClient;
//! use storefront_state::notification_actor::{NotificationAction, NotificationActionResult, NotificationCenter};
//! use storefront_state::model::NotificationId;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<NotificationCenter>::new();
//!     mock.expect_action().return_ok(NotificationActionResult::Shown(NotificationId(1)));
//!
//!     let client = mock.client();
//!     let result = client
//!         .perform_action(NotificationAction::Show {
//!             message: "hello".into(),
//!             kind: Default::default(),
//!         })
//!         .await
//!         .unwrap();
//!     assert!(matches!(result, NotificationActionResult::Shown(NotificationId(1))));
//!
//!     mock.verify();
//!     assert_eq!(mock.received_actions().len(), 1);
//! }
//! ```

use crate::framework::{ActorEntity, ActorRequest, FrameworkError, StateClient};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

/// Represents an expected request to the mock client.
enum Expectation<T: ActorEntity> {
    Get {
        response: Result<T::View, FrameworkError>,
    },
    Action {
        response: Result<T::ActionResult, FrameworkError>,
    },
}

type Expectations<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock client with expectation tracking for fluent testing.
///
/// Requests are answered in the order the expectations were queued. A request that
/// does not match the next expectation panics the background task, which surfaces in
/// the caller as [`FrameworkError::ActorDropped`].
pub struct MockClient<T: ActorEntity> {
    client: StateClient<T>,
    expectations: Expectations<T>,
    received: Arc<Mutex<Vec<T::Action>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ActorRequest<T>>(100);
        let expectations: Expectations<T> = Arc::new(Mutex::new(VecDeque::new()));
        let received = Arc::new(Mutex::new(Vec::new()));
        let expectations_clone = expectations.clone();
        let received_clone = received.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone.lock().unwrap().pop_front();

                match (request, expectation) {
                    (ActorRequest::Get { respond_to }, Some(Expectation::Get { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ActorRequest::Action { action, respond_to },
                        Some(Expectation::Action { response }),
                    ) => {
                        received_clone.lock().unwrap().push(action);
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: StateClient::new(sender),
            expectations,
            received,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> StateClient<T> {
        self.client.clone()
    }

    /// Expects a `get` operation.
    pub fn expect_get(&mut self) -> GetExpectationBuilder<T> {
        GetExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects an `action` operation.
    pub fn expect_action(&mut self) -> ActionExpectationBuilder<T> {
        ActionExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Drains the actions received so far, in arrival order.
    pub fn received_actions(&self) -> Vec<T::Action> {
        std::mem::take(&mut *self.received.lock().unwrap())
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `get` expectations.
pub struct GetExpectationBuilder<T: ActorEntity> {
    expectations: Expectations<T>,
}

impl<T: ActorEntity> GetExpectationBuilder<T> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, view: T::View) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Get { response: Ok(view) });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Get {
                response: Err(error),
            });
    }
}

/// Builder for `action` expectations.
pub struct ActionExpectationBuilder<T: ActorEntity> {
    expectations: Expectations<T>,
}

impl<T: ActorEntity> ActionExpectationBuilder<T> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, result: T::ActionResult) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Action {
                response: Ok(result),
            });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Action {
                response: Err(error),
            });
    }
}

/// Creates a client whose mailbox is handed straight to the test.
///
/// # Testing Strategy
/// The test plays the actor: it reads each request from `receiver`, asserts on it and
/// answers through the oneshot responder. Useful when the response depends on the
/// request or when ordering between several mailboxes matters.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (StateClient<T>, mpsc::Receiver<ActorRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (StateClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ActorRequest<T>>,
) -> Option<oneshot::Sender<Result<T::View, FrameworkError>>> {
    match receiver.recv().await {
        Some(ActorRequest::Get { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next message is an Action request
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ActorRequest<T>>,
) -> Option<(
    T::Action,
    oneshot::Sender<Result<T::ActionResult, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ActorRequest::Action { action, respond_to }) => Some((action, respond_to)),
        _ => None,
    }
}

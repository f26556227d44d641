//! # Mock Clients
//!
//! `MockClient<T>` hands out a real `ResourceClient<T>` whose requests are answered from a
//! queue of expectations instead of a running actor. It is how the product actor is tested
//! without brand and category actors, and how downstream failures are injected.
//!
//! | | MockClient | Real actor |
//! |---|---|---|
//! | **State** | none, answers are scripted | real collection |
//! | **Error injection** | `return_err(...)` | needs a real failure |
//! | **Use** | logic *around* a client | the actor itself or the whole system |
//!
//! ```rust
//! use catalog_store::framework::mock::MockClient;
//! use catalog_store::framework::FrameworkError;
//! use catalog_store::model::{Brand, BrandId};
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut brands = MockClient::<Brand>::new();
//!     brands.expect_get(BrandId(1)).return_err(FrameworkError::ActorClosed);
//!
//!     let client = brands.client();
//!     assert!(matches!(client.get(BrandId(1)).await, Err(FrameworkError::ActorClosed)));
//!     brands.verify();
//! }
//! ```
//!
//! For request-level assertions (inspecting the payload the code under test sent), use
//! [`create_mock_client`] and the `expect_*` helpers instead.

use crate::framework::client::ResourceClient;
use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use crate::framework::message::{Predicate, ResourceRequest};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

enum Expectation<T: ActorEntity> {
    Create {
        response: Result<T, FrameworkError>,
    },
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    List {
        response: Result<Vec<T>, FrameworkError>,
    },
    Exists {
        response: Result<bool, FrameworkError>,
    },
    Update {
        id: T::Id,
        response: Result<T, FrameworkError>,
    },
    Delete {
        id: T::Id,
        response: Result<T, FrameworkError>,
    },
}

impl<T: ActorEntity> Expectation<T> {
    fn name(&self) -> &'static str {
        match self {
            Expectation::Create { .. } => "create",
            Expectation::Get { .. } => "get",
            Expectation::List { .. } => "list",
            Expectation::Exists { .. } => "exists",
            Expectation::Update { .. } => "update",
            Expectation::Delete { .. } => "delete",
        }
    }
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

fn lock<T: ActorEntity>(queue: &Queue<T>) -> MutexGuard<'_, VecDeque<Expectation<T>>> {
    queue.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A mock client with expectation tracking for fluent testing.
///
/// Expectations are consumed in the order they were registered. A request that does not
/// match the next expectation panics inside the mock task, which surfaces in the test as
/// `ActorDropped`; `verify` then reports the leftovers.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Queue<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = lock(&queue).pop_front();

                match (request, expectation) {
                    (
                        ResourceRequest::Create { respond_to, .. },
                        Some(Expectation::Create { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Get { id, respond_to },
                        Some(Expectation::Get {
                            id: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(id, expected, "get called with unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::List { respond_to, .. },
                        Some(Expectation::List { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Exists { respond_to, .. },
                        Some(Expectation::Exists { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Update { id, respond_to, .. },
                        Some(Expectation::Update {
                            id: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(id, expected, "update called with unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Delete { id, respond_to },
                        Some(Expectation::Delete {
                            id: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(id, expected, "delete called with unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (request, expectation) => {
                        panic!(
                            "Unexpected request {:?}, expected {}",
                            request,
                            expectation.as_ref().map_or("nothing", |e| e.name())
                        );
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T> {
        ExpectationBuilder::new(&self.expectations, |response| Expectation::Create { response })
    }

    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        ExpectationBuilder::new(&self.expectations, move |response| Expectation::Get {
            id,
            response,
        })
    }

    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        ExpectationBuilder::new(&self.expectations, |response| Expectation::List { response })
    }

    pub fn expect_exists(&mut self) -> ExpectationBuilder<T, bool> {
        ExpectationBuilder::new(&self.expectations, |response| Expectation::Exists { response })
    }

    pub fn expect_update(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        ExpectationBuilder::new(&self.expectations, move |response| Expectation::Update {
            id,
            response,
        })
    }

    pub fn expect_delete(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        ExpectationBuilder::new(&self.expectations, move |response| Expectation::Delete {
            id,
            response,
        })
    }

    /// Panics if any registered expectation was not consumed.
    pub fn verify(&self) {
        let exps = lock(&self.expectations);
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

/// Records the scripted answer for one expected request.
pub struct ExpectationBuilder<T: ActorEntity, R> {
    expectations: Queue<T>,
    build: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    fn new(
        expectations: &Queue<T>,
        build: impl FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send + 'static,
    ) -> Self {
        Self {
            expectations: expectations.clone(),
            build: Box::new(build),
        }
    }

    pub fn return_ok(self, value: R) {
        let expectation = (self.build)(Ok(value));
        lock(&self.expectations).push_back(expectation);
    }

    pub fn return_err(self, error: FrameworkError) {
        let expectation = (self.build)(Err(error));
        lock(&self.expectations).push_back(expectation);
    }
}

// =============================================================================
// REQUEST-LEVEL HELPERS
// =============================================================================

/// Creates a client whose requests land on a receiver the test controls.
///
/// The test pulls requests off the receiver with the `expect_*` helpers, asserts on the
/// payload and answers through the returned oneshot sender.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, oneshot::Sender<Result<T, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, oneshot::Sender<Result<Option<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Exists request
pub async fn expect_exists<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(Predicate<T>, oneshot::Sender<Result<bool, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Exists {
            predicate,
            respond_to,
        }) => Some((predicate, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Delete request
pub async fn expect_delete<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, oneshot::Sender<Result<T, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Delete { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

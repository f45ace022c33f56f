//! transport::mock
//!
//! Mock transport for deterministic testing.
//!
//! # Design
//!
//! The mock replays a queue of canned outcomes in order and records every
//! request it receives, so tests can assert both what the store sent and
//! how it reacted to the response. Clones share state, matching how a
//! test hands the transport to a store while keeping a handle for
//! verification.
//!
//! # Example
//!
//! ```
//! use ldp_store::transport::{
//!     MockTransport, Method, Transport, TransportRequest, TransportResponse,
//! };
//!
//! # tokio_test::block_on(async {
//! let transport = MockTransport::new()
//!     .respond_with(TransportResponse::new(200).with_body("body"));
//!
//! let response = transport
//!     .fetch(TransportRequest {
//!         method: Method::Get,
//!         iri: "http://example.org/r".to_string(),
//!         headers: vec![],
//!         body: None,
//!     })
//!     .await
//!     .unwrap();
//!
//! assert_eq!(response.status, 200);
//! assert_eq!(transport.requests().len(), 1);
//! # });
//! ```

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::traits::{Transport, TransportError, TransportRequest, TransportResponse};

/// Mock transport for testing.
///
/// Thread-safe via internal `Arc<Mutex<...>>` wrapping.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    inner: Arc<Mutex<MockTransportInner>>,
}

#[derive(Debug, Default)]
struct MockTransportInner {
    /// Canned outcomes, consumed front to back.
    outcomes: VecDeque<Result<TransportResponse, TransportError>>,
    /// Requests received, in order.
    requests: Vec<TransportRequest>,
}

impl MockTransport {
    /// Create a mock with no canned outcomes.
    ///
    /// A fetch against an exhausted queue fails with a [`TransportError`]
    /// naming the problem, which keeps a misconfigured test loud.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response.
    pub fn respond_with(self, response: TransportResponse) -> Self {
        {
            let mut inner = self.inner.lock().unwrap();
            inner.outcomes.push_back(Ok(response));
        }
        self
    }

    /// Queue a transport failure.
    pub fn fail_with(self, error: TransportError) -> Self {
        {
            let mut inner = self.inner.lock().unwrap();
            inner.outcomes.push_back(Err(error));
        }
        self
    }

    /// All requests received so far.
    pub fn requests(&self) -> Vec<TransportRequest> {
        let inner = self.inner.lock().unwrap();
        inner.requests.clone()
    }

    /// The single request received, panicking unless exactly one arrived.
    ///
    /// Test helper for the common one-call case.
    pub fn single_request(&self) -> TransportRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests.into_iter().next().unwrap()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn fetch(&self, request: TransportRequest) -> Result<TransportResponse, TransportError> {
        let mut inner = self.inner.lock().unwrap();
        inner.requests.push(request);
        inner
            .outcomes
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::new("no mock response queued")))
    }
}

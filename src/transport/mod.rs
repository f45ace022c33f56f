//! transport
//!
//! Abstraction over the HTTP layer the store issues requests through.
//!
//! # Architecture
//!
//! The [`Transport`] trait is the seam between the store's orchestration
//! logic and the network. The store builds a [`TransportRequest`] (method,
//! IRI, headers, optional body) and gets back a [`TransportResponse`]
//! (status, headers, body) or a [`TransportError`]. Everything the store
//! decides (format selection, conditional headers, status handling) is
//! visible at this boundary, which is what makes the store testable
//! without a network.
//!
//! # Modules
//!
//! - `traits`: the [`Transport`] trait and its request/response types
//! - [`http`]: reqwest-backed implementation
//! - [`mock`]: deterministic in-memory implementation for tests
//!
//! # Example
//!
//! ```ignore
//! use ldp_store::transport::{HttpTransport, Method, Transport, TransportRequest};
//!
//! let transport = HttpTransport::new();
//! let response = transport
//!     .fetch(TransportRequest {
//!         method: Method::Get,
//!         iri: "https://example.org/resource".to_string(),
//!         headers: vec![("Accept".to_string(), "text/turtle".to_string())],
//!         body: None,
//!     })
//!     .await?;
//! assert!(response.is_success());
//! ```

pub mod http;
pub mod mock;
mod traits;

pub use http::HttpTransport;
pub use mock::MockTransport;
pub use traits::*;

//! ldp-store - A client for RDF resources on Linked Data Platform servers
//!
//! This crate reads, writes, patches and deletes remote RDF resources over
//! HTTP, translating between wire-format documents and an in-memory graph.
//! The interesting part is small and deliberate: selecting a wire format,
//! building the right headers (`Accept`, `Content-Type`, `If-Match`) for
//! each operation, and unifying request, parse and serialize failures into
//! one error type.
//!
//! # Architecture
//!
//! - [`store`] - The [`LdpStore`](store::LdpStore) orchestration core:
//!   read, match, write, merge, delete
//! - [`graph`] - In-memory graph of RDF statements with an optional
//!   entity tag for optimistic concurrency
//! - [`formats`] - Registry mapping media types to parse and serialize
//!   handlers; built-in handlers for Turtle, N-Triples, RDF/XML and
//!   SPARQL Update patches
//! - [`transport`] - HTTP transport abstraction with a reqwest-backed
//!   implementation and a deterministic mock for tests
//!
//! # Correctness Invariants
//!
//! 1. A graph's entity tag is set only by a read, never by a write
//! 2. The store never selects a media type absent from the registry,
//!    except the configured default
//! 3. Failures are terminal for the single call and never leave partial
//!    results or altered store state
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use ldp_store::store::{LdpStore, ReadOptions};
//! use ldp_store::transport::HttpTransport;
//!
//! let store = LdpStore::new(Arc::new(HttpTransport::new()));
//! let graph = store
//!     .read("https://example.org/resource", ReadOptions::default())
//!     .await?;
//! println!("{} statements", graph.len());
//! ```

pub mod formats;
pub mod graph;
pub mod store;
pub mod transport;

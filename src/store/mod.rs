//! store
//!
//! Request orchestration for LDP resources.
//!
//! # Architecture
//!
//! [`LdpStore`] is the crate's core: it owns the format registry, the
//! default media types and a [`Transport`](crate::transport::Transport)
//! handle, and exposes the read, match, write, merge and delete
//! operations. Each call builds the operation's headers, issues exactly one
//! request and runs at most one parse or serialize step; failures
//! surface immediately as a [`StoreError`] and never alter store state.
//!
//! # Modules
//!
//! - `ldp`: the [`LdpStore`] implementation
//! - `options`: [`StoreOptions`], [`ReadOptions`], [`WriteOptions`]
//! - `errors`: [`StoreError`]
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
//!     .read("https://example.org/card", ReadOptions::default())
//!     .await?;
//! for triple in graph.iter() {
//!     println!("{triple}");
//! }
//! ```

mod errors;
mod ldp;
mod options;

pub use errors::StoreError;
pub use ldp::LdpStore;
pub use options::{ReadOptions, StoreOptions, WriteOptions};

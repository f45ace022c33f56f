//! store::errors
//!
//! Error type unifying the failure modes of a store operation.
//!
//! # Design
//!
//! Every operation is one network call plus at most one local transform,
//! so four kinds cover the space: the request never completed, it
//! completed with a bad status, the body would not parse, or the graph
//! would not serialize. Failures are terminal for the single call; the
//! store holds no state they could corrupt.

use thiserror::Error;

/// Errors from store operations.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// The transport call itself failed; the request never completed.
    #[error("request error: {0}")]
    Request(String),

    /// The request completed with a status outside `[200, 300)`.
    ///
    /// The read path additionally admits status `0` when the store is
    /// configured to treat it as a local, non-network load.
    #[error("status code error: {0}")]
    StatusCode(u16),

    /// The response body could not be parsed by the selected handler.
    #[error("parse error: {0}")]
    Parse(String),

    /// The graph could not be serialized by the selected handler.
    #[error("serialize error: {0}")]
    Serialize(String),
}

impl StoreError {
    /// The HTTP status code, for [`StoreError::StatusCode`] failures.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            StoreError::StatusCode(code) => Some(*code),
            _ => None,
        }
    }
}

impl From<crate::transport::TransportError> for StoreError {
    fn from(err: crate::transport::TransportError) -> Self {
        StoreError::Request(err.to_string())
    }
}

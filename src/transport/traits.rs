//! transport::traits
//!
//! Transport trait definition and the request/response types crossing it.
//!
//! # Design
//!
//! Request header names are carried verbatim (`Accept`, `Content-Type`,
//! `If-Match`); the transport owns wire-level casing and encoding.
//! Response header lookup is ASCII case-insensitive because real stacks
//! disagree about the casing they report.

use async_trait::async_trait;
use thiserror::Error;

/// Transport-level failure: the request never completed.
///
/// Completed requests with an error status are not a `TransportError`;
/// they come back as a [`TransportResponse`] and the store decides what
/// the status means for the operation at hand.
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct TransportError(String);

impl TransportError {
    /// Create an error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// HTTP verb for a transport request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Retrieve a resource.
    Get,
    /// Replace a resource.
    Put,
    /// Create a resource under a container.
    Post,
    /// Apply a partial update.
    Patch,
    /// Remove a resource.
    Delete,
}

impl Method {
    /// The verb as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Put => "PUT",
            Method::Post => "POST",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single outgoing request.
#[derive(Debug, Clone)]
pub struct TransportRequest {
    /// HTTP verb.
    pub method: Method,
    /// IRI of the resource.
    pub iri: String,
    /// Header name/value pairs in send order.
    pub headers: Vec<(String, String)>,
    /// Request body, absent for GET and DELETE.
    pub body: Option<Vec<u8>>,
}

impl TransportRequest {
    /// Look up a request header, ASCII case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// A completed response, whatever its status.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    /// HTTP status code. `0` is reserved for local, non-network loads
    /// where no real status exists.
    pub status: u16,
    /// Response headers as reported by the transport.
    pub headers: Vec<(String, String)>,
    /// Response body.
    pub body: Vec<u8>,
}

impl TransportResponse {
    /// Create a response with the given status, no headers, empty body.
    pub fn new(status: u16) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Add a header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Set the body.
    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    /// Look up a response header, ASCII case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Whether the status code is in `[200, 300)`.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The transport the store issues requests through.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; the store may be shared across
/// tasks and issues concurrent requests without coordination.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issue one request and await its completion.
    ///
    /// # Errors
    ///
    /// [`TransportError`] when the request could not complete at all
    /// (connection failure, protocol violation). Completed requests
    /// always produce an `Ok` response, including error statuses.
    async fn fetch(&self, request: TransportRequest) -> Result<TransportResponse, TransportError>;
}

//! store::ldp
//!
//! The store itself: request orchestration for LDP resources.
//!
//! # Design
//!
//! Each operation builds headers from configuration plus operation
//! semantics, issues exactly one transport call, and runs at most one
//! local transform (parse on read, serialize before write and merge).
//! The store is immutable after construction; operations take `&self`
//! and may run concurrently without coordination.
//!
//! Parse format resolution on reads is an ordered candidate list,
//! first match wins: forced content type, declared content type with
//! parameters stripped, configured default. Conditional headers on
//! writes follow one precedence rule: an explicit etag in the options
//! beats the graph-carried tag.

use std::sync::Arc;

use oxrdf::{NamedNodeRef, SubjectRef, TermRef, Triple};
use tracing::debug;

use super::errors::StoreError;
use super::options::{ReadOptions, StoreOptions, WriteOptions};
use crate::formats::FormatRegistry;
use crate::graph::Graph;
use crate::transport::{Method, Transport, TransportRequest, TransportResponse};

const ACCEPT: &str = "Accept";
const CONTENT_TYPE: &str = "Content-Type";
const IF_MATCH: &str = "If-Match";
const ETAG: &str = "ETag";

/// Client for one LDP server (or several; the IRI is per call).
///
/// Construct once and share; all configuration is fixed at construction
/// and every operation takes `&self`.
///
/// # Example
///
/// ```ignore
/// use std::sync::Arc;
/// use ldp_store::store::{LdpStore, ReadOptions, WriteOptions};
/// use ldp_store::transport::HttpTransport;
///
/// let store = LdpStore::new(Arc::new(HttpTransport::new()));
///
/// // Read with the etag captured, edit, write back conditionally.
/// let graph = store
///     .read("https://example.org/card", ReadOptions { use_etag: true, ..Default::default() })
///     .await?;
/// store
///     .write("https://example.org/card", &graph, WriteOptions { use_etag: true, ..Default::default() })
///     .await?;
/// ```
pub struct LdpStore {
    transport: Arc<dyn Transport>,
    formats: FormatRegistry,
    default_parse_format: String,
    default_write_format: String,
    default_patch_format: String,
    treat_status_zero_as_success: bool,
}

impl std::fmt::Debug for LdpStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LdpStore")
            .field("formats", &self.formats)
            .field("default_parse_format", &self.default_parse_format)
            .field("default_write_format", &self.default_write_format)
            .field("default_patch_format", &self.default_patch_format)
            .field(
                "treat_status_zero_as_success",
                &self.treat_status_zero_as_success,
            )
            .finish()
    }
}

impl LdpStore {
    /// Create a store with the default options over the given transport.
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self::with_options(transport, StoreOptions::default())
    }

    /// Create a store with explicit options.
    pub fn with_options(transport: Arc<dyn Transport>, options: StoreOptions) -> Self {
        let default_patch_format = options
            .default_patch_format
            .unwrap_or_else(|| options.default_write_format.clone());
        Self {
            transport,
            formats: options.formats,
            default_parse_format: options.default_parse_format,
            default_write_format: options.default_write_format,
            default_patch_format,
            treat_status_zero_as_success: options.treat_status_zero_as_success,
        }
    }

    /// Retrieve and parse the resource at `iri`.
    ///
    /// Sends `Accept` listing every registered parser media type, then
    /// parses the body as the forced content type (when registered), the
    /// declared content type (when registered), or the default parse
    /// format, in that order. The request IRI is the base for relative
    /// IRIs in the document.
    ///
    /// # Errors
    ///
    /// - [`StoreError::Request`] when the transport call fails
    /// - [`StoreError::StatusCode`] for a non-2xx status (status `0` is
    ///   admitted when the store is configured for local loads)
    /// - [`StoreError::Parse`] when the body does not parse; no partial
    ///   graph is returned
    pub async fn read(&self, iri: &str, options: ReadOptions) -> Result<Graph, StoreError> {
        let accept = self.formats.accept_header();
        let response = self
            .transport
            .fetch(TransportRequest {
                method: Method::Get,
                iri: iri.to_string(),
                headers: vec![(ACCEPT.to_string(), accept)],
                body: None,
            })
            .await?;

        self.check_status(&response, true)?;

        let declared = response.header(CONTENT_TYPE).map(strip_parameters);
        let media_type =
            self.resolve_parse_format(options.forced_content_type.as_deref(), declared);
        debug!(iri, media_type, status = response.status, "parsing read response");

        let parser = self
            .formats
            .parser(media_type)
            .ok_or_else(|| StoreError::Parse(format!("no parser registered for '{media_type}'")))?;
        let mut graph = parser
            .parse(&response.body, iri)
            .await
            .map_err(|e| StoreError::Parse(e.to_string()))?;

        if options.use_etag {
            if let Some(etag) = response.header(ETAG) {
                graph.set_etag(etag);
            }
        }

        Ok(graph)
    }

    /// Read the resource at `iri` and return the statements matching a
    /// pattern.
    ///
    /// Read failures forward unchanged; the match step itself cannot
    /// fail.
    pub async fn matches(
        &self,
        iri: &str,
        subject: Option<SubjectRef<'_>>,
        predicate: Option<NamedNodeRef<'_>>,
        object: Option<TermRef<'_>>,
        limit: Option<usize>,
    ) -> Result<Vec<Triple>, StoreError> {
        let graph = self.read(iri, ReadOptions::default()).await?;
        Ok(graph.triples_for_pattern(subject, predicate, object, limit))
    }

    /// Create or replace the resource at `iri` with the graph's contents.
    ///
    /// Serializes as the default write format and sends a PUT, or the
    /// verb in `options.method`. `If-Match` carries `options.etag` when
    /// given, else the graph's own tag when `options.use_etag` is set.
    ///
    /// The caller's graph is untouched; nothing is re-parsed from the
    /// response.
    ///
    /// # Errors
    ///
    /// - [`StoreError::Serialize`] when the graph will not serialize; no
    ///   request is sent
    /// - [`StoreError::Request`] when the transport call fails
    /// - [`StoreError::StatusCode`] for any non-2xx status
    pub async fn write(
        &self,
        iri: &str,
        graph: &Graph,
        options: WriteOptions,
    ) -> Result<(), StoreError> {
        let method = options.method.unwrap_or(Method::Put);
        self.send_document(iri, graph, method, &self.default_write_format, &options)
            .await
    }

    /// Apply the graph as a partial update to the resource at `iri`.
    ///
    /// Always issues PATCH; `options.method` is ignored. Serializes as
    /// the default patch format, falling back to the write default when
    /// none was configured. Conditional headers as for
    /// [`write`](Self::write).
    pub async fn merge(
        &self,
        iri: &str,
        graph: &Graph,
        options: WriteOptions,
    ) -> Result<(), StoreError> {
        self.send_document(iri, graph, Method::Patch, &self.default_patch_format, &options)
            .await
    }

    /// Delete the resource at `iri`.
    ///
    /// Sends DELETE with no body and no extra headers.
    pub async fn delete(&self, iri: &str) -> Result<(), StoreError> {
        let response = self
            .transport
            .fetch(TransportRequest {
                method: Method::Delete,
                iri: iri.to_string(),
                headers: Vec::new(),
                body: None,
            })
            .await?;

        self.check_status(&response, false)?;
        debug!(iri, "resource deleted");
        Ok(())
    }

    /// Serialize `graph` and send it to `iri` with the given verb.
    async fn send_document(
        &self,
        iri: &str,
        graph: &Graph,
        method: Method,
        media_type: &str,
        options: &WriteOptions,
    ) -> Result<(), StoreError> {
        let mut headers = vec![(CONTENT_TYPE.to_string(), media_type.to_string())];
        if let Some(etag) = if_match_value(options, graph) {
            headers.push((IF_MATCH.to_string(), etag.to_string()));
        }

        let serializer = self.formats.serializer(media_type).ok_or_else(|| {
            StoreError::Serialize(format!("no serializer registered for '{media_type}'"))
        })?;
        let body = serializer
            .serialize(graph)
            .await
            .map_err(|e| StoreError::Serialize(e.to_string()))?;

        debug!(iri, %method, media_type, bytes = body.len(), "sending document");
        let response = self
            .transport
            .fetch(TransportRequest {
                method,
                iri: iri.to_string(),
                headers,
                body: Some(body),
            })
            .await?;

        self.check_status(&response, false)
    }

    /// Map a completed response's status to success or failure.
    ///
    /// `local_load` admits the read path's status-0 allowance; writes and
    /// deletes pass `false`.
    fn check_status(
        &self,
        response: &TransportResponse,
        local_load: bool,
    ) -> Result<(), StoreError> {
        if response.is_success() {
            return Ok(());
        }
        if local_load && self.treat_status_zero_as_success && response.status == 0 {
            return Ok(());
        }
        Err(StoreError::StatusCode(response.status))
    }

    /// Pick the media type to parse a read response as.
    ///
    /// Ordered candidates, first one with a registered parser wins; the
    /// configured default needs no registration check.
    fn resolve_parse_format<'a>(
        &'a self,
        forced: Option<&'a str>,
        declared: Option<&'a str>,
    ) -> &'a str {
        [forced, declared]
            .into_iter()
            .flatten()
            .find(|candidate| self.formats.parser(candidate).is_some())
            .unwrap_or(&self.default_parse_format)
    }
}

/// The `If-Match` value for a write, if any.
fn if_match_value<'a>(options: &'a WriteOptions, graph: &'a Graph) -> Option<&'a str> {
    options
        .etag
        .as_deref()
        .or_else(|| if options.use_etag { graph.etag() } else { None })
}

/// Strip media type parameters: `text/turtle; charset=utf-8` to
/// `text/turtle`.
fn strip_parameters(value: &str) -> &str {
    value.split(';').next().unwrap_or(value).trim()
}

//! formats
//!
//! Wire-format handlers and the registry the store selects them from.
//!
//! # Architecture
//!
//! A [`FormatRegistry`] holds two independent maps keyed by media type:
//! parsers (bytes + base IRI to [`Graph`]) and serializers ([`Graph`] to
//! bytes). The store looks handlers up by explicit [`Option`]-returning
//! lookups and enumerates parser media types to build the `Accept` header.
//! Registration happens once, before the registry is handed to the store;
//! the store treats it as read-only.
//!
//! # Modules
//!
//! - `syntax`: handlers backed by `oxrdfio` (Turtle, N-Triples, RDF/XML)
//! - `patch`: the SPARQL Update `INSERT DATA` patch serializer
//!
//! # Example
//!
//! ```
//! use ldp_store::formats::{FormatRegistry, TEXT_TURTLE};
//!
//! let registry = FormatRegistry::defaults();
//! assert!(registry.parser(TEXT_TURTLE).is_some());
//! assert!(registry.parser("application/ld+json").is_none());
//! ```

mod patch;
mod syntax;

pub use patch::SparqlUpdateSerializer;
pub use syntax::{SyntaxParser, SyntaxSerializer};

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use oxrdfio::RdfFormat;
use thiserror::Error;

use crate::graph::Graph;

/// Media type for Turtle documents.
pub const TEXT_TURTLE: &str = "text/turtle";

/// Media type for N-Triples documents.
pub const APPLICATION_N_TRIPLES: &str = "application/n-triples";

/// Media type for RDF/XML documents.
pub const APPLICATION_RDF_XML: &str = "application/rdf+xml";

/// Media type for SPARQL Update requests.
pub const APPLICATION_SPARQL_UPDATE: &str = "application/sparql-update";

/// Error from a parse or serialize handler.
///
/// Handlers reduce their underlying causes to a message here; the store
/// wraps it into [`StoreError::Parse`](crate::store::StoreError) or
/// [`StoreError::Serialize`](crate::store::StoreError) depending on the
/// direction.
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct FormatError(String);

impl FormatError {
    /// Create an error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Parses a wire-format document into a [`Graph`].
///
/// `base_iri` resolves relative IRIs in the document; the store passes the
/// IRI of the resource being read.
#[async_trait]
pub trait GraphParser: Send + Sync {
    async fn parse(&self, data: &[u8], base_iri: &str) -> Result<Graph, FormatError>;
}

/// Serializes a [`Graph`] into a wire-format document.
#[async_trait]
pub trait GraphSerializer: Send + Sync {
    async fn serialize(&self, graph: &Graph) -> Result<Vec<u8>, FormatError>;
}

/// Registry of parse and serialize handlers keyed by media type.
///
/// Keys are unique per direction; a media type may well have a parser but
/// no serializer or the reverse. Enumeration order is the sorted key
/// order, so the `Accept` header built from it is deterministic.
#[derive(Clone, Default)]
pub struct FormatRegistry {
    parsers: BTreeMap<String, Arc<dyn GraphParser>>,
    serializers: BTreeMap<String, Arc<dyn GraphSerializer>>,
}

impl FormatRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the built-in handlers.
    ///
    /// Parsers: Turtle, N-Triples, RDF/XML. Serializers: Turtle,
    /// N-Triples, and the SPARQL Update patch serializer under
    /// [`APPLICATION_SPARQL_UPDATE`].
    pub fn defaults() -> Self {
        Self::new()
            .with_parser(TEXT_TURTLE, Arc::new(SyntaxParser::new(RdfFormat::Turtle)))
            .with_parser(
                APPLICATION_N_TRIPLES,
                Arc::new(SyntaxParser::new(RdfFormat::NTriples)),
            )
            .with_parser(
                APPLICATION_RDF_XML,
                Arc::new(SyntaxParser::new(RdfFormat::RdfXml)),
            )
            .with_serializer(
                TEXT_TURTLE,
                Arc::new(SyntaxSerializer::new(RdfFormat::Turtle)),
            )
            .with_serializer(
                APPLICATION_N_TRIPLES,
                Arc::new(SyntaxSerializer::new(RdfFormat::NTriples)),
            )
            .with_serializer(
                APPLICATION_SPARQL_UPDATE,
                Arc::new(SparqlUpdateSerializer::new()),
            )
    }

    /// Register a parser for a media type, replacing any previous one.
    pub fn with_parser(
        mut self,
        media_type: impl Into<String>,
        parser: Arc<dyn GraphParser>,
    ) -> Self {
        self.parsers.insert(media_type.into(), parser);
        self
    }

    /// Register a serializer for a media type, replacing any previous one.
    pub fn with_serializer(
        mut self,
        media_type: impl Into<String>,
        serializer: Arc<dyn GraphSerializer>,
    ) -> Self {
        self.serializers.insert(media_type.into(), serializer);
        self
    }

    /// Look up the parser registered for a media type.
    pub fn parser(&self, media_type: &str) -> Option<Arc<dyn GraphParser>> {
        self.parsers.get(media_type).cloned()
    }

    /// Look up the serializer registered for a media type.
    pub fn serializer(&self, media_type: &str) -> Option<Arc<dyn GraphSerializer>> {
        self.serializers.get(media_type).cloned()
    }

    /// Media types with a registered parser, in sorted order.
    pub fn parser_media_types(&self) -> impl Iterator<Item = &str> {
        self.parsers.keys().map(String::as_str)
    }

    /// `Accept` header value listing every parseable media type.
    pub fn accept_header(&self) -> String {
        self.parser_media_types().collect::<Vec<_>>().join(", ")
    }
}

impl std::fmt::Debug for FormatRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormatRegistry")
            .field("parsers", &self.parsers.keys().collect::<Vec<_>>())
            .field("serializers", &self.serializers.keys().collect::<Vec<_>>())
            .finish()
    }
}

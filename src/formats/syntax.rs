//! formats::syntax
//!
//! Parse and serialize handlers backed by `oxrdfio`.
//!
//! One pair of types covers every concrete syntax `oxrdfio` knows about;
//! the [`RdfFormat`] passed at construction picks the syntax. The handlers
//! are synchronous underneath, which is fine: documents arrive fully
//! buffered from the transport.

use async_trait::async_trait;
use oxrdf::{GraphNameRef, QuadRef, Triple};
use oxrdfio::{RdfFormat, RdfParser, RdfSerializer};

use super::{FormatError, GraphParser, GraphSerializer};
use crate::graph::Graph;

/// Parser for a concrete RDF syntax.
#[derive(Debug, Clone, Copy)]
pub struct SyntaxParser {
    format: RdfFormat,
}

impl SyntaxParser {
    /// Create a parser for the given syntax.
    pub fn new(format: RdfFormat) -> Self {
        Self { format }
    }

    /// The syntax this parser reads.
    pub fn format(&self) -> RdfFormat {
        self.format
    }
}

#[async_trait]
impl GraphParser for SyntaxParser {
    async fn parse(&self, data: &[u8], base_iri: &str) -> Result<Graph, FormatError> {
        let parser = RdfParser::from_format(self.format)
            .with_base_iri(base_iri)
            .map_err(|e| FormatError::new(format!("invalid base IRI '{base_iri}': {e}")))?;

        let mut graph = Graph::new();
        for quad in parser.for_reader(data) {
            let quad = quad.map_err(|e| FormatError::new(e.to_string()))?;
            // Named graphs cannot occur in the triple-only syntaxes the
            // registry defaults to; a quad syntax would drop its graph
            // component here.
            graph.insert(&Triple::new(quad.subject, quad.predicate, quad.object));
        }
        Ok(graph)
    }
}

/// Serializer for a concrete RDF syntax.
#[derive(Debug, Clone, Copy)]
pub struct SyntaxSerializer {
    format: RdfFormat,
}

impl SyntaxSerializer {
    /// Create a serializer for the given syntax.
    pub fn new(format: RdfFormat) -> Self {
        Self { format }
    }

    /// The syntax this serializer writes.
    pub fn format(&self) -> RdfFormat {
        self.format
    }
}

#[async_trait]
impl GraphSerializer for SyntaxSerializer {
    async fn serialize(&self, graph: &Graph) -> Result<Vec<u8>, FormatError> {
        serialize_graph(self.format, graph)
    }
}

/// Serialize every statement of `graph` in the given syntax.
pub(super) fn serialize_graph(format: RdfFormat, graph: &Graph) -> Result<Vec<u8>, FormatError> {
    let mut serializer = RdfSerializer::from_format(format).for_writer(Vec::new());
    for triple in graph.iter() {
        serializer
            .serialize_quad(QuadRef::new(
                triple.subject,
                triple.predicate,
                triple.object,
                GraphNameRef::DefaultGraph,
            ))
            .map_err(|e| FormatError::new(e.to_string()))?;
    }
    serializer
        .finish()
        .map_err(|e| FormatError::new(e.to_string()))
}

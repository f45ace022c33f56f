//! formats::patch
//!
//! Fallback patch serializer for stores without a richer patch format.
//!
//! Renders the graph as N-Triples wrapped in a SPARQL Update `INSERT DATA`
//! statement. Insert-only: a patch format able to express deletions would
//! replace this handler in the registry.

use async_trait::async_trait;
use oxrdfio::RdfFormat;

use super::syntax::serialize_graph;
use super::{FormatError, GraphSerializer};
use crate::graph::Graph;

/// Serializer producing `INSERT DATA { <n-triples> }` patch bodies.
#[derive(Debug, Clone, Copy, Default)]
pub struct SparqlUpdateSerializer;

impl SparqlUpdateSerializer {
    /// Create the serializer.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl GraphSerializer for SparqlUpdateSerializer {
    async fn serialize(&self, graph: &Graph) -> Result<Vec<u8>, FormatError> {
        let triples = serialize_graph(RdfFormat::NTriples, graph)?;
        let triples = String::from_utf8(triples)
            .map_err(|e| FormatError::new(format!("non-UTF-8 N-Triples output: {e}")))?;

        Ok(format!("INSERT DATA {{ {triples} }}").into_bytes())
    }
}

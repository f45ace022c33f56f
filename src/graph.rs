//! graph
//!
//! In-memory RDF graph handed between the store and the caller.
//!
//! # Design
//!
//! [`Graph`] wraps [`oxrdf::Graph`] and adds the one piece of state the
//! store cares about: an optional entity tag captured from a read response
//! and replayed as `If-Match` on a later write. The store never mutates a
//! caller's graph; reads produce a fresh one.

use oxrdf::{NamedNodeRef, SubjectRef, TermRef, Triple, TripleRef};

/// A set of RDF statements with an optional entity tag.
///
/// The tag is opaque to this crate. It is set by
/// [`LdpStore::read`](crate::store::LdpStore::read) when requested and
/// consumed by write and merge when the caller opts in via
/// [`WriteOptions::use_etag`](crate::store::WriteOptions).
#[derive(Debug, Clone, Default)]
pub struct Graph {
    triples: oxrdf::Graph,
    etag: Option<String>,
}

impl Graph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a statement. Returns `true` if it was not already present.
    pub fn insert<'a>(&mut self, triple: impl Into<TripleRef<'a>>) -> bool {
        self.triples.insert(triple)
    }

    /// Check whether a statement is present.
    pub fn contains<'a>(&self, triple: impl Into<TripleRef<'a>>) -> bool {
        self.triples.contains(triple)
    }

    /// Number of statements in the graph.
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// Check whether the graph holds no statements.
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Iterate over all statements.
    pub fn iter(&self) -> impl Iterator<Item = TripleRef<'_>> {
        self.triples.iter()
    }

    /// Return the statements matching a pattern.
    ///
    /// `None` components match anything. `limit` caps the number of
    /// returned statements; `None` returns every match.
    ///
    /// # Example
    ///
    /// ```
    /// use ldp_store::graph::Graph;
    /// use oxrdf::{Literal, NamedNodeRef, TripleRef};
    ///
    /// let alice = NamedNodeRef::new("http://example.org/alice").unwrap();
    /// let name = NamedNodeRef::new("http://xmlns.com/foaf/0.1/name").unwrap();
    /// let label = Literal::new_simple_literal("Alice");
    ///
    /// let mut graph = Graph::new();
    /// graph.insert(TripleRef::new(alice, name, &label));
    ///
    /// assert_eq!(graph.triples_for_pattern(None, None, None, None).len(), 1);
    /// assert_eq!(
    ///     graph
    ///         .triples_for_pattern(Some(alice.into()), Some(name), None, None)
    ///         .len(),
    ///     1
    /// );
    /// ```
    pub fn triples_for_pattern(
        &self,
        subject: Option<SubjectRef<'_>>,
        predicate: Option<NamedNodeRef<'_>>,
        object: Option<TermRef<'_>>,
        limit: Option<usize>,
    ) -> Vec<Triple> {
        let matches = self.triples.iter().filter(|triple| {
            subject.map_or(true, |s| triple.subject == s)
                && predicate.map_or(true, |p| triple.predicate == p)
                && object.map_or(true, |o| triple.object == o)
        });
        match limit {
            Some(limit) => matches.take(limit).map(TripleRef::into_owned).collect(),
            None => matches.map(TripleRef::into_owned).collect(),
        }
    }

    /// The entity tag captured from the last read, if any.
    pub fn etag(&self) -> Option<&str> {
        self.etag.as_deref()
    }

    /// Attach an entity tag.
    pub fn set_etag(&mut self, etag: impl Into<String>) {
        self.etag = Some(etag.into());
    }
}

impl FromIterator<Triple> for Graph {
    fn from_iter<I: IntoIterator<Item = Triple>>(iter: I) -> Self {
        let mut graph = Graph::new();
        for triple in iter {
            graph.insert(&triple);
        }
        graph
    }
}

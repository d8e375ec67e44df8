//! In-memory vertex and edge store.
//!
//! Provides bidirectional indexing so a vertex's outbound and inbound edges
//! can be listed in insertion order. Edges may reference vertices that were
//! never added; such dangling edges are kept and surface as lookup failures
//! when their endpoint is resolved.

use std::collections::HashMap;

use crate::error::{Error, Result};

use super::types::{Edge, Vertex};

/// In-memory storage for vertices and edges with bidirectional indexing.
///
/// Provides O(1) access to vertices/edges by id and O(degree) access to
/// outbound/inbound edges of any vertex.
#[derive(Debug, Default, Clone)]
pub struct InMemoryEdgeStore {
    /// All vertices indexed by id.
    vertices: HashMap<String, Vertex>,
    /// All edges indexed by id.
    edges: HashMap<String, Edge>,
    /// Outbound edges: from -> edge ids, in insertion order.
    outgoing: HashMap<String, Vec<String>>,
    /// Inbound edges: to -> edge ids, in insertion order.
    incoming: HashMap<String, Vec<String>>,
}

impl InMemoryEdgeStore {
    /// Creates a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ── Vertex CRUD ────────────────────────────────────────────────────

    /// Adds a vertex to the store.
    ///
    /// # Errors
    ///
    /// Returns `Error::VertexExists` if a vertex with the same id exists.
    pub fn add_vertex(&mut self, vertex: Vertex) -> Result<()> {
        if self.vertices.contains_key(vertex.id()) {
            return Err(Error::VertexExists(vertex.id().to_string()));
        }
        self.vertices.insert(vertex.id().to_string(), vertex);
        Ok(())
    }

    /// Gets a vertex by id.
    #[must_use]
    pub fn get_vertex(&self, id: &str) -> Option<&Vertex> {
        self.vertices.get(id)
    }

    /// Returns true if a vertex with the given id exists.
    #[must_use]
    pub fn has_vertex(&self, id: &str) -> bool {
        self.vertices.contains_key(id)
    }

    /// Returns the total number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    // ── Edge CRUD ──────────────────────────────────────────────────────

    /// Adds an edge to the store.
    ///
    /// Endpoints are not required to exist.
    ///
    /// # Errors
    ///
    /// Returns `Error::EdgeExists` if an edge with the same id exists.
    pub fn add_edge(&mut self, edge: Edge) -> Result<()> {
        let id = edge.id().to_string();
        if self.edges.contains_key(&id) {
            return Err(Error::EdgeExists(id));
        }

        self.outgoing
            .entry(edge.from().to_string())
            .or_default()
            .push(id.clone());
        self.incoming
            .entry(edge.to().to_string())
            .or_default()
            .push(id.clone());

        self.edges.insert(id, edge);
        Ok(())
    }

    /// Gets all outbound edges of a vertex, in insertion order.
    #[must_use]
    pub fn get_outgoing(&self, vertex_id: &str) -> Vec<&Edge> {
        self.resolve(self.outgoing.get(vertex_id))
    }

    /// Gets all inbound edges of a vertex, in insertion order.
    #[must_use]
    pub fn get_incoming(&self, vertex_id: &str) -> Vec<&Edge> {
        self.resolve(self.incoming.get(vertex_id))
    }

    /// Checks if an edge with the given id exists.
    #[must_use]
    pub fn has_edge(&self, id: &str) -> bool {
        self.edges.contains_key(id)
    }

    /// Returns the total number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn resolve(&self, ids: Option<&Vec<String>>) -> Vec<&Edge> {
        ids.map(|ids| ids.iter().filter_map(|id| self.edges.get(id)).collect())
            .unwrap_or_default()
    }
}

//! Root-to-vertex paths.

use serde::{Deserialize, Serialize};

use crate::graph::{Edge, Vertex};

/// The vertices and edges leading from the start vertex to the current one.
///
/// A non-empty path always holds exactly one more vertex than edges.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Path {
    /// Vertices from the start vertex to the current vertex.
    pub vertices: Vec<Vertex>,
    /// Edges connecting consecutive vertices.
    pub edges: Vec<Edge>,
}

impl Path {
    /// Creates an empty path.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of hops from the start vertex.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    /// Returns the last vertex, if any.
    #[must_use]
    pub fn last_vertex(&self) -> Option<&Vertex> {
        self.vertices.last()
    }

    /// Returns the vertex identities along the path.
    #[must_use]
    pub fn vertex_ids(&self) -> Vec<&str> {
        self.vertices.iter().map(Vertex::id).collect()
    }

    /// Returns the edge identities along the path.
    #[must_use]
    pub fn edge_ids(&self) -> Vec<&str> {
        self.edges.iter().map(Edge::id).collect()
    }

    /// Appends a step. The start vertex is pushed without an edge.
    pub(crate) fn push(&mut self, edge: Option<&Edge>, vertex: &Vertex) {
        if let Some(edge) = edge {
            self.edges.push(edge.clone());
        }
        self.vertices.push(vertex.clone());
    }

    /// Removes the last step.
    pub(crate) fn pop(&mut self) {
        if !self.edges.is_empty() {
            self.edges.pop();
        }
        self.vertices.pop();
    }
}

//! Datasources: the storage boundary of the traversal engine.
//!
//! A [`Datasource`] resolves vertex documents and lists a vertex's edges. Two
//! default implementations delegate to a storage layer:
//!
//! - [`CollectionDatasource`] over a single [`EdgeCollection`]
//! - [`GraphDatasource`] over a [`NamedGraph`], normalizing its edges
//!
//! Neither catches storage errors. Recovering from dangling references is
//! the expander's job.

use std::sync::Arc;

use crate::error::{Error, Result};
use crate::graph::{Edge, InMemoryEdgeStore, InMemoryGraph, Vertex};

/// Vertex and edge lookups consumed by expanders.
pub trait Datasource {
    /// Resolves a vertex document.
    ///
    /// Fails with `Error::VertexNotFound` if the vertex does not exist.
    fn get_vertex(&self, vertex_id: &str) -> Result<Vertex>;

    /// Returns edges whose `from` is `vertex_id`.
    fn get_out_edges(&self, vertex_id: &str) -> Result<Vec<Edge>>;

    /// Returns edges whose `to` is `vertex_id`.
    fn get_in_edges(&self, vertex_id: &str) -> Result<Vec<Edge>>;

    /// Returns inbound followed by outbound edges of `vertex_id`.
    fn get_all_edges(&self, vertex_id: &str) -> Result<Vec<Edge>>;
}

impl<D: Datasource + ?Sized> Datasource for Arc<D> {
    fn get_vertex(&self, vertex_id: &str) -> Result<Vertex> {
        (**self).get_vertex(vertex_id)
    }

    fn get_out_edges(&self, vertex_id: &str) -> Result<Vec<Edge>> {
        (**self).get_out_edges(vertex_id)
    }

    fn get_in_edges(&self, vertex_id: &str) -> Result<Vec<Edge>> {
        (**self).get_in_edges(vertex_id)
    }

    fn get_all_edges(&self, vertex_id: &str) -> Result<Vec<Edge>> {
        (**self).get_all_edges(vertex_id)
    }
}

// ── Storage-layer contracts ────────────────────────────────────────────

/// Storage-layer view of one edge collection and the vertices it connects.
pub trait EdgeCollection {
    /// Fetches a vertex document.
    fn document(&self, vertex_id: &str) -> Result<Vertex>;

    /// Edges leaving `vertex_id`.
    fn out_edges(&self, vertex_id: &str) -> Result<Vec<Edge>>;

    /// Edges arriving at `vertex_id`.
    fn in_edges(&self, vertex_id: &str) -> Result<Vec<Edge>>;

    /// Edges touching `vertex_id` in either direction.
    fn edges(&self, vertex_id: &str) -> Result<Vec<Edge>>;
}

impl<C: EdgeCollection + ?Sized> EdgeCollection for Arc<C> {
    fn document(&self, vertex_id: &str) -> Result<Vertex> {
        (**self).document(vertex_id)
    }

    fn out_edges(&self, vertex_id: &str) -> Result<Vec<Edge>> {
        (**self).out_edges(vertex_id)
    }

    fn in_edges(&self, vertex_id: &str) -> Result<Vec<Edge>> {
        (**self).in_edges(vertex_id)
    }

    fn edges(&self, vertex_id: &str) -> Result<Vec<Edge>> {
        (**self).edges(vertex_id)
    }
}

/// An edge as reported by a named graph.
///
/// Endpoints are graph-qualified vertex identities (`<graph>/<vertex id>`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedGraphEdge {
    /// Edge identity.
    pub id: String,
    /// Qualified identity of the source vertex.
    pub from: String,
    /// Qualified identity of the target vertex.
    pub to: String,
}

/// Storage-layer view of a named graph.
pub trait NamedGraph {
    /// Graph name, used as the qualification prefix of vertex identities.
    fn name(&self) -> &str;

    /// Fetches a vertex document.
    fn vertex(&self, vertex_id: &str) -> Result<Vertex>;

    /// Edges leaving `vertex_id`.
    fn out_edges(&self, vertex_id: &str) -> Result<Vec<NamedGraphEdge>>;

    /// Edges arriving at `vertex_id`.
    fn in_edges(&self, vertex_id: &str) -> Result<Vec<NamedGraphEdge>>;

    /// Edges touching `vertex_id` in either direction.
    fn edges(&self, vertex_id: &str) -> Result<Vec<NamedGraphEdge>>;
}

// ── Default datasources ────────────────────────────────────────────────

/// Datasource backed directly by an edge collection.
#[derive(Debug, Clone)]
pub struct CollectionDatasource<C> {
    collection: C,
}

impl<C: EdgeCollection> CollectionDatasource<C> {
    /// Wraps an edge collection.
    #[must_use]
    pub fn new(collection: C) -> Self {
        Self { collection }
    }

    /// Returns the wrapped collection.
    #[must_use]
    pub fn collection(&self) -> &C {
        &self.collection
    }
}

impl<C: EdgeCollection> Datasource for CollectionDatasource<C> {
    fn get_vertex(&self, vertex_id: &str) -> Result<Vertex> {
        self.collection.document(vertex_id)
    }

    fn get_out_edges(&self, vertex_id: &str) -> Result<Vec<Edge>> {
        self.collection.out_edges(vertex_id)
    }

    fn get_in_edges(&self, vertex_id: &str) -> Result<Vec<Edge>> {
        self.collection.in_edges(vertex_id)
    }

    fn get_all_edges(&self, vertex_id: &str) -> Result<Vec<Edge>> {
        self.collection.edges(vertex_id)
    }
}

/// Datasource backed by a named graph.
///
/// Edges are normalized to `{ id, from, to }` records whose endpoints have
/// the `<graph>/` prefix stripped, so they line up with vertex identities.
#[derive(Debug, Clone)]
pub struct GraphDatasource<G> {
    graph: G,
}

impl<G: NamedGraph> GraphDatasource<G> {
    /// Wraps a named graph.
    #[must_use]
    pub fn new(graph: G) -> Self {
        Self { graph }
    }

    /// Returns the wrapped graph.
    #[must_use]
    pub fn graph(&self) -> &G {
        &self.graph
    }

    fn normalize(&self, edges: Vec<NamedGraphEdge>) -> Result<Vec<Edge>> {
        let prefix = format!("{}/", self.graph.name());
        let strip = |id: &str| id.strip_prefix(prefix.as_str()).unwrap_or(id).to_string();
        edges
            .into_iter()
            .map(|e| Edge::new(e.id, strip(&e.from), strip(&e.to)))
            .collect()
    }
}

impl<G: NamedGraph> Datasource for GraphDatasource<G> {
    fn get_vertex(&self, vertex_id: &str) -> Result<Vertex> {
        self.graph.vertex(vertex_id)
    }

    fn get_out_edges(&self, vertex_id: &str) -> Result<Vec<Edge>> {
        self.normalize(self.graph.out_edges(vertex_id)?)
    }

    fn get_in_edges(&self, vertex_id: &str) -> Result<Vec<Edge>> {
        self.normalize(self.graph.in_edges(vertex_id)?)
    }

    fn get_all_edges(&self, vertex_id: &str) -> Result<Vec<Edge>> {
        self.normalize(self.graph.edges(vertex_id)?)
    }
}

// ── In-memory storage bindings ─────────────────────────────────────────

impl EdgeCollection for InMemoryEdgeStore {
    fn document(&self, vertex_id: &str) -> Result<Vertex> {
        self.get_vertex(vertex_id)
            .cloned()
            .ok_or_else(|| Error::VertexNotFound(vertex_id.to_string()))
    }

    fn out_edges(&self, vertex_id: &str) -> Result<Vec<Edge>> {
        Ok(self.get_outgoing(vertex_id).into_iter().cloned().collect())
    }

    fn in_edges(&self, vertex_id: &str) -> Result<Vec<Edge>> {
        Ok(self.get_incoming(vertex_id).into_iter().cloned().collect())
    }

    fn edges(&self, vertex_id: &str) -> Result<Vec<Edge>> {
        let mut edges = self.in_edges(vertex_id)?;
        // Self-loops are already listed as inbound.
        edges.extend(
            self.out_edges(vertex_id)?
                .into_iter()
                .filter(|edge| !edge.is_self_loop()),
        );
        Ok(edges)
    }
}

impl InMemoryGraph {
    fn unqualified<'a>(&self, vertex_id: &'a str) -> &'a str {
        vertex_id
            .strip_prefix(self.name())
            .and_then(|rest| rest.strip_prefix('/'))
            .unwrap_or(vertex_id)
    }

    fn qualified_edges(&self, edges: Vec<Edge>) -> Vec<NamedGraphEdge> {
        edges
            .into_iter()
            .map(|e| NamedGraphEdge {
                id: e.id().to_string(),
                from: self.qualify(e.from()),
                to: self.qualify(e.to()),
            })
            .collect()
    }
}

impl NamedGraph for InMemoryGraph {
    fn name(&self) -> &str {
        InMemoryGraph::name(self)
    }

    fn vertex(&self, vertex_id: &str) -> Result<Vertex> {
        self.store().document(self.unqualified(vertex_id))
    }

    fn out_edges(&self, vertex_id: &str) -> Result<Vec<NamedGraphEdge>> {
        let edges = self.store().out_edges(self.unqualified(vertex_id))?;
        Ok(self.qualified_edges(edges))
    }

    fn in_edges(&self, vertex_id: &str) -> Result<Vec<NamedGraphEdge>> {
        let edges = self.store().in_edges(self.unqualified(vertex_id))?;
        Ok(self.qualified_edges(edges))
    }

    fn edges(&self, vertex_id: &str) -> Result<Vec<NamedGraphEdge>> {
        let edges = self.store().edges(self.unqualified(vertex_id))?;
        Ok(self.qualified_edges(edges))
    }
}

//! Expanders: computing the connections to descend into.
//!
//! The direction-based expanders ([`OutboundExpander`], [`InboundExpander`],
//! [`AnyExpander`]) honor the configured edge sort and expand filter, and
//! drop connections whose neighbor vertex cannot be found. The label-based
//! expanders follow only edges whose label is listed in the configuration
//! and propagate every lookup failure.

use std::cmp::Ordering;

use crate::error::Result;
use crate::graph::{Edge, Vertex};

use super::path::Path;
use super::traverser::TraversalConfig;

/// An edge to follow together with the vertex it leads to.
#[derive(Debug, Clone, PartialEq)]
pub struct Connection {
    /// The edge being followed.
    pub edge: Edge,
    /// The neighbor reached through `edge`.
    pub vertex: Vertex,
}

impl Connection {
    /// Creates a connection.
    #[must_use]
    pub fn new(edge: Edge, vertex: Vertex) -> Self {
        Self { edge, vertex }
    }
}

/// Computes the ordered connections of a vertex.
pub trait Expander {
    /// Returns the connections of `vertex`, reached via `path`.
    fn expand(
        &self,
        config: &TraversalConfig,
        vertex: &Vertex,
        path: &Path,
    ) -> Result<Vec<Connection>>;
}

impl<F> Expander for F
where
    F: Fn(&TraversalConfig, &Vertex, &Path) -> Result<Vec<Connection>>,
{
    fn expand(
        &self,
        config: &TraversalConfig,
        vertex: &Vertex,
        path: &Path,
    ) -> Result<Vec<Connection>> {
        self(config, vertex, path)
    }
}

/// Extra approval step applied by the direction-based expanders to each
/// candidate connection.
pub trait ExpandFilter {
    /// Returns true to keep the connection to `neighbor` through `edge`.
    fn approve(
        &self,
        config: &TraversalConfig,
        neighbor: &Vertex,
        edge: &Edge,
        path: &Path,
    ) -> Result<bool>;
}

impl<F> ExpandFilter for F
where
    F: Fn(&TraversalConfig, &Vertex, &Edge, &Path) -> Result<bool>,
{
    fn approve(
        &self,
        config: &TraversalConfig,
        neighbor: &Vertex,
        edge: &Edge,
        path: &Path,
    ) -> Result<bool> {
        self(config, neighbor, edge, path)
    }
}

/// Comparator used to sort edges before expansion.
pub type EdgeComparator = Box<dyn Fn(&Edge, &Edge) -> Ordering>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Outbound,
    Inbound,
    Any,
}

fn expand_direction(
    config: &TraversalConfig,
    vertex: &Vertex,
    path: &Path,
    direction: Direction,
) -> Result<Vec<Connection>> {
    let datasource = config.datasource();
    let mut edges = match direction {
        Direction::Outbound => datasource.get_out_edges(vertex.id())?,
        Direction::Inbound => datasource.get_in_edges(vertex.id())?,
        Direction::Any => datasource.get_all_edges(vertex.id())?,
    };

    if edges.len() > 1 {
        if let Some(sort) = config.sort() {
            edges.sort_by(|a, b| sort(a, b));
        }
    }

    let mut connections = Vec::with_capacity(edges.len());
    for edge in edges {
        let neighbor_id = match direction {
            Direction::Outbound => edge.to(),
            Direction::Inbound => edge.from(),
            Direction::Any => edge.peer(vertex.id()),
        };
        let neighbor = match datasource.get_vertex(neighbor_id) {
            Ok(neighbor) => neighbor,
            Err(err) if err.is_not_found() => {
                tracing::debug!(
                    edge = %edge.id(),
                    vertex = %neighbor_id,
                    "skipping connection to missing vertex"
                );
                continue;
            }
            Err(err) => return Err(err),
        };

        if let Some(expand_filter) = config.expand_filter() {
            if !expand_filter.approve(config, &neighbor, &edge, path)? {
                continue;
            }
        }

        connections.push(Connection::new(edge, neighbor));
    }

    Ok(connections)
}

/// Follows outbound edges (`from == vertex`) to their `to` vertex.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutboundExpander;

impl Expander for OutboundExpander {
    fn expand(
        &self,
        config: &TraversalConfig,
        vertex: &Vertex,
        path: &Path,
    ) -> Result<Vec<Connection>> {
        expand_direction(config, vertex, path, Direction::Outbound)
    }
}

/// Follows inbound edges (`to == vertex`) to their `from` vertex.
#[derive(Debug, Clone, Copy, Default)]
pub struct InboundExpander;

impl Expander for InboundExpander {
    fn expand(
        &self,
        config: &TraversalConfig,
        vertex: &Vertex,
        path: &Path,
    ) -> Result<Vec<Connection>> {
        expand_direction(config, vertex, path, Direction::Inbound)
    }
}

/// Follows edges in either direction to the endpoint that is not `vertex`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnyExpander;

impl Expander for AnyExpander {
    fn expand(
        &self,
        config: &TraversalConfig,
        vertex: &Vertex,
        path: &Path,
    ) -> Result<Vec<Connection>> {
        expand_direction(config, vertex, path, Direction::Any)
    }
}

fn has_listed_label(config: &TraversalConfig, edge: &Edge) -> bool {
    edge.label()
        .is_some_and(|label| config.labels.iter().any(|l| l == label))
}

fn labelled_connections(
    config: &TraversalConfig,
    edges: Vec<Edge>,
    neighbor_of: fn(&Edge) -> &str,
) -> Result<Vec<Connection>> {
    edges
        .into_iter()
        .filter(|edge| has_listed_label(config, edge))
        .map(|edge| {
            let neighbor = config.datasource().get_vertex(neighbor_of(&edge))?;
            Ok(Connection::new(edge, neighbor))
        })
        .collect()
}

/// Follows outbound edges whose label is one of `config.labels`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpandOutEdgesWithLabels;

impl Expander for ExpandOutEdgesWithLabels {
    fn expand(
        &self,
        config: &TraversalConfig,
        vertex: &Vertex,
        _: &Path,
    ) -> Result<Vec<Connection>> {
        let edges = config.datasource().get_out_edges(vertex.id())?;
        labelled_connections(config, edges, Edge::to)
    }
}

/// Follows inbound edges whose label is one of `config.labels`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpandInEdgesWithLabels;

impl Expander for ExpandInEdgesWithLabels {
    fn expand(
        &self,
        config: &TraversalConfig,
        vertex: &Vertex,
        _: &Path,
    ) -> Result<Vec<Connection>> {
        let edges = config.datasource().get_in_edges(vertex.id())?;
        labelled_connections(config, edges, Edge::from)
    }
}

/// Follows inbound, then outbound, edges whose label is one of
/// `config.labels`. A self-loop is followed once.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpandEdgesWithLabels;

impl Expander for ExpandEdgesWithLabels {
    fn expand(
        &self,
        config: &TraversalConfig,
        vertex: &Vertex,
        path: &Path,
    ) -> Result<Vec<Connection>> {
        let mut connections = ExpandInEdgesWithLabels.expand(config, vertex, path)?;
        let outbound = config
            .datasource()
            .get_out_edges(vertex.id())?
            .into_iter()
            .filter(|edge| !edge.is_self_loop())
            .collect();
        connections.extend(labelled_connections(config, outbound, Edge::to)?);
        Ok(connections)
    }
}

//! Configurable graph traversal.
//!
//! A [`Traverser`] walks a graph from a start vertex using breadth-first or
//! depth-first search. Four pluggable collaborators decide what happens:
//!
//! - a [`Datasource`] resolves vertices and lists edges
//! - an [`Expander`] picks the connections to descend into
//! - [`Filter`]s vote on whether each vertex is visited and/or expanded
//! - a [`Visitor`] records each visit into a caller-owned result
//!
//! Visitation can be pre- or post-order, siblings can be processed forward
//! or backward, and vertex/edge uniqueness can be enforced per path or for
//! the whole run.
//!
//! # Example
//!
//! ```rust
//! use graphwalk_core::graph::{Edge, InMemoryEdgeStore, Vertex};
//! use graphwalk_core::traversal::{
//!     CollectionDatasource, Strategy, TraversalResult, Traverser,
//! };
//!
//! # fn main() -> graphwalk_core::Result<()> {
//! let mut store = InMemoryEdgeStore::new();
//! for id in ["A", "B", "C", "D"] {
//!     store.add_vertex(Vertex::new(id))?;
//! }
//! store.add_edge(Edge::new("AB", "A", "B")?)?;
//! store.add_edge(Edge::new("AC", "A", "C")?)?;
//! store.add_edge(Edge::new("BD", "B", "D")?)?;
//!
//! let traverser = Traverser::builder(CollectionDatasource::new(store))
//!     .strategy(Strategy::BreadthFirst)
//!     .build()?;
//! let mut result = TraversalResult::tracking();
//! traverser.traverse_from(&mut result, "A")?;
//! assert_eq!(result.vertex_ids(), vec!["A", "B", "C", "D"]);
//! # Ok(())
//! # }
//! ```

mod bfs;
mod datasource;
mod dfs;
mod expander;
mod filter;
mod path;
mod strategy;
mod traverser;
mod uniqueness;
mod visitor;

#[cfg(test)]
mod test_support;
#[cfg(test)]
mod uniqueness_tests;

pub use crate::config::{ItemOrder, Order, Strategy, Uniqueness, UniquenessConfig};
pub use datasource::{
    CollectionDatasource, Datasource, EdgeCollection, GraphDatasource, NamedGraph, NamedGraphEdge,
};
pub use expander::{
    AnyExpander, Connection, EdgeComparator, ExpandEdgesWithLabels, ExpandFilter,
    ExpandInEdgesWithLabels, ExpandOutEdgesWithLabels, Expander, InboundExpander,
    OutboundExpander,
};
pub use filter::{
    CombinedFilter, Filter, FilterResult, FilterVote, IncludeMatchingAttributesFilter,
    MaxDepthFilter, MinDepthFilter, RawFilter, VisitAllFilter, EXCLUDE, PRUNE,
};
pub use path::Path;
pub use strategy::check_reverse;
pub use traverser::{TraversalConfig, Traverser, TraverserBuilder};
pub use uniqueness::UniquenessState;
pub use visitor::{
    CountingVisitor, TrackingVisitor, TraversalResult, VisitRecorder, Visited, Visitor,
};

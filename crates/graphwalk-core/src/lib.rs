//! # graphwalk core
//!
//! A generic, configurable graph-traversal engine.
//!
//! Walk a graph from a start vertex breadth-first or depth-first, in pre- or
//! post-order, with pluggable filters, expanders, visitors and datasources.
//!
//! ## Features
//!
//! - **Two strategies**: breadth-first and depth-first, with forward or
//!   backward sibling order
//! - **Filter protocol**: filters vote `prune` (stop expanding) and/or
//!   `exclude` (skip the visit); votes are combined
//! - **Uniqueness**: per-path or global, for vertices and edges separately
//! - **Layered configuration**: defaults, `graphwalk.toml`, `GRAPHWALK_*`
//!   environment variables
//!
//! ## Quick Start
//!
//! ```rust
//! use graphwalk_core::graph::{Edge, InMemoryEdgeStore, Vertex};
//! use graphwalk_core::traversal::{
//!     CollectionDatasource, MaxDepthFilter, Order, TraversalResult, Traverser,
//! };
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut store = InMemoryEdgeStore::new();
//!     for id in ["root", "left", "right", "leaf"] {
//!         store.add_vertex(Vertex::new(id))?;
//!     }
//!     store.add_edge(Edge::new("e1", "root", "left")?)?;
//!     store.add_edge(Edge::new("e2", "root", "right")?)?;
//!     store.add_edge(Edge::new("e3", "left", "leaf")?)?;
//!
//!     let traverser = Traverser::builder(CollectionDatasource::new(store))
//!         .order(Order::PostOrder)
//!         .max_depth(1)
//!         .filter(MaxDepthFilter)
//!         .build()?;
//!
//!     let mut result = TraversalResult::tracking();
//!     traverser.traverse_from(&mut result, "root")?;
//!     assert_eq!(result.vertex_ids(), vec!["left", "right", "root"]);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
// Clippy lints configured in workspace Cargo.toml [workspace.lints.clippy]
#![cfg_attr(
    test,
    allow(
        clippy::doc_markdown,
        clippy::uninlined_format_args,
        clippy::single_match_else,
        clippy::needless_pass_by_value
    )
)]

pub mod config;
#[cfg(test)]
mod config_tests;
pub mod error;
pub mod graph;
pub mod traversal;

pub use config::{
    ItemOrder, Order, Strategy, TraversalSettings, Uniqueness, UniquenessConfig,
    DEFAULT_MAX_ITERATIONS,
};
pub use error::{Error, Result};
pub use graph::{Edge, InMemoryEdgeStore, InMemoryGraph, Vertex};
pub use traversal::{TraversalConfig, TraversalResult, Traverser, TraverserBuilder};

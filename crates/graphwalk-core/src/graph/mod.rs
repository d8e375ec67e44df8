//! Graph records and in-memory storage.
//!
//! Provides the vertex/edge documents the traversal engine walks over, plus
//! an in-memory store that implements the storage-layer contracts consumed
//! by the default datasources.
//!
//! # Example
//!
//! ```rust
//! use graphwalk_core::graph::{Edge, InMemoryEdgeStore, Vertex};
//!
//! let mut store = InMemoryEdgeStore::new();
//! store.add_vertex(Vertex::new("v/A")).unwrap();
//! store.add_vertex(Vertex::new("v/B")).unwrap();
//! store.add_edge(Edge::new("e/AB", "v/A", "v/B").unwrap()).unwrap();
//!
//! assert_eq!(store.get_outgoing("v/A").len(), 1);
//! assert_eq!(store.get_incoming("v/B")[0].id(), "e/AB");
//! ```

mod edge_store;
mod named_graph;
mod types;


pub use edge_store::InMemoryEdgeStore;
pub use named_graph::InMemoryGraph;
pub use types::{Edge, Vertex};

//! Fixtures shared by the traversal unit tests.

use crate::graph::{Edge, InMemoryEdgeStore, Vertex};

use super::datasource::CollectionDatasource;
use super::path::Path;
use super::traverser::{TraversalConfig, Traverser, TraverserBuilder};
use super::visitor::TraversalResult;

/// Builds a store holding `vertices` and one edge `"{from}{to}"` per pair.
pub(super) fn store_with(vertices: &[&str], edges: &[(&str, &str)]) -> InMemoryEdgeStore {
    let mut store = InMemoryEdgeStore::new();
    for &id in vertices {
        store.add_vertex(Vertex::new(id)).unwrap();
    }
    for (from, to) in edges {
        store
            .add_edge(Edge::new(format!("{from}{to}"), *from, *to).unwrap())
            .unwrap();
    }
    store
}

/// Default configuration over `store`.
pub(super) fn config_over(store: InMemoryEdgeStore) -> TraversalConfig {
    TraversalConfig::new(CollectionDatasource::new(store))
}

/// Path through the given vertex identities, with edges named `"{from}{to}"`.
pub(super) fn path_through(ids: &[&str]) -> Path {
    let mut path = Path::new();
    let mut previous: Option<&str> = None;
    for &id in ids {
        let edge = previous.map(|from| Edge::new(format!("{from}{id}"), from, id).unwrap());
        path.push(edge.as_ref(), &Vertex::new(id));
        previous = Some(id);
    }
    path
}

/// Tracking builder over `store`.
pub(super) fn builder_over(store: InMemoryEdgeStore) -> TraverserBuilder<TraversalResult> {
    Traverser::builder(CollectionDatasource::new(store))
}

/// Runs `traverser` from `start` and returns the visited identities.
pub(super) fn visited_from(traverser: &Traverser<TraversalResult>, start: &str) -> Vec<String> {
    let mut result = TraversalResult::tracking();
    traverser.traverse_from(&mut result, start).unwrap();
    result.vertex_ids().into_iter().map(str::to_string).collect()
}

/// A -> B, A -> C, B -> D.
pub(super) fn small_tree() -> InMemoryEdgeStore {
    store_with(&["A", "B", "C", "D"], &[("A", "B"), ("A", "C"), ("B", "D")])
}

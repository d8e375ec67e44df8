//! Named graph wrapper over an in-memory store.

use super::edge_store::InMemoryEdgeStore;

/// An edge store published under a graph name.
///
/// Vertex identities handed out through the named-graph interface are
/// qualified as `<graph>/<vertex id>`, the same way remote graph APIs report
/// them.
#[derive(Debug, Clone)]
pub struct InMemoryGraph {
    name: String,
    store: InMemoryEdgeStore,
}

impl InMemoryGraph {
    /// Wraps `store` under `name`.
    #[must_use]
    pub fn new(name: &str, store: InMemoryEdgeStore) -> Self {
        Self {
            name: name.to_string(),
            store,
        }
    }

    /// Returns the graph name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the underlying store.
    #[must_use]
    pub fn store(&self) -> &InMemoryEdgeStore {
        &self.store
    }

    /// Qualifies a vertex id with the graph name.
    #[must_use]
    pub fn qualify(&self, vertex_id: &str) -> String {
        format!("{}/{}", self.name, vertex_id)
    }
}

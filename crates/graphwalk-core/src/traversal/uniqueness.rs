//! Vertex and edge uniqueness bookkeeping.

use rustc_hash::FxHashSet;

use crate::config::{Uniqueness, UniquenessConfig};
use crate::graph::{Edge, Vertex};

use super::path::Path;

/// Identities already seen, per axis.
///
/// With [`Uniqueness::Global`] the sets live for the whole run. With
/// [`Uniqueness::Path`] they are rebuilt from the current path before every
/// check. [`Uniqueness::None`] never consults them.
#[derive(Debug, Clone, Default)]
pub struct UniquenessState {
    vertices: FxHashSet<String>,
    edges: FxHashSet<String>,
}

impl UniquenessState {
    /// Creates empty state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces path-scoped sets with the identities on `path`.
    ///
    /// When `skip_last` is set, the final vertex and edge are left out; they
    /// belong to the item about to be checked.
    pub fn rebuild_from_path(
        &mut self,
        uniqueness: UniquenessConfig,
        path: &Path,
        skip_last: bool,
    ) {
        if uniqueness.vertices == Uniqueness::Path {
            self.vertices = collect_ids(path.vertices.iter().map(Vertex::id), skip_last);
        }
        if uniqueness.edges == Uniqueness::Path {
            self.edges = collect_ids(path.edges.iter().map(Edge::id), skip_last);
        }
    }

    /// Checks `vertex` (reached via `edge`) and marks it as seen.
    ///
    /// Returns false if either constrained axis has already seen its
    /// identity. The vertex axis is checked and marked first, so a
    /// rejection on the edge axis leaves the vertex marked.
    pub fn check(
        &mut self,
        uniqueness: UniquenessConfig,
        vertex: &Vertex,
        edge: Option<&Edge>,
    ) -> bool {
        if uniqueness.vertices != Uniqueness::None {
            let fresh = self.vertices.insert(vertex.id().to_string());
            if !fresh {
                return false;
            }
        }
        match edge {
            Some(edge) if uniqueness.edges != Uniqueness::None => {
                self.edges.insert(edge.id().to_string())
            }
            _ => true,
        }
    }

    /// Returns true if the vertex identity has been marked.
    #[must_use]
    pub fn has_vertex(&self, vertex_id: &str) -> bool {
        self.vertices.contains(vertex_id)
    }

    /// Returns true if the edge identity has been marked.
    #[must_use]
    pub fn has_edge(&self, edge_id: &str) -> bool {
        self.edges.contains(edge_id)
    }
}

fn collect_ids<'a>(
    ids: impl ExactSizeIterator<Item = &'a str>,
    skip_last: bool,
) -> FxHashSet<String> {
    let take = if skip_last {
        ids.len().saturating_sub(1)
    } else {
        ids.len()
    };
    ids.take(take).map(str::to_string).collect()
}

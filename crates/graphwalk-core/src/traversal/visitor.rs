//! Visitors: side effects performed for each visited vertex.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::graph::Vertex;

use super::path::Path;
use super::traverser::TraversalConfig;

/// Invoked for every vertex the filters allow to be visited.
///
/// `result` is the caller-owned accumulator passed to `traverse`; the engine
/// never reads it.
pub trait Visitor<R> {
    /// Records the visit of `vertex`, reached via `path`.
    fn visit(
        &self,
        config: &TraversalConfig,
        result: &mut R,
        vertex: &Vertex,
        path: &Path,
    ) -> Result<()>;
}

impl<R, F> Visitor<R> for F
where
    F: Fn(&TraversalConfig, &mut R, &Vertex, &Path) -> Result<()>,
{
    fn visit(
        &self,
        config: &TraversalConfig,
        result: &mut R,
        vertex: &Vertex,
        path: &Path,
    ) -> Result<()> {
        self(config, result, vertex, path)
    }
}

/// Result accumulator understood by [`TrackingVisitor`].
///
/// Either collection may be absent, in which case it is skipped.
pub trait VisitRecorder {
    /// Collection receiving copies of visited vertices.
    fn visited_vertices(&mut self) -> Option<&mut Vec<Vertex>>;

    /// Collection receiving copies of visit paths.
    fn visited_paths(&mut self) -> Option<&mut Vec<Path>>;
}

/// Collections filled by [`TrackingVisitor`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Visited {
    /// Visited vertices, in visit order.
    pub vertices: Option<Vec<Vertex>>,
    /// Paths to the visited vertices, in visit order.
    pub paths: Option<Vec<Path>>,
}

/// Default result accumulator.
///
/// # Example
///
/// ```rust
/// use graphwalk_core::traversal::TraversalResult;
///
/// let result = TraversalResult::tracking();
/// assert_eq!(result.vertex_ids(), Vec::<&str>::new());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TraversalResult {
    /// Visit records.
    pub visited: Visited,
}

impl TraversalResult {
    /// Tracks both vertices and paths.
    #[must_use]
    pub fn tracking() -> Self {
        Self {
            visited: Visited {
                vertices: Some(Vec::new()),
                paths: Some(Vec::new()),
            },
        }
    }

    /// Tracks vertices only.
    #[must_use]
    pub fn vertices_only() -> Self {
        Self {
            visited: Visited {
                vertices: Some(Vec::new()),
                paths: None,
            },
        }
    }

    /// Identities of the recorded vertices.
    #[must_use]
    pub fn vertex_ids(&self) -> Vec<&str> {
        self.visited
            .vertices
            .iter()
            .flatten()
            .map(Vertex::id)
            .collect()
    }

    /// Vertex identities of each recorded path.
    #[must_use]
    pub fn path_ids(&self) -> Vec<Vec<&str>> {
        self.visited
            .paths
            .iter()
            .flatten()
            .map(Path::vertex_ids)
            .collect()
    }
}

impl VisitRecorder for TraversalResult {
    fn visited_vertices(&mut self) -> Option<&mut Vec<Vertex>> {
        self.visited.vertices.as_mut()
    }

    fn visited_paths(&mut self) -> Option<&mut Vec<Path>> {
        self.visited.paths.as_mut()
    }
}

/// Appends copies of each visited vertex and its path to the result.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrackingVisitor;

impl<R: VisitRecorder> Visitor<R> for TrackingVisitor {
    fn visit(
        &self,
        _: &TraversalConfig,
        result: &mut R,
        vertex: &Vertex,
        path: &Path,
    ) -> Result<()> {
        if let Some(vertices) = result.visited_vertices() {
            vertices.push(vertex.clone());
        }
        if let Some(paths) = result.visited_paths() {
            paths.push(path.clone());
        }
        Ok(())
    }
}

/// Counts visits.
#[derive(Debug, Clone, Copy, Default)]
pub struct CountingVisitor;

impl Visitor<usize> for CountingVisitor {
    fn visit(&self, _: &TraversalConfig, result: &mut usize, _: &Vertex, _: &Path) -> Result<()> {
        *result += 1;
        Ok(())
    }
}

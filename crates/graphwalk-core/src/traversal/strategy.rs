//! Bookkeeping shared by the breadth-first and depth-first strategies.

use crate::config::{ItemOrder, Order, Strategy};
use crate::error::{Error, Result};
use crate::graph::{Edge, Vertex};

use super::expander::Connection;

/// Decides whether expanded connections are reversed before scheduling.
///
/// Breadth-first processes siblings in append order, depth-first in reverse
/// push order; post-order additionally flips the order in which finished
/// vertices surface. This table is the only place sibling order is decided.
///
/// | order | item order | strategy      | reverse |
/// |-------|------------|---------------|---------|
/// | post  | forward    | any           | yes     |
/// | pre   | backward   | breadth-first | yes     |
/// | pre   | forward    | depth-first   | yes     |
/// | other combinations                || no      |
#[must_use]
pub fn check_reverse(order: Order, item_order: ItemOrder, strategy: Strategy) -> bool {
    match (order, item_order, strategy) {
        (Order::PostOrder, ItemOrder::Forward, _)
        | (Order::PreOrder, ItemOrder::Backward, Strategy::BreadthFirst)
        | (Order::PreOrder, ItemOrder::Forward, Strategy::DepthFirst) => true,
        _ => false,
    }
}

/// Progress of a scheduled work item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum VisitState {
    /// Not processed yet.
    Unvisited,
    /// Processed; `visit` holds the deferred post-order decision.
    Pending { visit: bool },
    /// Post-order visit already handled.
    Done,
}

/// A vertex scheduled for descent.
#[derive(Debug, Clone)]
pub(crate) struct WorkItem {
    /// Edge leading here; `None` for the start vertex.
    pub(crate) edge: Option<Edge>,
    pub(crate) vertex: Vertex,
    /// Work-list index (breadth-first) or stack position (depth-first) of
    /// the item this one was expanded from.
    pub(crate) parent: Option<usize>,
    pub(crate) state: VisitState,
}

impl WorkItem {
    pub(crate) fn root(vertex: Vertex) -> Self {
        Self {
            edge: None,
            vertex,
            parent: None,
            state: VisitState::Unvisited,
        }
    }

    pub(crate) fn child(connection: Connection, parent: usize) -> Self {
        Self {
            edge: Some(connection.edge),
            vertex: connection.vertex,
            parent: Some(parent),
            state: VisitState::Unvisited,
        }
    }
}

/// Caps the number of loop iterations of one run.
#[derive(Debug)]
pub(crate) struct IterationGuard {
    count: usize,
    limit: usize,
}

impl IterationGuard {
    pub(crate) fn new(limit: usize) -> Self {
        Self { count: 0, limit }
    }

    /// Counts one iteration, failing once the limit is exceeded.
    pub(crate) fn tick(&mut self) -> Result<()> {
        self.count += 1;
        if self.count > self.limit {
            tracing::warn!(
                limit = self.limit,
                "traversal exceeded its iteration budget, aborting"
            );
            return Err(Error::TooManyIterations(self.limit));
        }
        Ok(())
    }
}

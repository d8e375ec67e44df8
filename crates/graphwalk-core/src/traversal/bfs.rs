//! Breadth-first strategy.
//!
//! Work items live in a growing vector and point at their parent by index,
//! so the path of any item is rebuilt by walking parent links back to the
//! start vertex. The cursor sweeps forward over the list; for post-order
//! traversals it then sweeps backward, visiting each item whose visit was
//! deferred. The backward sweep does not re-run uniqueness or filters.

use crate::config::Order;
use crate::error::Result;
use crate::graph::Vertex;

use super::path::Path;
use super::strategy::{check_reverse, IterationGuard, VisitState, WorkItem};
use super::traverser::Traverser;
use super::uniqueness::UniquenessState;

/// Position in the work list and sweep direction.
#[derive(Debug, Default)]
struct Cursor {
    index: usize,
    backward: bool,
}

impl Cursor {
    /// Moves one item in the sweep direction. Returns false once a backward
    /// sweep runs past the first item.
    fn step(&mut self) -> bool {
        if self.backward {
            match self.index.checked_sub(1) {
                Some(index) => {
                    self.index = index;
                    true
                }
                None => false,
            }
        } else {
            self.index += 1;
            true
        }
    }

    /// Steps if items remain after the cursor, otherwise turns around and
    /// stays on the current item.
    fn step_or_turn(&mut self, len: usize) -> bool {
        if self.index + 1 < len {
            self.step()
        } else {
            self.backward = true;
            true
        }
    }
}

/// Rebuilds the root-to-item path of `items[index]`.
fn build_path(items: &[WorkItem], index: usize) -> Path {
    let mut path = Path::new();
    let mut next = Some(index);
    while let Some(i) = next {
        let item = &items[i];
        if let Some(edge) = &item.edge {
            path.edges.push(edge.clone());
        }
        path.vertices.push(item.vertex.clone());
        next = item.parent;
    }
    path.edges.reverse();
    path.vertices.reverse();
    path
}

pub(crate) fn run<R>(traverser: &Traverser<R>, result: &mut R, start: &Vertex) -> Result<()> {
    let config = traverser.config();
    let reverse = check_reverse(config.order, config.item_order, config.strategy);
    let mut items = vec![WorkItem::root(start.clone())];
    let mut seen = UniquenessState::new();
    let mut guard = IterationGuard::new(config.max_iterations);
    let mut cursor = Cursor::default();

    while cursor.backward || cursor.index < items.len() {
        guard.tick()?;
        let index = cursor.index;

        if items[index].state != VisitState::Unvisited {
            if let VisitState::Pending { visit: true } = items[index].state {
                if config.order == Order::PostOrder {
                    let path = build_path(&items, index);
                    traverser.visit(result, &items[index].vertex, &path)?;
                }
            }
            items[index].state = VisitState::Done;
            if !cursor.step() {
                break;
            }
            continue;
        }

        items[index].state = VisitState::Pending { visit: false };
        let path = build_path(&items, index);

        if config.uniqueness.is_enabled() {
            seen.rebuild_from_path(config.uniqueness, &path, true);
            let item = &items[index];
            if !seen.check(config.uniqueness, &item.vertex, item.edge.as_ref()) {
                tracing::trace!(vertex = %item.vertex.id(), "uniqueness rejected vertex");
                if !cursor.step_or_turn(items.len()) {
                    break;
                }
                continue;
            }
        }

        let decision = traverser.evaluate_filter(&items[index].vertex, &path)?;
        if config.order == Order::PreOrder && decision.visit {
            traverser.visit(result, &items[index].vertex, &path)?;
        } else {
            items[index].state = VisitState::Pending {
                visit: decision.visit,
            };
        }

        if decision.expand {
            let mut connections = traverser.expand(&items[index].vertex, &path)?;
            if reverse {
                connections.reverse();
            }
            items.extend(
                connections
                    .into_iter()
                    .map(|connection| WorkItem::child(connection, index)),
            );
        }

        if config.order == Order::PostOrder && !cursor.step_or_turn(items.len()) {
            break;
        }
    }

    Ok(())
}

//! Depth-first strategy.
//!
//! The stack holds scheduled items; the path mirrors the chain of accepted
//! items currently on the stack. An item is processed when first seen on
//! top and popped, together with its path entry, when seen there again.

use crate::config::Order;
use crate::error::Result;
use crate::graph::Vertex;

use super::path::Path;
use super::strategy::{check_reverse, IterationGuard, VisitState, WorkItem};
use super::traverser::Traverser;
use super::uniqueness::UniquenessState;

pub(crate) fn run<R>(traverser: &Traverser<R>, result: &mut R, start: &Vertex) -> Result<()> {
    let config = traverser.config();
    let reverse = check_reverse(config.order, config.item_order, config.strategy);
    let mut stack = vec![WorkItem::root(start.clone())];
    let mut path = Path::new();
    let mut seen = UniquenessState::new();
    let mut guard = IterationGuard::new(config.max_iterations);

    while let Some(top) = stack.len().checked_sub(1) {
        guard.tick()?;

        if stack[top].state != VisitState::Unvisited {
            if let VisitState::Pending { visit: true } = stack[top].state {
                if config.order == Order::PostOrder {
                    traverser.visit(result, &stack[top].vertex, &path)?;
                }
            }
            stack.pop();
            path.pop();
            continue;
        }

        stack[top].state = VisitState::Pending { visit: false };

        if config.uniqueness.is_enabled() {
            seen.rebuild_from_path(config.uniqueness, &path, false);
            let item = &stack[top];
            if !seen.check(config.uniqueness, &item.vertex, item.edge.as_ref()) {
                tracing::trace!(vertex = %item.vertex.id(), "uniqueness rejected vertex");
                stack.pop();
                continue;
            }
        }

        path.push(stack[top].edge.as_ref(), &stack[top].vertex);

        let decision = traverser.evaluate_filter(&stack[top].vertex, &path)?;
        if config.order == Order::PreOrder && decision.visit {
            traverser.visit(result, &stack[top].vertex, &path)?;
        } else {
            stack[top].state = VisitState::Pending {
                visit: decision.visit,
            };
        }

        if decision.expand {
            let mut connections = traverser.expand(&stack[top].vertex, &path)?;
            if reverse {
                connections.reverse();
            }
            stack.extend(
                connections
                    .into_iter()
                    .map(|connection| WorkItem::child(connection, top)),
            );
        }
    }

    Ok(())
}

//! Tests for `UniquenessState`.

use super::test_support::path_through;
use super::uniqueness::UniquenessState;
use crate::config::{Uniqueness, UniquenessConfig};
use crate::graph::{Edge, Vertex};

fn edge(from: &str, to: &str) -> Edge {
    Edge::new(format!("{from}{to}"), from, to).unwrap()
}

#[test]
fn test_none_always_accepts() {
    let mut state = UniquenessState::new();
    let config = UniquenessConfig::default();
    let vertex = Vertex::new("A");
    assert!(state.check(config, &vertex, None));
    assert!(state.check(config, &vertex, None));
    assert!(!state.has_vertex("A"));
}

#[test]
fn test_global_vertices_reject_repeats() {
    let mut state = UniquenessState::new();
    let config = UniquenessConfig::new(Uniqueness::Global, Uniqueness::None);
    assert!(state.check(config, &Vertex::new("A"), None));
    assert!(state.check(config, &Vertex::new("B"), Some(&edge("A", "B"))));
    assert!(!state.check(config, &Vertex::new("A"), Some(&edge("B", "A"))));
    assert!(state.has_vertex("B"));
}

#[test]
fn test_global_edges_reject_repeats() {
    let mut state = UniquenessState::new();
    let config = UniquenessConfig::new(Uniqueness::None, Uniqueness::Global);
    let ab = edge("A", "B");
    assert!(state.check(config, &Vertex::new("B"), Some(&ab)));
    assert!(!state.check(config, &Vertex::new("B"), Some(&ab)));
    // The start vertex has no edge to check.
    assert!(state.check(config, &Vertex::new("A"), None));
}

#[test]
fn test_vertex_marked_even_if_edge_rejects() {
    let mut state = UniquenessState::new();
    let config = UniquenessConfig::new(Uniqueness::Global, Uniqueness::Global);
    let ab = edge("A", "B");
    assert!(state.check(config, &Vertex::new("B"), Some(&ab)));
    assert!(!state.check(config, &Vertex::new("C"), Some(&ab)));
    assert!(state.has_vertex("C"));
}

#[test]
fn test_path_rebuild_without_last() {
    let mut state = UniquenessState::new();
    let config = UniquenessConfig::new(Uniqueness::Path, Uniqueness::Path);
    let path = path_through(&["A", "B", "C"]);

    state.rebuild_from_path(config, &path, true);
    assert!(state.has_vertex("A"));
    assert!(state.has_vertex("B"));
    assert!(!state.has_vertex("C"));
    assert!(state.has_edge("AB"));
    assert!(!state.has_edge("BC"));

    // C is the item being checked and is not a repeat.
    assert!(state.check(config, &Vertex::new("C"), Some(&edge("B", "C"))));
}

#[test]
fn test_path_rebuild_replaces_previous_contents() {
    let mut state = UniquenessState::new();
    let config = UniquenessConfig::new(Uniqueness::Path, Uniqueness::None);

    state.rebuild_from_path(config, &path_through(&["A", "B"]), false);
    assert!(!state.check(config, &Vertex::new("A"), None));

    // Backtracking to a sibling branch forgets B.
    state.rebuild_from_path(config, &path_through(&["A", "C"]), false);
    assert!(state.check(config, &Vertex::new("B"), None));
}

#[test]
fn test_rebuild_leaves_global_axis_alone() {
    let mut state = UniquenessState::new();
    let config = UniquenessConfig::new(Uniqueness::Path, Uniqueness::Global);
    let ab = edge("A", "B");
    assert!(state.check(config, &Vertex::new("B"), Some(&ab)));

    state.rebuild_from_path(config, &path_through(&["X"]), false);
    assert!(state.has_edge("AB"));
    assert!(!state.has_vertex("B"));
}

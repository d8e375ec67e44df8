//! Label-filtered and attribute-filtered traversals of the people graph.

mod common;

use common::{builder, names, people, run_from, vid};
use graphwalk_core::traversal::{
    AnyExpander, ExpandEdgesWithLabels, ExpandInEdgesWithLabels, ExpandOutEdgesWithLabels,
    IncludeMatchingAttributesFilter, Strategy, TraversalResult, Uniqueness, UniquenessConfig,
};
use graphwalk_core::{Error, Traverser, TraverserBuilder};
use serde_json::{json, Map, Value};

fn global_vertices() -> UniquenessConfig {
    UniquenessConfig::new(Uniqueness::Global, Uniqueness::None)
}

fn likes(builder: TraverserBuilder<TraversalResult>) -> Traverser<TraversalResult> {
    builder
        .uniqueness(global_vertices())
        .label("likes")
        .build()
        .unwrap()
}

#[test]
fn test_edges_with_labels_both_directions() {
    let traverser = likes(builder(people()).expander(ExpandEdgesWithLabels));
    assert_eq!(
        names(&run_from(&traverser, "Alice")),
        ["Alice", "Bob", "Frank", "Charly", "Diana", "Eric"]
    );
}

#[test]
fn test_in_edges_with_labels() {
    let traverser = likes(builder(people()).expander(ExpandInEdgesWithLabels));
    assert_eq!(
        names(&run_from(&traverser, "Alice")),
        ["Alice", "Bob", "Frank", "Diana"]
    );
}

#[test]
fn test_out_edges_with_labels() {
    let traverser = likes(builder(people()).expander(ExpandOutEdgesWithLabels));
    assert_eq!(
        names(&run_from(&traverser, "Alice")),
        ["Alice", "Bob", "Charly"]
    );
}

#[test]
fn test_several_labels() {
    let traverser = builder(people())
        .expander(ExpandOutEdgesWithLabels)
        .uniqueness(global_vertices())
        .labels(["likes", "l"])
        .build()
        .unwrap();
    assert_eq!(
        names(&run_from(&traverser, "Alice")),
        ["Alice", "Bob", "Charly", "Frank"]
    );
}

#[test]
fn test_no_labels_follows_nothing() {
    let traverser = builder(people())
        .expander(ExpandEdgesWithLabels)
        .build()
        .unwrap();
    assert_eq!(names(&run_from(&traverser, "Alice")), ["Alice"]);
}

#[test]
fn test_label_expansion_breadth_first() {
    let traverser = likes(
        builder(people())
            .strategy(Strategy::BreadthFirst)
            .expander(ExpandOutEdgesWithLabels),
    );
    assert_eq!(
        names(&run_from(&traverser, "Diana")),
        ["Diana", "Alice", "Eric", "Bob", "Charly"]
    );
}

#[test]
fn test_label_expander_fails_on_dangling_edge() {
    let mut store = people();
    store
        .add_edge(
            graphwalk_core::Edge::new("edges/AlicexGhost", vid("Alice"), vid("Ghost"))
                .unwrap()
                .with_label("likes"),
        )
        .unwrap();
    let traverser = likes(builder(store).expander(ExpandOutEdgesWithLabels));
    let mut result = TraversalResult::tracking();
    assert_eq!(
        traverser.traverse_from(&mut result, &vid("Alice")),
        Err(Error::VertexNotFound(vid("Ghost")))
    );
}

fn example(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("not an object: {other}"),
    }
}

#[test]
fn test_include_matching_attributes() {
    let filter = IncludeMatchingAttributesFilter::new(vec![
        example(json!({"name": "Alice"})),
        example(json!({"name": "Frank"})),
        example(json!({"name": "Diana", "key": "FAIL"})),
        example(json!({"_id": "vertices/Bob"})),
    ]);
    let traverser = builder(people())
        .uniqueness(global_vertices())
        .expander(AnyExpander)
        .filter(filter)
        .build()
        .unwrap();
    assert_eq!(
        names(&run_from(&traverser, "Alice")),
        ["Alice", "Bob", "Frank"]
    );
}

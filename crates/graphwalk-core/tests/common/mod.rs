//! Graph fixtures shared by the integration tests.

#![allow(dead_code)]

use graphwalk_core::graph::{Edge, InMemoryEdgeStore, Vertex};
use graphwalk_core::traversal::{CollectionDatasource, TraversalResult, Traverser};
use serde_json::json;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Routes engine logs to the test writer, filtered by `RUST_LOG`.
///
/// Safe to call from every test; only the first call installs a subscriber.
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_test_writer())
        .try_init();
}

/// Vertex identity of a named fixture vertex.
pub fn vid(name: &str) -> String {
    format!("vertices/{name}")
}

fn named_vertex(name: &str) -> Vertex {
    Vertex::new(vid(name)).with_attribute("name", json!(name))
}

fn connect(store: &mut InMemoryEdgeStore, from: &str, to: &str, label: Option<&str>) {
    let mut edge = Edge::new(format!("edges/{from}x{to}"), vid(from), vid(to)).unwrap();
    if let Some(label) = label {
        edge = edge.with_label(label);
    }
    store.add_edge(edge).unwrap();
}

/// Continents, countries and cities, with a tree of edges below `World`.
pub fn world() -> InMemoryEdgeStore {
    let mut store = InMemoryEdgeStore::new();
    for name in [
        "World",
        "Nothing",
        "Europe",
        "Asia",
        "America",
        "Australia",
        "Antarctica",
        "Africa",
        "Blackhole",
        "DE",
        "FR",
        "GB",
        "IE",
        "CN",
        "JP",
        "TW",
        "US",
        "MX",
        "AU",
        "EG",
        "ZA",
        "AN",
        "London",
        "Paris",
        "Lyon",
        "Cologne",
        "Dusseldorf",
        "Beijing",
        "Shanghai",
        "Tokyo",
        "Kyoto",
        "Taipeh",
        "Perth",
        "Sydney",
    ] {
        store.add_vertex(named_vertex(name)).unwrap();
    }

    let tree: [(&str, &[&str]); 7] = [
        (
            "World",
            &["Europe", "Asia", "America", "Australia", "Africa", "Antarctica"],
        ),
        ("Europe", &["DE", "FR", "GB", "IE"]),
        ("Asia", &["CN", "JP", "TW"]),
        ("America", &["US", "MX"]),
        ("Australia", &["AU"]),
        ("Antarctica", &["AN"]),
        ("Africa", &[]),
    ];
    for (parent, children) in tree {
        for child in children {
            connect(&mut store, parent, child, None);
        }
    }
    store
}

/// Six people connected by `likes`/`hates` edges.
pub fn people() -> InMemoryEdgeStore {
    let mut store = InMemoryEdgeStore::new();
    for name in ["Alice", "Bob", "Charly", "Diana", "Eric", "Frank"] {
        store.add_vertex(named_vertex(name)).unwrap();
    }
    for (from, to, label) in [
        ("Alice", "Bob", "likes"),
        ("Bob", "Alice", "likes"),
        ("Alice", "Diana", "hates"),
        ("Alice", "Eric", "hates"),
        ("Eric", "Alice", "hates"),
        ("Bob", "Charly", "likes"),
        ("Charly", "Diana", "hates"),
        ("Diana", "Charly", "hates"),
        ("Diana", "Alice", "likes"),
        ("Diana", "Eric", "likes"),
        ("Alice", "Frank", "l"),
        ("Frank", "Bob", "likes"),
    ] {
        connect(&mut store, from, to, Some(label));
    }
    store
}

/// Nine letter vertices with two diamonds below `A`.
///
/// Edges are inserted out of key order so expansion order depends on the
/// configured sort.
pub fn letters() -> InMemoryEdgeStore {
    let mut store = InMemoryEdgeStore::new();
    for name in ["A", "B", "C", "D", "E", "F", "G", "H", "I"] {
        store.add_vertex(named_vertex(name)).unwrap();
    }
    for (from, to) in [
        ("A", "D"),
        ("B", "I"),
        ("A", "B"),
        ("B", "C"),
        ("C", "D"),
        ("D", "F"),
        ("D", "E"),
        ("B", "G"),
        ("I", "H"),
        ("G", "H"),
    ] {
        connect(&mut store, from, to, None);
    }
    store
}

/// Orders edges by identity.
pub fn by_id(a: &Edge, b: &Edge) -> std::cmp::Ordering {
    a.id().cmp(b.id())
}

/// Names of the visited vertices, in visit order.
pub fn names(result: &TraversalResult) -> Vec<String> {
    result
        .visited
        .vertices
        .iter()
        .flatten()
        .map(|v| {
            v.attribute("name")
                .and_then(|name| name.as_str().map(str::to_string))
                .unwrap_or_else(|| v.id().to_string())
        })
        .collect()
}

/// Runs `traverser` from the named fixture vertex.
pub fn run_from(traverser: &Traverser<TraversalResult>, start: &str) -> TraversalResult {
    init_tracing();
    let mut result = TraversalResult::tracking();
    traverser.traverse_from(&mut result, &vid(start)).unwrap();
    result
}

/// Convenience builder over an in-memory store.
pub fn builder(
    store: InMemoryEdgeStore,
) -> graphwalk_core::TraverserBuilder<TraversalResult> {
    Traverser::builder(CollectionDatasource::new(store))
}

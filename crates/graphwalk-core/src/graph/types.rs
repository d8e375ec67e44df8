//! Vertex and edge records handled by the traversal engine.
//!
//! Both are opaque to the engine apart from their identity and a handful of
//! well-known fields. Everything else lives in a free-form attribute map.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// A vertex document.
///
/// # Example
///
/// ```rust
/// use graphwalk_core::graph::Vertex;
/// use serde_json::json;
///
/// let vertex = Vertex::new("vertices/Alice").with_attribute("name", json!("Alice"));
///
/// assert_eq!(vertex.id(), "vertices/Alice");
/// assert_eq!(vertex.attribute("name"), Some(json!("Alice")));
/// assert_eq!(vertex.attribute("_id"), Some(json!("vertices/Alice")));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Vertex {
    #[serde(rename = "_id")]
    id: String,
    #[serde(flatten)]
    attributes: Map<String, Value>,
}

impl Vertex {
    /// Creates a vertex with the given identity and no attributes.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            attributes: Map::new(),
        }
    }

    /// Replaces all attributes (builder pattern).
    #[must_use]
    pub fn with_attributes(mut self, attributes: Map<String, Value>) -> Self {
        self.attributes = attributes;
        self
    }

    /// Sets a single attribute (builder pattern).
    #[must_use]
    pub fn with_attribute(mut self, name: &str, value: Value) -> Self {
        self.attributes.insert(name.to_string(), value);
        self
    }

    /// Returns the vertex identity.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns all user attributes.
    #[must_use]
    pub fn attributes(&self) -> &Map<String, Value> {
        &self.attributes
    }

    /// Looks up an attribute by name.
    ///
    /// The system key `_id` resolves to the vertex identity.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<Value> {
        if name == "_id" {
            return Some(Value::String(self.id.clone()));
        }
        self.attributes.get(name).cloned()
    }

    /// Sets an attribute value.
    pub fn set_attribute(&mut self, name: &str, value: Value) {
        self.attributes.insert(name.to_string(), value);
    }
}

/// A directed edge document.
///
/// `from` and `to` hold endpoint vertex identities. Whether an edge is
/// followed forwards or backwards is decided by the expander, not the edge.
///
/// # Example
///
/// ```rust
/// use graphwalk_core::graph::Edge;
///
/// let edge = Edge::new("edges/AxB", "vertices/A", "vertices/B")
///     .unwrap()
///     .with_label("likes");
/// assert_eq!(edge.from(), "vertices/A");
/// assert_eq!(edge.to(), "vertices/B");
/// assert_eq!(edge.label(), Some("likes"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Edge {
    #[serde(rename = "_id")]
    id: String,
    #[serde(rename = "_from")]
    from: String,
    #[serde(rename = "_to")]
    to: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    label: Option<String>,
    #[serde(flatten)]
    attributes: Map<String, Value>,
}

impl Edge {
    /// Creates an edge between two vertex identities.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` if either endpoint is empty.
    pub fn new(
        id: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Result<Self> {
        let from = from.into();
        let to = to.into();
        if from.is_empty() || to.is_empty() {
            return Err(Error::InvalidArgument(
                "Edge endpoints cannot be empty".to_string(),
            ));
        }
        Ok(Self {
            id: id.into(),
            from,
            to,
            label: None,
            attributes: Map::new(),
        })
    }

    /// Sets the edge label (builder pattern).
    #[must_use]
    pub fn with_label(mut self, label: &str) -> Self {
        self.label = Some(label.to_string());
        self
    }

    /// Replaces all attributes (builder pattern).
    #[must_use]
    pub fn with_attributes(mut self, attributes: Map<String, Value>) -> Self {
        self.attributes = attributes;
        self
    }

    /// Returns the edge identity.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the identity of the vertex the edge starts at.
    #[must_use]
    pub fn from(&self) -> &str {
        &self.from
    }

    /// Returns the identity of the vertex the edge points to.
    #[must_use]
    pub fn to(&self) -> &str {
        &self.to
    }

    /// Returns the optional edge label.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Returns all user attributes.
    #[must_use]
    pub fn attributes(&self) -> &Map<String, Value> {
        &self.attributes
    }

    /// Looks up an attribute by name, including the system keys
    /// `_id`, `_from`, `_to` and `label`.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<Value> {
        match name {
            "_id" => Some(Value::String(self.id.clone())),
            "_from" => Some(Value::String(self.from.clone())),
            "_to" => Some(Value::String(self.to.clone())),
            "label" => self.label.clone().map(Value::String),
            _ => self.attributes.get(name).cloned(),
        }
    }

    /// Returns the endpoint opposite to `vertex_id`.
    ///
    /// Self-loops resolve to the same vertex.
    #[must_use]
    pub fn peer(&self, vertex_id: &str) -> &str {
        if self.from == vertex_id {
            &self.to
        } else {
            &self.from
        }
    }

    /// Returns true if the edge starts and ends at the same vertex.
    #[must_use]
    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}

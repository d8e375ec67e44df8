//! Traversal settings and their layered loading.
//!
//! Settings are plain data: ordering, strategy, uniqueness and the depth and
//! label parameters read by the default filters and expanders. They are
//! resolved from three layers, lowest priority first:
//!
//! 1. built-in defaults
//! 2. a TOML file (`graphwalk.toml` unless another path is given)
//! 3. `GRAPHWALK_`-prefixed environment variables (`__` separates nested keys)
//!
//! # Example
//!
//! ```rust
//! use graphwalk_core::config::{Strategy, TraversalSettings, Uniqueness};
//!
//! let settings = TraversalSettings::from_toml_str(
//!     r#"
//!     strategy = "breadthfirst"
//!     max_depth = 3
//!
//!     [uniqueness]
//!     vertices = "global"
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(settings.strategy, Strategy::BreadthFirst);
//! assert_eq!(settings.uniqueness.vertices, Uniqueness::Global);
//! assert_eq!(settings.max_depth, Some(3));
//! ```

use std::path::Path;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default iteration budget for one traversal run.
pub const DEFAULT_MAX_ITERATIONS: usize = 10_000_000;

/// Settings file looked up by [`TraversalSettings::load`].
pub const DEFAULT_CONFIG_FILE: &str = "graphwalk.toml";

/// Prefix of environment variables overriding settings.
pub const ENV_PREFIX: &str = "GRAPHWALK_";

/// When a vertex is handed to the visitor relative to its descendants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Order {
    /// Visit a vertex before its descendants.
    #[default]
    PreOrder,
    /// Visit a vertex after its descendants.
    PostOrder,
}

/// Order in which siblings returned by the expander are processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemOrder {
    /// Siblings in the order the expander returned them.
    #[default]
    Forward,
    /// Siblings in reverse expander order.
    Backward,
}

/// Traversal strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Level by level, using an index-addressed work list.
    BreadthFirst,
    /// Branch by branch, using an explicit stack.
    #[default]
    DepthFirst,
}

/// Uniqueness scope for vertices or edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Uniqueness {
    /// No constraint.
    #[default]
    None,
    /// No repeat within the current path.
    Path,
    /// No repeat across the whole traversal.
    Global,
}

/// Uniqueness policy, set independently for vertices and edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UniquenessConfig {
    /// Scope applied to vertex identities.
    pub vertices: Uniqueness,
    /// Scope applied to edge identities.
    pub edges: Uniqueness,
}

impl UniquenessConfig {
    /// Creates a policy with explicit scopes.
    #[must_use]
    pub fn new(vertices: Uniqueness, edges: Uniqueness) -> Self {
        Self { vertices, edges }
    }

    /// Returns true if either axis is constrained.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.vertices != Uniqueness::None || self.edges != Uniqueness::None
    }
}

/// Plain-data traversal options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraversalSettings {
    /// Pre- or post-order visitation.
    pub order: Order,
    /// Sibling processing order.
    pub item_order: ItemOrder,
    /// Breadth-first or depth-first.
    pub strategy: Strategy,
    /// Vertex and edge uniqueness.
    pub uniqueness: UniquenessConfig,
    /// Depth limit read by `MaxDepthFilter`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,
    /// Depth threshold read by `MinDepthFilter`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_depth: Option<usize>,
    /// Edge labels followed by the label-filtered expanders.
    pub labels: Vec<String>,
    /// Loop iterations allowed before a run is aborted.
    pub max_iterations: usize,
}

impl Default for TraversalSettings {
    fn default() -> Self {
        Self {
            order: Order::default(),
            item_order: ItemOrder::default(),
            strategy: Strategy::default(),
            uniqueness: UniquenessConfig::default(),
            max_depth: None,
            min_depth: None,
            labels: Vec::new(),
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl TraversalSettings {
    /// Loads settings from `graphwalk.toml` (if present) and the environment.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if a layer fails to parse or the merged
    /// settings are invalid.
    pub fn load() -> Result<Self> {
        Self::load_from(DEFAULT_CONFIG_FILE)
    }

    /// Loads settings from the given TOML file (if present) and the environment.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if a layer fails to parse or the merged
    /// settings are invalid.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        Self::extract(&Self::figment(path))
    }

    /// Parses settings from a TOML document, without consulting the environment.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the document is malformed or invalid.
    pub fn from_toml_str(document: &str) -> Result<Self> {
        let figment = Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::string(document));
        Self::extract(&figment)
    }

    /// Builds the layered provider stack for `path`.
    #[must_use]
    pub fn figment(path: impl AsRef<Path>) -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Checks the settings for contradictions.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the iteration budget is zero or
    /// `min_depth` exceeds `max_depth`.
    pub fn validate(&self) -> Result<()> {
        if self.max_iterations == 0 {
            return Err(Error::Config(
                "max_iterations must be greater than zero".to_string(),
            ));
        }
        if let (Some(min), Some(max)) = (self.min_depth, self.max_depth) {
            if min > max {
                return Err(Error::Config(format!(
                    "min_depth ({min}) exceeds max_depth ({max})"
                )));
            }
        }
        Ok(())
    }

    /// Renders the settings as a TOML document.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if serialization fails.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))
    }

    fn extract(figment: &Figment) -> Result<Self> {
        let settings: Self = figment
            .extract()
            .map_err(|e| Error::Config(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }
}

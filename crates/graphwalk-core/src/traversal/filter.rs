//! Filters and the filter-result protocol.
//!
//! A filter votes on the vertex being processed. Votes only ever restrict:
//! [`FilterVote::Exclude`] suppresses the visit, [`FilterVote::Prune`]
//! suppresses expansion, and combining votes applies every restriction any
//! of them carries.

use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::graph::Vertex;

use super::path::Path;
use super::traverser::TraversalConfig;

/// Token meaning "do not expand this vertex".
pub const PRUNE: &str = "prune";

/// Token meaning "do not visit this vertex".
pub const EXCLUDE: &str = "exclude";

/// A filter's verdict on one vertex.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FilterVote {
    /// No objection: visit and expand.
    #[default]
    Approve,
    /// Do not visit. Expansion is unaffected.
    Exclude,
    /// Do not expand. The visit is unaffected.
    Prune,
    /// Several votes, each applied.
    Combined(Vec<FilterVote>),
}

impl FilterVote {
    /// Parses a dynamically-typed filter return value.
    ///
    /// `null` and `""` approve, [`EXCLUDE`] and [`PRUNE`] map to their
    /// variants, and arrays are parsed element-wise (recursively).
    ///
    /// # Errors
    ///
    /// Returns `Error::FilterContract` for any other value.
    pub fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Null => Ok(Self::Approve),
            Value::String(s) if s.is_empty() => Ok(Self::Approve),
            Value::String(s) if s == EXCLUDE => Ok(Self::Exclude),
            Value::String(s) if s == PRUNE => Ok(Self::Prune),
            Value::Array(items) => items
                .iter()
                .map(Self::from_value)
                .collect::<Result<Vec<_>>>()
                .map(Self::Combined),
            other => Err(Error::FilterContract(format!(
                "invalid filter result: {other}"
            ))),
        }
    }
}

/// Visit/expand decision derived from a [`FilterVote`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterResult {
    /// Whether the visitor is invoked for the vertex.
    pub visit: bool,
    /// Whether the expander is invoked for the vertex.
    pub expand: bool,
}

impl Default for FilterResult {
    fn default() -> Self {
        Self {
            visit: true,
            expand: true,
        }
    }
}

impl FilterResult {
    /// Reduces a vote (flattening nested combinations) to a decision.
    #[must_use]
    pub fn parse(vote: &FilterVote) -> Self {
        let mut result = Self::default();
        let mut pending = vec![vote];
        while let Some(vote) = pending.pop() {
            match vote {
                FilterVote::Approve => {}
                FilterVote::Exclude => result.visit = false,
                FilterVote::Prune => result.expand = false,
                FilterVote::Combined(votes) => pending.extend(votes),
            }
        }
        result
    }
}

/// Decides whether a vertex is visited and/or expanded.
pub trait Filter {
    /// Votes on `vertex`, reached via `path` (which ends at `vertex`).
    fn evaluate(
        &self,
        config: &TraversalConfig,
        vertex: &Vertex,
        path: &Path,
    ) -> Result<FilterVote>;
}

impl<F> Filter for F
where
    F: Fn(&TraversalConfig, &Vertex, &Path) -> Result<FilterVote>,
{
    fn evaluate(
        &self,
        config: &TraversalConfig,
        vertex: &Vertex,
        path: &Path,
    ) -> Result<FilterVote> {
        self(config, vertex, path)
    }
}

/// Adapter for filters that answer with raw JSON values.
///
/// The value is parsed with [`FilterVote::from_value`], so anything outside
/// the protocol aborts the traversal with `Error::FilterContract`.
pub struct RawFilter<F>(pub F);

impl<F> Filter for RawFilter<F>
where
    F: Fn(&TraversalConfig, &Vertex, &Path) -> Value,
{
    fn evaluate(
        &self,
        config: &TraversalConfig,
        vertex: &Vertex,
        path: &Path,
    ) -> Result<FilterVote> {
        FilterVote::from_value(&(self.0)(config, vertex, path))
    }
}

/// Runs several filters on the same vertex and merges their votes.
#[derive(Default)]
pub struct CombinedFilter {
    filters: Vec<Box<dyn Filter>>,
}

impl CombinedFilter {
    /// Combines the given filters.
    #[must_use]
    pub fn new(filters: Vec<Box<dyn Filter>>) -> Self {
        Self { filters }
    }

    /// Number of combined filters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Returns true if no filter is combined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl std::fmt::Debug for CombinedFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CombinedFilter")
            .field("filters", &self.filters.len())
            .finish()
    }
}

impl Filter for CombinedFilter {
    fn evaluate(
        &self,
        config: &TraversalConfig,
        vertex: &Vertex,
        path: &Path,
    ) -> Result<FilterVote> {
        let votes = self
            .filters
            .iter()
            .map(|filter| filter.evaluate(config, vertex, path))
            .collect::<Result<Vec<_>>>()?;
        Ok(FilterVote::Combined(votes))
    }
}

/// Approves every vertex.
#[derive(Debug, Clone, Copy, Default)]
pub struct VisitAllFilter;

impl Filter for VisitAllFilter {
    fn evaluate(&self, _: &TraversalConfig, _: &Vertex, _: &Path) -> Result<FilterVote> {
        Ok(FilterVote::Approve)
    }
}

/// Prunes once the path holds more than `max_depth` vertices.
///
/// The start vertex counts, so vertices at depth `max_depth` are still
/// visited but no longer expanded.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaxDepthFilter;

impl Filter for MaxDepthFilter {
    fn evaluate(
        &self,
        config: &TraversalConfig,
        _: &Vertex,
        path: &Path,
    ) -> Result<FilterVote> {
        match config.max_depth {
            Some(max) if path.vertices.len() > max => Ok(FilterVote::Prune),
            _ => Ok(FilterVote::Approve),
        }
    }
}

/// Excludes vertices while the path holds at most `min_depth` vertices.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinDepthFilter;

impl Filter for MinDepthFilter {
    fn evaluate(
        &self,
        config: &TraversalConfig,
        _: &Vertex,
        path: &Path,
    ) -> Result<FilterVote> {
        match config.min_depth {
            Some(min) if path.vertices.len() <= min => Ok(FilterVote::Exclude),
            _ => Ok(FilterVote::Approve),
        }
    }
}

/// Excludes vertices that match none of the example attribute sets.
///
/// A vertex matches an example when it carries every key of the example with
/// an equal value. An empty example matches nothing. The system key `_id`
/// matches the vertex identity.
#[derive(Debug, Clone, Default)]
pub struct IncludeMatchingAttributesFilter {
    examples: Vec<Map<String, Value>>,
}

impl IncludeMatchingAttributesFilter {
    /// Creates a filter from one or more examples.
    #[must_use]
    pub fn new(examples: Vec<Map<String, Value>>) -> Self {
        Self { examples }
    }

    /// Creates a filter from a single example.
    #[must_use]
    pub fn single(example: Map<String, Value>) -> Self {
        Self::new(vec![example])
    }

    fn matches(vertex: &Vertex, example: &Map<String, Value>) -> bool {
        !example.is_empty()
            && example
                .iter()
                .all(|(key, expected)| vertex.attribute(key).as_ref() == Some(expected))
    }
}

impl Filter for IncludeMatchingAttributesFilter {
    fn evaluate(
        &self,
        _: &TraversalConfig,
        vertex: &Vertex,
        _: &Path,
    ) -> Result<FilterVote> {
        if self.examples.iter().any(|e| Self::matches(vertex, e)) {
            Ok(FilterVote::Approve)
        } else {
            Ok(FilterVote::Exclude)
        }
    }
}

//! The traversal orchestrator and its configuration.

use crate::config::{ItemOrder, Order, Strategy, TraversalSettings, UniquenessConfig};
use crate::error::{Error, Result};
use crate::graph::{Edge, Vertex};

use super::datasource::Datasource;
use super::expander::{Connection, EdgeComparator, ExpandFilter, Expander, OutboundExpander};
use super::filter::{CombinedFilter, Filter, FilterResult, VisitAllFilter};
use super::path::Path;
use super::visitor::{TrackingVisitor, VisitRecorder, Visitor};
use super::{bfs, dfs};

/// Options and graph access shared with every collaborator of a run.
///
/// Filters, expanders and visitors receive this by shared reference, so it
/// cannot change once a [`Traverser`] has been built.
pub struct TraversalConfig {
    /// Pre- or post-order visitation.
    pub order: Order,
    /// Sibling processing order.
    pub item_order: ItemOrder,
    /// Breadth-first or depth-first.
    pub strategy: Strategy,
    /// Vertex and edge uniqueness.
    pub uniqueness: UniquenessConfig,
    /// Depth limit read by `MaxDepthFilter`.
    pub max_depth: Option<usize>,
    /// Depth threshold read by `MinDepthFilter`.
    pub min_depth: Option<usize>,
    /// Edge labels followed by the label-filtered expanders.
    pub labels: Vec<String>,
    /// Loop iterations allowed before a run is aborted.
    pub max_iterations: usize,
    datasource: Box<dyn Datasource>,
    sort: Option<EdgeComparator>,
    expand_filter: Option<Box<dyn ExpandFilter>>,
}

impl TraversalConfig {
    /// Creates a configuration with default settings over `datasource`.
    #[must_use]
    pub fn new(datasource: impl Datasource + 'static) -> Self {
        let mut config = Self {
            order: Order::default(),
            item_order: ItemOrder::default(),
            strategy: Strategy::default(),
            uniqueness: UniquenessConfig::default(),
            max_depth: None,
            min_depth: None,
            labels: Vec::new(),
            max_iterations: 0,
            datasource: Box::new(datasource),
            sort: None,
            expand_filter: None,
        };
        config.apply(TraversalSettings::default());
        config
    }

    /// Replaces every plain option with `settings`.
    #[must_use]
    pub fn with_settings(mut self, settings: TraversalSettings) -> Self {
        self.apply(settings);
        self
    }

    /// Sets the comparator used to sort edges before expansion.
    #[must_use]
    pub fn with_sort<F>(mut self, sort: F) -> Self
    where
        F: Fn(&Edge, &Edge) -> std::cmp::Ordering + 'static,
    {
        self.sort = Some(Box::new(sort));
        self
    }

    /// Sets the per-connection approval hook of the direction-based expanders.
    #[must_use]
    pub fn with_expand_filter(mut self, expand_filter: impl ExpandFilter + 'static) -> Self {
        self.expand_filter = Some(Box::new(expand_filter));
        self
    }

    /// Graph access for this run.
    #[must_use]
    pub fn datasource(&self) -> &dyn Datasource {
        self.datasource.as_ref()
    }

    /// Edge comparator, if one was configured.
    #[must_use]
    pub fn sort(&self) -> Option<&EdgeComparator> {
        self.sort.as_ref()
    }

    /// Expand filter, if one was configured.
    #[must_use]
    pub fn expand_filter(&self) -> Option<&dyn ExpandFilter> {
        self.expand_filter.as_deref()
    }

    /// Snapshot of the plain options.
    #[must_use]
    pub fn settings(&self) -> TraversalSettings {
        TraversalSettings {
            order: self.order,
            item_order: self.item_order,
            strategy: self.strategy,
            uniqueness: self.uniqueness,
            max_depth: self.max_depth,
            min_depth: self.min_depth,
            labels: self.labels.clone(),
            max_iterations: self.max_iterations,
        }
    }

    fn apply(&mut self, settings: TraversalSettings) {
        self.order = settings.order;
        self.item_order = settings.item_order;
        self.strategy = settings.strategy;
        self.uniqueness = settings.uniqueness;
        self.max_depth = settings.max_depth;
        self.min_depth = settings.min_depth;
        self.labels = settings.labels;
        self.max_iterations = settings.max_iterations;
    }
}

impl std::fmt::Debug for TraversalConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TraversalConfig")
            .field("order", &self.order)
            .field("item_order", &self.item_order)
            .field("strategy", &self.strategy)
            .field("uniqueness", &self.uniqueness)
            .field("max_depth", &self.max_depth)
            .field("min_depth", &self.min_depth)
            .field("labels", &self.labels)
            .field("max_iterations", &self.max_iterations)
            .field("sort", &self.sort.is_some())
            .field("expand_filter", &self.expand_filter.is_some())
            .finish_non_exhaustive()
    }
}

/// Builder for [`Traverser`].
///
/// Unset collaborators default to [`VisitAllFilter`] and
/// [`OutboundExpander`]. Each call to [`filter`](Self::filter) adds a filter;
/// all filters are combined.
pub struct TraverserBuilder<R> {
    config: TraversalConfig,
    visitor: Box<dyn Visitor<R>>,
    filters: Vec<Box<dyn Filter>>,
    expander: Box<dyn Expander>,
}

impl<R: VisitRecorder> TraverserBuilder<R> {
    /// Starts a builder that records visits with [`TrackingVisitor`].
    #[must_use]
    pub fn new(datasource: impl Datasource + 'static) -> Self {
        Self::with_visitor(datasource, TrackingVisitor)
    }
}

impl<R> TraverserBuilder<R> {
    /// Starts a builder with a custom visitor.
    #[must_use]
    pub fn with_visitor(
        datasource: impl Datasource + 'static,
        visitor: impl Visitor<R> + 'static,
    ) -> Self {
        Self {
            config: TraversalConfig::new(datasource),
            visitor: Box::new(visitor),
            filters: Vec::new(),
            expander: Box::new(OutboundExpander),
        }
    }

    /// Replaces every plain option with `settings`.
    #[must_use]
    pub fn settings(mut self, settings: TraversalSettings) -> Self {
        self.config.apply(settings);
        self
    }

    /// Sets pre- or post-order visitation.
    #[must_use]
    pub fn order(mut self, order: Order) -> Self {
        self.config.order = order;
        self
    }

    /// Sets the sibling processing order.
    #[must_use]
    pub fn item_order(mut self, item_order: ItemOrder) -> Self {
        self.config.item_order = item_order;
        self
    }

    /// Selects breadth-first or depth-first traversal.
    #[must_use]
    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.config.strategy = strategy;
        self
    }

    /// Sets vertex and edge uniqueness.
    #[must_use]
    pub fn uniqueness(mut self, uniqueness: UniquenessConfig) -> Self {
        self.config.uniqueness = uniqueness;
        self
    }

    /// Sets the depth limit read by `MaxDepthFilter`.
    #[must_use]
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.config.max_depth = Some(max_depth);
        self
    }

    /// Sets the depth threshold read by `MinDepthFilter`.
    #[must_use]
    pub fn min_depth(mut self, min_depth: usize) -> Self {
        self.config.min_depth = Some(min_depth);
        self
    }

    /// Follows a single edge label.
    #[must_use]
    pub fn label(self, label: &str) -> Self {
        self.labels([label])
    }

    /// Replaces the list of followed edge labels.
    #[must_use]
    pub fn labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.labels = labels.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the iteration budget of a run.
    #[must_use]
    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.config.max_iterations = max_iterations;
        self
    }

    /// Adds a filter.
    #[must_use]
    pub fn filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Replaces the expander.
    #[must_use]
    pub fn expander(mut self, expander: impl Expander + 'static) -> Self {
        self.expander = Box::new(expander);
        self
    }

    /// Replaces the visitor.
    #[must_use]
    pub fn visitor(mut self, visitor: impl Visitor<R> + 'static) -> Self {
        self.visitor = Box::new(visitor);
        self
    }

    /// Sets the comparator used to sort edges before expansion.
    #[must_use]
    pub fn sort<F>(mut self, sort: F) -> Self
    where
        F: Fn(&Edge, &Edge) -> std::cmp::Ordering + 'static,
    {
        self.config = self.config.with_sort(sort);
        self
    }

    /// Sets the per-connection approval hook of the direction-based expanders.
    #[must_use]
    pub fn expand_filter(mut self, expand_filter: impl ExpandFilter + 'static) -> Self {
        self.config = self.config.with_expand_filter(expand_filter);
        self
    }

    /// Finalizes the traverser.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the plain options are contradictory.
    pub fn build(self) -> Result<Traverser<R>> {
        self.config.settings().validate()?;
        let mut filters = self.filters;
        if filters.is_empty() {
            filters.push(Box::new(VisitAllFilter));
        }
        Ok(Traverser {
            config: self.config,
            visitor: self.visitor,
            filter: CombinedFilter::new(filters),
            expander: self.expander,
        })
    }
}

/// Runs traversals with a fixed configuration and set of collaborators.
///
/// # Example
///
/// ```rust
/// use graphwalk_core::graph::{Edge, InMemoryEdgeStore, Vertex};
/// use graphwalk_core::traversal::{CollectionDatasource, TraversalResult, Traverser};
///
/// # fn main() -> graphwalk_core::Result<()> {
/// let mut store = InMemoryEdgeStore::new();
/// store.add_vertex(Vertex::new("a"))?;
/// store.add_vertex(Vertex::new("b"))?;
/// store.add_edge(Edge::new("ab", "a", "b")?)?;
///
/// let traverser = Traverser::builder(CollectionDatasource::new(store)).build()?;
/// let mut result = TraversalResult::tracking();
/// traverser.traverse_from(&mut result, "a")?;
/// assert_eq!(result.vertex_ids(), vec!["a", "b"]);
/// # Ok(())
/// # }
/// ```
pub struct Traverser<R> {
    config: TraversalConfig,
    visitor: Box<dyn Visitor<R>>,
    filter: CombinedFilter,
    expander: Box<dyn Expander>,
}

impl<R: VisitRecorder> Traverser<R> {
    /// Starts a builder that records visits with [`TrackingVisitor`].
    #[must_use]
    pub fn builder(datasource: impl Datasource + 'static) -> TraverserBuilder<R> {
        TraverserBuilder::new(datasource)
    }
}

impl<R> Traverser<R> {
    /// The configuration shared with collaborators.
    #[must_use]
    pub fn config(&self) -> &TraversalConfig {
        &self.config
    }

    /// Walks the graph from `start`, feeding visits into `result`.
    ///
    /// A collaborator returning `Error::Aborted` stops the walk early and
    /// leaves `result` with what was recorded so far; that is not an error.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` if `start` has an empty identity,
    /// `Error::TooManyIterations` if the iteration budget is exhausted, and
    /// any other error raised by a collaborator or the datasource.
    pub fn traverse(&self, result: &mut R, start: &Vertex) -> Result<()> {
        if start.id().is_empty() {
            return Err(Error::InvalidArgument(
                "start vertex has an empty id".to_string(),
            ));
        }

        tracing::debug!(
            start = %start.id(),
            strategy = ?self.config.strategy,
            order = ?self.config.order,
            item_order = ?self.config.item_order,
            "starting traversal"
        );

        let outcome = match self.config.strategy {
            Strategy::BreadthFirst => bfs::run(self, result, start),
            Strategy::DepthFirst => dfs::run(self, result, start),
        };

        match outcome {
            Err(Error::Aborted) => {
                tracing::debug!(start = %start.id(), "traversal aborted by a callback");
                Ok(())
            }
            other => {
                tracing::debug!(start = %start.id(), ok = other.is_ok(), "traversal finished");
                other
            }
        }
    }

    /// Looks up `start_id` in the datasource and walks the graph from it.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` if the identity is empty or unknown,
    /// otherwise whatever [`traverse`](Self::traverse) returns.
    pub fn traverse_from(&self, result: &mut R, start_id: &str) -> Result<()> {
        if start_id.is_empty() {
            return Err(Error::InvalidArgument(
                "start vertex id is empty".to_string(),
            ));
        }
        let start = match self.config.datasource().get_vertex(start_id) {
            Ok(vertex) => vertex,
            Err(err) if err.is_not_found() => {
                return Err(Error::InvalidArgument(format!(
                    "start vertex not found: {start_id}"
                )));
            }
            Err(err) => return Err(err),
        };
        self.traverse(result, &start)
    }

    pub(crate) fn evaluate_filter(&self, vertex: &Vertex, path: &Path) -> Result<FilterResult> {
        let vote = self.filter.evaluate(&self.config, vertex, path)?;
        Ok(FilterResult::parse(&vote))
    }

    pub(crate) fn visit(&self, result: &mut R, vertex: &Vertex, path: &Path) -> Result<()> {
        self.visitor.visit(&self.config, result, vertex, path)
    }

    pub(crate) fn expand(&self, vertex: &Vertex, path: &Path) -> Result<Vec<Connection>> {
        self.expander.expand(&self.config, vertex, path)
    }
}

impl<R> std::fmt::Debug for Traverser<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Traverser")
            .field("config", &self.config)
            .field("filter", &self.filter)
            .finish_non_exhaustive()
    }
}

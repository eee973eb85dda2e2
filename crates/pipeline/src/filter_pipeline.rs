//! Composition of filters into a single ordered pass.
//!
//! The pipeline owns a list of boxed filters, assembled with the builder
//! pattern, and threads the record sequence through each one in turn.

use crate::query::InteractionQuery;
use crate::traits::Filter;
use anyhow::Result;
use interaction_log::InteractionLog;
use tracing;

/// An ordered list of filters applied one after another.
///
/// ## Usage
/// ```
/// use pipeline::{FilterPipeline, InteractionQuery};
/// use pipeline::filters::{ItemFilter, LearnerFilter};
///
/// let pipeline = FilterPipeline::new()
///     .add_filter(ItemFilter)
///     .add_filter(LearnerFilter);
///
/// let filtered = pipeline.apply(vec![], &InteractionQuery::new()).unwrap();
/// assert!(filtered.is_empty());
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a pipeline with no filters.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Append a filter; later filters see only what earlier ones kept.
    ///
    /// Returns Self for method chaining.
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Run every filter, in insertion order, over the records.
    ///
    /// Each filter consumes the previous filter's output, and the record
    /// count before and after each step is logged at debug level. An empty
    /// pipeline is the identity, as is any filter whose criterion is unset
    /// in `query`.
    ///
    /// # Arguments
    /// * `records` - The records to narrow
    /// * `query` - Caller-supplied criteria consulted by each filter
    ///
    /// # Returns
    /// * `Ok(Vec<InteractionLog>)` - The records surviving all filters
    /// * `Err` - If any filter fails
    pub fn apply(
        &self,
        records: Vec<InteractionLog>,
        query: &InteractionQuery,
    ) -> Result<Vec<InteractionLog>> {
        let mut current = records;
        for filter in &self.filters {
            tracing::debug!("{}: {} records in", filter.name(), current.len());
            current = filter.apply(current, query)?;
            tracing::debug!("{}: {} records out", filter.name(), current.len());
        }
        Ok(current)
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

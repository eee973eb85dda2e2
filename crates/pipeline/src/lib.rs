//! Pipeline for filtering learner interaction records.
//!
//! This crate provides:
//! - Filter trait and implementations for narrowing interaction sequences
//! - InteractionQuery holding the caller-supplied criteria
//! - FilterPipeline for composing filters
//!
//! ## Architecture
//! The pipeline selects a subsequence of an in-memory record sequence:
//! 1. The caller builds an InteractionQuery from its query parameters
//! 2. Each filter keeps the records matching its criterion, or passes
//!    everything through when its criterion is unset
//! 3. Surviving records keep their relative input order
//!
//! ## Example Usage
//! ```
//! use pipeline::{FilterPipeline, InteractionQuery};
//! use pipeline::filters::*;
//! use interaction_log::InteractionLog;
//!
//! // Build the filter pipeline
//! let pipeline = FilterPipeline::new()
//!     .add_filter(ItemFilter)
//!     .add_filter(LearnerFilter);
//!
//! // Filter by item only; the learner criterion stays unset
//! let query = InteractionQuery::new().with_item(7);
//!
//! let records = vec![
//!     InteractionLog::new(1, 1, 7, "attempt"),
//!     InteractionLog::new(2, 2, 8, "view"),
//! ];
//! let filtered = pipeline.apply(records, &query).unwrap();
//! assert_eq!(filtered.len(), 1);
//! ```

pub mod traits;
pub mod query;
pub mod filters;
pub mod filter_pipeline;

// Re-export main types
pub use traits::Filter;
pub use query::InteractionQuery;
pub use filter_pipeline::FilterPipeline;

//! Filter to keep interactions produced by a single learner.
//!
//! Same contract shape as ItemFilter with the predicate swapped to
//! `learner_id`.

use crate::query::InteractionQuery;
use crate::traits::Filter;
use anyhow::Result;
use interaction_log::InteractionLog;

/// Keeps records whose `learner_id` matches the queried learner.
pub struct LearnerFilter;

impl Filter for LearnerFilter {
    fn name(&self) -> &str {
        "LearnerFilter"
    }

    fn apply(
        &self,
        records: Vec<InteractionLog>,
        query: &InteractionQuery,
    ) -> Result<Vec<InteractionLog>> {
        let Some(learner_id) = query.learner_id else {
            return Ok(records);
        };
        let filtered: Vec<InteractionLog> = records
            .into_iter()
            .filter(|record| record.learner_id == learner_id)
            .collect();
        Ok(filtered)
    }
}

//! Filter to keep interactions for a single learning item.
//!
//! This is the filter behind the `item_id` query parameter of the
//! interaction listing endpoint.

use crate::query::InteractionQuery;
use crate::traits::Filter;
use anyhow::Result;
use interaction_log::InteractionLog;

/// Keeps records whose `item_id` matches the queried item.
///
/// ## Algorithm
/// 1. If the query has no item criterion, return the input unchanged
/// 2. Otherwise keep exactly the records with a matching `item_id`,
///    in input order
///
/// The predicate consults only `item_id`; `learner_id` and `kind` never
/// affect selection and are carried unmodified on surviving records.
pub struct ItemFilter;

impl Filter for ItemFilter {
    fn name(&self) -> &str {
        "ItemFilter"
    }

    fn apply(
        &self,
        records: Vec<InteractionLog>,
        query: &InteractionQuery,
    ) -> Result<Vec<InteractionLog>> {
        let Some(item_id) = query.item_id else {
            return Ok(records);
        };
        let filtered: Vec<InteractionLog> = records
            .into_iter()
            .filter(|record| record.item_id == item_id)
            .collect();
        Ok(filtered)
    }
}

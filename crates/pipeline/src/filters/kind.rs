//! Filter to keep interactions of a single kind.
//!
//! The kind tag is opaque to the pipeline; matching is exact string
//! equality, no normalization.

use crate::query::InteractionQuery;
use crate::traits::Filter;
use anyhow::Result;
use interaction_log::InteractionLog;

/// Keeps records whose `kind` matches the queried tag.
pub struct KindFilter;

impl Filter for KindFilter {
    fn name(&self) -> &str {
        "KindFilter"
    }

    fn apply(
        &self,
        records: Vec<InteractionLog>,
        query: &InteractionQuery,
    ) -> Result<Vec<InteractionLog>> {
        let Some(kind) = query.kind.as_deref() else {
            return Ok(records);
        };
        let filtered: Vec<InteractionLog> = records
            .into_iter()
            .filter(|record| record.kind == kind)
            .collect();
        Ok(filtered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_returns_all_when_kind_unset() {
        let records = vec![
            InteractionLog::new(1, 1, 1, "attempt"),
            InteractionLog::new(2, 2, 1, "view"),
        ];
        let filtered = KindFilter
            .apply(records.clone(), &InteractionQuery::new())
            .unwrap();
        assert_eq!(filtered, records);
    }

    #[test]
    fn test_matching_is_exact() {
        let records = vec![
            InteractionLog::new(1, 1, 1, "attempt"),
            InteractionLog::new(2, 2, 1, "Attempt"),
            InteractionLog::new(3, 3, 1, "view"),
        ];
        let filtered = KindFilter
            .apply(records, &InteractionQuery::new().with_kind("attempt"))
            .unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 1);
    }
}

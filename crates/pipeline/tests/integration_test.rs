//! Integration tests for the pipeline.
//!
//! These tests verify that the query and the filters work together
//! in a realistic listing scenario.

use interaction_log::InteractionLog;
use pipeline::filters::*;
use pipeline::{FilterPipeline, InteractionQuery};

fn create_test_records() -> Vec<InteractionLog> {
    vec![
        InteractionLog::new(1, 1, 1, "attempt"),
        InteractionLog::new(2, 2, 1, "view"),
        InteractionLog::new(3, 3, 2, "attempt"),
        InteractionLog::new(4, 1, 2, "view"),
        InteractionLog::new(5, 2, 1, "attempt"),
    ]
}

fn full_pipeline() -> FilterPipeline {
    FilterPipeline::new()
        .add_filter(ItemFilter)
        .add_filter(LearnerFilter)
        .add_filter(KindFilter)
}

#[test]
fn test_empty_query_returns_everything() {
    let records = create_test_records();
    let filtered = full_pipeline()
        .apply(records.clone(), &InteractionQuery::new())
        .unwrap();
    assert_eq!(filtered, records);
}

#[test]
fn test_item_query_preserves_order_and_kinds() {
    let records = vec![
        InteractionLog::new(1, 1, 1, "attempt"),
        InteractionLog::new(2, 2, 1, "view"),
        InteractionLog::new(3, 3, 2, "attempt"),
    ];

    let filtered = full_pipeline()
        .apply(records, &InteractionQuery::new().with_item(1))
        .unwrap();

    let ids: Vec<i64> = filtered.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2]);
    let kinds: Vec<&str> = filtered.iter().map(|r| r.kind.as_str()).collect();
    assert_eq!(kinds, vec!["attempt", "view"]);
}

#[test]
fn test_combined_criteria_narrow_progressively() {
    let records = create_test_records();

    // Item 1 alone keeps ids 1, 2, 5
    let by_item = full_pipeline()
        .apply(records.clone(), &InteractionQuery::new().with_item(1))
        .unwrap();
    assert_eq!(by_item.len(), 3);

    // Item 1 + learner 2 keeps ids 2, 5
    let by_item_and_learner = full_pipeline()
        .apply(
            records.clone(),
            &InteractionQuery::new().with_item(1).with_learner(2),
        )
        .unwrap();
    let ids: Vec<i64> = by_item_and_learner.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![2, 5]);

    // Item 1 + learner 2 + kind "attempt" keeps id 5
    let fully_narrowed = full_pipeline()
        .apply(
            records,
            &InteractionQuery::new()
                .with_item(1)
                .with_learner(2)
                .with_kind("attempt"),
        )
        .unwrap();
    let ids: Vec<i64> = fully_narrowed.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![5]);
}

#[test]
fn test_no_matches_yields_empty_not_error() {
    let records = create_test_records();
    let filtered = full_pipeline()
        .apply(records, &InteractionQuery::new().with_item(999))
        .unwrap();
    assert!(filtered.is_empty());
}

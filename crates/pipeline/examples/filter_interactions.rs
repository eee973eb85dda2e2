//! Example: narrow a batch of interaction records
//!
//! Run with: cargo run --package pipeline --example filter_interactions
//!
//! This example shows how to:
//! 1. Build a filter pipeline
//! 2. Express caller criteria as an InteractionQuery
//! 3. Apply the pipeline and inspect the survivors

use interaction_log::InteractionLog;
use pipeline::filters::{ItemFilter, KindFilter, LearnerFilter};
use pipeline::{FilterPipeline, InteractionQuery};

fn main() -> anyhow::Result<()> {
    // Initialize logging; debug level shows the per-filter record counts
    tracing_subscriber::fmt()
        .with_env_filter("debug")
        .init();

    let records = vec![
        InteractionLog::new(1, 1, 1, "attempt"),
        InteractionLog::new(2, 2, 1, "view"),
        InteractionLog::new(3, 3, 2, "attempt"),
        InteractionLog::new(4, 1, 2, "view"),
        InteractionLog::new(5, 2, 1, "attempt"),
    ];

    let pipeline = FilterPipeline::new()
        .add_filter(ItemFilter)
        .add_filter(LearnerFilter)
        .add_filter(KindFilter);

    // No criteria set: everything passes through
    let all = pipeline.apply(records.clone(), &InteractionQuery::new())?;
    println!("unfiltered: {} records", all.len());

    // Narrow to item 1
    let query = InteractionQuery::new().with_item(1);
    let for_item = pipeline.apply(records.clone(), &query)?;
    println!("item 1: {} records", for_item.len());
    for record in &for_item {
        println!(
            "  #{} learner {} item {} ({})",
            record.id, record.learner_id, record.item_id, record.kind
        );
    }

    // Narrow further to learner 2's attempts
    let query = InteractionQuery::new()
        .with_item(1)
        .with_learner(2)
        .with_kind("attempt");
    let narrowed = pipeline.apply(records, &query)?;
    println!("item 1, learner 2, attempts: {} records", narrowed.len());

    Ok(())
}

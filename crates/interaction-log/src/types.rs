//! Core domain types for learner interaction events.
//!
//! This module defines the record passed through the filtering pipeline.
//! Key points:
//! - Type aliases for domain clarity (LearnerId, ItemId)
//! - Signed 64-bit identifiers so 32-bit-range values pass through untouched
//! - Derive macros for common traits

use serde::{Deserialize, Serialize};

// =============================================================================
// Type Aliases
// =============================================================================
// These make the domain clearer and prevent mixing up learner IDs with item IDs

/// Unique identifier for an interaction event
pub type InteractionId = i64;

/// Unique identifier for a learner
pub type LearnerId = i64;

/// Unique identifier for a learning item
///
/// Any signed value is valid, including zero and negatives; values up to
/// `i32::MAX` and beyond are carried without truncation.
pub type ItemId = i64;

// =============================================================================
// Interaction Record
// =============================================================================

/// A single logged interaction between a learner and a learning item.
///
/// Records are constructed by the persistence/query layer and treated as
/// read-only by the filtering pipeline: filters select subsequences but
/// never mutate, reorder, or duplicate records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionLog {
    /// Unique identifier of this event
    pub id: InteractionId,
    /// Learner who produced the event
    pub learner_id: LearnerId,
    /// Learning item the event relates to
    pub item_id: ItemId,
    /// Category tag for the event (e.g. "attempt", "view"); opaque to filters
    pub kind: String,
}

impl InteractionLog {
    /// Create a new interaction record.
    pub fn new(
        id: InteractionId,
        learner_id: LearnerId,
        item_id: ItemId,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            id,
            learner_id,
            item_id,
            kind: kind.into(),
        }
    }
}

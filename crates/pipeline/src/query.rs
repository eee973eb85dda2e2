//! Caller-supplied filtering criteria.
//!
//! The query mirrors the optional parameters of the surrounding
//! request-handling layer. Each criterion is an explicit Option: None
//! means "no filter requested" and the corresponding filter passes every
//! record through.

use interaction_log::{ItemId, LearnerId};

/// Criteria for narrowing a sequence of interaction records.
///
/// ## Usage
/// ```
/// use pipeline::InteractionQuery;
///
/// let query = InteractionQuery::new().with_item(7).with_kind("attempt");
/// assert_eq!(query.item_id, Some(7));
/// assert_eq!(query.learner_id, None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InteractionQuery {
    /// Keep only records for this learning item
    pub item_id: Option<ItemId>,
    /// Keep only records produced by this learner
    pub learner_id: Option<LearnerId>,
    /// Keep only records with this kind tag
    pub kind: Option<String>,
}

impl InteractionQuery {
    /// Create an empty query (no criteria; every filter passes through).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the item criterion (builder pattern).
    pub fn with_item(mut self, item_id: ItemId) -> Self {
        self.item_id = Some(item_id);
        self
    }

    /// Set the learner criterion (builder pattern).
    pub fn with_learner(mut self, learner_id: LearnerId) -> Self {
        self.learner_id = Some(learner_id);
        self
    }

    /// Set the kind criterion (builder pattern).
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }
}

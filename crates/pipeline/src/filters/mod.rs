//! The concrete filters: one per query criterion.
//!
//! Each filter narrows on a single field of the record and passes
//! everything through when its criterion is unset.

pub mod item;
pub mod learner;
pub mod kind;

// Re-export for convenience
pub use item::ItemFilter;
pub use learner::LearnerFilter;
pub use kind::KindFilter;

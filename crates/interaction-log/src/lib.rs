//! # Interaction Log Crate
//!
//! Domain types for learner interaction events.
//!
//! An interaction is logged whenever a learner does something with a
//! learning item (attempts it, views it, ...). This crate defines the
//! record type and its identifier aliases; producing the records
//! (persistence, request handling) belongs to the surrounding system.
//!
//! ## Example Usage
//!
//! ```
//! use interaction_log::InteractionLog;
//!
//! let log = InteractionLog::new(1, 42, 7, "attempt");
//! assert_eq!(log.item_id, 7);
//! ```

// Public modules
pub mod types;

// Re-export commonly used types for convenience
pub use types::{
    // Type aliases
    InteractionId,
    LearnerId,
    ItemId,
    // Core types
    InteractionLog,
};

//! The seam every filter plugs into.

use crate::query::InteractionQuery;
use anyhow::Result;
use interaction_log::InteractionLog;

/// A single narrowing step over a sequence of interaction records.
///
/// Anything placed in a FilterPipeline implements this trait.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be used in concurrent contexts
/// - Filters take ownership of the Vec<InteractionLog> and return a
///   filtered Vec, so pass-through needs no cloning
/// - Filters only select a subsequence: surviving records are unmodified
///   and keep their relative input order
pub trait Filter: Send + Sync {
    /// Short identifier used in log output.
    fn name(&self) -> &str;

    /// Narrow `records` according to this filter's criterion in `query`.
    ///
    /// A filter whose criterion is unset returns the input unchanged.
    /// Survivors come back in input order, untouched.
    ///
    /// # Returns
    /// * `Ok(Vec<InteractionLog>)` - The surviving records
    /// * `Err` - If filtering fails (none of the built-in filters can)
    fn apply(
        &self,
        records: Vec<InteractionLog>,
        query: &InteractionQuery,
    ) -> Result<Vec<InteractionLog>>;
}

//! Query runner: one origin/target pair through the search crate.

use degrees_kernel::{GraphStore, PersonId};
use degrees_search::{search, SearchError, SearchOutcome, SearchPolicy};

/// Everything known about one finished query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryReport {
    pub origin: PersonId,
    pub target: PersonId,
    pub policy: SearchPolicy,
    pub outcome: SearchOutcome,
}

impl QueryReport {
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.outcome.path.is_some()
    }
}

/// Run a single query under `policy`.
///
/// # Errors
///
/// Propagates [`SearchError`] from [`degrees_search::search`].
pub fn run_query(
    store: &GraphStore,
    origin: &PersonId,
    target: &PersonId,
    policy: &SearchPolicy,
) -> Result<QueryReport, SearchError> {
    let outcome = search(store, origin, target, policy)?;
    tracing::info!(
        %origin,
        %target,
        degrees = outcome.degrees(),
        termination = outcome.stats.termination.as_str(),
        "query finished"
    );
    Ok(QueryReport {
        origin: origin.clone(),
        target: target.clone(),
        policy: *policy,
        outcome,
    })
}

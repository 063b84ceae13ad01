//! Search policy: frontier discipline, revisit control and budget.

use crate::error::SearchError;
use crate::frontier::{Frontier, QueueFrontier, StackFrontier};

/// Search configuration.
///
/// The default (breadth-first, skip seen states, unbounded) is what
/// [`crate::search::shortest_path`] uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchPolicy {
    /// Expansion order.
    pub frontier: FrontierKind,
    /// Whether already-seen states may be queued again.
    pub revisit: RevisitPolicy,
    /// Hard cap on node expansions; `None` means unbounded.
    pub max_expansions: Option<u64>,
}

impl SearchPolicy {
    /// Check that the policy is usable.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] for a zero expansion budget,
    /// which could never expand the origin, and for
    /// [`RevisitPolicy::AllowRevisits`] without a budget: every expansion
    /// requeues at least the expanded person, so the frontier never empties
    /// when origin and target are not connected.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_expansions == Some(0) {
            return Err(SearchError::InvalidPolicy {
                detail: "max_expansions must be at least 1".into(),
            });
        }
        if self.revisit == RevisitPolicy::AllowRevisits && self.max_expansions.is_none() {
            return Err(SearchError::InvalidPolicy {
                detail: "allow_revisits requires max_expansions".into(),
            });
        }
        Ok(())
    }

    /// Fresh frontier for this policy.
    #[must_use]
    pub fn new_frontier(&self) -> Box<dyn Frontier> {
        match self.frontier {
            FrontierKind::Queue => Box::new(QueueFrontier::new()),
            FrontierKind::Stack => Box::new(StackFrontier::new()),
        }
    }
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self {
            frontier: FrontierKind::Queue,
            revisit: RevisitPolicy::SkipSeen,
            max_expansions: None,
        }
    }
}

/// Frontier discipline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrontierKind {
    /// FIFO. Guarantees a shortest path.
    #[default]
    Queue,
    /// LIFO. Finds a path, not necessarily a shortest one.
    Stack,
}

impl FrontierKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Queue => "queue",
            Self::Stack => "stack",
        }
    }
}

/// Revisit control for neighbors produced during expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevisitPolicy {
    /// Never queue a state that was already queued or expanded.
    #[default]
    SkipSeen,
    /// Queue every neighbor, even ones already seen. Work is bounded only by
    /// the first-contact exit; can blow up on dense graphs.
    AllowRevisits,
}

impl RevisitPolicy {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SkipSeen => "skip_seen",
            Self::AllowRevisits => "allow_revisits",
        }
    }
}

//! Per-search counters and termination reason.

/// Why a search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    /// Origin and target are the same person; nothing was searched.
    SameEndpoints,
    /// Origin and target share a movie; answered by the one-hop shortcut.
    DirectlyConnected,
    /// A neighbor adjacent to the target was found. `degrees` is the length
    /// of the resulting path.
    GoalReached { degrees: u32 },
    /// The frontier emptied: origin and target are not connected.
    FrontierExhausted,
    /// `max_expansions` was hit before contact.
    ExpansionBudgetExceeded,
}

impl TerminationReason {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SameEndpoints => "same_endpoints",
            Self::DirectlyConnected => "directly_connected",
            Self::GoalReached { .. } => "goal_reached",
            Self::FrontierExhausted => "frontier_exhausted",
            Self::ExpansionBudgetExceeded => "expansion_budget_exceeded",
        }
    }

    /// Whether the search produced a path.
    #[must_use]
    pub fn is_connected(self) -> bool {
        matches!(
            self,
            Self::SameEndpoints | Self::DirectlyConnected | Self::GoalReached { .. }
        )
    }
}

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes removed from the frontier and expanded.
    pub expansions: u64,
    /// Nodes allocated in the arena, root and goal included.
    pub nodes_created: u64,
    /// `(movie, co-star)` pairs produced by expansions.
    pub neighbors_generated: u64,
    /// Neighbors not queued because their state was already seen.
    pub duplicates_suppressed: u64,
    /// Largest frontier size observed.
    pub frontier_high_water: u64,
    /// Entries still queued when the search stopped.
    pub frontier_remaining: u64,
    pub termination: TerminationReason,
}

impl SearchStats {
    pub(crate) fn new(termination: TerminationReason) -> Self {
        Self {
            expansions: 0,
            nodes_created: 0,
            neighbors_generated: 0,
            duplicates_suppressed: 0,
            frontier_high_water: 0,
            frontier_remaining: 0,
            termination,
        }
    }

    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        let mut termination = serde_json::json!({ "type": self.termination.as_str() });
        if let TerminationReason::GoalReached { degrees } = self.termination {
            termination["degrees"] = serde_json::json!(degrees);
        }
        serde_json::json!({
            "duplicates_suppressed": self.duplicates_suppressed,
            "expansions": self.expansions,
            "frontier_high_water": self.frontier_high_water,
            "frontier_remaining": self.frontier_remaining,
            "neighbors_generated": self.neighbors_generated,
            "nodes_created": self.nodes_created,
            "termination_reason": termination,
        })
    }
}

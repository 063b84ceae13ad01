//! Search entry points and the expansion loop.

use std::collections::HashSet;

use degrees_kernel::{GraphStore, PersonId};

use crate::error::{Endpoint, SearchError};
use crate::frontier::FrontierEntry;
use crate::goal::GoalTest;
use crate::node::{NodeArena, NodeId, SearchNode};
use crate::path::Path;
use crate::policy::{RevisitPolicy, SearchPolicy};
use crate::reconstruct::reconstruct;
use crate::stats::{SearchStats, TerminationReason};

/// Result of a search call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    /// The connecting path, or `None` when the two people are not connected
    /// (or the expansion budget ran out first).
    pub path: Option<Path>,
    pub stats: SearchStats,
}

impl SearchOutcome {
    /// Degrees of separation, if connected.
    #[must_use]
    pub fn degrees(&self) -> Option<usize> {
        self.path.as_ref().map(Path::degrees)
    }
}

/// Shortest `(movie, person)` path from `origin` to `target` using the
/// default breadth-first policy.
///
/// Returns `Ok(None)` when the two people are in different connected
/// components. `origin == target` yields `Ok(Some(Path::empty()))`.
///
/// # Errors
///
/// See [`search`].
pub fn shortest_path(
    store: &GraphStore,
    origin: &PersonId,
    target: &PersonId,
) -> Result<Option<Path>, SearchError> {
    search(store, origin, target, &SearchPolicy::default()).map(|outcome| outcome.path)
}

/// Run a search under `policy`.
///
/// 1. Same endpoints: empty path, nothing searched.
/// 2. One-hop shortcut: if origin and target share a movie, the path is the
///    single step to the target and the frontier is never touched.
/// 3. Otherwise seed the frontier with the origin and expand. Each neighbor
///    is goal-tested before it is queued; the first neighbor adjacent to the
///    target ends the search, and the target is appended behind it.
///
/// Neighbors are enumerated in (movie id, person id) order, so among several
/// equally short connections the lowest-id one wins.
///
/// # Errors
///
/// - [`SearchError::InvalidPolicy`] if `policy` fails validation.
/// - [`SearchError::UnknownPerson`] if either id is not in `store`.
/// - [`SearchError::InconsistentPath`] if path reconstruction finds a
///   parent/child pair with no shared movie.
pub fn search(
    store: &GraphStore,
    origin: &PersonId,
    target: &PersonId,
    policy: &SearchPolicy,
) -> Result<SearchOutcome, SearchError> {
    policy.validate()?;

    let Some(origin_person) = store.person(origin) else {
        return Err(SearchError::UnknownPerson {
            endpoint: Endpoint::Origin,
            id: origin.clone(),
        });
    };
    if !store.contains_person(target) {
        return Err(SearchError::UnknownPerson {
            endpoint: Endpoint::Target,
            id: target.clone(),
        });
    }

    let _span = tracing::debug_span!("search", %origin, %target).entered();

    if origin == target {
        tracing::debug!("origin equals target");
        return Ok(SearchOutcome {
            path: Some(Path::empty()),
            stats: SearchStats::new(TerminationReason::SameEndpoints),
        });
    }

    let goal = GoalTest::new(store, target);
    let mut arena = NodeArena::new();
    let root = arena.push_root(SearchNode::root(
        origin.clone(),
        Some(origin_person.movies.clone()),
    ));

    let directly_connected = arena
        .get(root)
        .and_then(|n| n.reachable_movies.as_ref())
        .is_some_and(|movies| goal.shares_movie(movies));
    if directly_connected {
        let goal_node = arena.push_child(target.clone(), root);
        let path = reconstruct(store, &arena, goal_node)?;
        let mut stats = SearchStats::new(TerminationReason::DirectlyConnected);
        stats.nodes_created = arena.len() as u64;
        tracing::debug!("one-hop shortcut");
        return Ok(SearchOutcome {
            path: Some(path),
            stats,
        });
    }

    let mut frontier = policy.new_frontier();
    let mut seen: HashSet<PersonId> = HashSet::new();
    let mut expansions: u64 = 0;
    let mut neighbors_generated: u64 = 0;
    let mut duplicates_suppressed: u64 = 0;

    seen.insert(origin.clone());
    frontier.add(FrontierEntry {
        node: root,
        state: origin.clone(),
    });

    let (termination, goal_node) = loop {
        if frontier.is_empty() {
            break (TerminationReason::FrontierExhausted, None);
        }
        if policy.max_expansions.is_some_and(|max| expansions >= max) {
            break (TerminationReason::ExpansionBudgetExceeded, None);
        }

        let current = frontier.remove()?;
        expansions += 1;

        let mut contact: Option<NodeId> = None;
        for (_movie, neighbor) in store.neighbors_for_person(&current.state) {
            neighbors_generated += 1;

            if policy.revisit == RevisitPolicy::SkipSeen && seen.contains(neighbor) {
                duplicates_suppressed += 1;
                continue;
            }

            if goal.is_adjacent(neighbor) {
                let via = arena.push_child(neighbor.clone(), current.node);
                contact = Some(if neighbor == goal.target() {
                    via
                } else {
                    arena.push_child(goal.target().clone(), via)
                });
                break;
            }

            let node = arena.push_child(neighbor.clone(), current.node);
            if policy.revisit == RevisitPolicy::SkipSeen {
                seen.insert(neighbor.clone());
            }
            frontier.add(FrontierEntry {
                node,
                state: neighbor.clone(),
            });
        }

        if let Some(goal_node) = contact {
            let degrees = arena.get(goal_node).map_or(0, |n| n.depth);
            break (TerminationReason::GoalReached { degrees }, Some(goal_node));
        }
    };

    let path = goal_node
        .map(|node| reconstruct(store, &arena, node))
        .transpose()?;

    let stats = SearchStats {
        expansions,
        nodes_created: arena.len() as u64,
        neighbors_generated,
        duplicates_suppressed,
        frontier_high_water: frontier.high_water() as u64,
        frontier_remaining: frontier.len() as u64,
        termination,
    };
    tracing::debug!(
        expansions,
        nodes = stats.nodes_created,
        duplicates = duplicates_suppressed,
        high_water = stats.frontier_high_water,
        reason = termination.as_str(),
        "search finished"
    );

    Ok(SearchOutcome { path, stats })
}

//! Path reconstruction from a goal node's parent chain.

use degrees_kernel::GraphStore;

use crate::error::SearchError;
use crate::node::{NodeArena, NodeId};
use crate::path::{Path, PathStep};

/// Turn the parent chain ending at `goal` into an origin-to-target [`Path`].
///
/// Nodes do not record the movie that linked them, so each `(child, parent)`
/// pair is resolved against the store: the connecting movie is the lowest-id
/// movie of the child that also stars the parent. Steps are collected
/// child-to-parent, then reversed.
///
/// # Errors
///
/// Returns [`SearchError::InconsistentPath`] if some adjacent pair shares no
/// movie, and [`SearchError::DanglingNode`] if `goal` or a parent handle does
/// not resolve in `arena`.
pub fn reconstruct(store: &GraphStore, arena: &NodeArena, goal: NodeId) -> Result<Path, SearchError> {
    if arena.get(goal).is_none() {
        return Err(SearchError::DanglingNode { index: goal.index() });
    }
    let mut steps = Vec::new();

    for (_, node) in arena.ancestors(goal) {
        let Some(parent_id) = node.parent else {
            break;
        };
        let Some(parent) = arena.get(parent_id) else {
            return Err(SearchError::DanglingNode {
                index: parent_id.index(),
            });
        };

        let movie = store
            .person_movies(&node.state)
            .into_iter()
            .flatten()
            .find(|m| {
                store
                    .movie_stars(m)
                    .is_some_and(|stars| stars.contains(&parent.state))
            })
            .ok_or_else(|| SearchError::InconsistentPath {
                child: node.state.clone(),
                parent: parent.state.clone(),
            })?;

        steps.push(PathStep {
            movie: movie.clone(),
            person: node.state.clone(),
        });
    }

    steps.reverse();
    Ok(Path { steps })
}

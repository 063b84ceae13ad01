//! Search nodes and the arena that owns them.
//!
//! Nodes never point at each other directly. Every node lives in a
//! [`NodeArena`] for the duration of one search and refers to its parent by
//! [`NodeId`] handle. Handles are only issued for nodes already in the
//! arena, so a parent handle always refers to an older node and parent
//! chains cannot form cycles.

use std::collections::BTreeSet;

use degrees_kernel::{MovieId, PersonId};

/// Handle to a node in a [`NodeArena`]. Handles are dense, starting at 0
/// for the root, in creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// An immutable search node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchNode {
    /// The person this node stands for.
    pub state: PersonId,
    /// The node whose expansion discovered this one (`None` for the root).
    pub parent: Option<NodeId>,
    /// Movie-hops from the root.
    pub depth: u32,
    /// Snapshot of the movies reachable from this node's person. Only the
    /// root carries one; it backs the one-hop shortcut.
    pub reachable_movies: Option<BTreeSet<MovieId>>,
}

impl SearchNode {
    /// A root node with no parent.
    #[must_use]
    pub fn root(state: PersonId, reachable_movies: Option<BTreeSet<MovieId>>) -> Self {
        Self {
            state,
            parent: None,
            depth: 0,
            reachable_movies,
        }
    }
}

/// Owner of every node created during one search.
#[derive(Debug, Default)]
pub struct NodeArena {
    nodes: Vec<SearchNode>,
}

impl NodeArena {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a root node.
    pub fn push_root(&mut self, node: SearchNode) -> NodeId {
        debug_assert!(node.parent.is_none());
        self.insert(node)
    }

    /// Insert a child of `parent`. Depth is derived from the parent.
    ///
    /// # Panics
    ///
    /// Panics if `parent` was not issued by this arena.
    pub fn push_child(&mut self, state: PersonId, parent: NodeId) -> NodeId {
        let depth = self.nodes[parent.0].depth + 1;
        self.insert(SearchNode {
            state,
            parent: Some(parent),
            depth,
            reachable_movies: None,
        })
    }

    fn insert(&mut self, node: SearchNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&SearchNode> {
        self.nodes.get(id.0)
    }

    /// Walk from `id` up to its root, `id` first.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = (NodeId, &SearchNode)> {
        std::iter::successors(self.get(id).map(|n| (id, n)), move |(_, node)| {
            node.parent.and_then(|p| self.get(p).map(|n| (p, n)))
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

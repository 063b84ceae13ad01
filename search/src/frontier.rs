//! Frontiers of discovered-but-unexpanded nodes.
//!
//! Two policies share one trait: [`QueueFrontier`] (FIFO, breadth-first;
//! shortest path under unit edge costs) and [`StackFrontier`] (LIFO,
//! depth-first; no shortest-path guarantee). Neither deduplicates: adding
//! the same state twice stores it twice. Revisit control is the engine's
//! job (see [`crate::policy::RevisitPolicy`]).

use std::collections::{HashMap, VecDeque};

use degrees_kernel::PersonId;

use crate::node::NodeId;

/// Typed failure of a frontier operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontierError {
    /// `remove()` on a frontier with no entries.
    Empty,
}

impl std::fmt::Display for FrontierError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => f.write_str("empty frontier"),
        }
    }
}

impl std::error::Error for FrontierError {}

/// A frontier entry: the arena handle plus the state it stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontierEntry {
    pub node: NodeId,
    pub state: PersonId,
}

/// Common frontier contract.
pub trait Frontier {
    /// Insert an entry.
    fn add(&mut self, entry: FrontierEntry);

    /// Remove the next entry chosen by the policy.
    ///
    /// # Errors
    ///
    /// Returns [`FrontierError::Empty`] if no entries remain.
    fn remove(&mut self) -> Result<FrontierEntry, FrontierError>;

    /// Whether any held entry has this state.
    fn contains_state(&self, state: &PersonId) -> bool;

    /// Whether zero entries remain.
    fn is_empty(&self) -> bool;

    /// Number of held entries, duplicates included.
    fn len(&self) -> usize;

    /// Largest `len()` ever observed.
    fn high_water(&self) -> usize;
}

/// Shared storage: an ordered buffer plus a per-state multiplicity count so
/// `contains_state` does not scan.
#[derive(Debug, Default)]
struct Buffer {
    entries: VecDeque<FrontierEntry>,
    counts: HashMap<PersonId, usize>,
    high_water: usize,
}

impl Buffer {
    fn push(&mut self, entry: FrontierEntry) {
        *self.counts.entry(entry.state.clone()).or_insert(0) += 1;
        self.entries.push_back(entry);
        self.high_water = self.high_water.max(self.entries.len());
    }

    fn release(&mut self, entry: Option<FrontierEntry>) -> Result<FrontierEntry, FrontierError> {
        let entry = entry.ok_or(FrontierError::Empty)?;
        if let Some(count) = self.counts.get_mut(&entry.state) {
            *count -= 1;
            if *count == 0 {
                self.counts.remove(&entry.state);
            }
        }
        Ok(entry)
    }
}

/// First-in-first-out frontier (breadth-first).
#[derive(Debug, Default)]
pub struct QueueFrontier {
    buf: Buffer,
}

impl QueueFrontier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for QueueFrontier {
    fn add(&mut self, entry: FrontierEntry) {
        self.buf.push(entry);
    }

    fn remove(&mut self) -> Result<FrontierEntry, FrontierError> {
        let next = self.buf.entries.pop_front();
        self.buf.release(next)
    }

    fn contains_state(&self, state: &PersonId) -> bool {
        self.buf.counts.contains_key(state)
    }

    fn is_empty(&self) -> bool {
        self.buf.entries.is_empty()
    }

    fn len(&self) -> usize {
        self.buf.entries.len()
    }

    fn high_water(&self) -> usize {
        self.buf.high_water
    }
}

/// Last-in-first-out frontier (depth-first).
#[derive(Debug, Default)]
pub struct StackFrontier {
    buf: Buffer,
}

impl StackFrontier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for StackFrontier {
    fn add(&mut self, entry: FrontierEntry) {
        self.buf.push(entry);
    }

    fn remove(&mut self) -> Result<FrontierEntry, FrontierError> {
        let next = self.buf.entries.pop_back();
        self.buf.release(next)
    }

    fn contains_state(&self, state: &PersonId) -> bool {
        self.buf.counts.contains_key(state)
    }

    fn is_empty(&self) -> bool {
        self.buf.entries.is_empty()
    }

    fn len(&self) -> usize {
        self.buf.entries.len()
    }

    fn high_water(&self) -> usize {
        self.buf.high_water
    }
}

//! Typed search errors.
//!
//! "No path" is not an error: it is `Ok(None)` from
//! [`crate::search::shortest_path`]. Everything here is a hard failure of a
//! single search call and is never retried (search is deterministic).

use degrees_kernel::PersonId;

/// Which end of a query an identifier was supplied for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Origin,
    Target,
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Origin => f.write_str("origin"),
            Self::Target => f.write_str("target"),
        }
    }
}

/// Typed failure of a search call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The origin or target id is not in the graph store.
    UnknownPerson { endpoint: Endpoint, id: PersonId },
    /// No movie connects two adjacent nodes of a parent chain. Indicates a
    /// broken store invariant or a corrupted arena.
    InconsistentPath { child: PersonId, parent: PersonId },
    /// A node handle did not resolve in the search's arena.
    DanglingNode { index: usize },
    /// `remove()` was called on an empty frontier.
    EmptyFrontier,
    /// The search policy is not usable.
    InvalidPolicy { detail: String },
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownPerson { endpoint, id } => {
                write!(f, "{endpoint} person id {id} is not in the graph store")
            }
            Self::InconsistentPath { child, parent } => {
                write!(f, "no shared movie links {child} to its parent {parent}")
            }
            Self::DanglingNode { index } => write!(f, "node handle {index} is not in the arena"),
            Self::EmptyFrontier => f.write_str("remove from empty frontier"),
            Self::InvalidPolicy { detail } => write!(f, "invalid search policy: {detail}"),
        }
    }
}

impl std::error::Error for SearchError {}

impl From<crate::frontier::FrontierError> for SearchError {
    fn from(err: crate::frontier::FrontierError) -> Self {
        match err {
            crate::frontier::FrontierError::Empty => Self::EmptyFrontier,
        }
    }
}

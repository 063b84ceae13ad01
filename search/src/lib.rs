//! Degrees Search: shortest co-star paths over a [`degrees_kernel::GraphStore`].
//!
//! This crate depends only on `degrees_kernel`. It does not know about CSV
//! files, name prompts, or terminal output; those live in `degrees_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! degrees_kernel  ←  degrees_search  ←  degrees_harness
//! (store, loader)    (frontier, nodes)   (resolve, render, CLI)
//! ```
//!
//! # Key types
//!
//! - [`SearchNode`] / [`NodeArena`]: parent chains as arena handles
//! - [`QueueFrontier`] / [`StackFrontier`]: FIFO and LIFO frontiers
//! - [`GoalTest`]: adjacency to the target, bound once per search
//! - [`SearchPolicy`]: frontier kind, revisit policy, expansion budget
//! - [`Path`]: the `(movie, person)` answer
//! - [`SearchStats`]: counters and termination reason

#![forbid(unsafe_code)]

pub mod error;
pub mod frontier;
pub mod goal;
pub mod node;
pub mod path;
pub mod policy;
pub mod reconstruct;
pub mod search;
pub mod stats;

pub use error::{Endpoint, SearchError};
pub use frontier::{Frontier, FrontierEntry, FrontierError, QueueFrontier, StackFrontier};
pub use goal::GoalTest;
pub use node::{NodeArena, NodeId, SearchNode};
pub use path::{Path, PathStep, PathViolation};
pub use policy::{FrontierKind, RevisitPolicy, SearchPolicy};
pub use search::{search, shortest_path, SearchOutcome};
pub use stats::{SearchStats, TerminationReason};

//! Degrees Kernel: the read-only graph store the search layer queries.
//!
//! # API Surface
//!
//! - [`store::GraphStore`] -- immutable people/movies/co-starring index
//! - [`store::GraphStoreBuilder`] -- the only way to create links
//! - [`load::load_dir`] -- build a store from a CSV dataset directory
//! - [`digest`] -- content digest binding results to a dataset
//! - [`synthetic`] -- deterministic generated stores for tests and benches
//!
//! # Module Dependency Direction
//!
//! `store` ← `load`, `digest`, `synthetic`
//!
//! Nothing in this crate knows about search.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod digest;
pub mod load;
pub mod store;
pub mod synthetic;

pub use store::{GraphStore, GraphStoreBuilder, Movie, MovieId, Person, PersonId};

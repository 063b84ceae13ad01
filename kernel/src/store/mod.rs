//! Read-only in-memory graph store of people, movies and the co-starring
//! relation between them.
//!
//! # Invariant
//!
//! `person.movies` and `movie.stars` are exact inverses: `m ∈ p.movies`
//! if and only if `p ∈ m.stars`. The only way to create a link is
//! [`GraphStoreBuilder::add_appearance`], which writes both sides. Once
//! built, a [`GraphStore`] exposes no mutation.

mod builder;
mod entity;
mod ids;

use std::collections::{BTreeMap, BTreeSet, HashMap};

pub use builder::{BuildError, GraphStoreBuilder};
pub use entity::{Movie, Person};
pub use ids::{MovieId, PersonId};

/// Immutable graph store.
///
/// Shareable across threads by reference; no method takes `&mut self`.
#[derive(Debug, Clone, Default)]
pub struct GraphStore {
    pub(crate) people: BTreeMap<PersonId, Person>,
    pub(crate) movies: BTreeMap<MovieId, Movie>,
    /// Lowercased display name → every id carrying that name.
    pub(crate) names: HashMap<String, BTreeSet<PersonId>>,
}

impl GraphStore {
    /// Start building a store.
    #[must_use]
    pub fn builder() -> GraphStoreBuilder {
        GraphStoreBuilder::new()
    }

    #[must_use]
    pub fn person(&self, id: &PersonId) -> Option<&Person> {
        self.people.get(id)
    }

    #[must_use]
    pub fn movie(&self, id: &MovieId) -> Option<&Movie> {
        self.movies.get(id)
    }

    #[must_use]
    pub fn contains_person(&self, id: &PersonId) -> bool {
        self.people.contains_key(id)
    }

    /// Movies a person appears in, or `None` for an unknown id.
    #[must_use]
    pub fn person_movies(&self, id: &PersonId) -> Option<&BTreeSet<MovieId>> {
        self.people.get(id).map(|p| &p.movies)
    }

    /// Stars of a movie, or `None` for an unknown id.
    #[must_use]
    pub fn movie_stars(&self, id: &MovieId) -> Option<&BTreeSet<PersonId>> {
        self.movies.get(id).map(|m| &m.stars)
    }

    /// `(movie, co-star)` pairs for everyone who shares a movie with `id`,
    /// including `id` itself once per movie.
    ///
    /// Pairs come out ordered by movie id, then person id. Unknown ids
    /// yield nothing.
    pub fn neighbors_for_person<'a>(
        &'a self,
        id: &PersonId,
    ) -> impl Iterator<Item = (&'a MovieId, &'a PersonId)> + 'a {
        self.person_movies(id)
            .into_iter()
            .flatten()
            .filter_map(move |movie_id| {
                self.movies
                    .get(movie_id)
                    .map(|movie| movie.stars.iter().map(move |star| (movie_id, star)))
            })
            .flatten()
    }

    /// All ids whose display name matches `name`, ignoring ASCII and
    /// Unicode case. Empty when nobody carries the name.
    #[must_use]
    pub fn person_ids_for_name(&self, name: &str) -> Vec<&PersonId> {
        self.names
            .get(&name.trim().to_lowercase())
            .map(|ids| ids.iter().collect())
            .unwrap_or_default()
    }

    /// Iterate people in id order.
    pub fn people(&self) -> impl Iterator<Item = &Person> {
        self.people.values()
    }

    /// Iterate movies in id order.
    pub fn movies(&self) -> impl Iterator<Item = &Movie> {
        self.movies.values()
    }

    #[must_use]
    pub fn person_count(&self) -> usize {
        self.people.len()
    }

    #[must_use]
    pub fn movie_count(&self) -> usize {
        self.movies.len()
    }

    /// Number of (person, movie) links.
    #[must_use]
    pub fn appearance_count(&self) -> usize {
        self.movies.values().map(|m| m.stars.len()).sum()
    }
}

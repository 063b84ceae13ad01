//! Goal test: is a candidate person directly adjacent to the target?
//!
//! A person is adjacent to the target when some movie in the target's
//! filmography lists them as a star. The target counts as adjacent to
//! itself whenever it has at least one movie.

use std::collections::BTreeSet;

use degrees_kernel::{GraphStore, MovieId, PersonId};

/// Goal test bound to one target for the duration of a search.
///
/// The target's `(movie, stars)` pairs are resolved once at construction;
/// each [`GoalTest::is_adjacent`] call then costs one set lookup per target
/// movie.
#[derive(Debug)]
pub struct GoalTest<'g> {
    target: &'g PersonId,
    target_movies: Vec<(&'g MovieId, &'g BTreeSet<PersonId>)>,
}

impl<'g> GoalTest<'g> {
    /// Bind to `target`. An unknown target has no movies and nobody is
    /// adjacent to it.
    #[must_use]
    pub fn new(store: &'g GraphStore, target: &'g PersonId) -> Self {
        let target_movies = store
            .person_movies(target)
            .into_iter()
            .flatten()
            .filter_map(|m| store.movie_stars(m).map(|stars| (m, stars)))
            .collect();
        Self {
            target,
            target_movies,
        }
    }

    #[must_use]
    pub fn target(&self) -> &'g PersonId {
        self.target
    }

    /// Whether `person` shares a movie with the target.
    #[must_use]
    pub fn is_adjacent(&self, person: &PersonId) -> bool {
        self.target_movies
            .iter()
            .any(|(_, stars)| stars.contains(person))
    }

    /// Whether any movie in `movies` is also one of the target's. Used with
    /// the root node's movie snapshot for the one-hop shortcut.
    #[must_use]
    pub fn shares_movie(&self, movies: &BTreeSet<MovieId>) -> bool {
        self.target_movies.iter().any(|(m, _)| movies.contains(*m))
    }
}

/// One-shot goal test without a bound [`GoalTest`].
#[must_use]
pub fn is_adjacent(store: &GraphStore, person: &PersonId, target: &PersonId) -> bool {
    GoalTest::new(store, target).is_adjacent(person)
}

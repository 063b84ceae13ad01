//! Mutable builder that assembles a [`GraphStore`].

use std::collections::{BTreeMap, BTreeSet, HashMap};

use super::entity::{Movie, Person};
use super::ids::{MovieId, PersonId};
use super::GraphStore;

/// Typed failure while assembling a store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// A person with this id was already added.
    DuplicatePerson { id: PersonId },
    /// A movie with this id was already added.
    DuplicateMovie { id: MovieId },
    /// An appearance referenced a person or movie that does not exist.
    DanglingAppearance {
        person: PersonId,
        movie: MovieId,
        person_known: bool,
        movie_known: bool,
    },
}

impl std::fmt::Display for BuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicatePerson { id } => write!(f, "duplicate person id {id}"),
            Self::DuplicateMovie { id } => write!(f, "duplicate movie id {id}"),
            Self::DanglingAppearance {
                person,
                movie,
                person_known,
                movie_known,
            } => {
                write!(f, "appearance ({person}, {movie}) references unknown")?;
                match (person_known, movie_known) {
                    (false, false) => write!(f, " person and movie"),
                    (false, true) => write!(f, " person"),
                    _ => write!(f, " movie"),
                }
            }
        }
    }
}

impl std::error::Error for BuildError {}

/// Builder for [`GraphStore`].
///
/// People and movies must be added before the appearances that link them.
#[derive(Debug, Default)]
pub struct GraphStoreBuilder {
    people: BTreeMap<PersonId, Person>,
    movies: BTreeMap<MovieId, Movie>,
    names: HashMap<String, BTreeSet<PersonId>>,
}

impl GraphStoreBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a person.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::DuplicatePerson`] if the id is already taken.
    pub fn add_person(
        &mut self,
        id: PersonId,
        name: impl Into<String>,
        birth: Option<u16>,
    ) -> Result<&mut Self, BuildError> {
        if self.people.contains_key(&id) {
            return Err(BuildError::DuplicatePerson { id });
        }
        let person = Person::new(id.clone(), name, birth);
        self.names
            .entry(person.name.trim().to_lowercase())
            .or_default()
            .insert(id.clone());
        self.people.insert(id, person);
        Ok(self)
    }

    /// Register a movie.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::DuplicateMovie`] if the id is already taken.
    pub fn add_movie(
        &mut self,
        id: MovieId,
        title: impl Into<String>,
        year: Option<u16>,
    ) -> Result<&mut Self, BuildError> {
        if self.movies.contains_key(&id) {
            return Err(BuildError::DuplicateMovie { id });
        }
        self.movies.insert(id.clone(), Movie::new(id, title, year));
        Ok(self)
    }

    /// Link a person to a movie on both sides. Repeated links are no-ops.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::DanglingAppearance`] if either id is unknown;
    /// the store is left untouched in that case.
    pub fn add_appearance(
        &mut self,
        person: &PersonId,
        movie: &MovieId,
    ) -> Result<&mut Self, BuildError> {
        let person_known = self.people.contains_key(person);
        let movie_known = self.movies.contains_key(movie);
        let (Some(p), Some(m)) = (self.people.get_mut(person), self.movies.get_mut(movie)) else {
            return Err(BuildError::DanglingAppearance {
                person: person.clone(),
                movie: movie.clone(),
                person_known,
                movie_known,
            });
        };
        p.movies.insert(movie.clone());
        m.stars.insert(person.clone());
        Ok(self)
    }

    #[must_use]
    pub fn person_count(&self) -> usize {
        self.people.len()
    }

    #[must_use]
    pub fn movie_count(&self) -> usize {
        self.movies.len()
    }

    /// Freeze into an immutable store.
    #[must_use]
    pub fn build(self) -> GraphStore {
        GraphStore {
            people: self.people,
            movies: self.movies,
            names: self.names,
        }
    }
}

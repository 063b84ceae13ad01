//! Person and movie records.

use std::collections::BTreeSet;

use super::ids::{MovieId, PersonId};

/// A person in the store. Display names are not unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    /// Birth year; `None` when the source cell was blank.
    pub birth: Option<u16>,
    /// Movies this person appears in.
    pub movies: BTreeSet<MovieId>,
}

/// A movie in the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    /// Release year; `None` when the source cell was blank.
    pub year: Option<u16>,
    /// People who starred in this movie.
    pub stars: BTreeSet<PersonId>,
}

impl Person {
    #[must_use]
    pub fn new(id: PersonId, name: impl Into<String>, birth: Option<u16>) -> Self {
        Self {
            id,
            name: name.into(),
            birth,
            movies: BTreeSet::new(),
        }
    }
}

impl Movie {
    #[must_use]
    pub fn new(id: MovieId, title: impl Into<String>, year: Option<u16>) -> Self {
        Self {
            id,
            title: title.into(),
            year,
            stars: BTreeSet::new(),
        }
    }
}

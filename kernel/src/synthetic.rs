//! Deterministic synthetic datasets for tests and benchmarks.
//!
//! Ids are zero-padded (`p00042`, `m00007`) so lexicographic id order
//! matches numeric order.

use std::collections::BTreeSet;

use crate::store::{GraphStore, MovieId, PersonId};

const FRESH_ID: &str = "fresh synthetic id";

/// Person id for index `i`.
#[must_use]
pub fn person_id(i: usize) -> PersonId {
    PersonId::new(format!("p{i:05}"))
}

/// Movie id for index `i`.
#[must_use]
pub fn movie_id(i: usize) -> MovieId {
    MovieId::new(format!("m{i:05}"))
}

/// `people` persons in a line: movie `i` stars persons `i` and `i + 1`.
///
/// Distance between `person_id(a)` and `person_id(b)` is `|a - b|`.
///
/// # Panics
///
/// Panics if the generator produces a repeated or dangling id.
#[must_use]
pub fn chain(people: usize) -> GraphStore {
    let mut b = GraphStore::builder();
    for i in 0..people {
        b.add_person(person_id(i), format!("Person {i}"), None)
            .expect(FRESH_ID);
    }
    for i in 0..people.saturating_sub(1) {
        b.add_movie(movie_id(i), format!("Movie {i}"), None)
            .expect(FRESH_ID);
        b.add_appearance(&person_id(i), &movie_id(i))
            .expect(FRESH_ID);
        b.add_appearance(&person_id(i + 1), &movie_id(i))
            .expect(FRESH_ID);
    }
    b.build()
}

/// Two chains of `len` people each with no movie in common.
///
/// The first chain uses person indices `0..len`, the second `len..2*len`.
///
/// # Panics
///
/// Panics if the generator produces a repeated or dangling id.
#[must_use]
pub fn disjoint_pair(len: usize) -> GraphStore {
    let mut b = GraphStore::builder();
    let mut next_movie = 0;
    for start in [0, len] {
        for i in start..start + len {
            b.add_person(person_id(i), format!("Person {i}"), None)
                .expect(FRESH_ID);
        }
        for i in start..(start + len).saturating_sub(1) {
            b.add_movie(movie_id(next_movie), format!("Movie {next_movie}"), None)
                .expect(FRESH_ID);
            b.add_appearance(&person_id(i), &movie_id(next_movie))
                .expect(FRESH_ID);
            b.add_appearance(&person_id(i + 1), &movie_id(next_movie))
                .expect(FRESH_ID);
            next_movie += 1;
        }
    }
    b.build()
}

/// Parameters for [`random_bipartite`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomGraphConfig {
    pub people: usize,
    pub movies: usize,
    /// Distinct stars per movie (capped at `people`).
    pub cast_size: usize,
    pub seed: u64,
}

impl Default for RandomGraphConfig {
    fn default() -> Self {
        Self {
            people: 50,
            movies: 20,
            cast_size: 3,
            seed: 0x5eed,
        }
    }
}

/// Random bipartite cast graph. Same config, same store.
///
/// # Panics
///
/// Panics if the generator produces a repeated or dangling id.
#[must_use]
pub fn random_bipartite(config: RandomGraphConfig) -> GraphStore {
    let mut rng = XorShift64::new(config.seed);
    let mut b = GraphStore::builder();
    for i in 0..config.people {
        b.add_person(person_id(i), format!("Person {i}"), None)
            .expect(FRESH_ID);
    }
    if config.people == 0 {
        return b.build();
    }
    let cast_size = config.cast_size.min(config.people);
    for m in 0..config.movies {
        b.add_movie(movie_id(m), format!("Movie {m}"), None)
            .expect(FRESH_ID);
        let mut cast = BTreeSet::new();
        while cast.len() < cast_size {
            cast.insert(rng.below(config.people));
        }
        for p in cast {
            b.add_appearance(&person_id(p), &movie_id(m))
                .expect(FRESH_ID);
        }
    }
    b.build()
}

/// Minimal xorshift64 generator; enough for reproducible fixtures.
#[derive(Debug, Clone)]
pub struct XorShift64(u64);

impl XorShift64 {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        // Zero is a fixed point of xorshift.
        Self(if seed == 0 { 0x9e37_79b9_7f4a_7c15 } else { seed })
    }

    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }

    /// Uniform-ish value in `0..bound`. `bound` must be non-zero.
    #[allow(clippy::cast_possible_truncation)]
    pub fn below(&mut self, bound: usize) -> usize {
        (self.next_u64() % bound as u64) as usize
    }
}

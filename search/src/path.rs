//! Origin-to-target paths.

use degrees_kernel::{GraphStore, MovieId, PersonId};

/// One transition: `person` was reached through `movie`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathStep {
    pub movie: MovieId,
    pub person: PersonId,
}

/// Ordered transitions from origin to target. The origin itself is not a
/// step; the last step's person is the target.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Path {
    pub steps: Vec<PathStep>,
}

/// Why a path failed [`Path::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathViolation {
    /// Index of the offending step.
    pub step: usize,
    pub detail: String,
}

impl std::fmt::Display for PathViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "step {}: {}", self.step, self.detail)
    }
}

impl std::error::Error for PathViolation {}

impl Path {
    /// The zero-length path (origin equals target).
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Degrees of separation: the number of movie-hops.
    #[must_use]
    pub fn degrees(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The final person, if any step exists.
    #[must_use]
    pub fn last_person(&self) -> Option<&PersonId> {
        self.steps.last().map(|s| &s.person)
    }

    /// `(movie, from, to)` triples, starting at `origin`.
    pub fn hops<'a>(
        &'a self,
        origin: &'a PersonId,
    ) -> impl Iterator<Item = (&'a MovieId, &'a PersonId, &'a PersonId)> + 'a {
        let froms = std::iter::once(origin).chain(self.steps.iter().map(|s| &s.person));
        froms
            .zip(self.steps.iter())
            .map(|(from, step)| (&step.movie, from, &step.person))
    }

    /// Check that every hop's movie stars both people it connects.
    ///
    /// # Errors
    ///
    /// Returns the first [`PathViolation`] found.
    pub fn validate(&self, store: &GraphStore, origin: &PersonId) -> Result<(), PathViolation> {
        for (i, (movie, from, to)) in self.hops(origin).enumerate() {
            let Some(stars) = store.movie_stars(movie) else {
                return Err(PathViolation {
                    step: i,
                    detail: format!("unknown movie {movie}"),
                });
            };
            for person in [from, to] {
                if !stars.contains(person) {
                    return Err(PathViolation {
                        step: i,
                        detail: format!("{person} did not star in {movie}"),
                    });
                }
            }
        }
        Ok(())
    }

    /// JSON array of `{"movie", "person"}` objects.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::Value::Array(
            self.steps
                .iter()
                .map(|s| {
                    serde_json::json!({
                        "movie": s.movie.as_str(),
                        "person": s.person.as_str(),
                    })
                })
                .collect(),
        )
    }
}

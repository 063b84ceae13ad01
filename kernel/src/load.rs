//! CSV dataset loader.
//!
//! A dataset directory holds three headed CSV files:
//!
//! ```text
//! people.csv   id,name,birth
//! movies.csv   id,title,year
//! stars.csv    person_id,movie_id
//! ```
//!
//! Blank or non-numeric years load as `None`. Star rows that reference an
//! unknown person or movie are skipped and counted, as are repeated person
//! or movie ids (first row wins). Anything else malformed is a [`LoadError`].

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::store::{BuildError, GraphStore, MovieId, PersonId};

pub const PEOPLE_FILE: &str = "people.csv";
pub const MOVIES_FILE: &str = "movies.csv";
pub const STARS_FILE: &str = "stars.csv";

/// Typed failure while loading a dataset directory.
#[derive(Debug)]
pub enum LoadError {
    /// A required file could not be opened.
    Open { path: PathBuf, detail: String },
    /// A row could not be parsed.
    Parse { path: PathBuf, detail: String },
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open { path, detail } => write!(f, "cannot open {}: {detail}", path.display()),
            Self::Parse { path, detail } => {
                write!(f, "malformed row in {}: {detail}", path.display())
            }
        }
    }
}

impl std::error::Error for LoadError {}

/// Counters reported by [`load_dir`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub people: usize,
    pub movies: usize,
    pub appearances: usize,
    /// Star rows naming an unknown person or movie.
    pub skipped_appearances: usize,
    /// Person or movie rows whose id was already loaded.
    pub duplicate_rows: usize,
}

#[derive(Debug, Deserialize)]
struct PersonRow {
    id: String,
    name: String,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    birth: Option<u16>,
}

#[derive(Debug, Deserialize)]
struct MovieRow {
    id: String,
    title: String,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    year: Option<u16>,
}

#[derive(Debug, Deserialize)]
struct StarRow {
    person_id: String,
    movie_id: String,
}

/// Load `people.csv`, `movies.csv` and `stars.csv` from `dir`.
///
/// # Errors
///
/// Returns [`LoadError::Open`] if a file is missing or unreadable and
/// [`LoadError::Parse`] if a row does not match the expected columns.
pub fn load_dir(dir: impl AsRef<Path>) -> Result<(GraphStore, LoadSummary), LoadError> {
    let dir = dir.as_ref();
    tracing::info!(dir = %dir.display(), "loading dataset");

    let mut builder = GraphStore::builder();
    let mut summary = LoadSummary::default();

    let people_path = dir.join(PEOPLE_FILE);
    for row in read_rows::<PersonRow>(&people_path)? {
        let row = row?;
        match builder.add_person(PersonId::new(row.id), row.name, row.birth) {
            Ok(_) => summary.people += 1,
            Err(BuildError::DuplicatePerson { id }) => {
                tracing::warn!(%id, file = PEOPLE_FILE, "duplicate person id, keeping first row");
                summary.duplicate_rows += 1;
            }
            Err(e) => return Err(parse_error(&people_path, &e)),
        }
    }

    let movies_path = dir.join(MOVIES_FILE);
    for row in read_rows::<MovieRow>(&movies_path)? {
        let row = row?;
        match builder.add_movie(MovieId::new(row.id), row.title, row.year) {
            Ok(_) => summary.movies += 1,
            Err(BuildError::DuplicateMovie { id }) => {
                tracing::warn!(%id, file = MOVIES_FILE, "duplicate movie id, keeping first row");
                summary.duplicate_rows += 1;
            }
            Err(e) => return Err(parse_error(&movies_path, &e)),
        }
    }

    let stars_path = dir.join(STARS_FILE);
    for row in read_rows::<StarRow>(&stars_path)? {
        let row = row?;
        let person = PersonId::new(row.person_id);
        let movie = MovieId::new(row.movie_id);
        match builder.add_appearance(&person, &movie) {
            Ok(_) => summary.appearances += 1,
            Err(e @ BuildError::DanglingAppearance { .. }) => {
                tracing::debug!(error = %e, "skipping star row");
                summary.skipped_appearances += 1;
            }
            Err(e) => return Err(parse_error(&stars_path, &e)),
        }
    }

    if summary.skipped_appearances > 0 {
        tracing::warn!(
            skipped = summary.skipped_appearances,
            "star rows referenced unknown people or movies"
        );
    }

    let store = builder.build();
    tracing::info!(
        people = summary.people,
        movies = summary.movies,
        appearances = summary.appearances,
        "dataset loaded"
    );
    Ok((store, summary))
}

/// Open `path` and return an iterator of typed rows with path-tagged errors.
fn read_rows<'a, T>(
    path: &'a Path,
) -> Result<impl Iterator<Item = Result<T, LoadError>> + 'a, LoadError>
where
    T: for<'de> Deserialize<'de> + 'a,
{
    let reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| LoadError::Open {
            path: path.to_path_buf(),
            detail: e.to_string(),
        })?;
    Ok(reader
        .into_deserialize::<T>()
        .map(move |row| row.map_err(|e| parse_error(path, &e))))
}

fn parse_error(path: &Path, err: &dyn std::fmt::Display) -> LoadError {
    LoadError::Parse {
        path: path.to_path_buf(),
        detail: err.to_string(),
    }
}

//! Turning a typed name into a single [`PersonId`].
//!
//! Names are not unique. When several people share a name, a
//! [`Disambiguator`] is asked to pick one; its answer must be one of the
//! listed ids.

use std::io::{BufRead, Write};

use degrees_kernel::{GraphStore, PersonId};

/// One person offered to a [`Disambiguator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate<'s> {
    pub id: &'s PersonId,
    pub name: &'s str,
    pub birth: Option<u16>,
}

/// Failure to resolve a name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// No person has this name.
    NotFound { name: String },
    /// Several people share the name and the answer picked none of them.
    /// `answer` is `None` when input ended before an answer was given.
    Unresolved { name: String, answer: Option<String> },
    /// Reading the answer or writing the prompt failed.
    Io { detail: String },
}

impl std::fmt::Display for ResolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { name } => write!(f, "no person named '{name}'"),
            Self::Unresolved {
                name,
                answer: Some(answer),
            } => write!(f, "'{answer}' is not one of the people named '{name}'"),
            Self::Unresolved { name, answer: None } => {
                write!(f, "no id chosen for '{name}'")
            }
            Self::Io { detail } => write!(f, "prompt I/O failed: {detail}"),
        }
    }
}

impl std::error::Error for ResolveError {}

impl From<std::io::Error> for ResolveError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            detail: err.to_string(),
        }
    }
}

/// Chooses between people who share a name.
pub trait Disambiguator {
    /// Return the raw id the user picked, or `None` if no answer was given.
    /// Validation against `candidates` is done by the caller.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if prompting fails.
    fn choose(&mut self, name: &str, candidates: &[Candidate<'_>])
        -> std::io::Result<Option<String>>;
}

impl<F> Disambiguator for F
where
    F: FnMut(&str, &[Candidate<'_>]) -> std::io::Result<Option<String>>,
{
    fn choose(
        &mut self,
        name: &str,
        candidates: &[Candidate<'_>],
    ) -> std::io::Result<Option<String>> {
        self(name, candidates)
    }
}

/// Resolve `name` (case-insensitive) to a person id.
///
/// # Errors
///
/// - [`ResolveError::NotFound`] if nobody has the name.
/// - [`ResolveError::Unresolved`] if the disambiguator's answer is not one of
///   the candidates.
/// - [`ResolveError::Io`] if the disambiguator fails.
pub fn resolve_person<'s>(
    store: &'s GraphStore,
    name: &str,
    disambiguator: &mut dyn Disambiguator,
) -> Result<&'s PersonId, ResolveError> {
    let ids = store.person_ids_for_name(name);
    match ids.as_slice() {
        [] => Err(ResolveError::NotFound {
            name: name.to_owned(),
        }),
        [only] => Ok(*only),
        _ => {
            let candidates: Vec<Candidate<'s>> = ids
                .iter()
                .filter_map(|id| store.person(id))
                .map(|p| Candidate {
                    id: &p.id,
                    name: &p.name,
                    birth: p.birth,
                })
                .collect();
            tracing::debug!(name, candidates = candidates.len(), "ambiguous name");
            let answer = disambiguator.choose(name, &candidates)?;
            let picked = answer
                .as_deref()
                .map(str::trim)
                .and_then(|a| ids.iter().copied().find(|id| id.as_str() == a));
            picked.ok_or_else(|| ResolveError::Unresolved {
                name: name.to_owned(),
                answer,
            })
        }
    }
}

/// Interactive disambiguation over a line-oriented reader/writer pair.
///
/// Verbose mode prints
///
/// ```text
/// Which 'Kevin Bacon'?
/// ID: 102, Name: Kevin Bacon, Birth: 1958
/// ID: 9999, Name: Kevin Bacon, Birth:
/// Intended Person ID:
/// ```
///
/// and reads one line. Quiet mode prints nothing and still reads the line.
pub struct PromptDisambiguator<'io, R, W> {
    input: &'io mut R,
    output: &'io mut W,
    quiet: bool,
}

impl<'io, R: BufRead, W: Write> PromptDisambiguator<'io, R, W> {
    pub fn new(input: &'io mut R, output: &'io mut W, quiet: bool) -> Self {
        Self {
            input,
            output,
            quiet,
        }
    }
}

impl<R: BufRead, W: Write> Disambiguator for PromptDisambiguator<'_, R, W> {
    fn choose(
        &mut self,
        name: &str,
        candidates: &[Candidate<'_>],
    ) -> std::io::Result<Option<String>> {
        if !self.quiet {
            writeln!(self.output, "Which '{name}'?")?;
            for c in candidates {
                let birth = c.birth.map(|b| b.to_string()).unwrap_or_default();
                writeln!(self.output, "ID: {}, Name: {}, Birth: {birth}", c.id, c.name)?;
            }
            write!(self.output, "Intended Person ID: ")?;
            self.output.flush()?;
        }
        crate::session::read_line(&mut *self.input)
    }
}

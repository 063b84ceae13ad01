//! Interactive query loop.
//!
//! Each round reads two names, resolves them, runs one query and renders
//! the result, then asks `Try again (Y/N)?`. Any answer other than `y`/`Y`
//! ends the session, as does end of input at any prompt.

use std::io::{BufRead, Write};

use degrees_kernel::GraphStore;
use degrees_search::{SearchError, SearchPolicy};

use crate::render::{json_report, write_quiet_header, write_text};
use crate::resolve::{resolve_person, PromptDisambiguator, ResolveError};
use crate::runner::run_query;

const NAME_PROMPT: &str = "Name: ";
const CONTINUE_PROMPT: &str = "Try again (Y/N)? ";

/// Session configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionOptions {
    /// Suppress prompts and per-hop lines; print the endpoint header instead.
    pub quiet: bool,
    /// Print one JSON report per query instead of text.
    pub json: bool,
    pub policy: SearchPolicy,
}

/// Why a session ended early.
#[derive(Debug)]
pub enum SessionError {
    /// The name at position `ordinal` (1 or 2) did not resolve to a person.
    PersonNotFound { ordinal: u8, cause: ResolveError },
    Search(SearchError),
    Io(std::io::Error),
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PersonNotFound { ordinal, .. } => write!(f, "Person {ordinal} not found."),
            Self::Search(e) => write!(f, "search failed: {e}"),
            Self::Io(e) => write!(f, "session I/O failed: {e}"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::PersonNotFound { cause, .. } => Some(cause),
            Self::Search(e) => Some(e),
            Self::Io(e) => Some(e),
        }
    }
}

impl From<SearchError> for SessionError {
    fn from(err: SearchError) -> Self {
        Self::Search(err)
    }
}

impl From<std::io::Error> for SessionError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

/// Totals for a finished session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub queries: usize,
    pub connected: usize,
}

/// Read one line without its line terminator. `None` at end of input.
pub(crate) fn read_line<R: BufRead + ?Sized>(input: &mut R) -> std::io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(trimmed);
    Ok(Some(line))
}

fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    text: &str,
    quiet: bool,
) -> std::io::Result<Option<String>> {
    if !quiet {
        write!(output, "{text}")?;
        output.flush()?;
    }
    read_line(input)
}

/// Run the query loop until the user stops or input ends.
///
/// # Errors
///
/// - [`SessionError::PersonNotFound`] if a name does not resolve; the session
///   stops at the first such name.
/// - [`SessionError::Search`] if a query fails.
/// - [`SessionError::Io`] if reading or writing fails.
pub fn run_session<R: BufRead, W: Write>(
    store: &GraphStore,
    input: &mut R,
    output: &mut W,
    options: &SessionOptions,
) -> Result<SessionSummary, SessionError> {
    let quiet = options.quiet;
    let digest = options.json.then(|| store.digest());
    let mut summary = SessionSummary::default();

    loop {
        let Some(first) = prompt(input, output, NAME_PROMPT, quiet)? else {
            break;
        };
        let Some(second) = prompt(input, output, NAME_PROMPT, quiet)? else {
            break;
        };

        let origin = resolve_person(
            store,
            &first,
            &mut PromptDisambiguator::new(input, output, quiet),
        )
        .map_err(|cause| SessionError::PersonNotFound { ordinal: 1, cause })?;
        let target = resolve_person(
            store,
            &second,
            &mut PromptDisambiguator::new(input, output, quiet),
        )
        .map_err(|cause| SessionError::PersonNotFound { ordinal: 2, cause })?;

        let report = run_query(store, origin, target, &options.policy)?;
        summary.queries += 1;
        if report.is_connected() {
            summary.connected += 1;
        }

        if let Some(digest) = &digest {
            writeln!(output, "{}", json_report(store, &report, digest))?;
        } else {
            if quiet {
                write_quiet_header(output, &first, origin, &second, target)?;
            }
            write_text(output, store, &report, quiet)?;
            if quiet {
                writeln!(output)?;
            }
        }

        let again = prompt(input, output, CONTINUE_PROMPT, quiet)?;
        if !again.is_some_and(|a| a.trim().eq_ignore_ascii_case("y")) {
            break;
        }
    }

    tracing::debug!(
        queries = summary.queries,
        connected = summary.connected,
        "session ended"
    );
    Ok(summary)
}

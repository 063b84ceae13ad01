//! Text and JSON rendering of query results.

use std::io::Write;

use degrees_kernel::digest::ContentHash;
use degrees_kernel::{GraphStore, MovieId, PersonId};

use crate::runner::QueryReport;

/// Display name for `id`, falling back to the id itself.
fn person_name<'a>(store: &'a GraphStore, id: &'a PersonId) -> &'a str {
    store.person(id).map_or(id.as_str(), |p| p.name.as_str())
}

fn movie_title<'a>(store: &'a GraphStore, id: &'a MovieId) -> &'a str {
    store.movie(id).map_or(id.as_str(), |m| m.title.as_str())
}

/// Quiet-mode header naming both endpoints as the user typed them:
/// `Kevin Bacon (ID: 102) - Tom Hanks (ID: 158)`.
///
/// # Errors
///
/// Returns any error from `out`.
pub fn write_quiet_header<W: Write>(
    out: &mut W,
    origin_input: &str,
    origin: &PersonId,
    target_input: &str,
    target: &PersonId,
) -> std::io::Result<()> {
    writeln!(
        out,
        "{origin_input} (ID: {origin}) - {target_input} (ID: {target})"
    )
}

/// Human-readable result.
///
/// `Not connected.` when there is no path, otherwise
/// `N degrees of separation.` followed, unless `quiet`, by one line per hop:
/// `1: Kevin Bacon and Tom Hanks starred in Apollo 13`.
///
/// # Errors
///
/// Returns any error from `out`.
pub fn write_text<W: Write>(
    out: &mut W,
    store: &GraphStore,
    report: &QueryReport,
    quiet: bool,
) -> std::io::Result<()> {
    let Some(path) = &report.outcome.path else {
        return writeln!(out, "Not connected.");
    };
    writeln!(out, "{} degrees of separation.", path.degrees())?;
    if quiet {
        return Ok(());
    }
    for (i, (movie, from, to)) in path.hops(&report.origin).enumerate() {
        writeln!(
            out,
            "{}: {} and {} starred in {}",
            i + 1,
            person_name(store, from),
            person_name(store, to),
            movie_title(store, movie),
        )?;
    }
    Ok(())
}

/// Machine-readable report for one query, bound to the dataset digest.
#[must_use]
pub fn json_report(
    store: &GraphStore,
    report: &QueryReport,
    dataset_digest: &ContentHash,
) -> serde_json::Value {
    let steps: Vec<serde_json::Value> = report
        .outcome
        .path
        .iter()
        .flat_map(|path| path.steps.iter())
        .map(|step| {
            serde_json::json!({
                "movie": step.movie.as_str(),
                "title": movie_title(store, &step.movie),
                "person": step.person.as_str(),
                "name": person_name(store, &step.person),
            })
        })
        .collect();

    serde_json::json!({
        "dataset_digest": dataset_digest.as_str(),
        "origin": {
            "id": report.origin.as_str(),
            "name": person_name(store, &report.origin),
        },
        "target": {
            "id": report.target.as_str(),
            "name": person_name(store, &report.target),
        },
        "connected": report.is_connected(),
        "degrees": report.outcome.degrees(),
        "path": report.outcome.path.as_ref().map(|_| steps),
        "policy": {
            "frontier": report.policy.frontier.as_str(),
            "revisit": report.policy.revisit.as_str(),
            "max_expansions": report.policy.max_expansions,
        },
        "stats": report.outcome.stats.to_json_value(),
    })
}

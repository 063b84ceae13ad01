//! Binary that runs the fixed query list over a dataset directory and
//! prints deterministic `key=value` lines for cross-process verification.
//!
//! Usage: `query_fixture <dataset_dir>`

use degrees_kernel::load::load_dir;
use degrees_kernel::PersonId;
use degrees_search::{search, SearchPolicy};
use lock_tests::FIXTURE_QUERIES;

fn main() {
    let dir = std::env::args()
        .nth(1)
        .expect("usage: query_fixture <dataset_dir>");
    let (store, summary) = load_dir(&dir).expect("dataset loads");

    println!("dataset_digest={}", store.digest());
    println!("people={}", summary.people);
    println!("movies={}", summary.movies);
    println!("appearances={}", summary.appearances);

    for (origin, target) in FIXTURE_QUERIES {
        let outcome = search(
            &store,
            &PersonId::from(*origin),
            &PersonId::from(*target),
            &SearchPolicy::default(),
        )
        .expect("fixture query succeeds");
        let path = outcome.path.as_ref().map_or_else(
            || "none".to_owned(),
            |p| {
                p.steps
                    .iter()
                    .map(|s| format!("{}:{}", s.movie, s.person))
                    .collect::<Vec<_>>()
                    .join(",")
            },
        );
        println!(
            "query={origin}->{target} termination={} expansions={} nodes={} path={path}",
            outcome.stats.termination.as_str(),
            outcome.stats.expansions,
            outcome.stats.nodes_created,
        );
    }
}

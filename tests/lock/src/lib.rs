//! Shared helpers for the lock tests: fixture paths and an independent
//! reference distance computation.

#![forbid(unsafe_code)]

use std::collections::{HashMap, VecDeque};
use std::path::PathBuf;

use degrees_kernel::load::load_dir;
use degrees_kernel::{GraphStore, PersonId};

/// Queries run by the `query_fixture` binary, as `(origin, target)` ids
/// into the `small` fixture.
pub const FIXTURE_QUERIES: &[(&str, &str)] = &[
    ("102", "158"),
    ("144", "102"),
    ("163", "398"),
    ("129", "158"),
    ("102", "914612"),
    ("705", "705"),
];

/// Absolute path of the workspace root.
///
/// # Panics
///
/// Panics if the crate is not two levels below the workspace root.
#[must_use]
pub fn workspace_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .and_then(std::path::Path::parent)
        .expect("tests/lock lives two levels below the workspace root")
        .to_path_buf()
}

/// Absolute path of the `small` CSV fixture.
#[must_use]
pub fn small_fixture_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures/small")
}

/// Load the `small` fixture.
///
/// # Panics
///
/// Panics if the fixture cannot be loaded. Test-only invariant.
#[must_use]
pub fn load_small() -> GraphStore {
    load_dir(small_fixture_dir())
        .expect("small fixture loads")
        .0
}

/// Unweighted person-to-person distance by plain BFS over co-star edges,
/// without any of the search crate's machinery.
#[must_use]
pub fn reference_distance(store: &GraphStore, origin: &PersonId, target: &PersonId) -> Option<usize> {
    let mut dist: HashMap<&PersonId, usize> = HashMap::new();
    let mut queue = VecDeque::new();
    dist.insert(origin, 0);
    queue.push_back(origin);
    while let Some(current) = queue.pop_front() {
        let d = dist[current];
        if current == target {
            return Some(d);
        }
        for movie in store.person_movies(current).into_iter().flatten() {
            for star in store.movie_stars(movie).into_iter().flatten() {
                if !dist.contains_key(star) {
                    dist.insert(star, d + 1);
                    queue.push_back(star);
                }
            }
        }
    }
    None
}

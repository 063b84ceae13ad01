//! End-to-end queries over the `small` CSV fixture.

use degrees_harness::render::write_text;
use degrees_harness::runner::run_query;
use degrees_kernel::load::load_dir;
use degrees_kernel::PersonId;
use degrees_search::{shortest_path, SearchPolicy, TerminationReason};
use lock_tests::{load_small, small_fixture_dir};

fn pairs(origin: &str, target: &str) -> Option<Vec<(String, String)>> {
    let store = load_small();
    shortest_path(&store, &PersonId::from(origin), &PersonId::from(target))
        .unwrap()
        .map(|p| {
            p.steps
                .iter()
                .map(|s| (s.movie.to_string(), s.person.to_string()))
                .collect()
        })
}

fn owned(v: &[(&str, &str)]) -> Vec<(String, String)> {
    v.iter().map(|(m, p)| ((*m).to_owned(), (*p).to_owned())).collect()
}

#[test]
fn fixture_loads_completely() {
    let (store, summary) = load_dir(small_fixture_dir()).unwrap();
    assert_eq!(summary.people, 16);
    assert_eq!(summary.movies, 5);
    assert_eq!(summary.appearances, 20);
    assert_eq!(summary.skipped_appearances, 0);
    assert_eq!(store.appearance_count(), 20);
    assert_eq!(
        store.person_ids_for_name("KEVIN BACON"),
        vec![&PersonId::from("102")]
    );
}

#[test]
fn kevin_bacon_to_tom_hanks_is_one_hop() {
    assert_eq!(pairs("102", "158"), Some(owned(&[("112384", "158")])));
}

#[test]
fn cary_elwes_to_kevin_bacon_is_three_hops() {
    assert_eq!(
        pairs("144", "102"),
        Some(owned(&[
            ("93779", "705"),
            ("109830", "158"),
            ("112384", "102"),
        ]))
    );
}

#[test]
fn emma_watson_is_not_connected() {
    assert_eq!(pairs("102", "914612"), None);
    assert_eq!(pairs("914612", "102"), None);
}

#[test]
fn dustin_hoffman_to_sally_field_renders_four_hops() {
    let store = load_small();
    let report = run_query(
        &store,
        &PersonId::from("163"),
        &PersonId::from("398"),
        &SearchPolicy::default(),
    )
    .unwrap();
    assert_eq!(
        report.outcome.stats.termination,
        TerminationReason::GoalReached { degrees: 4 }
    );

    let mut out = Vec::new();
    write_text(&mut out, &store, &report, false).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "4 degrees of separation.\n\
         1: Dustin Hoffman and Tom Cruise starred in Rain Man\n\
         2: Tom Cruise and Kevin Bacon starred in A Few Good Men\n\
         3: Kevin Bacon and Tom Hanks starred in Apollo 13\n\
         4: Tom Hanks and Sally Field starred in Forrest Gump\n"
    );
}

#[test]
fn every_pair_matches_reference_distance_and_is_valid() {
    let store = load_small();
    let ids: Vec<PersonId> = store.people().map(|p| p.id.clone()).collect();
    for origin in &ids {
        for target in &ids {
            let path = shortest_path(&store, origin, target).unwrap();
            let expected = lock_tests::reference_distance(&store, origin, target);
            assert_eq!(
                path.as_ref().map(degrees_search::Path::degrees),
                expected,
                "{origin} -> {target}"
            );
            if let Some(path) = path {
                path.validate(&store, origin).unwrap();
                assert_eq!(path.last_person().unwrap_or(origin), target);
            }
        }
    }
}

//! Optimality and validity of search results on synthetic graphs, checked
//! against an independent BFS.

use degrees_kernel::synthetic::{chain, disjoint_pair, person_id, random_bipartite, RandomGraphConfig};
use degrees_search::{search, shortest_path, FrontierKind, RevisitPolicy, SearchPolicy, TerminationReason};
use lock_tests::reference_distance;

fn configs() -> Vec<RandomGraphConfig> {
    [1_u64, 7, 42, 0x5eed, 9001]
        .into_iter()
        .map(|seed| RandomGraphConfig {
            people: 60,
            movies: 25,
            cast_size: 3,
            seed,
        })
        .collect()
}

#[test]
fn breadth_first_is_optimal_on_random_graphs() {
    for config in configs() {
        let store = random_bipartite(config);
        let origin = person_id(0);
        for i in 0..config.people {
            let target = person_id(i);
            let path = shortest_path(&store, &origin, &target).unwrap();
            let expected = reference_distance(&store, &origin, &target);
            assert_eq!(
                path.as_ref().map(degrees_search::Path::degrees),
                expected,
                "seed {} target {target}",
                config.seed
            );
            if let Some(path) = path {
                path.validate(&store, &origin).unwrap();
            }
        }
    }
}

#[test]
fn revisit_policies_return_identical_paths() {
    let allow = SearchPolicy {
        revisit: RevisitPolicy::AllowRevisits,
        max_expansions: Some(20_000),
        ..SearchPolicy::default()
    };
    for config in configs() {
        let store = random_bipartite(config);
        let origin = person_id(1);
        for i in (0..config.people).step_by(7) {
            let target = person_id(i);
            let skip = search(&store, &origin, &target, &SearchPolicy::default()).unwrap();
            let revisit = search(&store, &origin, &target, &allow).unwrap();
            if revisit.stats.termination == TerminationReason::ExpansionBudgetExceeded {
                // Unconnected pairs (and very deep ones) only end at the budget.
                assert!(revisit.path.is_none());
                continue;
            }
            assert_eq!(skip.path, revisit.path, "seed {} target {target}", config.seed);
        }
    }
}

#[test]
fn depth_first_paths_are_valid_but_not_shorter() {
    let policy = SearchPolicy {
        frontier: FrontierKind::Stack,
        ..SearchPolicy::default()
    };
    for config in configs() {
        let store = random_bipartite(config);
        let origin = person_id(2);
        for i in 0..config.people {
            let target = person_id(i);
            let dfs = search(&store, &origin, &target, &policy).unwrap().path;
            let expected = reference_distance(&store, &origin, &target);
            assert_eq!(dfs.is_some(), expected.is_some());
            if let (Some(path), Some(best)) = (dfs, expected) {
                path.validate(&store, &origin).unwrap();
                assert!(path.degrees() >= best);
            }
        }
    }
}

#[test]
fn chain_distance_is_index_difference() {
    let store = chain(30);
    for (a, b) in [(0, 29), (29, 0), (5, 6), (10, 20), (3, 3)] {
        let path = shortest_path(&store, &person_id(a), &person_id(b))
            .unwrap()
            .unwrap();
        assert_eq!(path.degrees(), a.abs_diff(b));
    }
}

#[test]
fn disjoint_components_exhaust_the_frontier() {
    let store = disjoint_pair(12);
    let outcome = search(&store, &person_id(0), &person_id(12), &SearchPolicy::default()).unwrap();
    assert!(outcome.path.is_none());
    assert_eq!(outcome.stats.termination, TerminationReason::FrontierExhausted);
    assert_eq!(outcome.stats.frontier_remaining, 0);
    // Every person of the first chain is expanded exactly once.
    assert_eq!(outcome.stats.expansions, 12);
}

#[test]
fn search_is_repeatable_within_a_process() {
    let store = random_bipartite(RandomGraphConfig::default());
    let first = search(&store, &person_id(0), &person_id(40), &SearchPolicy::default()).unwrap();
    for _ in 0..5 {
        let again = search(&store, &person_id(0), &person_id(40), &SearchPolicy::default()).unwrap();
        assert_eq!(first, again);
    }
}

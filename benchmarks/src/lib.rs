//! Shared helpers for degrees benchmark suites.

use degrees_kernel::synthetic::{chain, disjoint_pair, person_id, random_bipartite, RandomGraphConfig};
use degrees_kernel::{GraphStore, PersonId};

/// A store plus one query that exercises a particular search shape.
pub struct Regime {
    pub name: &'static str,
    pub store: GraphStore,
    pub origin: PersonId,
    pub target: PersonId,
}

/// Long path, tiny branching factor.
#[must_use]
pub fn regime_long_chain() -> Regime {
    Regime {
        name: "long_chain",
        store: chain(2_000),
        origin: person_id(0),
        target: person_id(1_999),
    }
}

/// Dense random cast graph; many duplicate neighbors per expansion.
#[must_use]
pub fn regime_dense_random() -> Regime {
    Regime {
        name: "dense_random",
        store: random_bipartite(RandomGraphConfig {
            people: 3_000,
            movies: 1_500,
            cast_size: 8,
            seed: 0x5eed,
        }),
        origin: person_id(0),
        target: person_id(2_999),
    }
}

/// Sparse random graph; frontier grows wide before contact.
#[must_use]
pub fn regime_sparse_random() -> Regime {
    Regime {
        name: "sparse_random",
        store: random_bipartite(RandomGraphConfig {
            people: 5_000,
            movies: 2_000,
            cast_size: 3,
            seed: 42,
        }),
        origin: person_id(1),
        target: person_id(4_998),
    }
}

/// Target in another component: the whole origin component is expanded.
#[must_use]
pub fn regime_dead_end() -> Regime {
    Regime {
        name: "dead_end",
        store: disjoint_pair(2_000),
        origin: person_id(0),
        target: person_id(2_000),
    }
}

/// Every regime, in report order.
#[must_use]
pub fn all_regimes() -> Vec<Regime> {
    vec![
        regime_long_chain(),
        regime_dense_random(),
        regime_sparse_random(),
        regime_dead_end(),
    ]
}

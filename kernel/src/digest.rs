//! Dataset content digests.
//!
//! A digest is SHA-256 over a domain prefix followed by a length-prefixed
//! rendering of every person, movie and appearance in id order. Two stores
//! with the same content always produce the same digest regardless of the
//! row order of the files they were loaded from.

use sha2::{Digest, Sha256};

use crate::store::GraphStore;

/// Domain prefix for dataset digests. Null-terminated.
pub const DOMAIN_DATASET: &[u8] = b"DEGREES::DATASET::V1\0";

/// A content-addressed hash with algorithm identifier.
///
/// Format: `"algorithm:hex_digest"` (e.g., `"sha256:abcdef..."`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentHash {
    full: String,
    colon: usize,
}

impl ContentHash {
    /// Parse from `"algorithm:hex"` format.
    ///
    /// Returns `None` if the separator is missing or either side is empty.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let colon = s.find(':')?;
        if colon == 0 || colon == s.len() - 1 {
            return None;
        }
        Some(Self {
            full: s.to_string(),
            colon,
        })
    }

    #[must_use]
    pub fn algorithm(&self) -> &str {
        &self.full[..self.colon]
    }

    #[must_use]
    pub fn hex_digest(&self) -> &str {
        &self.full[self.colon + 1..]
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.full
    }
}

impl std::fmt::Display for ContentHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.full)
    }
}

/// Hash `data` under `domain`. Result format: `"sha256:<hex>"`.
#[must_use]
pub fn canonical_hash(domain: &[u8], data: &[u8]) -> ContentHash {
    let mut hasher = Sha256::new();
    hasher.update(domain);
    hasher.update(data);
    let hex = hex::encode(hasher.finalize());
    let colon = "sha256".len();
    ContentHash {
        full: format!("sha256:{hex}"),
        colon,
    }
}

impl GraphStore {
    /// Content digest of the whole store.
    #[must_use]
    pub fn digest(&self) -> ContentHash {
        canonical_hash(DOMAIN_DATASET, &canonical_bytes(self))
    }
}

fn canonical_bytes(store: &GraphStore) -> Vec<u8> {
    let mut buf = Vec::new();
    for person in store.people() {
        buf.push(b'P');
        put_str(&mut buf, person.id.as_str());
        put_str(&mut buf, &person.name);
        put_year(&mut buf, person.birth);
    }
    for movie in store.movies() {
        buf.push(b'M');
        put_str(&mut buf, movie.id.as_str());
        put_str(&mut buf, &movie.title);
        put_year(&mut buf, movie.year);
        for star in &movie.stars {
            buf.push(b'S');
            put_str(&mut buf, star.as_str());
        }
    }
    buf
}

fn put_str(buf: &mut Vec<u8>, s: &str) {
    buf.extend_from_slice(&(s.len() as u64).to_le_bytes());
    buf.extend_from_slice(s.as_bytes());
}

fn put_year(buf: &mut Vec<u8>, year: Option<u16>) {
    match year {
        Some(y) => {
            buf.push(1);
            buf.extend_from_slice(&y.to_le_bytes());
        }
        None => buf.push(0),
    }
}

//! Identifier newtypes for people and movies.
//!
//! Both are opaque strings (IMDb-style numeric ids in the shipped datasets).
//! Ordering is byte-lexicographic on the identifier text; every ordered
//! collection in the store iterates in this order, which is what makes
//! neighbor enumeration and tie-breaking reproducible.

use std::borrow::Borrow;
use std::fmt;

/// Unique key of a person in the graph store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PersonId(String);

/// Unique key of a movie in the graph store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MovieId(String);

macro_rules! string_id {
    ($ty:ident) => {
        impl $ty {
            /// Wrap a raw identifier. Surrounding whitespace is trimmed.
            #[must_use]
            pub fn new(raw: impl Into<String>) -> Self {
                let raw: String = raw.into();
                let trimmed = raw.trim();
                if trimmed.len() == raw.len() {
                    Self(raw)
                } else {
                    Self(trimmed.to_string())
                }
            }

            /// The identifier text.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $ty {
            fn from(raw: &str) -> Self {
                Self::new(raw)
            }
        }

        impl From<String> for $ty {
            fn from(raw: String) -> Self {
                Self::new(raw)
            }
        }

        impl Borrow<str> for $ty {
            fn borrow(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id!(PersonId);
string_id!(MovieId);

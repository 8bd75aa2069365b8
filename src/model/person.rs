//! Person — a node in the co-starring graph.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::MovieId;

/// Opaque person identifier (the `id` column of `people.csv`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(pub String);

impl std::fmt::Display for PersonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PersonId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for PersonId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A person and the movies they starred in. Immutable after dataset build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    /// Birth year; absent in the source data for many people.
    pub birth: Option<u16>,
    /// Movie ids this person appears in. Deduplicated, unordered.
    pub movies: SmallVec<[MovieId; 4]>,
}

impl Person {
    pub fn new(id: impl Into<PersonId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            birth: None,
            movies: SmallVec::new(),
        }
    }

    pub fn with_birth(mut self, birth: u16) -> Self {
        self.birth = Some(birth);
        self
    }
}

//! Movie — a hyperedge connecting its cast.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::PersonId;

/// Opaque movie identifier (the `id` column of `movies.csv`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(pub String);

impl std::fmt::Display for MovieId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for MovieId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for MovieId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A movie and its cast. Immutable after dataset build.
///
/// Cast membership is symmetric with [`Person::movies`](super::Person):
/// a movie lists a person iff that person lists the movie. The builder
/// maintains this; the search assumes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub year: Option<u16>,
    /// Person ids starring in this movie. Deduplicated, unordered.
    pub stars: SmallVec<[PersonId; 8]>,
}

impl Movie {
    pub fn new(id: impl Into<MovieId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            year: None,
            stars: SmallVec::new(),
        }
    }

    pub fn with_year(mut self, year: u16) -> Self {
        self.year = Some(year);
        self
    }
}

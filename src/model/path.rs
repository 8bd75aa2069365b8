//! Path — a sequence of (movie, person) hops from a source to a target.

use serde::{Deserialize, Serialize};

use super::{MovieId, PersonId};

/// One step of a connection: the movie shared with the previous person,
/// and the person reached through it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hop {
    pub movie: MovieId,
    pub person: PersonId,
}

impl Hop {
    pub fn new(movie: impl Into<MovieId>, person: impl Into<PersonId>) -> Self {
        Self { movie: movie.into(), person: person.into() }
    }
}

/// An ordered sequence of hops in source→target order.
///
/// The source person is not a hop: a path of length N connects the source
/// to `hops[N-1].person` through N shared movies, so `len()` is exactly the
/// degrees of separation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path {
    pub hops: Vec<Hop>,
}

impl Path {
    pub fn new(hops: Vec<Hop>) -> Self {
        Self { hops }
    }

    /// Number of hops — the degrees of separation.
    pub fn len(&self) -> usize {
        self.hops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hops.is_empty()
    }

    /// The final person reached, i.e. the search target.
    pub fn end(&self) -> Option<&PersonId> {
        self.hops.last().map(|hop| &hop.person)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Hop> {
        self.hops.iter()
    }
}

impl IntoIterator for Path {
    type Item = Hop;
    type IntoIter = std::vec::IntoIter<Hop>;

    fn into_iter(self) -> Self::IntoIter {
        self.hops.into_iter()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Hop;
    type IntoIter = std::slice::Iter<'a, Hop>;

    fn into_iter(self) -> Self::IntoIter {
        self.hops.iter()
    }
}

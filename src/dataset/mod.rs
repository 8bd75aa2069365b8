//! # Dataset — the immutable in-memory store
//!
//! Person and movie records plus the two indexes the search needs:
//! person → movies starred in, movie → cast. Built once through
//! [`DatasetBuilder`], read-only afterwards. There is no interior
//! mutability: independent searches may share a `Dataset` across threads
//! freely.
//!
//! The builder is the single place the person↔movie symmetry invariant is
//! maintained: a person lists a movie iff that movie lists the person.
//! Membership records referencing an unknown person or movie are dropped
//! (logged at debug level), never fatal.

pub mod loader;

use hashbrown::HashMap;
use smallvec::SmallVec;
use tracing::{debug, info};

use crate::model::{Movie, MovieId, Person, PersonId};

// ============================================================================
// Dataset
// ============================================================================

/// Read-only view of the co-starring graph.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    people: HashMap<PersonId, Person>,
    movies: HashMap<MovieId, Movie>,
    /// Lowercased name → person ids carrying that name.
    names: HashMap<String, SmallVec<[PersonId; 1]>>,
}

impl Dataset {
    pub fn builder() -> DatasetBuilder {
        DatasetBuilder::new()
    }

    pub fn person(&self, id: &PersonId) -> Option<&Person> {
        self.people.get(id)
    }

    pub fn movie(&self, id: &MovieId) -> Option<&Movie> {
        self.movies.get(id)
    }

    pub fn contains_person(&self, id: &PersonId) -> bool {
        self.people.contains_key(id)
    }

    /// Movies the person appears in; empty for an unknown id.
    pub fn memberships_of(&self, id: &PersonId) -> &[MovieId] {
        self.people.get(id).map(|p| p.movies.as_slice()).unwrap_or(&[])
    }

    /// Cast of the movie; empty for an unknown id.
    pub fn members_of(&self, id: &MovieId) -> &[PersonId] {
        self.movies.get(id).map(|m| m.stars.as_slice()).unwrap_or(&[])
    }

    /// Person ids whose name matches exactly, case-insensitively.
    pub fn people_named(&self, name: &str) -> &[PersonId] {
        self.names
            .get(&name.to_lowercase())
            .map(|ids| ids.as_slice())
            .unwrap_or(&[])
    }

    pub fn person_count(&self) -> usize {
        self.people.len()
    }

    pub fn movie_count(&self) -> usize {
        self.movies.len()
    }

    pub fn people(&self) -> impl Iterator<Item = &Person> {
        self.people.values()
    }

    pub fn movies(&self) -> impl Iterator<Item = &Movie> {
        self.movies.values()
    }
}

// ============================================================================
// DatasetBuilder
// ============================================================================

/// The only mutation point of a [`Dataset`].
///
/// Insert people and movies first, then wire memberships; `build()` freezes
/// the result.
#[derive(Debug, Default)]
pub struct DatasetBuilder {
    people: HashMap<PersonId, Person>,
    movies: HashMap<MovieId, Movie>,
    names: HashMap<String, SmallVec<[PersonId; 1]>>,
    dropped_memberships: u64,
}

impl DatasetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a person and index their name. Re-inserting an id replaces
    /// the previous record.
    pub fn add_person(&mut self, person: Person) {
        let ids = self.names.entry(person.name.to_lowercase()).or_default();
        if !ids.contains(&person.id) {
            ids.push(person.id.clone());
        }
        self.people.insert(person.id.clone(), person);
    }

    pub fn add_movie(&mut self, movie: Movie) {
        self.movies.insert(movie.id.clone(), movie);
    }

    /// Wire a person into a movie's cast, symmetrically. Returns `false`
    /// and drops the record when either side is unknown.
    pub fn add_membership(&mut self, person: &PersonId, movie: &MovieId) -> bool {
        let (Some(p), Some(m)) = (self.people.get_mut(person), self.movies.get_mut(movie))
        else {
            debug!(%person, %movie, "dropping membership with unknown reference");
            self.dropped_memberships += 1;
            return false;
        };

        // Dedup on insert keeps set semantics.
        if !p.movies.contains(movie) {
            p.movies.push(movie.clone());
        }
        if !m.stars.contains(person) {
            m.stars.push(person.clone());
        }
        true
    }

    pub fn build(self) -> Dataset {
        info!(
            people = self.people.len(),
            movies = self.movies.len(),
            dropped_memberships = self.dropped_memberships,
            "dataset built"
        );
        Dataset {
            people: self.people,
            movies: self.movies,
            names: self.names,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

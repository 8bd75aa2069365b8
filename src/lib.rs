//! # degrees-rs — Degrees-of-Separation Search
//!
//! Shortest connection between two people in an undirected, unweighted
//! co-starring graph: people are nodes, movies are hyperedges over their
//! cast, and a connection is a chain of shared movies. The search is plain
//! breadth-first, so the returned chain always has the minimum hop count.
//!
//! ## Design Principles
//!
//! 1. **Immutable dataset**: built once through `DatasetBuilder`, read-only
//!    afterwards — no global registries, no locks
//! 2. **Clean DTOs**: `Person`, `Movie`, `Path` cross all boundaries
//! 3. **Search owns nothing**: `shortest_path` is a pure function of the
//!    dataset; all traversal state lives and dies inside one call
//! 4. **"Not connected" is not an error**: the search returns `Option`,
//!    and `Error` only covers loading
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use degrees_rs::Degrees;
//!
//! # fn example() -> degrees_rs::Result<()> {
//! let degrees = Degrees::from_csv_dir("large")?;
//!
//! match degrees.shortest_path(&"102".into(), &"129".into()) {
//!     Some(path) => println!("{} degrees of separation.", path.len()),
//!     None => println!("Not connected."),
//! }
//! # Ok(())
//! # }
//! ```

// ============================================================================
// Modules
// ============================================================================

pub mod dataset;
pub mod model;
pub mod names;
pub mod search;

// ============================================================================
// Re-exports: Model (the DTOs)
// ============================================================================

pub use model::{Hop, Movie, MovieId, Path, Person, PersonId};

// ============================================================================
// Re-exports: Dataset
// ============================================================================

pub use dataset::{Dataset, DatasetBuilder};

// ============================================================================
// Re-exports: Name resolution
// ============================================================================

pub use names::{resolve, NameMatch};

// ============================================================================
// Top-level handle
// ============================================================================

/// The primary entry point. A `Degrees` wraps a loaded dataset and provides
/// the shortest-connection search.
pub struct Degrees {
    dataset: Dataset,
}

impl Degrees {
    /// Wrap an already-built dataset.
    pub fn with_dataset(dataset: Dataset) -> Self {
        Self { dataset }
    }

    /// Load `people.csv`, `movies.csv` and `stars.csv` from a directory.
    pub fn from_csv_dir(dir: impl AsRef<std::path::Path>) -> Result<Self> {
        Ok(Self::with_dataset(dataset::loader::load_dir(dir)?))
    }

    /// Minimal chain of shared movies from `source` to `target`, or `None`
    /// when they are not connected. See [`search::shortest_path`] for the
    /// self-query quirk.
    pub fn shortest_path(&self, source: &PersonId, target: &PersonId) -> Option<Path> {
        search::shortest_path(&self.dataset, source, target)
    }

    /// Resolve a human-typed name to person-id candidates.
    pub fn resolve(&self, name: &str) -> NameMatch {
        names::resolve(&self.dataset, name)
    }

    /// Access the underlying dataset (for presentation-layer lookups).
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }
}

// ============================================================================
// Error Types
// ============================================================================

/// Load-time failures. "Not connected" and name-resolution misses are
/// ordinary outcomes, not errors, and never appear here.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

//! Name → person-id resolution.
//!
//! Names are not unique in the source data, so a lookup has three outcomes
//! rather than an `Option`. Matching is exact and case-insensitive; there
//! is deliberately no fuzzy matching. Choosing among ambiguous candidates
//! is the caller's problem (the CLI prompts the user).

use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;
use crate::model::PersonId;

/// Outcome of resolving a typed name against the dataset's name index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NameMatch {
    /// No person carries this name.
    NotFound,
    /// Exactly one person carries this name.
    Unique(PersonId),
    /// Several people carry this name; all candidates, in index order.
    Ambiguous(Vec<PersonId>),
}

/// Resolve a human-typed name to person-id candidates.
pub fn resolve(dataset: &Dataset, name: &str) -> NameMatch {
    match dataset.people_named(name) {
        [] => NameMatch::NotFound,
        [id] => NameMatch::Unique(id.clone()),
        ids => NameMatch::Ambiguous(ids.to_vec()),
    }
}

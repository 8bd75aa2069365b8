//! # Co-starring Graph Model
//!
//! Clean DTOs for the person↔film bipartite graph.
//! These types cross every boundary: loader ↔ dataset ↔ search ↔ user.
//!
//! Design rule: NO csv types, NO loader state here.
//! This module is pure data — no I/O, no state.

pub mod movie;
pub mod path;
pub mod person;

pub use movie::{Movie, MovieId};
pub use path::{Hop, Path};
pub use person::{Person, PersonId};

//! # Shortest-connection search
//!
//! Breadth-first search over the co-starring graph: the frontier is a FIFO
//! queue of search nodes, so nodes are expanded in non-decreasing distance
//! from the source and the first node matching the target is on a minimal
//! path. Search nodes live in an arena indexed by insertion order; a node
//! records the arena index of its parent and the movie used to reach it,
//! and the path is rebuilt by walking those parent indexes backwards.
//!
//! All per-search state (arena, frontier, visited set) is owned by one
//! [`shortest_path`] call. The dataset is only read, so independent
//! searches can run concurrently against a shared `&Dataset`.

use std::collections::VecDeque;

use hashbrown::HashSet;
use tracing::debug;

use crate::dataset::Dataset;
use crate::model::{Hop, MovieId, Path, PersonId};

// ============================================================================
// Neighbor resolver
// ============================================================================

/// Every `(movie, co-star)` pair reachable from `person` through one shared
/// movie.
///
/// The result is a set: a pair of people sharing k movies yields k distinct
/// pairs, one per movie. Note that `person` itself appears in the result,
/// paired with each of its own movies — the search engine's visited check is
/// the single place that self-pair (and any other revisit) is excluded.
pub fn neighbors(dataset: &Dataset, person: &PersonId) -> HashSet<(MovieId, PersonId)> {
    let mut pairs = HashSet::new();
    for movie in dataset.memberships_of(person) {
        for star in dataset.members_of(movie) {
            pairs.insert((movie.clone(), star.clone()));
        }
    }
    pairs
}

// ============================================================================
// Frontier / search nodes
// ============================================================================

/// One traversal step: the person reached, the arena index of the node that
/// discovered them, and the movie used to get there. Parent and action are
/// `None` only for the root.
#[derive(Debug)]
struct SearchNode {
    state: PersonId,
    parent: Option<usize>,
    action: Option<MovieId>,
}

/// FIFO queue of arena indexes, with a side set of queued states so the
/// "already in frontier" test is O(1) instead of a queue scan.
#[derive(Debug, Default)]
struct Frontier {
    queue: VecDeque<usize>,
    states: HashSet<PersonId>,
}

impl Frontier {
    fn push(&mut self, index: usize, state: &PersonId) {
        self.queue.push_back(index);
        self.states.insert(state.clone());
    }

    /// Dequeue the earliest-inserted node. The popped state leaves the side
    /// set; the caller marks it visited.
    fn pop(&mut self, arena: &[SearchNode]) -> Option<usize> {
        let index = self.queue.pop_front()?;
        self.states.remove(&arena[index].state);
        Some(index)
    }

    fn contains(&self, state: &PersonId) -> bool {
        self.states.contains(state)
    }
}

// ============================================================================
// Path search engine
// ============================================================================

/// Find a minimal chain of shared movies connecting `source` to `target`.
///
/// Returns `None` when the two are in disconnected components — a
/// first-class outcome, not an error. Both ids are assumed to exist in the
/// dataset; an unknown id simply has no neighbors and yields `None`.
///
/// Quirk, kept deliberately: `shortest_path(x, x)` returns `None` rather
/// than a zero-length path. The root is marked visited before expansion, so
/// its self-pairs are skipped and the target can never be re-discovered.
pub fn shortest_path(dataset: &Dataset, source: &PersonId, target: &PersonId) -> Option<Path> {
    let mut arena = vec![SearchNode { state: source.clone(), parent: None, action: None }];
    let mut frontier = Frontier::default();
    frontier.push(0, source);
    let mut visited: HashSet<PersonId> = HashSet::new();

    while let Some(index) = frontier.pop(&arena) {
        let current = arena[index].state.clone();
        visited.insert(current.clone());

        for (movie, candidate) in neighbors(dataset, &current) {
            // Skipping visited states also drops the self-pair: `current`
            // entered `visited` just above.
            if visited.contains(&candidate) || frontier.contains(&candidate) {
                continue;
            }

            let node = SearchNode {
                state: candidate,
                parent: Some(index),
                action: Some(movie),
            };

            // First match at this depth is minimal; stop immediately.
            if node.state == *target {
                debug!(expanded = visited.len(), "target reached");
                return Some(reconstruct(&arena, node));
            }

            let state = node.state.clone();
            arena.push(node);
            frontier.push(arena.len() - 1, &state);
        }
    }

    debug!(expanded = visited.len(), "frontier exhausted, no connection");
    None
}

/// Walk parent indexes from `tail` back to the root, collecting one hop per
/// non-root node, then reverse into source→target order.
fn reconstruct(arena: &[SearchNode], tail: SearchNode) -> Path {
    let mut hops = Vec::new();
    let mut node = &tail;
    while let (Some(movie), Some(parent)) = (&node.action, node.parent) {
        hops.push(Hop { movie: movie.clone(), person: node.state.clone() });
        node = &arena[parent];
    }
    hops.reverse();
    Path::new(hops)
}

// ============================================================================
// Tests
// ============================================================================

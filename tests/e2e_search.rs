//! End-to-end search tests against a builder-constructed dataset.
//!
//! Each test exercises: build dataset -> shortest_path -> inspect hops.

use degrees_rs::{Dataset, Degrees, Hop, Movie, Person, PersonId};
use pretty_assertions::assert_eq;

// ============================================================================
// Helper: wire a dataset from (movie, cast) tuples.
// ============================================================================

fn dataset(memberships: &[(&str, &[&str])]) -> Dataset {
    let mut b = Dataset::builder();
    for (movie, cast) in memberships {
        b.add_movie(Movie::new(*movie, format!("Movie {movie}")));
        for person in *cast {
            b.add_person(Person::new(*person, format!("Person {person}")));
        }
    }
    for (movie, cast) in memberships {
        for person in *cast {
            assert!(b.add_membership(&(*person).into(), &(*movie).into()));
        }
    }
    b.build()
}

/// Check every hop is a genuine co-membership and the chain ends at `target`.
fn assert_valid(ds: &Dataset, source: &str, target: &str, path: &degrees_rs::Path) {
    let mut previous = PersonId::from(source);
    for hop in path {
        let cast = ds.members_of(&hop.movie);
        assert!(
            cast.contains(&previous) && cast.contains(&hop.person),
            "hop through {} does not connect {} to {}",
            hop.movie,
            previous,
            hop.person,
        );
        previous = hop.person.clone();
    }
    assert_eq!(previous, PersonId::from(target));
}

// ============================================================================
// 1. Chains of increasing length
// ============================================================================

#[test]
fn test_single_hop() {
    let ds = dataset(&[("m1", &["a", "b"])]);
    let path = Degrees::with_dataset(ds).shortest_path(&"a".into(), &"b".into()).unwrap();
    assert_eq!(path.hops, vec![Hop::new("m1", "b")]);
}

#[test]
fn test_five_hop_chain() {
    let ds = dataset(&[
        ("m1", &["a", "b"]),
        ("m2", &["b", "c"]),
        ("m3", &["c", "d"]),
        ("m4", &["d", "e"]),
        ("m5", &["e", "f"]),
    ]);
    let path = degrees_rs::search::shortest_path(&ds, &"a".into(), &"f".into()).unwrap();
    assert_eq!(path.len(), 5);
    assert_valid(&ds, "a", "f", &path);
}

#[test]
fn test_shortcut_wins_over_chain() {
    // a..f chain plus one movie joining a and e directly.
    let ds = dataset(&[
        ("m1", &["a", "b"]),
        ("m2", &["b", "c"]),
        ("m3", &["c", "d"]),
        ("m4", &["d", "e"]),
        ("m5", &["a", "e"]),
    ]);
    let path = degrees_rs::search::shortest_path(&ds, &"a".into(), &"e".into()).unwrap();
    assert_eq!(path.hops, vec![Hop::new("m5", "e")]);
}

// ============================================================================
// 2. Large casts — a hub movie connects everyone in one hop
// ============================================================================

#[test]
fn test_hub_movie() {
    let ds = dataset(&[
        ("hub", &["a", "b", "c", "d", "e", "f", "g", "h"]),
        ("m1", &["h", "i"]),
    ]);
    let engine = Degrees::with_dataset(ds);

    let path = engine.shortest_path(&"a".into(), &"h".into()).unwrap();
    assert_eq!(path.len(), 1);

    let path = engine.shortest_path(&"a".into(), &"i".into()).unwrap();
    assert_eq!(path.len(), 2);
    assert_valid(engine.dataset(), "a", "i", &path);
}

// ============================================================================
// 3. Not-connected outcomes
// ============================================================================

#[test]
fn test_disconnected_components() {
    let ds = dataset(&[
        ("m1", &["a", "b"]),
        ("m2", &["b", "c"]),
        ("m3", &["x", "y"]),
    ]);
    let engine = Degrees::with_dataset(ds);
    assert_eq!(engine.shortest_path(&"a".into(), &"x".into()), None);
    assert_eq!(engine.shortest_path(&"y".into(), &"c".into()), None);
}

#[test]
fn test_isolated_person() {
    let mut b = Dataset::builder();
    b.add_person(Person::new("a", "Person a"));
    b.add_person(Person::new("b", "Person b"));
    b.add_movie(Movie::new("m1", "Movie m1"));
    b.add_membership(&"a".into(), &"m1".into());
    let engine = Degrees::with_dataset(b.build());

    // b starred in nothing at all.
    assert_eq!(engine.shortest_path(&"a".into(), &"b".into()), None);
}

#[test]
fn test_self_query_quirk() {
    let ds = dataset(&[("m1", &["a", "b"]), ("m2", &["b", "c"])]);
    let engine = Degrees::with_dataset(ds);
    // A person is not considered connected to themselves, even via a
    // shared movie with co-stars.
    assert_eq!(engine.shortest_path(&"b".into(), &"b".into()), None);
    assert_eq!(engine.shortest_path(&"a".into(), &"a".into()), None);
}

// ============================================================================
// 4. Tie-breaking: length is deterministic, hop identity need not be
// ============================================================================

#[test]
fn test_two_minimal_routes_same_length() {
    // a-b-d and a-c-d are both two hops.
    let ds = dataset(&[
        ("m1", &["a", "b"]),
        ("m2", &["b", "d"]),
        ("m3", &["a", "c"]),
        ("m4", &["c", "d"]),
    ]);
    for _ in 0..20 {
        let path = degrees_rs::search::shortest_path(&ds, &"a".into(), &"d".into()).unwrap();
        assert_eq!(path.len(), 2);
        assert_valid(&ds, "a", "d", &path);
    }
}

// ============================================================================
// 5. Symmetry: the graph is undirected
// ============================================================================

#[test]
fn test_search_is_symmetric_in_length() {
    let ds = dataset(&[
        ("m1", &["a", "b"]),
        ("m2", &["b", "c"]),
        ("m3", &["c", "d"]),
    ]);
    let forward = degrees_rs::search::shortest_path(&ds, &"a".into(), &"d".into()).unwrap();
    let backward = degrees_rs::search::shortest_path(&ds, &"d".into(), &"a".into()).unwrap();
    assert_eq!(forward.len(), backward.len());
    assert_valid(&ds, "a", "d", &forward);
    assert_valid(&ds, "d", "a", &backward);
}

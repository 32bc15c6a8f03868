// NamespacedMap: get / has / set / size
// Scenarios with two namespaces, primaryId (numeric) and secondaryId (string).

use namespaced_map::{CompositeKey, NamespacedMap, RawKey};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Ns {
    PrimaryId,
    SecondaryId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Secret {
    secret: &'static str,
}

const HELLO: Secret = Secret { secret: "hello" };
const WORLD: Secret = Secret { secret: "world" };

fn key(primary: i64, secondary: &str) -> CompositeKey<Ns> {
    CompositeKey::new()
        .with(Ns::PrimaryId, primary)
        .with(Ns::SecondaryId, secondary)
}

fn new_map() -> NamespacedMap<Ns, Secret> {
    NamespacedMap::new()
}

// =============================================================================
// Test 1: Empty map finds nothing
// =============================================================================
#[test]
fn empty_map_finds_nothing() {
    let map = new_map();

    assert_eq!(map.len(), 0);
    assert!(map.is_empty());
    assert_eq!(map.get(Ns::PrimaryId, 1).unwrap(), None);
    assert!(!map.has(Ns::SecondaryId, "1"));
}

// =============================================================================
// Test 2: Every namespace of a set key finds the value
// =============================================================================
#[test]
fn set_then_get_through_each_namespace() {
    let mut map = new_map();
    map.set(key(1, "1"), HELLO).unwrap();

    assert_eq!(map.get(Ns::PrimaryId, 1).unwrap(), Some(&HELLO));
    assert_eq!(map.get(Ns::SecondaryId, "1").unwrap(), Some(&HELLO));
    assert!(map.has(Ns::PrimaryId, 1));
    assert!(map.has(Ns::SecondaryId, "1"));
    assert_eq!(map.len(), 1);
}

// =============================================================================
// Test 3: Keys are looked up in their own namespace only
// =============================================================================
#[test]
fn keys_do_not_leak_across_namespaces() {
    let mut map = new_map();
    map.set(key(1, "1"), HELLO).unwrap();

    // "1" is a secondaryId and 1 is a primaryId, not the other way around.
    assert!(!map.has(Ns::PrimaryId, "1"));
    assert!(!map.has(Ns::SecondaryId, 1));
    assert_eq!(map.get(Ns::PrimaryId, "1").unwrap(), None);
}

// =============================================================================
// Test 4: Overlapping composite keys consolidate into one record
// =============================================================================
#[test]
fn overlapping_keys_consolidate() {
    let mut map = new_map();
    map.set(key(1, "1"), HELLO).unwrap();
    map.set(key(2, "1"), WORLD).unwrap();

    assert_eq!(map.len(), 1);
    assert_eq!(map.get(Ns::SecondaryId, "1").unwrap(), Some(&WORLD));
    assert_eq!(map.get(Ns::PrimaryId, 2).unwrap(), Some(&WORLD));
    // The old record's other key went with it.
    assert_eq!(map.get(Ns::PrimaryId, 1).unwrap(), None);
    assert!(!map.has(Ns::PrimaryId, 1));
}

// =============================================================================
// Test 5: Same value under disjoint keys is two records (non-injective)
// =============================================================================
#[test]
fn equal_values_under_disjoint_keys_are_kept_apart() {
    let mut map = new_map();
    map.set(key(1, "1"), HELLO).unwrap();
    map.set(key(2, "2"), HELLO).unwrap();

    assert_eq!(map.len(), 2);
    assert_eq!(map.get(Ns::PrimaryId, 1).unwrap(), Some(&HELLO));
    assert_eq!(map.get(Ns::SecondaryId, "1").unwrap(), Some(&HELLO));
    assert_eq!(map.get(Ns::PrimaryId, 2).unwrap(), Some(&HELLO));
    assert_eq!(map.get(Ns::SecondaryId, "2").unwrap(), Some(&HELLO));
}

// =============================================================================
// Test 6: Re-setting an identical pair keeps the size
// =============================================================================
#[test]
fn resetting_identical_pair_keeps_size() {
    let mut map = new_map();
    map.set(key(1, "1"), HELLO).unwrap();
    map.set(key(1, "1"), HELLO).unwrap();

    assert_eq!(map.len(), 1);
    assert_eq!(map.get(Ns::PrimaryId, 1).unwrap(), Some(&HELLO));
    assert_eq!(map.get(Ns::SecondaryId, "1").unwrap(), Some(&HELLO));
    map.validate().unwrap();
}

// =============================================================================
// Test 7: Re-setting the same key with a new value overwrites
// =============================================================================
#[test]
fn resetting_same_key_overwrites_value() {
    let mut map = new_map();
    map.set(key(1, "1"), HELLO).unwrap();
    map.set(key(1, "1"), WORLD).unwrap();

    assert_eq!(map.len(), 1);
    assert_eq!(map.get(Ns::PrimaryId, 1).unwrap(), Some(&WORLD));
}

// =============================================================================
// Test 8: set chains
// =============================================================================
#[test]
fn set_returns_map_for_chaining() {
    let mut map = new_map();
    map.set(key(1, "1"), HELLO)
        .unwrap()
        .set(key(2, "2"), WORLD)
        .unwrap();

    assert_eq!(map.len(), 2);
    assert_eq!(map.get(Ns::SecondaryId, "2").unwrap(), Some(&WORLD));
}

// =============================================================================
// Test 9: get_mut edits in place, reachable from every namespace
// =============================================================================
#[test]
fn get_mut_updates_value_for_all_namespaces() {
    let mut map = new_map();
    map.set(key(1, "1"), HELLO).unwrap();

    *map.get_mut(Ns::PrimaryId, 1).unwrap().unwrap() = WORLD;

    assert_eq!(map.get(Ns::SecondaryId, "1").unwrap(), Some(&WORLD));
    assert_eq!(map.len(), 1);
    assert!(map.get_mut(Ns::PrimaryId, 9).unwrap().is_none());
}

// =============================================================================
// Test 10: composite_key returns the full stored key
// =============================================================================
#[test]
fn composite_key_resolves_from_any_namespace() {
    let mut map = new_map();
    map.set(key(1, "1"), HELLO).unwrap();

    let stored = map.composite_key(Ns::SecondaryId, "1").unwrap().unwrap();
    assert_eq!(stored, &key(1, "1"));
    assert_eq!(stored.get(Ns::PrimaryId), Some(&RawKey::from(1)));
    assert_eq!(map.composite_key(Ns::SecondaryId, "2").unwrap(), None);
}

// =============================================================================
// Test 11: Size counts records, not index entries
// =============================================================================
#[test]
fn size_counts_records_not_entries() {
    let mut map = new_map();
    for i in 0..10 {
        map.set(key(i, &i.to_string()), HELLO).unwrap();
    }

    assert_eq!(map.len(), 10);
    map.validate().unwrap();
}

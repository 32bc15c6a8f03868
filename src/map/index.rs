use std::collections::HashMap;
use std::hash::Hash;

use xxhash_rust::xxh3::Xxh3Builder;

use crate::key::CompositeKey;
use crate::types::{Namespace, RecordId};

/// One index per namespace: raw key → id of the record that owns it.
///
/// ```text
///   primaryId    1   ──┐
///                      ├──►  record 7f3a…  { value, {primaryId: 1, secondaryId: "1"} }
///   secondaryId "1"  ──┘
///   primaryId    2   ──┐
///                      ├──►  record 09c1…  { value, {primaryId: 2, secondaryId: "2"} }
///   secondaryId "2"  ──┘
/// ```
///
/// A raw key has at most one owner per namespace. Several namespaces may
/// point at the same record. Indexes are created the first time a namespace
/// is bound, so a map never has to enumerate its namespaces up front.
#[derive(Debug, Clone)]
pub struct IndexBank<N, K> {
    indexes: HashMap<N, HashMap<K, RecordId, Xxh3Builder>, Xxh3Builder>,
    namespace_capacity: usize,
}

impl<N: Namespace, K: Eq + Hash> IndexBank<N, K> {
    pub fn new(namespace_capacity: usize) -> Self {
        IndexBank {
            indexes: HashMap::with_hasher(Xxh3Builder::new()),
            namespace_capacity,
        }
    }

    /// The record that owns `key` in `namespace`, if any.
    pub fn lookup(&self, namespace: N, key: &K) -> Option<RecordId> {
        self.indexes.get(&namespace)?.get(key).copied()
    }

    pub fn contains(&self, namespace: N, key: &K) -> bool {
        self.indexes
            .get(&namespace)
            .is_some_and(|index| index.contains_key(key))
    }

    /// Point `key` in `namespace` at `id`, returning the previous owner.
    pub fn bind(&mut self, namespace: N, key: K, id: RecordId) -> Option<RecordId> {
        let capacity = self.namespace_capacity;
        self.indexes
            .entry(namespace)
            .or_insert_with(|| HashMap::with_capacity_and_hasher(capacity, Xxh3Builder::new()))
            .insert(key, id)
    }

    /// Drop the entry for `key` in `namespace`, but only while it still
    /// points at `id`. Returns whether an entry was removed.
    pub fn unbind(&mut self, namespace: N, key: &K, id: RecordId) -> bool {
        let Some(index) = self.indexes.get_mut(&namespace) else {
            return false;
        };
        if index.get(key) != Some(&id) {
            return false;
        }
        index.remove(key);
        true
    }

    /// Drop every entry of `key` that points at `id`.
    pub fn unbind_all(&mut self, key: &CompositeKey<N, K>, id: RecordId) -> usize {
        key.iter()
            .filter(|(namespace, raw)| self.unbind(*namespace, raw, id))
            .count()
    }

    /// Number of index entries across all namespaces.
    pub fn entry_count(&self) -> usize {
        self.indexes.values().map(HashMap::len).sum()
    }

    pub fn clear(&mut self) {
        self.indexes.clear();
    }

    /// Every `(namespace, key, owner)` triple, in no particular order.
    pub fn entries(&self) -> impl Iterator<Item = (N, &K, RecordId)> + '_ {
        self.indexes.iter().flat_map(|(namespace, index)| {
            index.iter().map(move |(key, id)| (*namespace, key, *id))
        })
    }
}

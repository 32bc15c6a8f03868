use std::collections::HashMap;

use xxhash_rust::xxh3::Xxh3Builder;

use crate::key::CompositeKey;
use crate::types::RecordId;

/// One stored value plus the composite key it was set under.
///
/// The key is kept so that evicting the record can find every namespace
/// index entry that points at it.
#[derive(Debug, Clone)]
pub struct Record<N, K, V> {
    pub key: CompositeKey<N, K>,
    pub value: V,
}

/// Record id → record.
///
/// Knows nothing about namespaces; the map keeps it in lock-step with the
/// [`IndexBank`](super::index::IndexBank).
#[derive(Debug, Clone)]
pub struct RecordStore<N, K, V> {
    records: HashMap<RecordId, Record<N, K, V>, Xxh3Builder>,
}

impl<N, K, V> RecordStore<N, K, V> {
    pub fn with_capacity(capacity: usize) -> Self {
        RecordStore {
            records: HashMap::with_capacity_and_hasher(capacity, Xxh3Builder::new()),
        }
    }

    pub fn get(&self, id: RecordId) -> Option<&Record<N, K, V>> {
        self.records.get(&id)
    }

    pub fn get_mut(&mut self, id: RecordId) -> Option<&mut Record<N, K, V>> {
        self.records.get_mut(&id)
    }

    pub fn contains(&self, id: RecordId) -> bool {
        self.records.contains_key(&id)
    }

    /// Store a record under a fresh id. The caller guarantees `id` is unused.
    pub fn insert(&mut self, id: RecordId, record: Record<N, K, V>) {
        let previous = self.records.insert(id, record);
        debug_assert!(previous.is_none(), "record id {id} reused");
    }

    pub fn remove(&mut self, id: RecordId) -> Option<Record<N, K, V>> {
        self.records.remove(&id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (RecordId, &Record<N, K, V>)> + '_ {
        self.records.iter().map(|(id, record)| (*id, record))
    }
}

pub mod index;
pub mod store;

use std::fmt::Debug;
use std::hash::Hash;

use tracing::{debug, error, trace};

use crate::error::{Error, Result};
use crate::id::{IdSource, RandomIds};
use crate::key::CompositeKey;
use crate::options::Options;
use crate::types::{Namespace, RawKey, RecordId};
use index::IndexBank;
use store::{Record, RecordStore};

/// A map whose values can be found through any of several namespaced keys.
///
/// Each value is stored once, under a [`CompositeKey`] that gives it one
/// raw key per namespace. Any single `(namespace, key)` pair finds the value.
///
/// Two records never share a raw key in the same namespace. When `set` is
/// given a composite key that overlaps a live record in any namespace, that
/// record is evicted whole before the new one goes in:
///
/// ```
/// use namespaced_map::{CompositeKey, NamespacedMap};
///
/// let mut map: NamespacedMap<&str, &str> = NamespacedMap::new();
/// map.set(CompositeKey::new().with("primaryId", 1).with("secondaryId", "1"), "hello")?
///    .set(CompositeKey::new().with("primaryId", 2).with("secondaryId", "1"), "world")?;
///
/// assert_eq!(map.len(), 1);
/// assert_eq!(map.get("secondaryId", "1")?, Some(&"world"));
/// assert_eq!(map.get("primaryId", 1)?, None);
/// # Ok::<(), namespaced_map::Error>(())
/// ```
///
/// Values play no part in identity; distinct records may hold equal values.
///
/// Not thread-safe. Wrap the whole map in one lock if several threads need
/// to mutate it.
#[derive(Debug, Clone)]
pub struct NamespacedMap<N, V, K = RawKey, S = RandomIds> {
    records: RecordStore<N, K, V>,
    index: IndexBank<N, K>,
    ids: S,
}

impl<N, V, K> NamespacedMap<N, V, K, RandomIds>
where
    N: Namespace,
    K: Eq + Hash + Clone,
{
    /// Create an empty map with random record ids.
    pub fn new() -> Self {
        Self::with_options(Options::default())
    }

    pub fn with_options(options: Options) -> Self {
        Self::with_options_and_id_source(options, RandomIds::new())
    }
}

impl<N, V, K, S> Default for NamespacedMap<N, V, K, S>
where
    N: Namespace,
    K: Eq + Hash + Clone,
    S: IdSource + Default,
{
    fn default() -> Self {
        Self::with_id_source(S::default())
    }
}

impl<N, V, K, S> NamespacedMap<N, V, K, S>
where
    N: Namespace,
    K: Eq + Hash + Clone,
    S: IdSource,
{
    pub fn with_id_source(ids: S) -> Self {
        Self::with_options_and_id_source(Options::default(), ids)
    }

    pub fn with_options_and_id_source(options: Options, ids: S) -> Self {
        NamespacedMap {
            records: RecordStore::with_capacity(options.record_capacity),
            index: IndexBank::new(options.namespace_capacity),
            ids,
        }
    }

    /// Look up the value owning `key` in `namespace`.
    ///
    /// A key that isn't there is `Ok(None)`. `Err` only signals an internal
    /// fault.
    pub fn get(&self, namespace: N, key: impl Into<K>) -> Result<Option<&V>> {
        Ok(self.resolve(namespace, &key.into())?.map(|record| &record.value))
    }

    pub fn get_mut(&mut self, namespace: N, key: impl Into<K>) -> Result<Option<&mut V>> {
        let Some(id) = self.index.lookup(namespace, &key.into()) else {
            return Ok(None);
        };
        match self.records.get_mut(id) {
            Some(record) => Ok(Some(&mut record.value)),
            None => Err(missing_record(id)),
        }
    }

    /// The full composite key of the record that owns `key` in `namespace`.
    pub fn composite_key(
        &self,
        namespace: N,
        key: impl Into<K>,
    ) -> Result<Option<&CompositeKey<N, K>>> {
        Ok(self.resolve(namespace, &key.into())?.map(|record| &record.key))
    }

    /// Whether `namespace` has an entry for `key`.
    pub fn has(&self, namespace: N, key: impl Into<K>) -> bool {
        self.index.contains(namespace, &key.into())
    }

    /// Store `value` under `key`, returning the map for chaining.
    ///
    /// Every live record that shares any raw key with `key` is evicted
    /// first, together with all of its other index entries. Re-setting an
    /// unchanged key therefore replaces the record without growing the map.
    pub fn set(&mut self, key: CompositeKey<N, K>, value: V) -> Result<&mut Self> {
        self.insert(key, value)?;
        Ok(self)
    }

    /// Like [`set`](Self::set), but hands back the values of the evicted
    /// records in eviction order.
    ///
    /// Victims are all resolved before anything is touched, so an internal
    /// fault leaves the map as it was.
    pub fn insert(&mut self, key: CompositeKey<N, K>, value: V) -> Result<Vec<V>> {
        if key.is_empty() {
            return Err(Error::EmptyKey);
        }

        let mut victims: Vec<RecordId> = Vec::new();
        for (namespace, raw) in key.iter() {
            let Some(id) = self.index.lookup(namespace, raw) else {
                continue;
            };
            if !self.records.contains(id) {
                return Err(missing_record(id));
            }
            if !victims.contains(&id) {
                victims.push(id);
            }
        }

        let mut evicted = Vec::with_capacity(victims.len());
        for victim in victims {
            let record = self.evict(victim)?;
            trace!(record = %victim, "evicted overlapping record");
            evicted.push(record.value);
        }

        let id = self.fresh_id();
        for (namespace, raw) in key.iter() {
            let previous = self.index.bind(namespace, raw.clone(), id);
            debug_assert!(previous.is_none(), "{namespace:?} key survived eviction");
        }
        self.records.insert(id, Record { key, value });

        trace!(record = %id, evicted = evicted.len(), size = self.len(), "set");
        Ok(evicted)
    }

    /// Remove the record that owns `key` in `namespace`, through all of its
    /// namespaces. Returns false if nothing owns the key.
    pub fn delete(&mut self, namespace: N, key: impl Into<K>) -> Result<bool> {
        Ok(self.remove(namespace, key)?.is_some())
    }

    /// Like [`delete`](Self::delete), but hands back the removed record.
    pub fn remove(
        &mut self,
        namespace: N,
        key: impl Into<K>,
    ) -> Result<Option<(CompositeKey<N, K>, V)>> {
        let Some(id) = self.index.lookup(namespace, &key.into()) else {
            return Ok(None);
        };
        let record = self.evict(id)?;
        trace!(record = %id, size = self.len(), "deleted");
        Ok(Some((record.key, record.value)))
    }

    /// Drop every record and every namespace index.
    pub fn clear(&mut self) {
        let size = self.len();
        self.index.clear();
        self.records.clear();
        debug!(size, "cleared");
    }

    /// Number of live records. A record counts once however many
    /// namespaces it is indexed under.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Check that the namespace indexes and the record store agree.
    ///
    /// Every index entry must point at a live record whose composite key
    /// contains that entry, and every pair of every record's composite key
    /// must point back at it. The map's own operations keep this true; it
    /// exists for tests and debugging.
    pub fn validate(&self) -> Result<()>
    where
        K: Debug,
    {
        for (namespace, raw, id) in self.index.entries() {
            let record = self.records.get(id).ok_or(Error::MissingRecord(id))?;
            if record.key.get(namespace) != Some(raw) {
                return Err(Error::Unindexed {
                    record: id,
                    detail: format!("index entry {namespace:?} => {raw:?} is not part of its key"),
                });
            }
        }
        for (id, record) in self.records.iter() {
            for (namespace, raw) in record.key.iter() {
                let owner = self.index.lookup(namespace, raw);
                if owner != Some(id) {
                    return Err(Error::Unindexed {
                        record: id,
                        detail: format!("{namespace:?} => {raw:?} resolves to {owner:?}"),
                    });
                }
            }
        }
        Ok(())
    }

    fn resolve(&self, namespace: N, key: &K) -> Result<Option<&Record<N, K, V>>> {
        let Some(id) = self.index.lookup(namespace, key) else {
            return Ok(None);
        };
        self.records.get(id).map(Some).ok_or_else(|| missing_record(id))
    }

    /// Remove a record from the store and all of its entries from the
    /// indexes.
    fn evict(&mut self, id: RecordId) -> Result<Record<N, K, V>> {
        let record = self.records.remove(id).ok_or_else(|| missing_record(id))?;
        self.index.unbind_all(&record.key, id);
        Ok(record)
    }

    fn fresh_id(&mut self) -> RecordId {
        loop {
            let id = self.ids.next_id();
            if !self.records.contains(id) {
                return id;
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn index_entries(&self) -> usize {
        self.index.entry_count()
    }
}

fn missing_record(id: RecordId) -> Error {
    error!(record = %id, "namespace index points at a missing record");
    Error::MissingRecord(id)
}

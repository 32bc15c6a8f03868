use crate::types::{Namespace, RawKey};

/// A composite key: one raw key per namespace.
///
/// Namespaces are kept in first-insertion order. Supplying the same
/// namespace twice replaces its key. Typical use names every namespace of
/// the map, but any non-empty subset is accepted by `set`.
///
/// ```
/// use namespaced_map::CompositeKey;
///
/// let key: CompositeKey<&str> = CompositeKey::new()
///     .with("primaryId", 1)
///     .with("secondaryId", "1");
/// assert_eq!(key.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositeKey<N, K = RawKey> {
    // Few namespaces per key; scanned linearly.
    parts: Vec<(N, K)>,
}

impl<N: Namespace, K: Eq> CompositeKey<N, K> {
    pub fn new() -> Self {
        CompositeKey { parts: Vec::new() }
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(mut self, namespace: N, key: impl Into<K>) -> Self {
        self.insert(namespace, key);
        self
    }

    /// Set the key for `namespace`, returning the key it replaced.
    pub fn insert(&mut self, namespace: N, key: impl Into<K>) -> Option<K> {
        let key = key.into();
        match self.parts.iter_mut().find(|(ns, _)| *ns == namespace) {
            Some((_, slot)) => Some(std::mem::replace(slot, key)),
            None => {
                self.parts.push((namespace, key));
                None
            }
        }
    }

    pub fn get(&self, namespace: N) -> Option<&K> {
        self.parts
            .iter()
            .find(|(ns, _)| *ns == namespace)
            .map(|(_, key)| key)
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// `(namespace, key)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (N, &K)> + '_ {
        self.parts.iter().map(|(ns, key)| (*ns, key))
    }

    pub fn namespaces(&self) -> impl Iterator<Item = N> + '_ {
        self.parts.iter().map(|(ns, _)| *ns)
    }
}

impl<N: Namespace, K: Eq> Default for CompositeKey<N, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Namespace, K: Eq, Q: Into<K>> FromIterator<(N, Q)> for CompositeKey<N, K> {
    fn from_iter<I: IntoIterator<Item = (N, Q)>>(iter: I) -> Self {
        let mut key = CompositeKey::new();
        for (namespace, raw) in iter {
            key.insert(namespace, raw);
        }
        key
    }
}

impl<N: Namespace, K: Eq, const M: usize> From<[(N, K); M]> for CompositeKey<N, K> {
    fn from(parts: [(N, K); M]) -> Self {
        parts.into_iter().collect()
    }
}

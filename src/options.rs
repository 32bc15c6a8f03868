/// Construction-time tuning for a [`NamespacedMap`](crate::NamespacedMap).
///
/// Only affects preallocation; the map grows as needed either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Options {
    /// Records to reserve room for in the record store.
    pub record_capacity: usize,
    /// Keys to reserve room for in each namespace index, applied when a
    /// namespace is first used.
    pub namespace_capacity: usize,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_capacity(mut self, capacity: usize) -> Self {
        self.record_capacity = capacity;
        self
    }

    pub fn namespace_capacity(mut self, capacity: usize) -> Self {
        self.namespace_capacity = capacity;
        self
    }
}

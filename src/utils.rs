//! Utility traits for `ChainedHashMap`

use crate::ChainedHashMap;

/// Extension trait for map implementations that provides owned snapshots of their contents
pub trait HashMapExtensions {
    /// Returns independent copies of every key, in iteration order.
    ///
    /// The result has exactly `len()` elements and is empty for an empty map. Dropping the
    /// returned `Vec` releases the snapshot.
    fn keys(&self) -> Vec<String>;

    /// Returns the values of the hash map, in iteration order
    fn values(&self) -> Vec<i32>;

    /// Returns true if the hash map contains the given key
    fn contains_key(&self, key: &str) -> bool;
}

impl<const N: usize> HashMapExtensions for ChainedHashMap<N> {
    fn keys(&self) -> Vec<String> {
        let mut keys = Vec::with_capacity(self.len());
        keys.extend(self.iter().map(|(key, _)| key.to_owned()));
        keys
    }

    fn values(&self) -> Vec<i32> {
        self.iter().map(|(_, value)| value).collect()
    }

    fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

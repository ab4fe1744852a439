use std::{fmt, iter::FusedIterator, mem, slice};

use log::{debug, trace, warn};

use crate::{error::TableError, hash::hash_key};

/// Number of buckets used by [`ChainedHashMap::new`]
pub const BUCKET_COUNT: usize = 5;

/// Value returned by the sentinel accessors when a key is absent.
///
/// Callers that read values through [`ChainedHashMap::get_or_not_found`] or
/// [`ChainedHashMap::remove_or_not_found`] must never store this value, because those
/// accessors cannot tell it apart from a missing key.
pub const NOT_FOUND: i32 = -1;

/// Owned link to the next entry of a chain
type Link = Option<Box<Entry>>;

/// A key-value pair stored in a bucket chain
#[derive(Debug)]
struct Entry {
    /// The table's private copy of the key
    key: Box<str>,
    /// The value associated with the key
    value: i32,
    /// The next entry in the same bucket
    next: Link,
}

/// A hash table with a fixed number of buckets and separate chaining.
///
/// Every bucket holds a singly linked chain of entries whose keys hash to it. New keys are
/// prepended to their chain; the bucket count never changes, so chains simply grow as more
/// keys are added.
///
/// Note: This implementation is not thread-safe. Wrap it in a mutex to share it.
#[derive(Debug)]
pub struct ChainedHashMap<const N: usize = BUCKET_COUNT> {
    /// Chain heads, one per bucket
    buckets: [Link; N],
    /// Current number of entries across all chains
    size: usize,
}

impl ChainedHashMap {
    /// Creates an empty `ChainedHashMap` with [`BUCKET_COUNT`] buckets
    #[must_use]
    pub fn new() -> Self {
        Self::with_buckets()
    }
}

impl<const N: usize> Default for ChainedHashMap<N> {
    fn default() -> Self {
        Self::with_buckets()
    }
}

impl<const N: usize> ChainedHashMap<N> {
    /// Creates an empty `ChainedHashMap` with `N` buckets
    #[must_use]
    pub fn with_buckets() -> Self {
        const { assert!(N > 0, "a chained hash map needs at least one bucket") };

        Self { buckets: std::array::from_fn(|_| None), size: 0 }
    }

    /// Selects the bucket for a key
    #[allow(clippy::cast_possible_truncation)]
    fn bucket_index(key: &str) -> usize {
        let hash = hash_key(key);
        // The remainder is below N, so narrowing it back to usize is lossless.
        let index = hash.wrapping_rem(N as u64) as usize;
        trace!("key {key:?} hashed to {hash:#x}, bucket {index}");
        index
    }

    /// Finds the entry holding `key`
    fn find(&self, key: &str) -> Option<&Entry> {
        let head = self.buckets.get(Self::bucket_index(key))?;
        Chain::new(head.as_deref()).find(|entry| *entry.key == *key)
    }

    /// Retrieve the value for a given key
    #[must_use]
    pub fn get(&self, key: &str) -> Option<i32> {
        self.find(key).map(|entry| entry.value)
    }

    /// Retrieve the value for a given key, or [`NOT_FOUND`] if it is absent
    #[must_use]
    pub fn get_or_not_found(&self, key: &str) -> i32 {
        self.get(key).unwrap_or(NOT_FOUND)
    }

    /// Get a mutable reference to the value for a given key
    pub fn get_mut(&mut self, key: &str) -> Option<&mut i32> {
        let mut cursor = self.buckets.get_mut(Self::bucket_index(key))?.as_deref_mut();

        while let Some(entry) = cursor {
            if *entry.key == *key {
                return Some(&mut entry.value);
            }
            cursor = entry.next.as_deref_mut();
        }

        None
    }

    /// Insert a key-value pair into the hash table.
    ///
    /// If the key is already present its value is overwritten in place and the previous
    /// value is returned. Otherwise the table stores its own copy of `key`, so the caller's
    /// buffer can be reused as soon as this returns.
    pub fn insert(&mut self, key: &str, value: i32) -> Option<i32> {
        if let Some(previous) = self.replace_existing(key, value) {
            return Some(previous);
        }

        self.link_front(Box::from(key), value);
        None
    }

    /// Insert a key-value pair, reporting failure to allocate the key copy.
    ///
    /// Behaves like [`insert`](Self::insert). When the new key cannot be copied the table
    /// is left exactly as it was.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::AllocationFailed`] if storage for the key cannot be reserved.
    pub fn try_insert(&mut self, key: &str, value: i32) -> Result<Option<i32>, TableError> {
        if let Some(previous) = self.replace_existing(key, value) {
            return Ok(Some(previous));
        }

        let mut owned = String::new();
        owned
            .try_reserve_exact(key.len())
            .map_err(|source| TableError::AllocationFailed { len: key.len(), source })?;
        owned.push_str(key);

        self.link_front(owned.into_boxed_str(), value);
        Ok(None)
    }

    /// Overwrites the value of an existing key, returning the old value
    fn replace_existing(&mut self, key: &str, value: i32) -> Option<i32> {
        if value == NOT_FOUND {
            warn!("storing the NOT_FOUND sentinel under key {key:?}");
        }

        let slot = self.get_mut(key)?;
        let previous = mem::replace(slot, value);
        debug!("overwrote key {key:?}: {previous} -> {value}");
        Some(previous)
    }

    /// Prepends a new entry to the chain its key hashes to
    fn link_front(&mut self, key: Box<str>, value: i32) {
        let index = Self::bucket_index(&key);
        if let Some(head) = self.buckets.get_mut(index) {
            debug!("inserting key {key:?} into bucket {index}");
            let next = head.take();
            *head = Some(Box::new(Entry { key, value, next }));
            self.size = self.size.saturating_add(1);
        }
    }

    /// Removes a key-value pair from the hash table, returning the removed value
    pub fn remove(&mut self, key: &str) -> Option<i32> {
        let index = Self::bucket_index(key);
        let mut cursor = self.buckets.get_mut(index)?;

        while cursor.as_ref().is_some_and(|entry| *entry.key != *key) {
            cursor = &mut cursor.as_mut()?.next;
        }

        // `cursor` is the link pointing at the match: a bucket head or some entry's `next`.
        let removed = cursor.take()?;
        let Entry { value, next, .. } = *removed;
        *cursor = next;
        self.size = self.size.saturating_sub(1);

        debug!("removed key {key:?} from bucket {index}");
        Some(value)
    }

    /// Removes a key-value pair, returning [`NOT_FOUND`] if the key was absent
    pub fn remove_or_not_found(&mut self, key: &str) -> i32 {
        self.remove(key).unwrap_or(NOT_FOUND)
    }

    /// Returns the number of elements in the hash table
    #[must_use]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns true if the hash table is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the number of buckets in the hash table
    #[must_use]
    #[allow(clippy::unused_self)]
    pub const fn bucket_count(&self) -> usize {
        N
    }

    /// Clears the hash map, releasing every entry
    pub fn clear(&mut self) {
        for head in &mut self.buckets {
            // Unlink one node at a time so long chains are not dropped recursively.
            let mut link = head.take();
            while let Some(mut entry) = link {
                link = entry.next.take();
            }
        }
        self.size = 0;
    }

    /// Returns an iterator over the key-value pairs, bucket by bucket
    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        Iter { buckets: self.buckets.iter(), chain: Chain::new(None), remaining: self.size }
    }

    /// Returns the length of every bucket's chain, in bucket order
    #[must_use]
    pub fn chain_lengths(&self) -> [usize; N] {
        self.buckets.each_ref().map(|head| Chain::new(head.as_deref()).count())
    }

    /// Returns a view that displays every bucket's chain, for debugging the hash spread
    #[must_use]
    pub fn lists(&self) -> ChainLayout<'_, N> {
        ChainLayout { map: self }
    }

    /// Prints every pair as `"KEY": VALUE`, or `<EMPTY HASHMAP>` when there are none
    pub fn print(&self) {
        print!("{self}");
    }

    /// Prints the chain of every bucket
    pub fn print_lists(&self) {
        print!("{}", self.lists());
    }
}

impl<const N: usize> Drop for ChainedHashMap<N> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<K: AsRef<str>, const N: usize> Extend<(K, i32)> for ChainedHashMap<N> {
    fn extend<T: IntoIterator<Item = (K, i32)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key.as_ref(), value);
        }
    }
}

impl<K: AsRef<str>, const N: usize> FromIterator<(K, i32)> for ChainedHashMap<N> {
    fn from_iter<T: IntoIterator<Item = (K, i32)>>(iter: T) -> Self {
        let mut map = Self::with_buckets();
        map.extend(iter);
        map
    }
}

impl<'a, const N: usize> IntoIterator for &'a ChainedHashMap<N> {
    type Item = (&'a str, i32);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<const N: usize> fmt::Display for ChainedHashMap<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "<EMPTY HASHMAP>");
        }

        for (key, value) in self {
            writeln!(f, "\"{key}\": {value}")?;
        }
        Ok(())
    }
}

/// Walks a single chain from head to tail
#[derive(Debug, Clone)]
struct Chain<'a> {
    /// The entry to yield next
    next: Option<&'a Entry>,
}

impl<'a> Chain<'a> {
    /// Starts a walk at `head`
    fn new(head: Option<&'a Entry>) -> Self {
        Self { next: head }
    }
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a Entry;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.next?;
        self.next = entry.next.as_deref();
        Some(entry)
    }
}

/// Iterator over the key-value pairs of the hash table
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    /// Buckets not yet visited
    buckets: slice::Iter<'a, Link>,
    /// Position within the current bucket's chain
    chain: Chain<'a>,
    /// Number of pairs still to be yielded
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, i32);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.chain.next() {
                self.remaining = self.remaining.saturating_sub(1);
                return Some((&*entry.key, entry.value));
            }
            self.chain = Chain::new(self.buckets.next()?.as_deref());
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

/// Debug view of a table's chains, one line per bucket.
///
/// Each line reads `[i]: "k1": v1 -> "k2": v2 -> NULL`, listing the chain from head to
/// tail; an empty bucket reads `[i]: NULL`.
#[derive(Debug, Clone, Copy)]
pub struct ChainLayout<'a, const N: usize> {
    /// The table being displayed
    map: &'a ChainedHashMap<N>,
}

impl<const N: usize> fmt::Display for ChainLayout<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, head) in self.map.buckets.iter().enumerate() {
            write!(f, "[{index}]:")?;
            for entry in Chain::new(head.as_deref()) {
                write!(f, " \"{}\": {} ->", entry.key, entry.value)?;
            }
            writeln!(f, " NULL")?;
        }
        Ok(())
    }
}

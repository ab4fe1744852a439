//! # Chained Hash Map
//!
//! A small hash table mapping string keys to `i32` values.
//!
//! The table has a fixed number of buckets (five by default) chosen at compile time. Each
//! bucket holds a singly linked chain of entries; colliding keys are prepended to the chain
//! of their bucket. There is no resizing, so lookups degrade linearly as chains grow, in
//! exchange for a very small and predictable structure.
//!
//! ## Basic Usage
//!
//! ```rust
//! use chainmap::{ChainedHashMap, HashMapExtensions};
//!
//! // Create a new hash map
//! let mut map = ChainedHashMap::new();
//!
//! // Insert values; the map keeps its own copy of every key
//! map.insert("Alice", 30);
//! map.insert("Bob", 6);
//!
//! // Retrieve values
//! assert_eq!(map.get("Alice"), Some(30));
//! assert_eq!(map.get("Dave"), None);
//!
//! // Update values
//! assert_eq!(map.insert("Alice", 31), Some(30));
//! assert_eq!(map.len(), 2);
//!
//! // Remove values
//! assert_eq!(map.remove("Bob"), Some(6));
//! assert_eq!(map.keys(), vec!["Alice".to_string()]);
//!
//! // Display every pair, or inspect the bucket chains
//! assert_eq!(map.to_string(), "\"Alice\": 31\n");
//! println!("{}", map.lists());
//! ```
//!
//! ## Sentinel Accessors
//!
//! Callers that expect a plain integer can use the sentinel forms, which report a missing
//! key as [`NOT_FOUND`]. Such callers must not store `NOT_FOUND` as a value.
//!
//! ```rust
//! use chainmap::{ChainedHashMap, NOT_FOUND};
//!
//! let mut map = ChainedHashMap::new();
//! map.insert("Carlos", 15);
//! assert_eq!(map.get_or_not_found("Carlos"), 15);
//! assert_eq!(map.remove_or_not_found("Dave"), NOT_FOUND);
//! ```
//!
//! ## Bucket Count
//!
//! ```rust
//! use chainmap::ChainedHashMap;
//!
//! let mut map = ChainedHashMap::<2>::with_buckets();
//! map.insert("a", 1);
//! map.insert("b", 2);
//! assert_eq!(map.chain_lengths(), [1, 1]);
//! ```

/// Module implementing the fixed-bucket chaining hash map
mod chained_hashmap;
/// Error types for fallible operations
mod error;
/// Deterministic string hashing
pub mod hash;
/// Logger setup shared by the binaries
pub mod logger;
/// Utility traits for the hash map
mod utils;

pub use chained_hashmap::{BUCKET_COUNT, ChainLayout, ChainedHashMap, Iter, NOT_FOUND};
pub use error::TableError;
pub use utils::HashMapExtensions;

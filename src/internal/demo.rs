//! Sanity-check driver: exercises every public operation of `ChainedHashMap` and prints
//! the results.

use chainmap::{BUCKET_COUNT, ChainedHashMap, HashMapExtensions, NOT_FOUND, logger};
use log::info;

/// Keys used by the walkthrough; the last one is never inserted
const TEST_KEYS: [&str; 4] = ["Alice", "Bob", "Carlos", "Dave"];
/// Values for all but the last test key
const TEST_VALUES: [i32; 3] = [30, 6, 15];

/// Prints the value mapped to `key`, or that it is unmapped
fn print_pair(map: &ChainedHashMap, key: &str) {
    let value = map.get_or_not_found(key);
    if value == NOT_FOUND {
        println!("Key \"{key}\" is not mapped to any value.");
    } else {
        println!("Key \"{key}\" is mapped to the value {value}.");
    }
}

/// Prints the number of pairs in the map
fn print_size(map: &ChainedHashMap) {
    println!("The hashmap currently has {} pair(s) in it.", map.len());
}

fn main() {
    logger::initialize_logger();

    let mut map = ChainedHashMap::new();
    map.print();
    map.print_lists();
    print_size(&map);

    // Insert initial dummy data
    for (key, value) in TEST_KEYS.iter().zip(TEST_VALUES) {
        map.insert(key, value);
    }

    map.print();
    map.print_lists();
    print_size(&map);

    // Remove keys, including one that does not exist
    for key in ["Bob", "Dave"] {
        match map.remove(key) {
            Some(value) => println!("Removed key \"{key}\", which was mapped to value {value}."),
            None => println!("Key \"{key}\" was not found, hashmap unmodified."),
        }
    }
    print_pair(&map, "Bob");
    print_size(&map);

    // Insert more pairs than there are buckets so the chains get exercised. A single
    // buffer is reused on purpose: the map keeps its own copy of every key.
    let count = BUCKET_COUNT.saturating_mul(2);
    println!("Inserting {count} pairs into the hashmap...");
    let mut buffer = String::new();
    for (index, value) in (0..count).zip(0_i32..) {
        buffer.clear();
        buffer.push_str(&index.to_string());
        map.insert(&buffer, value);
        map.print_lists();
        println!("-----------");
    }
    println!("Successfully performed {count} insert operations.");
    print_size(&map);

    let keys = map.keys();
    println!("{}", keys.join(" "));
    info!("demo finished with {} keys across {} buckets", keys.len(), map.bucket_count());
}

// ChainedHashMap property tests.
//
// Property 1: the map behaves like std's HashMap under random operation sequences.
//  - Model: std::collections::HashMap<String, i32>.
//  - Operations: insert, remove, get, clear over a small key pool so that keys collide
//    in the five buckets and get overwritten and removed repeatedly.
//  - Invariant after every step: len() matches the model and every pool key reads back
//    the model's value.
//
// Property 2: keys() is an exact snapshot of the stored key set.
//
// Property 3: bucket chains account for every entry.
use std::collections::{HashMap, HashSet};

use chainmap::{ChainedHashMap, HashMapExtensions, NOT_FOUND};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Insert(usize, i32),
    Remove(usize),
    Get(usize),
    Clear,
}

fn op_strategy(pool: usize) -> impl Strategy<Value = Op> {
    prop_oneof![
        6 => (0..pool, any::<i32>()).prop_map(|(k, v)| Op::Insert(k, v)),
        3 => (0..pool).prop_map(Op::Remove),
        2 => (0..pool).prop_map(Op::Get),
        1 => Just(Op::Clear),
    ]
}

fn key_name(k: usize) -> String {
    format!("key-{k}")
}

proptest! {
    #[test]
    fn prop_matches_std_hashmap(ops in proptest::collection::vec(op_strategy(24), 1..200)) {
        let mut map = ChainedHashMap::new();
        let mut model: HashMap<String, i32> = HashMap::new();

        for op in ops {
            match op {
                Op::Insert(k, v) => {
                    let key = key_name(k);
                    prop_assert_eq!(map.insert(&key, v), model.insert(key, v));
                }
                Op::Remove(k) => {
                    let key = key_name(k);
                    prop_assert_eq!(map.remove(&key), model.remove(&key));
                }
                Op::Get(k) => {
                    let key = key_name(k);
                    prop_assert_eq!(map.get(&key), model.get(&key).copied());
                }
                Op::Clear => {
                    map.clear();
                    model.clear();
                }
            }

            prop_assert_eq!(map.len(), model.len());
            prop_assert_eq!(map.is_empty(), model.is_empty());
            for k in 0..24 {
                let key = key_name(k);
                prop_assert_eq!(map.get(&key), model.get(&key).copied());
            }
        }
    }

    #[test]
    fn prop_keys_snapshot_matches_inserted_set(keys in proptest::collection::hash_set("[a-zA-Z0-9]{0,12}", 0..64)) {
        let map: ChainedHashMap = keys.iter().map(|key| (key.as_str(), 1)).collect();

        let snapshot = map.keys();
        prop_assert_eq!(snapshot.len(), keys.len());
        prop_assert_eq!(snapshot.len(), map.len());

        let distinct: HashSet<String> = snapshot.into_iter().collect();
        prop_assert_eq!(distinct, keys);
    }

    #[test]
    fn prop_chain_lengths_sum_to_len(keys in proptest::collection::vec("[a-z]{1,6}", 0..64)) {
        let mut map = ChainedHashMap::<3>::with_buckets();
        for (value, key) in (0_i32..).zip(&keys) {
            map.insert(key, value);
        }

        prop_assert_eq!(map.chain_lengths().iter().sum::<usize>(), map.len());
        prop_assert_eq!(map.iter().count(), map.len());
        prop_assert_eq!(map.lists().to_string().lines().count(), 3);
    }

    #[test]
    fn prop_remove_absent_key_is_noop(present in "[a-m]{1,8}", absent in "[n-z]{1,8}", value in 0..i32::MAX) {
        let mut map = ChainedHashMap::new();
        map.insert(&present, value);
        let before = map.to_string();

        prop_assert_eq!(map.remove(&absent), None);
        prop_assert_eq!(map.remove_or_not_found(&absent), NOT_FOUND);
        prop_assert_eq!(map.len(), 1);
        prop_assert_eq!(map.to_string(), before);
        prop_assert_eq!(map.get(&present), Some(value));
    }
}

#[test]
fn ten_keys_in_five_buckets() {
    let mut map = ChainedHashMap::new();
    for (key, value) in (0..10).map(|i| (i.to_string(), i)) {
        map.insert(&key, value);
    }

    assert_eq!(map.len(), 10);
    for i in 0..10 {
        assert_eq!(map.get(&i.to_string()), Some(i));
    }
    assert_eq!(map.chain_lengths().iter().sum::<usize>(), 10);
}

#[test]
fn display_lists_every_pair_once() {
    let map: ChainedHashMap = [("Alice", 30), ("Bob", 6), ("Carlos", 15)].into_iter().collect();
    let rendered = map.to_string();

    let mut lines: Vec<&str> = rendered.lines().collect();
    lines.sort_unstable();
    assert_eq!(lines, vec!["\"Alice\": 30", "\"Bob\": 6", "\"Carlos\": 15"]);
}

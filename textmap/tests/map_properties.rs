// Property tests for StringMap
//
// Keys are drawn from a small alphabet so that sequences revisit keys often
// enough to exercise updates and removals of existing entries.

#![allow(clippy::unwrap_used)]

use std::collections::{BTreeMap, BTreeSet};

use proptest::prelude::*;
use textmap::{MapConfig, MapStatus, StringMap};

#[derive(Debug, Clone)]
enum Op {
    Put(String, String),
    Remove(String),
    Clear,
}

fn key() -> impl Strategy<Value = String> {
    "[a-f]{0,2}"
}

fn value() -> impl Strategy<Value = String> {
    "[ -~]{0,8}"
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        6 => (key(), value()).prop_map(|(k, v)| Op::Put(k, v)),
        3 => key().prop_map(Op::Remove),
        1 => Just(Op::Clear),
    ]
}

fn small_map() -> StringMap {
    StringMap::with_config(MapConfig::new().with_initial_capacity(1)).unwrap()
}

proptest! {
    #[test]
    fn last_write_wins(pairs in prop::collection::vec((key(), value()), 0..64)) {
        let mut map = small_map();
        let mut model = BTreeMap::new();
        for (k, v) in &pairs {
            map.put(k, v).unwrap();
            model.insert(k.clone(), v.clone());
        }

        prop_assert_eq!(map.len(), model.len());
        for (k, v) in &model {
            prop_assert!(map.contains(k));
            prop_assert_eq!(map.get(k), Some(v.as_str()));
        }
    }

    #[test]
    fn matches_model_under_mixed_ops(ops in prop::collection::vec(op(), 0..96)) {
        let mut map = small_map();
        let mut model: BTreeMap<String, String> = BTreeMap::new();
        let mut peak_capacity = map.capacity();

        for op in ops {
            match op {
                Op::Put(k, v) => {
                    let before = map.len();
                    let previous = map.put(&k, &v).unwrap();
                    let expected = model.insert(k, v);
                    prop_assert_eq!(&previous, &expected);
                    let grew_by = usize::from(expected.is_none());
                    prop_assert_eq!(map.len(), before + grew_by);
                }
                Op::Remove(k) => {
                    let before = map.len();
                    match model.remove(&k) {
                        Some(v) => {
                            prop_assert_eq!(map.remove(&k).unwrap(), v);
                            prop_assert_eq!(map.len(), before - 1);
                            prop_assert!(!map.contains(&k));
                            prop_assert_eq!(map.get(&k), None);
                        }
                        None => {
                            let error = map.remove(&k).unwrap_err();
                            prop_assert_eq!(error.status(), MapStatus::ItemDoesNotExist);
                            prop_assert_eq!(map.len(), before);
                        }
                    }
                }
                Op::Clear => {
                    map.clear();
                    model.clear();
                    prop_assert_eq!(map.len(), 0);
                }
            }

            prop_assert!(map.len() <= map.capacity());
            prop_assert!(map.capacity() >= peak_capacity);
            peak_capacity = map.capacity();
        }

        let contents: BTreeMap<String, String> = map
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        prop_assert_eq!(contents, model);
    }

    #[test]
    fn cursor_covers_key_set_once(pairs in prop::collection::vec((key(), value()), 0..32)) {
        let mut map = small_map();
        for (k, v) in &pairs {
            map.put(k, v).unwrap();
        }
        let expected: BTreeSet<String> = map.keys().map(str::to_string).collect();

        let mut seen = BTreeSet::new();
        let mut visited = 0;
        let mut next = map.first_key().map(str::to_string);
        while let Some(k) = next {
            visited += 1;
            prop_assert!(seen.insert(k));
            next = map.next_key().map(str::to_string);
        }

        prop_assert_eq!(visited, map.len());
        prop_assert_eq!(seen, expected);
    }

    #[test]
    fn copy_is_independent(pairs in prop::collection::vec((key(), value()), 1..32)) {
        let mut source = small_map();
        source.put_all(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))).unwrap();

        let mut copy = source.try_clone().unwrap();
        prop_assert_eq!(&copy, &source);
        prop_assert_eq!(copy.capacity(), source.capacity());

        let snapshot: Vec<(String, String)> = source
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        for (k, _) in &snapshot {
            copy.put(k, "overwritten").unwrap();
        }
        for (k, v) in &snapshot {
            prop_assert_eq!(source.get(k), Some(v.as_str()));
        }
    }
}

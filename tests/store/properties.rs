//! Property tests over random keys and operation sequences.
//!
//! A `Vec<(String, i64)>` model with linear scans serves as the reference
//! for ordering and lookup.

use ordkv::KeyValueStore;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Add(String, i64),
    Delete(String),
}

fn key() -> impl Strategy<Value = String> {
    // Small alphabet so adds and deletes collide often.
    "[a-e]{1,2}"
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (key(), any::<i64>()).prop_map(|(k, v)| Op::Add(k, v)),
        1 => key().prop_map(Op::Delete),
    ]
}

fn apply_model(model: &mut Vec<(String, i64)>, op: &Op) {
    match op {
        Op::Add(k, v) => match model.iter_mut().find(|(mk, _)| mk == k) {
            Some(entry) => entry.1 = *v,
            None => model.push((k.clone(), *v)),
        },
        Op::Delete(k) => model.retain(|(mk, _)| mk != k),
    }
}

fn cursor_entries(store: &KeyValueStore<i64>) -> Vec<(String, i64)> {
    let mut cursor = store.cursor();
    let mut out = Vec::new();
    while cursor.valid() {
        out.push((cursor.key().unwrap().to_string(), *cursor.current().unwrap()));
        cursor.next();
    }
    out
}

proptest! {
    #[test]
    fn add_then_get_roundtrip(k in "[a-zA-Z0-9_.]{1,16}", v in any::<i64>()) {
        let mut store: KeyValueStore<i64> = KeyValueStore::new();
        store.add(&k, v).unwrap();
        prop_assert!(store.has(&k).unwrap());
        prop_assert_eq!(*store.get(&k).unwrap(), v);
    }

    #[test]
    fn whitespace_keys_always_rejected(k in r"[ \t\n\r\x00\x0B]{0,8}") {
        let mut store: KeyValueStore<i64> = KeyValueStore::new();
        prop_assert!(store.add(&k, 1).unwrap_err().is_invalid_argument());
        prop_assert!(store.get(&k).unwrap_err().is_invalid_argument());
        prop_assert!(store.has(&k).unwrap_err().is_invalid_argument());
        prop_assert!(store.delete(&k).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn matches_ordered_model(ops in prop::collection::vec(op(), 0..64)) {
        let mut store: KeyValueStore<i64> = KeyValueStore::new();
        let mut model = Vec::new();

        for op in &ops {
            match op {
                Op::Add(k, v) => { store.add(k, *v).unwrap(); }
                Op::Delete(k) => { store.delete(k).unwrap(); }
            }
            apply_model(&mut model, op);
        }

        prop_assert_eq!(store.len(), model.len());
        prop_assert_eq!(cursor_entries(&store), model.clone());
        for (k, v) in &model {
            prop_assert_eq!(store.get(k).unwrap(), v);
        }
    }

    #[test]
    fn delete_absent_leaves_store_unchanged(
        keys in prop::collection::vec("[a-m]{1,3}", 0..16),
        absent in "[n-z]{1,3}",
    ) {
        let mut store: KeyValueStore<i64> = KeyValueStore::new();
        for (i, k) in keys.iter().enumerate() {
            store.add(k, i as i64).unwrap();
        }
        let before = store.clone();
        store.delete(&absent).unwrap();
        prop_assert_eq!(store, before);
    }

    #[test]
    fn rewind_reproduces_sequence(keys in prop::collection::vec("[a-z]{1,4}", 0..16)) {
        let mut store: KeyValueStore<i64> = KeyValueStore::new();
        for (i, k) in keys.iter().enumerate() {
            store.add(k, i as i64).unwrap();
        }

        let mut cursor = store.cursor();
        let mut first = Vec::new();
        while cursor.valid() {
            first.push(cursor.key().unwrap());
            cursor.next();
        }
        prop_assert!(!cursor.valid());

        cursor.rewind();
        let mut second = Vec::new();
        while cursor.valid() {
            second.push(cursor.key().unwrap());
            cursor.next();
        }
        prop_assert_eq!(first, second);
    }
}

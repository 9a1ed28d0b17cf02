//! Randomized operation sequences checked against reference models from
//! the standard library, plus structural invariants that must hold after
//! every single mutation.

use std::collections::{HashMap, VecDeque};

use dsakit::{
    BinarySearchTree, ChainedHashTable, DoublyLinkedList, LinearProbeTable, MaxBinaryHeap,
    MinBinaryHeap,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn doubly_linked_list_links_stay_symmetric() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut list = DoublyLinkedList::new();
    let mut model: VecDeque<i32> = VecDeque::new();

    for step in 0..2_000 {
        let value = rng.gen_range(0..1_000);
        match rng.gen_range(0..7) {
            0 => {
                list.push_back(value);
                model.push_back(value);
            }
            1 => {
                list.push_front(value);
                model.push_front(value);
            }
            2 => assert_eq!(list.pop_back(), model.pop_back()),
            3 => assert_eq!(list.pop_front(), model.pop_front()),
            4 => {
                let index = rng.gen_range(0..=model.len());
                list.insert(index, value).unwrap();
                model.insert(index, value);
            }
            5 if !model.is_empty() => {
                let index = rng.gen_range(0..model.len());
                assert_eq!(list.remove(index).ok(), model.remove(index));
            }
            _ => {
                list.reverse();
                let reversed: VecDeque<i32> = model.iter().rev().copied().collect();
                model = reversed;
            }
        }

        assert!(
            list.check_link_symmetry(),
            "prev/next symmetry broken at step {}",
            step
        );
        assert_eq!(list.len(), model.len());
        assert_eq!(list.to_vec(), Vec::from(model.clone()));
    }
}

#[test]
fn bst_in_order_stays_sorted_through_inserts_and_removes() {
    let mut rng = StdRng::seed_from_u64(2);
    let mut tree = BinarySearchTree::new();
    let mut model: Vec<i32> = Vec::new();

    for _ in 0..1_000 {
        let value = rng.gen_range(0..200);
        if rng.gen_bool(0.6) {
            let inserted = tree.insert(value);
            assert_eq!(inserted, !model.contains(&value));
            if inserted {
                model.push(value);
            }
        } else {
            let removed = tree.remove(&value);
            assert_eq!(removed, model.contains(&value));
            if removed {
                model.retain(|v| *v != value);
            }
        }

        let mut expected = model.clone();
        expected.sort_unstable();
        assert_eq!(tree.in_order(), expected);
        assert_eq!(tree.len(), model.len());
        assert_eq!(tree.min(), expected.first());
        assert_eq!(tree.max(), expected.last());
    }
}

#[test]
fn max_heap_always_pops_the_current_maximum() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut heap = MaxBinaryHeap::new();
    let mut model: Vec<i32> = Vec::new();

    for _ in 0..2_000 {
        if rng.gen_bool(0.6) {
            let value = rng.gen_range(-500..500);
            heap.push(value);
            model.push(value);
        } else {
            let expected = model.iter().max().copied();
            assert_eq!(heap.pop(), expected);
            if let Some(max) = expected {
                let position = model.iter().position(|v| *v == max).unwrap();
                model.swap_remove(position);
            }
        }
        assert_eq!(heap.len(), model.len());
        assert_eq!(heap.peek(), model.iter().max());
    }
}

#[test]
fn min_heap_always_pops_the_current_minimum() {
    let mut rng = StdRng::seed_from_u64(4);
    let mut heap = MinBinaryHeap::new();
    let mut model: Vec<i32> = Vec::new();

    for _ in 0..2_000 {
        if rng.gen_bool(0.6) {
            let value = rng.gen_range(-500..500);
            heap.push(value);
            model.push(value);
        } else {
            let expected = model.iter().min().copied();
            assert_eq!(heap.pop(), expected);
            if let Some(min) = expected {
                let position = model.iter().position(|v| *v == min).unwrap();
                model.swap_remove(position);
            }
        }
        assert_eq!(heap.peek(), model.iter().min());
    }
}

#[test]
fn chained_table_matches_hashmap_model() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut table = ChainedHashTable::new();
    let mut model: HashMap<String, i32> = HashMap::new();

    for _ in 0..2_000 {
        let key = format!("key{}", rng.gen_range(0..120));
        if rng.gen_bool(0.7) {
            let value = rng.gen_range(0..1_000);
            assert_eq!(table.set(&key, value), model.insert(key.clone(), value));
        } else {
            assert_eq!(table.get(&key), model.get(&key));
        }
        assert_eq!(table.len(), model.len());
    }

    // keys() enumerates each distinct key exactly once.
    let mut keys: Vec<&str> = table.keys();
    keys.sort_unstable();
    let mut expected: Vec<&str> = model.keys().map(|k| k.as_str()).collect();
    expected.sort_unstable();
    assert_eq!(keys, expected);
}

#[test]
fn probed_table_matches_hashmap_model() {
    let mut rng = StdRng::seed_from_u64(6);
    let mut table = LinearProbeTable::new();
    let mut model: HashMap<String, i32> = HashMap::new();

    for _ in 0..3_000 {
        // Keep the keyspace a bit below capacity (53) so sets keep
        // succeeding while collisions and tombstones stay frequent.
        let key = format!("key{}", rng.gen_range(0..40));
        match rng.gen_range(0..3) {
            0 | 1 => {
                let value = rng.gen_range(0..1_000);
                assert_eq!(
                    table.set(&key, value).unwrap(),
                    model.insert(key.clone(), value)
                );
            }
            _ => {
                if rng.gen_bool(0.5) {
                    assert_eq!(table.remove(&key), model.remove(&key));
                } else {
                    assert_eq!(table.get(&key), model.get(&key));
                }
            }
        }
        assert_eq!(table.len(), model.len());
    }

    let mut keys: Vec<&str> = table.keys();
    keys.sort_unstable();
    let mut expected: Vec<&str> = model.keys().map(|k| k.as_str()).collect();
    expected.sort_unstable();
    assert_eq!(keys, expected);
}

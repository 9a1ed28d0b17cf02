//! Classic comparison sorts.
//!
//! Each function consumes a `Vec` and returns it (or a fresh one) sorted
//! ascending. The quadratic sorts and quick sort work in place; merge sort
//! allocates merged buffers; heap sort routes everything through a
//! [`MinBinaryHeap`] and is the only place in the crate where one component
//! builds on another.

use crate::heap::MinBinaryHeap;

/// Bubble sort: adjacent-pair passes over a shrinking unsorted suffix.
///
/// A pass that performs no swap proves the values are sorted and exits
/// early, so already-sorted input costs a single O(n) pass.
pub fn bubble_sort<T: Ord>(mut values: Vec<T>) -> Vec<T> {
    let len = values.len();
    for i in 0..len.saturating_sub(1) {
        let mut swapped = false;
        for j in 0..len - i - 1 {
            if values[j] > values[j + 1] {
                values.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
    values
}

/// Selection sort: scan the remainder for its minimum, swap it into place.
///
/// The swap is skipped when the minimum is already in position. O(n²)
/// regardless of input order.
pub fn selection_sort<T: Ord>(mut values: Vec<T>) -> Vec<T> {
    for i in 0..values.len() {
        let mut lowest = i;
        for j in (i + 1)..values.len() {
            if values[j] < values[lowest] {
                lowest = j;
            }
        }
        if lowest != i {
            values.swap(i, lowest);
        }
    }
    values
}

/// Insertion sort: from the second element onward, walk each value left
/// until it sits after its nearest smaller-or-equal predecessor.
pub fn insertion_sort<T: Ord>(mut values: Vec<T>) -> Vec<T> {
    for i in 1..values.len() {
        let mut j = i;
        while j > 0 && values[j] < values[j - 1] {
            values.swap(j, j - 1);
            j -= 1;
        }
    }
    values
}

/// Merge sort: recursive halving with a stable two-pointer merge.
///
/// Not in place; every merge allocates a fresh buffer. On ties the
/// left-half element is taken first, which makes the sort stable.
pub fn merge_sort<T: Ord>(mut values: Vec<T>) -> Vec<T> {
    if values.len() <= 1 {
        return values;
    }
    let mid = values.len() / 2;
    let right = values.split_off(mid);
    let left = merge_sort(values);
    let right = merge_sort(right);
    merge(left, right)
}

/// Linear merge of two sorted runs.
fn merge<T: Ord>(left: Vec<T>, right: Vec<T>) -> Vec<T> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => {
                if l <= r {
                    merged.extend(left.next());
                } else {
                    merged.extend(right.next());
                }
            }
            (Some(_), None) => merged.extend(left.next()),
            (None, Some(_)) => merged.extend(right.next()),
            (None, None) => break,
        }
    }
    merged
}

/// Quick sort: in-place Lomuto partition pivoting on the FIRST element of
/// each subrange.
///
/// First-element pivoting makes sorted and reverse-sorted input the O(n²)
/// worst case; that choice is part of the algorithm's contract here, not
/// an oversight.
pub fn quick_sort<T: Ord>(mut values: Vec<T>) -> Vec<T> {
    quick_sort_slice(&mut values);
    values
}

fn quick_sort_slice<T: Ord>(values: &mut [T]) {
    if values.len() <= 1 {
        return;
    }
    let pivot = partition(values);
    let (left, rest) = values.split_at_mut(pivot);
    quick_sort_slice(left);
    quick_sort_slice(&mut rest[1..]);
}

/// Move everything smaller than `values[0]` to the front, then settle the
/// pivot at the boundary. Returns the pivot's final index.
fn partition<T: Ord>(values: &mut [T]) -> usize {
    let mut swap_index = 0;
    for i in 1..values.len() {
        if values[i] < values[0] {
            swap_index += 1;
            values.swap(i, swap_index);
        }
    }
    values.swap(0, swap_index);
    swap_index
}

/// Heap sort: push everything through a min-heap and drain ascending.
pub fn heap_sort<T: Ord>(values: Vec<T>) -> Vec<T> {
    let mut heap = MinBinaryHeap::new();
    let mut sorted = Vec::with_capacity(values.len());
    for value in values {
        heap.push(value);
    }
    while let Some(value) = heap.pop() {
        sorted.push(value);
    }
    sorted
}

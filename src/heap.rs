//! Array-backed binary heaps.
//!
//! Both heaps store their values densely in a zero-indexed `Vec`, so the
//! parent of index `i` sits at `(i - 1) / 2` and its children at `2i + 1`
//! and `2i + 2`. [`MaxBinaryHeap`] keeps the largest value at the root,
//! [`MinBinaryHeap`] the smallest; the min variant also feeds
//! [`heap_sort`](crate::sorting::heap_sort).

/// Priority container with the maximum value at the root.
///
/// # Examples
///
/// ```
/// use dsakit::MaxBinaryHeap;
///
/// let mut heap = MaxBinaryHeap::new();
/// heap.push(3);
/// heap.push(7);
/// heap.push(5);
///
/// assert_eq!(heap.peek(), Some(&7));
/// assert_eq!(heap.pop(), Some(7));
/// assert_eq!(heap.pop(), Some(5));
/// assert_eq!(heap.pop(), Some(3));
/// assert_eq!(heap.pop(), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MaxBinaryHeap<T> {
    values: Vec<T>,
}

impl<T: Ord> MaxBinaryHeap<T> {
    /// Create an empty heap.
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// Insert a value, sifting it up until the heap invariant holds.
    pub fn push(&mut self, value: T) {
        self.values.push(value);
        let mut index = self.values.len() - 1;
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.values[parent] >= self.values[index] {
                break;
            }
            self.values.swap(parent, index);
            index = parent;
        }
    }

    /// Remove and return the maximum value, or `None` if the heap is empty.
    ///
    /// The root is swapped with the last element, the array shrinks by one,
    /// and the displaced value sifts down toward the leaves.
    pub fn pop(&mut self) -> Option<T> {
        if self.values.is_empty() {
            return None;
        }
        let last = self.values.len() - 1;
        self.values.swap(0, last);
        let extracted = self.values.pop();

        let mut index = 0;
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut largest = index;

            if left < self.values.len() && self.values[left] > self.values[largest] {
                largest = left;
            }
            if right < self.values.len() && self.values[right] > self.values[largest] {
                largest = right;
            }
            if largest == index {
                break;
            }
            self.values.swap(index, largest);
            index = largest;
        }
        extracted
    }

    /// Reference to the maximum value without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.values.first()
    }

    /// Number of values held.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the heap holds no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Drop every value.
    pub fn clear(&mut self) {
        self.values.clear();
    }
}

impl<T: Ord> FromIterator<T> for MaxBinaryHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Self::new();
        for value in iter {
            heap.push(value);
        }
        heap
    }
}

/// Priority container with the minimum value at the root.
///
/// The mirror image of [`MaxBinaryHeap`]; every comparison flips.
#[derive(Debug, Clone, Default)]
pub struct MinBinaryHeap<T> {
    values: Vec<T>,
}

impl<T: Ord> MinBinaryHeap<T> {
    /// Create an empty heap.
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// Insert a value, sifting it up until the heap invariant holds.
    pub fn push(&mut self, value: T) {
        self.values.push(value);
        let mut index = self.values.len() - 1;
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.values[parent] <= self.values[index] {
                break;
            }
            self.values.swap(parent, index);
            index = parent;
        }
    }

    /// Remove and return the minimum value, or `None` if the heap is empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.values.is_empty() {
            return None;
        }
        let last = self.values.len() - 1;
        self.values.swap(0, last);
        let extracted = self.values.pop();

        let mut index = 0;
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut smallest = index;

            if left < self.values.len() && self.values[left] < self.values[smallest] {
                smallest = left;
            }
            if right < self.values.len() && self.values[right] < self.values[smallest] {
                smallest = right;
            }
            if smallest == index {
                break;
            }
            self.values.swap(index, smallest);
            index = smallest;
        }
        extracted
    }

    /// Reference to the minimum value without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.values.first()
    }

    /// Number of values held.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the heap holds no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Drop every value.
    pub fn clear(&mut self) {
        self.values.clear();
    }
}

impl<T: Ord> FromIterator<T> for MinBinaryHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Self::new();
        for value in iter {
            heap.push(value);
        }
        heap
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parent_of(index: usize) -> usize {
        (index - 1) / 2
    }

    fn assert_max_invariant(heap: &MaxBinaryHeap<i32>) {
        for i in 1..heap.values.len() {
            assert!(
                heap.values[parent_of(i)] >= heap.values[i],
                "max-heap violated at index {}",
                i
            );
        }
    }

    fn assert_min_invariant(heap: &MinBinaryHeap<i32>) {
        for i in 1..heap.values.len() {
            assert!(
                heap.values[parent_of(i)] <= heap.values[i],
                "min-heap violated at index {}",
                i
            );
        }
    }

    #[test]
    fn max_heap_pops_descending() {
        let mut heap: MaxBinaryHeap<i32> =
            [41, 39, 33, 18, 27, 12, 55].into_iter().collect();
        assert_max_invariant(&heap);
        assert_eq!(heap.peek(), Some(&55));

        let mut drained = Vec::new();
        while let Some(value) = heap.pop() {
            assert_max_invariant(&heap);
            drained.push(value);
        }
        assert_eq!(drained, vec![55, 41, 39, 33, 27, 18, 12]);
    }

    #[test]
    fn min_heap_pops_ascending() {
        let mut heap: MinBinaryHeap<i32> =
            [41, 39, 33, 18, 27, 12, 55].into_iter().collect();
        assert_min_invariant(&heap);
        assert_eq!(heap.peek(), Some(&12));

        let mut drained = Vec::new();
        while let Some(value) = heap.pop() {
            assert_min_invariant(&heap);
            drained.push(value);
        }
        assert_eq!(drained, vec![12, 18, 27, 33, 39, 41, 55]);
    }

    #[test]
    fn pop_on_empty_returns_none() {
        let mut max: MaxBinaryHeap<i32> = MaxBinaryHeap::new();
        let mut min: MinBinaryHeap<i32> = MinBinaryHeap::new();
        assert_eq!(max.pop(), None);
        assert_eq!(min.pop(), None);
        assert_eq!(max.peek(), None);
        assert_eq!(min.peek(), None);
    }

    #[test]
    fn duplicates_are_all_returned() {
        let mut heap: MaxBinaryHeap<i32> = [5, 5, 5, 1].into_iter().collect();
        assert_eq!(heap.pop(), Some(5));
        assert_eq!(heap.pop(), Some(5));
        assert_eq!(heap.pop(), Some(5));
        assert_eq!(heap.pop(), Some(1));
    }

    #[test]
    fn interleaved_push_pop_keeps_invariant() {
        let mut heap = MinBinaryHeap::new();
        heap.push(10);
        heap.push(4);
        assert_eq!(heap.pop(), Some(4));
        heap.push(7);
        heap.push(1);
        heap.push(12);
        assert_min_invariant(&heap);
        assert_eq!(heap.pop(), Some(1));
        assert_eq!(heap.pop(), Some(7));
        assert_eq!(heap.pop(), Some(10));
        assert_eq!(heap.pop(), Some(12));
    }
}

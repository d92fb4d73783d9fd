/*!
A max-heap over a fixed collection of indexed values.

Each value has a fixed index, and the heap holds some subset of those indicies ordered by value.
An index may be [activated](IndexHeap::activate) (moved onto the heap) or [popped](IndexHeap::pop_max) (moved off the heap) any number of times, while the value of the index persists.

[IndexHeap] is used to store the activity of [atoms](crate::structures::atom), as an atom is an index and it is useful to choose an atom without a value of greatest activity when making a decision.

```rust
# use portfolio_sat::generic::index_heap::IndexHeap;
let mut heap = IndexHeap::from_values(vec![0, 10, 70, 30]);

heap.activate(1);
heap.activate(2);
heap.activate(3);

heap.apply_to_index(1, |v| v + 100);
heap.heapify_if_active(1);

assert_eq!(heap.pop_max(), Some(1));
assert_eq!(heap.pop_max(), Some(2));
assert_eq!(heap.pop_max(), Some(3));
assert!(heap.pop_max().is_none());

assert_eq!(heap.value_at(1), Some(&110));
```
*/

/// The index heap struct.
#[derive(Clone, Debug, Default)]
pub struct IndexHeap<V: PartialOrd + Copy> {
    /// The value of each index.
    values: Vec<V>,

    /// Where an index is on the heap, if it is on the heap.
    position: Vec<Option<usize>>,

    /// The heap, of indicies.
    heap: Vec<usize>,
}

impl<V: PartialOrd + Copy> IndexHeap<V> {
    /// A heap with one inactive index for each value.
    pub fn from_values(values: Vec<V>) -> Self {
        let count = values.len();
        IndexHeap {
            values,
            position: vec![None; count],
            heap: Vec::with_capacity(count),
        }
    }

    /// Move `index` onto the heap, if not already present.
    /// Returns true if the index was moved onto the heap, false otherwise.
    pub fn activate(&mut self, index: usize) -> bool {
        match self.position.get(index) {
            Some(None) => {
                let at = self.heap.len();
                self.heap.push(index);
                self.position[index] = Some(at);
                self.sift_up(at);
                true
            }
            _ => false,
        }
    }

    /// True if `index` is on the heap.
    pub fn is_active(&self, index: usize) -> bool {
        matches!(self.position.get(index), Some(Some(_)))
    }

    /// Remove the index of greatest value from the heap, and return the index.
    pub fn pop_max(&mut self) -> Option<usize> {
        let last = self.heap.len().checked_sub(1)?;
        self.swap(0, last);
        let max = self.heap.pop()?;
        self.position[max] = None;
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some(max)
    }

    /// The value of `index`.
    pub fn value_at(&self, index: usize) -> Option<&V> {
        self.values.get(index)
    }

    /// Replace the value of `index` with `f` applied to the value.
    ///
    /// The heap is not updated, see [heapify_if_active](IndexHeap::heapify_if_active) or [heapify](IndexHeap::heapify).
    pub fn apply_to_index(&mut self, index: usize, f: impl Fn(V) -> V) {
        if let Some(value) = self.values.get_mut(index) {
            *value = f(*value);
        }
    }

    /// Replace every value with `f` applied to the value.
    ///
    /// As with [apply_to_index](IndexHeap::apply_to_index), the heap is not updated.
    /// Though, if `f` is monotone the heap remains valid.
    pub fn apply_to_all(&mut self, f: impl Fn(V) -> V) {
        for value in self.values.iter_mut() {
            *value = f(*value);
        }
    }

    /// Restore the heap property around `index`, if `index` is on the heap.
    pub fn heapify_if_active(&mut self, index: usize) {
        if let Some(Some(at)) = self.position.get(index).copied() {
            let at = self.sift_up(at);
            self.sift_down(at);
        }
    }

    /// Restore the heap property across the whole heap.
    pub fn heapify(&mut self) {
        for at in (0..self.heap.len() / 2).rev() {
            self.sift_down(at);
        }
    }

    /// The number of indicies on the heap.
    pub fn active_count(&self) -> usize {
        self.heap.len()
    }
}

impl<V: PartialOrd + Copy> IndexHeap<V> {
    fn value_on_heap(&self, at: usize) -> V {
        self.values[self.heap[at]]
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.position[self.heap[a]] = Some(a);
        self.position[self.heap[b]] = Some(b);
    }

    /// Returns the resting place of the element at `at`.
    fn sift_up(&mut self, mut at: usize) -> usize {
        while at > 0 {
            let parent = (at - 1) / 2;
            if self.value_on_heap(parent) < self.value_on_heap(at) {
                self.swap(parent, at);
                at = parent;
            } else {
                break;
            }
        }
        at
    }

    fn sift_down(&mut self, mut at: usize) {
        let limit = self.heap.len();
        loop {
            let left = 2 * at + 1;
            let right = left + 1;
            let mut largest = at;

            if left < limit && self.value_on_heap(left) > self.value_on_heap(largest) {
                largest = left;
            }
            if right < limit && self.value_on_heap(right) > self.value_on_heap(largest) {
                largest = right;
            }

            if largest == at {
                break;
            }
            self.swap(at, largest);
            at = largest;
        }
    }
}

/// Binary min-heap over ordered keys.
///
/// Positions are 1-indexed: the parent of `k` is `k / 2` and its children
/// are `2k` and `2k + 1`. Storage is a growable `Vec`, with position `k`
/// living at `heap[k - 1]`.
#[derive(Debug, Clone)]
pub struct MinPq<K> {
    heap: Vec<K>,
}

impl<K: Ord> MinPq<K> {
    pub fn new() -> Self {
        Self { heap: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Appends `key` and swims it up until heap order holds.
    pub fn insert(&mut self, key: K) {
        self.heap.push(key);
        self.swim(self.heap.len());
    }

    /// The smallest key.
    ///
    /// # Panics
    ///
    /// Panics if the queue is empty.
    pub fn min(&self) -> &K {
        self.heap.first().expect("min() on an empty priority queue")
    }

    /// Removes and returns the smallest key.
    ///
    /// # Panics
    ///
    /// Panics if the queue is empty.
    pub fn del_min(&mut self) -> K {
        assert!(!self.heap.is_empty(), "del_min() on an empty priority queue");
        let last = self.heap.len();
        self.exch(1, last);
        let min = self.heap.pop().expect("queue checked non-empty");
        self.sink(1);
        min
    }

    fn greater(&self, i: usize, j: usize) -> bool {
        self.heap[i - 1] > self.heap[j - 1]
    }

    fn exch(&mut self, i: usize, j: usize) {
        self.heap.swap(i - 1, j - 1);
    }

    fn swim(&mut self, mut k: usize) {
        while k > 1 && self.greater(k / 2, k) {
            self.exch(k, k / 2);
            k /= 2;
        }
    }

    fn sink(&mut self, mut k: usize) {
        let size = self.heap.len();
        while 2 * k <= size {
            let mut j = 2 * k;
            // Pick the smaller child.
            if j < size && self.greater(j, j + 1) {
                j += 1;
            }
            if !self.greater(k, j) {
                break;
            }
            self.exch(k, j);
            k = j;
        }
    }
}

impl<K: Ord> Default for MinPq<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord> Extend<K> for MinPq<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K: Ord> FromIterator<K> for MinPq<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut pq = Self::new();
        pq.extend(iter);
        pq
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn is_heap_ordered<K: Ord>(pq: &MinPq<K>) -> bool {
        (2..=pq.len()).all(|k| !pq.greater(k / 2, k))
    }

    #[test]
    fn drains_in_ascending_order() {
        let mut pq: MinPq<u32> = [5, 3, 9, 1, 4, 1, 8].into_iter().collect();
        assert_eq!(pq.len(), 7);
        assert_eq!(*pq.min(), 1);

        let mut out = Vec::new();
        while !pq.is_empty() {
            out.push(pq.del_min());
        }
        assert_eq!(out, vec![1, 1, 3, 4, 5, 8, 9]);
    }

    #[test]
    fn sink_reaches_the_last_child() {
        // The last element is the only child of the new root after one
        // removal; it must still be compared.
        let mut pq: MinPq<u32> = [1, 3, 2].into_iter().collect();
        assert_eq!(pq.del_min(), 1);
        assert_eq!(pq.del_min(), 2);
        assert_eq!(pq.del_min(), 3);
        assert!(pq.is_empty());
    }

    #[test]
    fn interleaved_insert_and_remove() {
        let mut pq = MinPq::with_capacity(4);
        pq.insert(10);
        pq.insert(2);
        assert_eq!(pq.del_min(), 2);
        pq.insert(7);
        pq.insert(1);
        assert_eq!(*pq.min(), 1);
        assert_eq!(pq.len(), 3);
        assert!(is_heap_ordered(&pq));
    }

    #[test]
    #[should_panic(expected = "empty priority queue")]
    fn min_on_empty_queue_panics() {
        let pq: MinPq<u32> = MinPq::default();
        pq.min();
    }

    #[test]
    #[should_panic(expected = "empty priority queue")]
    fn del_min_on_empty_queue_panics() {
        let mut pq: MinPq<u32> = MinPq::new();
        pq.del_min();
    }

    proptest! {
        #[test]
        fn heap_sorts_any_input(mut keys in prop::collection::vec(any::<i32>(), 0..200)) {
            let mut pq: MinPq<i32> = keys.iter().copied().collect();
            prop_assert!(is_heap_ordered(&pq));

            let mut out = Vec::with_capacity(keys.len());
            while !pq.is_empty() {
                out.push(pq.del_min());
                prop_assert!(is_heap_ordered(&pq));
            }
            keys.sort_unstable();
            prop_assert_eq!(out, keys);
        }
    }
}

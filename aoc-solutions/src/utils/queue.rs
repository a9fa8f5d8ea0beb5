//! Min-priority queue used by the graph walks.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Min-priority queue over `u64` priorities.
///
/// Items with equal priority come out in insertion order. There is no
/// decrease-key: push the item again with the better priority and skip stale
/// entries on pop (see `Board::walk_with`).
///
/// ```rust
/// use aoc_solutions::utils::queue::PriorityQueue;
///
/// let mut queue = PriorityQueue::new();
/// queue.push("far", 7);
/// queue.push("near", 1);
/// queue.push("tied", 1);
///
/// assert_eq!(queue.pop(), Some(("near", 1)));
/// assert_eq!(queue.pop(), Some(("tied", 1)));
/// assert_eq!(queue.pop(), Some(("far", 7)));
/// assert!(queue.is_empty());
/// ```
pub struct PriorityQueue<T> {
    heap: BinaryHeap<Entry<T>>,
    next_seq: u64,
}

struct Entry<T> {
    priority: u64,
    seq: u64,
    item: T,
}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap.
        (other.priority, other.seq).cmp(&(self.priority, self.seq))
    }
}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        (self.priority, self.seq) == (other.priority, other.seq)
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PriorityQueue<T> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            next_seq: 0,
        }
    }

    pub fn push(&mut self, item: T, priority: u64) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry {
            priority,
            seq,
            item,
        });
    }

    /// Remove the item with the smallest priority
    pub fn pop(&mut self) -> Option<(T, u64)> {
        self.heap.pop().map(|entry| (entry.item, entry.priority))
    }

    pub fn peek_priority(&self) -> Option<u64> {
        self.heap.peek().map(|entry| entry.priority)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<(T, u64)> for PriorityQueue<T> {
    fn extend<I: IntoIterator<Item = (T, u64)>>(&mut self, iter: I) {
        for (item, priority) in iter {
            self.push(item, priority);
        }
    }
}

impl<T> FromIterator<(T, u64)> for PriorityQueue<T> {
    fn from_iter<I: IntoIterator<Item = (T, u64)>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_queue() {
        let mut queue: PriorityQueue<u8> = PriorityQueue::default();
        assert!(queue.is_empty());
        assert_eq!(queue.peek_priority(), None);
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn test_stale_entries_are_kept() {
        let mut queue: PriorityQueue<char> = [('a', 5), ('b', 3)].into_iter().collect();
        queue.push('a', 1);
        assert_eq!(queue.len(), 3);
        assert_eq!(queue.pop(), Some(('a', 1)));
        assert_eq!(queue.pop(), Some(('b', 3)));
        assert_eq!(queue.pop(), Some(('a', 5)));
    }

    proptest! {
        #[test]
        fn prop_pops_in_priority_then_insertion_order(priorities in prop::collection::vec(0u64..20, 0..64)) {
            let mut queue = PriorityQueue::new();
            for (index, &priority) in priorities.iter().enumerate() {
                queue.push(index, priority);
            }

            let mut expected: Vec<(usize, u64)> = priorities.iter().copied().enumerate().collect();
            expected.sort_by_key(|&(index, priority)| (priority, index));

            let mut popped = Vec::new();
            while let Some(entry) = queue.pop() {
                popped.push(entry);
            }
            prop_assert_eq!(popped, expected);
        }
    }
}

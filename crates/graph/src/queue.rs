//! Binary-heap backed min-priority queue.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Min-priority frontier used by Dijkstra and A*.
///
/// Items with equal priority leave the queue in the order they were
/// enqueued, which keeps search output reproducible.
#[derive(Clone, Debug)]
pub struct PriorityQueue<T> {
    heap: BinaryHeap<Entry<T>>,
    next_sequence: u64,
}

#[derive(Clone, Debug)]
struct Entry<T> {
    priority: f64,
    sequence: u64,
    item: T,
}

// BinaryHeap is a max-heap: the "greatest" entry is the one with the lowest
// priority and, among equals, the lowest sequence number.
impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for Entry<T> {}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_sequence: 0,
        }
    }
}

impl<T> PriorityQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an item with the given priority (lower leaves first).
    pub fn enqueue(&mut self, item: T, priority: f64) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.heap.push(Entry {
            priority,
            sequence,
            item,
        });
    }

    /// Removes and returns the item with the lowest priority.
    ///
    /// Returns `None` when the queue is empty.
    pub fn dequeue(&mut self) -> Option<T> {
        self.heap.pop().map(|entry| entry.item)
    }

    /// Priority of the item [`dequeue`](Self::dequeue) would return next.
    pub fn peek_priority(&self) -> Option<f64> {
        self.heap.peek().map(|entry| entry.priority)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ties_leave_in_insertion_order() {
        let mut queue = PriorityQueue::new();
        queue.enqueue('a', 5.0);
        queue.enqueue('b', 2.0);
        queue.enqueue('c', 2.0);

        assert_eq!(queue.dequeue(), Some('b'));
        assert_eq!(queue.dequeue(), Some('c'));
        assert_eq!(queue.dequeue(), Some('a'));
        assert_eq!(queue.dequeue(), None);
    }

    #[test]
    fn long_tie_run_stays_stable() {
        let mut queue = PriorityQueue::new();
        for item in 0..50 {
            queue.enqueue(item, 1.0);
        }
        queue.enqueue(99, 0.5);

        assert_eq!(queue.dequeue(), Some(99));
        let drained: Vec<_> = std::iter::from_fn(|| queue.dequeue()).collect();
        assert_eq!(drained, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn length_tracks_contents() {
        let mut queue = PriorityQueue::new();
        assert!(queue.is_empty());

        queue.enqueue("x", 3.5);
        queue.enqueue("y", 0.25);
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.peek_priority(), Some(0.25));

        queue.dequeue();
        assert_eq!(queue.len(), 1);
    }
}

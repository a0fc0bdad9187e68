use super::errors::SimulationError;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// An item paired with the sequence number it was added under
#[derive(Debug)]
struct QueuedItem<T> {
    sequence_num: u64,
    item: T,
}

impl<T: Ord> PartialEq for QueuedItem<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T: Ord> Eq for QueuedItem<T> {}

impl<T: Ord> PartialOrd for QueuedItem<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Ord> Ord for QueuedItem<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap (BinaryHeap is max-heap by default)
        other
            .item
            .cmp(&self.item)
            .then_with(|| other.sequence_num.cmp(&self.sequence_num))
    }
}

/// Min-priority queue that hands back equal items in the order they were added.
///
/// The sequence number only decides between items whose own ordering says
/// they are equal; it is never part of the item itself.
#[derive(Debug)]
pub struct StablePriorityQueue<T: Ord> {
    heap: BinaryHeap<QueuedItem<T>>,
    sequence_counter: u64,
}

impl<T: Ord> StablePriorityQueue<T> {
    /// Create an empty queue
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            sequence_counter: 0,
        }
    }

    /// Add an item to the queue
    pub fn add(&mut self, item: T) {
        self.heap.push(QueuedItem {
            sequence_num: self.sequence_counter,
            item,
        });
        self.sequence_counter += 1;
    }

    /// Remove and return the smallest item, oldest first among equals
    pub fn remove(&mut self) -> Result<T, SimulationError> {
        self.heap
            .pop()
            .map(|queued| queued.item)
            .ok_or(SimulationError::EmptyQueue)
    }

    /// Look at the item `remove` would return next
    pub fn peek(&self) -> Option<&T> {
        self.heap.peek().map(|queued| &queued.item)
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }
}

impl<T: Ord> Default for StablePriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> Extend<T> for StablePriorityQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

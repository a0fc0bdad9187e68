use crate::core::types::Customer;
use std::collections::VecDeque;

/// FIFO of customers shared by every kind of checkout line.
///
/// Holds at most `capacity` customers. Once closed it never reopens.
#[derive(Debug, Clone)]
pub struct LineQueue {
    capacity: usize,
    is_open: bool,
    customers: VecDeque<Customer>,
}

impl LineQueue {
    /// Create an open, empty queue
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            is_open: true,
            customers: VecDeque::with_capacity(capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    /// Open with at least one free spot
    pub fn has_room(&self) -> bool {
        self.is_open && self.customers.len() < self.capacity
    }

    /// Append a customer; the caller has already checked eligibility
    pub(crate) fn push_back(&mut self, customer: Customer) {
        debug_assert!(self.has_room());
        self.customers.push_back(customer);
    }

    pub fn front(&self) -> Option<&Customer> {
        self.customers.front()
    }

    /// Item time of the front customer, panicking on an empty line
    pub(crate) fn front_item_time(&self) -> u64 {
        match self.customers.front() {
            Some(customer) => customer.item_time(),
            None => panic!("next_checkout_time called on an empty checkout line"),
        }
    }

    /// Drop the front customer if any, returning how many remain
    pub fn remove_front(&mut self) -> usize {
        self.customers.pop_front();
        self.customers.len()
    }

    /// Mark closed and hand back everyone behind the front customer, in order
    pub fn close(&mut self) -> Vec<Customer> {
        self.is_open = false;
        if self.customers.len() <= 1 {
            return Vec::new();
        }
        self.customers.split_off(1).into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Item;

    fn customer(name: &str) -> Customer {
        Customer::new(name, vec![Item::new("cheese", 3)])
    }

    #[test]
    fn test_new_queue_is_open_and_empty() {
        let q = LineQueue::new(1);
        assert_eq!(q.capacity(), 1);
        assert!(q.is_open());
        assert!(q.is_empty());
        assert!(q.has_room());
    }

    #[test]
    fn test_remove_front_on_empty_is_noop() {
        let mut q = LineQueue::new(1);
        q.push_back(customer("Sophia"));
        assert_eq!(q.remove_front(), 0);
        assert_eq!(q.remove_front(), 0);
    }

    #[test]
    fn test_close_keeps_front_only() {
        let mut q = LineQueue::new(3);
        q.push_back(customer("a"));
        q.push_back(customer("b"));
        q.push_back(customer("c"));

        let removed = q.close();
        let names: Vec<&str> = removed.iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["b", "c"]);
        assert_eq!(q.len(), 1);
        assert_eq!(q.front().map(|c| c.name()), Some("a"));
        assert!(!q.is_open());
        assert!(!q.has_room());
    }

    #[test]
    fn test_close_empty_queue() {
        let mut q = LineQueue::new(2);
        assert!(q.close().is_empty());
        assert!(!q.is_open());
    }

    #[test]
    #[should_panic(expected = "empty checkout line")]
    fn test_front_item_time_on_empty_panics() {
        let q = LineQueue::new(2);
        q.front_item_time();
    }
}

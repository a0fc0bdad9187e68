use super::queue::LineQueue;
use super::traits::{CheckoutLine, LineKind};
use crate::core::types::Customer;

/// Most items a customer may have and still use an express line
pub const EXPRESS_LIMIT: usize = 7;

/// Cashier line, takes anyone
#[derive(Debug, Clone)]
pub struct RegularLine {
    queue: LineQueue,
}

impl RegularLine {
    pub fn new(capacity: usize) -> Self {
        Self {
            queue: LineQueue::new(capacity),
        }
    }
}

impl CheckoutLine for RegularLine {
    fn kind(&self) -> LineKind {
        LineKind::Regular
    }

    fn queue(&self) -> &LineQueue {
        &self.queue
    }

    fn queue_mut(&mut self) -> &mut LineQueue {
        &mut self.queue
    }

    fn next_checkout_time(&self) -> u64 {
        self.queue.front_item_time()
    }
}

/// Cashier line limited to customers with at most [`EXPRESS_LIMIT`] items
#[derive(Debug, Clone)]
pub struct ExpressLine {
    queue: LineQueue,
}

impl ExpressLine {
    pub fn new(capacity: usize) -> Self {
        Self {
            queue: LineQueue::new(capacity),
        }
    }
}

impl CheckoutLine for ExpressLine {
    fn kind(&self) -> LineKind {
        LineKind::Express
    }

    fn queue(&self) -> &LineQueue {
        &self.queue
    }

    fn queue_mut(&mut self) -> &mut LineQueue {
        &mut self.queue
    }

    fn next_checkout_time(&self) -> u64 {
        self.queue.front_item_time()
    }

    fn can_accept(&self, customer: &Customer) -> bool {
        self.queue.has_room() && customer.num_items() <= EXPRESS_LIMIT
    }
}

/// Self-checkout; customers scan twice as slowly as a cashier
#[derive(Debug, Clone)]
pub struct SelfServeLine {
    queue: LineQueue,
}

impl SelfServeLine {
    pub fn new(capacity: usize) -> Self {
        Self {
            queue: LineQueue::new(capacity),
        }
    }
}

impl CheckoutLine for SelfServeLine {
    fn kind(&self) -> LineKind {
        LineKind::SelfServe
    }

    fn queue(&self) -> &LineQueue {
        &self.queue
    }

    fn queue_mut(&mut self) -> &mut LineQueue {
        &mut self.queue
    }

    fn next_checkout_time(&self) -> u64 {
        self.queue.front_item_time() * 2
    }
}

use super::queue::LineQueue;
use crate::core::types::Customer;
use serde::{Deserialize, Serialize};

/// The kinds of checkout line a store can have
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineKind {
    Regular,
    Express,
    SelfServe,
}

impl std::fmt::Display for LineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LineKind::Regular => write!(f, "regular"),
            LineKind::Express => write!(f, "express"),
            LineKind::SelfServe => write!(f, "self-serve"),
        }
    }
}

/// Queueing policy of a checkout line.
///
/// Implementors own a [`LineQueue`] and decide two things: how long the
/// front customer takes, and who may join. Everything else is shared through
/// the provided methods.
pub trait CheckoutLine: std::fmt::Debug + Send {
    fn kind(&self) -> LineKind;

    fn queue(&self) -> &LineQueue;

    fn queue_mut(&mut self) -> &mut LineQueue;

    /// Time to check out the front customer.
    ///
    /// # Panics
    /// If the line is empty.
    fn next_checkout_time(&self) -> u64;

    /// True iff the line is open, has room, and the customer is eligible
    fn can_accept(&self, _customer: &Customer) -> bool {
        self.queue().has_room()
    }

    /// Add `customer` to the back of the line.
    ///
    /// A customer the line cannot take is handed back in `Err`.
    fn accept(&mut self, customer: Customer) -> Result<(), Customer> {
        if !self.can_accept(&customer) {
            return Err(customer);
        }
        self.queue_mut().push_back(customer);
        Ok(())
    }

    /// Remove the front customer if there is one; returns the new length
    fn remove_front_customer(&mut self) -> usize {
        self.queue_mut().remove_front()
    }

    /// Close for good, returning every customer behind the front one
    fn close(&mut self) -> Vec<Customer> {
        self.queue_mut().close()
    }

    fn first_in_line(&self) -> Option<&Customer> {
        self.queue().front()
    }

    fn len(&self) -> usize {
        self.queue().len()
    }

    fn is_empty(&self) -> bool {
        self.queue().is_empty()
    }

    fn is_open(&self) -> bool {
        self.queue().is_open()
    }

    fn capacity(&self) -> usize {
        self.queue().capacity()
    }
}

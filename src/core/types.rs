use serde::{Deserialize, Serialize};

/// Index of a checkout line inside a store
pub type LineNumber = usize;

/// Logical simulation time
pub type Timestamp = u64;

/// An item to be checked out
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    /// Seconds a cashier needs to scan this item, always > 0
    pub time: u64,
}

impl Item {
    pub fn new(name: impl Into<String>, time: u64) -> Self {
        Self {
            name: name.into(),
            time,
        }
    }
}

/// A customer heading for the checkout area.
///
/// `arrival_time` is `None` until the customer first tries to join a line
/// and is never overwritten afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    name: String,
    arrival_time: Option<Timestamp>,
    items: Vec<Item>,
}

impl Customer {
    pub fn new(name: impl Into<String>, items: Vec<Item>) -> Self {
        Self {
            name: name.into(),
            arrival_time: None,
            items,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn arrival_time(&self) -> Option<Timestamp> {
        self.arrival_time
    }

    /// Record the first arrival; later calls keep the original time
    pub fn mark_arrival(&mut self, timestamp: Timestamp) {
        if self.arrival_time.is_none() {
            self.arrival_time = Some(timestamp);
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn num_items(&self) -> usize {
        self.items.len()
    }

    /// Seconds to check this customer out at a cashier
    pub fn item_time(&self) -> u64 {
        self.items.iter().map(|item| item.time).sum()
    }

    /// Copy of the fields a checkout completion needs.
    ///
    /// # Panics
    /// If the customer has not arrived yet.
    pub fn snapshot(&self) -> CustomerSnapshot {
        match self.arrival_time {
            Some(arrival_time) => CustomerSnapshot {
                name: self.name.clone(),
                arrival_time,
            },
            None => panic!("snapshot of customer '{}' taken before arrival", self.name),
        }
    }
}

/// Name and arrival time of a customer who stays owned by their line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerSnapshot {
    pub name: String,
    pub arrival_time: Timestamp,
}

use super::errors::SimulationError;
use super::store::GroceryStore;
use super::types::{Customer, CustomerSnapshot, LineNumber, Timestamp};
use std::cmp::Ordering;

/// A timestamped unit of simulated work.
///
/// Events compare by timestamp alone. Two events with the same timestamp are
/// equal here; the priority queue settles their order by insertion.
#[derive(Debug, Clone)]
pub enum Event {
    /// A customer reaches the checkout area (or comes back from a closed line)
    CustomerArrival {
        timestamp: Timestamp,
        customer: Customer,
    },
    /// The front customer of a line starts checking out
    CheckoutStarted {
        timestamp: Timestamp,
        line_number: LineNumber,
    },
    /// The front customer of a line has finished checking out
    CheckoutCompleted {
        timestamp: Timestamp,
        line_number: LineNumber,
        customer: CustomerSnapshot,
    },
    /// A line stops taking customers; everyone behind the front goes elsewhere
    CloseLine {
        timestamp: Timestamp,
        line_number: LineNumber,
    },
}

impl Event {
    pub fn arrival(timestamp: Timestamp, customer: Customer) -> Self {
        Event::CustomerArrival {
            timestamp,
            customer,
        }
    }

    pub fn close_line(timestamp: Timestamp, line_number: LineNumber) -> Self {
        Event::CloseLine {
            timestamp,
            line_number,
        }
    }

    pub fn timestamp(&self) -> Timestamp {
        match self {
            Event::CustomerArrival { timestamp, .. }
            | Event::CheckoutStarted { timestamp, .. }
            | Event::CheckoutCompleted { timestamp, .. }
            | Event::CloseLine { timestamp, .. } => *timestamp,
        }
    }

    /// Short name used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            Event::CustomerArrival { .. } => "CustomerArrival",
            Event::CheckoutStarted { .. } => "CheckoutStarted",
            Event::CheckoutCompleted { .. } => "CheckoutCompleted",
            Event::CloseLine { .. } => "CloseLine",
        }
    }

    /// Apply this event to `store` and return the events it causes.
    ///
    /// Every follow-up is stamped no earlier than this event.
    pub fn execute(self, store: &mut GroceryStore) -> Result<Vec<Event>, SimulationError> {
        match self {
            Event::CustomerArrival {
                timestamp,
                mut customer,
            } => {
                customer.mark_arrival(timestamp);
                let name = customer.name().to_string();
                let line_number = store.enter_line(customer)?;

                let at_front = store
                    .first_in_line(line_number)
                    .map_or(false, |front| front.name() == name);
                if at_front {
                    Ok(vec![Event::CheckoutStarted {
                        timestamp,
                        line_number,
                    }])
                } else {
                    Ok(Vec::new())
                }
            }
            Event::CheckoutStarted {
                timestamp,
                line_number,
            } => {
                let Some(front) = store.first_in_line(line_number) else {
                    return Ok(Vec::new());
                };
                let customer = front.snapshot();
                let finish = timestamp + store.next_checkout_time(line_number);
                Ok(vec![Event::CheckoutCompleted {
                    timestamp: finish,
                    line_number,
                    customer,
                }])
            }
            Event::CheckoutCompleted {
                timestamp,
                line_number,
                ..
            } => {
                if store.remove_front_customer(line_number) > 0 {
                    Ok(vec![Event::CheckoutStarted {
                        timestamp,
                        line_number,
                    }])
                } else {
                    Ok(Vec::new())
                }
            }
            Event::CloseLine {
                timestamp,
                line_number,
            } => Ok(store
                .close_line(line_number)
                .into_iter()
                .enumerate()
                .map(|(offset, customer)| Event::CustomerArrival {
                    timestamp: timestamp + offset as Timestamp,
                    customer,
                })
                .collect()),
        }
    }
}

impl PartialEq for Event {
    fn eq(&self, other: &Self) -> bool {
        self.timestamp() == other.timestamp()
    }
}

impl Eq for Event {}

impl PartialOrd for Event {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Event {
    fn cmp(&self, other: &Self) -> Ordering {
        self.timestamp().cmp(&other.timestamp())
    }
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Event::CustomerArrival {
                timestamp,
                customer,
            } => write!(
                f,
                "{}: {} arrives with {} items",
                timestamp,
                customer.name(),
                customer.num_items()
            ),
            Event::CheckoutStarted {
                timestamp,
                line_number,
            } => {
                write!(f, "{}: checkout starts on line {}", timestamp, line_number)
            }
            Event::CheckoutCompleted {
                timestamp,
                line_number,
                customer,
            } => {
                write!(f, "{}: {} finishes on line {}", timestamp, customer.name, line_number)
            }
            Event::CloseLine {
                timestamp,
                line_number,
            } => {
                write!(f, "{}: line {} closes", timestamp, line_number)
            }
        }
    }
}

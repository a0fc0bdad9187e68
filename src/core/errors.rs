/// Errors that can stop a grocery store simulation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    /// No open line with free capacity would take the named customer
    NoAvailableLine { customer: String },
    /// `remove` was called on a priority queue with no items
    EmptyQueue,
    /// The store configuration cannot produce a usable store
    InvalidConfig(String),
}

impl std::fmt::Display for SimulationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SimulationError::NoAvailableLine { customer } => {
                write!(f, "No line available for customer '{}'", customer)
            }
            SimulationError::EmptyQueue => write!(f, "Priority queue is empty"),
            SimulationError::InvalidConfig(msg) => {
                write!(f, "Invalid store configuration: {}", msg)
            }
        }
    }
}

impl std::error::Error for SimulationError {}

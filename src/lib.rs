pub mod core;

// Re-export commonly used types
pub use crate::core::errors::SimulationError;
pub use crate::core::events::Event;
pub use crate::core::execution::{run_replicas, SimulationEngine, SimulationObserver};
pub use crate::core::stats::SimulationStats;
pub use crate::core::store::{GroceryStore, StoreConfig};
pub use crate::core::types::{Customer, Item};

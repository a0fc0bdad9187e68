pub mod config;
pub mod replicas;
pub mod simulation_engine;

// Re-export commonly used types
pub use config::{ConcurrencyMode, SimulationConfig};
pub use replicas::run_replicas;
pub use simulation_engine::{SimulationEngine, SimulationObserver};

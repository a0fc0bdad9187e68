pub mod errors;
pub mod events;
pub mod execution;
pub mod lines;
pub mod priority_queue;
pub mod stats;
pub mod store;
pub mod types;
pub mod workload;

use super::config::{ConcurrencyMode, SimulationConfig};
use super::simulation_engine::SimulationEngine;
use crate::core::errors::SimulationError;
use crate::core::stats::SimulationStats;
use crate::core::store::StoreConfig;
use crate::core::workload::{WorkloadConfig, WorkloadGenerator};
use log::{info, warn};
use rayon::prelude::*;

/// Run one simulation per workload against identically configured stores.
///
/// Results come back in the order of `workloads`. Each replica builds its own
/// store and queue, so parallel runs share nothing.
pub fn run_replicas(
    store_config: &StoreConfig,
    workloads: &[WorkloadConfig],
    config: &SimulationConfig,
) -> Vec<Result<SimulationStats, SimulationError>> {
    info!(
        "Running {} replicas in {:?} mode",
        workloads.len(),
        config.concurrency_mode
    );

    match config.concurrency_mode {
        ConcurrencyMode::Sequential => workloads
            .iter()
            .map(|workload| run_replica(store_config, workload))
            .collect(),
        ConcurrencyMode::Rayon => {
            let run_all = || -> Vec<Result<SimulationStats, SimulationError>> {
                workloads
                    .par_iter()
                    .map(|workload| run_replica(store_config, workload))
                    .collect()
            };
            match config.thread_pool_size {
                Some(size) => match rayon::ThreadPoolBuilder::new().num_threads(size).build() {
                    Ok(pool) => pool.install(run_all),
                    Err(e) => {
                        warn!("Falling back to the global rayon pool: {}", e);
                        run_all()
                    }
                },
                None => run_all(),
            }
        }
    }
}

fn run_replica(
    store_config: &StoreConfig,
    workload: &WorkloadConfig,
) -> Result<SimulationStats, SimulationError> {
    let events = WorkloadGenerator::new(workload.clone())?.generate()?;
    let mut engine = SimulationEngine::new(store_config)?;
    engine.run(events).cloned()
}

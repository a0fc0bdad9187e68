use grocery_sim::core::workload::{WorkloadConfig, WorkloadGenerator};
use grocery_sim::{SimulationEngine, SimulationError, StoreConfig};
use log::info;

fn main() -> Result<(), SimulationError> {
    env_logger::init();

    let store_config = StoreConfig::new(2, 1, 1, 50);
    let workload = WorkloadConfig::new(40, 148)
        .with_mean_interarrival(4.0)
        .with_items_per_customer(1, 10)
        .with_item_time(1, 4)
        .with_closure(60, 0);

    let events = WorkloadGenerator::new(workload)?.generate()?;
    let mut engine = SimulationEngine::new(&store_config)?;
    let stats = engine.run(events)?;

    info!("Final statistics: {}", stats);
    println!("{}", stats);
    Ok(())
}

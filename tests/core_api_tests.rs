use grocery_sim::core::{
    execution::{ConcurrencyMode, SimulationConfig},
    lines::{CheckoutLine, ExpressLine, LineKind, RegularLine, SelfServeLine, EXPRESS_LIMIT},
    priority_queue::StablePriorityQueue,
    workload::{WorkloadConfig, WorkloadGenerator},
};
use grocery_sim::{
    run_replicas, Customer, Event, GroceryStore, Item, SimulationEngine, SimulationError,
    SimulationStats, StoreConfig,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn customer(name: &str, item_count: usize, time: u64) -> Customer {
    Customer::new(
        name,
        (0..item_count).map(|i| Item::new(format!("item{}", i), time)).collect(),
    )
}

#[test]
fn test_priority_queue_drains_names_stably() {
    let mut pq = StablePriorityQueue::new();
    for name in ["sophia", "fred", "anna", "anna", "fred", "mona"] {
        pq.add(name);
    }

    let mut drained = Vec::new();
    while !pq.is_empty() {
        drained.push(pq.remove().unwrap());
    }
    assert_eq!(drained, ["anna", "anna", "fred", "fred", "mona", "sophia"]);
    assert_eq!(pq.remove(), Err(SimulationError::EmptyQueue));
}

#[test]
fn test_express_limit_boundary() {
    let line = ExpressLine::new(3);
    assert!(line.can_accept(&customer("seven", EXPRESS_LIMIT, 1)));
    assert!(!line.can_accept(&customer("eight", EXPRESS_LIMIT + 1, 1)));
}

#[test]
fn test_line_kinds_checkout_time() {
    let mut regular = RegularLine::new(1);
    let mut self_serve = SelfServeLine::new(1);
    regular.accept(customer("r", 1, 5)).unwrap();
    self_serve.accept(customer("s", 1, 5)).unwrap();

    assert_eq!(regular.kind(), LineKind::Regular);
    assert_eq!(regular.next_checkout_time(), 5);
    assert_eq!(self_serve.kind(), LineKind::SelfServe);
    assert_eq!(self_serve.next_checkout_time(), 10);
}

#[test]
fn test_store_prefers_lower_index_on_tie() {
    let mut store = GroceryStore::new(&StoreConfig::new(1, 1, 1, 4)).unwrap();
    assert_eq!(store.enter_line(customer("a", 2, 1)).unwrap(), 0);
    assert_eq!(store.enter_line(customer("b", 2, 1)).unwrap(), 1);
    assert_eq!(store.enter_line(customer("c", 2, 1)).unwrap(), 2);
}

#[test]
fn test_store_without_room_fails() {
    let mut store = GroceryStore::new(&StoreConfig::new(0, 1, 1, 1)).unwrap();
    store.enter_line(customer("a", 1, 1)).unwrap();
    store.enter_line(customer("b", 1, 1)).unwrap();
    store.close_line(0);
    store.close_line(1);

    assert!(matches!(
        store.enter_line(customer("c", 1, 1)),
        Err(SimulationError::NoAvailableLine { .. })
    ));
}

#[test]
fn test_end_to_end_single_customer() {
    init_logging();
    let mut engine = SimulationEngine::new(&StoreConfig::new(1, 0, 0, 2)).unwrap();
    let customer = Customer::new("A", vec![Item::new("groceries", 10)]);
    let stats = engine.run(vec![Event::arrival(0, customer)]).unwrap();

    assert_eq!(
        *stats,
        SimulationStats {
            num_customers: 1,
            total_time: 10,
            max_wait: 10
        }
    );
}

#[test]
fn test_generated_workload_runs_to_completion() {
    init_logging();
    let store_config = StoreConfig::new(3, 2, 2, 100);
    let workload = WorkloadConfig::new(60, 42)
        .with_mean_interarrival(3.0)
        .with_closure(30, 0)
        .with_closure(60, 3);
    let events = WorkloadGenerator::new(workload).unwrap().generate().unwrap();

    let mut engine = SimulationEngine::new(&store_config).unwrap();
    let stats = engine.run(events).unwrap().clone();

    assert_eq!(stats.num_customers, 60);
    assert!(stats.max_wait <= stats.total_time);
    assert_eq!(engine.store().customers_in_lines(), 0);
    assert!(!engine.store().is_line_open(0));
    assert!(!engine.store().is_line_open(3));
}

#[test]
fn test_replicas_are_deterministic() {
    let store_config = StoreConfig::new(2, 1, 1, 100);
    let workloads: Vec<WorkloadConfig> = (0..4).map(|seed| WorkloadConfig::new(30, seed)).collect();

    let first = run_replicas(&store_config, &workloads, &SimulationConfig::new());
    let second = run_replicas(
        &store_config,
        &workloads,
        &SimulationConfig::new().with_concurrency(ConcurrencyMode::Rayon),
    );
    assert_eq!(first, second);
}

#[test]
fn test_store_config_from_json() {
    let config: StoreConfig = serde_json::from_str(
        r#"{"regular_count": 1, "express_count": 1, "self_serve_count": 1, "line_capacity": 10}"#,
    )
    .unwrap();
    assert_eq!(config, StoreConfig::default());
    assert_eq!(GroceryStore::new(&config).unwrap().num_lines(), 3);

    let stats = serde_json::to_value(SimulationStats {
        num_customers: 2,
        total_time: 9,
        max_wait: 4,
    })
    .unwrap();
    assert_eq!(stats["max_wait"], 4);
}

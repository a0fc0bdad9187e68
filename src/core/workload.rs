use super::errors::SimulationError;
use super::events::Event;
use super::types::{Customer, Item, LineNumber, Timestamp};
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Exp};
use uuid::{Builder, Uuid};

const PRODUCE: [&str; 10] = [
    "bananas", "cheese", "bread", "milk", "eggs", "apples", "rice", "coffee", "gum", "chips",
];

/// Largest accepted mean gap between arrivals, in ticks
pub const MAX_MEAN_INTERARRIVAL: f64 = 1e9;

/// Parameters of a synthetic customer stream
#[derive(Debug, Clone)]
pub struct WorkloadConfig {
    pub num_customers: usize,
    /// Mean gap between consecutive arrivals, in ticks
    pub mean_interarrival: f64,
    /// Inclusive range of items per customer
    pub items_per_customer: (usize, usize),
    /// Inclusive range of checkout time per item
    pub item_time: (u64, u64),
    /// Lines to close, as (timestamp, line number)
    pub closures: Vec<(Timestamp, LineNumber)>,
    pub seed: u64,
}

impl WorkloadConfig {
    pub fn new(num_customers: usize, seed: u64) -> Self {
        Self {
            num_customers,
            seed,
            ..Self::default()
        }
    }

    pub fn with_mean_interarrival(mut self, mean: f64) -> Self {
        self.mean_interarrival = mean;
        self
    }

    pub fn with_items_per_customer(mut self, min: usize, max: usize) -> Self {
        self.items_per_customer = (min, max);
        self
    }

    pub fn with_item_time(mut self, min: u64, max: u64) -> Self {
        self.item_time = (min, max);
        self
    }

    pub fn with_closure(mut self, timestamp: Timestamp, line_number: LineNumber) -> Self {
        self.closures.push((timestamp, line_number));
        self
    }

    pub fn validate(&self) -> Result<(), SimulationError> {
        let mean = self.mean_interarrival;
        if !mean.is_finite() || mean <= 0.0 || mean > MAX_MEAN_INTERARRIVAL {
            return Err(SimulationError::InvalidConfig(format!(
                "mean_interarrival must be in (0, {}], got {}",
                MAX_MEAN_INTERARRIVAL, mean
            )));
        }
        let (min_items, max_items) = self.items_per_customer;
        if min_items > max_items {
            return Err(SimulationError::InvalidConfig(format!(
                "items_per_customer range {}..={} is empty",
                min_items, max_items
            )));
        }
        let (min_time, max_time) = self.item_time;
        if min_time == 0 || min_time > max_time {
            return Err(SimulationError::InvalidConfig(format!(
                "item_time range {}..={} must be non-empty and start above 0",
                min_time, max_time
            )));
        }
        Ok(())
    }
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            num_customers: 20,
            mean_interarrival: 5.0,
            items_per_customer: (1, 12),
            item_time: (1, 5),
            closures: Vec::new(),
            seed: 0,
        }
    }
}

/// Produces a deterministic event list from a [`WorkloadConfig`]
pub struct WorkloadGenerator {
    config: WorkloadConfig,
    rng: StdRng,
}

impl WorkloadGenerator {
    pub fn new(config: WorkloadConfig) -> Result<Self, SimulationError> {
        config.validate()?;
        let rng = StdRng::seed_from_u64(config.seed);
        Ok(Self { config, rng })
    }

    /// Arrivals in timestamp order, followed by the configured closures
    pub fn generate(&mut self) -> Result<Vec<Event>, SimulationError> {
        let gaps = Exp::new(1.0 / self.config.mean_interarrival).map_err(|e| {
            SimulationError::InvalidConfig(format!("inter-arrival distribution: {}", e))
        })?;

        let capacity = self.config.num_customers + self.config.closures.len();
        let mut events = Vec::with_capacity(capacity);
        let mut clock: Timestamp = 0;
        for index in 0..self.config.num_customers {
            if index > 0 {
                let gap = gaps.sample(&mut self.rng).ceil() as Timestamp;
                clock = clock.checked_add(gap).ok_or_else(|| {
                    SimulationError::InvalidConfig(format!(
                        "arrival clock overflowed at customer {}",
                        index
                    ))
                })?;
            }
            let customer = self.next_customer();
            events.push(Event::arrival(clock, customer));
        }

        events.extend(
            self.config
                .closures
                .iter()
                .map(|&(timestamp, line_number)| Event::close_line(timestamp, line_number)),
        );

        debug!(
            "Generated {} arrivals over {} ticks and {} closures",
            self.config.num_customers,
            clock,
            self.config.closures.len()
        );
        Ok(events)
    }

    fn next_customer(&mut self) -> Customer {
        let (min_items, max_items) = self.config.items_per_customer;
        let (min_time, max_time) = self.config.item_time;

        let count = self.rng.gen_range(min_items..=max_items);
        let items = (0..count)
            .map(|_| {
                let name = PRODUCE[self.rng.gen_range(0..PRODUCE.len())];
                Item::new(name, self.rng.gen_range(min_time..=max_time))
            })
            .collect();

        Customer::new(self.next_name().to_string(), items)
    }

    /// UUID drawn from the seeded RNG so names repeat across identical runs
    fn next_name(&mut self) -> Uuid {
        Builder::from_random_bytes(self.rng.gen()).into_uuid()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn generate(config: WorkloadConfig) -> Vec<Event> {
        WorkloadGenerator::new(config).unwrap().generate().unwrap()
    }

    fn names(events: &[Event]) -> Vec<String> {
        events
            .iter()
            .filter_map(|event| match event {
                Event::CustomerArrival { customer, .. } => Some(customer.name().to_string()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_same_seed_same_stream() {
        let config = WorkloadConfig::new(30, 7);
        let a = generate(config.clone());
        let b = generate(config);

        assert_eq!(names(&a), names(&b));
        let stamps_a: Vec<u64> = a.iter().map(|e| e.timestamp()).collect();
        let stamps_b: Vec<u64> = b.iter().map(|e| e.timestamp()).collect();
        assert_eq!(stamps_a, stamps_b);
    }

    #[test]
    fn test_names_unique() {
        let events = generate(WorkloadConfig::new(200, 3));
        let unique: HashSet<String> = names(&events).into_iter().collect();
        assert_eq!(unique.len(), 200);
    }

    #[test]
    fn test_customers_respect_ranges() {
        let config = WorkloadConfig::new(50, 11)
            .with_items_per_customer(2, 4)
            .with_item_time(3, 6);
        let events = generate(config);

        for event in &events {
            if let Event::CustomerArrival { customer, .. } = event {
                assert!((2..=4).contains(&customer.num_items()));
                assert!(customer.items().iter().all(|item| (3..=6).contains(&item.time)));
                assert_eq!(customer.arrival_time(), None);
            }
        }
    }

    #[test]
    fn test_arrivals_non_decreasing_and_closures_appended() {
        let events = generate(WorkloadConfig::new(10, 5).with_closure(40, 1));

        assert_eq!(events.len(), 11);
        let arrivals: Vec<u64> = events[..10].iter().map(|e| e.timestamp()).collect();
        assert!(arrivals.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(arrivals[0], 0);
        assert!(matches!(
            events[10],
            Event::CloseLine {
                timestamp: 40,
                line_number: 1
            }
        ));
    }

    #[test]
    fn test_invalid_ranges_rejected() {
        let base = || WorkloadConfig::new(1, 0);
        assert!(WorkloadGenerator::new(base().with_item_time(0, 3)).is_err());
        assert!(WorkloadGenerator::new(base().with_items_per_customer(5, 2)).is_err());
        assert!(WorkloadGenerator::new(base().with_mean_interarrival(0.0)).is_err());
    }

    #[test]
    fn test_unbounded_mean_interarrival_rejected() {
        for mean in [1e300, f64::INFINITY, f64::NAN, MAX_MEAN_INTERARRIVAL * 2.0] {
            let config = WorkloadConfig::new(3, 1).with_mean_interarrival(mean);
            assert!(matches!(
                WorkloadGenerator::new(config),
                Err(SimulationError::InvalidConfig(_))
            ));
        }
    }

    #[test]
    fn test_largest_mean_interarrival_generates() {
        let config = WorkloadConfig::new(3, 1).with_mean_interarrival(MAX_MEAN_INTERARRIVAL);
        let events = generate(config);
        assert_eq!(events.len(), 3);
        assert_eq!(events[0].timestamp(), 0);
    }
}

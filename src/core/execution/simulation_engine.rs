use crate::core::errors::SimulationError;
use crate::core::events::Event;
use crate::core::priority_queue::StablePriorityQueue;
use crate::core::stats::SimulationStats;
use crate::core::store::{GroceryStore, StoreConfig};
use log::{debug, info};
use std::collections::HashSet;

/// Observer trait for simulation events
pub trait SimulationObserver {
    /// Called with each event just before it is executed
    fn on_event(&mut self, event: &Event);

    /// Called once the event queue has drained
    fn on_finish(&mut self, stats: &SimulationStats);
}

/// Runs a grocery store simulation to completion.
///
/// Owns the store and the event queue; nothing else mutates either.
pub struct SimulationEngine {
    store: GroceryStore,
    events: StablePriorityQueue<Event>,
    stats: SimulationStats,
    customers_seen: HashSet<String>,
    events_processed: u64,
    observers: Vec<Box<dyn SimulationObserver>>,
}

impl SimulationEngine {
    /// Create an engine around a freshly built store. All statistics start at 0.
    pub fn new(config: &StoreConfig) -> Result<Self, SimulationError> {
        Ok(Self {
            store: GroceryStore::new(config)?,
            events: StablePriorityQueue::new(),
            stats: SimulationStats::new(),
            customers_seen: HashSet::new(),
            events_processed: 0,
            observers: Vec::new(),
        })
    }

    /// Add an observer to the simulation
    pub fn add_observer(&mut self, observer: Box<dyn SimulationObserver>) {
        self.observers.push(observer);
    }

    /// Queue an event without running anything
    pub fn schedule(&mut self, event: Event) {
        self.events.add(event);
    }

    /// Seed the queue with `initial_events` and run until it drains
    pub fn run(&mut self, initial_events: Vec<Event>) -> Result<&SimulationStats, SimulationError> {
        info!("Starting simulation with {} initial events", initial_events.len());
        self.events.extend(initial_events);

        while self.step()? {}

        self.stats.num_customers = self.customers_seen.len();
        for observer in &mut self.observers {
            observer.on_finish(&self.stats);
        }
        info!(
            "Simulation finished after {} events: {}",
            self.events_processed, self.stats
        );
        Ok(&self.stats)
    }

    /// Process one event, returns true if events remain
    pub fn step(&mut self) -> Result<bool, SimulationError> {
        if self.events.is_empty() {
            return Ok(false);
        }

        let event = self.events.remove()?;
        debug!("Dispatching {}", event);

        match &event {
            Event::CheckoutCompleted {
                timestamp,
                customer,
                ..
            } => {
                self.stats.record_completion(*timestamp, customer.arrival_time);
            }
            Event::CustomerArrival { customer, .. } => {
                if !self.customers_seen.contains(customer.name()) {
                    self.customers_seen.insert(customer.name().to_string());
                }
            }
            Event::CheckoutStarted { .. } | Event::CloseLine { .. } => {}
        }

        for observer in &mut self.observers {
            observer.on_event(&event);
        }

        let follow_ups = event.execute(&mut self.store)?;
        self.events.extend(follow_ups);
        self.events_processed += 1;

        Ok(!self.events.is_empty())
    }

    pub fn stats(&self) -> &SimulationStats {
        &self.stats
    }

    pub fn store(&self) -> &GroceryStore {
        &self.store
    }

    pub fn events_processed(&self) -> u64 {
        self.events_processed
    }

    /// Check if there are pending events in the queue
    pub fn has_pending_events(&self) -> bool {
        !self.events.is_empty()
    }
}

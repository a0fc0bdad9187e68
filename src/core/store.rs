use super::errors::SimulationError;
use super::lines::{CheckoutLine, ExpressLine, LineKind, RegularLine, SelfServeLine};
use super::types::{Customer, LineNumber};
use log::{trace, warn};
use serde::{Deserialize, Serialize};

/// How many lines of each kind a store has, and how long each may get
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    pub regular_count: usize,
    pub express_count: usize,
    pub self_serve_count: usize,
    pub line_capacity: usize,
}

impl StoreConfig {
    pub fn new(
        regular_count: usize,
        express_count: usize,
        self_serve_count: usize,
        line_capacity: usize,
    ) -> Self {
        Self {
            regular_count,
            express_count,
            self_serve_count,
            line_capacity,
        }
    }

    pub fn with_regular(mut self, count: usize) -> Self {
        self.regular_count = count;
        self
    }

    pub fn with_express(mut self, count: usize) -> Self {
        self.express_count = count;
        self
    }

    pub fn with_self_serve(mut self, count: usize) -> Self {
        self.self_serve_count = count;
        self
    }

    pub fn with_line_capacity(mut self, capacity: usize) -> Self {
        self.line_capacity = capacity;
        self
    }

    pub fn num_lines(&self) -> usize {
        self.regular_count + self.express_count + self.self_serve_count
    }

    /// Check that the configuration yields at least one usable line
    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.num_lines() == 0 {
            return Err(SimulationError::InvalidConfig(
                "store must have at least one checkout line".to_string(),
            ));
        }
        if self.line_capacity == 0 {
            return Err(SimulationError::InvalidConfig(
                "line_capacity must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(1, 1, 1, 10)
    }
}

/// A grocery store: a fixed row of checkout lines.
///
/// Lines are numbered regular first, then express, then self-serve.
#[derive(Debug)]
pub struct GroceryStore {
    lines: Vec<Box<dyn CheckoutLine>>,
}

impl GroceryStore {
    pub fn new(config: &StoreConfig) -> Result<Self, SimulationError> {
        config.validate()?;

        let capacity = config.line_capacity;
        let mut lines: Vec<Box<dyn CheckoutLine>> = Vec::with_capacity(config.num_lines());
        for _ in 0..config.regular_count {
            lines.push(Box::new(RegularLine::new(capacity)));
        }
        for _ in 0..config.express_count {
            lines.push(Box::new(ExpressLine::new(capacity)));
        }
        for _ in 0..config.self_serve_count {
            lines.push(Box::new(SelfServeLine::new(capacity)));
        }

        Ok(Self { lines })
    }

    pub fn num_lines(&self) -> usize {
        self.lines.len()
    }

    /// Put `customer` in the shortest line that will take them.
    ///
    /// Ties go to the lowest line number. Returns the chosen line number, or
    /// `NoAvailableLine` when every line is closed, full or ineligible.
    pub fn enter_line(&mut self, customer: Customer) -> Result<LineNumber, SimulationError> {
        let mut best: Option<(LineNumber, usize)> = None;
        for (line_number, line) in self.lines.iter().enumerate() {
            if !line.can_accept(&customer) {
                continue;
            }
            match best {
                Some((_, shortest)) if line.len() >= shortest => {}
                _ => best = Some((line_number, line.len())),
            }
        }

        let Some((line_number, _)) = best else {
            warn!("No line available for customer '{}'", customer.name());
            return Err(SimulationError::NoAvailableLine {
                customer: customer.name().to_string(),
            });
        };

        trace!(
            "Customer '{}' joins {} line {}",
            customer.name(),
            self.lines[line_number].kind(),
            line_number
        );
        self.lines[line_number]
            .accept(customer)
            .map_err(|customer| SimulationError::NoAvailableLine {
                customer: customer.name().to_string(),
            })?;
        Ok(line_number)
    }

    pub fn next_checkout_time(&self, line_number: LineNumber) -> u64 {
        self.line(line_number).next_checkout_time()
    }

    pub fn remove_front_customer(&mut self, line_number: LineNumber) -> usize {
        self.line_mut(line_number).remove_front_customer()
    }

    /// Close a line and return the customers it turned away, in line order
    pub fn close_line(&mut self, line_number: LineNumber) -> Vec<Customer> {
        let displaced = self.line_mut(line_number).close();
        trace!("Closed line {}, displacing {} customers", line_number, displaced.len());
        displaced
    }

    pub fn first_in_line(&self, line_number: LineNumber) -> Option<&Customer> {
        self.line(line_number).first_in_line()
    }

    pub fn line_kind(&self, line_number: LineNumber) -> LineKind {
        self.line(line_number).kind()
    }

    pub fn line_len(&self, line_number: LineNumber) -> usize {
        self.line(line_number).len()
    }

    pub fn is_line_open(&self, line_number: LineNumber) -> bool {
        self.line(line_number).is_open()
    }

    /// Total customers waiting across every line
    pub fn customers_in_lines(&self) -> usize {
        self.lines.iter().map(|line| line.len()).sum()
    }

    fn line(&self, line_number: LineNumber) -> &dyn CheckoutLine {
        match self.lines.get(line_number) {
            Some(line) => &**line,
            None => panic!(
                "line number {} out of range for store with {} lines",
                line_number,
                self.lines.len()
            ),
        }
    }

    fn line_mut(&mut self, line_number: LineNumber) -> &mut dyn CheckoutLine {
        let num_lines = self.lines.len();
        match self.lines.get_mut(line_number) {
            Some(line) => &mut **line,
            None => panic!(
                "line number {} out of range for store with {} lines",
                line_number, num_lines
            ),
        }
    }
}

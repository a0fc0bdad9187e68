use serde::{Deserialize, Serialize};

/// Summary statistics of one simulation run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationStats {
    /// Distinct customers seen across all arrivals
    pub num_customers: usize,
    /// Timestamp of the last checkout completion
    pub total_time: u64,
    /// Longest time from first arrival to checkout completion
    pub max_wait: u64,
}

impl SimulationStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one checkout completion into the running totals
    pub fn record_completion(&mut self, timestamp: u64, arrival_time: u64) {
        self.total_time = timestamp;
        self.max_wait = self.max_wait.max(timestamp.saturating_sub(arrival_time));
    }
}

impl std::fmt::Display for SimulationStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "num_customers={} total_time={} max_wait={}",
            self.num_customers, self.total_time, self.max_wait
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_completion() {
        let mut stats = SimulationStats::new();
        stats.record_completion(10, 0);
        stats.record_completion(12, 9);
        assert_eq!(stats.total_time, 12);
        assert_eq!(stats.max_wait, 10);
        assert_eq!(stats.num_customers, 0);
    }
}

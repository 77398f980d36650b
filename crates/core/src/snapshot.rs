use serde::{Deserialize, Serialize};

/// Point-in-time view of a machine, suitable for JSON export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MachineSnapshot {
    pub slot_count: usize,
    pub remaining: usize,
    /// `x` of the bean on each row, `None` where the row is empty.
    pub in_flight: Vec<Option<usize>>,
    pub slots: Vec<usize>,
    pub landed: usize,
    pub average: f64,
}

impl MachineSnapshot {
    pub fn in_flight_count(&self) -> usize {
        self.in_flight.iter().filter(|row| row.is_some()).count()
    }

    /// `true` once nothing is waiting or in flight.
    pub fn finished(&self) -> bool {
        self.remaining == 0 && self.in_flight_count() == 0
    }
}

use super::city::CityId;
use serde::{Deserialize, Serialize};

/// Flight (directed adjacency entry) in the graph
///
/// One undirected flight between `u` and `v` is stored as two of these:
/// one in `u`'s list pointing at `v` and one in `v`'s list pointing at `u`,
/// each carrying its own copy of the attributes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Flight {
    /// City this entry leads to
    pub destination: CityId,

    /// Ticket cost in whole currency units (Rs)
    pub cost: u64,

    /// Flown distance (km)
    pub distance: f64,

    /// Flight time (hours). Carried along, never used for routing.
    pub duration: f64,
}

impl Flight {
    /// Create a new adjacency entry
    pub fn new(destination: CityId, cost: u64, distance: f64, duration: f64) -> Self {
        Self {
            destination,
            cost,
            distance,
            duration,
        }
    }

    /// Same attributes, leading to another city
    pub fn towards(&self, destination: CityId) -> Self {
        Self {
            destination,
            ..*self
        }
    }
}

/// One undirected flight described by endpoint names
///
/// This is the shape flights take before they are resolved against a
/// graph, e.g. when read from a file or a terminal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FlightRecord {
    pub from: String,
    pub to: String,
    pub cost: u64,
    pub distance: f64,
    pub duration: f64,
}

impl FlightRecord {
    /// Create a new flight record
    pub fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        cost: u64,
        distance: f64,
        duration: f64,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            cost,
            distance,
            duration,
        }
    }
}

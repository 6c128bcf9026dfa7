/// Graph store for the flight network
///
/// This module provides the store interface and its implementation:
/// - FlightStore trait: read-only access used by the routing engine
/// - FlightGraph: in-memory adjacency-list store with name resolution

pub mod error;
pub mod flight_graph;

use crate::types::{CityId, Flight};
pub use error::{StorageError, StorageResult};
pub use flight_graph::{FlightGraph, GraphOptions};

/// Read access to a populated flight network
///
/// Implementations must be fully populated before any query runs; the
/// routing engine only ever borrows a store immutably.
pub trait FlightStore: Send + Sync {
    /// Number of cities, fixed at construction
    fn num_cities(&self) -> usize;

    /// Resolve a city name to its index
    ///
    /// # Returns
    /// * `Some(id)` if the name is registered
    /// * `None` otherwise
    fn resolve(&self, name: &str) -> Option<CityId>;

    /// Display name of the city at `id`, if one was registered
    fn city_name(&self, id: CityId) -> Option<&str>;

    /// All adjacency entries leaving `id`, parallel flights included
    ///
    /// Entries come back in insertion order. Out-of-range ids yield an
    /// empty slice.
    fn neighbors(&self, id: CityId) -> &[Flight];
}

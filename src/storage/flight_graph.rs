/// In-memory flight graph
///
/// Cities live in a fixed-size table indexed by `CityId`; every city owns
/// one adjacency list. An undirected flight is inserted as two directed
/// entries with identical attributes, so neighbor enumeration is O(degree)
/// from either endpoint.

use super::{FlightStore, StorageError, StorageResult};
use crate::types::{City, CityId, Flight, FlightRecord};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Graph construction options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GraphOptions {
    /// Refuse to bind a name that already resolves to another index.
    ///
    /// When off, the most recent registration of a name wins and the
    /// earlier index keeps its display name but can no longer be looked
    /// up by it.
    pub strict_city_names: bool,
}

/// Flight graph store
#[derive(Debug, Clone)]
pub struct FlightGraph {
    options: GraphOptions,
    adjacency: Vec<Vec<Flight>>,
    city_names: Vec<Option<String>>,
    city_index: HashMap<String, CityId>,
    flight_count: usize,
}

impl FlightGraph {
    /// Create a graph with room for `num_cities` cities and no flights
    pub fn new(num_cities: usize) -> Self {
        Self::with_options(num_cities, GraphOptions::default())
    }

    /// Create a graph with explicit options
    pub fn with_options(num_cities: usize, options: GraphOptions) -> Self {
        Self {
            options,
            adjacency: vec![Vec::new(); num_cities],
            city_names: vec![None; num_cities],
            city_index: HashMap::with_capacity(num_cities),
            flight_count: 0,
        }
    }

    /// Create a graph whose cities are `names`, registered in order
    ///
    /// # Returns
    /// * `Ok(graph)` with city `i` bound to `names[i]`
    /// * `Err(StorageError::DuplicateCity)` in strict mode on a repeated name
    pub fn with_cities<I, S>(names: I, options: GraphOptions) -> StorageResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let mut graph = Self::with_options(names.len(), options);
        for (index, name) in names.into_iter().enumerate() {
            graph.register_city(name, index)?;
        }
        Ok(graph)
    }

    /// Options this graph was built with
    pub fn options(&self) -> GraphOptions {
        self.options
    }

    /// Bind a display name to a city index
    ///
    /// Re-registering an index replaces its name and drops the old name's
    /// binding. Registering a name that is already bound elsewhere moves
    /// the binding to `index` unless strict mode is on.
    ///
    /// # Arguments
    /// * `name` - Display name
    /// * `index` - Index in `[0, num_cities)`
    ///
    /// # Returns
    /// * `Ok(id)` for the registered city
    /// * `Err(StorageError::InvalidCityIndex)` if `index` is out of range
    /// * `Err(StorageError::DuplicateCity)` in strict mode
    pub fn register_city(&mut self, name: impl Into<String>, index: usize) -> StorageResult<CityId> {
        let name = name.into();
        let num_cities = self.num_cities();
        if index >= num_cities {
            return Err(StorageError::InvalidCityIndex { index, num_cities });
        }
        let id = CityId::new(index);

        if let Some(&existing) = self.city_index.get(&name) {
            if existing != id {
                if self.options.strict_city_names {
                    return Err(StorageError::DuplicateCity {
                        name,
                        index: existing.index(),
                    });
                }
                warn!(
                    city = %name,
                    previous = existing.index(),
                    index,
                    "city name registered twice, latest index wins"
                );
            }
        }

        if let Some(previous) = self.city_names[index].replace(name.clone()) {
            if previous != name && self.city_index.get(&previous) == Some(&id) {
                self.city_index.remove(&previous);
                warn!(old = %previous, new = %name, index, "city index renamed");
            }
        }

        debug!(city = %name, index, "registered city");
        self.city_index.insert(name, id);
        Ok(id)
    }

    /// Add an undirected flight between two named cities
    ///
    /// Both endpoints are resolved before anything is written, so a
    /// failed call leaves the graph untouched. Parallel flights are kept.
    ///
    /// # Returns
    /// * `Ok(())` once both directed entries are stored
    /// * `Err(StorageError::CityNotFound)` if either name is unknown
    /// * `Err(StorageError::InvalidEdgeWeight)` for a negative or
    ///   non-finite distance or duration
    pub fn add_flight(
        &mut self,
        u: &str,
        v: &str,
        cost: u64,
        distance: f64,
        duration: f64,
    ) -> StorageResult<()> {
        let (from, to) = match (self.resolve(u), self.resolve(v)) {
            (Some(from), Some(to)) => (from, to),
            (None, _) => return Err(self.refuse(u, v, StorageError::CityNotFound(u.to_string()))),
            (_, None) => return Err(self.refuse(u, v, StorageError::CityNotFound(v.to_string()))),
        };

        for (attribute, value) in [("distance", distance), ("duration", duration)] {
            if !value.is_finite() || value < 0.0 {
                let err = StorageError::InvalidEdgeWeight {
                    from: u.to_string(),
                    to: v.to_string(),
                    attribute,
                    value,
                };
                return Err(self.refuse(u, v, err));
            }
        }

        let outbound = Flight::new(to, cost, distance, duration);
        self.adjacency[from.index()].push(outbound);
        self.adjacency[to.index()].push(outbound.towards(from));
        self.flight_count += 1;

        debug!(from = u, to = v, cost, distance, duration, "added flight");
        Ok(())
    }

    /// Add a flight described by a record
    pub fn add_flight_record(&mut self, record: &FlightRecord) -> StorageResult<()> {
        self.add_flight(
            &record.from,
            &record.to,
            record.cost,
            record.distance,
            record.duration,
        )
    }

    /// Number of logical (undirected) flights stored
    pub fn flight_count(&self) -> usize {
        self.flight_count
    }

    /// All registered cities in index order
    pub fn cities(&self) -> impl Iterator<Item = City> + '_ {
        self.city_names
            .iter()
            .enumerate()
            .filter_map(|(index, name)| {
                name.as_ref()
                    .map(|name| City::new(CityId::new(index), name.clone()))
            })
    }

    fn refuse(&self, u: &str, v: &str, err: StorageError) -> StorageError {
        warn!(from = u, to = v, error = %err, "flight refused");
        err
    }
}

impl FlightStore for FlightGraph {
    fn num_cities(&self) -> usize {
        self.adjacency.len()
    }

    fn resolve(&self, name: &str) -> Option<CityId> {
        self.city_index.get(name).copied()
    }

    fn city_name(&self, id: CityId) -> Option<&str> {
        self.city_names.get(id.index())?.as_deref()
    }

    fn neighbors(&self, id: CityId) -> &[Flight] {
        self.adjacency
            .get(id.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Flight network import utilities
///
/// Supports loading a network description from:
/// - JSON files (cities, flights and an optional source city)
/// - CSV files of flights plus a list of city names
///
/// A loaded `FlightNetwork` is then turned into a `FlightGraph`.

use super::{ToolError, ToolResult};
use crate::storage::{FlightGraph, GraphOptions};
use crate::types::FlightRecord;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{info, warn};

/// Import options
#[derive(Debug, Clone, Default)]
pub struct ImportOptions {
    /// Skip flights the graph refuses instead of failing
    pub skip_errors: bool,
    /// Options for the graph being built
    pub graph: GraphOptions,
}

/// Import statistics
#[derive(Debug, Default, Clone, Serialize)]
pub struct ImportStats {
    pub cities_imported: usize,
    pub flights_imported: usize,
    pub flights_skipped: usize,
    pub errors: Vec<String>,
}

impl ImportStats {
    fn add_error(&mut self, error: String) {
        self.errors.push(error);
    }
}

/// Description of a flight network before it is loaded into a graph
///
/// JSON format:
/// ```json
/// {
///   "cities": ["Delhi", "Mumbai", "Chennai"],
///   "flights": [
///     {"from": "Delhi", "to": "Mumbai", "cost": 4500, "distance": 1148.0, "duration": 2.1}
///   ],
///   "source": "Delhi"
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlightNetwork {
    pub cities: Vec<String>,
    pub flights: Vec<FlightRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl FlightNetwork {
    /// Build a graph with one city per name and every flight added
    ///
    /// City registration errors always abort. Refused flights abort
    /// unless `options.skip_errors` is set, in which case they are
    /// counted and reported in the stats.
    pub fn build_graph(&self, options: &ImportOptions) -> ToolResult<(FlightGraph, ImportStats)> {
        let mut graph = FlightGraph::with_cities(self.cities.iter().cloned(), options.graph)?;
        let mut stats = ImportStats {
            cities_imported: graph.cities().count(),
            ..ImportStats::default()
        };

        for (row_num, flight) in self.flights.iter().enumerate() {
            match graph.add_flight_record(flight) {
                Ok(()) => stats.flights_imported += 1,
                Err(e) if options.skip_errors => {
                    stats.flights_skipped += 1;
                    stats.add_error(format!("Flight {}: {}", row_num + 1, e));
                }
                Err(e) => return Err(e.into()),
            }
        }

        if stats.flights_skipped > 0 {
            warn!(skipped = stats.flights_skipped, "some flights were not imported");
        }
        info!(
            cities = stats.cities_imported,
            flights = stats.flights_imported,
            "flight network loaded"
        );
        Ok((graph, stats))
    }
}

/// Import a network from a JSON file
pub fn import_from_json<P: AsRef<Path>>(path: P) -> ToolResult<FlightNetwork> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    read_json(reader)
}

/// Read a JSON network description from any reader
pub fn read_json<R: Read>(reader: R) -> ToolResult<FlightNetwork> {
    let network: FlightNetwork = serde_json::from_reader(reader)?;
    if network.cities.iter().any(|name| name.trim().is_empty()) {
        return Err(ToolError::InvalidFormat("city names must not be empty".to_string()));
    }
    Ok(network)
}

/// Import flights from a CSV file
///
/// CSV format:
/// ```csv
/// from,to,cost,distance,duration
/// Delhi,Mumbai,4500,1148.0,2.1
/// Mumbai,Chennai,3900,1029.5,1.9
/// ```
///
/// When `cities` is empty the city list is taken from the flights in
/// order of first appearance.
pub fn import_from_csv<P: AsRef<Path>>(path: P, cities: Vec<String>) -> ToolResult<FlightNetwork> {
    let file = File::open(path)?;
    read_csv(BufReader::new(file), cities)
}

/// Read CSV flights from any reader
pub fn read_csv<R: Read>(reader: R, cities: Vec<String>) -> ToolResult<FlightNetwork> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let flights = csv_reader
        .deserialize()
        .collect::<Result<Vec<FlightRecord>, csv::Error>>()?;

    let cities = if cities.is_empty() {
        cities_in_order(&flights)
    } else {
        cities
    };

    Ok(FlightNetwork {
        cities,
        flights,
        source: None,
    })
}

fn cities_in_order(flights: &[FlightRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut cities = Vec::new();
    for name in flights.iter().flat_map(|f| [&f.from, &f.to]) {
        if seen.insert(name.as_str()) {
            cities.push(name.clone());
        }
    }
    cities
}

/// Parallel route planning
///
/// Cost and distance searches only read the store, so both run at once
/// on rayon's pool and are joined before the caller sees either result.

use super::metric::{CostMetric, DistanceMetric};
use super::shortest_path::{shortest_from_city, ShortestPaths};
use super::{AlgorithmError, AlgorithmResult};
use crate::storage::FlightStore;
use crate::types::CityId;
use tracing::{info, warn};

/// Cheapest cost and shortest distance from one source to every city
#[derive(Debug, Clone, PartialEq)]
pub struct RouteSummary {
    pub source: CityId,
    pub costs: ShortestPaths<u64>,
    pub distances: ShortestPaths<f64>,
}

impl RouteSummary {
    /// Number of cities covered
    pub fn len(&self) -> usize {
        self.costs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }
}

/// Run the cost and distance searches from `source` concurrently
///
/// # Returns
/// * `Ok(RouteSummary)` with both result vectors
/// * `Err(AlgorithmError::SourceNotFound)` if `source` does not resolve
pub fn plan_routes<S>(store: &S, source: &str) -> AlgorithmResult<RouteSummary>
where
    S: FlightStore + ?Sized,
{
    let Some(id) = store.resolve(source) else {
        warn!(source, "source city not found");
        return Err(AlgorithmError::SourceNotFound(source.to_string()));
    };

    let (costs, distances) = rayon::join(
        || shortest_from_city(store, id, &CostMetric),
        || shortest_from_city(store, id, &DistanceMetric),
    );
    let summary = RouteSummary {
        source: id,
        costs: costs?,
        distances: distances?,
    };

    info!(
        source,
        cities = summary.len(),
        reachable = summary.costs.reachable_count(),
        "planned routes"
    );
    Ok(summary)
}

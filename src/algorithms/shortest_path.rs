/// Shortest path algorithms
///
/// Implements Dijkstra's algorithm over a `FlightStore`, computing the
/// minimum accumulated weight from one source city to every city.

use super::metric::{Metric, Weight};
use super::{AlgorithmError, AlgorithmResult};
use crate::storage::FlightStore;
use crate::types::CityId;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use tracing::{debug, warn};

/// Result of a single-source shortest path computation
///
/// Dense per-city weights; `None` marks a city with no path from the
/// source.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPaths<W> {
    source: CityId,
    weights: Vec<Option<W>>,
}

impl<W: Weight> ShortestPaths<W> {
    /// City the computation started from
    pub fn source(&self) -> CityId {
        self.source
    }

    /// Minimum weight to `city`, or `None` if it is unreachable
    pub fn get(&self, city: CityId) -> Option<W> {
        self.weights.get(city.index()).copied().flatten()
    }

    /// Whether any path from the source reaches `city`
    pub fn is_reachable(&self, city: CityId) -> bool {
        self.get(city).is_some()
    }

    /// Number of cities covered (reachable or not)
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Number of cities with a finite result, the source included
    pub fn reachable_count(&self) -> usize {
        self.weights.iter().filter(|w| w.is_some()).count()
    }

    /// Per-city weights in index order
    pub fn as_slice(&self) -> &[Option<W>] {
        &self.weights
    }

    /// Iterate `(city, weight)` pairs in index order
    pub fn iter(&self) -> impl Iterator<Item = (CityId, Option<W>)> + '_ {
        self.weights
            .iter()
            .enumerate()
            .map(|(index, weight)| (CityId::new(index), *weight))
    }
}

/// Frontier entry for Dijkstra's algorithm
#[derive(Debug, Clone, Copy)]
struct FrontierEntry<W> {
    city: CityId,
    weight: W,
}

impl<W: Weight> Ord for FrontierEntry<W> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap
        other
            .weight
            .total_cmp(&self.weight)
            .then_with(|| self.city.cmp(&other.city))
    }
}

impl<W: Weight> PartialOrd for FrontierEntry<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<W: Weight> PartialEq for FrontierEntry<W> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<W: Weight> Eq for FrontierEntry<W> {}

/// Working state owned by one query
struct SearchState<W> {
    frontier: BinaryHeap<FrontierEntry<W>>,
    best: Vec<Option<W>>,
    settled: usize,
}

impl<W: Weight> SearchState<W> {
    fn new(num_cities: usize, source: CityId) -> Self {
        let mut best = vec![None; num_cities];
        best[source.index()] = Some(W::ZERO);

        let mut frontier = BinaryHeap::new();
        frontier.push(FrontierEntry {
            city: source,
            weight: W::ZERO,
        });

        Self {
            frontier,
            best,
            settled: 0,
        }
    }

    /// Record `candidate` for `city` if it is strictly better
    fn relax(&mut self, city: CityId, candidate: W) {
        let Some(slot) = self.best.get_mut(city.index()) else {
            return;
        };
        let improves = slot.map_or(true, |current| {
            candidate.total_cmp(&current) == Ordering::Less
        });

        if improves {
            *slot = Some(candidate);
            self.frontier.push(FrontierEntry {
                city,
                weight: candidate,
            });
        }
    }

    /// An entry is stale once its city has been improved since it was pushed
    fn is_stale(&self, entry: &FrontierEntry<W>) -> bool {
        match self.best[entry.city.index()] {
            Some(best) => entry.weight.total_cmp(&best) == Ordering::Greater,
            None => true,
        }
    }
}

/// Shortest paths from a named source city
///
/// # Arguments
/// * `store` - Populated flight store
/// * `source` - Name of the source city
/// * `metric` - Flight attribute to minimize
///
/// # Returns
/// * `Ok(ShortestPaths)` covering every city of the store
/// * `Err(AlgorithmError::SourceNotFound)` if `source` does not resolve
pub fn shortest_from<S, M>(
    store: &S,
    source: &str,
    metric: &M,
) -> AlgorithmResult<ShortestPaths<M::Weight>>
where
    S: FlightStore + ?Sized,
    M: Metric,
{
    match store.resolve(source) {
        Some(id) => shortest_from_city(store, id, metric),
        None => {
            warn!(source, metric = M::NAME, "source city not found");
            Err(AlgorithmError::SourceNotFound(source.to_string()))
        }
    }
}

/// Dijkstra's algorithm from an already resolved source
///
/// Every reachable city is settled; there is no early exit. Edge weights
/// are assumed non-negative.
pub fn shortest_from_city<S, M>(
    store: &S,
    source: CityId,
    metric: &M,
) -> AlgorithmResult<ShortestPaths<M::Weight>>
where
    S: FlightStore + ?Sized,
    M: Metric,
{
    let num_cities = store.num_cities();
    if source.index() >= num_cities {
        return Err(AlgorithmError::SourceNotFound(source.to_string()));
    }

    debug!(%source, metric = M::NAME, num_cities, "shortest path search started");

    let mut state = SearchState::new(num_cities, source);

    while let Some(entry) = state.frontier.pop() {
        if state.is_stale(&entry) {
            continue;
        }
        state.settled += 1;

        for flight in store.neighbors(entry.city) {
            let candidate = Weight::add(entry.weight, metric.weight(flight));
            state.relax(flight.destination, candidate);
        }
    }

    debug!(
        %source,
        metric = M::NAME,
        settled = state.settled,
        "shortest path search finished"
    );

    Ok(ShortestPaths {
        source,
        weights: state.best,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::{CostMetric, DistanceMetric};
    use crate::storage::{FlightGraph, GraphOptions};

    fn setup_test_graph() -> FlightGraph {
        // A --(100, 500)-- B --(50, 300)-- C
        // A --------(200, 1000)----------- C
        // D isolated
        let mut graph =
            FlightGraph::with_cities(["A", "B", "C", "D"], GraphOptions::default()).unwrap();
        graph.add_flight("A", "B", 100, 500.0, 1.0).unwrap();
        graph.add_flight("B", "C", 50, 300.0, 0.5).unwrap();
        graph.add_flight("A", "C", 200, 1000.0, 2.0).unwrap();
        graph
    }

    fn id(graph: &FlightGraph, name: &str) -> CityId {
        graph.resolve(name).unwrap()
    }

    #[test]
    fn test_cost_prefers_cheaper_connection() {
        let graph = setup_test_graph();
        let costs = shortest_from(&graph, "A", &CostMetric).unwrap();

        assert_eq!(costs.source(), id(&graph, "A"));
        assert_eq!(costs.get(id(&graph, "A")), Some(0));
        assert_eq!(costs.get(id(&graph, "B")), Some(100));
        assert_eq!(costs.get(id(&graph, "C")), Some(150));
    }

    #[test]
    fn test_distance_results() {
        let graph = setup_test_graph();
        let distances = shortest_from(&graph, "A", &DistanceMetric).unwrap();

        assert_eq!(distances.get(id(&graph, "A")), Some(0.0));
        assert_eq!(distances.get(id(&graph, "B")), Some(500.0));
        assert_eq!(distances.get(id(&graph, "C")), Some(800.0));
    }

    #[test]
    fn test_isolated_city_unreachable() {
        let graph = setup_test_graph();
        let d = id(&graph, "D");

        let costs = shortest_from(&graph, "A", &CostMetric).unwrap();
        let distances = shortest_from(&graph, "A", &DistanceMetric).unwrap();

        assert!(!costs.is_reachable(d));
        assert!(!distances.is_reachable(d));
        assert_eq!(costs.len(), 4);
        assert_eq!(costs.reachable_count(), 3);
    }

    #[test]
    fn test_isolated_source_reaches_only_itself() {
        let graph = setup_test_graph();
        let costs = shortest_from(&graph, "D", &CostMetric).unwrap();

        assert_eq!(costs.as_slice(), &[None, None, None, Some(0)]);
    }

    #[test]
    fn test_unknown_source() {
        let graph = setup_test_graph();
        let result = shortest_from(&graph, "Atlantis", &CostMetric);

        assert_eq!(
            result.unwrap_err(),
            AlgorithmError::SourceNotFound("Atlantis".to_string())
        );
    }

    #[test]
    fn test_source_id_out_of_range() {
        let graph = setup_test_graph();
        let result = shortest_from_city(&graph, CityId::new(10), &CostMetric);

        assert!(matches!(result, Err(AlgorithmError::SourceNotFound(_))));
    }

    #[test]
    fn test_parallel_flights_use_cheapest() {
        let mut graph = FlightGraph::with_cities(["X", "Y"], GraphOptions::default()).unwrap();
        graph.add_flight("X", "Y", 300, 100.0, 1.0).unwrap();
        graph.add_flight("Y", "X", 120, 900.0, 1.0).unwrap();

        let costs = shortest_from(&graph, "X", &CostMetric).unwrap();
        let distances = shortest_from(&graph, "X", &DistanceMetric).unwrap();

        assert_eq!(costs.get(CityId::new(1)), Some(120));
        assert_eq!(distances.get(CityId::new(1)), Some(100.0));
    }

    #[test]
    fn test_flights_usable_in_both_directions() {
        let graph = setup_test_graph();
        let costs = shortest_from(&graph, "C", &CostMetric).unwrap();

        assert_eq!(costs.get(id(&graph, "B")), Some(50));
        assert_eq!(costs.get(id(&graph, "A")), Some(150));
    }

    #[test]
    fn test_stale_entries_skipped() {
        // S reaches T first through an expensive direct flight, later
        // improved through M; the stale entry must not overwrite it.
        let mut graph = FlightGraph::with_cities(["S", "M", "T", "U"], GraphOptions::default())
            .unwrap();
        graph.add_flight("S", "T", 10, 10.0, 1.0).unwrap();
        graph.add_flight("S", "M", 1, 1.0, 1.0).unwrap();
        graph.add_flight("M", "T", 1, 1.0, 1.0).unwrap();
        graph.add_flight("T", "U", 5, 5.0, 1.0).unwrap();

        let costs = shortest_from(&graph, "S", &CostMetric).unwrap();
        assert_eq!(costs.as_slice(), &[Some(0), Some(1), Some(2), Some(7)]);
    }

    #[test]
    fn test_zero_weight_flights() {
        let mut graph = FlightGraph::with_cities(["A", "B", "C"], GraphOptions::default()).unwrap();
        graph.add_flight("A", "B", 0, 0.0, 0.0).unwrap();
        graph.add_flight("B", "C", 0, 2.5, 0.0).unwrap();

        let costs = shortest_from(&graph, "A", &CostMetric).unwrap();
        let distances = shortest_from(&graph, "A", &DistanceMetric).unwrap();

        assert_eq!(costs.as_slice(), &[Some(0), Some(0), Some(0)]);
        assert_eq!(distances.as_slice(), &[Some(0.0), Some(0.0), Some(2.5)]);
    }

    #[test]
    fn test_cost_saturates_instead_of_wrapping() {
        let mut graph = FlightGraph::with_cities(["A", "B", "C"], GraphOptions::default()).unwrap();
        graph.add_flight("A", "B", u64::MAX - 1, 1.0, 1.0).unwrap();
        graph.add_flight("B", "C", 10, 1.0, 1.0).unwrap();

        let costs = shortest_from(&graph, "A", &CostMetric).unwrap();
        assert_eq!(costs.get(CityId::new(2)), Some(u64::MAX));
    }

    #[test]
    fn test_distance_saturates_instead_of_overflowing() {
        let mut graph = FlightGraph::with_cities(["A", "B", "C"], GraphOptions::default()).unwrap();
        graph.add_flight("A", "B", 1, 1e308, 1.0).unwrap();
        graph.add_flight("B", "C", 1, 1e308, 1.0).unwrap();

        let distances = shortest_from(&graph, "A", &DistanceMetric).unwrap();
        let total = distances.get(CityId::new(2)).unwrap();
        assert!(total.is_finite());
        assert_eq!(total, f64::MAX);
    }

    #[test]
    fn test_repeated_queries_identical() {
        let graph = setup_test_graph();
        let first = shortest_from(&graph, "B", &DistanceMetric).unwrap();
        let second = shortest_from(&graph, "B", &DistanceMetric).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_iter_in_index_order() {
        let graph = setup_test_graph();
        let costs = shortest_from(&graph, "A", &CostMetric).unwrap();
        let pairs: Vec<(usize, Option<u64>)> =
            costs.iter().map(|(city, w)| (city.index(), w)).collect();

        assert_eq!(pairs, vec![(0, Some(0)), (1, Some(100)), (2, Some(150)), (3, None)]);
    }
}

/// Edge weights and the metrics that extract them
///
/// The routing engine is written once against `Metric`; cost and distance
/// routing are two instantiations of it.

use crate::types::Flight;
use std::cmp::Ordering;
use std::fmt::Debug;

/// An additive, totally ordered, non-negative path weight
pub trait Weight: Copy + Debug + PartialEq + Send + Sync {
    /// Additive identity, the weight of the empty path
    const ZERO: Self;

    /// Sum of two weights
    fn add(self, other: Self) -> Self;

    /// Total order used by the frontier
    fn total_cmp(&self, other: &Self) -> Ordering;
}

impl Weight for u64 {
    const ZERO: Self = 0;

    fn add(self, other: Self) -> Self {
        self.saturating_add(other)
    }

    fn total_cmp(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

impl Weight for f64 {
    const ZERO: Self = 0.0;

    /// Saturates at `f64::MAX` so a reachable total stays finite
    fn add(self, other: Self) -> Self {
        let sum = self + other;
        if sum.is_finite() {
            sum
        } else {
            f64::MAX
        }
    }

    fn total_cmp(&self, other: &Self) -> Ordering {
        f64::total_cmp(self, other)
    }
}

/// Selects which flight attribute is summed along a route
pub trait Metric: Sync {
    type Weight: Weight;

    /// Short name used in logs
    const NAME: &'static str;

    /// Weight of traversing `flight`
    fn weight(&self, flight: &Flight) -> Self::Weight;
}

/// Minimize total ticket cost
#[derive(Debug, Clone, Copy, Default)]
pub struct CostMetric;

impl Metric for CostMetric {
    type Weight = u64;
    const NAME: &'static str = "cost";

    fn weight(&self, flight: &Flight) -> u64 {
        flight.cost
    }
}

/// Minimize total flown distance
#[derive(Debug, Clone, Copy, Default)]
pub struct DistanceMetric;

impl Metric for DistanceMetric {
    type Weight = f64;
    const NAME: &'static str = "distance";

    fn weight(&self, flight: &Flight) -> f64 {
        flight.distance
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CityId;

    #[test]
    fn test_metrics_pick_attribute() {
        let flight = Flight::new(CityId::new(3), 120, 640.5, 1.25);
        assert_eq!(CostMetric.weight(&flight), 120);
        assert_eq!(DistanceMetric.weight(&flight), 640.5);
    }

    #[test]
    fn test_cost_addition_saturates() {
        assert_eq!(u64::MAX.add(1), u64::MAX);
        assert_eq!(40u64.add(2), 42);
    }

    #[test]
    fn test_distance_addition_saturates() {
        assert_eq!(1e308f64.add(1e308), f64::MAX);
        assert_eq!(f64::MAX.add(1.0), f64::MAX);
        assert_eq!(1.5f64.add(2.25), 3.75);
    }

    #[test]
    fn test_float_order() {
        assert_eq!(Weight::total_cmp(&1.5f64, &2.0), Ordering::Less);
        assert_eq!(Weight::total_cmp(&0.0f64, &0.0), Ordering::Equal);
    }
}

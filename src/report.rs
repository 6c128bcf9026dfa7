/// Flight report
///
/// Joins both result vectors of a `RouteSummary` with city names and a
/// fuel rate into one row per city. A city is reported as unreachable in
/// every numeric column when either metric marks it unreachable.

use crate::algorithms::RouteSummary;
use crate::storage::FlightStore;
use serde::Serialize;
use std::fmt;

/// Marker printed in place of numbers for unreachable cities
pub const UNREACHABLE: &str = "Unreachable";

/// Default fuel cost per distance unit (Rs per km)
pub const DEFAULT_FUEL_RATE: f64 = 5.0;

/// Estimated fuel cost for a travelled distance
pub fn fuel_cost(distance: f64, fuel_rate: f64) -> f64 {
    distance * fuel_rate
}

/// One city line of the report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub city: String,
    pub cost: Option<u64>,
    pub distance: Option<f64>,
    pub fuel_cost: Option<f64>,
}

impl ReportRow {
    pub fn is_reachable(&self) -> bool {
        self.cost.is_some()
    }
}

/// Per-city table of cheapest cost, shortest distance and fuel estimate
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlightReport {
    pub source: String,
    pub fuel_rate: f64,
    pub rows: Vec<ReportRow>,
}

impl FlightReport {
    /// Build the report for `summary`
    ///
    /// Cities without a registered name are listed with an empty name.
    pub fn new<S>(store: &S, summary: &RouteSummary, fuel_rate: f64) -> Self
    where
        S: FlightStore + ?Sized,
    {
        let rows = summary
            .costs
            .iter()
            .map(|(city, cost)| {
                let name = store.city_name(city).unwrap_or_default().to_string();
                match (cost, summary.distances.get(city)) {
                    (Some(cost), Some(distance)) => ReportRow {
                        city: name,
                        cost: Some(cost),
                        distance: Some(distance),
                        fuel_cost: Some(fuel_cost(distance, fuel_rate)),
                    },
                    _ => ReportRow {
                        city: name,
                        cost: None,
                        distance: None,
                        fuel_cost: None,
                    },
                }
            })
            .collect();

        Self {
            source: store.city_name(summary.source).unwrap_or_default().to_string(),
            fuel_rate,
            rows,
        }
    }

    /// Rows for cities with a finite route
    pub fn reachable(&self) -> impl Iterator<Item = &ReportRow> {
        self.rows.iter().filter(|row| row.is_reachable())
    }
}

impl fmt::Display for FlightReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Flight details from {}:", self.source)?;
        writeln!(
            f,
            "{:<15}{:<15}{:<20}{}",
            "City", "Cost (Rs)", "Distance (km)", "Fuel Cost (Rs)"
        )?;

        for row in &self.rows {
            match (row.cost, row.distance, row.fuel_cost) {
                (Some(cost), Some(distance), Some(fuel)) => writeln!(
                    f,
                    "{:<15}{:<15}{:<20.2}{:.2}",
                    row.city, cost, distance, fuel
                )?,
                _ => writeln!(
                    f,
                    "{:<15}{:<15}{:<20}{}",
                    row.city, UNREACHABLE, UNREACHABLE, UNREACHABLE
                )?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::plan_routes;
    use crate::storage::{FlightGraph, GraphOptions};

    fn setup_report() -> FlightReport {
        let mut graph =
            FlightGraph::with_cities(["A", "B", "C", "D"], GraphOptions::default()).unwrap();
        graph.add_flight("A", "B", 100, 500.0, 1.0).unwrap();
        graph.add_flight("B", "C", 50, 300.0, 0.5).unwrap();
        graph.add_flight("A", "C", 200, 1000.0, 2.0).unwrap();

        let summary = plan_routes(&graph, "A").unwrap();
        FlightReport::new(&graph, &summary, DEFAULT_FUEL_RATE)
    }

    #[test]
    fn test_fuel_cost() {
        assert_eq!(fuel_cost(800.0, 5.0), 4000.0);
        assert_eq!(fuel_cost(0.0, 5.0), 0.0);
    }

    #[test]
    fn test_report_rows() {
        let report = setup_report();

        assert_eq!(report.source, "A");
        assert_eq!(report.rows.len(), 4);
        assert_eq!(
            report.rows[2],
            ReportRow {
                city: "C".to_string(),
                cost: Some(150),
                distance: Some(800.0),
                fuel_cost: Some(4000.0),
            }
        );
        assert!(!report.rows[3].is_reachable());
        assert_eq!(report.rows[3].fuel_cost, None);
        assert_eq!(report.reachable().count(), 3);
    }

    #[test]
    fn test_report_table() {
        let rendered = setup_report().to_string();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "Flight details from A:");
        assert!(lines[1].starts_with("City           Cost (Rs)      Distance (km)"));
        assert_eq!(
            lines[2],
            "A              0              0.00                0.00"
        );
        assert_eq!(
            lines[4],
            "C              150            800.00              4000.00"
        );
        assert_eq!(
            lines[5],
            "D              Unreachable    Unreachable         Unreachable"
        );
    }
}

/// Flight Graph
///
/// Cheapest-fare and shortest-distance route planning over a network of
/// cities joined by bidirectional flights.
///
/// # Architecture
///
/// ```text
/// ┌──────────────────────────────────────────────────┐
/// │           Flight Graph                           │
/// ├──────────────────────────────────────────────────┤
/// │  ┌────────────────────────────────┐              │
/// │  │   Import / Prompt (tools)      │              │
/// │  └────────────┬───────────────────┘              │
/// │               ↓                                   │
/// │  ┌────────────────────────────────┐              │
/// │  │   Graph Store (FlightGraph)    │              │
/// │  └────────────┬───────────────────┘              │
/// │               ↓                                   │
/// │  ┌────────────────────────────────┐              │
/// │  │   Dijkstra (cost ∥ distance)   │              │
/// │  └────────────┬───────────────────┘              │
/// │               ↓                                   │
/// │  ┌────────────────────────────────┐              │
/// │  │   Report / Export              │              │
/// │  └────────────────────────────────┘              │
/// └──────────────────────────────────────────────────┘
/// ```
///
/// # Modules
///
/// - `types`: Core data types (CityId, City, Flight, FlightRecord)
/// - `storage`: Graph store trait and in-memory implementation
/// - `algorithms`: Shortest paths per metric, parallel route planning
/// - `report`: Per-city cost, distance and fuel estimate table
/// - `config`: Environment-driven settings
/// - `tools`: Network import, interactive input, report export

pub mod types;
pub mod storage;
pub mod algorithms;
pub mod report;
pub mod config;
pub mod tools;

// Re-export commonly used types
pub use types::{City, CityId, Flight, FlightRecord};

// Re-export storage types
pub use storage::{FlightGraph, FlightStore, GraphOptions, StorageError, StorageResult};

// Re-export algorithm types
pub use algorithms::{
    plan_routes, shortest_from, AlgorithmError, AlgorithmResult, CostMetric, DistanceMetric,
    Metric, RouteSummary, ShortestPaths, Weight,
};

// Re-export report types
pub use report::{fuel_cost, FlightReport, ReportRow, DEFAULT_FUEL_RATE, UNREACHABLE};

pub use config::PlannerConfig;

// Re-export tool types
pub use tools::{
    export_report, import_from_csv, import_from_json, write_report, ExportFormat, ExportOptions,
    FlightNetwork, ImportOptions, ImportStats, Prompter, ToolError, ToolResult,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

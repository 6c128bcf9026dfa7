/// Routing algorithms module
///
/// This module implements single-source shortest paths over the flight
/// graph, generic over the flight attribute being minimized.

pub mod metric;
pub mod parallel;
pub mod shortest_path;

pub use metric::{CostMetric, DistanceMetric, Metric, Weight};
pub use parallel::{plan_routes, RouteSummary};
pub use shortest_path::{shortest_from, ShortestPaths};

use thiserror::Error;

/// Algorithm errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AlgorithmError {
    #[error("Storage error: {0}")]
    StorageError(#[from] crate::storage::StorageError),

    #[error("Source city not found: {0}")]
    SourceNotFound(String),
}

pub type AlgorithmResult<T> = Result<T, AlgorithmError>;

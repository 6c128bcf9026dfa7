/// Input and output tools
///
/// This module provides the collaborators around the routing core:
/// loading flight networks from files or a terminal, and writing
/// reports out in several formats.

pub mod export;
pub mod import;
pub mod prompt;

pub use export::{export_report, write_report, ExportFormat, ExportOptions};
pub use import::{import_from_csv, import_from_json, FlightNetwork, ImportOptions, ImportStats};
pub use prompt::Prompter;

use thiserror::Error;

/// Import/export errors
#[derive(Error, Debug)]
pub enum ToolError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Storage error: {0}")]
    StorageError(#[from] crate::storage::StorageError),

    #[error("Algorithm error: {0}")]
    AlgorithmError(#[from] crate::algorithms::AlgorithmError),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Invalid data format: {0}")]
    InvalidFormat(String),

    #[error("Input ended unexpectedly")]
    UnexpectedEof,
}

pub type ToolResult<T> = Result<T, ToolError>;

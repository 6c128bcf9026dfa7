/// Report export utilities
///
/// Supports writing a flight report as:
/// - an aligned text table
/// - JSON
/// - CSV

use super::{ToolError, ToolResult};
use crate::report::{FlightReport, UNREACHABLE};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

/// Export format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Table,
    Json,
    Csv,
}

impl FromStr for ExportFormat {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            other => Err(ToolError::InvalidFormat(format!(
                "unknown export format {other:?} (expected table, json or csv)"
            ))),
        }
    }
}

/// Export options
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Pretty-print JSON output
    pub pretty_json: bool,
    /// Include header row in CSV
    pub csv_header: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            pretty_json: true,
            csv_header: true,
        }
    }
}

/// Write a report to `writer` in the given format
pub fn write_report<W: Write>(
    report: &FlightReport,
    format: ExportFormat,
    mut writer: W,
    options: &ExportOptions,
) -> ToolResult<()> {
    match format {
        ExportFormat::Table => write!(writer, "{report}")?,
        ExportFormat::Json => {
            if options.pretty_json {
                serde_json::to_writer_pretty(&mut writer, report)?;
            } else {
                serde_json::to_writer(&mut writer, report)?;
            }
            writeln!(writer)?;
        }
        ExportFormat::Csv => write_csv(report, &mut writer, options)?,
    }
    writer.flush()?;
    Ok(())
}

/// Write a report to a file
pub fn export_report<P: AsRef<Path>>(
    report: &FlightReport,
    path: P,
    format: ExportFormat,
    options: &ExportOptions,
) -> ToolResult<()> {
    let file = File::create(path)?;
    write_report(report, format, BufWriter::new(file), options)
}

fn write_csv<W: Write>(report: &FlightReport, writer: W, options: &ExportOptions) -> ToolResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    if options.csv_header {
        csv_writer.write_record(["city", "cost", "distance", "fuel_cost"])?;
    }

    for row in &report.rows {
        let record = match (row.cost, row.distance, row.fuel_cost) {
            (Some(cost), Some(distance), Some(fuel)) => [
                row.city.clone(),
                cost.to_string(),
                format!("{distance:.2}"),
                format!("{fuel:.2}"),
            ],
            _ => [
                row.city.clone(),
                UNREACHABLE.to_string(),
                UNREACHABLE.to_string(),
                UNREACHABLE.to_string(),
            ],
        };
        csv_writer.write_record(&record)?;
    }

    csv_writer.flush()?;
    Ok(())
}

use anyhow::{Context, Result};
use clap::Parser;
use flight_graph::{
    export_report, import_from_csv, import_from_json, plan_routes, write_report, ExportFormat,
    ExportOptions, FlightNetwork, FlightReport, GraphOptions, ImportOptions, PlannerConfig,
    Prompter,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "flight_planner", version = flight_graph::VERSION)]
#[command(about = "Cheapest fares and shortest distances from one city to every other", long_about = None)]
struct Args {
    /// JSON network file (cities, flights, optional source)
    #[arg(short, long, conflicts_with = "flights")]
    network: Option<PathBuf>,

    /// CSV flights file (from,to,cost,distance,duration)
    #[arg(long)]
    flights: Option<PathBuf>,

    /// City names for the CSV flights file, in index order
    #[arg(long, value_delimiter = ',', requires = "flights")]
    cities: Vec<String>,

    /// Source city (overrides the one in the network file)
    #[arg(short, long)]
    source: Option<String>,

    /// Output format (table, json, csv)
    #[arg(short, long, default_value = "table")]
    format: ExportFormat,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Fuel cost per km (overrides FUEL_RATE)
    #[arg(long)]
    fuel_rate: Option<f64>,

    /// Refuse duplicate city names
    #[arg(long)]
    strict_city_names: bool,

    /// Skip flights with unknown cities or invalid values
    #[arg(long)]
    skip_errors: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = PlannerConfig::from_env()?;
    if let Some(rate) = args.fuel_rate {
        anyhow::ensure!(rate.is_finite() && rate >= 0.0, "fuel rate must be non-negative");
        config.fuel_rate = rate;
    }
    config.strict_city_names |= args.strict_city_names;

    init_logging(&config)?;
    tracing::debug!("Configuration: {:?}", config);

    let interactive = args.network.is_none() && args.flights.is_none();
    let network = load_network(&args)?;

    let source = args
        .source
        .clone()
        .or_else(|| network.source.clone())
        .context("No source city given")?;

    let options = ImportOptions {
        // the terminal flow reports bad flights and carries on
        skip_errors: args.skip_errors || interactive,
        graph: GraphOptions {
            strict_city_names: config.strict_city_names,
        },
    };
    let (graph, stats) = network.build_graph(&options)?;
    for error in &stats.errors {
        eprintln!("Error: {}", error);
    }

    let summary = plan_routes(&graph, &source)?;
    let report = FlightReport::new(&graph, &summary, config.fuel_rate);

    let export_options = ExportOptions::default();
    match &args.output {
        Some(path) => {
            export_report(&report, path, args.format, &export_options)
                .with_context(|| format!("Failed to write report to {:?}", path))?;
            println!("Report written to {:?}", path);
        }
        None => {
            println!();
            write_report(&report, args.format, io::stdout().lock(), &export_options)?;
        }
    }

    Ok(())
}

fn load_network(args: &Args) -> Result<FlightNetwork> {
    if let Some(path) = &args.network {
        return import_from_json(path)
            .with_context(|| format!("Failed to import network from {:?}", path));
    }
    if let Some(path) = &args.flights {
        return import_from_csv(path, args.cities.clone())
            .with_context(|| format!("Failed to import flights from {:?}", path));
    }

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    Ok(prompter.read_network()?)
}

fn init_logging(config: &PlannerConfig) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json().with_writer(io::stderr))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().pretty().with_writer(io::stderr))
                .init();
        }
    }

    Ok(())
}

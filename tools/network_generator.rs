use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use flight_graph::{FlightNetwork, FlightRecord};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, ValueEnum)]
enum NetworkType {
    Uniform,
    HubAndSpoke,
    Chain,
}

#[derive(Parser, Debug)]
#[command(name = "network_generator")]
#[command(about = "Generate flight network datasets for benchmarking", long_about = None)]
struct Args {
    /// Shape of the network to generate
    #[arg(short = 't', long, value_enum)]
    network_type: NetworkType,

    /// Number of cities
    #[arg(short = 'n', long, default_value_t = 1000)]
    cities: usize,

    /// Average number of flights per city (uniform networks)
    #[arg(short = 'd', long, default_value_t = 6)]
    avg_degree: usize,

    /// Number of hubs (hub-and-spoke networks)
    #[arg(long, default_value_t = 8)]
    hubs: usize,

    /// Output directory
    #[arg(short, long)]
    output: PathBuf,

    /// Export formats (csv, json)
    #[arg(short, long, value_delimiter = ',', default_value = "json")]
    formats: Vec<String>,

    /// Random seed for reproducibility
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

struct NetworkGenerator {
    rng: StdRng,
}

impl NetworkGenerator {
    fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn city_names(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("City{}", i)).collect()
    }

    /// Random flight between two cities
    ///
    /// Distance is drawn first; cost and duration follow it loosely so
    /// cheapest and shortest routes tend to differ.
    fn flight(&mut self, from: &str, to: &str) -> FlightRecord {
        let distance: f64 = self.rng.gen_range(150.0..3000.0);
        let cost = (distance * self.rng.gen_range(2.0..6.0)) as u64 + 500;
        let duration = distance / self.rng.gen_range(650.0..850.0) + 0.5;
        FlightRecord::new(from, to, cost, round2(distance), round2(duration))
    }

    /// Uniform random network with a fixed average degree
    fn generate_uniform(&mut self, n: usize, avg_degree: usize) -> FlightNetwork {
        println!("Generating uniform network with {} cities, avg degree {}...", n, avg_degree);

        let cities = Self::city_names(n);
        let num_flights = (n * avg_degree) / 2;
        let mut flights = Vec::with_capacity(num_flights);
        let mut pairs = HashSet::new();

        if n >= 2 {
            let max_pairs = n * (n - 1) / 2;
            while flights.len() < num_flights.min(max_pairs) {
                let a = self.rng.gen_range(0..n);
                let b = self.rng.gen_range(0..n);
                if a == b || !pairs.insert((a.min(b), a.max(b))) {
                    continue;
                }
                let flight = self.flight(&cities[a], &cities[b]);
                flights.push(flight);
            }
        }

        println!("Generated {} cities and {} flights", cities.len(), flights.len());
        FlightNetwork {
            source: cities.first().cloned(),
            cities,
            flights,
        }
    }

    /// A fully connected core of hubs, every other city linked to one or two hubs
    fn generate_hub_and_spoke(&mut self, n: usize, hubs: usize) -> FlightNetwork {
        let hubs = hubs.clamp(1, n.max(1));
        println!("Generating hub-and-spoke network with {} cities, {} hubs...", n, hubs);

        let cities = Self::city_names(n);
        let mut flights = Vec::new();

        for a in 0..hubs {
            for b in (a + 1)..hubs {
                let flight = self.flight(&cities[a], &cities[b]);
                flights.push(flight);
            }
        }

        for spoke in hubs..n {
            let first = self.rng.gen_range(0..hubs);
            let flight = self.flight(&cities[spoke], &cities[first]);
            flights.push(flight);

            if hubs > 1 && self.rng.gen_bool(0.3) {
                let second = (first + self.rng.gen_range(1..hubs)) % hubs;
                let flight = self.flight(&cities[spoke], &cities[second]);
                flights.push(flight);
            }
        }

        println!("Generated {} cities and {} flights", cities.len(), flights.len());
        FlightNetwork {
            source: cities.first().cloned(),
            cities,
            flights,
        }
    }

    /// Cities in a line, each linked to the next
    fn generate_chain(&mut self, n: usize) -> FlightNetwork {
        println!("Generating chain network with {} cities...", n);

        let cities = Self::city_names(n);
        let flights = cities
            .windows(2)
            .map(|pair| self.flight(&pair[0], &pair[1]))
            .collect::<Vec<_>>();

        println!("Generated {} cities and {} flights", cities.len(), flights.len());
        FlightNetwork {
            source: cities.first().cloned(),
            cities,
            flights,
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Export network to JSON format
fn export_json(network: &FlightNetwork, path: &Path) -> Result<()> {
    let file = File::create(path.join("network.json"))?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, network)?;
    println!("Exported to JSON: {:?}", path.join("network.json"));
    Ok(())
}

/// Export flights to CSV format
fn export_csv(network: &FlightNetwork, path: &Path) -> Result<()> {
    let file = File::create(path.join("flights.csv"))?;
    let mut writer = csv::Writer::from_writer(BufWriter::new(file));
    for flight in &network.flights {
        writer.serialize(flight)?;
    }
    writer.flush()?;
    println!("Exported to CSV: {:?}", path.join("flights.csv"));
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Create output directory
    std::fs::create_dir_all(&args.output)
        .context("Failed to create output directory")?;

    let mut generator = NetworkGenerator::new(args.seed);

    let network = match args.network_type {
        NetworkType::Uniform => generator.generate_uniform(args.cities, args.avg_degree),
        NetworkType::HubAndSpoke => generator.generate_hub_and_spoke(args.cities, args.hubs),
        NetworkType::Chain => generator.generate_chain(args.cities),
    };

    for format in &args.formats {
        match format.as_str() {
            "json" => export_json(&network, &args.output)?,
            "csv" => export_csv(&network, &args.output)?,
            other => eprintln!("Warning: Unknown format '{}', skipping", other),
        }
    }

    println!("Network generation complete!");
    Ok(())
}

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "railnav", version, about = "Build railway graphs and find routes")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Default log filter when `RUST_LOG` is unset
    pub fn default_log_filter(&self) -> &'static str {
        match &self.command {
            Command::Build(args) if args.verbose => "debug",
            _ => "info",
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build a routable network from raw railway records
    Build(BuildArgs),
    /// Find a route between two stations
    Route(RouteArgs),
    /// Search, locate or list stations
    Stations(StationsArgs),
    /// Print network statistics
    Info(InfoArgs),
}

#[derive(Args, Debug)]
pub struct BuildArgs {
    /// JSON file with raw points, segments and coordinates
    #[arg(short, long)]
    pub input: PathBuf,

    /// Where to save the built network
    #[arg(short, long)]
    pub output: PathBuf,

    /// Edges longer than this are inspected for subdivision
    #[arg(long, default_value_t = 50.0)]
    pub long_edge_km: f64,

    /// Inspected edges longer than this are split at their midpoint
    #[arg(long, default_value_t = 100.0)]
    pub split_edge_km: f64,

    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Args, Debug)]
pub struct RouteArgs {
    #[arg(short, long)]
    pub network: PathBuf,

    #[arg(long)]
    pub from: String,

    #[arg(long)]
    pub to: String,

    /// Also list up to N alternative routes, shortest first
    #[arg(long, value_name = "N")]
    pub alternatives: Option<usize>,

    /// Write the shortest route as GeoJSON to this file
    #[arg(long, value_name = "FILE")]
    pub geojson: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct StationsArgs {
    #[arg(short, long)]
    pub network: PathBuf,

    /// Fuzzy search by name
    #[arg(short, long, conflicts_with_all = ["lat", "lon"])]
    pub query: Option<String>,

    /// Maximum number of search results
    #[arg(short, long, default_value_t = railnav_core::DEFAULT_MAX_RESULTS)]
    pub limit: usize,

    #[arg(long, requires = "lon", allow_negative_numbers = true)]
    pub lat: Option<f64>,

    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    pub lon: Option<f64>,

    /// Search radius around `--lat`/`--lon` in kilometers
    #[arg(long, default_value_t = 10.0)]
    pub radius: f64,
}

#[derive(Args, Debug)]
pub struct InfoArgs {
    #[arg(short, long)]
    pub network: PathBuf,
}

use log::{info, warn};

use super::config::{NetworkConfig, SubdivisionConfig};
use super::graph_builder::{BuildReport, build_rail_graph};
use super::parser::read_raw_network;
use super::raw_types::RawNetwork;
use super::subdivide::subdivide_long_edges;
use crate::{Error, RailGraph, RailNetwork};

/// Creates a queryable rail network based on the provided configuration
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the raw records
/// cannot be read
pub fn create_rail_network(config: &NetworkConfig) -> Result<RailNetwork, Error> {
    let (graph, _) = create_rail_graph(config)?;
    let network = RailNetwork::new(graph);
    info!("Indexed {} stations", network.station_count());
    Ok(network)
}

/// Reads raw records and builds the subdivided graph, without indexing it
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the raw records
/// cannot be read
pub fn create_rail_graph(config: &NetworkConfig) -> Result<(RailGraph, BuildReport), Error> {
    validate_config(config)?;

    info!("Reading raw records: {}", config.input_path.display());
    let raw = read_raw_network(&config.input_path)?;

    build_graph(&raw, &config.subdivision)
}

/// Builds and subdivides the graph from already loaded raw records
///
/// # Errors
///
/// Returns an error if the subdivision thresholds are invalid
pub fn build_graph(
    raw: &RawNetwork,
    subdivision: &SubdivisionConfig,
) -> Result<(RailGraph, BuildReport), Error> {
    validate_subdivision(subdivision)?;

    let (mut graph, mut report) = build_rail_graph(&raw.points, &raw.segments, &raw.coordinates);

    let subdivided = subdivide_long_edges(&mut graph, subdivision);
    report.long_edges_inspected = subdivided.inspected;
    report.edges_split = subdivided.split;

    let stats = graph.statistics();
    if stats.connected_components > 1 {
        warn!(
            "Network has {} disconnected components; some station pairs have no route",
            stats.connected_components
        );
    }
    info!(
        "Network ready: {} nodes, {} edges, {:.2} km of track",
        stats.total_nodes, stats.total_edges, stats.total_length_km
    );

    Ok((graph, report))
}

fn validate_config(config: &NetworkConfig) -> Result<(), Error> {
    if !config.input_path.exists() {
        return Err(Error::IoError(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Input file not found: {}", config.input_path.display()),
        )));
    }

    validate_subdivision(&config.subdivision)
}

fn validate_subdivision(config: &SubdivisionConfig) -> Result<(), Error> {
    let SubdivisionConfig {
        long_edge_km,
        split_edge_km,
    } = *config;

    if !(long_edge_km.is_finite() && long_edge_km > 0.0) {
        return Err(Error::InvalidData(format!(
            "Long edge threshold must be positive, got {long_edge_km}"
        )));
    }
    if !(split_edge_km.is_finite() && split_edge_km > 0.0) {
        return Err(Error::InvalidData(format!(
            "Split edge threshold must be positive, got {split_edge_km}"
        )));
    }
    if long_edge_km > split_edge_km {
        return Err(Error::InvalidData(format!(
            "Long edge threshold ({long_edge_km} km) exceeds split threshold ({split_edge_km} km)"
        )));
    }

    Ok(())
}

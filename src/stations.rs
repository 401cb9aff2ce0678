use std::io::Write;

use railnav_core::{RailNetwork, load_network, nearby_stations, search_stations};

use crate::CliError;
use crate::cli::StationsArgs;

/// Stations shown per kind when listing the whole network
const LISTED_PER_KIND: usize = 10;

pub fn run(args: &StationsArgs, out: &mut impl Write) -> Result<(), CliError> {
    let network = load_network(&args.network)?;

    match (&args.query, args.lat, args.lon) {
        (Some(query), _, _) => write_matches(&network, query, args.limit, out)?,
        (None, Some(lat), Some(lon)) => write_nearby(&network, lat, lon, args.radius, out)?,
        _ => write_listing(&network, out)?,
    }
    Ok(())
}

fn write_matches(
    network: &RailNetwork,
    query: &str,
    limit: usize,
    out: &mut impl Write,
) -> std::io::Result<()> {
    let matches = search_stations(network, query, limit);
    if matches.is_empty() {
        return writeln!(out, "No stations match '{query}'");
    }
    for found in matches {
        writeln!(
            out,
            "{:>3}  {} ({}) {:.4}, {:.4}",
            found.score,
            found.station.name,
            found.station.kind,
            found.station.coordinate.lat,
            found.station.coordinate.lon
        )?;
    }
    Ok(())
}

fn write_nearby(
    network: &RailNetwork,
    lat: f64,
    lon: f64,
    radius_km: f64,
    out: &mut impl Write,
) -> std::io::Result<()> {
    let nearby = nearby_stations(network, lat, lon, radius_km);
    if nearby.is_empty() {
        return writeln!(out, "No stations within {radius_km} km of {lat}, {lon}");
    }
    for found in nearby {
        writeln!(
            out,
            "{:>8.2} km  {} ({})",
            found.distance_km, found.station.name, found.station.kind
        )?;
    }
    Ok(())
}

fn write_listing(network: &RailNetwork, out: &mut impl Write) -> std::io::Result<()> {
    for (kind, stations) in network.stations_by_kind() {
        writeln!(out, "{kind} ({})", stations.len())?;
        for station in stations.iter().take(LISTED_PER_KIND) {
            writeln!(out, "  {}", station.name)?;
        }
        if stations.len() > LISTED_PER_KIND {
            writeln!(out, "  ... and {} more", stations.len() - LISTED_PER_KIND)?;
        }
    }
    Ok(())
}

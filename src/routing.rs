use std::io::Write;

use railnav_core::{
    RailNetwork, RouteResult, find_alternative_routes, find_route, format_distance, load_network,
};

use crate::CliError;
use crate::cli::RouteArgs;

pub fn run(args: &RouteArgs, out: &mut impl Write) -> Result<(), CliError> {
    let network = load_network(&args.network)?;

    let Some(shortest) = find_route(&network, &args.from, &args.to)? else {
        return Err(CliError::NoRoute {
            from: args.from.clone(),
            to: args.to.clone(),
        });
    };

    if let Some(path) = &args.geojson {
        std::fs::write(path, shortest.to_geojson_string(&network)?)?;
    }

    match args.alternatives {
        Some(count) if count > 1 => write_alternatives(&network, args, count, out)?,
        _ => write_route(&shortest, out)?,
    }

    if let Some(path) = &args.geojson {
        writeln!(out, "GeoJSON written to {}", path.display())?;
    }
    Ok(())
}

fn write_alternatives(
    network: &RailNetwork,
    args: &RouteArgs,
    count: usize,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let routes = find_alternative_routes(network, &args.from, &args.to, count);
    for (i, route) in routes.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(out, "Route {} of {}", i + 1, routes.len())?;
        write_route(route, out)?;
    }
    Ok(())
}

fn write_route(route: &RouteResult, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "{}", route.summary())?;
    writeln!(out, "  nodes on path: {}", route.node_count())?;
    for waypoint in &route.waypoints {
        writeln!(
            out,
            "  {:>10}  {} ({})",
            format_distance(waypoint.distance_from_start_km),
            waypoint.name,
            waypoint.kind
        )?;
    }
    Ok(())
}

use log::{debug, info};
use serde::Serialize;

use super::dijkstra::{Blocked, shortest_path};
use super::itinerary::RouteResult;
use super::yen::k_shortest_paths;
use crate::search::resolve_pair;
use crate::util::round_to;
use crate::{Coordinate, Error, NEARBY_DISTANCE_DECIMALS, RailNetwork, Station};

/// A station found by a radius or nearest-neighbor query
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NearbyStation<'a> {
    pub station: &'a Station,
    pub distance_km: f64,
}

/// Finds the shortest route between two station names.
///
/// Both names are resolved before any search. `Ok(None)` means both
/// stations exist but no track connects them.
///
/// # Errors
///
/// Returns [`Error::StationNotFound`] listing every name that could not be
/// resolved
pub fn find_route(
    network: &RailNetwork,
    from: &str,
    to: &str,
) -> Result<Option<RouteResult>, Error> {
    let (origin, destination) = resolve_pair(network, from, to).map_err(Error::StationNotFound)?;
    let graph = network.graph();

    let blocked = Blocked::none(graph);
    let Some((_, nodes)) = shortest_path(graph, origin.node, destination.node, &blocked) else {
        info!(
            "No route between '{}' and '{}'",
            origin.name, destination.name
        );
        return Ok(None);
    };

    let route = RouteResult::from_path(graph, &origin.name, &destination.name, nodes);
    if let Some(route) = &route {
        debug!("{}", route.summary());
    }
    Ok(route)
}

/// Finds up to `count` loopless routes between two station names, shortest
/// first. The first route equals the one [`find_route`] returns.
///
/// Unresolvable names yield an empty list rather than an error.
pub fn find_alternative_routes(
    network: &RailNetwork,
    from: &str,
    to: &str,
    count: usize,
) -> Vec<RouteResult> {
    let (origin, destination) = match resolve_pair(network, from, to) {
        Ok(pair) => pair,
        Err(unresolved) => {
            debug!("Alternative routes unavailable: {unresolved}");
            return Vec::new();
        }
    };
    let graph = network.graph();

    k_shortest_paths(graph, origin.node, destination.node, count)
        .into_iter()
        .filter_map(|(_, nodes)| {
            RouteResult::from_path(graph, &origin.name, &destination.name, nodes)
        })
        .collect()
}

/// Stations within `radius_km` great-circle distance of a coordinate,
/// closest first. Distances are rounded to two decimals.
pub fn nearby_stations(
    network: &RailNetwork,
    lat: f64,
    lon: f64,
    radius_km: f64,
) -> Vec<NearbyStation<'_>> {
    let origin = Coordinate::new(lat, lon);

    let mut nearby: Vec<NearbyStation<'_>> = network
        .stations()
        .iter()
        .filter_map(|station| {
            let distance = origin.distance_km(station.coordinate);
            (distance <= radius_km).then(|| NearbyStation {
                station,
                distance_km: round_to(distance, NEARBY_DISTANCE_DECIMALS),
            })
        })
        .collect();

    nearby.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    nearby
}

/// The single closest station, looked up in the station R-tree
pub fn nearest_station(network: &RailNetwork, lat: f64, lon: f64) -> Option<NearbyStation<'_>> {
    let origin = Coordinate::new(lat, lon);
    network
        .stations()
        .nearest(origin)
        .map(|station| NearbyStation {
            station,
            distance_km: round_to(
                origin.distance_km(station.coordinate),
                NEARBY_DISTANCE_DECIMALS,
            ),
        })
}

use log::debug;
use serde::Serialize;

use crate::error::{RouteSide, StationNotFound, UnresolvedStations};
use crate::{EXACT_MATCH_SCORE, Error, MIN_MATCH_SCORE, RailNetwork, Score, Station};

/// A station returned by a fuzzy name search
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationMatch<'a> {
    pub station: &'a Station,
    pub score: Score,
}

/// Ranks indexed stations by name similarity to `query`.
///
/// Each name is scored with every scorer of the network's matcher against
/// the lowercased query and keeps the best score. Matches scoring at or
/// below [`MIN_MATCH_SCORE`] are dropped. Results are sorted by descending
/// score; equal scores keep index order.
pub fn search_stations<'a>(
    network: &'a RailNetwork,
    query: &str,
    max_results: usize,
) -> Vec<StationMatch<'a>> {
    let query = query.to_lowercase();
    let matcher = network.matcher();

    let mut matches: Vec<StationMatch<'a>> = network
        .stations()
        .entries()
        .filter_map(|(name, station)| {
            let score = matcher.best_score(&query, name);
            (score > MIN_MATCH_SCORE).then_some(StationMatch { station, score })
        })
        .collect();

    matches.sort_by(|a, b| b.score.cmp(&a.score));
    matches.truncate(max_results);
    matches
}

/// Exact case-insensitive name, else the best fuzzy match if it scores at
/// least [`EXACT_MATCH_SCORE`]
pub fn resolve_exact<'a>(network: &'a RailNetwork, query: &str) -> Option<&'a Station> {
    if let Some(station) = network.stations().get(query) {
        return Some(station);
    }

    let best = search_stations(network, query, 1).into_iter().next()?;
    if best.score >= EXACT_MATCH_SCORE {
        debug!(
            "Resolved '{query}' to '{}' with score {}",
            best.station.name, best.score
        );
        Some(best.station)
    } else {
        debug!(
            "Best match for '{query}' is '{}' with score {}, too low",
            best.station.name, best.score
        );
        None
    }
}

/// Resolves a single station name
///
/// # Errors
///
/// Returns [`Error::StationNotFound`] if the name fails exact and
/// high-confidence fuzzy resolution
pub fn resolve_station<'a>(network: &'a RailNetwork, query: &str) -> Result<&'a Station, Error> {
    resolve_exact(network, query)
        .ok_or_else(|| Error::StationNotFound(UnresolvedStations::single(None, query)))
}

/// Resolves both ends of a route, reporting every side that fails
pub(crate) fn resolve_pair<'a>(
    network: &'a RailNetwork,
    from: &str,
    to: &str,
) -> Result<(&'a Station, &'a Station), UnresolvedStations> {
    let origin = resolve_exact(network, from);
    let destination = resolve_exact(network, to);

    match (origin, destination) {
        (Some(origin), Some(destination)) => Ok((origin, destination)),
        (origin, destination) => {
            let failures = [
                (origin.is_none(), RouteSide::Origin, from),
                (destination.is_none(), RouteSide::Destination, to),
            ]
            .into_iter()
            .filter(|(failed, _, _)| *failed)
            .map(|(_, side, query)| StationNotFound {
                side: Some(side),
                query: query.to_string(),
            })
            .collect();
            Err(UnresolvedStations(failures))
        }
    }
}

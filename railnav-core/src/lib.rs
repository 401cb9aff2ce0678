//! Railway network construction and routing.
//!
//! Raw railway records (stations, halts, junctions and the track segments
//! connecting them) are turned into a weighted undirected graph. The graph
//! answers shortest-path, k-shortest alternative path, fuzzy station name and
//! radius queries.

pub mod error;
pub mod loading;
pub mod model;
pub mod persistence;
pub mod prelude;
pub mod routing;
pub mod search;
pub mod util;

pub use error::{Error, PersistenceError, RouteSide, StationNotFound, UnresolvedStations};
pub use loading::{NetworkConfig, SubdivisionConfig, create_rail_network};
pub use model::{
    Coordinate, NetworkStatistics, NodeId, NodeKind, RailEdge, RailGraph, RailNetwork, RailNode,
    Station, TrackKind,
};
pub use persistence::{load_graph, load_network, save_network};
pub use routing::{
    NearbyStation, RouteResult, Waypoint, find_alternative_routes, find_route, nearby_stations,
    nearest_station,
};
pub use search::{StationMatch, resolve_exact, resolve_station, search_stations};
pub use util::format_distance;

/// Identifier of a point in the raw input (OSM node id)
pub type PointId = i64;
/// Identifier of a track segment in the raw input (OSM way id)
pub type SegmentId = i64;
/// Fuzzy similarity on a 0-100 scale
pub type Score = u8;

/// Candidates must score strictly above this to appear in search results
pub const MIN_MATCH_SCORE: Score = 50;
/// A single fuzzy match at or above this score resolves a station name
pub const EXACT_MATCH_SCORE: Score = 90;
/// Default number of search results
pub const DEFAULT_MAX_RESULTS: usize = 5;
/// Decimal places kept in reported nearby-station distances
pub const NEARBY_DISTANCE_DECIMALS: i32 = 2;

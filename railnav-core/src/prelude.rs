pub use crate::{DEFAULT_MAX_RESULTS, EXACT_MATCH_SCORE, MIN_MATCH_SCORE};

// Re-export key components
pub use crate::loading::{NetworkConfig, SubdivisionConfig, create_rail_network};
pub use crate::model::{Coordinate, RailGraph, RailNetwork, Station};
pub use crate::persistence::{load_network, save_network};
pub use crate::routing::{
    NearbyStation, RouteResult, Waypoint, find_alternative_routes, find_route, nearby_stations,
    nearest_station,
};
pub use crate::search::{StationMatch, resolve_station, search_stations};

// Core identifiers
pub use crate::PointId;
pub use crate::Score;
pub use crate::SegmentId;
pub use crate::model::{NodeId, NodeKind, TrackKind};

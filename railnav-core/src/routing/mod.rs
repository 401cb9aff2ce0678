//! Route planning over the railway graph: shortest and alternative routes,
//! and station lookup by position.

mod dijkstra;
mod itinerary;
mod planner;
mod yen;

pub use itinerary::{RouteResult, Waypoint};
pub use planner::{
    NearbyStation, find_alternative_routes, find_route, nearby_stations, nearest_station,
};

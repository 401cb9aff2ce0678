//! Data model for the railway network
//!
//! Contains the graph of railway points and track edges, and the immutable
//! queryable network built on top of it.

pub mod coordinate;
pub mod rail;
pub mod rail_network;
pub mod station;

pub use coordinate::Coordinate;
pub use rail::{NetworkStatistics, NodeId, NodeKind, RailEdge, RailGraph, RailNode, TrackKind};
pub use rail_network::RailNetwork;
pub use station::Station;

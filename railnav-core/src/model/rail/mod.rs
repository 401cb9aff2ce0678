//! Railway graph - points, track edges and the graph itself

pub mod components;
pub mod network;

pub use components::{NodeId, NodeKind, RailEdge, RailNode, TrackKind};
pub use network::{NetworkStatistics, RailGraph};

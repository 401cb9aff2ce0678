//! This module is responsible for loading raw railway records and building
//! the routable network out of them.

mod builder;
mod config;
mod graph_builder;
mod parser;
pub mod raw_types;
mod subdivide;

pub use builder::{build_graph, create_rail_graph, create_rail_network};
pub use config::{NetworkConfig, SubdivisionConfig};
pub use graph_builder::{BuildReport, build_rail_graph};
pub use parser::read_raw_network;
pub use raw_types::{CoordinateTable, PointKind, RawNetwork, RawPoint, RawSegment, RawStatistics};
pub use subdivide::{SubdivisionReport, subdivide_long_edges};

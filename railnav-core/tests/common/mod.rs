#![allow(dead_code)]

use std::path::PathBuf;

use hashbrown::HashMap;
use railnav_core::loading::{
    PointKind, RawNetwork, RawPoint, RawSegment, build_graph, read_raw_network,
};
use railnav_core::{
    Coordinate, NetworkConfig, RailNetwork, SubdivisionConfig, TrackKind, create_rail_network,
};

pub fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/sample_network.json")
}

pub fn fixture_raw() -> RawNetwork {
    read_raw_network(&fixture_path()).unwrap()
}

pub fn fixture_network() -> RailNetwork {
    create_rail_network(&NetworkConfig::new(fixture_path())).unwrap()
}

pub fn network_from(raw: &RawNetwork) -> RailNetwork {
    let (graph, _) = build_graph(raw, &SubdivisionConfig::default()).unwrap();
    RailNetwork::new(graph)
}

pub fn station(id: i64, name: &str, kind: PointKind, lat: f64, lon: f64) -> RawPoint {
    RawPoint {
        id,
        lat,
        lon,
        name: Some(name.to_string()),
        kind,
        tags: HashMap::new(),
    }
}

pub fn segment(id: i64, nodes: &[i64], kind: TrackKind) -> RawSegment {
    RawSegment {
        id,
        nodes: nodes.to_vec(),
        kind,
        tags: HashMap::new(),
    }
}

/// Adds a point to the raw records, including its coordinate table entry
pub fn add_point(raw: &mut RawNetwork, point: RawPoint) {
    raw.coordinates
        .insert(point.id, Coordinate::new(point.lat, point.lon));
    raw.points.push(point);
}

//! Saving and loading built graphs.
//!
//! A graph is stored as a versioned snapshot of its node and edge tables in
//! index order, so loading reproduces the exact graph that was saved without
//! re-running the build. Loading validates the whole snapshot before any
//! graph is constructed.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use hashbrown::{HashMap, HashSet};
use log::info;
use petgraph::graph::NodeIndex;
use serde::{Deserialize, Serialize};

use crate::model::{Coordinate, NodeId, NodeKind, RailEdge, RailGraph, RailNode, TrackKind};
use crate::{Error, PersistenceError, PointId, RailNetwork, SegmentId};

/// Snapshot layout version written by this build
pub const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct NetworkSnapshot {
    version: u32,
    nodes: Vec<NodeRecord>,
    edges: Vec<EdgeRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
struct NodeRecord {
    id: NodeId,
    point_id: Option<PointId>,
    name: String,
    kind: NodeKind,
    is_station: bool,
    lat: f64,
    lon: f64,
}

#[derive(Debug, Serialize, Deserialize)]
struct EdgeRecord {
    source: u32,
    target: u32,
    distance_km: f64,
    segment_id: SegmentId,
    track_kind: TrackKind,
}

/// Writes `graph` to `path`, replacing an existing file only once the new
/// one is complete
///
/// # Errors
///
/// Returns [`Error::Persistence`] if the file cannot be written
pub fn save_network(graph: &RailGraph, path: &Path) -> Result<(), Error> {
    let snapshot = snapshot(graph)?;

    let mut temp_path = path.as_os_str().to_owned();
    temp_path.push(".tmp");
    let temp_path = PathBuf::from(temp_path);

    if let Err(e) = write_replacing(&snapshot, &temp_path, path) {
        // Never leave a partial snapshot next to the target
        let _ = std::fs::remove_file(&temp_path);
        return Err(e.into());
    }

    info!(
        "Saved network with {} nodes and {} edges to {}",
        snapshot.nodes.len(),
        snapshot.edges.len(),
        path.display()
    );
    Ok(())
}

fn write_replacing(
    snapshot: &NetworkSnapshot,
    temp_path: &Path,
    path: &Path,
) -> Result<(), PersistenceError> {
    let file = File::create(temp_path)?;
    let mut writer = BufWriter::new(file);
    bincode::serialize_into(&mut writer, snapshot).map_err(PersistenceError::Encode)?;
    writer.flush()?;
    drop(writer);

    std::fs::rename(temp_path, path)?;
    Ok(())
}

/// Loads a saved graph and indexes its stations
///
/// # Errors
///
/// Returns [`Error::Persistence`] if the file is missing, unreadable or
/// corrupt
pub fn load_network(path: &Path) -> Result<RailNetwork, Error> {
    let graph = load_graph(path)?;
    Ok(RailNetwork::new(graph))
}

/// Loads a saved graph without indexing it
///
/// # Errors
///
/// Returns [`Error::Persistence`] if the file is missing, unreadable or
/// corrupt
pub fn load_graph(path: &Path) -> Result<RailGraph, Error> {
    // Decoding from a slice bounds every length prefix by the bytes present
    let bytes = std::fs::read(path).map_err(PersistenceError::Io)?;
    let snapshot: NetworkSnapshot =
        bincode::deserialize(&bytes).map_err(PersistenceError::Decode)?;

    validate(&snapshot)?;
    let graph = restore(snapshot);

    info!(
        "Loaded network with {} nodes and {} edges from {}",
        graph.node_count(),
        graph.edge_count(),
        path.display()
    );
    Ok(graph)
}

fn snapshot(graph: &RailGraph) -> Result<NetworkSnapshot, PersistenceError> {
    let nodes = graph
        .nodes()
        .map(|(_, node)| NodeRecord {
            id: node.id.clone(),
            point_id: node.point_id,
            name: node.name.clone(),
            kind: node.kind,
            is_station: node.is_station(),
            lat: node.coordinate.lat,
            lon: node.coordinate.lon,
        })
        .collect();

    let edges = graph
        .edges()
        .map(|(source, target, edge)| {
            Ok(EdgeRecord {
                source: index_to_u32(source)?,
                target: index_to_u32(target)?,
                distance_km: edge.distance_km,
                segment_id: edge.segment_id,
                track_kind: edge.track_kind,
            })
        })
        .collect::<Result<Vec<_>, PersistenceError>>()?;

    Ok(NetworkSnapshot {
        version: FORMAT_VERSION,
        nodes,
        edges,
    })
}

fn index_to_u32(idx: NodeIndex) -> Result<u32, PersistenceError> {
    u32::try_from(idx.index())
        .map_err(|_| PersistenceError::Corrupt(format!("node index {} too large", idx.index())))
}

fn validate(snapshot: &NetworkSnapshot) -> Result<(), PersistenceError> {
    if snapshot.version != FORMAT_VERSION {
        return Err(PersistenceError::Corrupt(format!(
            "unsupported format version {} (expected {FORMAT_VERSION})",
            snapshot.version
        )));
    }

    let mut ids = HashSet::with_capacity(snapshot.nodes.len());
    for (i, node) in snapshot.nodes.iter().enumerate() {
        if !ids.insert(&node.id) {
            return Err(PersistenceError::Corrupt(format!(
                "duplicate node id {}",
                node.id
            )));
        }
        if node.is_station != node.kind.is_station() {
            return Err(PersistenceError::Corrupt(format!(
                "node {i} has station flag {} but kind {}",
                node.is_station, node.kind
            )));
        }
        if !Coordinate::new(node.lat, node.lon).is_finite() {
            return Err(PersistenceError::Corrupt(format!(
                "node {} has a non-finite coordinate",
                node.id
            )));
        }
    }

    let node_count = snapshot.nodes.len();
    let mut pairs: HashMap<(u32, u32), usize> = HashMap::with_capacity(snapshot.edges.len());
    for (i, edge) in snapshot.edges.iter().enumerate() {
        if edge.source as usize >= node_count || edge.target as usize >= node_count {
            return Err(PersistenceError::Corrupt(format!(
                "edge {i} references a missing node"
            )));
        }
        if edge.source == edge.target {
            return Err(PersistenceError::Corrupt(format!("edge {i} is a self-loop")));
        }
        if !(edge.distance_km.is_finite() && edge.distance_km >= 0.0) {
            return Err(PersistenceError::Corrupt(format!(
                "edge {i} has invalid distance {}",
                edge.distance_km
            )));
        }
        let key = (edge.source.min(edge.target), edge.source.max(edge.target));
        if let Some(first) = pairs.insert(key, i) {
            return Err(PersistenceError::Corrupt(format!(
                "edges {first} and {i} connect the same nodes"
            )));
        }
    }

    Ok(())
}

/// Rebuilds a graph from a validated snapshot
fn restore(snapshot: NetworkSnapshot) -> RailGraph {
    let mut graph = RailGraph::new();

    for record in snapshot.nodes {
        graph.add_node(RailNode {
            id: record.id,
            point_id: record.point_id,
            name: record.name,
            kind: record.kind,
            coordinate: Coordinate::new(record.lat, record.lon),
        });
    }

    for record in snapshot.edges {
        graph.upsert_edge(
            NodeIndex::new(record.source as usize),
            NodeIndex::new(record.target as usize),
            RailEdge {
                distance_km: record.distance_km,
                segment_id: record.segment_id,
                track_kind: record.track_kind,
            },
        );
    }

    graph
}

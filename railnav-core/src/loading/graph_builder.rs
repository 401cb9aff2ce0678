use hashbrown::HashMap;
use itertools::Itertools;
use log::{debug, info, warn};
use petgraph::graph::NodeIndex;
use serde::Serialize;

use super::raw_types::{CoordinateTable, RawPoint, RawSegment};
use crate::PointId;
use crate::model::{NodeId, NodeKind, RailEdge, RailGraph, RailNode};

/// What happened while turning raw records into a graph
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BuildReport {
    pub stations: usize,
    pub track_points: usize,
    pub edges_written: usize,
    /// Edges whose attributes were overwritten by a later segment
    pub edges_replaced: usize,
    /// Point references missing from the coordinate table
    pub skipped_references: usize,
    /// Segments shortened because of skipped references
    pub malformed_segments: usize,
    /// Long edges inspected by subdivision
    pub long_edges_inspected: usize,
    /// Edges split by subdivision
    pub edges_split: usize,
}

/// Builds the railway graph from station points and track segments.
///
/// Every station point becomes a node. Segment point ids are resolved in
/// order through the coordinate table; ids that are not station points become
/// track point nodes on first reference. Ids absent from the table are
/// skipped, which shortens the segment instead of aborting the build.
/// Consecutive resolved nodes are joined by an edge weighted with their
/// great-circle distance. A later segment connecting the same pair of nodes
/// overwrites the earlier edge's attributes.
pub fn build_rail_graph(
    points: &[RawPoint],
    segments: &[RawSegment],
    coordinates: &CoordinateTable,
) -> (RailGraph, BuildReport) {
    let mut graph = RailGraph::new();
    let mut report = BuildReport::default();

    let mut node_lookup = add_station_nodes(&mut graph, points);
    report.stations = node_lookup.len();

    for segment in segments {
        let mut way_nodes: Vec<NodeIndex> = Vec::with_capacity(segment.nodes.len());
        let mut skipped = 0;

        for &point_id in &segment.nodes {
            let Some(&coordinate) = coordinates.get(&point_id) else {
                skipped += 1;
                continue;
            };

            let idx = *node_lookup.entry(point_id).or_insert_with(|| {
                report.track_points += 1;
                graph.add_node(RailNode {
                    id: NodeId::track(point_id),
                    point_id: Some(point_id),
                    name: format!("Track point {point_id}"),
                    kind: NodeKind::TrackPoint,
                    coordinate,
                })
            });
            way_nodes.push(idx);
        }

        if skipped > 0 {
            report.skipped_references += skipped;
            report.malformed_segments += 1;
            warn!(
                "Segment {} references {skipped} point(s) missing from the coordinate table; \
                 shortened to {} node(s)",
                segment.id,
                way_nodes.len()
            );
        }

        if way_nodes.len() < 2 {
            debug!("Segment {} yields no edges", segment.id);
            continue;
        }

        for (a, b) in way_nodes.into_iter().tuple_windows() {
            if a == b {
                // Repeated reference, not a track piece
                continue;
            }
            let edge = RailEdge {
                distance_km: graph.distance_km(a, b),
                segment_id: segment.id,
                track_kind: segment.kind,
            };
            if graph.upsert_edge(a, b, edge) {
                report.edges_replaced += 1;
            }
            report.edges_written += 1;
        }
    }

    info!(
        "Built graph with {} nodes and {} edges ({} stations, {} track points)",
        graph.node_count(),
        graph.edge_count(),
        report.stations,
        report.track_points
    );
    if report.malformed_segments > 0 {
        warn!(
            "{} segments referenced {} unknown points",
            report.malformed_segments, report.skipped_references
        );
    }

    (graph, report)
}

/// Adds one node per station point. A repeated point id replaces the
/// attributes of the earlier node.
fn add_station_nodes(graph: &mut RailGraph, points: &[RawPoint]) -> HashMap<PointId, NodeIndex> {
    let mut lookup = HashMap::with_capacity(points.len());

    for point in points {
        let node = RailNode {
            id: NodeId::station(point.id),
            point_id: Some(point.id),
            name: point.display_name(),
            kind: point.kind.into(),
            coordinate: point.coordinate(),
        };

        match lookup.get(&point.id) {
            Some(&idx) => {
                debug!("Duplicate station point {}, keeping the later record", point.id);
                graph.graph[idx] = node;
            }
            None => {
                lookup.insert(point.id, graph.add_node(node));
            }
        }
    }

    lookup
}

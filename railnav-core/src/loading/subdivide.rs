use log::{debug, info};
use petgraph::graph::NodeIndex;
use serde::Serialize;

use super::config::SubdivisionConfig;
use crate::model::{NodeId, NodeKind, RailEdge, RailGraph, RailNode};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SubdivisionReport {
    /// Edges longer than the inspection threshold
    pub inspected: usize,
    /// Edges replaced by two halves
    pub split: usize,
}

/// Splits very long edges once at their planar midpoint.
///
/// The set of candidate edges is taken before the graph is mutated, so the
/// halves produced here are never split again in the same pass. Each half
/// keeps the segment id and track kind of the original edge and is weighted
/// with the great-circle distance to the new node.
pub fn subdivide_long_edges(
    graph: &mut RailGraph,
    config: &SubdivisionConfig,
) -> SubdivisionReport {
    let long_edges: Vec<(NodeIndex, NodeIndex, RailEdge)> = graph
        .edges()
        .filter(|(_, _, edge)| edge.distance_km > config.long_edge_km)
        .map(|(a, b, edge)| (a, b, edge.clone()))
        .collect();

    let mut report = SubdivisionReport {
        inspected: long_edges.len(),
        split: 0,
    };

    for (a, b, edge) in long_edges {
        if edge.distance_km <= config.split_edge_km {
            continue;
        }

        let (id, coordinate) = {
            let (node_a, node_b) = (&graph.graph[a], &graph.graph[b]);
            (
                NodeId::intermediate(&node_a.id, &node_b.id),
                node_a.coordinate.planar_midpoint(node_b.coordinate),
            )
        };
        debug!("Splitting {:.1} km edge at {id}", edge.distance_km);

        let mid = graph.add_node(RailNode {
            id,
            point_id: None,
            name: "Intermediate point".to_string(),
            kind: NodeKind::Intermediate,
            coordinate,
        });

        graph.remove_edge_between(a, b);
        for end in [a, b] {
            let half = RailEdge {
                distance_km: graph.distance_km(end, mid),
                ..edge.clone()
            };
            graph.upsert_edge(end, mid, half);
        }
        report.split += 1;
    }

    if report.inspected > 0 {
        info!(
            "Inspected {} long edges, split {}",
            report.inspected, report.split
        );
    }

    report
}

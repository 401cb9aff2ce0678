mod to_geojson;

use petgraph::graph::NodeIndex;
use serde::Serialize;

use crate::model::{Coordinate, NodeId, NodeKind, RailGraph};
use crate::util::format_distance;

/// A stop along a route
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Waypoint {
    pub name: String,
    pub kind: NodeKind,
    #[serde(flatten)]
    pub coordinate: Coordinate,
    /// Track distance from the first node of the route
    pub distance_from_start_km: f64,
}

/// A path between two resolved stations
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteResult {
    pub from_name: String,
    pub to_name: String,
    /// Node ids from origin to destination, both included
    pub path: Vec<NodeId>,
    pub total_distance_km: f64,
    pub waypoints: Vec<Waypoint>,
    #[serde(skip)]
    pub(crate) nodes: Vec<NodeIndex>,
}

impl RouteResult {
    /// Annotates a node path. Stations, halts and junctions become waypoints,
    /// as do the first and the last node whatever their kind.
    ///
    /// Returns `None` if two consecutive nodes are not adjacent.
    pub(crate) fn from_path(
        graph: &RailGraph,
        from_name: &str,
        to_name: &str,
        nodes: Vec<NodeIndex>,
    ) -> Option<Self> {
        let last = nodes.len().checked_sub(1)?;
        let mut waypoints = Vec::new();
        let mut path = Vec::with_capacity(nodes.len());
        let mut cumulative = 0.0;

        for (i, &idx) in nodes.iter().enumerate() {
            let node = graph.node(idx)?;
            path.push(node.id.clone());

            if node.kind.is_stop() || i == 0 || i == last {
                waypoints.push(Waypoint {
                    name: node.name.clone(),
                    kind: node.kind,
                    coordinate: node.coordinate,
                    distance_from_start_km: cumulative,
                });
            }

            if let Some(&next) = nodes.get(i + 1) {
                cumulative += graph.edge_between(idx, next)?.distance_km;
            }
        }

        Some(Self {
            from_name: from_name.to_string(),
            to_name: to_name.to_string(),
            path,
            total_distance_km: cumulative,
            waypoints,
            nodes,
        })
    }

    /// Number of graph nodes on the route
    pub fn node_count(&self) -> usize {
        self.path.len()
    }

    /// Waypoints strictly between origin and destination
    pub fn intermediate_stops(&self) -> &[Waypoint] {
        match self.waypoints.len() {
            0..=2 => &[],
            n => &self.waypoints[1..n - 1],
        }
    }

    /// One line summary such as `A -> B: 12.3 km, 4 stops`
    pub fn summary(&self) -> String {
        format!(
            "{} -> {}: {}, {} stops",
            self.from_name,
            self.to_name,
            format_distance(self.total_distance_km),
            self.waypoints.len()
        )
    }
}

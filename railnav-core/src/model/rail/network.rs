use hashbrown::HashMap;
use petgraph::algo::connected_components;
use petgraph::graph::{EdgeIndex, NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use serde::Serialize;

use super::{NodeId, NodeKind, RailEdge, RailNode};
use crate::util::round_to;

/// Undirected railway graph.
///
/// Nodes are never removed, so a `NodeIndex` stays valid for the lifetime of
/// the graph. At most one edge connects any pair of nodes.
#[derive(Debug, Clone, Default)]
pub struct RailGraph {
    pub(crate) graph: UnGraph<RailNode, RailEdge>,
    node_lookup: HashMap<NodeId, NodeIndex>,
}

/// Summary figures of a built graph
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkStatistics {
    pub total_nodes: usize,
    pub total_edges: usize,
    pub stations: usize,
    pub track_points: usize,
    pub total_length_km: f64,
    pub connected_components: usize,
}

impl RailGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn graph(&self) -> &UnGraph<RailNode, RailEdge> {
        &self.graph
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Adds a node unless one with the same id exists; returns the index of
    /// the node carrying that id either way.
    pub fn add_node(&mut self, node: RailNode) -> NodeIndex {
        if let Some(&idx) = self.node_lookup.get(&node.id) {
            return idx;
        }
        let id = node.id.clone();
        let idx = self.graph.add_node(node);
        self.node_lookup.insert(id, idx);
        idx
    }

    pub fn node_index(&self, id: &NodeId) -> Option<NodeIndex> {
        self.node_lookup.get(id).copied()
    }

    pub fn contains_node(&self, id: &NodeId) -> bool {
        self.node_lookup.contains_key(id)
    }

    pub fn node(&self, idx: NodeIndex) -> Option<&RailNode> {
        self.graph.node_weight(idx)
    }

    /// Nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = (NodeIndex, &RailNode)> {
        self.graph
            .node_indices()
            .map(move |idx| (idx, &self.graph[idx]))
    }

    /// Edges in index order as `(endpoint, endpoint, edge)`
    pub fn edges(&self) -> impl Iterator<Item = (NodeIndex, NodeIndex, &RailEdge)> {
        self.graph
            .edge_references()
            .map(|edge| (edge.source(), edge.target(), edge.weight()))
    }

    pub fn edge_between(&self, a: NodeIndex, b: NodeIndex) -> Option<&RailEdge> {
        self.graph
            .find_edge(a, b)
            .and_then(|edge| self.graph.edge_weight(edge))
    }

    pub(crate) fn edge_index(&self, a: NodeIndex, b: NodeIndex) -> Option<EdgeIndex> {
        self.graph.find_edge(a, b)
    }

    /// Writes `edge` between `a` and `b`, replacing the attributes of an
    /// existing edge between the same pair. Returns `true` on replacement.
    pub fn upsert_edge(&mut self, a: NodeIndex, b: NodeIndex, edge: RailEdge) -> bool {
        let existed = self.graph.find_edge(a, b).is_some();
        self.graph.update_edge(a, b, edge);
        existed
    }

    pub(crate) fn remove_edge_between(&mut self, a: NodeIndex, b: NodeIndex) -> Option<RailEdge> {
        let edge = self.graph.find_edge(a, b)?;
        self.graph.remove_edge(edge)
    }

    /// Great-circle distance between two nodes' coordinates
    pub(crate) fn distance_km(&self, a: NodeIndex, b: NodeIndex) -> f64 {
        self.graph[a].coordinate.distance_km(self.graph[b].coordinate)
    }

    /// Sum of edge distances along `path`, `None` if two consecutive nodes are
    /// not adjacent
    pub fn path_distance(&self, path: &[NodeIndex]) -> Option<f64> {
        path.windows(2).try_fold(0.0, |total, pair| {
            self.edge_between(pair[0], pair[1])
                .map(|edge| total + edge.distance_km)
        })
    }

    #[allow(clippy::cast_precision_loss)]
    pub fn statistics(&self) -> NetworkStatistics {
        let stations = self.graph.node_weights().filter(|n| n.is_station()).count();
        let total_length: f64 = self.graph.edge_weights().map(|e| e.distance_km).sum();

        NetworkStatistics {
            total_nodes: self.graph.node_count(),
            total_edges: self.graph.edge_count(),
            stations,
            track_points: self.graph.node_count() - stations,
            total_length_km: round_to(total_length, 2),
            connected_components: connected_components(&self.graph),
        }
    }

    pub fn count_kind(&self, kind: NodeKind) -> usize {
        self.graph.node_weights().filter(|n| n.kind == kind).count()
    }
}

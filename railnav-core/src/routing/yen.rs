//! Loopless k-shortest paths (Yen's algorithm)

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use hashbrown::HashSet;
use log::trace;
use petgraph::graph::NodeIndex;

use super::dijkstra::{Blocked, shortest_path};
use crate::model::RailGraph;

/// A path with its total distance
pub(crate) type CostedPath = (f64, Vec<NodeIndex>);

#[derive(Debug, Clone)]
struct Candidate {
    cost: f64,
    path: Vec<NodeIndex>,
}

// Min-heap by cost, then by node sequence
impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.path.cmp(&self.path))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

/// Up to `k` simple paths from `source` to `target` in non-decreasing
/// distance order.
///
/// Each accepted path is deviated from at every node: the root up to that
/// node is kept, its nodes are blocked, as are the next edges of accepted
/// paths sharing the root, and a fresh shortest path is searched from the
/// deviation node. Path costs are summed along the node sequence with
/// [`RailGraph::path_distance`].
pub(crate) fn k_shortest_paths(
    graph: &RailGraph,
    source: NodeIndex,
    target: NodeIndex,
    k: usize,
) -> Vec<CostedPath> {
    if k == 0 {
        return Vec::new();
    }

    let Some((_, first)) = shortest_path(graph, source, target, &Blocked::none(graph)) else {
        return Vec::new();
    };
    let Some(first_cost) = graph.path_distance(&first) else {
        return Vec::new();
    };

    let mut accepted: Vec<CostedPath> = vec![(first_cost, first.clone())];
    let mut seen: HashSet<Vec<NodeIndex>> = HashSet::new();
    seen.insert(first);
    let mut candidates: BinaryHeap<Candidate> = BinaryHeap::new();

    while accepted.len() < k {
        let last = accepted[accepted.len() - 1].1.clone();

        for spur_at in 0..last.len().saturating_sub(1) {
            let spur_node = last[spur_at];
            let root = &last[..=spur_at];

            let mut blocked = Blocked::none(graph);
            for (_, path) in &accepted {
                if path.len() > spur_at + 1 && &path[..=spur_at] == root {
                    if let Some(edge) = graph.edge_index(path[spur_at], path[spur_at + 1]) {
                        blocked.edges.insert(edge.index());
                    }
                }
            }
            for node in &root[..spur_at] {
                blocked.nodes.insert(node.index());
            }

            let Some((_, spur_path)) = shortest_path(graph, spur_node, target, &blocked) else {
                continue;
            };

            let mut path = root[..spur_at].to_vec();
            path.extend(spur_path);

            if seen.contains(&path) {
                continue;
            }
            if let Some(cost) = graph.path_distance(&path) {
                trace!("Candidate path of {} nodes, {cost:.3} km", path.len());
                seen.insert(path.clone());
                candidates.push(Candidate { cost, path });
            }
        }

        match candidates.pop() {
            Some(Candidate { cost, path }) => accepted.push((cost, path)),
            None => break,
        }
    }

    accepted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Coordinate, NodeId, NodeKind, RailEdge, RailNode, TrackKind};

    fn graph(edges: &[(usize, usize, f64)], nodes: usize) -> (RailGraph, Vec<NodeIndex>) {
        let mut graph = RailGraph::new();
        let idx: Vec<NodeIndex> = (0..nodes)
            .map(|i| {
                graph.add_node(RailNode {
                    id: NodeId::new(format!("n{i}")),
                    point_id: None,
                    name: format!("n{i}"),
                    kind: NodeKind::TrackPoint,
                    coordinate: Coordinate::new(0.0, 0.0),
                })
            })
            .collect();
        for &(a, b, d) in edges {
            graph.upsert_edge(
                idx[a],
                idx[b],
                RailEdge {
                    distance_km: d,
                    segment_id: 1,
                    track_kind: TrackKind::Rail,
                },
            );
        }
        (graph, idx)
    }

    #[test]
    fn enumerates_in_cost_order() {
        // 0-1-3: 2, 0-2-3: 3, 0-3: 10, 0-1-2-3: 1 + 0.5 + 1.5 = 3, 0-2-1-3: 1.5 + 0.5 + 1 = 3
        let (graph, n) = graph(
            &[(0, 1, 1.0), (1, 3, 1.0), (0, 2, 1.5), (2, 3, 1.5), (0, 3, 10.0), (1, 2, 0.5)],
            4,
        );
        let paths = k_shortest_paths(&graph, n[0], n[3], 10);

        assert_eq!(paths.len(), 5);
        assert_eq!(paths[0], (2.0, vec![n[0], n[1], n[3]]));
        assert_eq!(paths[4], (10.0, vec![n[0], n[3]]));
        assert!(paths.windows(2).all(|w| w[0].0 <= w[1].0));

        let unique: HashSet<&Vec<NodeIndex>> = paths.iter().map(|(_, p)| p).collect();
        assert_eq!(unique.len(), paths.len());
        for (_, path) in &paths {
            let nodes: HashSet<&NodeIndex> = path.iter().collect();
            assert_eq!(nodes.len(), path.len(), "path revisits a node");
        }
    }

    #[test]
    fn stops_when_paths_run_out() {
        let (graph, n) = graph(&[(0, 1, 1.0), (1, 2, 1.0)], 3);
        let paths = k_shortest_paths(&graph, n[0], n[2], 3);
        assert_eq!(paths, vec![(2.0, vec![n[0], n[1], n[2]])]);
    }

    #[test]
    fn unreachable_or_zero_k_is_empty() {
        let (graph, n) = graph(&[(0, 1, 1.0)], 3);
        assert!(k_shortest_paths(&graph, n[0], n[2], 3).is_empty());
        assert!(k_shortest_paths(&graph, n[0], n[1], 0).is_empty());
    }
}

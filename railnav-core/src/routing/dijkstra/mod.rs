//! Shortest paths over track distance

mod state;

use std::collections::BinaryHeap;

use fixedbitset::FixedBitSet;
use hashbrown::HashMap;
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;

use crate::model::RailGraph;
use state::State;

/// Nodes and edges a search must not use
#[derive(Debug, Clone)]
pub(crate) struct Blocked {
    pub(crate) nodes: FixedBitSet,
    pub(crate) edges: FixedBitSet,
}

impl Blocked {
    pub(crate) fn none(graph: &RailGraph) -> Self {
        Self {
            nodes: FixedBitSet::with_capacity(graph.graph.node_count()),
            edges: FixedBitSet::with_capacity(graph.graph.edge_count()),
        }
    }
}

/// Dijkstra's algorithm from `start` to `target` weighted by edge distance.
///
/// Returns the path cost in kilometers and the node sequence including both
/// ends, or `None` if `target` is unreachable without the blocked nodes and
/// edges. `start` itself is never treated as blocked.
pub(crate) fn shortest_path(
    graph: &RailGraph,
    start: NodeIndex,
    target: NodeIndex,
    blocked: &Blocked,
) -> Option<(f64, Vec<NodeIndex>)> {
    let mut distances: HashMap<NodeIndex, f64> = HashMap::new();
    let mut predecessors: HashMap<NodeIndex, NodeIndex> = HashMap::new();
    let mut heap = BinaryHeap::new();

    heap.push(State {
        cost: 0.0,
        node: start,
    });
    distances.insert(start, 0.0);

    while let Some(State { cost, node }) = heap.pop() {
        if node == target {
            return Some((cost, reconstruct(&predecessors, start, target)));
        }

        // Stale heap entry
        if distances.get(&node).is_some_and(|&best| cost > best) {
            continue;
        }

        for edge in graph.graph.edges(node) {
            if blocked.edges.contains(edge.id().index()) {
                continue;
            }
            let next = edge.target();
            if blocked.nodes.contains(next.index()) {
                continue;
            }
            let next_cost = cost + edge.weight().distance_km;

            match distances.entry(next) {
                hashbrown::hash_map::Entry::Vacant(entry) => {
                    entry.insert(next_cost);
                    predecessors.insert(next, node);
                    heap.push(State {
                        cost: next_cost,
                        node: next,
                    });
                }
                hashbrown::hash_map::Entry::Occupied(mut entry) => {
                    if next_cost < *entry.get() {
                        *entry.get_mut() = next_cost;
                        predecessors.insert(next, node);
                        heap.push(State {
                            cost: next_cost,
                            node: next,
                        });
                    }
                }
            }
        }
    }

    None
}

fn reconstruct(
    predecessors: &HashMap<NodeIndex, NodeIndex>,
    start: NodeIndex,
    target: NodeIndex,
) -> Vec<NodeIndex> {
    let mut path = vec![target];
    let mut current = target;
    while current != start {
        match predecessors.get(&current) {
            Some(&prev) => {
                path.push(prev);
                current = prev;
            }
            None => break,
        }
    }
    path.reverse();
    path
}

use std::collections::BTreeMap;

use super::{NetworkStatistics, NodeKind, RailGraph, Station};
use crate::search::{FuzzyMatcher, StationIndex};

/// Queryable railway network.
///
/// Bundles the final graph with the station index derived from it. Built once
/// and never mutated afterwards, so it can be shared between threads and
/// queried concurrently.
pub struct RailNetwork {
    graph: RailGraph,
    stations: StationIndex,
    matcher: FuzzyMatcher,
}

impl RailNetwork {
    /// Indexes the stations of `graph` and uses the default name scorers
    pub fn new(graph: RailGraph) -> Self {
        Self::with_matcher(graph, FuzzyMatcher::default())
    }

    pub fn with_matcher(graph: RailGraph, matcher: FuzzyMatcher) -> Self {
        let stations = StationIndex::build(&graph);
        Self {
            graph,
            stations,
            matcher,
        }
    }

    pub fn graph(&self) -> &RailGraph {
        &self.graph
    }

    pub fn stations(&self) -> &StationIndex {
        &self.stations
    }

    pub fn matcher(&self) -> &FuzzyMatcher {
        &self.matcher
    }

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    pub fn statistics(&self) -> NetworkStatistics {
        self.graph.statistics()
    }

    /// Indexed stations grouped by kind, sorted by name within each kind
    pub fn stations_by_kind(&self) -> BTreeMap<NodeKind, Vec<&Station>> {
        let mut by_kind: BTreeMap<NodeKind, Vec<&Station>> = BTreeMap::new();
        for station in self.stations.iter() {
            by_kind.entry(station.kind).or_default().push(station);
        }
        for stations in by_kind.values_mut() {
            stations.sort_by(|a, b| a.name.cmp(&b.name));
        }
        by_kind
    }

    pub fn into_graph(self) -> RailGraph {
        self.graph
    }
}

impl std::fmt::Debug for RailNetwork {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "RailNetwork with {} nodes, {} edges and {} stations",
            self.graph.node_count(),
            self.graph.edge_count(),
            self.stations.len()
        )
    }
}

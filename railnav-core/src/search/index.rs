use hashbrown::HashMap;
use log::debug;
use rstar::RTree;
use rstar::primitives::GeomWithData;

use crate::model::{Coordinate, RailGraph, Station};

/// Spatial entry: `[lon, lat]` with the slot of the station
type StationPoint = GeomWithData<[f64; 2], usize>;

/// Stations keyed by lowercased display name.
///
/// Built once by scanning the graph's nodes in index order. When two stations
/// share a name the later one replaces the earlier, keeping the earlier
/// one's position in iteration order.
#[derive(Debug, Clone)]
pub struct StationIndex {
    entries: Vec<(String, Station)>,
    by_name: HashMap<String, usize>,
    tree: RTree<StationPoint>,
}

impl StationIndex {
    pub fn build(graph: &RailGraph) -> Self {
        let mut entries: Vec<(String, Station)> = Vec::new();
        let mut by_name: HashMap<String, usize> = HashMap::new();

        for (idx, node) in graph.nodes().filter(|(_, node)| node.is_station()) {
            let key = node.name.to_lowercase();
            let station = Station::from_node(idx, node);

            if let Some(&slot) = by_name.get(&key) {
                debug!(
                    "Station name '{}' is shared; {} replaces {}",
                    node.name, station.id, entries[slot].1.id
                );
                entries[slot].1 = station;
            } else {
                by_name.insert(key.clone(), entries.len());
                entries.push((key, station));
            }
        }

        let tree = RTree::bulk_load(
            entries
                .iter()
                .enumerate()
                .map(|(slot, (_, station))| {
                    let Coordinate { lat, lon } = station.coordinate;
                    GeomWithData::new([lon, lat], slot)
                })
                .collect(),
        );

        Self {
            entries,
            by_name,
            tree,
        }
    }

    /// Case-insensitive exact lookup
    pub fn get(&self, name: &str) -> Option<&Station> {
        self.by_name
            .get(&name.to_lowercase())
            .map(|&slot| &self.entries[slot].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Station> {
        self.entries.iter().map(|(_, station)| station)
    }

    /// `(lowercased name, station)` pairs in index order
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Station)> {
        self.entries
            .iter()
            .map(|(key, station)| (key.as_str(), station))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Station closest to `coordinate` in plain degree space.
    ///
    /// Degrees of longitude shrink towards the poles, so this can differ from
    /// the great-circle nearest station when candidates are almost equally
    /// far.
    pub fn nearest(&self, coordinate: Coordinate) -> Option<&Station> {
        self.tree
            .nearest_neighbor(&[coordinate.lon, coordinate.lat])
            .map(|point| &self.entries[point.data].1)
    }
}

//! Records produced by the ingestion adapter

use std::collections::BTreeMap;

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::model::{Coordinate, NodeKind, TrackKind};
use crate::{PointId, SegmentId};

/// Coordinates of every point a segment may reference
pub type CoordinateTable = HashMap<PointId, Coordinate>;

/// Kind of a station-like point, accepting the OSM `railway=*` spellings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointKind {
    #[serde(alias = "subway_entrance")]
    Station,
    #[serde(alias = "tram_stop")]
    Halt,
    Junction,
    #[serde(alias = "level_crossing")]
    Crossing,
}

impl From<PointKind> for NodeKind {
    fn from(kind: PointKind) -> Self {
        match kind {
            PointKind::Station => NodeKind::Station,
            PointKind::Halt => NodeKind::Halt,
            PointKind::Junction => NodeKind::Junction,
            PointKind::Crossing => NodeKind::Crossing,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawPoint {
    pub id: PointId,
    pub lat: f64,
    pub lon: f64,
    #[serde(default)]
    pub name: Option<String>,
    pub kind: PointKind,
    #[serde(default)]
    pub tags: HashMap<String, String>,
}

impl RawPoint {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lon)
    }

    /// The point's name, or `Unnamed <kind>` when it has none
    pub fn display_name(&self) -> String {
        match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => format!("Unnamed {}", NodeKind::from(self.kind)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawSegment {
    pub id: SegmentId,
    /// Referenced point ids in track order
    pub nodes: Vec<PointId>,
    pub kind: TrackKind,
    #[serde(default)]
    pub tags: HashMap<String, String>,
}

impl RawSegment {
    /// `false` for track tagged as abandoned or disused
    pub fn is_active(&self) -> bool {
        !matches!(
            self.tags.get("service").map(String::as_str),
            Some("abandoned" | "disused")
        )
    }
}

/// Everything one build consumes
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawNetwork {
    pub points: Vec<RawPoint>,
    pub segments: Vec<RawSegment>,
    #[serde(default)]
    pub coordinates: CoordinateTable,
}

/// Counts of raw records by kind
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RawStatistics {
    pub total_points: usize,
    pub total_segments: usize,
    pub point_kinds: BTreeMap<String, usize>,
    pub segment_kinds: BTreeMap<String, usize>,
}

impl RawNetwork {
    /// Drops inactive segments and makes sure the coordinate table covers
    /// every station point. Returns the number of dropped segments.
    pub fn prepare(&mut self) -> usize {
        let before = self.segments.len();
        self.segments.retain(RawSegment::is_active);

        for point in &self.points {
            self.coordinates
                .entry(point.id)
                .or_insert_with(|| point.coordinate());
        }

        before - self.segments.len()
    }

    pub fn statistics(&self) -> RawStatistics {
        let mut point_kinds = BTreeMap::new();
        for point in &self.points {
            *point_kinds
                .entry(NodeKind::from(point.kind).to_string())
                .or_insert(0) += 1;
        }

        let mut segment_kinds = BTreeMap::new();
        for segment in &self.segments {
            *segment_kinds
                .entry(segment.kind.to_string())
                .or_insert(0) += 1;
        }

        RawStatistics {
            total_points: self.points.len(),
            total_segments: self.segments.len(),
            point_kinds,
            segment_kinds,
        }
    }
}

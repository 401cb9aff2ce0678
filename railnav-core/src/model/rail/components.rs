//! Railway graph components - nodes, edges and their kinds

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::Coordinate;
use crate::{PointId, SegmentId};

/// Stable identifier of a graph node, derived from the raw point id
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn station(point: PointId) -> Self {
        Self(format!("station_{point}"))
    }

    pub fn track(point: PointId) -> Self {
        Self(format!("track_{point}"))
    }

    /// Id of the synthetic node splitting the edge between `a` and `b`
    pub fn intermediate(a: &NodeId, b: &NodeId) -> Self {
        Self(format!("intermediate_{a}_{b}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Kind of railway point a node represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Station,
    Halt,
    Junction,
    Crossing,
    TrackPoint,
    Intermediate,
}

impl NodeKind {
    /// Points supplied as stations by the raw data
    pub fn is_station(self) -> bool {
        matches!(
            self,
            NodeKind::Station | NodeKind::Halt | NodeKind::Junction | NodeKind::Crossing
        )
    }

    /// Points listed as stops along a route
    pub fn is_stop(self) -> bool {
        matches!(self, NodeKind::Station | NodeKind::Halt | NodeKind::Junction)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Station => "station",
            NodeKind::Halt => "halt",
            NodeKind::Junction => "junction",
            NodeKind::Crossing => "crossing",
            NodeKind::TrackPoint => "track_point",
            NodeKind::Intermediate => "intermediate",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of track a segment is laid with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackKind {
    Rail,
    LightRail,
    Subway,
    Tram,
    Monorail,
    NarrowGauge,
    Funicular,
    Rack,
    #[serde(other)]
    Other,
}

impl TrackKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TrackKind::Rail => "rail",
            TrackKind::LightRail => "light_rail",
            TrackKind::Subway => "subway",
            TrackKind::Tram => "tram",
            TrackKind::Monorail => "monorail",
            TrackKind::NarrowGauge => "narrow_gauge",
            TrackKind::Funicular => "funicular",
            TrackKind::Rack => "rack",
            TrackKind::Other => "other",
        }
    }
}

impl fmt::Display for TrackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Railway graph node
#[derive(Debug, Clone, PartialEq)]
pub struct RailNode {
    pub id: NodeId,
    /// Raw point id; `None` for intermediate nodes
    pub point_id: Option<PointId>,
    /// Display name, synthesized for non-station nodes
    pub name: String,
    pub kind: NodeKind,
    pub coordinate: Coordinate,
}

impl RailNode {
    pub fn is_station(&self) -> bool {
        self.kind.is_station()
    }
}

/// Railway graph edge (piece of a track segment)
#[derive(Debug, Clone, PartialEq)]
pub struct RailEdge {
    /// Great-circle distance between the endpoints
    pub distance_km: f64,
    pub segment_id: SegmentId,
    pub track_kind: TrackKind,
}

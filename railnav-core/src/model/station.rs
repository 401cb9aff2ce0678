use petgraph::graph::NodeIndex;
use serde::Serialize;

use super::{Coordinate, NodeId, NodeKind, RailNode};

/// A node supplied as a station by the raw data
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Station {
    #[serde(skip)]
    pub node: NodeIndex,
    pub id: NodeId,
    pub name: String,
    pub kind: NodeKind,
    #[serde(flatten)]
    pub coordinate: Coordinate,
}

impl Station {
    pub(crate) fn from_node(node: NodeIndex, data: &RailNode) -> Self {
        Self {
            node,
            id: data.id.clone(),
            name: data.name.clone(),
            kind: data.kind,
            coordinate: data.coordinate,
        }
    }
}

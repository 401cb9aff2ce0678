use geo::{Coord, LineString};
use geojson::{Feature, FeatureCollection, Geometry, Value as GeoJsonValue};
use serde_json::json;

use super::{RouteResult, Waypoint};
use crate::{Error, RailNetwork};

impl RouteResult {
    /// Converts the route to a `GeoJSON` `FeatureCollection`: the track line
    /// through every path node followed by one point per waypoint.
    pub fn to_geojson(&self, network: &RailNetwork) -> Result<FeatureCollection, Error> {
        let mut features = Vec::with_capacity(self.waypoints.len() + 1);

        if self.nodes.len() > 1 {
            features.push(self.line_feature(network)?);
        }
        for (idx, waypoint) in self.waypoints.iter().enumerate() {
            features.push(waypoint_feature(idx, waypoint)?);
        }

        Ok(FeatureCollection {
            features,
            bbox: None,
            foreign_members: None,
        })
    }

    pub fn to_geojson_string(&self, network: &RailNetwork) -> Result<String, Error> {
        serde_json::to_string(&self.to_geojson(network)?)
            .map_err(|e| Error::GeoJsonError(e.to_string()))
    }

    fn line_feature(&self, network: &RailNetwork) -> Result<Feature, Error> {
        let graph = network.graph();
        let coords = self
            .nodes
            .iter()
            .map(|&idx| {
                graph
                    .node(idx)
                    .map(|node| Coord::from(node.coordinate.to_point()))
                    .ok_or_else(|| {
                        Error::GeoJsonError(format!(
                            "Route node {} is not part of this network",
                            idx.index()
                        ))
                    })
            })
            .collect::<Result<Vec<Coord<f64>>, Error>>()?;

        let geometry = Geometry::new(GeoJsonValue::from(&LineString::new(coords)));

        let value = json!({
            "type": "Feature",
            "geometry": geometry,
            "properties": {
                "feature_type": "route",
                "from_name": self.from_name,
                "to_name": self.to_name,
                "total_distance_km": self.total_distance_km,
                "node_count": self.node_count(),
            }
        });

        serde_json::from_value::<Feature>(value).map_err(|e| Error::GeoJsonError(e.to_string()))
    }
}

fn waypoint_feature(idx: usize, waypoint: &Waypoint) -> Result<Feature, Error> {
    let geometry = Geometry::new(GeoJsonValue::from(&waypoint.coordinate.to_point()));

    let value = json!({
        "type": "Feature",
        "geometry": geometry,
        "properties": {
            "feature_type": "waypoint",
            "waypoint_index": idx,
            "name": waypoint.name,
            "kind": waypoint.kind,
            "distance_from_start_km": waypoint.distance_from_start_km,
        }
    });

    serde_json::from_value::<Feature>(value).map_err(|e| Error::GeoJsonError(e.to_string()))
}

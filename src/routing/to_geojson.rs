use geo::{Coord, LineString, line_string};
use geojson::{Feature, FeatureCollection, Geometry, JsonObject};
use serde_json::json;

use super::path::PathResult;
use crate::Error;
use crate::model::NodeCoordinates;

impl PathResult {
    /// Converts the route to a `GeoJSON` `FeatureCollection`.
    ///
    /// The collection holds one LineString for the whole path, followed by
    /// one two-point LineString per segment carrying its distance for
    /// per-segment labelling. Coordinates are `[longitude, latitude]` per
    /// the GeoJSON convention; nodes missing from the coordinate table are
    /// left out of the geometry.
    pub fn to_geojson(&self, coordinates: &NodeCoordinates) -> FeatureCollection {
        let mut features = Vec::with_capacity(self.segments.len() + 1);

        let path_coords: Vec<Coord<f64>> = self
            .nodes
            .iter()
            .filter_map(|id| coordinates.get(id))
            .map(Coord::from)
            .collect();
        let path_line = LineString::from(path_coords);

        let mut properties = JsonObject::new();
        properties.insert("total_distance_m".to_string(), json!(self.total_distance));
        properties.insert("node_count".to_string(), json!(self.nodes.len()));
        features.push(Feature {
            bbox: None,
            geometry: Some(Geometry::new((&path_line).into())),
            id: None,
            properties: Some(properties),
            foreign_members: None,
        });

        for segment in &self.segments {
            let (Some(from), Some(to)) = (
                coordinates.get(&segment.from),
                coordinates.get(&segment.to),
            ) else {
                continue;
            };

            let line = line_string![
                (x: from.x(), y: from.y()),
                (x: to.x(), y: to.y()),
            ];

            let mut properties = JsonObject::new();
            properties.insert("from".to_string(), json!(segment.from));
            properties.insert("to".to_string(), json!(segment.to));
            properties.insert("distance_m".to_string(), json!(segment.distance));
            features.push(Feature {
                bbox: None,
                geometry: Some(Geometry::new((&line).into())),
                id: None,
                properties: Some(properties),
                foreign_members: None,
            });
        }

        FeatureCollection {
            bbox: None,
            features,
            foreign_members: None,
        }
    }

    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_geojson_string(&self, coordinates: &NodeCoordinates) -> Result<String, Error> {
        Ok(serde_json::to_string(&self.to_geojson(coordinates))?)
    }
}

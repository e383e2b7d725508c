//! Coordinate table ingestion
//!
//! The table is a JSON object mapping node id to a two-element
//! `[longitude, latitude]` array, in degrees. Display layers that want
//! `[latitude, longitude]` must flip the pair themselves.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use geo::Point;

use crate::Error;
use crate::model::NodeCoordinates;

/// Load a coordinate table from a JSON file.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or is not a JSON object
/// of two-element coordinate arrays.
pub fn node_coordinates_from_path(path: &Path) -> Result<NodeCoordinates, Error> {
    let file = File::open(path).map_err(|e| {
        std::io::Error::new(
            e.kind(),
            format!(
                "Failed to open coordinate table '{}': {}",
                path.display(),
                e
            ),
        )
    })?;
    node_coordinates_from_reader(BufReader::new(file))
}

/// Load a coordinate table from any JSON reader.
///
/// # Errors
///
/// Returns an error if the payload does not deserialize.
pub fn node_coordinates_from_reader<R: Read>(reader: R) -> Result<NodeCoordinates, Error> {
    let raw: BTreeMap<String, [f64; 2]> = serde_json::from_reader(reader)?;

    let mut coords = NodeCoordinates::new();
    for (id, [lon, lat]) in raw {
        coords.insert(id, Point::new(lon, lat));
    }
    Ok(coords)
}

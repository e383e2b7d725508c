use log::{info, warn};

use super::config::StreetModelConfig;
use super::coords::node_coordinates_from_path;
use super::edges::street_graph_from_path;
use crate::Error;
use crate::model::{NodeCoordinates, StreetGraph, StreetModel};

/// Creates a street routing model based on the provided configuration
///
/// # Errors
///
/// Returns an error if there are problems reading or processing data
pub fn create_street_model(config: &StreetModelConfig) -> Result<StreetModel, Error> {
    validate_config(config)?;

    info!("Processing edge list: {}", config.edges_path.display());
    let graph = street_graph_from_path(&config.edges_path)?;

    info!(
        "Processing coordinate table: {}",
        config.coords_path.display()
    );
    let coordinates = node_coordinates_from_path(&config.coords_path)?;

    validate_coordinate_coverage(&graph, &coordinates);

    info!(
        "Street model created: {} nodes, {} edges, {} coordinate entries",
        graph.node_count(),
        graph.edge_count(),
        coordinates.len()
    );
    Ok(StreetModel::new(graph, coordinates))
}

fn validate_config(config: &StreetModelConfig) -> Result<(), Error> {
    if !config.edges_path.exists() {
        return Err(Error::InvalidData(format!(
            "Edge list not found: {}",
            config.edges_path.display()
        )));
    }

    if !config.coords_path.exists() {
        return Err(Error::InvalidData(format!(
            "Coordinate table not found: {}",
            config.coords_path.display()
        )));
    }

    Ok(())
}

#[allow(clippy::cast_precision_loss)]
fn validate_coordinate_coverage(graph: &StreetGraph, coordinates: &NodeCoordinates) {
    let missing = graph
        .graph
        .node_weights()
        .filter(|node| coordinates.get(&node.id).is_none())
        .count();

    let total = graph.node_count();
    if missing > 0 && total > 0 {
        let percentage = (missing as f64 / total as f64) * 100.0;
        warn!(
            "{missing} of {total} graph nodes ({percentage:.1}%) have no coordinate entry. \
            They can still be routed through but never snapped to or drawn."
        );
    }
}

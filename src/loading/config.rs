use std::path::PathBuf;

/// File locations for building a [`StreetModel`](crate::model::StreetModel).
#[derive(Debug, Clone)]
pub struct StreetModelConfig {
    /// Delimited edge list: a header row, then `u,v,length_meters` rows.
    pub edges_path: PathBuf,
    /// JSON object mapping node id to `[longitude, latitude]`.
    pub coords_path: PathBuf,
}

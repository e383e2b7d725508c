//! Edge list ingestion
//!
//! The edge list is delimited text with a header row; each row names the
//! two endpoints and the segment length in meters. Ingestion is lenient: a
//! row whose weight does not parse as a finite non-negative number is
//! dropped, never an error. Endpoint ids are taken verbatim as strings, so
//! numeric-looking ids never get compared as mixed types downstream.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::debug;
use serde::Deserialize;

use crate::model::StreetGraph;
use crate::{Distance, Error};

#[derive(Debug, Deserialize)]
struct EdgeRecord {
    u: String,
    v: String,
    length_meters: Distance,
}

/// Build a street graph from an edge list file.
///
/// # Errors
///
/// Returns an error if the file cannot be opened. Malformed rows are
/// dropped, not reported.
pub fn street_graph_from_path(path: &Path) -> Result<StreetGraph, Error> {
    let file = File::open(path).map_err(|e| {
        std::io::Error::new(
            e.kind(),
            format!("Failed to open edge list '{}': {}", path.display(), e),
        )
    })?;
    street_graph_from_reader(file)
}

/// Build a street graph from any edge list reader.
///
/// Every valid row inserts one undirected edge, so the adjacency is
/// symmetric by construction. Duplicate and parallel rows are kept
/// verbatim; picking the cheapest parallel edge is the solver's job.
///
/// # Errors
///
/// Returns an error only if the underlying reader fails at the transport
/// level; row-level problems drop the row.
pub fn street_graph_from_reader<R: Read>(reader: R) -> Result<StreetGraph, Error> {
    let mut graph = StreetGraph::new();
    let mut kept = 0usize;
    let mut dropped = 0usize;

    for record in csv::Reader::from_reader(reader).deserialize::<EdgeRecord>() {
        let Ok(record) = record else {
            dropped += 1;
            continue;
        };
        // f64 parsing accepts "inf" and "NaN", so finiteness is a separate check
        if !record.length_meters.is_finite() || record.length_meters < 0.0 {
            dropped += 1;
            continue;
        }
        graph.add_edge(&record.u, &record.v, record.length_meters);
        kept += 1;
    }

    debug!("Edge list ingested: {kept} edges kept, {dropped} rows dropped");
    Ok(graph)
}

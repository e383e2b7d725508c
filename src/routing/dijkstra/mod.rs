mod state;

pub mod regular_dijkstra;
pub mod traced_dijkstra;

pub use regular_dijkstra::dijkstra_path_weights;
pub use traced_dijkstra::{DijkstraTrace, dijkstra_trace};

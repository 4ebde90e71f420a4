//! Loaders that turn files on disk into a [`Graph`](crate::graph::Graph).
pub mod edge_list;

pub use edge_list::{load_edge_list, parse_edge_list, EdgeListLoader};

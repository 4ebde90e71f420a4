//! # graphmetrics
//!
//! Structural statistics for static undirected graphs read from plain-text
//! edge lists: vertex and edge counts, average degree, density, degree
//! distribution, diameter and the average local clustering coefficient.
//!
//! A [`Graph`](graph::Graph) is built once by the
//! [edge list loader](graph_loader::edge_list) and is never mutated
//! afterwards. The analyzers in [`algorithms`] only borrow it, which lets
//! the expensive ones (diameter, clustering) fan out over a rayon pool.
//!
//! # Example
//!
//! ```rust
//! use graphmetrics::prelude::*;
//!
//! let graph = parse_edge_list("% comment line\n1 2\n2 3\n3 1\n").unwrap();
//! let summary = GraphSummary::compute(&graph).unwrap();
//!
//! assert_eq!(summary.vertices, 3);
//! assert_eq!(summary.edges, 3);
//! assert_eq!(summary.density, 1.0);
//! assert_eq!(summary.diameter, 1);
//! assert_eq!(summary.clustering_coefficient, 1.0);
//! assert_eq!(summary.degree_distribution.get(2), 3);
//! ```
//!
//! Graphs can also be exported for an external renderer with
//! [`io::dot::to_dot`].

pub mod algorithms;
pub mod core;
pub mod errors;
pub mod graph;
pub mod graph_loader;
pub mod io;
pub mod logging;
pub mod prelude;

//! Degree based statistics for the entire graph.
//! The degree of a vertex is the number of edge endpoints attached to it, so a
//! self-loop counts twice and parallel edges are counted individually.
//!
//! This module provides the following calculations:
//! - degree_distribution - how many vertices have each degree.
//! - average_degree - sum of degrees divided by twice the vertex count.
//! - mean_degree - sum of degrees divided by the vertex count.
//! - density - ratio of edges to the number of possible edges in a simple graph.
//! - max_degree / min_degree - extreme degrees of any vertex.
//!
//! # Examples
//!
//! ```rust
//! use graphmetrics::algorithms::metrics::degree::*;
//! use graphmetrics::prelude::*;
//!
//! let g = Graph::from_edges([(1, 2), (2, 3), (3, 4)]);
//!
//! let distribution = degree_distribution(&g);
//! assert_eq!(distribution.get(1), 2);
//! assert_eq!(distribution.get(2), 2);
//! print!("Density: {:?}", density(&g));
//! print!("Average degree: {:?}", average_degree(&g));
//! ```
//!
use crate::{core::entities::VID, errors::GraphError, graph::Graph};
use serde::{Deserialize, Serialize};
use std::collections::{btree_map, BTreeMap};

/// Mapping from a degree value to the number of vertices with that degree.
///
/// Iterates in ascending degree order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DegreeDistribution {
    counts: BTreeMap<usize, usize>,
}

impl DegreeDistribution {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one vertex to the bucket for `degree`, creating the bucket at zero first.
    pub fn insert_or_increment(&mut self, degree: usize) {
        *self.counts.entry(degree).or_insert(0) += 1;
    }

    /// Number of vertices with exactly `degree`; 0 for a missing bucket.
    pub fn get(&self, degree: usize) -> usize {
        self.counts.get(&degree).copied().unwrap_or(0)
    }

    /// `(degree, count)` pairs in ascending degree order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.counts.iter().map(|(d, c)| (*d, *c))
    }

    /// Number of distinct degree values.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of vertices accounted for.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }
}

impl FromIterator<usize> for DegreeDistribution {
    fn from_iter<T: IntoIterator<Item = usize>>(iter: T) -> Self {
        let mut distribution = Self::new();
        for degree in iter {
            distribution.insert_or_increment(degree);
        }
        distribution
    }
}

impl<'a> IntoIterator for &'a DegreeDistribution {
    type Item = (&'a usize, &'a usize);
    type IntoIter = btree_map::Iter<'a, usize, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.iter()
    }
}

/// Degree of a single vertex.
pub fn degree(graph: &Graph, vid: VID) -> usize {
    graph.degree(vid)
}

/// Histogram of vertex degrees.
pub fn degree_distribution(graph: &Graph) -> DegreeDistribution {
    graph.vids().map(|v| graph.degree(v)).collect()
}

fn degree_sum(graph: &Graph) -> usize {
    graph.vids().map(|v| graph.degree(v)).sum()
}

/// Sum of all degrees divided by twice the number of vertices, i.e. edges per vertex.
///
/// Returns `NaN` for a graph without vertices, see [`checked_average_degree`]
/// for a variant that reports this as an error.
pub fn average_degree(graph: &Graph) -> f64 {
    let n = graph.count_vertices();
    if n == 0 {
        return f64::NAN;
    }
    degree_sum(graph) as f64 / (2 * n) as f64
}

/// [`average_degree`] that refuses to compute on an empty graph.
pub fn checked_average_degree(graph: &Graph) -> Result<f64, GraphError> {
    if graph.is_empty() {
        return Err(GraphError::InvalidMetricRequest {
            metric: "average_degree",
            reason: "graph has no vertices",
        });
    }
    Ok(average_degree(graph))
}

/// Arithmetic mean of the vertex degrees (`2E / V`); `NaN` for a graph without vertices.
pub fn mean_degree(graph: &Graph) -> f64 {
    let n = graph.count_vertices();
    if n == 0 {
        return f64::NAN;
    }
    degree_sum(graph) as f64 / n as f64
}

/// `2E / (V (V - 1))`, defined as 0 for graphs with at most one vertex.
pub fn density(graph: &Graph) -> f64 {
    let n = graph.count_vertices();
    if n > 1 {
        2.0 * graph.count_edges() as f64 / (n as f64 * (n - 1) as f64)
    } else {
        0.0
    }
}

/// The maximum degree of any vertex in the graph
pub fn max_degree(graph: &Graph) -> usize {
    graph.vids().map(|v| graph.degree(v)).max().unwrap_or(0)
}

/// The minimum degree of any vertex in the graph
pub fn min_degree(graph: &Graph) -> usize {
    graph.vids().map(|v| graph.degree(v)).min().unwrap_or(0)
}

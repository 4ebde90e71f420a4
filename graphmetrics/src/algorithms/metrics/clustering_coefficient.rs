//! Clustering coefficient - measures how close the neighbourhood of a vertex
//! is to being a clique.
//!
//! The local coefficient of a vertex `v` with degree `d >= 2` is
//! `2 * t(v) / (d * (d - 1))`, where `t(v)` is the number of connected pairs
//! among the distinct neighbours of `v`. Vertices of degree 0 or 1 have no
//! local coefficient and are left out of the global average rather than
//! contributing a zero.
//!
//! Neighbours are deduplicated before pairs are enumerated, and `v` itself is
//! not a neighbour for that purpose, while `d` keeps counting every adjacency
//! entry. On a multigraph the coefficient therefore stays within `[0, 1]`.
//!
//! # Examples
//!
//! ```rust
//! use graphmetrics::algorithms::metrics::clustering_coefficient::*;
//! use graphmetrics::prelude::*;
//!
//! let g = Graph::from_edges([(1, 2), (1, 3), (2, 3), (1, 4), (4, 5)]);
//!
//! let lcc = local_clustering_coefficient(&g, g.vid(1).unwrap());
//! assert_eq!(lcc, Some(1.0 / 3.0));
//! println!("global: {:?}", global_clustering_coefficient(&g));
//! ```
use crate::{core::entities::VID, errors::GraphError, graph::Graph};
use itertools::Itertools;
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use tracing::debug;

/// Distinct neighbours of `vid`, excluding `vid`, in first-seen order.
fn distinct_neighbours(graph: &Graph, vid: VID) -> Vec<VID> {
    let mut seen = FxHashSet::default();
    graph
        .neighbours(vid)
        .iter()
        .copied()
        .filter(|nbor| *nbor != vid && seen.insert(*nbor))
        .collect()
}

/// Number of closed pairs among the distinct neighbours of `vid`.
pub fn local_triangle_count(graph: &Graph, vid: VID) -> usize {
    distinct_neighbours(graph, vid)
        .into_iter()
        .tuple_combinations()
        .filter(|(a, b)| graph.has_edge_vid(*a, *b))
        .count()
}

/// Local clustering coefficient of `vid`; `None` when its degree is below 2.
pub fn local_clustering_coefficient(graph: &Graph, vid: VID) -> Option<f64> {
    let degree = graph.degree(vid);
    if degree < 2 {
        return None;
    }
    let triangles = local_triangle_count(graph, vid) as f64;
    let degree = degree as f64;
    Some(2.0 * triangles / (degree * (degree - 1.0)))
}

fn checked_local(graph: &Graph, vid: VID) -> Result<Option<f64>, GraphError> {
    if let Some(bad) = graph
        .neighbours(vid)
        .iter()
        .find(|nbor| nbor.index() >= graph.count_vertices())
    {
        return Err(GraphError::Inconsistent { vid: *bad });
    }
    Ok(local_clustering_coefficient(graph, vid))
}

/// Partial sum of local coefficients together with the number of contributing vertices.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct Accumulator {
    sum: f64,
    count: usize,
}

impl Accumulator {
    fn push(self, lcc: Option<f64>) -> Self {
        match lcc {
            Some(value) => Self {
                sum: self.sum + value,
                count: self.count + 1,
            },
            None => self,
        }
    }

    fn mean(self) -> f64 {
        if self.count > 0 {
            self.sum / self.count as f64
        } else {
            0.0
        }
    }
}

/// Average local clustering coefficient over all vertices of degree at least 2.
///
/// Every vertex is evaluated as an independent rayon task returning its local
/// coefficient. The results are collected in vertex order and summed on the
/// calling thread, so the outcome does not depend on scheduling.
/// Returns `0.0` when no vertex qualifies.
pub fn global_clustering_coefficient(graph: &Graph) -> Result<f64, GraphError> {
    let local = (0..graph.count_vertices())
        .into_par_iter()
        .map(|vid| checked_local(graph, VID(vid)))
        .collect::<Result<Vec<_>, _>>()?;
    let acc = local
        .into_iter()
        .fold(Accumulator::default(), Accumulator::push);
    debug!(
        qualifying = acc.count,
        vertices = graph.count_vertices(),
        "computed clustering coefficient"
    );
    Ok(acc.mean())
}

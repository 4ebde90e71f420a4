//! Exact diameter of an unweighted undirected graph.
//!
//! The diameter is the largest shortest-path distance between two vertices
//! that can reach each other. Pairs in different connected components are
//! ignored, so a disconnected graph reports the diameter of its widest
//! component instead of infinity.
//!
//! One breadth-first search is run from every vertex (`O(V * (V + E))` in
//! total). The searches only read the graph and are spread over the rayon
//! pool, each keeping its own visited table and frontiers.
//!
//! # Examples
//!
//! ```rust
//! use graphmetrics::algorithms::pathing::diameter::diameter;
//! use graphmetrics::prelude::*;
//!
//! let g = Graph::from_edges([(0, 1), (1, 2), (2, 3)]);
//! assert_eq!(diameter(&g).unwrap(), 3);
//! ```
use crate::{core::entities::VID, errors::GraphError, graph::Graph};
use rayon::prelude::*;
use std::mem;
use tracing::debug;

/// Greatest BFS distance from `source` to any vertex it can reach.
///
/// An isolated vertex has eccentricity 0.
pub fn eccentricity(graph: &Graph, source: VID) -> Result<usize, GraphError> {
    let num_vertices = graph.count_vertices();
    if source.index() >= num_vertices {
        return Err(GraphError::Inconsistent { vid: source });
    }

    let mut visited = vec![false; num_vertices];
    visited[source.index()] = true;
    let mut frontier = vec![];
    let mut new_frontier = vec![source];
    let mut depth = 0;

    loop {
        mem::swap(&mut new_frontier, &mut frontier);
        for vid in frontier.drain(..) {
            for neighbour in graph.neighbours(vid) {
                let seen = visited
                    .get_mut(neighbour.index())
                    .ok_or(GraphError::Inconsistent { vid: *neighbour })?;
                if !*seen {
                    *seen = true;
                    new_frontier.push(*neighbour);
                }
            }
        }
        if new_frontier.is_empty() {
            return Ok(depth);
        }
        depth += 1;
    }
}

/// Maximum eccentricity over all vertices; 0 for a graph without vertices.
///
/// A failure while exploring from any source aborts the whole computation.
pub fn diameter(graph: &Graph) -> Result<usize, GraphError> {
    let diameter = (0..graph.count_vertices())
        .into_par_iter()
        .map(|vid| eccentricity(graph, VID(vid)))
        .try_reduce(|| 0, |a, b| Ok::<_, GraphError>(a.max(b)))?;
    debug!(diameter, vertices = graph.count_vertices(), "computed diameter");
    Ok(diameter)
}

#[cfg(test)]
mod diameter_test {
    use super::*;
    use itertools::Itertools;

    fn path(n: i64) -> Graph {
        Graph::from_edges((0..n).tuple_windows())
    }

    #[test]
    fn empty_graph() {
        assert_eq!(diameter(&Graph::new()).unwrap(), 0);
    }

    #[test]
    fn single_vertex() {
        let mut g = Graph::new();
        let v = g.add_vertex(1);
        assert_eq!(eccentricity(&g, v).unwrap(), 0);
        assert_eq!(diameter(&g).unwrap(), 0);
    }

    #[test]
    fn path_graphs() {
        for n in 2..12 {
            assert_eq!(diameter(&path(n)).unwrap(), (n - 1) as usize);
        }
    }

    #[test]
    fn eccentricity_along_a_path() {
        let g = path(5);
        let actual = (0..5)
            .map(|v| eccentricity(&g, g.vid(v).unwrap()).unwrap())
            .collect_vec();
        assert_eq!(actual, vec![4, 3, 2, 3, 4]);
    }

    #[test]
    fn triangle() {
        let g = Graph::from_edges([(1, 2), (2, 3), (3, 1)]);
        assert_eq!(diameter(&g).unwrap(), 1);
    }

    #[test]
    fn cycle() {
        let g = Graph::from_edges((0..10).map(|i| (i, (i + 1) % 10)));
        assert_eq!(diameter(&g).unwrap(), 5);
    }

    #[test]
    fn widest_component_wins() {
        // path of length 4 plus a separate edge and an isolated vertex
        let mut g = Graph::from_edges([(0, 1), (1, 2), (2, 3), (3, 4), (10, 11)]);
        g.add_vertex(99);
        assert_eq!(diameter(&g).unwrap(), 4);
    }

    #[test]
    fn direction_of_insertion_does_not_matter() {
        // edges written "backwards" are still traversable from either end
        let g = Graph::from_edges([(2, 1), (3, 2), (4, 3)]);
        assert_eq!(diameter(&g).unwrap(), 3);
    }

    #[test]
    fn loops_and_parallel_edges() {
        let g = Graph::from_edges([(1, 1), (1, 2), (1, 2), (2, 3)]);
        assert_eq!(diameter(&g).unwrap(), 2);
    }

    #[test]
    fn unknown_source_is_an_error() {
        let g = path(3);
        assert!(matches!(
            eccentricity(&g, VID(3)),
            Err(GraphError::Inconsistent { vid: VID(3) })
        ));
    }
}

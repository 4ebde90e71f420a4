use crate::{assert_approx, complete_graph, path_graph, star_graph};
use graphmetrics::{
    algorithms::metrics::{
        clustering_coefficient::{global_clustering_coefficient, local_clustering_coefficient},
        degree::{average_degree, degree_distribution, density, max_degree, min_degree},
    },
    prelude::*,
};
use pretty_assertions::assert_eq;

#[test]
fn test_complete_graph_metrics() {
    for n in 3..10 {
        let graph = complete_graph(n);
        assert_eq!(density(&graph), 1.0);
        assert_eq!(global_clustering_coefficient(&graph).unwrap(), 1.0);
        let distribution = degree_distribution(&graph);
        assert_eq!(distribution.iter().collect::<Vec<_>>(), vec![((n - 1) as usize, n as usize)]);
    }
}

#[test]
fn test_star_graph_metrics() {
    for leaves in 2..10 {
        let graph = star_graph(leaves);
        assert_eq!(global_clustering_coefficient(&graph).unwrap(), 0.0);
        assert_eq!(max_degree(&graph), leaves as usize);
        assert_eq!(min_degree(&graph), 1);
        let centre = graph.vid(0).unwrap();
        assert_eq!(local_clustering_coefficient(&graph, centre), Some(0.0));
        let leaf = graph.vid(1).unwrap();
        assert_eq!(local_clustering_coefficient(&graph, leaf), None);
    }
}

#[test]
fn test_path_density() {
    let graph = path_graph(5);
    // 4 edges out of 10 possible
    assert_approx(density(&graph), 0.4, 1e-12);
    assert_approx(average_degree(&graph), 8.0 / 10.0, 1e-12);
}

#[test]
fn test_two_triangles_joined_by_a_bridge() {
    let graph = Graph::from_edges([(1, 2), (1, 3), (2, 3), (3, 4), (4, 5), (5, 6), (4, 6)]);
    assert_approx(global_clustering_coefficient(&graph).unwrap(), 7.0 / 9.0, 1e-12);
    assert_approx(density(&graph), 7.0 / 15.0, 1e-12);
}

use graphmetrics::{
    algorithms::metrics::degree::{degree_distribution, mean_degree},
    prelude::*,
};
use pretty_assertions::assert_eq;
use std::path::PathBuf;

fn resource(name: &str) -> PathBuf {
    [env!("CARGO_MANIFEST_DIR"), "resources", name].iter().collect()
}

#[test]
fn test_triangle_scenario() {
    let graph = parse_edge_list("% comment line\n1 2\n2 3\n3 1\n").unwrap();
    let summary = GraphSummary::compute(&graph).unwrap();

    assert_eq!(summary.vertices, 3);
    assert_eq!(summary.edges, 3);
    // sum of degrees over twice the vertex count
    assert_eq!(summary.average_degree, 1.0);
    assert_eq!(mean_degree(&graph), 2.0);
    assert_eq!(summary.density, 1.0);
    assert_eq!(summary.diameter, 1);
    assert_eq!(summary.clustering_coefficient, 1.0);
    assert_eq!(summary.degree_distribution.iter().collect::<Vec<_>>(), vec![(2, 3)]);
}

#[test]
fn test_path_scenario() {
    let graph = parse_edge_list("1 2\n2 3\n3 4\n").unwrap();
    let summary = GraphSummary::compute(&graph).unwrap();

    assert_eq!(summary.vertices, 4);
    assert_eq!(summary.edges, 3);
    assert_eq!(summary.diameter, 3);
    assert_eq!(summary.clustering_coefficient, 0.0);
    assert_eq!(
        summary.degree_distribution.iter().collect::<Vec<_>>(),
        vec![(1, 2), (2, 2)]
    );
}

#[test]
fn test_triangle_file_matches_text() {
    let from_file = load_edge_list(resource("triangle.edges")).unwrap();
    let from_text = parse_edge_list("% comment line\n1 2\n2 3\n3 1\n").unwrap();
    assert_eq!(
        GraphSummary::compute(&from_file).unwrap(),
        GraphSummary::compute(&from_text).unwrap()
    );
}

#[test]
fn test_weighted_matrix_market_file() {
    let graph = EdgeListLoader::new(resource("weighted.mtx")).load().unwrap();
    let summary = GraphSummary::compute(&graph).unwrap();

    assert_eq!(summary.vertices, 6);
    assert_eq!(summary.edges, 7);
    assert_eq!(summary.diameter, 3);
    assert_eq!(
        degree_distribution(&graph).iter().collect::<Vec<_>>(),
        vec![(2, 4), (3, 2)]
    );
    crate::assert_approx(summary.clustering_coefficient, 7.0 / 9.0, 1e-12);
    crate::assert_approx(summary.density, 7.0 / 15.0, 1e-12);
}

#[test]
fn test_malformed_line_aborts() {
    let err = parse_edge_list("1 2\nabc def\n3 4\n").unwrap_err();
    assert!(matches!(err, ParseError::InvalidVertexId { line: 2, .. }));
}

#[test]
fn test_empty_input() {
    let graph = parse_edge_list("% nothing here\n\n").unwrap();
    let summary = GraphSummary::compute(&graph).unwrap();
    assert_eq!(summary.vertices, 0);
    assert_eq!(summary.edges, 0);
    assert!(summary.average_degree.is_nan());
    assert_eq!(summary.density, 0.0);
    assert_eq!(summary.diameter, 0);
    assert_eq!(summary.clustering_coefficient, 0.0);
    assert!(summary.degree_distribution.is_empty());
}

use graphmetrics::prelude::*;
use itertools::Itertools;

mod metrics;
mod pathing;
mod scenarios;

fn complete_graph(n: i64) -> Graph {
    Graph::from_edges((0..n).tuple_combinations())
}

fn star_graph(leaves: i64) -> Graph {
    Graph::from_edges((1..=leaves).map(|leaf| (0, leaf)))
}

fn path_graph(n: i64) -> Graph {
    Graph::from_edges((0..n).tuple_windows())
}

fn assert_approx(actual: f64, expected: f64, precision: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= precision,
        "Value mismatch: {} != {} (diff: {})",
        actual,
        expected,
        diff
    );
}

//! Graph generators shared by the benchmarks.
use graphmetrics::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Erdős–Rényi style graph with `num_vertices` vertices and `num_edges` random edges.
pub fn random_graph(num_vertices: i64, num_edges: usize, seed: u64) -> Graph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = Graph::with_capacity(num_vertices as usize);
    for v in 0..num_vertices {
        graph.add_vertex(v);
    }
    for _ in 0..num_edges {
        let src = rng.gen_range(0..num_vertices);
        let dst = rng.gen_range(0..num_vertices);
        graph.add_edge(src, dst);
    }
    graph
}

/// Preferential attachment graph: every new vertex links to `edges_per_vertex`
/// existing vertices chosen proportionally to their degree.
pub fn preferential_attachment(num_vertices: i64, edges_per_vertex: usize, seed: u64) -> Graph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = Graph::new();
    let mut endpoints: Vec<i64> = vec![0, 1];
    graph.add_edge(0, 1);
    for v in 2..num_vertices {
        for _ in 0..edges_per_vertex {
            let target = endpoints[rng.gen_range(0..endpoints.len())];
            graph.add_edge(v, target);
            endpoints.push(v);
            endpoints.push(target);
        }
    }
    graph
}

/// Edge list text for `graph`, as the loader expects it.
pub fn to_edge_list_text(graph: &Graph) -> String {
    let mut text = String::from("% generated\n");
    for (src, dst) in graph.edges() {
        text.push_str(&format!("{src} {dst}\n"));
    }
    text
}

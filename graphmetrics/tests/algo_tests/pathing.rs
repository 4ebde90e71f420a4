use crate::{complete_graph, path_graph, star_graph};
use graphmetrics::{algorithms::pathing::diameter::{diameter, eccentricity}, prelude::*};

#[test]
fn test_diameter_of_paths() {
    for n in 1..20 {
        let graph = path_graph(n);
        let expected = (n - 1).max(0) as usize;
        assert_eq!(diameter(&graph).unwrap(), expected, "path with {n} vertices");
    }
}

#[test]
fn test_diameter_of_complete_and_star() {
    assert_eq!(diameter(&complete_graph(6)).unwrap(), 1);
    assert_eq!(diameter(&star_graph(6)).unwrap(), 2);
    assert_eq!(diameter(&star_graph(1)).unwrap(), 1);
}

#[test]
fn test_grid_diameter() {
    // 4 x 3 grid graph, diameter is (4 - 1) + (3 - 1)
    let width = 4;
    let height = 3;
    let id = |x: i64, y: i64| y * width + x;
    let mut edges = vec![];
    for y in 0..height {
        for x in 0..width {
            if x + 1 < width {
                edges.push((id(x, y), id(x + 1, y)));
            }
            if y + 1 < height {
                edges.push((id(x, y), id(x, y + 1)));
            }
        }
    }
    let graph = Graph::from_edges(edges);
    assert_eq!(diameter(&graph).unwrap(), 5);
    let corner = graph.vid(id(0, 0)).unwrap();
    assert_eq!(eccentricity(&graph, corner).unwrap(), 5);
}

#[test]
fn test_isolated_vertices_do_not_raise_diameter() {
    let mut graph = Graph::new();
    for v in 0..10 {
        graph.add_vertex(v);
    }
    assert_eq!(diameter(&graph).unwrap(), 0);
}

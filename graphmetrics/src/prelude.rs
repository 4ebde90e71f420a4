pub use crate::{
    algorithms::summary::GraphSummary,
    core::entities::{VertexId, VID},
    errors::{GraphError, ParseError},
    graph::Graph,
    graph_loader::{load_edge_list, parse_edge_list, EdgeListLoader},
};

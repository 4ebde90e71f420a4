use crate::{
    algorithms::{
        metrics::{
            clustering_coefficient::global_clustering_coefficient,
            degree::{average_degree, degree_distribution, density, DegreeDistribution},
        },
        pathing::diameter::diameter,
    },
    errors::GraphError,
    graph::Graph,
};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Every statistic reported for one graph.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GraphSummary {
    pub vertices: usize,
    pub edges: usize,
    /// Sum of degrees divided by `2V`, i.e. edges per vertex (1.0 for a triangle).
    /// For the conventional `2E / V` see
    /// [`mean_degree`](crate::algorithms::metrics::degree::mean_degree).
    pub average_degree: f64,
    pub density: f64,
    pub diameter: usize,
    pub clustering_coefficient: f64,
    pub degree_distribution: DegreeDistribution,
}

impl GraphSummary {
    /// Run all analyzers over `graph`.
    ///
    /// Diameter, clustering and the degree statistics are independent and are
    /// computed concurrently.
    pub fn compute(graph: &Graph) -> Result<Self, GraphError> {
        let (diameter, (clustering_coefficient, degree_stats)) = rayon::join(
            || diameter(graph),
            || {
                rayon::join(
                    || global_clustering_coefficient(graph),
                    || {
                        (
                            average_degree(graph),
                            density(graph),
                            degree_distribution(graph),
                        )
                    },
                )
            },
        );
        let (average_degree, density, degree_distribution) = degree_stats;
        let summary = Self {
            vertices: graph.count_vertices(),
            edges: graph.count_edges(),
            average_degree,
            density,
            diameter: diameter?,
            clustering_coefficient: clustering_coefficient?,
            degree_distribution,
        };
        info!(
            vertices = summary.vertices,
            edges = summary.edges,
            diameter = summary.diameter,
            "computed graph summary"
        );
        Ok(summary)
    }
}

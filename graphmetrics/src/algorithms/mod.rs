//! Structural statistics computed over a [`Graph`](crate::graph::Graph).
//!
//! Every algorithm only borrows the graph immutably, so any number of them may
//! run at the same time over the same graph.
//!
//! ## Metrics
//! * [Degree distribution, average degree, density](metrics::degree)
//! * [Clustering coefficient](metrics::clustering_coefficient)
//!
//! ## Pathing
//! * [Diameter](pathing::diameter)
//!
//! ## Summary
//! * [All of the above at once](summary::GraphSummary)

pub mod metrics;
pub mod pathing;
pub mod summary;

//! Proximity graphs over detection points.
//!
//! The pipeline this crate serves is
//! complete graph -> minimum spanning forest -> long-edge pruning -> components:
//! - [`Graph::complete`] connects every pair of points by Euclidean distance.
//! - [`minimum_spanning_forest`] keeps the Kruskal forest.
//! - [`prune_long_edges`] drops edges standing out above the mean weight by
//!   [`PruneConfig::z_score`] standard deviations, then re-partitions.
//! - [`partition`] splits a graph into compacted, independent components.
//!
//! Every operation returns a new [`Graph`]; inputs are never modified. All
//! traversals use explicit stacks or queues.

mod build;
mod forest;
mod graph;
mod partition;
mod prune;

#[cfg(test)]
mod testutil;

pub use build::{GraphBuilder, build_graph_from_points};
pub use forest::minimum_spanning_forest;
pub use graph::{Graph, GraphEdge, NodeId};
pub use partition::partition;
pub use prune::{EdgeStats, PruneConfig, prune_edges, prune_long_edges};

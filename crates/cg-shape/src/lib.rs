//! Shape classification for connected point components.
//!
//! A component whose line fit exceeds [`ShapeConfig::line_r2_threshold`] is a
//! line, summarized by its spanning edges. Anything else is a cluster,
//! summarized by centroid, radius and member count; large clusters are first
//! split by a [`PointGrouper`].
//!
//! Line fitting and grouping are strategies ([`LineFitter`], [`PointGrouper`])
//! so callers and tests can substitute their own.

mod classify;
mod fit;
mod group;
mod summary;

pub use classify::{Shape, ShapeClassifier, ShapeConfig, SizeMetric};
pub use fit::{LeastSquaresFit, LineFit, LineFitter, PrincipalAxisFit};
pub use group::{KMeansConfig, KMeansGrouper, PointGrouper};
pub use summary::{ClusterSummary, LineSummary};

use cg_graph::Graph;

use crate::fit::{LineFitter, PrincipalAxisFit};
use crate::group::{KMeansGrouper, PointGrouper};
use crate::summary::{ClusterSummary, LineSummary};

/// Scalar deciding whether a cluster component is large enough to subdivide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeMetric {
    NodeCount,
    /// Node count along the longest simple path.
    TreeDiameter,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShapeConfig {
    /// A component is a line when its fit strictly exceeds this R^2.
    pub line_r2_threshold: f32,
    /// Clusters whose size metric strictly exceeds this are subdivided.
    pub subdivide_above: usize,
    pub size_metric: SizeMetric,
}

impl Default for ShapeConfig {
    fn default() -> Self {
        Self {
            line_r2_threshold: 0.4,
            subdivide_above: 8,
            size_metric: SizeMetric::NodeCount,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Line(LineSummary),
    Clusters(Vec<ClusterSummary>),
}

#[derive(Debug, Clone)]
pub struct ShapeClassifier<F = PrincipalAxisFit, G = KMeansGrouper> {
    cfg: ShapeConfig,
    fitter: F,
    grouper: G,
}

impl ShapeClassifier {
    pub fn new(cfg: ShapeConfig) -> Self {
        Self::with_strategies(cfg, PrincipalAxisFit, KMeansGrouper::default())
    }
}

impl Default for ShapeClassifier {
    fn default() -> Self {
        Self::new(ShapeConfig::default())
    }
}

impl<F: LineFitter, G: PointGrouper> ShapeClassifier<F, G> {
    pub fn with_strategies(cfg: ShapeConfig, fitter: F, grouper: G) -> Self {
        Self {
            cfg,
            fitter,
            grouper,
        }
    }

    pub fn config(&self) -> &ShapeConfig {
        &self.cfg
    }

    pub fn size_of(&self, component: &Graph) -> usize {
        match self.cfg.size_metric {
            SizeMetric::NodeCount => component.size(),
            SizeMetric::TreeDiameter => component.longest_chain_len(),
        }
    }

    /// Classifies one connected component.
    pub fn classify(&self, component: &Graph) -> Shape {
        let coords = component.coords();
        if coords.is_empty() {
            return Shape::Clusters(Vec::new());
        }

        if self.fitter.r_squared(coords) > self.cfg.line_r2_threshold {
            return Shape::Line(LineSummary::from_component(component));
        }

        if self.size_of(component) > self.cfg.subdivide_above {
            let clusters = self
                .grouper
                .group(coords)
                .iter()
                .filter_map(|g| ClusterSummary::of(g))
                .collect();
            return Shape::Clusters(clusters);
        }

        Shape::Clusters(ClusterSummary::of(coords).into_iter().collect())
    }
}

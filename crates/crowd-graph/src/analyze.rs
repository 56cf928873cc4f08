use cg_core::Point2f;
use cg_graph::{Graph, PruneConfig, minimum_spanning_forest, prune_long_edges};
use cg_shape::{
    KMeansConfig, KMeansGrouper, LineFitter, PointGrouper, PrincipalAxisFit, Shape,
    ShapeClassifier, ShapeConfig,
};

use crate::report::FrameReport;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AnalyzerConfig {
    pub prune: PruneConfig,
    pub shape: ShapeConfig,
    pub grouping: KMeansConfig,
}

/// Points of one frame to lines and clusters.
///
/// complete graph -> spanning forest -> long-edge pruning -> per-component
/// shape classification.
#[derive(Debug, Clone)]
pub struct FrameAnalyzer<F = PrincipalAxisFit, G = KMeansGrouper> {
    prune: PruneConfig,
    classifier: ShapeClassifier<F, G>,
}

impl FrameAnalyzer {
    pub fn new(cfg: AnalyzerConfig) -> Self {
        Self {
            prune: cfg.prune,
            classifier: ShapeClassifier::with_strategies(
                cfg.shape,
                PrincipalAxisFit,
                KMeansGrouper::new(cfg.grouping),
            ),
        }
    }
}

impl Default for FrameAnalyzer {
    fn default() -> Self {
        Self::new(AnalyzerConfig::default())
    }
}

impl<F: LineFitter, G: PointGrouper> FrameAnalyzer<F, G> {
    pub fn with_classifier(prune: PruneConfig, classifier: ShapeClassifier<F, G>) -> Self {
        Self { prune, classifier }
    }

    /// Groups of `points` after spanning-forest pruning.
    pub fn components(&self, points: &[Point2f]) -> Vec<Graph> {
        let mst = minimum_spanning_forest(&Graph::complete(points.to_vec()));
        prune_long_edges(&mst, &self.prune)
    }

    pub fn analyze(&self, points: &[Point2f]) -> FrameReport {
        let mut report = FrameReport {
            num_points: points.len(),
            ..FrameReport::default()
        };

        for component in self.components(points) {
            match self.classifier.classify(&component) {
                Shape::Line(line) => report.lines.push(line),
                Shape::Clusters(clusters) => report.clusters.extend(clusters),
            }
        }

        report
    }
}

use crate::graph::{Graph, GraphEdge};
use crate::partition::partition;

/// Spread below this fraction of the mean weight is rounding noise.
const REL_STD_TOLERANCE: f32 = 1e-5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PruneConfig {
    /// Edges whose standardized weight reaches this value are dropped.
    pub z_score: f32,
}

impl Default for PruneConfig {
    fn default() -> Self {
        Self { z_score: 1.0 }
    }
}

/// Mean and population standard deviation of a set of edge weights.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeStats {
    pub mean: f32,
    pub std: f32,
}

impl EdgeStats {
    /// `None` for an empty edge list.
    pub fn of(edges: &[GraphEdge]) -> Option<Self> {
        if edges.is_empty() {
            return None;
        }

        let n = edges.len() as f64;
        let mean = edges.iter().map(|e| e.weight as f64).sum::<f64>() / n;
        let var = edges
            .iter()
            .map(|e| {
                let d = e.weight as f64 - mean;
                d * d
            })
            .sum::<f64>()
            / n;

        Some(Self {
            mean: mean as f32,
            std: var.sqrt() as f32,
        })
    }

    /// Spread that is non-finite or negligible next to the mean: the weights
    /// are equal up to `f32` rounding and none can be called an outlier.
    pub fn is_degenerate(&self) -> bool {
        !self.std.is_finite() || self.std <= REL_STD_TOLERANCE * self.mean.abs()
    }

    pub fn z(&self, weight: f32) -> f32 {
        (weight - self.mean) / self.std
    }
}

/// Drops edges whose weight lies `z_score` or more standard deviations above
/// the mean. Shorter-than-mean edges always survive. With degenerate
/// statistics every edge is kept. Coordinates are shared with `g`.
pub fn prune_edges(g: &Graph, cfg: &PruneConfig) -> Graph {
    let kept = match EdgeStats::of(g.edges()) {
        Some(stats) if !stats.is_degenerate() => g
            .iter_edges()
            .copied()
            .filter(|e| stats.z(e.weight) < cfg.z_score)
            .collect(),
        _ => g.edges().to_vec(),
    };

    Graph::from_parts(g.shared_coords(), kept)
}

/// [`prune_edges`] followed by [`partition`].
pub fn prune_long_edges(g: &Graph, cfg: &PruneConfig) -> Vec<Graph> {
    partition(&prune_edges(g, cfg))
}

impl Graph {
    pub fn prune_long_edges(&self, z_score: f32) -> Vec<Graph> {
        prune_long_edges(self, &PruneConfig { z_score })
    }
}

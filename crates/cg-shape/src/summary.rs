use cg_core::{Point2f, Polyline2f, Segment2f, centroid};
use cg_graph::Graph;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClusterSummary {
    pub center: Point2f,
    /// Largest member distance from `center`.
    pub radius: f32,
    pub count: usize,
}

impl ClusterSummary {
    /// `None` for an empty point set.
    pub fn of(points: &[Point2f]) -> Option<Self> {
        let center = centroid(points)?;
        let radius = points
            .iter()
            .map(|p| p.distance(center))
            .fold(0.0_f32, f32::max);

        Some(Self {
            center,
            radius,
            count: points.len(),
        })
    }
}

/// A line of people as the spanning-forest edges of one component.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LineSummary {
    /// One segment per component edge, in the component's edge order.
    pub segments: Vec<Segment2f>,
}

impl LineSummary {
    pub fn from_component(component: &Graph) -> Self {
        let segments = (0..component.edges().len())
            .map(|i| {
                let (a, b) = component.edge_endpoints(i);
                Segment2f { a, b }
            })
            .collect();
        Self { segments }
    }

    /// Segment endpoints in order, with a point dropped when it repeats the
    /// previous one.
    pub fn polyline(&self) -> Polyline2f {
        let mut points: Vec<Point2f> = Vec::with_capacity(self.segments.len() + 1);
        for s in &self.segments {
            for p in [s.a, s.b] {
                if points.last() != Some(&p) {
                    points.push(p);
                }
            }
        }
        Polyline2f { points }
    }

    pub fn length(&self) -> f32 {
        self.segments.iter().map(Segment2f::length).sum()
    }
}

use cg_shape::{ClusterSummary, LineSummary};
use serde::{Deserialize, Serialize};

/// Lines and clusters found in one frame, in pixel-space floats.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FrameReport {
    pub num_points: usize,
    pub lines: Vec<LineSummary>,
    pub clusters: Vec<ClusterSummary>,
}

impl FrameReport {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.clusters.is_empty()
    }

    /// Integer pixel rendition handed to sinks.
    pub fn to_record(&self) -> FrameRecord {
        let lines: Vec<Vec<[i32; 2]>> = self
            .lines
            .iter()
            .map(|l| l.polyline().points.iter().map(|p| p.to_pixel()).collect())
            .collect();

        let clusters: Vec<ClusterRecord> = self
            .clusters
            .iter()
            .map(|c| {
                let [x, y] = c.center.to_pixel();
                ClusterRecord {
                    x,
                    y,
                    radius: c.radius.round() as i32,
                    count: c.count,
                }
            })
            .collect();

        FrameRecord {
            num_points: self.num_points,
            lines,
            clusters,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterRecord {
    pub x: i32,
    pub y: i32,
    pub radius: i32,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FrameRecord {
    pub num_points: usize,
    /// Polylines as `[x, y]` pixels.
    pub lines: Vec<Vec<[i32; 2]>>,
    pub clusters: Vec<ClusterRecord>,
}

impl FrameRecord {
    /// `"x y radius count"` per cluster, joined by `,`.
    pub fn compact_clusters(&self) -> String {
        self.clusters
            .iter()
            .map(|c| format!("{} {} {} {}", c.x, c.y, c.radius, c.count))
            .collect::<Vec<_>>()
            .join(",")
    }

    /// `"x-y"` points joined by spaces per line, lines joined by `,`.
    pub fn compact_lines(&self) -> String {
        self.lines
            .iter()
            .map(|line| {
                line.iter()
                    .map(|[x, y]| format!("{x}-{y}"))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join(",")
    }
}

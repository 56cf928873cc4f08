use std::fmt;

use cg_core::Point2f;
use cg_shape::{KMeansGrouper, LineFitter, PointGrouper, PrincipalAxisFit};
use tracing::{debug, warn};

use crate::analyze::FrameAnalyzer;
use crate::detect::Detector;
use crate::report::FrameReport;
use crate::sink::Sink;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug)]
pub enum FrameError {
    Detect { detector: usize, source: BoxError },
    /// A detector reported a NaN or infinite coordinate.
    NonFinitePoint { detector: usize, point: Point2f },
    Sink(BoxError),
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Detect { detector, source } => write!(f, "detector {detector} failed: {source}"),
            Self::NonFinitePoint { detector, point } => write!(
                f,
                "detector {detector} reported non-finite point ({}, {})",
                point.x, point.y
            ),
            Self::Sink(source) => write!(f, "sink push failed: {source}"),
        }
    }
}

impl std::error::Error for FrameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Detect { source, .. } | Self::Sink(source) => Some(source.as_ref()),
            Self::NonFinitePoint { .. } => None,
        }
    }
}

/// Detectors -> [`FrameAnalyzer`] -> [`Sink`], one frame at a time.
///
/// Points from all detectors are concatenated in detector order. Frames
/// without any point are skipped and nothing is pushed for them.
pub struct FramePipeline<Fr: ?Sized, S, F = PrincipalAxisFit, G = KMeansGrouper> {
    detectors: Vec<Box<dyn Detector<Fr>>>,
    analyzer: FrameAnalyzer<F, G>,
    sink: S,
    frame_index: u64,
}

impl<Fr, S, F, G> FramePipeline<Fr, S, F, G>
where
    Fr: ?Sized,
    S: Sink,
    F: LineFitter,
    G: PointGrouper,
{
    pub fn new(analyzer: FrameAnalyzer<F, G>, sink: S) -> Self {
        Self {
            detectors: Vec::new(),
            analyzer,
            sink,
            frame_index: 0,
        }
    }

    pub fn with_detector(mut self, detector: impl Detector<Fr> + 'static) -> Self {
        self.detectors.push(Box::new(detector));
        self
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Runs one frame. `Ok(None)` when no detector reported a point.
    pub fn process(&mut self, frame: &Fr) -> Result<Option<FrameReport>, FrameError> {
        let index = self.frame_index;
        self.frame_index += 1;

        let mut points = Vec::new();
        for (i, det) in self.detectors.iter_mut().enumerate() {
            let found = det
                .detect(frame)
                .map_err(|source| FrameError::Detect { detector: i, source })?;
            if let Some(&point) = found.iter().find(|p| !(p.x.is_finite() && p.y.is_finite())) {
                return Err(FrameError::NonFinitePoint { detector: i, point });
            }
            points.extend(found);
        }

        if points.is_empty() {
            debug!(frame = index, "no detections, frame skipped");
            return Ok(None);
        }

        let report = self.analyzer.analyze(&points);
        debug!(
            frame = index,
            points = report.num_points,
            lines = report.lines.len(),
            clusters = report.clusters.len(),
            "frame analyzed"
        );

        self.sink
            .push(&report.to_record())
            .map_err(FrameError::Sink)?;
        Ok(Some(report))
    }

    /// Processes every frame, skipping failed ones. Returns the number of
    /// frames pushed to the sink.
    pub fn run<'a, I>(&mut self, frames: I) -> usize
    where
        I: IntoIterator<Item = &'a Fr>,
        Fr: 'a,
    {
        let mut pushed = 0;
        for frame in frames {
            match self.process(frame) {
                Ok(Some(_)) => pushed += 1,
                Ok(None) => {}
                Err(err) => warn!(frame = self.frame_index - 1, error = %err, "frame dropped"),
            }
        }
        pushed
    }
}

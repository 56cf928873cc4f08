//! Umbrella crate for the `crowd-graph` workspace.
//!
//! Re-exports the geometry, graph and shape crates and adds the per-frame
//! layer: [`FrameAnalyzer`] turns one frame's detection points into lines and
//! clusters, [`FramePipeline`] wires detectors and a [`Sink`] around it.

mod analyze;
mod detect;
mod pipeline;
mod report;
mod sink;

pub use cg_core::*;
pub use cg_graph::*;
pub use cg_shape::*;

pub use analyze::{AnalyzerConfig, FrameAnalyzer};
pub use detect::{BoundingBox, Detector, NormalizedBox, box_connections, boxes_to_points};
pub use pipeline::{BoxError, FrameError, FramePipeline};
pub use report::{ClusterRecord, FrameRecord, FrameReport};
pub use sink::{JsonLinesSink, MemorySink, Sink};

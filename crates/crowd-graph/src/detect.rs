use cg_core::Point2f;
use cg_graph::{Graph, minimum_spanning_forest};

use crate::pipeline::BoxError;

/// Source of person locations for a frame of type `F`.
pub trait Detector<F: ?Sized> {
    fn detect(&mut self, frame: &F) -> Result<Vec<Point2f>, BoxError>;
}

impl<F: ?Sized, T> Detector<F> for T
where
    T: FnMut(&F) -> Result<Vec<Point2f>, BoxError>,
{
    fn detect(&mut self, frame: &F) -> Result<Vec<Point2f>, BoxError> {
        self(frame)
    }
}

/// Axis-aligned box in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub xmin: f32,
    pub ymin: f32,
    pub xmax: f32,
    pub ymax: f32,
}

impl BoundingBox {
    pub fn from_xywh(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            xmin: x,
            ymin: y,
            xmax: x + w,
            ymax: y + h,
        }
    }

    pub fn center(&self) -> Point2f {
        Point2f::new(0.5 * (self.xmin + self.xmax), 0.5 * (self.ymin + self.ymax))
    }

    /// Center truncated to whole pixels.
    pub fn pixel_center(&self) -> Point2f {
        let c = self.center();
        Point2f::new(c.x.trunc(), c.y.trunc())
    }
}

/// Box in image-relative coordinates, `[0, 1]` on both axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedBox {
    pub xmin: f32,
    pub ymin: f32,
    pub xmax: f32,
    pub ymax: f32,
}

impl NormalizedBox {
    pub fn to_pixels(&self, width: usize, height: usize) -> BoundingBox {
        let (w, h) = (width as f32, height as f32);
        BoundingBox {
            xmin: self.xmin * w,
            ymin: self.ymin * h,
            xmax: self.xmax * w,
            ymax: self.ymax * h,
        }
    }
}

/// Whole-pixel centers of `boxes`, in input order.
pub fn boxes_to_points<'a>(boxes: impl IntoIterator<Item = &'a BoundingBox>) -> Vec<Point2f> {
    boxes.into_iter().map(BoundingBox::pixel_center).collect()
}

/// Spanning-forest links between box centers as `[x0, y0, x1, y1]` pixels.
///
/// One entry per forest edge, ordered by increasing length.
pub fn box_connections(boxes: &[BoundingBox]) -> Vec<[i32; 4]> {
    let centers: Vec<Point2f> = boxes.iter().map(BoundingBox::center).collect();
    let mst = minimum_spanning_forest(&Graph::complete(centers));

    mst.iter_edges()
        .map(|e| {
            let [x0, y0] = boxes[e.a].pixel_center().to_pixel();
            let [x1, y1] = boxes[e.b].pixel_center().to_pixel();
            [x0, y0, x1, y1]
        })
        .collect()
}

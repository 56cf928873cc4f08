//! Foundational primitives for crowd geometry.
//!
//! ## Coordinates
//! Points are detection centers in pixel coordinates, stored as `f32`. Integer
//! pixel output rounds to nearest via [`Point2f::to_pixel`].
//!
//! ## Node Identifiers
//! Graph crates identify a point by its index in the owning coordinate list.
//! An index is only meaningful together with that list.

mod error;
mod geom;

pub use error::Error;
pub use geom::{Line2f, Point2f, Polyline2f, Segment2f, Vec2f, centroid};

use std::sync::Arc;

use cg_core::{Error, Point2f};

use crate::graph::{Graph, GraphEdge, validate_coords};

/// Collects the parts of a [`Graph`] before validating them together.
///
/// Without an explicit edge list the builder produces the complete graph over
/// the coordinates. Coordinates are mandatory and must be finite.
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    coords: Option<Arc<[Point2f]>>,
    edges: Option<Vec<GraphEdge>>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn coords(mut self, coords: impl Into<Arc<[Point2f]>>) -> Self {
        self.coords = Some(coords.into());
        self
    }

    pub fn edges(mut self, edges: Vec<GraphEdge>) -> Self {
        self.edges = Some(edges);
        self
    }

    pub fn build(self) -> Result<Graph, Error> {
        let coords = self.coords.ok_or(Error::MissingCoords)?;
        match self.edges {
            Some(edges) => Graph::from_edges(edges, coords),
            None => {
                validate_coords(&coords)?;
                Ok(Graph::complete(coords))
            }
        }
    }
}

/// Complete graph over detection centers.
pub fn build_graph_from_points(points: &[Point2f]) -> Graph {
    Graph::complete(points.to_vec())
}

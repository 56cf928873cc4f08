use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;

use cg_core::{Error, Point2f};

pub type NodeId = usize;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphEdge {
    pub a: NodeId,
    pub b: NodeId,
    pub weight: f32,
}

impl GraphEdge {
    pub const fn new(a: NodeId, b: NodeId, weight: f32) -> Self {
        Self { a, b, weight }
    }
}

/// Weighted undirected graph over an indexed point list.
///
/// Node `i` is `coords[i]`. Nodes without incident edges are still part of the
/// graph. Coordinates are shared between a graph and the graphs derived from
/// it without re-indexing (spanning forest, pruned edge set).
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    coords: Arc<[Point2f]>,
    edges: Vec<GraphEdge>,
}

impl Graph {
    /// Complete graph: one Euclidean-weighted edge per unordered pair `i < j`.
    ///
    /// Coordinates must be finite; a NaN point yields NaN edge weights. Use
    /// [`GraphBuilder`](crate::GraphBuilder) to have them checked.
    pub fn complete(coords: impl Into<Arc<[Point2f]>>) -> Self {
        let coords = coords.into();
        let n = coords.len();
        let mut edges = Vec::with_capacity(n * n.saturating_sub(1) / 2);
        for i in 0..n {
            for j in (i + 1)..n {
                edges.push(GraphEdge::new(i, j, coords[i].distance(coords[j])));
            }
        }
        Self { coords, edges }
    }

    /// Wraps a precomputed edge list. Coordinates must be finite; every edge
    /// must reference existing nodes, join two distinct nodes, and carry a
    /// finite non-negative weight.
    pub fn from_edges(
        edges: Vec<GraphEdge>,
        coords: impl Into<Arc<[Point2f]>>,
    ) -> Result<Self, Error> {
        let coords = coords.into();
        validate_coords(&coords)?;
        for e in &edges {
            validate_edge(e, coords.len())?;
        }
        Ok(Self { coords, edges })
    }

    pub(crate) fn from_parts(coords: Arc<[Point2f]>, edges: Vec<GraphEdge>) -> Self {
        debug_assert!(edges.iter().all(|e| validate_edge(e, coords.len()).is_ok()));
        Self { coords, edges }
    }

    pub fn empty() -> Self {
        Self {
            coords: Arc::from(Vec::<Point2f>::new()),
            edges: Vec::new(),
        }
    }

    pub fn add_edge(&mut self, edge: GraphEdge) -> Result<(), Error> {
        validate_edge(&edge, self.coords.len())?;
        self.edges.push(edge);
        Ok(())
    }

    /// Number of nodes, isolated nodes included.
    pub fn size(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    pub fn coords(&self) -> &[Point2f] {
        &self.coords
    }

    pub(crate) fn shared_coords(&self) -> Arc<[Point2f]> {
        Arc::clone(&self.coords)
    }

    pub fn edges(&self) -> &[GraphEdge] {
        &self.edges
    }

    pub fn iter_edges(&self) -> impl Iterator<Item = &GraphEdge> {
        self.edges.iter()
    }

    pub fn total_weight(&self) -> f32 {
        self.edges.iter().map(|e| e.weight).sum()
    }

    /// Coordinates of both endpoints of edge `i`.
    pub fn edge_endpoints(&self, i: usize) -> (Point2f, Point2f) {
        let e = self.edges[i];
        (self.coords[e.a], self.coords[e.b])
    }

    /// Per node, its `(neighbor, weight)` pairs in edge-list order.
    pub fn adjacency(&self) -> Vec<Vec<(NodeId, f32)>> {
        let mut adj = vec![Vec::new(); self.size()];
        for e in &self.edges {
            adj[e.a].push((e.b, e.weight));
            adj[e.b].push((e.a, e.weight));
        }
        adj
    }

    /// Per node, its `(neighbor, edge index)` pairs in edge-list order.
    pub(crate) fn incidence(&self) -> Vec<Vec<(NodeId, usize)>> {
        let mut adj = vec![Vec::new(); self.size()];
        for (i, e) in self.edges.iter().enumerate() {
            adj[e.a].push((e.b, i));
            adj[e.b].push((e.a, i));
        }
        adj
    }

    pub fn num_isolated(&self) -> usize {
        self.incidence().iter().filter(|nb| nb.is_empty()).count()
    }

    /// Node count along the longest simple path of any component.
    ///
    /// Two breadth-first sweeps per component; exact when the graph is a
    /// forest, a lower bound otherwise. Zero for an empty graph.
    pub fn longest_chain_len(&self) -> usize {
        let adj = self.incidence();
        let n = self.size();
        let mut seen = vec![false; n];
        let mut hops = vec![usize::MAX; n];
        let mut queue = VecDeque::new();
        let mut best = 0;

        for root in 0..n {
            if seen[root] {
                continue;
            }

            let (far, _, members) = bfs_farthest(root, &adj, &mut hops, &mut queue);
            for &m in &members {
                seen[m] = true;
                hops[m] = usize::MAX;
            }

            let (_, depth, members) = bfs_farthest(far, &adj, &mut hops, &mut queue);
            for &m in &members {
                hops[m] = usize::MAX;
            }

            best = best.max(depth + 1);
        }

        best
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "edges:")?;
        for e in &self.edges {
            write!(f, "\n{}=>{}   weight = {:.2}", e.a, e.b, e.weight)?;
        }
        Ok(())
    }
}

pub(crate) fn validate_coords(coords: &[Point2f]) -> Result<(), Error> {
    match coords.iter().position(|p| !(p.x.is_finite() && p.y.is_finite())) {
        Some(node) => Err(Error::NonFiniteCoord { node }),
        None => Ok(()),
    }
}

fn validate_edge(e: &GraphEdge, len: usize) -> Result<(), Error> {
    for node in [e.a, e.b] {
        if node >= len {
            return Err(Error::NodeOutOfRange { node, len });
        }
    }
    if e.a == e.b {
        return Err(Error::SelfLoop { node: e.a });
    }
    if !e.weight.is_finite() || e.weight < 0.0 {
        return Err(Error::InvalidWeight { weight: e.weight });
    }
    Ok(())
}

/// Returns the farthest node from `start` in hops, its hop count, and every
/// node reached. `hops` must be `usize::MAX` for all reachable nodes on entry.
fn bfs_farthest(
    start: NodeId,
    adj: &[Vec<(NodeId, usize)>],
    hops: &mut [usize],
    queue: &mut VecDeque<NodeId>,
) -> (NodeId, usize, Vec<NodeId>) {
    let mut members = vec![start];
    let (mut far, mut far_hops) = (start, 0);

    hops[start] = 0;
    queue.clear();
    queue.push_back(start);
    while let Some(a) = queue.pop_front() {
        if hops[a] > far_hops {
            far = a;
            far_hops = hops[a];
        }
        for &(b, _) in &adj[a] {
            if hops[b] == usize::MAX {
                hops[b] = hops[a] + 1;
                members.push(b);
                queue.push_back(b);
            }
        }
    }

    (far, far_hops, members)
}

use std::sync::Arc;

use cg_core::Point2f;

use crate::graph::{Graph, GraphEdge, NodeId};

const UNASSIGNED: usize = usize::MAX;

/// Splits `g` into its connected components.
///
/// Roots are taken in ascending node order and each component is explored
/// depth-first with an explicit stack. Node ids are compacted in discovery
/// order, so local node `0` is the root and `coords` follow discovery order.
/// Tree edges come first, in traversal order and oriented parent to child;
/// edges closing a cycle follow in input order. An isolated node becomes a
/// single-node component without edges.
pub fn partition(g: &Graph) -> Vec<Graph> {
    let n = g.size();
    let edges = g.edges();
    let adj = g.incidence();
    let coords = g.coords();

    let mut component_of = vec![UNASSIGNED; n];
    let mut local_id = vec![UNASSIGNED; n];
    let mut tree_edge = vec![false; edges.len()];
    let mut parts: Vec<(Vec<Point2f>, Vec<GraphEdge>)> = Vec::new();
    let mut stack: Vec<(NodeId, usize)> = Vec::new();

    for root in 0..n {
        if component_of[root] != UNASSIGNED {
            continue;
        }

        let comp = parts.len();
        let mut part_coords = vec![coords[root]];
        let mut part_edges = Vec::new();
        component_of[root] = comp;
        local_id[root] = 0;

        stack.clear();
        stack.push((root, 0));
        while let Some(&(a, next)) = stack.last() {
            let Some(&(b, ei)) = adj[a].get(next) else {
                stack.pop();
                continue;
            };
            let top = stack.len() - 1;
            stack[top].1 += 1;

            if component_of[b] != UNASSIGNED {
                continue;
            }

            component_of[b] = comp;
            local_id[b] = part_coords.len();
            part_coords.push(coords[b]);
            tree_edge[ei] = true;
            part_edges.push(GraphEdge::new(local_id[a], local_id[b], edges[ei].weight));
            stack.push((b, 0));
        }

        parts.push((part_coords, part_edges));
    }

    for (i, e) in edges.iter().enumerate() {
        if tree_edge[i] {
            continue;
        }
        let (_, part_edges) = &mut parts[component_of[e.a]];
        part_edges.push(GraphEdge::new(local_id[e.a], local_id[e.b], e.weight));
    }

    parts
        .into_iter()
        .map(|(c, e)| Graph::from_parts(Arc::from(c), e))
        .collect()
}

impl Graph {
    pub fn partition(&self) -> Vec<Graph> {
        partition(self)
    }
}

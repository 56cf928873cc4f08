use petgraph::unionfind::UnionFind;

use crate::graph::Graph;

/// Kruskal's minimum spanning forest.
///
/// Edges are taken in ascending weight order, ties in input order, and kept
/// when they join two different trees. The result shares the input's
/// coordinates; its edges appear in acceptance order. Isolated nodes stay
/// isolated and a disconnected input yields one tree per component.
pub fn minimum_spanning_forest(g: &Graph) -> Graph {
    let n = g.size();
    let edges = g.edges();

    let mut order: Vec<usize> = (0..edges.len()).collect();
    order.sort_by(|&i, &j| edges[i].weight.total_cmp(&edges[j].weight));

    let mut uf = UnionFind::<usize>::new(n);
    let mut kept = Vec::with_capacity(n.saturating_sub(1));
    for i in order {
        let e = edges[i];
        if uf.union(e.a, e.b) {
            kept.push(e);
            if kept.len() + 1 == n {
                break;
            }
        }
    }

    Graph::from_parts(g.shared_coords(), kept)
}

impl Graph {
    pub fn minimum_spanning_forest(&self) -> Graph {
        minimum_spanning_forest(self)
    }
}

#[cfg(test)]
mod tests {
    use cg_core::Point2f;

    use petgraph::unionfind::UnionFind;

    use super::minimum_spanning_forest;
    use crate::testutil::{pts, scattered_points};
    use crate::{Graph, GraphEdge};

    fn component_count(g: &Graph) -> usize {
        let mut uf = UnionFind::<usize>::new(g.size());
        let mut count = g.size();
        for e in g.iter_edges() {
            if uf.union(e.a, e.b) {
                count -= 1;
            }
        }
        count
    }

    /// Minimum total weight over all spanning trees, by exhaustive subset search.
    fn brute_force_mst_weight(g: &Graph) -> f32 {
        let n = g.size();
        let edges = g.edges();
        let need = n - 1;
        let mut best = f32::INFINITY;
        let mut pick = Vec::with_capacity(need);

        fn rec(
            start: usize,
            need: usize,
            n: usize,
            edges: &[GraphEdge],
            pick: &mut Vec<usize>,
            best: &mut f32,
        ) {
            if pick.len() == need {
                let mut uf = UnionFind::<usize>::new(n);
                if pick.iter().all(|&i| uf.union(edges[i].a, edges[i].b)) {
                    let w: f32 = pick.iter().map(|&i| edges[i].weight).sum();
                    *best = best.min(w);
                }
                return;
            }
            for i in start..edges.len() {
                pick.push(i);
                rec(i + 1, need, n, edges, pick, best);
                pick.pop();
            }
        }

        rec(0, need, n, edges, &mut pick, &mut best);
        best
    }

    #[test]
    fn four_point_scene() {
        let g = Graph::complete(pts(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (10.0, 10.0)]));
        let mst = minimum_spanning_forest(&g);

        assert_eq!(mst.edges().len(), 3);
        assert_eq!(mst.coords(), g.coords());

        let unit: Vec<_> = mst
            .iter_edges()
            .filter(|e| (e.weight - 1.0).abs() < 1e-6)
            .map(|e| (e.a, e.b))
            .collect();
        assert_eq!(unit, vec![(0, 1), (1, 2)]);

        let long = mst.edges()[2];
        assert_eq!((long.a, long.b), (2, 3));
        assert!((long.weight - (64.0_f32 + 100.0).sqrt()).abs() < 1e-4);
    }

    #[test]
    fn matches_brute_force_on_small_sets() {
        for seed in 1..=6_u64 {
            for n in 2..=7 {
                let g = Graph::complete(scattered_points(seed * 31 + n as u64, n, 100.0));
                let mst = minimum_spanning_forest(&g);

                assert_eq!(mst.edges().len(), n - 1);
                assert_eq!(component_count(&mst), 1);
                let expected = brute_force_mst_weight(&g);
                assert!(
                    (mst.total_weight() - expected).abs() < 1e-3,
                    "seed {seed} n {n}: {} vs {expected}",
                    mst.total_weight()
                );
            }
        }
    }

    #[test]
    fn disconnected_input_yields_forest() {
        let coords = pts(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (50.0, 0.0), (51.0, 0.0), (99.0, 99.0)]);
        let edges = vec![
            GraphEdge::new(0, 1, 1.0),
            GraphEdge::new(1, 2, 1.0),
            GraphEdge::new(0, 2, 2.0),
            GraphEdge::new(3, 4, 1.0),
        ];
        let g = Graph::from_edges(edges, coords).expect("valid graph");
        let mst = minimum_spanning_forest(&g);

        // 6 nodes, 3 components (one isolated).
        assert_eq!(mst.edges().len(), 6 - 3);
        assert_eq!(component_count(&mst), 3);
        assert_eq!(mst.num_isolated(), 1);
        assert!(mst.iter_edges().all(|e| (e.a, e.b) != (0, 2)));
    }

    #[test]
    fn equal_weights_keep_input_order() {
        let coords = vec![Point2f::default(); 3];
        let edges = vec![
            GraphEdge::new(1, 2, 1.0),
            GraphEdge::new(0, 1, 1.0),
            GraphEdge::new(0, 2, 1.0),
        ];
        let g = Graph::from_edges(edges, coords).expect("valid graph");
        let mst = g.minimum_spanning_forest();

        let pairs: Vec<_> = mst.iter_edges().map(|e| (e.a, e.b)).collect();
        assert_eq!(pairs, vec![(1, 2), (0, 1)]);
    }

    #[test]
    fn input_is_left_untouched() {
        let g = Graph::complete(scattered_points(7, 12, 50.0));
        let before = g.clone();
        let _ = minimum_spanning_forest(&g);
        assert_eq!(g, before);
    }

    #[test]
    fn empty_and_single_node() {
        assert!(minimum_spanning_forest(&Graph::empty()).edges().is_empty());

        let one = Graph::complete(pts(&[(3.0, 3.0)]));
        let mst = minimum_spanning_forest(&one);
        assert_eq!(mst.size(), 1);
        assert!(mst.edges().is_empty());
    }
}

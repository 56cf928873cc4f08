use cg_core::{Point2f, centroid};

/// Splits a point set into spatially coherent groups.
pub trait PointGrouper {
    /// Every input point lands in exactly one returned group; no group is empty.
    fn group(&self, points: &[Point2f]) -> Vec<Vec<Point2f>>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KMeansConfig {
    /// Expected members per group; `k = ceil(n / target_group_size)`.
    pub target_group_size: usize,
    pub max_iters: usize,
}

impl Default for KMeansConfig {
    fn default() -> Self {
        Self {
            target_group_size: 8,
            max_iters: 32,
        }
    }
}

/// Deterministic Lloyd's k-means with farthest-point seeding.
///
/// The first seed is the point farthest from the centroid; each further seed
/// maximizes its distance to the seeds already chosen. Ties resolve to the
/// lowest index, so equal inputs always give equal groups.
#[derive(Debug, Clone, Default)]
pub struct KMeansGrouper {
    pub cfg: KMeansConfig,
}

impl KMeansGrouper {
    pub fn new(cfg: KMeansConfig) -> Self {
        Self { cfg }
    }

    pub fn num_groups(&self, n: usize) -> usize {
        n.div_ceil(self.cfg.target_group_size.max(1)).min(n)
    }
}

impl PointGrouper for KMeansGrouper {
    fn group(&self, points: &[Point2f]) -> Vec<Vec<Point2f>> {
        let Some(mean) = centroid(points) else {
            return Vec::new();
        };

        let k = self.num_groups(points.len());
        let mut centers = farthest_point_seeds(points, mean, k);
        let mut assign = vec![usize::MAX; points.len()];

        for _ in 0..self.cfg.max_iters.max(1) {
            let mut changed = false;
            for (i, p) in points.iter().enumerate() {
                let c = nearest(&centers, *p);
                if assign[i] != c {
                    assign[i] = c;
                    changed = true;
                }
            }
            if !changed {
                break;
            }

            let mut sums = vec![(0.0_f64, 0.0_f64, 0_usize); centers.len()];
            for (p, &c) in points.iter().zip(&assign) {
                sums[c].0 += p.x as f64;
                sums[c].1 += p.y as f64;
                sums[c].2 += 1;
            }
            for (center, &(sx, sy, count)) in centers.iter_mut().zip(&sums) {
                if count > 0 {
                    *center = Point2f::new((sx / count as f64) as f32, (sy / count as f64) as f32);
                }
            }
        }

        let mut groups = vec![Vec::new(); centers.len()];
        for (p, &c) in points.iter().zip(&assign) {
            groups[c].push(*p);
        }
        groups.retain(|g| !g.is_empty());
        groups
    }
}

fn dist2(a: Point2f, b: Point2f) -> f32 {
    let d = a - b;
    d.dot(d)
}

fn nearest(centers: &[Point2f], p: Point2f) -> usize {
    let mut best = 0;
    let mut best_d = f32::INFINITY;
    for (i, c) in centers.iter().enumerate() {
        let d = dist2(*c, p);
        if d < best_d {
            best = i;
            best_d = d;
        }
    }
    best
}

fn farthest_point_seeds(points: &[Point2f], mean: Point2f, k: usize) -> Vec<Point2f> {
    let mut seeds = Vec::with_capacity(k);
    let mut min_d: Vec<f32> = points.iter().map(|p| dist2(*p, mean)).collect();

    while seeds.len() < k {
        let mut best = 0;
        for (i, &d) in min_d.iter().enumerate() {
            if d > min_d[best] {
                best = i;
            }
        }

        let s = points[best];
        seeds.push(s);
        if seeds.len() == 1 {
            min_d.iter_mut().for_each(|d| *d = f32::INFINITY);
        }
        for (d, p) in min_d.iter_mut().zip(points) {
            *d = d.min(dist2(*p, s));
        }
    }

    seeds
}

use cg_core::Point2f;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Reproducible random points in `[0, extent)^2`.
pub(crate) fn scattered_points(seed: u64, n: usize, extent: f32) -> Vec<Point2f> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| Point2f::new(rng.gen_range(0.0..extent), rng.gen_range(0.0..extent)))
        .collect()
}

pub(crate) fn pts(raw: &[(f32, f32)]) -> Vec<Point2f> {
    raw.iter().map(|&(x, y)| Point2f::new(x, y)).collect()
}

#[cfg(test)]
mod tests {
    use super::scattered_points;

    #[test]
    fn scattered_points_are_seeded_and_bounded() {
        let a = scattered_points(42, 50, 10.0);
        assert_eq!(a, scattered_points(42, 50, 10.0));
        assert_ne!(a, scattered_points(43, 50, 10.0));
        assert!(a.iter().all(|p| (0.0..10.0).contains(&p.x) && (0.0..10.0).contains(&p.y)));
    }
}

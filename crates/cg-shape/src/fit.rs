use cg_core::{Line2f, Point2f, Vec2f};

/// Goodness-of-fit of a straight line through a point set.
pub trait LineFitter {
    /// Coefficient of determination in `[0, 1]`; higher means more line-like.
    fn r_squared(&self, points: &[Point2f]) -> f32;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineFit {
    pub line: Line2f,
    pub r_squared: f32,
}

/// Second central moments of a point set, accumulated in `f64`.
#[derive(Debug, Clone, Copy)]
struct Moments {
    mean_x: f64,
    mean_y: f64,
    sxx: f64,
    syy: f64,
    sxy: f64,
}

impl Moments {
    fn of(points: &[Point2f]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }

        let n = points.len() as f64;
        let mean_x = points.iter().map(|p| p.x as f64).sum::<f64>() / n;
        let mean_y = points.iter().map(|p| p.y as f64).sum::<f64>() / n;

        let (mut sxx, mut syy, mut sxy) = (0.0, 0.0, 0.0);
        for p in points {
            let dx = p.x as f64 - mean_x;
            let dy = p.y as f64 - mean_y;
            sxx += dx * dx;
            syy += dy * dy;
            sxy += dx * dy;
        }

        Some(Self {
            mean_x,
            mean_y,
            sxx,
            syy,
            sxy,
        })
    }
}

/// Orthogonal (total least squares) line fit along the principal axis.
///
/// With `l_max >= l_min` the eigenvalues of the scatter matrix, the score is
/// `1 - sqrt(l_min / l_max)`, one minus the ratio of the spreads across and
/// along the axis: 1 for collinear points in any direction, 0 for an
/// isotropic blob. A block must be about 1.7 times longer than it is wide to
/// pass a 0.4 threshold. Fewer than two distinct points score 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrincipalAxisFit;

impl PrincipalAxisFit {
    pub fn fit(&self, points: &[Point2f]) -> Option<LineFit> {
        let m = Moments::of(points)?;

        let half_tr = 0.5 * (m.sxx + m.syy);
        let disc = (0.25 * (m.sxx - m.syy).powi(2) + m.sxy * m.sxy).sqrt();
        let l_max = half_tr + disc;
        let l_min = (half_tr - disc).max(0.0);

        let theta = 0.5 * (2.0 * m.sxy).atan2(m.sxx - m.syy);
        let line = Line2f {
            p: Point2f::new(m.mean_x as f32, m.mean_y as f32),
            dir: Vec2f {
                x: theta.cos() as f32,
                y: theta.sin() as f32,
            },
        };

        let r_squared = if l_max > f64::EPSILON * half_tr.abs().max(1.0) {
            (1.0 - (l_min / l_max).sqrt()) as f32
        } else {
            0.0
        };

        Some(LineFit { line, r_squared })
    }
}

impl LineFitter for PrincipalAxisFit {
    fn r_squared(&self, points: &[Point2f]) -> f32 {
        self.fit(points).map_or(0.0, |f| f.r_squared)
    }
}

/// Ordinary least squares regression of `y` on `x`.
///
/// Points sharing one `x` (vertical spread only) score 0; points sharing one
/// `y` with distinct `x` lie exactly on a horizontal line and score 1.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeastSquaresFit;

impl LineFitter for LeastSquaresFit {
    fn r_squared(&self, points: &[Point2f]) -> f32 {
        let Some(m) = Moments::of(points) else {
            return 0.0;
        };

        if m.sxx <= 0.0 {
            return 0.0;
        }
        if m.syy <= 0.0 {
            return 1.0;
        }

        ((m.sxy * m.sxy) / (m.sxx * m.syy)).clamp(0.0, 1.0) as f32
    }
}

#[cfg(test)]
mod tests {
    use cg_core::Point2f;

    use super::{LeastSquaresFit, LineFitter, PrincipalAxisFit};

    fn pts(raw: &[(f32, f32)]) -> Vec<Point2f> {
        raw.iter().map(|&(x, y)| Point2f::new(x, y)).collect()
    }

    #[test]
    fn collinear_points_score_one_in_any_direction() {
        let fit = PrincipalAxisFit;
        let horizontal = pts(&[(0.0, 0.0), (5.0, 0.0), (10.0, 0.0), (15.0, 0.0)]);
        let vertical = pts(&[(3.0, 0.0), (3.0, 4.0), (3.0, 9.0)]);
        let diagonal = pts(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (4.0, 4.0)]);

        for set in [&horizontal, &vertical, &diagonal] {
            assert!((fit.r_squared(set) - 1.0).abs() < 1e-5);
        }

        let f = fit.fit(&diagonal).expect("non-empty");
        assert!((f.line.dir.x.abs() - f.line.dir.y.abs()).abs() < 1e-5);
        for p in &diagonal {
            assert!(f.line.distance_to(*p) < 1e-4);
        }
    }

    #[test]
    fn isotropic_blob_scores_low() {
        let square = pts(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (1.0, 1.0)]);
        assert!(PrincipalAxisFit.r_squared(&square) < 1e-5);
    }

    #[test]
    fn rectangular_block_is_not_line_like() {
        // 4 x 3 grid, 10 px apart: spreads 125 vs 66.7 per point.
        let grid: Vec<Point2f> = (0..3)
            .flat_map(|r| (0..4).map(move |c| Point2f::new(c as f32 * 10.0, r as f32 * 10.0)))
            .collect();
        let score = PrincipalAxisFit.r_squared(&grid);
        let expected = 1.0 - (66.666_67_f32 / 125.0).sqrt();
        assert!((score - expected).abs() < 1e-4);
        assert!(score < 0.4);
    }

    #[test]
    fn jittered_row_stays_line_like() {
        let row: Vec<Point2f> = (0..8)
            .map(|i| Point2f::new(i as f32 * 20.0, if i % 2 == 0 { 2.0 } else { -2.0 }))
            .collect();
        assert!(PrincipalAxisFit.r_squared(&row) > 0.8);
    }

    #[test]
    fn degenerate_sets_score_zero() {
        assert_eq!(PrincipalAxisFit.r_squared(&[]), 0.0);
        assert_eq!(PrincipalAxisFit.r_squared(&pts(&[(2.0, 2.0)])), 0.0);
        assert_eq!(PrincipalAxisFit.r_squared(&pts(&[(2.0, 2.0), (2.0, 2.0)])), 0.0);
    }

    #[test]
    fn least_squares_matches_textbook_values() {
        let ls = LeastSquaresFit;
        assert!((ls.r_squared(&pts(&[(0.0, 1.0), (1.0, 3.0), (2.0, 5.0)])) - 1.0).abs() < 1e-6);
        assert_eq!(ls.r_squared(&pts(&[(0.0, 0.0), (5.0, 0.0)])), 1.0);
        assert_eq!(ls.r_squared(&pts(&[(1.0, 0.0), (1.0, 5.0)])), 0.0);

        // x = 1..4, y = 1,3,2,4: r = 0.8.
        let r2 = ls.r_squared(&pts(&[(1.0, 1.0), (2.0, 3.0), (3.0, 2.0), (4.0, 4.0)]));
        assert!((r2 - 0.64).abs() < 1e-5);
    }
}

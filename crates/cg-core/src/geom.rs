use core::ops::Sub;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point2f {
    pub x: f32,
    pub y: f32,
}

impl Point2f {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Self) -> f32 {
        (self - other).norm()
    }

    /// Nearest integer pixel, as `[x, y]`.
    pub fn to_pixel(self) -> [i32; 2] {
        [self.x.round() as i32, self.y.round() as i32]
    }
}

impl From<[f32; 2]> for Point2f {
    fn from(p: [f32; 2]) -> Self {
        Self { x: p[0], y: p[1] }
    }
}

impl From<(i32, i32)> for Point2f {
    fn from(p: (i32, i32)) -> Self {
        Self {
            x: p.0 as f32,
            y: p.1 as f32,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2f {
    pub x: f32,
    pub y: f32,
}

impl Vec2f {
    pub fn dot(self, rhs: Self) -> f32 {
        self.x * rhs.x + self.y * rhs.y
    }

    pub fn norm(self) -> f32 {
        self.dot(self).sqrt()
    }
}

impl Sub<Point2f> for Point2f {
    type Output = Vec2f;

    fn sub(self, rhs: Point2f) -> Self::Output {
        Vec2f {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

/// Infinite line through `p` along unit direction `dir`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line2f {
    pub p: Point2f,
    pub dir: Vec2f,
}

impl Line2f {
    /// Perpendicular distance from `q` to the line.
    pub fn distance_to(&self, q: Point2f) -> f32 {
        let v = q - self.p;
        (v.x * self.dir.y - v.y * self.dir.x).abs()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment2f {
    pub a: Point2f,
    pub b: Point2f,
}

impl Segment2f {
    pub fn length(&self) -> f32 {
        self.a.distance(self.b)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polyline2f {
    pub points: Vec<Point2f>,
}

impl Polyline2f {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Arithmetic mean of `points`; `None` for an empty slice.
pub fn centroid(points: &[Point2f]) -> Option<Point2f> {
    if points.is_empty() {
        return None;
    }

    let (mut sx, mut sy) = (0.0_f64, 0.0_f64);
    for p in points {
        sx += p.x as f64;
        sy += p.y as f64;
    }
    let n = points.len() as f64;
    Some(Point2f {
        x: (sx / n) as f32,
        y: (sy / n) as f32,
    })
}

//! Plane model and the plane-fitting seam.
//!
//! The ground splitter only needs "fit a plane to these points under a
//! distance tolerance". [`PlaneFitter`] is that contract; the crate ships
//! [`RansacPlaneFitter`](super::RansacPlaneFitter) and tests can plug in
//! anything else.

use thiserror::Error;

use crate::core::Point3;

/// Plane in Hessian normal form: `n · p + d = 0`, with `|n| = 1`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlaneModel {
    /// Unit normal, oriented with non-negative z
    pub normal: [f32; 3],
    /// Offset along the normal
    pub d: f32,
}

impl PlaneModel {
    /// Horizontal plane at height `z`.
    pub fn horizontal(z: f32) -> Self {
        Self {
            normal: [0.0, 0.0, 1.0],
            d: -z,
        }
    }

    /// Plane through three points, `None` if they are (nearly) collinear.
    pub fn from_points(a: Point3, b: Point3, c: Point3) -> Option<Self> {
        let u = [b.x - a.x, b.y - a.y, b.z - a.z];
        let v = [c.x - a.x, c.y - a.y, c.z - a.z];
        let n = [
            u[1] * v[2] - u[2] * v[1],
            u[2] * v[0] - u[0] * v[2],
            u[0] * v[1] - u[1] * v[0],
        ];
        Self::from_normal(n, a)
    }

    /// Least-squares plane `z = ax + by + c` through a point set.
    ///
    /// Returns `None` when the XY footprint is degenerate (fewer than three
    /// points, or all points on one line).
    pub fn least_squares(points: &[Point3]) -> Option<Self> {
        if points.len() < 3 {
            return None;
        }

        let n = points.len() as f64;
        let (sx, sy, sz) = points.iter().fold((0.0, 0.0, 0.0), |(sx, sy, sz), p| {
            (sx + p.x as f64, sy + p.y as f64, sz + p.z as f64)
        });
        let (cx, cy, cz) = (sx / n, sy / n, sz / n);

        let (mut sxx, mut sxy, mut syy, mut sxz, mut syz) = (0.0, 0.0, 0.0, 0.0, 0.0);
        for p in points {
            let dx = p.x as f64 - cx;
            let dy = p.y as f64 - cy;
            let dz = p.z as f64 - cz;
            sxx += dx * dx;
            sxy += dx * dy;
            syy += dy * dy;
            sxz += dx * dz;
            syz += dy * dz;
        }

        let det = sxx * syy - sxy * sxy;
        if det.abs() <= 1e-9 * (sxx * syy).max(f64::MIN_POSITIVE) {
            return None;
        }
        let a = (sxz * syy - syz * sxy) / det;
        let b = (syz * sxx - sxz * sxy) / det;

        // z - a·x - b·y - c = 0, c chosen so the centroid lies on the plane
        let n = [-a as f32, -b as f32, 1.0];
        Self::from_normal(n, Point3::new(cx as f32, cy as f32, cz as f32))
    }

    fn from_normal(n: [f32; 3], on_plane: Point3) -> Option<Self> {
        let len = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
        if !len.is_finite() || len < 1e-6 {
            return None;
        }
        let sign = if n[2] < 0.0 { -1.0 } else { 1.0 };
        let normal = [sign * n[0] / len, sign * n[1] / len, sign * n[2] / len];
        let d = -(normal[0] * on_plane.x + normal[1] * on_plane.y + normal[2] * on_plane.z);
        Some(Self { normal, d })
    }

    /// Perpendicular distance from a point to the plane.
    #[inline]
    pub fn distance(&self, p: &Point3) -> f32 {
        (self.normal[0] * p.x + self.normal[1] * p.y + self.normal[2] * p.z + self.d).abs()
    }

    /// Coefficients `[a, b, c, d]` of `ax + by + cz + d = 0`.
    pub fn coefficients(&self) -> [f32; 4] {
        [self.normal[0], self.normal[1], self.normal[2], self.d]
    }
}

/// Output of a successful plane fit.
#[derive(Clone, Debug)]
pub struct PlaneFit {
    /// Fitted plane
    pub model: PlaneModel,
    /// Points within tolerance, in input order
    pub inliers: Vec<Point3>,
    /// Remaining points, in input order
    pub outliers: Vec<Point3>,
}

impl PlaneFit {
    /// Split `points` against a model.
    pub fn partition(model: PlaneModel, points: &[Point3], tolerance: f32) -> Self {
        let (inliers, outliers) = points
            .iter()
            .partition(|p| model.distance(p) <= tolerance);
        Self {
            model,
            inliers,
            outliers,
        }
    }
}

/// Plane fitting failure.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlaneFitError {
    /// Not enough points to define a plane
    #[error("need at least 3 points, got {count}")]
    TooFewPoints {
        /// Points supplied
        count: usize,
    },

    /// Every sample was degenerate (collinear or coincident points)
    #[error("no non-degenerate sample after {iterations} iterations")]
    Degenerate {
        /// Iterations attempted
        iterations: usize,
    },
}

/// Fit a plane to a point set under a distance tolerance.
pub trait PlaneFitter {
    /// Fit a plane and split `points` into inliers and outliers.
    fn fit(&self, points: &[Point3], tolerance: f32) -> Result<PlaneFit, PlaneFitError>;
}

impl<F: PlaneFitter + ?Sized> PlaneFitter for &F {
    fn fit(&self, points: &[Point3], tolerance: f32) -> Result<PlaneFit, PlaneFitError> {
        (**self).fit(points, tolerance)
    }
}

impl<F: PlaneFitter + ?Sized> PlaneFitter for Box<F> {
    fn fit(&self, points: &[Point3], tolerance: f32) -> Result<PlaneFit, PlaneFitError> {
        (**self).fit(points, tolerance)
    }
}

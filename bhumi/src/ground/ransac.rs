//! RANSAC plane fitting.
//!
//! ## Algorithm
//!
//! 1. Draw three distinct points, skip the sample if they are collinear
//! 2. Count points within tolerance of the sampled plane
//! 3. Keep the plane with the most inliers (first one wins on ties)
//! 4. Shrink the iteration budget as the inlier ratio improves
//! 5. Refine the winner with a least-squares fit over its inliers and
//!    re-select inliers against the refined plane
//!
//! The adaptive budget is the usual `log(1 - p) / log(1 - w³)` bound, where
//! `w` is the best inlier ratio so far and `p` the requested confidence.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::core::Point3;

use super::plane::{PlaneFit, PlaneFitError, PlaneFitter, PlaneModel};

/// Configuration for RANSAC plane fitting.
#[derive(Clone, Debug)]
pub struct RansacConfig {
    /// Maximum number of sampling iterations.
    /// Default: 500
    pub max_iterations: usize,

    /// Probability that at least one sample is outlier-free.
    /// Lower values stop earlier. Default: 0.99
    pub confidence: f64,

    /// Refine the best model with least squares over its inliers.
    /// Default: true
    pub refine: bool,

    /// RNG seed; 0 draws from OS entropy on every fit.
    /// Default: 0
    pub seed: u64,
}

impl Default for RansacConfig {
    fn default() -> Self {
        Self {
            max_iterations: 500,
            confidence: 0.99,
            refine: true,
            seed: 0,
        }
    }
}

impl RansacConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter for maximum iterations.
    pub fn with_max_iterations(mut self, iterations: usize) -> Self {
        self.max_iterations = iterations;
        self
    }

    /// Builder-style setter for the stopping confidence.
    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = confidence;
        self
    }

    /// Builder-style setter for least-squares refinement.
    pub fn with_refine(mut self, refine: bool) -> Self {
        self.refine = refine;
        self
    }

    /// Builder-style setter for a fixed seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Plane fitter based on random sample consensus.
#[derive(Clone, Debug, Default)]
pub struct RansacPlaneFitter {
    config: RansacConfig,
}

impl RansacPlaneFitter {
    /// Create a fitter.
    pub fn new(config: RansacConfig) -> Self {
        Self { config }
    }

    /// Fitter configuration
    pub fn config(&self) -> &RansacConfig {
        &self.config
    }

    fn rng(&self) -> StdRng {
        if self.config.seed == 0 {
            StdRng::from_os_rng()
        } else {
            StdRng::seed_from_u64(self.config.seed)
        }
    }

    /// Draw three distinct indices.
    fn sample_triplet<R: Rng>(rng: &mut R, n: usize) -> [usize; 3] {
        let a = rng.random_range(0..n);
        let mut b = rng.random_range(0..n);
        while b == a {
            b = rng.random_range(0..n);
        }
        let mut c = rng.random_range(0..n);
        while c == a || c == b {
            c = rng.random_range(0..n);
        }
        [a, b, c]
    }

    fn count_inliers(model: &PlaneModel, points: &[Point3], tolerance: f32) -> usize {
        points
            .iter()
            .filter(|p| model.distance(p) <= tolerance)
            .count()
    }

    /// Iterations needed to hit the confidence at the given inlier ratio.
    fn required_iterations(&self, inlier_ratio: f64) -> f64 {
        let p_good = inlier_ratio.powi(3);
        if p_good >= 1.0 - f64::EPSILON {
            return 0.0;
        }
        let p_bad = (1.0 - p_good).max(f64::EPSILON);
        (1.0 - self.config.confidence).ln() / p_bad.ln()
    }
}

impl PlaneFitter for RansacPlaneFitter {
    fn fit(&self, points: &[Point3], tolerance: f32) -> Result<PlaneFit, PlaneFitError> {
        let n = points.len();
        if n < 3 {
            return Err(PlaneFitError::TooFewPoints { count: n });
        }

        let mut rng = self.rng();
        let mut best: Option<(PlaneModel, usize)> = None;
        let mut budget = self.config.max_iterations as f64;
        let mut iterations = 0;

        while iterations < self.config.max_iterations && (iterations as f64) < budget {
            iterations += 1;

            let [a, b, c] = Self::sample_triplet(&mut rng, n);
            let Some(model) = PlaneModel::from_points(points[a], points[b], points[c]) else {
                continue;
            };

            let count = Self::count_inliers(&model, points, tolerance);
            if best.is_none_or(|(_, best_count)| count > best_count) {
                best = Some((model, count));
                budget = self
                    .required_iterations(count as f64 / n as f64)
                    .min(self.config.max_iterations as f64);
            }
        }

        let Some((mut model, count)) = best else {
            return Err(PlaneFitError::Degenerate { iterations });
        };

        if self.config.refine && count >= 3 {
            let inliers: Vec<Point3> = points
                .iter()
                .filter(|p| model.distance(p) <= tolerance)
                .copied()
                .collect();
            if let Some(refined) = PlaneModel::least_squares(&inliers)
                && Self::count_inliers(&refined, points, tolerance) >= count
            {
                model = refined;
            }
        }

        log::trace!(
            "[Ransac] {} iterations, {}/{} inliers, normal=({:.3}, {:.3}, {:.3})",
            iterations,
            count,
            n,
            model.normal[0],
            model.normal[1],
            model.normal[2]
        );

        Ok(PlaneFit::partition(model, points, tolerance))
    }
}

//! Ground / obstacle split.
//!
//! Two stages:
//!
//! ```text
//! polar cells ──► height-span filter ──► candidates ──► plane fit ──► inliers  = ground
//!                        │                                   │
//!                        └──── tall cells ──► obstacles ◄────┘ outliers
//! ```
//!
//! Obstacles keep the order they were found in: tall cells first (ring-major),
//! then plane outliers in candidate order.

use crate::core::Point3;
use crate::error::GroundFailure;
use crate::grid::PolarGrid;

use super::plane::{PlaneFitter, PlaneModel};

/// Result of splitting one frame.
#[derive(Clone, Debug)]
pub struct GroundSplit {
    /// Points accepted as ground
    pub ground: Vec<Point3>,
    /// Everything else
    pub obstacles: Vec<Point3>,
    /// Fitted ground plane
    pub plane: PlaneModel,
    /// Mean z over `ground`
    pub ground_z: f32,
    /// Points that passed the height filter
    pub candidate_count: usize,
}

/// Partition grid points by per-cell height span.
///
/// Returns `(candidates, obstacles)`. A cell whose span is strictly below
/// `height_threshold` contributes all its points to the candidates.
pub fn classify_cells(grid: &PolarGrid, height_threshold: f32) -> (Vec<Point3>, Vec<Point3>) {
    let mut candidates = Vec::new();
    let mut obstacles = Vec::new();

    for (_, cell) in grid.iter() {
        let Some(span) = cell.height_span() else {
            continue;
        };
        if span < height_threshold {
            candidates.extend_from_slice(&cell.points);
        } else {
            obstacles.extend_from_slice(&cell.points);
        }
    }

    (candidates, obstacles)
}

/// Mean height of a point set, accumulated in f64.
pub fn mean_height(points: &[Point3]) -> Option<f32> {
    if points.is_empty() {
        return None;
    }
    let sum: f64 = points.iter().map(|p| p.z as f64).sum();
    Some((sum / points.len() as f64) as f32)
}

/// Split a binned frame into ground and obstacles.
pub fn split_ground<F: PlaneFitter + ?Sized>(
    grid: &PolarGrid,
    height_threshold: f32,
    plane_tolerance: f32,
    fitter: &F,
) -> Result<GroundSplit, GroundFailure> {
    if grid.point_count() == 0 {
        return Err(GroundFailure::EmptyFrame);
    }

    let (candidates, mut obstacles) = classify_cells(grid, height_threshold);
    if candidates.is_empty() {
        return Err(GroundFailure::NoCandidates);
    }
    let candidate_count = candidates.len();

    let fit = fitter.fit(&candidates, plane_tolerance)?;
    let Some(ground_z) = mean_height(&fit.inliers) else {
        return Err(GroundFailure::NoInliers);
    };

    obstacles.extend(fit.outliers);

    Ok(GroundSplit {
        ground: fit.inliers,
        obstacles,
        plane: fit.model,
        ground_z,
        candidate_count,
    })
}

//! Cartesian to polar-grid index conversion.
//!
//! Every stage that touches the polar grid (binning, sector rebinning and the
//! Cartesian re-projection) goes through [`PolarLayout`], so a point always
//! lands in the same cell no matter which stage asks.
//!
//! ## Angular Convention
//!
//! ```text
//!              t = 0 (+X, forward)
//!                  ↑
//!                  │
//!   t = TH/4 (+Y) ─┼─  t = 3·TH/4 (-Y)
//!        left      │      right
//!                  ↓
//!              t = TH/2 (rear)
//! ```
//!
//! Angles run counter-clockwise over `[0, 2π)`.

use std::f32::consts::TAU;

use serde::{Deserialize, Serialize};

/// Index of a cell in the polar grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PolarIndex {
    /// Radial ring, `0..R`
    pub radial: usize,
    /// Angular sector, `0..TH`
    pub angular: usize,
}

impl PolarIndex {
    /// Create a new index
    #[inline]
    pub const fn new(radial: usize, angular: usize) -> Self {
        Self { radial, angular }
    }
}

/// Geometry of the polar grid: ring count, sector count and ring width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PolarLayout {
    radial_bins: usize,
    angular_bins: usize,
    radial_resolution: f32,
    angular_resolution: f32,
}

impl PolarLayout {
    /// Create a layout. Bin counts must be non-zero (checked at config time).
    pub fn new(radial_bins: usize, angular_bins: usize, radial_resolution: f32) -> Self {
        Self {
            radial_bins,
            angular_bins,
            radial_resolution,
            angular_resolution: TAU / angular_bins as f32,
        }
    }

    /// Number of radial rings (R)
    #[inline]
    pub fn radial_bins(&self) -> usize {
        self.radial_bins
    }

    /// Number of angular sectors (TH)
    #[inline]
    pub fn angular_bins(&self) -> usize {
        self.angular_bins
    }

    /// Ring width in meters
    #[inline]
    pub fn radial_resolution(&self) -> f32 {
        self.radial_resolution
    }

    /// Sector width in radians (2π / TH)
    #[inline]
    pub fn angular_resolution(&self) -> f32 {
        self.angular_resolution
    }

    /// Outer radius covered by the grid (R · ring width).
    #[inline]
    pub fn max_radius(&self) -> f32 {
        self.radial_bins as f32 * self.radial_resolution
    }

    /// Total number of cells (R · TH).
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.radial_bins * self.angular_bins
    }

    /// Angle of a sector's leading edge.
    #[inline]
    pub fn sector_angle(&self, angular: usize) -> f32 {
        angular as f32 * self.angular_resolution
    }

    /// Polar angle in `[0, 2π)` for a horizontal offset with known range.
    ///
    /// Returns `None` at the origin where the angle is undefined.
    pub fn angle_of(x: f32, y: f32, range: f32) -> Option<f32> {
        if range <= f32::EPSILON {
            return None;
        }
        let theta = (x / range).clamp(-1.0, 1.0).acos();
        Some(if y < 0.0 { TAU - theta } else { theta })
    }

    /// Sector index for a horizontal offset.
    ///
    /// Points at the origin go to sector 0.
    pub fn angular_index(&self, x: f32, y: f32) -> usize {
        let range = x.hypot(y);
        self.angular_index_with_range(x, y, range)
    }

    fn angular_index_with_range(&self, x: f32, y: f32, range: f32) -> usize {
        match Self::angle_of(x, y, range) {
            Some(theta) => (theta / self.angular_resolution).floor() as usize % self.angular_bins,
            None => 0,
        }
    }

    /// Ring index for a horizontal range, clamped to the outermost ring.
    #[inline]
    pub fn radial_index(&self, range: f32) -> usize {
        let a = (range / self.radial_resolution).floor();
        if a >= (self.radial_bins - 1) as f32 {
            self.radial_bins - 1
        } else {
            a.max(0.0) as usize
        }
    }

    /// Ring count strictly inside `range`, clamped to `R`.
    ///
    /// Cells with a ring index below this value lie closer than `range`.
    #[inline]
    pub fn rings_within(&self, range: f32) -> usize {
        let a = (range / self.radial_resolution).floor();
        if a >= self.radial_bins as f32 {
            self.radial_bins
        } else {
            a.max(0.0) as usize
        }
    }

    /// Full polar index for a horizontal offset.
    pub fn index_of(&self, x: f32, y: f32) -> PolarIndex {
        let range = x.hypot(y);
        PolarIndex::new(
            self.radial_index(range),
            self.angular_index_with_range(x, y, range),
        )
    }

    /// True for sectors in the rear half-plane, `TH/4 <= t < 3·TH/4`.
    #[inline]
    pub fn is_rear_sector(&self, angular: usize) -> bool {
        let quarter = self.angular_bins / 4;
        angular >= quarter && angular < 3 * quarter
    }

    /// Wrap a signed sector offset back into `0..TH`.
    #[inline]
    pub fn wrap_angular(&self, angular: usize, offset: isize) -> usize {
        let th = self.angular_bins as isize;
        (angular as isize + offset).rem_euclid(th) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::{FRAC_PI_2, PI};

    fn layout() -> PolarLayout {
        PolarLayout::new(60, 180, 0.4)
    }

    #[test]
    fn test_angle_quadrants() {
        assert_relative_eq!(PolarLayout::angle_of(1.0, 0.0, 1.0).unwrap(), 0.0);
        assert_relative_eq!(
            PolarLayout::angle_of(0.0, 1.0, 1.0).unwrap(),
            FRAC_PI_2,
            epsilon = 1e-6
        );
        assert_relative_eq!(
            PolarLayout::angle_of(-1.0, 0.0, 1.0).unwrap(),
            PI,
            epsilon = 1e-6
        );
        assert_relative_eq!(
            PolarLayout::angle_of(0.0, -1.0, 1.0).unwrap(),
            3.0 * FRAC_PI_2,
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_origin_goes_to_sector_zero() {
        let layout = layout();
        assert_eq!(PolarLayout::angle_of(0.0, 0.0, 0.0), None);
        assert_eq!(layout.index_of(0.0, 0.0), PolarIndex::new(0, 0));
    }

    #[test]
    fn test_left_side_sector() {
        // 2° sectors: straight left is 90°
        assert_eq!(layout().angular_index(0.0, 2.0), 45);
        assert_eq!(layout().angular_index(0.0, -2.0), 135);
    }

    #[test]
    fn test_just_below_forward_wraps_to_last_sector() {
        let layout = layout();
        let t = layout.angular_index(5.0, -1e-4);
        assert_eq!(t, 179);
    }

    #[test]
    fn test_radial_clamp() {
        let layout = layout();
        assert_eq!(layout.radial_index(0.39), 0);
        assert_eq!(layout.radial_index(3.0), 7);
        assert_eq!(layout.radial_index(23.9), 59);
        assert_eq!(layout.radial_index(24.0), 59);
        assert_eq!(layout.radial_index(500.0), 59);
    }

    #[test]
    fn test_rings_within_clamps_to_ring_count() {
        let layout = layout();
        assert_eq!(layout.rings_within(3.0), 7);
        assert_eq!(layout.rings_within(30.0), 60);
    }

    #[test]
    fn test_indices_always_in_bounds() {
        let layout = PolarLayout::new(10, 36, 0.5);
        for i in -40..=40 {
            for j in -40..=40 {
                let idx = layout.index_of(i as f32 * 0.37, j as f32 * 0.41);
                assert!(idx.radial < 10);
                assert!(idx.angular < 36);
            }
        }
    }

    #[test]
    fn test_wrap_angular() {
        let layout = layout();
        assert_eq!(layout.wrap_angular(0, -1), 179);
        assert_eq!(layout.wrap_angular(179, 1), 0);
        assert_eq!(layout.wrap_angular(10, -3), 7);
    }

    #[test]
    fn test_rear_sectors() {
        let layout = layout();
        assert!(!layout.is_rear_sector(44));
        assert!(layout.is_rear_sector(45));
        assert!(layout.is_rear_sector(134));
        assert!(!layout.is_rear_sector(135));
    }
}

//! Angle-only obstacle buckets.
//!
//! After ground segmentation the obstacle points are regrouped by sector
//! alone; the boundary extractor then asks each sector for its nearest
//! point.

use crate::core::{Point3, PolarLayout};

/// TH buckets of obstacle points, one per angular sector.
#[derive(Clone, Debug)]
pub struct ObstacleSectors {
    sectors: Vec<Vec<Point3>>,
}

impl ObstacleSectors {
    /// Bucket obstacle points by sector.
    ///
    /// With `exclude_rear` set, points behind the vehicle (x < 0) are dropped.
    pub fn from_points(points: &[Point3], layout: &PolarLayout, exclude_rear: bool) -> Self {
        let mut sectors = vec![Vec::new(); layout.angular_bins()];
        for &point in points {
            if exclude_rear && point.x < 0.0 {
                continue;
            }
            sectors[layout.angular_index(point.x, point.y)].push(point);
        }
        Self { sectors }
    }

    /// Number of sectors
    #[inline]
    pub fn len(&self) -> usize {
        self.sectors.len()
    }

    /// True if there are no sectors
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sectors.is_empty()
    }

    /// Points in one sector, in insertion order
    #[inline]
    pub fn sector(&self, angular: usize) -> &[Point3] {
        &self.sectors[angular]
    }

    /// Total obstacle points kept
    pub fn point_count(&self) -> usize {
        self.sectors.iter().map(Vec::len).sum()
    }

    /// Nearest obstacle in a sector by Manhattan XY distance.
    ///
    /// Ties go to the earliest inserted point.
    pub fn nearest(&self, angular: usize) -> Option<Point3> {
        let mut best: Option<(f32, Point3)> = None;
        for &p in &self.sectors[angular] {
            let score = p.manhattan_xy();
            match best {
                Some((min, _)) if score >= min => {}
                _ => best = Some((score, p)),
            }
        }
        best.map(|(_, p)| p)
    }
}

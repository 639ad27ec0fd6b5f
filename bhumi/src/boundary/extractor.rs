//! Per-sector drivable boundary.
//!
//! Each processed sector is walked outward from the vehicle until its nearest
//! obstacle:
//!
//! ```text
//!   ring:   0   1   2   3   4   5   6   7   8   9
//!         [ D | D | D | D | D | D | D | X |   |   ]     X = nearest obstacle
//!
//!   empty sector:
//!         [ D | D | D | D | D | D | D | D | D | D ] ──► boundary at R·Δr
//! ```

use serde::{Deserialize, Serialize};

use crate::core::Point3;
use crate::grid::{ObstacleSectors, PolarGrid};

/// Nearest obstacle (or open-sector limit) of one sector.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoundaryPoint {
    /// Angular sector
    pub sector: usize,
    /// Boundary position, at ground elevation
    pub point: Point3,
}

/// Marks drivable cells inside each sector's nearest obstacle.
#[derive(Clone, Copy, Debug, Default)]
pub struct SectorBoundaryExtractor {
    exclude_rear: bool,
}

impl SectorBoundaryExtractor {
    /// Create an extractor. With `exclude_rear`, rear sectors are skipped.
    pub fn new(exclude_rear: bool) -> Self {
        Self { exclude_rear }
    }

    /// Mark drivable cells in `grid` and return one boundary point per
    /// processed sector, in sector order.
    pub fn extract(
        &self,
        grid: &mut PolarGrid,
        sectors: &ObstacleSectors,
        ground_z: f32,
    ) -> Vec<BoundaryPoint> {
        let layout = *grid.layout();
        let mut boundary = Vec::with_capacity(layout.angular_bins());

        for t in 0..layout.angular_bins() {
            if self.exclude_rear && layout.is_rear_sector(t) {
                continue;
            }

            let point = match sectors.nearest(t) {
                Some(nearest) => {
                    let rings = layout.rings_within(nearest.planar_range());
                    grid.mark_column_drivable(t, rings);
                    nearest.with_z(ground_z)
                }
                None => {
                    grid.mark_column_drivable(t, layout.radial_bins());
                    let (sin, cos) = layout.sector_angle(t).sin_cos();
                    let radius = layout.max_radius();
                    Point3::new(radius * cos, radius * sin, ground_z)
                }
            };

            boundary.push(BoundaryPoint { sector: t, point });
        }

        boundary
    }
}

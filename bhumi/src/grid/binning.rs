//! Point-to-polar-cell binning.

use crate::core::{Point3, PolarLayout};

use super::polar_grid::PolarGrid;

/// Bucket every point into its polar cell.
///
/// Purely structural: no point is dropped. Points beyond the grid radius land
/// in the outermost ring; points on the sensor axis land in sector 0.
pub fn bin_points(points: &[Point3], layout: PolarLayout) -> PolarGrid {
    // Reserve roughly the average density so typical cells never reallocate
    let per_cell = points.len().div_ceil(layout.cell_count().max(1));
    let mut grid = PolarGrid::with_density(layout, per_cell);

    for &point in points {
        let index = layout.index_of(point.x, point.y);
        grid.push(index, point);
    }

    grid
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PolarIndex;

    #[test]
    fn test_every_point_lands_once() {
        let layout = PolarLayout::new(60, 180, 0.4);
        let points: Vec<Point3> = (0..500)
            .map(|i| {
                let a = i as f32 * 0.1;
                Point3::new(a.cos() * i as f32 * 0.07, a.sin() * i as f32 * 0.07, 0.0)
            })
            .collect();

        let grid = bin_points(&points, layout);
        assert_eq!(grid.point_count(), points.len());
    }

    #[test]
    fn test_far_point_clamped_to_outer_ring() {
        let layout = PolarLayout::new(60, 180, 0.4);
        let grid = bin_points(&[Point3::new(100.0, 0.0, 0.0)], layout);
        assert_eq!(grid.get(PolarIndex::new(59, 0)).points.len(), 1);
    }

    #[test]
    fn test_origin_point_in_sector_zero() {
        let layout = PolarLayout::new(60, 180, 0.4);
        let grid = bin_points(&[Point3::new(0.0, 0.0, 1.0)], layout);
        assert_eq!(grid.get(PolarIndex::new(0, 0)).points.len(), 1);
    }

    #[test]
    fn test_binning_location() {
        let layout = PolarLayout::new(60, 180, 0.4);
        // 3.0m straight left: ring 7, sector 45
        let grid = bin_points(&[Point3::new(0.0, 3.0, 0.0)], layout);
        assert_eq!(grid.get(PolarIndex::new(7, 45)).points.len(), 1);
    }
}

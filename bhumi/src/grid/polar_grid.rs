//! Polar cell arena.
//!
//! The whole R×TH grid lives in one contiguous `Vec`, ring-major:
//!
//! ```text
//! index = radial * TH + angular
//!
//! ring 0:  [t0 t1 t2 ... tTH-1]
//! ring 1:  [t0 t1 t2 ... tTH-1]
//!   ...
//! ring R-1 [t0 t1 t2 ... tTH-1]
//! ```
//!
//! A fresh grid is built for every frame, so `drivable`/`visited` never carry
//! state from a previous frame.

use crate::core::{Point3, PolarIndex, PolarLayout};

/// One (ring, sector) cell.
#[derive(Clone, Debug, Default)]
pub struct PolarCell {
    /// Raw points binned into this cell
    pub points: Vec<Point3>,
    /// Cell is judged traversable this frame
    pub drivable: bool,
    /// Cell was already covered by a width-clipping sweep
    pub visited: bool,
}

impl PolarCell {
    /// Cell with room for `capacity` points
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
            drivable: false,
            visited: false,
        }
    }

    /// Vertical extent (max z − min z) of the points in this cell.
    ///
    /// Returns `None` for an empty cell.
    pub fn height_span(&self) -> Option<f32> {
        let first = self.points.first()?;
        let (min_z, max_z) = self
            .points
            .iter()
            .fold((first.z, first.z), |(lo, hi), p| (lo.min(p.z), hi.max(p.z)));
        Some(max_z - min_z)
    }
}

/// Polar occupancy grid for one frame.
#[derive(Clone, Debug)]
pub struct PolarGrid {
    layout: PolarLayout,
    cells: Vec<PolarCell>,
}

impl PolarGrid {
    /// Create an empty grid.
    pub fn new(layout: PolarLayout) -> Self {
        Self::with_density(layout, 0)
    }

    /// Create an empty grid, reserving `per_cell` point slots in every cell.
    pub fn with_density(layout: PolarLayout, per_cell: usize) -> Self {
        let cells = (0..layout.cell_count())
            .map(|_| PolarCell::with_capacity(per_cell))
            .collect();
        Self { layout, cells }
    }

    /// Grid geometry
    #[inline]
    pub fn layout(&self) -> &PolarLayout {
        &self.layout
    }

    #[inline]
    fn offset(&self, radial: usize, angular: usize) -> usize {
        debug_assert!(radial < self.layout.radial_bins());
        debug_assert!(angular < self.layout.angular_bins());
        radial * self.layout.angular_bins() + angular
    }

    /// Cell at (ring, sector)
    #[inline]
    pub fn cell(&self, radial: usize, angular: usize) -> &PolarCell {
        &self.cells[self.offset(radial, angular)]
    }

    /// Mutable cell at (ring, sector)
    #[inline]
    pub fn cell_mut(&mut self, radial: usize, angular: usize) -> &mut PolarCell {
        let offset = self.offset(radial, angular);
        &mut self.cells[offset]
    }

    /// Cell at a polar index
    #[inline]
    pub fn get(&self, index: PolarIndex) -> &PolarCell {
        self.cell(index.radial, index.angular)
    }

    /// Add a point to the cell at `index`.
    #[inline]
    pub fn push(&mut self, index: PolarIndex, point: Point3) {
        self.cell_mut(index.radial, index.angular).points.push(point);
    }

    /// Iterate cells ring by ring with their indices.
    pub fn iter(&self) -> impl Iterator<Item = (PolarIndex, &PolarCell)> {
        let th = self.layout.angular_bins();
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (PolarIndex::new(i / th, i % th), cell))
    }

    /// Total number of points across all cells
    pub fn point_count(&self) -> usize {
        self.cells.iter().map(|c| c.points.len()).sum()
    }

    // =========================================================================
    // DRIVABILITY FLAGS
    // =========================================================================

    /// Whether (ring, sector) is drivable
    #[inline]
    pub fn is_drivable(&self, radial: usize, angular: usize) -> bool {
        self.cell(radial, angular).drivable
    }

    /// Mark the innermost `rings` cells of a sector column drivable.
    pub fn mark_column_drivable(&mut self, angular: usize, rings: usize) {
        let rings = rings.min(self.layout.radial_bins());
        for radial in 0..rings {
            self.cell_mut(radial, angular).drivable = true;
        }
    }

    /// Clear drivability of a sector column from `from_ring` outward.
    pub fn clear_column_from(&mut self, angular: usize, from_ring: usize) {
        for radial in from_ring..self.layout.radial_bins() {
            self.cell_mut(radial, angular).drivable = false;
        }
    }

    /// Number of drivable cells
    pub fn drivable_count(&self) -> usize {
        self.cells.iter().filter(|c| c.drivable).count()
    }

    /// Drivable flag of every cell in arena order.
    pub fn drivable_mask(&self) -> Vec<bool> {
        self.cells.iter().map(|c| c.drivable).collect()
    }
}

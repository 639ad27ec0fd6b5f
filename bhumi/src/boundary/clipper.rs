//! Narrow-passage pruning.
//!
//! For every drivable, unvisited cell at or beyond the minimum clip ring, two
//! cursors sweep sideways along the same ring:
//!
//! ```text
//!            clockwise ◄── t-m ... t-1 [ t ] t+1 ... t+m ──► counter-clockwise
//!
//!   width = a · Δr · Δθ · count
//! ```
//!
//! Each drivable neighbour is marked visited and counted. A cursor closes on
//! the first non-drivable neighbour. If both cursors close before the arc
//! width reaches the minimum passage width, the whole run and every ring
//! beyond it is demoted to non-drivable. A run that reaches the width, or
//! wraps the whole ring, is left alone.

use crate::grid::PolarGrid;

/// One directional scan along a ring.
#[derive(Clone, Copy, Debug)]
struct SweepCursor {
    direction: isize,
    reach: Option<usize>,
}

impl SweepCursor {
    fn new(direction: isize) -> Self {
        Self {
            direction,
            reach: None,
        }
    }

    #[inline]
    fn is_open(&self) -> bool {
        self.reach.is_none()
    }

    #[inline]
    fn column(&self, grid: &PolarGrid, origin: usize, step: usize) -> usize {
        grid.layout().wrap_angular(origin, self.direction * step as isize)
    }

    /// Inspect the neighbour `step` columns away. Returns true if it was
    /// counted into the run.
    fn advance(&mut self, grid: &mut PolarGrid, ring: usize, origin: usize, step: usize) -> bool {
        if !self.is_open() {
            return false;
        }
        let column = self.column(grid, origin, step);
        let cell = grid.cell_mut(ring, column);
        if cell.drivable {
            cell.visited = true;
            true
        } else {
            self.reach = Some(step - 1);
            false
        }
    }

    /// Columns covered by a closed cursor, excluding the origin.
    fn covered(&self, grid: &PolarGrid, origin: usize) -> Vec<usize> {
        (1..=self.reach.unwrap_or(0))
            .map(|m| self.column(grid, origin, m))
            .collect()
    }
}

/// Removes drivable runs narrower than the minimum passage width.
#[derive(Clone, Copy, Debug)]
pub struct WidthClipper {
    min_passage_width: f32,
    min_clip_ring: usize,
}

impl WidthClipper {
    /// Create a clipper. `min_clip_ring` is raised to 1 if zero.
    pub fn new(min_passage_width: f32, min_clip_ring: usize) -> Self {
        Self {
            min_passage_width,
            min_clip_ring: min_clip_ring.max(1),
        }
    }

    /// First ring evaluated
    pub fn min_clip_ring(&self) -> usize {
        self.min_clip_ring
    }

    /// Prune narrow passages in place. Returns the number of demoted cells.
    pub fn clip(&self, grid: &mut PolarGrid) -> usize {
        let layout = *grid.layout();
        let before = grid.drivable_count();
        let arc_per_ring = layout.radial_resolution() * layout.angular_resolution();

        for a in self.min_clip_ring..layout.radial_bins() {
            let cell_arc = a as f32 * arc_per_ring;
            for t in 0..layout.angular_bins() {
                let cell = grid.cell(a, t);
                if !cell.drivable || cell.visited {
                    continue;
                }
                self.sweep(grid, a, t, cell_arc);
            }
        }

        before - grid.drivable_count()
    }

    fn sweep(&self, grid: &mut PolarGrid, ring: usize, origin: usize, cell_arc: f32) {
        let sectors = grid.layout().angular_bins();
        let mut ccw = SweepCursor::new(1);
        let mut cw = SweepCursor::new(-1);
        let mut count = 1usize;
        let mut step = 1usize;

        while cell_arc * (count as f32) < self.min_passage_width && count < sectors {
            if ccw.advance(grid, ring, origin, step) {
                count += 1;
            }
            if cw.advance(grid, ring, origin, step) {
                count += 1;
            }

            if !ccw.is_open() && !cw.is_open() {
                grid.clear_column_from(origin, ring);
                for column in ccw.covered(grid, origin).into_iter().chain(cw.covered(grid, origin)) {
                    grid.clear_column_from(column, ring);
                }
                return;
            }
            step += 1;
        }
    }
}

//! Polar grid to Cartesian cell list.
//!
//! Output cells sit on a uniform grid around the vehicle:
//!
//! ```text
//!   j = +lateral  ┌──────────────────────────┐
//!                 │ . . . . . . . . . . . .  │
//!   j = 0   ──────┼─● . . . . . . . . . . .  │  ● = origin, always emitted
//!                 │ . . . . . . . . . . . .  │
//!   j = -lateral  └──────────────────────────┘
//!               i = -backward          i = +forward
//! ```
//!
//! Each cell is looked up in the polar grid through the shared
//! [`PolarLayout`] conversion and emitted at ground height if that polar cell
//! is drivable. Columns of constant `j` are emitted in turn, `i` ascending
//! within each.
//!
//! With the rear half excluded the sectors straddling ±Y belong to the
//! skipped rear band. Lookups there are nudged one sector forward so the
//! lateral row at `i = 0` still reads a processed sector.

use crate::config::OutputSection;
use crate::core::{Point3, PolarIndex, PolarLayout};
use crate::grid::PolarGrid;

/// Re-projects the drivable polar grid onto the Cartesian output grid.
#[derive(Clone, Copy, Debug)]
pub struct CartesianProjector {
    cell_size: f32,
    lateral_cells: usize,
    forward_cells: usize,
    backward_cells: usize,
}

impl CartesianProjector {
    /// Create from the output config section.
    pub fn new(output: &OutputSection) -> Self {
        Self {
            cell_size: output.cell_size,
            lateral_cells: output.lateral_cells,
            forward_cells: output.forward_cells,
            backward_cells: output.backward_cells,
        }
    }

    /// Output cell edge length (meters)
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Rear half left out of the output
    pub fn excludes_rear(&self) -> bool {
        self.backward_cells == 0
    }

    /// Number of cells in the full output extent.
    pub fn extent(&self) -> usize {
        (2 * self.lateral_cells + 1) * (self.forward_cells + self.backward_cells + 1)
    }

    /// Polar cell that output cell `(i, j)` reads from.
    pub fn resolve(&self, layout: &PolarLayout, i: isize, j: isize) -> PolarIndex {
        let x = self.cell_size * i as f32;
        let y = self.cell_size * j as f32;
        let mut index = layout.index_of(x, y);

        if self.excludes_rear() {
            let quarter = layout.angular_bins() / 4;
            if index.angular == quarter {
                index.angular = quarter - 1;
            } else if index.angular == 3 * quarter - 1 {
                index.angular = 3 * quarter;
            }
        }
        index
    }

    /// Emit every output cell whose polar cell is drivable.
    pub fn project(&self, grid: &PolarGrid, ground_z: f32) -> Vec<Point3> {
        let layout = grid.layout();
        let lateral = self.lateral_cells as isize;
        let forward = self.forward_cells as isize;
        let backward = self.backward_cells as isize;

        let mut cells = Vec::new();
        for j in -lateral..=lateral {
            for i in -backward..=forward {
                if i == 0 && j == 0 {
                    cells.push(Point3::ZERO.with_z(ground_z));
                    continue;
                }
                let index = self.resolve(layout, i, j);
                if grid.get(index).drivable {
                    cells.push(Point3::new(
                        self.cell_size * i as f32,
                        self.cell_size * j as f32,
                        ground_z,
                    ));
                }
            }
        }
        cells
    }
}

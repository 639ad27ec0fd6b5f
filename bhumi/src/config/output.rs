//! Cartesian output grid configuration section.

use serde::{Deserialize, Serialize};

use super::defaults;
use super::error::{ConfigError, nonzero, positive};

/// Output grid extents, in cells of `cell_size`
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OutputSection {
    /// Output cell edge (meters)
    #[serde(default = "defaults::cell_size")]
    pub cell_size: f32,

    /// Cells on each side of the vehicle
    #[serde(default = "defaults::lateral_cells")]
    pub lateral_cells: usize,

    /// Cells ahead of the vehicle
    #[serde(default = "defaults::forward_cells")]
    pub forward_cells: usize,

    /// Cells behind the vehicle (0 = rear half excluded)
    #[serde(default)]
    pub backward_cells: usize,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            cell_size: 0.2,
            lateral_cells: 50,
            forward_cells: 100,
            backward_cells: 0,
        }
    }
}

impl OutputSection {
    /// Whether the rear half-plane is left out of processing.
    pub fn excludes_rear(&self) -> bool {
        self.backward_cells == 0
    }

    /// Number of cells the projector visits per frame.
    pub fn cell_count(&self) -> usize {
        (2 * self.lateral_cells + 1) * (self.forward_cells + self.backward_cells + 1)
    }

    pub(super) fn validate(&self) -> Result<(), ConfigError> {
        positive("output.cell_size", self.cell_size)?;
        nonzero("output.lateral_cells", self.lateral_cells)?;
        nonzero("output.forward_cells", self.forward_cells)
    }
}

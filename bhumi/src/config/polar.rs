//! Polar grid configuration section.

use serde::{Deserialize, Serialize};

use crate::core::PolarLayout;

use super::defaults;
use super::error::{ConfigError, nonzero, positive};

/// Polar grid resolution
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PolarSection {
    /// Number of radial rings (R)
    #[serde(default = "defaults::radial_bins")]
    pub radial_bins: usize,

    /// Number of angular sectors (TH)
    #[serde(default = "defaults::angular_bins")]
    pub angular_bins: usize,

    /// Ring width (meters)
    #[serde(default = "defaults::radial_resolution")]
    pub radial_resolution: f32,
}

impl Default for PolarSection {
    fn default() -> Self {
        Self {
            radial_bins: 60,
            angular_bins: 180,
            radial_resolution: 0.4,
        }
    }
}

impl PolarSection {
    /// Convert to the runtime layout
    pub fn to_layout(&self) -> PolarLayout {
        PolarLayout::new(self.radial_bins, self.angular_bins, self.radial_resolution)
    }

    /// Outer radius covered by the grid (meters)
    pub fn max_radius(&self) -> f32 {
        self.radial_bins as f32 * self.radial_resolution
    }

    pub(super) fn validate(&self) -> Result<(), ConfigError> {
        nonzero("polar.radial_bins", self.radial_bins)?;
        nonzero("polar.angular_bins", self.angular_bins)?;
        positive("polar.radial_resolution", self.radial_resolution)
    }
}

//! Ground segmentation configuration section.

use serde::{Deserialize, Serialize};

use crate::ground::RansacConfig;

use super::defaults;
use super::error::{ConfigError, nonzero, positive};

/// Ground/obstacle split settings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GroundSection {
    /// Max height span inside one polar cell for its points to count as
    /// ground candidates (meters)
    #[serde(default = "defaults::height_threshold")]
    pub height_threshold: f32,

    /// Plane-fit inlier distance (meters)
    #[serde(default = "defaults::plane_tolerance")]
    pub plane_tolerance: f32,

    /// RANSAC iterations
    #[serde(default = "defaults::max_iterations")]
    pub max_iterations: usize,

    /// RANSAC seed (0 = entropy)
    #[serde(default)]
    pub seed: u64,
}

impl Default for GroundSection {
    fn default() -> Self {
        Self {
            height_threshold: 0.15,
            plane_tolerance: 0.2,
            max_iterations: 500,
            seed: 0,
        }
    }
}

impl GroundSection {
    /// Convert to RansacConfig
    pub fn to_ransac_config(&self) -> RansacConfig {
        RansacConfig::new()
            .with_max_iterations(self.max_iterations)
            .with_seed(self.seed)
    }

    pub(super) fn validate(&self) -> Result<(), ConfigError> {
        positive("ground.height_threshold", self.height_threshold)?;
        positive("ground.plane_tolerance", self.plane_tolerance)?;
        nonzero("ground.max_iterations", self.max_iterations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ransac_config_from_section() {
        let section = GroundSection {
            max_iterations: 120,
            seed: 9,
            ..GroundSection::default()
        };
        let ransac = section.to_ransac_config();
        assert_eq!(ransac.max_iterations, 120);
        assert_eq!(ransac.seed, 9);
        assert!(ransac.refine);
    }
}

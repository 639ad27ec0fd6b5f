//! Passage clearance configuration section.

use serde::{Deserialize, Serialize};

use super::defaults;
use super::error::{ConfigError, non_negative, positive};

/// Narrow-passage pruning settings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ClearanceSection {
    /// Narrowest corridor the vehicle may enter (meters)
    #[serde(default = "defaults::min_passage_width")]
    pub min_passage_width: f32,

    /// Rings closer than this are never pruned (meters)
    ///
    /// The first clipped ring is `floor(min_clip_radius / radial_resolution)`
    /// in f32: ring 4 for the defaults, one ring further out than the ROS
    /// `lidar_grid` node, which rounds down to ring 3.
    #[serde(default = "defaults::min_clip_radius")]
    pub min_clip_radius: f32,
}

impl Default for ClearanceSection {
    fn default() -> Self {
        Self {
            min_passage_width: 1.7,
            min_clip_radius: 1.6,
        }
    }
}

impl ClearanceSection {
    pub(super) fn validate(&self) -> Result<(), ConfigError> {
        positive("clearance.min_passage_width", self.min_passage_width)?;
        non_negative("clearance.min_clip_radius", self.min_clip_radius)
    }
}

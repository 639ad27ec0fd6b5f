//! Proximity sensor configuration section.

use serde::{Deserialize, Serialize};

use crate::core::SENSORS_PER_SIDE;

use super::defaults;
use super::error::{ConfigError, non_negative, positive};

/// Side ultrasonic geometry
///
/// Both sides share the same longitudinal mounts; the left array is mirrored
/// to the right.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProximitySection {
    /// Longitudinal mount position of each sensor, front to back (meters)
    #[serde(default = "defaults::mount_offsets")]
    pub mount_offsets: [f32; SENSORS_PER_SIDE],

    /// Lateral distance from the vehicle axis to the sensor face (meters)
    #[serde(default = "defaults::lateral_baseline")]
    pub lateral_baseline: f32,

    /// Readings at or beyond this range are ignored (meters)
    #[serde(default = "defaults::proximity_max_range")]
    pub max_range: f32,
}

impl Default for ProximitySection {
    fn default() -> Self {
        Self {
            mount_offsets: [0.9, 0.65, -0.3, -1.05],
            lateral_baseline: 0.75,
            max_range: 5.0,
        }
    }
}

impl ProximitySection {
    pub(super) fn validate(&self) -> Result<(), ConfigError> {
        if self.mount_offsets.iter().any(|x| !x.is_finite()) {
            return Err(ConfigError::NonFinite {
                field: "proximity.mount_offsets",
            });
        }
        non_negative("proximity.lateral_baseline", self.lateral_baseline)?;
        positive("proximity.max_range", self.max_range)
    }
}

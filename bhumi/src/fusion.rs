//! Proximity sensor fusion.
//!
//! Each valid side reading becomes one synthetic obstacle point at ground
//! level, placed at the sensor's longitudinal mount offset and pushed out
//! laterally by the vehicle half-width plus the measured range:
//!
//! ```text
//!   left  i: ( offset[i],  baseline + left[i],  0 )
//!   right i: ( offset[i], -baseline - right[i], 0 )
//! ```
//!
//! Points are appended per sensor index, left before right.

use crate::config::ProximitySection;
use crate::core::{Point3, ProximityReadings, SENSORS_PER_SIDE, Side};

/// Converts side proximity ranges into obstacle points.
#[derive(Clone, Debug)]
pub struct ProximityFuser {
    mount_offsets: [f32; SENSORS_PER_SIDE],
    lateral_baseline: f32,
    max_range: f32,
}

impl Default for ProximityFuser {
    fn default() -> Self {
        Self::new(&ProximitySection::default())
    }
}

impl ProximityFuser {
    /// Create from the sensor config section.
    pub fn new(config: &ProximitySection) -> Self {
        Self {
            mount_offsets: config.mount_offsets,
            lateral_baseline: config.lateral_baseline,
            max_range: config.max_range,
        }
    }

    /// Synthetic point for one reading, or `None` if the range is unusable.
    pub fn synthesize(&self, side: Side, sensor: usize, range: f32) -> Option<Point3> {
        if sensor >= SENSORS_PER_SIDE || !ProximityReadings::is_valid_range(range, self.max_range)
        {
            return None;
        }
        let y = side.sign() * (self.lateral_baseline + range);
        Some(Point3::new(self.mount_offsets[sensor], y, 0.0))
    }

    /// Append synthetic points for every valid reading.
    ///
    /// Returns the number of points added.
    pub fn fuse(&self, readings: &ProximityReadings, obstacles: &mut Vec<Point3>) -> usize {
        let before = obstacles.len();
        obstacles.reserve(readings.valid_count(self.max_range));
        for i in 0..SENSORS_PER_SIDE {
            for side in [Side::Left, Side::Right] {
                if let Some(p) = self.synthesize(side, i, readings.side(side)[i]) {
                    obstacles.push(p);
                }
            }
        }
        obstacles.len() - before
    }
}

//! Point type for lidar returns and emitted grid cells.

use serde::{Deserialize, Serialize};

/// A 3D point in the vehicle frame (meters).
///
/// REP-103 axes: +X forward, +Y left, +Z up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point3 {
    /// Forward coordinate
    pub x: f32,
    /// Left coordinate
    pub y: f32,
    /// Up coordinate
    pub z: f32,
}

impl Point3 {
    /// The sensor origin.
    pub const ZERO: Point3 = Point3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Create a new point
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Horizontal distance from the sensor axis.
    #[inline]
    pub fn planar_range(&self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Manhattan distance in the XY plane.
    ///
    /// Used as the nearest-obstacle score when searching a sector.
    #[inline]
    pub fn manhattan_xy(&self) -> f32 {
        self.x.abs() + self.y.abs()
    }

    /// Same point moved to a different height.
    #[inline]
    pub fn with_z(self, z: f32) -> Self {
        Self { z, ..self }
    }

    /// True if every coordinate is finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl From<[f32; 3]> for Point3 {
    fn from(p: [f32; 3]) -> Self {
        Self::new(p[0], p[1], p[2])
    }
}

impl From<(f32, f32, f32)> for Point3 {
    fn from((x, y, z): (f32, f32, f32)) -> Self {
        Self::new(x, y, z)
    }
}

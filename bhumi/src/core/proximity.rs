//! Side proximity (ultrasonic) readings.
//!
//! ## Sensor Layout
//!
//! ```text
//!              Front (+X)
//!          ┌───────────────┐
//!     L0 ──┤               ├── R0   x = 0.90
//!     L1 ──┤               ├── R1   x = 0.65
//!          │     LIDAR     │
//!     L2 ──┤               ├── R2   x = -0.30
//!     L3 ──┤               ├── R3   x = -1.05
//!          └───────────────┘
//!               Back
//! ```
//!
//! Each side publishes four ranges at its own rate. Frame processing must see
//! one consistent set, so the live values sit behind a lock in
//! [`ProximityBuffer`] and the pipeline only ever works on a copied
//! [`ProximityReadings`] snapshot.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

/// Number of proximity sensors per side.
pub const SENSORS_PER_SIDE: usize = 4;

/// Vehicle side a sensor is mounted on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    /// +Y
    Left,
    /// -Y
    Right,
}

impl Side {
    /// Sign of the lateral axis on this side.
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Side::Left => 1.0,
            Side::Right => -1.0,
        }
    }
}

/// One consistent set of proximity ranges (meters).
///
/// Zero, negative, non-finite or out-of-range values mean "no echo".
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProximityReadings {
    /// Left side, front to back
    pub left: [f32; SENSORS_PER_SIDE],
    /// Right side, front to back
    pub right: [f32; SENSORS_PER_SIDE],
}

impl ProximityReadings {
    /// Readings with no valid echo on any sensor.
    pub const NONE: ProximityReadings = ProximityReadings {
        left: [0.0; SENSORS_PER_SIDE],
        right: [0.0; SENSORS_PER_SIDE],
    };

    /// Create from both sides
    pub fn new(left: [f32; SENSORS_PER_SIDE], right: [f32; SENSORS_PER_SIDE]) -> Self {
        Self { left, right }
    }

    /// Ranges for one side
    #[inline]
    pub fn side(&self, side: Side) -> &[f32; SENSORS_PER_SIDE] {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    /// Whether a single range is usable under the given maximum.
    #[inline]
    pub fn is_valid_range(range: f32, max_range: f32) -> bool {
        range.is_finite() && range > 0.0 && range < max_range
    }

    /// Number of usable readings across both sides.
    pub fn valid_count(&self, max_range: f32) -> usize {
        self.left
            .iter()
            .chain(self.right.iter())
            .filter(|&&r| Self::is_valid_range(r, max_range))
            .count()
    }
}

/// Shared, lock-protected proximity state.
///
/// Sensor callbacks write through [`update_left`](Self::update_left) and
/// [`update_right`](Self::update_right); the frame pipeline reads once per
/// frame through [`snapshot`](Self::snapshot).
#[derive(Debug, Default)]
pub struct ProximityBuffer {
    readings: RwLock<ProximityReadings>,
}

impl ProximityBuffer {
    /// Create an empty buffer (no valid echoes)
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the left-side ranges.
    pub fn update_left(&self, ranges: [f32; SENSORS_PER_SIDE]) {
        self.readings.write().left = ranges;
    }

    /// Replace the right-side ranges.
    pub fn update_right(&self, ranges: [f32; SENSORS_PER_SIDE]) {
        self.readings.write().right = ranges;
    }

    /// Replace one side's ranges.
    pub fn update(&self, side: Side, ranges: [f32; SENSORS_PER_SIDE]) {
        match side {
            Side::Left => self.update_left(ranges),
            Side::Right => self.update_right(ranges),
        }
    }

    /// Copy of both sides taken under a single lock.
    pub fn snapshot(&self) -> ProximityReadings {
        *self.readings.read()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_default_has_no_valid_readings() {
        let buffer = ProximityBuffer::new();
        assert_eq!(buffer.snapshot(), ProximityReadings::NONE);
        assert_eq!(buffer.snapshot().valid_count(5.0), 0);
    }

    #[test]
    fn test_range_validity() {
        assert!(ProximityReadings::is_valid_range(1.0, 5.0));
        assert!(!ProximityReadings::is_valid_range(0.0, 5.0));
        assert!(!ProximityReadings::is_valid_range(-1.0, 5.0));
        assert!(!ProximityReadings::is_valid_range(5.0, 5.0));
        assert!(!ProximityReadings::is_valid_range(f32::NAN, 5.0));
        assert!(!ProximityReadings::is_valid_range(f32::INFINITY, 5.0));
    }

    #[test]
    fn test_updates_per_side() {
        let buffer = ProximityBuffer::new();
        buffer.update_left([1.0, 0.0, 0.0, 0.0]);
        buffer.update(Side::Right, [0.0, 2.0, 0.0, 6.0]);

        let snap = buffer.snapshot();
        assert_eq!(snap.side(Side::Left), &[1.0, 0.0, 0.0, 0.0]);
        assert_eq!(snap.side(Side::Right), &[0.0, 2.0, 0.0, 6.0]);
        assert_eq!(snap.valid_count(5.0), 2);
    }

    #[test]
    fn test_snapshot_never_tears() {
        // Writers always store four identical values per side; a torn read
        // would show mixed values within one side.
        let buffer = Arc::new(ProximityBuffer::new());
        let writers: Vec<_> = [Side::Left, Side::Right]
            .into_iter()
            .map(|side| {
                let buffer = Arc::clone(&buffer);
                thread::spawn(move || {
                    for i in 0..2000 {
                        let v = (i % 50) as f32 * 0.1;
                        buffer.update(side, [v; SENSORS_PER_SIDE]);
                    }
                })
            })
            .collect();

        for _ in 0..2000 {
            let snap = buffer.snapshot();
            assert!(snap.left.iter().all(|&r| r == snap.left[0]));
            assert!(snap.right.iter().all(|&r| r == snap.right[0]));
        }

        for w in writers {
            w.join().unwrap();
        }
    }
}

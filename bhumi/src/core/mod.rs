//! Core types shared by every pipeline stage.
//!
//! All types follow the ROS REP-103 coordinate convention:
//! - **X-axis**: Forward (positive ahead of vehicle)
//! - **Y-axis**: Left (positive to vehicle's left)
//! - **Z-axis**: Up
//!
//! ## Type Categories
//!
//! ### Coordinates
//! - [`Point3`]: Lidar return or output cell in meters
//! - [`PolarIndex`]: (ring, sector) cell address in the polar grid
//! - [`PolarLayout`]: Ring/sector geometry and the shared index conversion
//!
//! ### Sensors
//! - [`ProximityReadings`]: One consistent set of side ultrasonic ranges
//! - [`ProximityBuffer`]: Lock-protected live readings with snapshot access

mod point;
mod polar;
mod proximity;

pub use point::Point3;
pub use polar::{PolarIndex, PolarLayout};
pub use proximity::{ProximityBuffer, ProximityReadings, SENSORS_PER_SIDE, Side};

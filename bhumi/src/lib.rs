//! # Bhumi
//!
//! Per-frame drivable terrain extraction from 3D lidar and side proximity
//! sensors.
//!
//! ## Overview
//!
//! Each lidar frame is turned into a vehicle-centered list of drivable ground
//! cells:
//!
//! - **Polar binning** - points bucketed into R rings × TH sectors
//! - **Ground split** - per-cell height span filter refined by a plane fit
//! - **Proximity fusion** - side ultrasonic echoes added as obstacles
//! - **Sector boundary** - each sector is drivable up to its nearest obstacle
//! - **Width clipping** - passages narrower than the vehicle are removed
//! - **Cartesian output** - drivable cells on a uniform grid at ground height
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use bhumi::{ProximityReadings, TerrainConfig, TerrainMapper};
//!
//! let config = TerrainConfig::load_default()?;
//! let mapper = TerrainMapper::new(config)?;
//!
//! let map = mapper.process(&points, &ProximityReadings::NONE)?;
//! println!("{} drivable cells at z={:.2}", map.cells.len(), map.ground_z);
//! ```
//!
//! ## Coordinate System
//!
//! Uses ROS REP-103 convention:
//! - X: Forward (positive ahead of vehicle)
//! - Y: Left (positive to vehicle's left)
//! - Z: Up

#![warn(missing_docs)]

// Core types
pub mod core;

// Polar grid storage and binning
pub mod grid;

// Ground segmentation and plane fitting
pub mod ground;

// Proximity sensor fusion
pub mod fusion;

// Boundary extraction and width clipping
pub mod boundary;

// Cartesian re-projection
pub mod projection;

// Frame orchestration
pub mod pipeline;

// Unified configuration
pub mod config;

// Frame errors
pub mod error;

// Re-export commonly used types
pub use crate::core::{Point3, PolarIndex, PolarLayout, ProximityBuffer, ProximityReadings, Side};

pub use config::{ConfigError, ConfigLoadError, TerrainConfig};
pub use error::{FrameError, GroundFailure};
pub use ground::{PlaneFit, PlaneFitError, PlaneFitter, PlaneModel, RansacConfig, RansacPlaneFitter};
pub use pipeline::{DrivableMap, FrameStats, TerrainMapper};

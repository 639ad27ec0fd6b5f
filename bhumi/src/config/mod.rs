//! Configuration loading for Bhumi.
//!
//! Loads all configuration from a single YAML file with sensible defaults.
//! Every field is optional; missing fields take the values below.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use bhumi::config::TerrainConfig;
//!
//! // Load from default path (configs/bhumi.yaml)
//! let config = TerrainConfig::load_default()?;
//!
//! // Or use built-in defaults (no file needed)
//! let config = TerrainConfig::default();
//! ```
//!
//! ## Configuration Sections
//!
//! | Section | Description |
//! |---------|-------------|
//! | [`PolarSection`] | Ring/sector counts and ring width |
//! | [`GroundSection`] | Height-span threshold, plane-fit tolerance |
//! | [`ClearanceSection`] | Minimum passage width for pruning |
//! | [`OutputSection`] | Cartesian output grid extents |
//! | [`ProximitySection`] | Side ultrasonic mount geometry |
//!
//! ## Example YAML
//!
//! ```yaml
//! frame_id: velodyne
//! polar:
//!   radial_bins: 60          # 24m at 0.4m rings
//!   angular_bins: 180        # 2° sectors
//!   radial_resolution: 0.4
//! ground:
//!   height_threshold: 0.15
//!   plane_tolerance: 0.2
//! clearance:
//!   min_passage_width: 1.7
//! output:
//!   cell_size: 0.2
//!   lateral_cells: 50
//!   forward_cells: 100
//!   backward_cells: 0        # rear half excluded
//! ```

mod clearance;
mod defaults;
mod error;
mod ground;
mod output;
mod polar;
mod sensor;
mod terrain;

// Re-export main types
pub use error::{ConfigError, ConfigLoadError};
pub use terrain::{DEFAULT_CONFIG_PATH, TerrainConfig};

// Re-export section types
pub use clearance::ClearanceSection;
pub use ground::GroundSection;
pub use output::OutputSection;
pub use polar::PolarSection;
pub use sensor::ProximitySection;

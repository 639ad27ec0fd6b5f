//! Main TerrainConfig, loading and validation.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::clearance::ClearanceSection;
use super::defaults;
use super::error::{ConfigError, ConfigLoadError};
use super::ground::GroundSection;
use super::output::OutputSection;
use super::polar::PolarSection;
use super::sensor::ProximitySection;

/// Default location searched by [`TerrainConfig::load_default`].
pub const DEFAULT_CONFIG_PATH: &str = "configs/bhumi.yaml";

/// Full Bhumi configuration loaded from YAML
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TerrainConfig {
    /// Frame label attached to every output map
    #[serde(default = "defaults::frame_id")]
    pub frame_id: String,

    /// Polar grid settings
    #[serde(default)]
    pub polar: PolarSection,

    /// Ground segmentation settings
    #[serde(default)]
    pub ground: GroundSection,

    /// Narrow passage pruning settings
    #[serde(default)]
    pub clearance: ClearanceSection,

    /// Output grid settings
    #[serde(default)]
    pub output: OutputSection,

    /// Side proximity sensor settings
    #[serde(default)]
    pub proximity: ProximitySection,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            frame_id: defaults::frame_id(),
            polar: PolarSection::default(),
            ground: GroundSection::default(),
            clearance: ClearanceSection::default(),
            output: OutputSection::default(),
            proximity: ProximitySection::default(),
        }
    }
}

impl TerrainConfig {
    /// Load and validate configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_yaml(&contents)?;
        log::info!("Loaded terrain configuration from {}", path.display());
        Ok(config)
    }

    /// Load from default config path (configs/bhumi.yaml), falling back to
    /// built-in defaults when the file is absent
    pub fn load_default() -> Result<Self, ConfigLoadError> {
        let path = Path::new(DEFAULT_CONFIG_PATH);
        if path.exists() {
            Self::load(path)
        } else {
            log::info!("No {} found, using default configuration", DEFAULT_CONFIG_PATH);
            Ok(Self::default())
        }
    }

    /// Parse and validate from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to YAML
    pub fn to_yaml(&self) -> Result<String, ConfigLoadError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Check every parameter the pipeline depends on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.polar.validate()?;
        self.ground.validate()?;
        self.clearance.validate()?;
        self.output.validate()?;
        self.proximity.validate()?;

        if self.output.excludes_rear() && self.polar.angular_bins % 4 != 0 {
            return Err(ConfigError::SectorsNotQuarterAligned {
                angular_bins: self.polar.angular_bins,
            });
        }
        Ok(())
    }

    /// Whether the rear half-plane is left out of processing
    pub fn excludes_rear(&self) -> bool {
        self.output.excludes_rear()
    }

    /// First ring the width clipper evaluates.
    ///
    /// Never ring 0: a corridor there has zero width and cannot be measured.
    pub fn min_clip_ring(&self) -> usize {
        let ring = (self.clearance.min_clip_radius / self.polar.radial_resolution).floor() as usize;
        ring.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TerrainConfig::default();
        assert_eq!(config.frame_id, "velodyne");
        assert_eq!(config.polar.radial_bins, 60);
        assert_eq!(config.polar.angular_bins, 180);
        assert_eq!(config.polar.radial_resolution, 0.4);
        assert_eq!(config.output.cell_size, 0.2);
        assert_eq!(config.ground.height_threshold, 0.15);
        assert_eq!(config.clearance.min_passage_width, 1.7);
        assert_eq!(config.output.lateral_cells, 50);
        assert_eq!(config.output.forward_cells, 100);
        assert_eq!(config.output.backward_cells, 0);
        assert_eq!(config.ground.plane_tolerance, 0.2);
        assert_eq!(config.ground.max_iterations, 500);
        assert!(config.excludes_rear());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_min_clip_ring() {
        let config = TerrainConfig::default();
        assert_eq!(config.min_clip_ring(), 4);

        let mut config = TerrainConfig::default();
        config.clearance.min_clip_radius = 0.0;
        assert_eq!(config.min_clip_ring(), 1);
    }

    #[test]
    fn test_yaml_roundtrip() {
        let config = TerrainConfig::default();
        let yaml = config.to_yaml().unwrap();
        let parsed = TerrainConfig::from_yaml(&yaml).unwrap();
        assert_eq!(parsed.polar.angular_bins, config.polar.angular_bins);
        assert_eq!(parsed.proximity.mount_offsets, config.proximity.mount_offsets);
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let yaml = "polar:\n  radial_bins: 30\noutput:\n  backward_cells: 20\n";
        let config = TerrainConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.polar.radial_bins, 30);
        assert_eq!(config.polar.angular_bins, 180);
        assert_eq!(config.output.backward_cells, 20);
        assert!(!config.excludes_rear());
        assert_eq!(config.proximity.max_range, 5.0);
    }

    #[test]
    fn test_rear_exclusion_needs_quarter_sectors() {
        let mut config = TerrainConfig::default();
        config.polar.angular_bins = 90;
        assert_eq!(
            config.validate(),
            Err(ConfigError::SectorsNotQuarterAligned { angular_bins: 90 })
        );

        // Fine once the rear half is processed
        config.output.backward_cells = 10;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_non_positive_parameters() {
        let mut config = TerrainConfig::default();
        config.polar.radial_bins = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ZeroCount { field: "polar.radial_bins" })
        ));

        let mut config = TerrainConfig::default();
        config.polar.radial_resolution = -0.4;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotPositive { .. })
        ));

        let mut config = TerrainConfig::default();
        config.output.cell_size = f32::NAN;
        assert!(config.validate().is_err());

        let mut config = TerrainConfig::default();
        config.output.forward_cells = 0;
        assert!(config.validate().is_err());

        let mut config = TerrainConfig::default();
        config.clearance.min_clip_radius = -1.0;
        assert!(matches!(config.validate(), Err(ConfigError::Negative { .. })));

        let mut config = TerrainConfig::default();
        config.proximity.mount_offsets[2] = f32::INFINITY;
        assert!(matches!(config.validate(), Err(ConfigError::NonFinite { .. })));
    }

    #[test]
    fn test_invalid_yaml_reports_validation_error() {
        let yaml = "ground:\n  plane_tolerance: 0.0\n";
        let err = TerrainConfig::from_yaml(yaml).unwrap_err();
        assert!(matches!(err, ConfigLoadError::Invalid(_)));
    }

    #[test]
    fn test_malformed_yaml_reports_parse_error() {
        let err = TerrainConfig::from_yaml("polar: [1, 2").unwrap_err();
        assert!(matches!(err, ConfigLoadError::Parse(_)));
    }
}

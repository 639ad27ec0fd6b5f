//! Per-frame terrain pipeline.
//!
//! # Pipeline
//!
//! ```text
//! points + proximity snapshot
//!       │
//!       ▼
//! ┌──────────────────┐
//! │  Polar binning   │  R × TH cells, every point kept
//! └────────┬─────────┘
//!          ▼
//! ┌──────────────────┐
//! │  Ground split    │  height span + plane fit → ground_z
//! └────────┬─────────┘
//!          ▼
//! ┌──────────────────┐
//! │ Proximity fusion │  synthetic side obstacles
//! └────────┬─────────┘
//!          ▼
//! ┌──────────────────┐
//! │ Sector boundary  │  drivable up to nearest obstacle
//! └────────┬─────────┘
//!          ▼
//! ┌──────────────────┐
//! │  Width clipping  │  drop passages narrower than the vehicle
//! └────────┬─────────┘
//!          ▼
//! ┌──────────────────┐
//! │ Cartesian output │  drivable cells at ground_z
//! └──────────────────┘
//! ```
//!
//! Frames are independent: every call builds its own grid and nothing is
//! carried over. A frame that cannot establish ground fails as a whole.

use std::borrow::Cow;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::boundary::{BoundaryPoint, SectorBoundaryExtractor, WidthClipper};
use crate::config::{ConfigError, TerrainConfig};
use crate::core::{Point3, ProximityBuffer, ProximityReadings};
use crate::error::{FrameError, GroundFailure, Result};
use crate::fusion::ProximityFuser;
use crate::grid::{ObstacleSectors, bin_points};
use crate::ground::{PlaneFitter, RansacPlaneFitter, split_ground};
use crate::projection::CartesianProjector;

/// Per-frame counters.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameStats {
    /// Points in the input frame
    pub input_points: usize,
    /// Input points dropped for a NaN or infinite coordinate
    pub non_finite_points: usize,
    /// Points that passed the height-span filter
    pub ground_candidates: usize,
    /// Plane-fit inliers
    pub ground_points: usize,
    /// Obstacle points, synthetic ones included
    pub obstacle_points: usize,
    /// Points added from proximity readings
    pub proximity_points: usize,
    /// Drivable polar cells after boundary extraction
    pub drivable_cells: usize,
    /// Polar cells demoted by width clipping
    pub clipped_cells: usize,
    /// Cartesian cells emitted
    pub emitted_cells: usize,
}

/// Output of one processed frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DrivableMap {
    /// Coordinate frame label
    pub frame_id: String,
    /// Output cell edge length (meters)
    pub cell_size: f32,
    /// Drivable cell centers, all at `ground_z`
    pub cells: Vec<Point3>,
    /// Mean ground elevation
    pub ground_z: f32,
    /// Fitted ground plane `[a, b, c, d]`
    pub ground_plane: [f32; 4],
    /// One boundary point per processed sector
    pub boundary: Vec<BoundaryPoint>,
    /// Wall-clock processing time (milliseconds)
    pub elapsed_ms: f32,
    /// Frame counters
    pub stats: FrameStats,
}

/// Runs the terrain pipeline on one frame at a time.
#[derive(Debug)]
pub struct TerrainMapper<F: PlaneFitter = RansacPlaneFitter> {
    config: TerrainConfig,
    fitter: F,
    fuser: ProximityFuser,
    extractor: SectorBoundaryExtractor,
    clipper: WidthClipper,
    projector: CartesianProjector,
}

impl TerrainMapper<RansacPlaneFitter> {
    /// Create a mapper with the RANSAC plane fitter.
    pub fn new(config: TerrainConfig) -> std::result::Result<Self, ConfigError> {
        let fitter = RansacPlaneFitter::new(config.ground.to_ransac_config());
        Self::with_fitter(config, fitter)
    }
}

impl<F: PlaneFitter> TerrainMapper<F> {
    /// Create a mapper with a custom plane fitter.
    pub fn with_fitter(config: TerrainConfig, fitter: F) -> std::result::Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            fuser: ProximityFuser::new(&config.proximity),
            extractor: SectorBoundaryExtractor::new(config.excludes_rear()),
            clipper: WidthClipper::new(config.clearance.min_passage_width, config.min_clip_ring()),
            projector: CartesianProjector::new(&config.output),
            config,
            fitter,
        })
    }

    /// Active configuration
    pub fn config(&self) -> &TerrainConfig {
        &self.config
    }

    /// Plane fitter in use
    pub fn fitter(&self) -> &F {
        &self.fitter
    }

    /// Process a frame, reading proximity once from a shared buffer.
    pub fn process_with_buffer(
        &self,
        points: &[Point3],
        proximity: &ProximityBuffer,
    ) -> Result<DrivableMap> {
        let readings = proximity.snapshot();
        self.process(points, &readings)
    }

    /// Process one frame.
    pub fn process(&self, points: &[Point3], proximity: &ProximityReadings) -> Result<DrivableMap> {
        let start = Instant::now();

        match self.run(points, proximity) {
            Ok(mut map) => {
                map.elapsed_ms = start.elapsed().as_secs_f32() * 1000.0;
                let s = &map.stats;
                log::debug!(
                    "[TerrainMapper] {} pts ({} non-finite), ground {}/{} (z={:.3}), obstacles {} (+{} proximity), \
                     drivable {} (-{} clipped), emitted {} in {:.2}ms",
                    s.input_points,
                    s.non_finite_points,
                    s.ground_points,
                    s.ground_candidates,
                    map.ground_z,
                    s.obstacle_points,
                    s.proximity_points,
                    s.drivable_cells,
                    s.clipped_cells,
                    s.emitted_cells,
                    map.elapsed_ms
                );
                Ok(map)
            }
            Err(e) => {
                log::warn!("[TerrainMapper] frame dropped ({} pts): {}", points.len(), e);
                Err(e)
            }
        }
    }

    fn run(&self, points: &[Point3], proximity: &ProximityReadings) -> Result<DrivableMap> {
        let non_finite_points = points.iter().filter(|p| !p.is_finite()).count();
        let finite: Cow<'_, [Point3]> = if non_finite_points == 0 {
            Cow::Borrowed(points)
        } else {
            Cow::Owned(points.iter().copied().filter(Point3::is_finite).collect())
        };
        if finite.is_empty() {
            return Err(FrameError::from(GroundFailure::EmptyFrame));
        }

        let layout = self.config.polar.to_layout();
        let mut grid = bin_points(&finite, layout);

        let ground = &self.config.ground;
        let split = split_ground(&grid, ground.height_threshold, ground.plane_tolerance, &self.fitter)?;

        let mut obstacles = split.obstacles;
        let proximity_points = self.fuser.fuse(proximity, &mut obstacles);
        let sectors = ObstacleSectors::from_points(&obstacles, &layout, self.config.excludes_rear());

        let boundary = self.extractor.extract(&mut grid, &sectors, split.ground_z);
        let drivable_cells = grid.drivable_count();
        let clipped_cells = self.clipper.clip(&mut grid);

        let cells = self.projector.project(&grid, split.ground_z);

        let stats = FrameStats {
            input_points: points.len(),
            non_finite_points,
            ground_candidates: split.candidate_count,
            ground_points: split.ground.len(),
            obstacle_points: obstacles.len(),
            proximity_points,
            drivable_cells,
            clipped_cells,
            emitted_cells: cells.len(),
        };

        Ok(DrivableMap {
            frame_id: self.config.frame_id.clone(),
            cell_size: self.projector.cell_size(),
            cells,
            ground_z: split.ground_z,
            ground_plane: split.plane.coefficients(),
            boundary,
            elapsed_ms: 0.0,
            stats,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_config() -> TerrainConfig {
        let mut config = TerrainConfig::default();
        config.ground.seed = 11;
        config
    }

    fn flat_disc(z: f32) -> Vec<Point3> {
        (1..=40)
            .flat_map(|r| {
                (0..180).map(move |deg| {
                    let a = (deg as f32 * 2.0 + 1.0).to_radians();
                    let range = r as f32 * 0.5;
                    Point3::new(range * a.cos(), range * a.sin(), z)
                })
            })
            .collect()
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = TerrainConfig::default();
        config.polar.angular_bins = 182;
        let err = TerrainMapper::new(config).unwrap_err();
        assert_eq!(err, ConfigError::SectorsNotQuarterAligned { angular_bins: 182 });
    }

    #[test]
    fn test_empty_frame_fails() {
        let mapper = TerrainMapper::new(seeded_config()).unwrap();
        let err = mapper.process(&[], &ProximityReadings::NONE).unwrap_err();
        assert_eq!(err.ground_failure(), &GroundFailure::EmptyFrame);
    }

    #[test]
    fn test_flat_frame_output() {
        let mapper = TerrainMapper::new(seeded_config()).unwrap();
        let points = flat_disc(-1.0);
        let map = mapper.process(&points, &ProximityReadings::NONE).unwrap();

        assert_eq!(map.frame_id, "velodyne");
        assert_eq!(map.cell_size, 0.2);
        assert!((map.ground_z + 1.0).abs() < 1e-5);
        assert_eq!(map.boundary.len(), 90);
        assert_eq!(map.stats.input_points, points.len());
        assert_eq!(map.stats.ground_points, points.len());
        assert_eq!(map.stats.clipped_cells, 0);
        assert_eq!(map.stats.emitted_cells, map.cells.len());
        assert!(map.cells.iter().all(|c| c.z == map.ground_z));
        assert!(map.elapsed_ms >= 0.0);
    }

    #[test]
    fn test_all_non_finite_frame_is_empty() {
        let mapper = TerrainMapper::new(seeded_config()).unwrap();
        let points = [
            Point3::new(f32::NAN, 1.0, 0.0),
            Point3::new(2.0, f32::INFINITY, 0.0),
            Point3::new(3.0, 0.0, f32::NEG_INFINITY),
        ];
        let err = mapper.process(&points, &ProximityReadings::NONE).unwrap_err();
        assert_eq!(err.ground_failure(), &GroundFailure::EmptyFrame);
    }

    #[test]
    fn test_buffer_snapshot_used() {
        let mapper = TerrainMapper::new(seeded_config()).unwrap();
        let buffer = ProximityBuffer::new();
        buffer.update_left([1.0, 0.0, 0.0, 0.0]);
        buffer.update_right([0.0, 2.0, 0.0, 0.0]);

        let map = mapper.process_with_buffer(&flat_disc(0.0), &buffer).unwrap();
        assert_eq!(map.stats.proximity_points, 2);
        assert_eq!(map.stats.obstacle_points, 2);
    }
}

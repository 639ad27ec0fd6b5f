//! Scene builders shared by the integration tests.
//!
//! Scenes are plain point lists in the vehicle frame. Ground sits at
//! [`GROUND_Z`]; obstacles are vertical stacks so their polar cells always
//! exceed the height-span threshold.

#![allow(dead_code)]

use bhumi::boundary::SectorBoundaryExtractor;
use bhumi::fusion::ProximityFuser;
use bhumi::grid::{ObstacleSectors, PolarGrid, bin_points};
use bhumi::ground::{RansacPlaneFitter, split_ground};
use bhumi::{Point3, ProximityReadings, TerrainConfig};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Ground height used by every scene.
pub const GROUND_Z: f32 = -1.0;

/// Default config with a fixed RANSAC seed.
pub fn seeded_config() -> TerrainConfig {
    let mut config = TerrainConfig::default();
    config.ground.seed = 1234;
    config
}

/// Ground on concentric rings, one point per sector centre.
///
/// Radii 0.5 m to 20 m in 0.5 m steps, angles at odd degrees so every point
/// sits in the middle of a 2° sector.
pub fn ground_disc() -> Vec<Point3> {
    (1..=40)
        .flat_map(|r| {
            (0..180).map(move |k| {
                let a = ((2 * k + 1) as f32).to_radians();
                let range = r as f32 * 0.5;
                Point3::new(range * a.cos(), range * a.sin(), GROUND_Z)
            })
        })
        .collect()
}

/// Ground on a square lattice within 20 m, skipping points `keep` rejects.
pub fn ground_lattice(spacing: f32, keep: impl Fn(f32, f32) -> bool) -> Vec<Point3> {
    let n = (20.0 / spacing) as i32;
    let mut points = Vec::new();
    for i in -n..=n {
        for j in -n..=n {
            let (x, y) = (i as f32 * spacing, j as f32 * spacing);
            if x.hypot(y) <= 20.0 && keep(x, y) {
                points.push(Point3::new(x, y, GROUND_Z));
            }
        }
    }
    points
}

/// Vertical stack of points from the ground up to `height` above it.
pub fn pole(x: f32, y: f32, height: f32) -> Vec<Point3> {
    (0..=4)
        .map(|k| Point3::new(x, y, GROUND_Z + height * k as f32 / 4.0))
        .collect()
}

/// Wall parallel to the X axis at lateral offset `y`, from `x_start` to
/// `x_end` with poles every 0.1 m.
pub fn wall_along_x(y: f32, x_start: f32, x_end: f32) -> Vec<Point3> {
    let n = ((x_end - x_start) / 0.1).round() as usize;
    (0..=n)
        .flat_map(|k| pole(x_start + k as f32 * 0.1, y, 1.5))
        .collect()
}

/// Corridor of two walls at ±`half_width`, from 1 m to 15 m ahead, over
/// lattice ground with a clear band around each wall.
pub fn corridor(half_width: f32) -> Vec<Point3> {
    let mut points = ground_lattice(0.25, |_, y| (y.abs() - half_width).abs() >= 0.25);
    points.extend(wall_along_x(half_width, 1.0, 15.0));
    points.extend(wall_along_x(-half_width, 1.0, 15.0));
    points
}

/// Mirror a scene across the X axis.
pub fn mirror_y(points: &[Point3]) -> Vec<Point3> {
    points.iter().map(|p| Point3::new(p.x, -p.y, p.z)).collect()
}

/// Uniform random points in a square, some far outside the grid.
pub fn random_points(n: usize, half_extent: f32, seed: u64) -> Vec<Point3> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            Point3::new(
                rng.random_range(-half_extent..half_extent),
                rng.random_range(-half_extent..half_extent),
                rng.random_range(-2.0..2.0),
            )
        })
        .collect()
}

/// Polar grid after boundary extraction, before width clipping.
pub struct Extracted {
    pub grid: PolarGrid,
    pub sectors: ObstacleSectors,
    pub ground_z: f32,
}

/// Run binning, ground split, fusion and boundary extraction.
pub fn extract(config: &TerrainConfig, points: &[Point3], readings: &ProximityReadings) -> Extracted {
    let layout = config.polar.to_layout();
    let mut grid = bin_points(points, layout);

    let fitter = RansacPlaneFitter::new(config.ground.to_ransac_config());
    let split = split_ground(
        &grid,
        config.ground.height_threshold,
        config.ground.plane_tolerance,
        &fitter,
    )
    .expect("scene has ground");

    let mut obstacles = split.obstacles;
    ProximityFuser::new(&config.proximity).fuse(readings, &mut obstacles);
    let sectors = ObstacleSectors::from_points(&obstacles, &layout, config.excludes_rear());

    SectorBoundaryExtractor::new(config.excludes_rear()).extract(&mut grid, &sectors, split.ground_z);

    Extracted {
        grid,
        sectors,
        ground_z: split.ground_z,
    }
}

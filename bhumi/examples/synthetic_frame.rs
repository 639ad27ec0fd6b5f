//! Run the terrain pipeline on a synthetic frame.
//!
//! Builds a scene with flat ground, a narrow gap between two parked cars and
//! a wide open lane, then prints the frame statistics.
//!
//! # Usage
//!
//! ```bash
//! RUST_LOG=debug cargo run --example synthetic_frame -- [config.yaml]
//! ```

use std::path::Path;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use bhumi::{Point3, ProximityBuffer, TerrainConfig, TerrainMapper};

fn ground(rng: &mut StdRng) -> Vec<Point3> {
    (0..40)
        .flat_map(|r| (0..720).map(move |k| (r, k)))
        .map(|(r, k)| {
            let range = 0.8 + r as f32 * 0.5;
            let a = (k as f32 * 0.5).to_radians();
            Point3::new(range * a.cos(), range * a.sin(), -1.2 + rng.random_range(-0.03..0.03))
        })
        .collect()
}

fn car(rng: &mut StdRng, cx: f32, cy: f32) -> Vec<Point3> {
    (0..400)
        .map(|_| {
            Point3::new(
                cx + rng.random_range(-2.2..2.2),
                cy + rng.random_range(-0.9..0.9),
                rng.random_range(-1.2..0.3),
            )
        })
        .collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();

    let config = match std::env::args().nth(1) {
        Some(path) => TerrainConfig::load(Path::new(&path))?,
        None => TerrainConfig::default(),
    };
    let mapper = TerrainMapper::new(config)?;

    let mut rng = StdRng::seed_from_u64(2024);
    let mut points = ground(&mut rng);
    // Two cars leaving a ~1.2 m gap ahead-left
    points.extend(car(&mut rng, 8.0, 2.0));
    points.extend(car(&mut rng, 8.0, 5.0));
    // Wall on the right
    points.extend(car(&mut rng, 12.0, -6.0));

    let proximity = ProximityBuffer::new();
    proximity.update_left([0.0, 0.0, 1.4, 0.0]);
    proximity.update_right([2.5, 0.0, 0.0, 0.0]);

    let map = mapper.process_with_buffer(&points, &proximity)?;

    println!("frame_id:      {}", map.frame_id);
    println!("ground_z:      {:.3} m", map.ground_z);
    println!("drivable:      {} cells", map.cells.len());
    println!("boundary pts:  {}", map.boundary.len());
    println!("elapsed:       {:.2} ms", map.elapsed_ms);
    println!();
    print!("{}", serde_yaml::to_string(&map.stats)?);

    Ok(())
}

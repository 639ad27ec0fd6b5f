//! Polar occupancy grid and obstacle sectors.
//!
//! ## Layout
//!
//! ```text
//!                 sector t
//!                   ╱
//!          ┌──────╱───────┐
//!          │ ring a ─────►│  radial_resolution per ring
//!          │    ╱         │
//!          │  ╱  vehicle  │  2π / TH per sector
//!          └──────────────┘
//! ```
//!
//! ## Key Components
//!
//! - [`PolarGrid`]: Contiguous R×TH arena of [`PolarCell`]s with per-frame flags
//! - [`bin_points`]: Buckets raw points into the grid
//! - [`ObstacleSectors`]: Obstacle points regrouped by sector for nearest queries

mod binning;
mod polar_grid;
mod sectors;

pub use binning::bin_points;
pub use polar_grid::{PolarCell, PolarGrid};
pub use sectors::ObstacleSectors;

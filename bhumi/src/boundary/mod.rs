//! Drivable boundary extraction and narrow-passage pruning.
//!
//! - [`SectorBoundaryExtractor`]: marks cells inside each sector's nearest
//!   obstacle drivable
//! - [`WidthClipper`]: demotes drivable runs narrower than the vehicle

mod clipper;
mod extractor;

pub use clipper::WidthClipper;
pub use extractor::{BoundaryPoint, SectorBoundaryExtractor};

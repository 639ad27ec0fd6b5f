//! Ground segmentation.
//!
//! - [`split_ground`]: height-span filter plus plane fit over a binned frame
//! - [`PlaneFitter`]: the plane-fit contract, with [`RansacPlaneFitter`] as
//!   the default implementation

mod plane;
mod ransac;
mod splitter;

pub use plane::{PlaneFit, PlaneFitError, PlaneFitter, PlaneModel};
pub use ransac::{RansacConfig, RansacPlaneFitter};
pub use splitter::{GroundSplit, classify_cells, mean_height, split_ground};

//! Per-frame error types.
//!
//! A frame either produces a complete [`DrivableMap`](crate::DrivableMap) or
//! fails with a [`FrameError`]; nothing is emitted for a failed frame and the
//! next frame starts from scratch.

use thiserror::Error;

use crate::ground::PlaneFitError;

/// Result type alias for frame processing
pub type Result<T> = std::result::Result<T, FrameError>;

/// Why no ground elevation could be established.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GroundFailure {
    /// The frame held no finite points
    #[error("frame contains no points")]
    EmptyFrame,

    /// Every polar cell exceeded the height-span threshold
    #[error("no ground candidates passed the height filter")]
    NoCandidates,

    /// The plane fit accepted no candidate as ground
    #[error("plane fit returned no inliers")]
    NoInliers,

    /// The plane fitter could not produce a model
    #[error("plane fit failed: {0}")]
    PlaneFit(#[from] PlaneFitError),
}

/// Failure of a single frame.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FrameError {
    /// Mean ground elevation is undefined for this frame
    #[error("empty ground set: {reason}")]
    EmptyGroundSet {
        /// Underlying cause
        reason: GroundFailure,
    },
}

impl FrameError {
    /// True for every variant that means "no ground this frame".
    pub fn is_empty_ground(&self) -> bool {
        matches!(self, FrameError::EmptyGroundSet { .. })
    }

    /// The ground failure behind this error.
    pub fn ground_failure(&self) -> &GroundFailure {
        match self {
            FrameError::EmptyGroundSet { reason } => reason,
        }
    }
}

impl From<GroundFailure> for FrameError {
    fn from(reason: GroundFailure) -> Self {
        FrameError::EmptyGroundSet { reason }
    }
}

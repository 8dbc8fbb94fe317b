//! Error types for model operations.

use thiserror::Error;
use tk_core::RodId;

/// Errors encountered while configuring or stepping a model.
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    /// `advance` was called with a non-positive time step.
    #[error("dt is not positive: {dt}")]
    InvalidStep { dt: f64 },

    /// A marker targets a rigid component that doesn't exist.
    #[error("Marker targets non-existent rigid component {body} (model has {len})")]
    MarkerBodyOutOfRange { body: RodId, len: usize },
}

pub type ModelResult<T> = Result<T, ModelError>;

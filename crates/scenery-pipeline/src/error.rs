//! Error types for the transform pipeline.

use thiserror::Error;

use crate::ops::Axis;

/// Errors that can occur while transforming a batch.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Scale factor is zero, negative, NaN or infinite.
    #[error("invalid scale factor on {axis} axis: {value}")]
    InvalidScaleFactor {
        /// Offending axis.
        axis: Axis,
        /// Offending factor.
        value: f64,
    },

    /// Scaling left a component outside `(0, inf)`.
    #[error("scale collapsed on {axis} axis: {value}")]
    DegenerateScale {
        /// Offending axis.
        axis: Axis,
        /// Resulting scale component.
        value: f64,
    },

    /// Rotation angle is NaN or infinite.
    #[error("non-finite rotation angle on {axis} axis: {value}")]
    NonFiniteAngle {
        /// Offending axis.
        axis: Axis,
        /// Offending angle in degrees.
        value: f64,
    },

    /// Translation component is NaN or infinite.
    #[error("non-finite translation on {axis} axis: {value}")]
    NonFiniteTranslation {
        /// Offending axis.
        axis: Axis,
        /// Offending offset.
        value: f64,
    },

    /// An object in the batch failed; the batch is discarded.
    #[error("object {index} in batch failed")]
    ObjectFailed {
        /// Position of the object in the batch.
        index: usize,
        /// Underlying operator error.
        #[source]
        source: Box<PipelineError>,
    },

    /// Parameter or generator ranges cannot produce valid values.
    #[error("invalid ranges: {0}")]
    InvalidRanges(String),

    /// Pipeline configuration could not be parsed.
    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),
}

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, PipelineError>;

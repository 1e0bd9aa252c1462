//! Batch orchestration: draw parameters once, transform every object, summarize.

use log::{debug, info};
use rand::Rng;
use rayon::prelude::*;

use scenery_ir::{Object3D, TransformedDocument, Vec3};

use crate::config::PipelineConfig;
use crate::error::{PipelineError, Result};
use crate::ops;
use crate::params::TransformParams;

/// Apply scale, then rotate, then translate to a single object.
pub fn transform_object(obj: &Object3D, params: &TransformParams) -> Result<Object3D> {
    let scaled = ops::scale(obj, params.scale_factors)?;
    let rotated = ops::rotate(&scaled, Vec3::from(params.rotation_angles))?;
    ops::translate(&rotated, params.translation_vec())
}

/// Runs batches through the transform pipeline.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    /// Create a pipeline, rejecting configs whose ranges cannot be drawn from.
    pub fn new(config: PipelineConfig) -> Result<Self> {
        config.ranges.validate()?;
        Ok(Self { config })
    }

    /// Active configuration.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Draw one parameter set from `rng` and apply it to the whole batch.
    ///
    /// Either every object is transformed or an error is returned and nothing
    /// is produced.
    pub fn run<R: Rng + ?Sized>(
        &self,
        objects: &[Object3D],
        rng: &mut R,
    ) -> Result<TransformedDocument> {
        let params = TransformParams::draw(rng, &self.config.ranges)?;
        self.apply(objects, &params)
    }

    /// Apply a known parameter set to the whole batch.
    pub fn apply(
        &self,
        objects: &[Object3D],
        params: &TransformParams,
    ) -> Result<TransformedDocument> {
        let step = |(index, obj): (usize, &Object3D)| {
            transform_object(obj, params).map_err(|e| PipelineError::ObjectFailed {
                index,
                source: Box::new(e),
            })
        };

        let transformed: Vec<Object3D> = if objects.len() >= self.config.parallel_threshold {
            debug!("transforming {} objects in parallel", objects.len());
            objects.par_iter().enumerate().map(step).collect::<Result<_>>()?
        } else {
            objects.iter().enumerate().map(step).collect::<Result<_>>()?
        };

        let summary = params.summary();
        info!(
            "transformed {} objects (scale {:?}, rotation {:?}, translation {:?})",
            transformed.len(),
            summary.scale_factors,
            summary.rotation_angles,
            summary.translation_vector
        );

        Ok(TransformedDocument {
            objects: transformed,
            transformations: summary,
        })
    }
}

//! Random scene generation.
//!
//! Produces input batches for the pipeline. Every real component is rounded
//! to two decimals at generation time, then clamped back into its range when
//! the range itself is finer than two decimals.

use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

use scenery_ir::{Object3D, ObjectBatch, ObjectKind, Vec3};
use scenery_math::round_to;

use crate::error::{PipelineError, Result};

/// Generator parameters. All ranges are inclusive `[min, max]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorSettings {
    /// Number of objects per batch.
    pub count: usize,
    /// Range of each position component.
    pub position: [f64; 2],
    /// Range of each scale component.
    pub scale: [f64; 2],
    /// Range of each rotation component, degrees.
    pub rotation: [f64; 2],
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            count: 2,
            position: [-10.0, 10.0],
            scale: [0.5, 2.0],
            rotation: [0.0, 360.0],
        }
    }
}

impl GeneratorSettings {
    /// Validate settings.
    pub fn validate(&self) -> Result<()> {
        for (name, [lo, hi]) in [
            ("position", self.position),
            ("scale", self.scale),
            ("rotation", self.rotation),
        ] {
            if !lo.is_finite() || !hi.is_finite() || lo > hi {
                return Err(PipelineError::InvalidRanges(format!(
                    "{name} range [{lo}, {hi}] is empty or non-finite"
                )));
            }
            if !(hi - lo).is_finite() {
                return Err(PipelineError::InvalidRanges(format!(
                    "{name} range [{lo}, {hi}] is too wide to sample"
                )));
            }
        }
        if self.scale[0] <= 0.0 {
            return Err(PipelineError::InvalidRanges(format!(
                "scale range must stay above zero, got min {}",
                self.scale[0]
            )));
        }
        Ok(())
    }
}

/// Uniform draw rounded to two decimals, kept inside `[lo, hi]`.
fn random_float<R: Rng + ?Sized>(rng: &mut R, [lo, hi]: [f64; 2]) -> f64 {
    round_to(rng.random_range(lo..=hi), 2).clamp(lo, hi)
}

fn random_vec3<R: Rng + ?Sized>(rng: &mut R, range: [f64; 2]) -> Vec3 {
    Vec3::new(
        random_float(rng, range),
        random_float(rng, range),
        random_float(rng, range),
    )
}

/// Generate one object of a uniformly chosen kind.
pub fn random_object<R: Rng + ?Sized>(rng: &mut R, settings: &GeneratorSettings) -> Result<Object3D> {
    settings.validate()?;
    Ok(sample_object(rng, settings))
}

fn sample_object<R: Rng + ?Sized>(rng: &mut R, settings: &GeneratorSettings) -> Object3D {
    let kind = ObjectKind::ALL[rng.random_range(0..ObjectKind::ALL.len())];
    Object3D::new(
        kind,
        random_vec3(rng, settings.position),
        random_vec3(rng, settings.scale),
        random_vec3(rng, settings.rotation),
    )
}

/// Generate a batch of `settings.count` objects.
pub fn random_objects<R: Rng + ?Sized>(
    rng: &mut R,
    settings: &GeneratorSettings,
) -> Result<ObjectBatch> {
    settings.validate()?;
    let objects: Vec<Object3D> = (0..settings.count)
        .map(|_| sample_object(rng, settings))
        .collect();
    debug!("generated {} objects", objects.len());
    Ok(ObjectBatch::new(objects))
}

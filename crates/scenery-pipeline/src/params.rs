//! Per-batch transform parameters and the ranges they are drawn from.

use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

use scenery_ir::{AxisAngles, TransformSummary, Vec3};
use scenery_math::round_to;

use crate::error::{PipelineError, Result};

/// Inclusive ranges for the randomized parameters of a batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterRanges {
    /// Uniform scale factor `[min, max]`, rounded to two decimals once drawn
    /// and clamped back into the range.
    pub scale: [f64; 2],
    /// Rotation about Y in whole degrees `[min, max]`.
    pub rotation_y: [i64; 2],
    /// Translation per axis in whole units `[min, max]`.
    pub translation: [i64; 2],
}

impl Default for ParameterRanges {
    fn default() -> Self {
        Self {
            scale: [0.5, 2.0],
            rotation_y: [0, 360],
            translation: [0, 50],
        }
    }
}

impl ParameterRanges {
    /// Validate ranges.
    pub fn validate(&self) -> Result<()> {
        let [lo, hi] = self.scale;
        if !lo.is_finite() || !hi.is_finite() || lo > hi || !(hi - lo).is_finite() {
            return Err(PipelineError::InvalidRanges(format!(
                "scale range [{lo}, {hi}] is empty or non-finite"
            )));
        }
        if lo <= 0.0 {
            return Err(PipelineError::InvalidRanges(format!(
                "scale range must stay above zero, got min {lo}"
            )));
        }
        if self.rotation_y[0] > self.rotation_y[1] {
            return Err(PipelineError::InvalidRanges(format!(
                "rotation_y range {:?} is empty",
                self.rotation_y
            )));
        }
        if self.translation[0] > self.translation[1] {
            return Err(PipelineError::InvalidRanges(format!(
                "translation range {:?} is empty",
                self.translation
            )));
        }
        Ok(())
    }
}

/// The single parameter set shared by every object in a batch.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformParams {
    /// Per-axis scale factors.
    pub scale_factors: Vec3,
    /// Euler angles in degrees.
    pub rotation_angles: AxisAngles,
    /// Translation offset.
    pub translation: [i64; 3],
}

impl TransformParams {
    /// Draw a parameter set: one uniform scale, a Y-only rotation and an
    /// independent integer offset per axis.
    pub fn draw<R: Rng + ?Sized>(rng: &mut R, ranges: &ParameterRanges) -> Result<Self> {
        ranges.validate()?;

        let [s_lo, s_hi] = ranges.scale;
        let scalar = round_to(rng.random_range(s_lo..=s_hi), 2).clamp(s_lo, s_hi);
        let angle = rng.random_range(ranges.rotation_y[0]..=ranges.rotation_y[1]);
        let [t_lo, t_hi] = ranges.translation;
        let translation = [
            rng.random_range(t_lo..=t_hi),
            rng.random_range(t_lo..=t_hi),
            rng.random_range(t_lo..=t_hi),
        ];

        let params = Self {
            scale_factors: Vec3::splat(scalar),
            rotation_angles: AxisAngles::about_y(angle),
            translation,
        };
        debug!("drew transform parameters: {:?}", params);
        Ok(params)
    }

    /// Translation as a float vector.
    pub fn translation_vec(&self) -> Vec3 {
        let [x, y, z] = self.translation;
        Vec3::new(x as f64, y as f64, z as f64)
    }

    /// Summary record of exactly these parameters.
    pub fn summary(&self) -> TransformSummary {
        TransformSummary {
            scale_factors: self.scale_factors.to_array(),
            rotation_angles: self.rotation_angles,
            translation_vector: self.translation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn default_ranges_are_valid() {
        assert!(ParameterRanges::default().validate().is_ok());
    }

    #[test]
    fn draws_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let ranges = ParameterRanges::default();

        for _ in 0..500 {
            let p = TransformParams::draw(&mut rng, &ranges).unwrap();
            let s = p.scale_factors;
            assert!((0.5..=2.0).contains(&s.x));
            assert_eq!(s.x, s.y);
            assert_eq!(s.y, s.z);
            assert_eq!(round_to(s.x, 2), s.x);

            assert_eq!(p.rotation_angles.x, 0);
            assert_eq!(p.rotation_angles.z, 0);
            assert!((0..=360).contains(&p.rotation_angles.y));

            for t in p.translation {
                assert!((0..=50).contains(&t));
            }
        }
    }

    #[test]
    fn same_seed_same_parameters() {
        let ranges = ParameterRanges::default();
        let a = TransformParams::draw(&mut StdRng::seed_from_u64(42), &ranges).unwrap();
        let b = TransformParams::draw(&mut StdRng::seed_from_u64(42), &ranges).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn degenerate_ranges_pin_the_draw() {
        let ranges = ParameterRanges {
            scale: [1.5, 1.5],
            rotation_y: [90, 90],
            translation: [3, 3],
        };
        let p = TransformParams::draw(&mut StdRng::seed_from_u64(1), &ranges).unwrap();
        assert_eq!(p.scale_factors, Vec3::splat(1.5));
        assert_eq!(p.rotation_angles, AxisAngles::about_y(90));
        assert_eq!(p.translation, [3, 3, 3]);
    }

    #[test]
    fn rounded_scale_stays_inside_narrow_range() {
        let ranges = ParameterRanges {
            scale: [1.001, 1.004],
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(21);
        for _ in 0..100 {
            let s = TransformParams::draw(&mut rng, &ranges).unwrap().scale_factors.x;
            assert!((1.001..=1.004).contains(&s), "{s} escaped the range");
        }
    }

    #[test]
    fn tiny_positive_scale_range_draws_positive_factor() {
        let ranges = ParameterRanges {
            scale: [0.001, 0.002],
            ..Default::default()
        };
        let p = TransformParams::draw(&mut StdRng::seed_from_u64(3), &ranges).unwrap();
        assert!(p.scale_factors.x > 0.0);
    }

    #[test]
    fn invalid_ranges_are_rejected() {
        let cases = [
            ParameterRanges {
                scale: [0.0, 1.0],
                ..Default::default()
            },
            ParameterRanges {
                scale: [2.0, 1.0],
                ..Default::default()
            },
            ParameterRanges {
                rotation_y: [10, 0],
                ..Default::default()
            },
            ParameterRanges {
                translation: [5, -5],
                ..Default::default()
            },
        ];
        for ranges in cases {
            assert!(
                matches!(ranges.validate(), Err(PipelineError::InvalidRanges(_))),
                "{ranges:?} should be invalid"
            );
        }
    }

    #[test]
    fn summary_echoes_parameters() {
        let p = TransformParams {
            scale_factors: Vec3::splat(0.75),
            rotation_angles: AxisAngles::about_y(200),
            translation: [1, 2, 3],
        };
        let s = p.summary();
        assert_eq!(s.scale_factors, [0.75, 0.75, 0.75]);
        assert_eq!(s.rotation_angles, AxisAngles::about_y(200));
        assert_eq!(s.translation_vector, [1, 2, 3]);
        assert_eq!(p.translation_vec(), Vec3::new(1.0, 2.0, 3.0));
    }
}

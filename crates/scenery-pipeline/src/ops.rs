//! Scale, rotate and translate operators.
//!
//! Each operator borrows an object and returns a new one. None of them touch
//! shared state, so they can run on any thread in any batch order.

use std::fmt;

use scenery_ir::{Object3D, Vec3};
use scenery_math::{Point3, Transform};

use crate::error::{PipelineError, Result};

/// A world axis, used to locate validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// X axis.
    X,
    /// Y axis.
    Y,
    /// Z axis.
    Z,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        })
    }
}

fn components(v: Vec3) -> [(Axis, f64); 3] {
    [(Axis::X, v.x), (Axis::Y, v.y), (Axis::Z, v.z)]
}

/// Multiply the object's scale by `factors`, component-wise.
///
/// Every factor must be finite and strictly positive.
pub fn scale(obj: &Object3D, factors: Vec3) -> Result<Object3D> {
    for (axis, value) in components(factors) {
        if !value.is_finite() || value <= 0.0 {
            return Err(PipelineError::InvalidScaleFactor { axis, value });
        }
    }

    let scaled = Vec3::new(
        obj.scale.x * factors.x,
        obj.scale.y * factors.y,
        obj.scale.z * factors.z,
    );
    for (axis, value) in components(scaled) {
        if !value.is_finite() || value <= 0.0 {
            return Err(PipelineError::DegenerateScale { axis, value });
        }
    }

    Ok(Object3D {
        scale: scaled,
        ..obj.clone()
    })
}

/// Orbit the object about the world origin and accumulate its orientation.
///
/// `angles` are Euler angles in degrees. The position is multiplied by
/// [`Transform::euler_xyz_degrees`]; the orientation adds each angle to the
/// matching axis. Orientation is not wrapped into `[0, 360)`.
pub fn rotate(obj: &Object3D, angles: Vec3) -> Result<Object3D> {
    for (axis, value) in components(angles) {
        if !value.is_finite() {
            return Err(PipelineError::NonFiniteAngle { axis, value });
        }
    }

    let rotation = Transform::euler_xyz_degrees(angles.x, angles.y, angles.z);
    let p = rotation.apply_point(&Point3::new(obj.position.x, obj.position.y, obj.position.z));

    Ok(Object3D {
        position: Vec3::new(p.x, p.y, p.z),
        rotation: Vec3::new(
            obj.rotation.x + angles.x,
            obj.rotation.y + angles.y,
            obj.rotation.z + angles.z,
        ),
        ..obj.clone()
    })
}

/// Move the object by `offset`.
pub fn translate(obj: &Object3D, offset: Vec3) -> Result<Object3D> {
    for (axis, value) in components(offset) {
        if !value.is_finite() {
            return Err(PipelineError::NonFiniteTranslation { axis, value });
        }
    }

    Ok(Object3D {
        position: Vec3::new(
            obj.position.x + offset.x,
            obj.position.y + offset.y,
            obj.position.z + offset.z,
        ),
        ..obj.clone()
    })
}

#![warn(missing_docs)]

//! Math types for the scenery transform pipeline.
//!
//! Thin wrappers around nalgebra providing the rotation matrices, Euler
//! convention and tolerance constants used when orbiting scene objects
//! around the world origin.

use nalgebra::{Matrix4, Vector4};

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f64>;

/// A 4x4 affine transformation matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    /// The underlying 4x4 matrix.
    pub matrix: Matrix4<f64>,
}

impl Transform {
    /// Rotation about the X axis by `angle` radians.
    pub fn rotation_x(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        let mut m = Matrix4::identity();
        m[(1, 1)] = c;
        m[(1, 2)] = -s;
        m[(2, 1)] = s;
        m[(2, 2)] = c;
        Self { matrix: m }
    }

    /// Rotation about the Y axis by `angle` radians.
    pub fn rotation_y(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        let mut m = Matrix4::identity();
        m[(0, 0)] = c;
        m[(0, 2)] = s;
        m[(2, 0)] = -s;
        m[(2, 2)] = c;
        Self { matrix: m }
    }

    /// Rotation about the Z axis by `angle` radians.
    pub fn rotation_z(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        let mut m = Matrix4::identity();
        m[(0, 0)] = c;
        m[(0, 1)] = -s;
        m[(1, 0)] = s;
        m[(1, 1)] = c;
        Self { matrix: m }
    }

    /// Rotation from Euler angles in degrees, intrinsic X then Y then Z.
    ///
    /// The resulting matrix is `Rx · Ry · Rz`. All rotations are right-handed
    /// and active, so a quarter turn about Y carries `+X` onto `-Z`.
    pub fn euler_xyz_degrees(x_deg: f64, y_deg: f64, z_deg: f64) -> Self {
        let rx = Self::rotation_x(x_deg.to_radians());
        let ry = Self::rotation_y(y_deg.to_radians());
        let rz = Self::rotation_z(z_deg.to_radians());
        rx.then(&ry).then(&rz)
    }

    /// Compose: `self * other`, so `other` is applied to a point first.
    pub fn then(&self, other: &Transform) -> Self {
        Self {
            matrix: self.matrix * other.matrix,
        }
    }

    /// Transform a point.
    pub fn apply_point(&self, p: &Point3) -> Point3 {
        let v = self.matrix * Vector4::new(p.x, p.y, p.z, 1.0);
        Point3::new(v.x, v.y, v.z)
    }
}

/// Tolerance constants for geometric comparisons.
#[derive(Debug, Clone, Copy)]
pub struct Tolerance {
    /// Linear distance tolerance in world units.
    pub linear: f64,
}

impl Tolerance {
    /// Default tolerance (1e-9 world units).
    pub const DEFAULT: Self = Self { linear: 1e-9 };

    /// Check if two points are coincident within tolerance.
    pub fn points_equal(&self, a: &Point3, b: &Point3) -> bool {
        (a - b).norm() < self.linear
    }
}

/// Round `value` to `decimals` places after the decimal point.
///
/// Magnitudes too large to scale without overflow are returned unchanged;
/// they carry no fractional digits anyway.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

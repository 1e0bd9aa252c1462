//! Scene documents for the scenery pipeline.
//!
//! This crate defines the object records and the two JSON documents that
//! cross the pipeline boundary: the input batch produced by the generator and
//! the transformed document handed to downstream scene builders.
//!
//! The types are purely declarative — no transform logic lives here.

use serde::{Deserialize, Serialize};
use std::fmt;

/// 3D vector with f64 components, serialized as `{ "x", "y", "z" }`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
    /// Z component.
    pub z: f64,
}

impl Vec3 {
    /// Create a new Vec3.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// All three components set to `v`.
    pub fn splat(v: f64) -> Self {
        Self::new(v, v, v)
    }

    /// Components as `[x, y, z]`.
    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<[f64; 3]> for Vec3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

/// Primitive shape of a scene object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    /// UV sphere.
    Sphere,
    /// Axis-aligned cube.
    Cube,
    /// Cylinder along the local Z axis.
    Cylinder,
}

impl ObjectKind {
    /// Every kind, in declaration order.
    pub const ALL: [ObjectKind; 3] = [ObjectKind::Sphere, ObjectKind::Cube, ObjectKind::Cylinder];

    /// Wire name of this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            ObjectKind::Sphere => "sphere",
            ObjectKind::Cube => "cube",
            ObjectKind::Cylinder => "cylinder",
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A primitive placed in world space.
///
/// `rotation` holds Euler angles in degrees, one per world axis. Values are
/// never normalized, so accumulated rotations may leave `[0, 360)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Object3D {
    /// Primitive shape.
    #[serde(rename = "type")]
    pub kind: ObjectKind,
    /// Origin of the object in world space.
    pub position: Vec3,
    /// Per-axis size multiplier, strictly positive.
    pub scale: Vec3,
    /// Euler angles in degrees.
    pub rotation: Vec3,
}

impl Object3D {
    /// Create a new object.
    pub fn new(kind: ObjectKind, position: Vec3, scale: Vec3, rotation: Vec3) -> Self {
        Self {
            kind,
            position,
            scale,
            rotation,
        }
    }
}

/// Integer Euler angles in degrees, as recorded in a [`TransformSummary`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AxisAngles {
    /// Rotation about X.
    pub x: i64,
    /// Rotation about Y.
    pub y: i64,
    /// Rotation about Z.
    pub z: i64,
}

impl AxisAngles {
    /// Rotation about the Y axis only.
    pub fn about_y(degrees: i64) -> Self {
        Self {
            x: 0,
            y: degrees,
            z: 0,
        }
    }
}

impl From<AxisAngles> for Vec3 {
    fn from(a: AxisAngles) -> Self {
        Vec3::new(a.x as f64, a.y as f64, a.z as f64)
    }
}

/// The exact parameters applied to every object of one batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformSummary {
    /// Per-axis scale factors.
    pub scale_factors: [f64; 3],
    /// Rotation angles in degrees.
    pub rotation_angles: AxisAngles,
    /// Translation offset.
    pub translation_vector: [i64; 3],
}

/// An ordered batch of objects — the input document.
///
/// Serialized as a bare JSON array.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectBatch {
    /// Objects in batch order.
    pub objects: Vec<Object3D>,
}

impl ObjectBatch {
    /// Wrap a list of objects.
    pub fn new(objects: Vec<Object3D>) -> Self {
        Self { objects }
    }

    /// Serialize to JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize from JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Transformed batch plus the summary of what was applied — the output document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformedDocument {
    /// Objects after transformation, in input order.
    pub objects: Vec<Object3D>,
    /// Parameters applied to every object.
    pub transformations: TransformSummary,
}

impl TransformedDocument {
    /// Serialize to JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize from JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

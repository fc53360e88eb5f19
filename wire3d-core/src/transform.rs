/// 4x4 homogeneous transform factories
use nalgebra::{Matrix4, Vector3};

/// Transform builder for the matrices scene graphs are assembled from.
///
/// All factories take degrees and return a `Matrix4<f32>` under the
/// column-vector convention, so a point transforms as `m * v`. Composition
/// comes in two flavors at the call site: the pure `a * b` product and the
/// accumulating `a *= b`, which rewrites the receiver to `a * b`.
pub struct Transform;

impl Transform {
    pub fn identity() -> Matrix4<f32> {
        Matrix4::identity()
    }

    /// Create a translation matrix
    pub fn translation(x: f32, y: f32, z: f32) -> Matrix4<f32> {
        Matrix4::new_translation(&Vector3::new(x, y, z))
    }

    /// Create a per-axis scale matrix
    pub fn scaling(sx: f32, sy: f32, sz: f32) -> Matrix4<f32> {
        Matrix4::new_nonuniform_scaling(&Vector3::new(sx, sy, sz))
    }

    /// Create a uniform scale matrix
    pub fn uniform_scaling(s: f32) -> Matrix4<f32> {
        Matrix4::new_scaling(s)
    }

    /// Rotation about the x-axis, in degrees
    pub fn rotation_x(degrees: f32) -> Matrix4<f32> {
        Self::rotation(degrees, 1.0, 0.0, 0.0)
    }

    /// Rotation about the y-axis, in degrees
    pub fn rotation_y(degrees: f32) -> Matrix4<f32> {
        Self::rotation(degrees, 0.0, 1.0, 0.0)
    }

    /// Rotation about the z-axis, in degrees
    pub fn rotation_z(degrees: f32) -> Matrix4<f32> {
        Self::rotation(degrees, 0.0, 0.0, 1.0)
    }

    /// Axis-angle rotation (Rodrigues formula). The axis does not need to be
    /// normalized; a zero axis yields the identity.
    pub fn rotation(degrees: f32, axis_x: f32, axis_y: f32, axis_z: f32) -> Matrix4<f32> {
        let axis = Vector3::new(axis_x, axis_y, axis_z);
        let norm = axis.norm();
        if norm == 0.0 {
            return Matrix4::identity();
        }
        Matrix4::new_rotation(axis * (degrees.to_radians() / norm))
    }
}

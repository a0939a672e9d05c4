/// Model transformations driven by an orientation quaternion
use nalgebra::{Matrix3, Matrix4, UnitQuaternion};

/// Displayed rotation of the object relative to its canonical pose
pub type Orientation = UnitQuaternion<f32>;

/// Transform builder for 3D transformations
pub struct Transform;

impl Transform {
    /// 3x3 rotation matrix of an orientation
    pub fn rotation_matrix(orientation: &Orientation) -> Matrix3<f32> {
        orientation.to_rotation_matrix().into_inner()
    }

    /// Model matrix: uniform scale, then rotation
    pub fn model_matrix(orientation: &Orientation, scale: f32) -> Matrix4<f32> {
        orientation.to_homogeneous() * Matrix4::new_scaling(scale)
    }
}

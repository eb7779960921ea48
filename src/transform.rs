use glam::{Mat3, Mat4, Vec3};

/// Position / Euler rotation / scale of anything placed in the scene.
///
/// Rotation is in radians: `x` is pitch, `y` is yaw, `z` is roll.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_uniform_scale(mut self, scale: f32) -> Self {
        self.scale = Vec3::splat(scale);
        self
    }

    /// T * R * S: scale first, then rotate, then translate.
    /// Recomputed on every call.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position)
            * rotation_matrix(self.rotation)
            * Mat4::from_scale(self.scale)
    }

    /// Upper-left 3x3 of the model matrix, bound as the normal matrix
    pub fn normal_matrix(&self) -> Mat3 {
        Mat3::from_mat4(self.model_matrix())
    }
}

/// Rx * Ry * Rz
pub fn rotation_matrix(rotation: Vec3) -> Mat4 {
    Mat4::from_rotation_x(rotation.x)
        * Mat4::from_rotation_y(rotation.y)
        * Mat4::from_rotation_z(rotation.z)
}

/// Ry * Rx * Rz, the yaw-first order used by orbiting and look cameras
pub fn rotation_matrix_yxz(rotation: Vec3) -> Mat4 {
    Mat4::from_rotation_y(rotation.y)
        * Mat4::from_rotation_x(rotation.x)
        * Mat4::from_rotation_z(rotation.z)
}

//! Camera variants sharing one capability set: produce view and projection
//! matrices, follow viewport resizes, and consume one input tick per frame.

mod arcball;
mod first_person;
mod orthographic;
mod player;

pub use arcball::ArcballCamera;
pub use first_person::FirstPersonCamera;
pub use orthographic::OrthographicCamera;
pub use player::PlayerCamera;

use glam::{Mat4, Vec3};

use crate::config::{CameraKind, CameraSettings};
use crate::core::{InputSnapshot, ViewportSize};
use crate::transform::Transform;

pub const DEFAULT_FOV_DEGREES: f32 = 70.0;
pub const DEFAULT_NEAR: f32 = 0.1;
pub const DEFAULT_FAR: f32 = 100.0;

/// Pitch is kept inside [-PITCH_LIMIT, PITCH_LIMIT] by look cameras
pub const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2;

/// Camera abstraction driven by the scene loop
pub trait Camera {
    /// Camera space to clip space
    fn projection_matrix(&self) -> Mat4;

    /// World space to camera space
    fn view_matrix(&self) -> Mat4;

    /// Called on every viewport resize
    fn update_size(&mut self, size: ViewportSize);

    /// Called once per rendered frame. May drain the input accumulators.
    fn update(&mut self, delta_time: f32, input: &mut InputSnapshot);

    fn transform(&self) -> &Transform;

    fn transform_mut(&mut self) -> &mut Transform;

    fn position(&self) -> Vec3 {
        self.transform().position
    }

    /// World-space direction the camera looks along
    fn look_direction(&self) -> Vec3 {
        self.view_matrix().inverse().transform_vector3(Vec3::Z).normalize_or_zero()
    }
}

/// Build the camera variant named by `kind`
pub fn create_camera(kind: CameraKind, settings: CameraSettings) -> Box<dyn Camera> {
    match kind {
        CameraKind::FirstPerson => Box::new(FirstPersonCamera::new(settings)),
        CameraKind::Arcball => Box::new(ArcballCamera::new(settings)),
        CameraKind::Orthographic => Box::new(OrthographicCamera::new(settings)),
        CameraKind::Player => Box::new(PlayerCamera::new(settings)),
    }
}

/// Perspective projection shared by the perspective variants
pub(crate) fn perspective(fov: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    Mat4::perspective_lh(fov, aspect, near, far)
}

/// inverse(T * R) for a free camera
pub(crate) fn free_view_matrix(transform: &Transform) -> Mat4 {
    (Mat4::from_translation(transform.position) * crate::transform::rotation_matrix(transform.rotation))
        .inverse()
}

pub(crate) fn clamp_pitch(pitch: f32) -> f32 {
    pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT)
}

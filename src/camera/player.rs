use glam::{Mat4, Vec3};

use super::{clamp_pitch, perspective, Camera, DEFAULT_FAR, DEFAULT_FOV_DEGREES, DEFAULT_NEAR};
use crate::config::CameraSettings;
use crate::core::{InputSnapshot, ViewportSize};
use crate::movement::Movement;
use crate::transform::{rotation_matrix_yxz, Transform};

/// Walks the ground plane like [`super::FirstPersonCamera`] and adds
/// mouse-look while the left button is held.
///
/// Keys and the left stick translate; the right stick and mouse both rotate.
/// The two rotation sources read different devices and are summed, then pitch
/// is clamped once per update.
#[derive(Debug, Clone)]
pub struct PlayerCamera {
    pub transform: Transform,
    pub aspect: f32,
    pub fov: f32,
    pub near: f32,
    pub far: f32,
    pub settings: CameraSettings,
}

impl PlayerCamera {
    pub fn new(settings: CameraSettings) -> Self {
        Self {
            transform: Transform::new(),
            aspect: 1.0,
            fov: DEFAULT_FOV_DEGREES.to_radians(),
            near: DEFAULT_NEAR,
            far: DEFAULT_FAR,
            settings,
        }
    }

    /// Aim direction including pitch; walking uses the ground-plane
    /// [`Movement::forward_vector`] instead.
    pub fn aim_vector(&self) -> Vec3 {
        let Vec3 { x: pitch, y: yaw, .. } = self.transform.rotation;
        Vec3::new(yaw.sin() * pitch.cos(), pitch.sin(), yaw.cos() * pitch.cos()).normalize()
    }
}

impl Default for PlayerCamera {
    fn default() -> Self {
        Self::new(CameraSettings::default())
    }
}

impl Movement for PlayerCamera {
    fn pose(&self) -> &Transform {
        &self.transform
    }

    fn settings(&self) -> &CameraSettings {
        &self.settings
    }
}

impl Camera for PlayerCamera {
    fn projection_matrix(&self) -> Mat4 {
        perspective(self.fov, self.aspect, self.near, self.far)
    }

    fn view_matrix(&self) -> Mat4 {
        let rotation = self.transform.rotation;
        let look = rotation_matrix_yxz(Vec3::new(-rotation.x, rotation.y, 0.0));
        (Mat4::from_translation(self.transform.position) * look).inverse()
    }

    fn update_size(&mut self, size: ViewportSize) {
        self.aspect = size.aspect();
    }

    fn update(&mut self, delta_time: f32, input: &mut InputSnapshot) {
        let delta = self.update_input(delta_time, input);
        self.transform.rotation += delta.rotation;
        self.transform.position += delta.position;

        let mouse = input.take_mouse_delta();
        if input.left_mouse_down {
            let sensitivity = self.settings.mouse_pan_sensitivity;
            self.transform.rotation.x += mouse.y * sensitivity;
            self.transform.rotation.y += mouse.x * sensitivity;
        }

        self.transform.rotation.x = clamp_pitch(self.transform.rotation.x);
    }

    fn transform(&self) -> &Transform {
        &self.transform
    }

    fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }

    fn look_direction(&self) -> Vec3 {
        self.aim_vector()
    }
}

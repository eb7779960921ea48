use glam::Mat4;

use super::{free_view_matrix, perspective, Camera, DEFAULT_FAR, DEFAULT_FOV_DEGREES, DEFAULT_NEAR};
use crate::config::CameraSettings;
use crate::core::{InputSnapshot, ViewportSize};
use crate::movement::Movement;
use crate::transform::Transform;

/// Free-fly perspective camera. Pitch is not clamped.
#[derive(Debug, Clone)]
pub struct FirstPersonCamera {
    pub transform: Transform,
    pub aspect: f32,
    pub fov: f32,
    pub near: f32,
    pub far: f32,
    pub settings: CameraSettings,
}

impl FirstPersonCamera {
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
}

impl Default for FirstPersonCamera {
    fn default() -> Self {
        Self::new(CameraSettings::default())
    }
}

impl Movement for FirstPersonCamera {
    fn pose(&self) -> &Transform {
        &self.transform
    }

    fn settings(&self) -> &CameraSettings {
        &self.settings
    }
}

impl Camera for FirstPersonCamera {
    fn projection_matrix(&self) -> Mat4 {
        perspective(self.fov, self.aspect, self.near, self.far)
    }

    fn view_matrix(&self) -> Mat4 {
        free_view_matrix(&self.transform)
    }

    fn update_size(&mut self, size: ViewportSize) {
        self.aspect = size.aspect();
    }

    fn update(&mut self, delta_time: f32, input: &mut InputSnapshot) {
        let delta = self.update_input(delta_time, input);
        self.transform.rotation += delta.rotation;
        self.transform.position += delta.position;
    }

    fn transform(&self) -> &Transform {
        &self.transform
    }

    fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Button;
    use glam::{Vec2, Vec3};

    #[test]
    fn test_forward_key_one_second() {
        let mut camera = FirstPersonCamera::default();
        let mut input = InputSnapshot::new();
        input.press(Button::KeyW);

        camera.update(1.0, &mut input);

        assert!(camera.transform.position.abs_diff_eq(Vec3::new(0.0, 0.0, 3.0), 1e-6));
        assert_eq!(camera.transform.rotation, Vec3::ZERO);
    }

    #[test]
    fn test_pitch_unclamped() {
        let mut camera = FirstPersonCamera::default();
        let mut input = InputSnapshot::new();
        input.right_stick = Vec2::new(0.0, 1.0);

        for _ in 0..10 {
            camera.update(1.0, &mut input);
        }
        assert!((camera.transform.rotation.x - 20.0).abs() < 1e-4);
    }

    #[test]
    fn test_update_size_sets_aspect() {
        let mut camera = FirstPersonCamera::default();
        camera.update_size(ViewportSize::new(800.0, 400.0));
        assert_eq!(camera.aspect, 2.0);
    }
}

use glam::{Mat4, Vec3, Vec4};

use super::{clamp_pitch, perspective, Camera, DEFAULT_FAR, DEFAULT_FOV_DEGREES, DEFAULT_NEAR};
use crate::config::CameraSettings;
use crate::core::{InputSnapshot, ViewportSize};
use crate::transform::{rotation_matrix_yxz, Transform};

/// Orbits `target` at `distance`. Left-drag rotates, scroll zooms.
#[derive(Debug, Clone)]
pub struct ArcballCamera {
    pub transform: Transform,
    pub aspect: f32,
    pub fov: f32,
    pub near: f32,
    pub far: f32,
    pub target: Vec3,
    pub distance: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub settings: CameraSettings,
}

impl ArcballCamera {
    pub fn new(settings: CameraSettings) -> Self {
        let mut camera = Self {
            transform: Transform::new(),
            aspect: 1.0,
            fov: DEFAULT_FOV_DEGREES.to_radians(),
            near: DEFAULT_NEAR,
            far: DEFAULT_FAR,
            target: Vec3::ZERO,
            distance: 2.5,
            min_distance: 0.0,
            max_distance: 20.0,
            settings,
        };
        camera.sync_position();
        camera
    }

    /// Place the eye on the orbit sphere from the current yaw/pitch/distance
    fn sync_position(&mut self) {
        let rotation = self.transform.rotation;
        let orbit = rotation_matrix_yxz(Vec3::new(-rotation.x, rotation.y, 0.0));
        let offset = orbit * Vec4::new(0.0, 0.0, -self.distance, 0.0);
        self.transform.position = self.target + offset.truncate();
    }
}

impl Default for ArcballCamera {
    fn default() -> Self {
        Self::new(CameraSettings::default())
    }
}

impl Camera for ArcballCamera {
    fn projection_matrix(&self) -> Mat4 {
        perspective(self.fov, self.aspect, self.near, self.far)
    }

    fn view_matrix(&self) -> Mat4 {
        let eye = self.transform.position;
        if self.target == eye {
            // look_at is undefined when the eye sits on the target
            return (Mat4::from_translation(self.target)
                * rotation_matrix_yxz(self.transform.rotation))
            .inverse();
        }

        if (self.target - eye).cross(Vec3::Y).length_squared() == 0.0 {
            // Eye straight above/below the target: up is parallel to the view axis
            let rotation = self.transform.rotation;
            let orbit = rotation_matrix_yxz(Vec3::new(-rotation.x, rotation.y, 0.0));
            return (Mat4::from_translation(eye) * orbit).inverse();
        }

        Mat4::look_at_lh(eye, self.target, Vec3::Y)
    }

    fn update_size(&mut self, size: ViewportSize) {
        self.aspect = size.aspect();
    }

    /// Positive scroll moves the eye closer to the target, negative moves it
    /// away. Left-drag orbits.
    fn update(&mut self, _delta_time: f32, input: &mut InputSnapshot) {
        let scroll = input.take_scroll();
        self.distance -= (scroll.x + scroll.y) * self.settings.mouse_scroll_sensitivity;
        self.distance = self.distance.clamp(self.min_distance, self.max_distance);

        let mouse = input.take_mouse_delta();
        if input.left_mouse_down {
            let sensitivity = self.settings.mouse_pan_sensitivity;
            self.transform.rotation.x += mouse.y * sensitivity;
            self.transform.rotation.y += mouse.x * sensitivity;
            self.transform.rotation.x = clamp_pitch(self.transform.rotation.x);
        }

        self.sync_position();
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
    use glam::Vec2;

    #[test]
    fn test_initial_eye_behind_target() {
        let camera = ArcballCamera::default();
        assert!(camera.transform.position.abs_diff_eq(Vec3::new(0.0, 0.0, -2.5), 1e-6));
        assert!(camera.look_direction().abs_diff_eq(Vec3::Z, 1e-5));
    }

    #[test]
    fn test_scroll_drained_every_update() {
        let mut camera = ArcballCamera::default();
        let mut input = InputSnapshot::new();
        input.add_scroll(Vec2::new(0.0, 5.0));

        camera.update(0.016, &mut input);

        assert!((camera.distance - 2.0).abs() < 1e-6);
        assert_eq!(input.scroll(), Vec2::ZERO);
    }

    #[test]
    fn test_mouse_ignored_without_button() {
        let mut camera = ArcballCamera::default();
        let mut input = InputSnapshot::new();
        input.add_mouse_delta(Vec2::new(100.0, 100.0));

        camera.update(0.016, &mut input);

        assert_eq!(camera.transform.rotation, Vec3::ZERO);
        assert_eq!(input.mouse_delta(), Vec2::ZERO);
    }

    #[test]
    fn test_drag_orbits_at_fixed_distance() {
        let mut camera = ArcballCamera::default();
        let mut input = InputSnapshot::new();
        input.left_mouse_down = true;
        input.add_mouse_delta(Vec2::new(125.0, 0.0));

        camera.update(0.016, &mut input);

        assert!((camera.transform.rotation.y - 1.0).abs() < 1e-6);
        let radius = camera.transform.position.distance(camera.target);
        assert!((radius - 2.5).abs() < 1e-5);
    }

    #[test]
    fn test_eye_on_target_uses_fallback() {
        let mut camera = ArcballCamera::default();
        camera.distance = 0.0;
        camera.sync_position();

        assert_eq!(camera.transform.position, camera.target);
        let view = camera.view_matrix();
        assert!(view.is_finite());
        assert_eq!(view, Mat4::IDENTITY);
    }

    #[test]
    fn test_pole_view_stays_finite() {
        let mut camera = ArcballCamera::default();
        camera.target = Vec3::new(0.0, 0.0, 50.0);
        camera.transform.rotation.x = std::f32::consts::FRAC_PI_2;
        camera.sync_position();

        let view = camera.view_matrix();
        assert!(view.is_finite());
        let eye = view.inverse().w_axis.truncate();
        assert!(eye.abs_diff_eq(camera.transform.position, 1e-3));
    }
}

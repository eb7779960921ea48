use glam::Mat4;

use super::{free_view_matrix, Camera, DEFAULT_FAR, DEFAULT_NEAR};
use crate::config::CameraSettings;
use crate::core::{InputSnapshot, ViewportSize};
use crate::movement::Movement;
use crate::transform::Transform;

/// Zooming in past this would collapse the view volume
pub const MIN_VIEW_SIZE: f32 = 0.1;

/// Parallel projection; WASD pans, scroll zooms.
#[derive(Debug, Clone)]
pub struct OrthographicCamera {
    pub transform: Transform,
    pub aspect: f32,
    /// Height of the visible rectangle in world units
    pub view_size: f32,
    pub near: f32,
    pub far: f32,
    pub settings: CameraSettings,
}

impl OrthographicCamera {
    pub fn new(settings: CameraSettings) -> Self {
        Self {
            transform: Transform::new(),
            aspect: 1.0,
            view_size: 10.0,
            near: DEFAULT_NEAR,
            far: DEFAULT_FAR,
            settings,
        }
    }
}

impl Default for OrthographicCamera {
    fn default() -> Self {
        Self::new(CameraSettings::default())
    }
}

impl Movement for OrthographicCamera {
    fn pose(&self) -> &Transform {
        &self.transform
    }

    fn settings(&self) -> &CameraSettings {
        &self.settings
    }
}

impl Camera for OrthographicCamera {
    fn projection_matrix(&self) -> Mat4 {
        let half_width = self.view_size * self.aspect * 0.5;
        let half_height = self.view_size * 0.5;
        Mat4::orthographic_lh(
            -half_width,
            half_width,
            -half_height,
            half_height,
            self.near,
            self.far,
        )
    }

    fn view_matrix(&self) -> Mat4 {
        free_view_matrix(&self.transform)
    }

    fn update_size(&mut self, size: ViewportSize) {
        self.aspect = size.aspect();
    }

    fn update(&mut self, delta_time: f32, input: &mut InputSnapshot) {
        let delta = self.update_input(delta_time, input);
        self.transform.position += delta.position;

        let scroll = input.take_scroll();
        self.view_size = (self.view_size - (scroll.x + scroll.y)).max(MIN_VIEW_SIZE);
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
    fn test_projection_covers_view_rect() {
        let mut camera = OrthographicCamera::default();
        camera.update_size(ViewportSize::new(200.0, 100.0));

        let corner = camera.projection_matrix().project_point3(Vec3::new(10.0, 5.0, 1.0));
        assert!((corner.x - 1.0).abs() < 1e-6);
        assert!((corner.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_scroll_zooms_and_drains() {
        let mut camera = OrthographicCamera::default();
        let mut input = InputSnapshot::new();
        input.add_scroll(Vec2::new(1.0, 2.0));

        camera.update(0.016, &mut input);

        assert_eq!(camera.view_size, 7.0);
        assert_eq!(input.scroll(), Vec2::ZERO);
    }

    #[test]
    fn test_zoom_floor() {
        let mut camera = OrthographicCamera::default();
        let mut input = InputSnapshot::new();
        input.add_scroll(Vec2::new(0.0, 50.0));

        camera.update(0.016, &mut input);

        assert_eq!(camera.view_size, MIN_VIEW_SIZE);
        assert!(camera.projection_matrix().is_finite());
    }

    #[test]
    fn test_translation_only() {
        let mut camera = OrthographicCamera::default();
        let mut input = InputSnapshot::new();
        input.press(Button::KeyD);
        input.right_stick = Vec2::new(1.0, 1.0);

        camera.update(1.0, &mut input);

        assert!(camera.transform.position.abs_diff_eq(Vec3::new(3.0, 0.0, 0.0), 1e-6));
        assert_eq!(camera.transform.rotation, Vec3::ZERO);
    }
}

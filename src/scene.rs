use glam::{Mat4, Vec3};

use crate::camera::{create_camera, Camera};
use crate::config::SceneConfig;
use crate::core::{InputSnapshot, ViewportSize};
use crate::debug_lines::DebugLines;
use crate::lighting::SceneLighting;
use crate::transform::Transform;
use crate::types::{LineVertex, Params, Uniforms};

/// A named placement in the scene. Meshes and textures live with the host.
#[derive(Debug, Clone)]
pub struct Model {
    pub name: String,
    pub transform: Transform,
    /// Texture repeat count across the surface
    pub tiling: u32,
}

impl Model {
    pub fn new(name: impl Into<String>, transform: Transform) -> Self {
        Self {
            name: name.into(),
            transform,
            tiling: 1,
        }
    }

    pub fn with_tiling(mut self, tiling: u32) -> Self {
        self.tiling = tiling;
        self
    }
}

/// Ground, house, box and rocket
pub fn create_default_models() -> Vec<Model> {
    let ground = Model::new(
        "ground",
        Transform::new()
            .with_rotation(Vec3::new(180f32.to_radians(), 0.0, 90f32.to_radians()))
            .with_uniform_scale(40.0),
    )
    .with_tiling(16);

    let house = Model::new("lowpoly-house", Transform::new());

    let crate_box = Model::new("box", Transform::from_position(Vec3::new(2.8, 1.0, 0.0)));

    let rocket = Model::new(
        "rocket",
        Transform::from_position(Vec3::new(-3.0, 0.5, 0.0))
            .with_rotation(Vec3::new(0.0, 0.0, -0.6))
            .with_uniform_scale(0.1),
    );

    vec![ground, house, crate_box, rocket]
}

/// Per-frame data for the host renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameUniforms {
    pub view_matrix: Mat4,
    pub projection_matrix: Mat4,
    pub camera_position: Vec3,
}

/// Owns the active camera and drives it once per resize and once per frame
pub struct Scene {
    camera: Box<dyn Camera>,
    pub models: Vec<Model>,
    pub lighting: SceneLighting,
    pub shots: DebugLines,
    viewport: ViewportSize,
}

impl Scene {
    pub fn new(camera: Box<dyn Camera>) -> Self {
        Self {
            camera,
            models: create_default_models(),
            lighting: SceneLighting::new(),
            shots: DebugLines::new(),
            viewport: ViewportSize::new(1.0, 1.0),
        }
    }

    pub fn from_config(config: &SceneConfig) -> Self {
        let mut camera = create_camera(config.camera, config.settings);
        camera.transform_mut().position = config.camera_position;
        let scene = Self::new(camera);
        log::info!(
            "Scene created: {:?} camera at {:?}, {} models",
            config.camera,
            config.camera_position,
            scene.models.len()
        );
        scene
    }

    /// Swap the active camera, keeping the current viewport. Scroll and mouse
    /// motion gathered for the old camera are discarded so the new one only
    /// sees input from its own frames.
    pub fn set_camera(&mut self, mut camera: Box<dyn Camera>, input: &mut InputSnapshot) {
        camera.update_size(self.viewport);
        input.take_scroll();
        input.take_mouse_delta();
        self.camera = camera;
    }

    pub fn camera(&self) -> &dyn Camera {
        self.camera.as_ref()
    }

    pub fn viewport(&self) -> ViewportSize {
        self.viewport
    }

    /// Call on every drawable resize
    pub fn resize(&mut self, size: ViewportSize) {
        log::debug!("Viewport resized to {}x{}", size.width, size.height);
        self.viewport = size;
        self.camera.update_size(size);
    }

    /// Call exactly once per rendered frame, before reading matrices
    pub fn update(&mut self, delta_time: f32, input: &mut InputSnapshot) {
        self.camera.update(delta_time, input);
    }

    pub fn view_matrix(&self) -> Mat4 {
        self.camera.view_matrix()
    }

    pub fn projection_matrix(&self) -> Mat4 {
        self.camera.projection_matrix()
    }

    pub fn camera_position(&self) -> Vec3 {
        self.camera.position()
    }

    pub fn frame_uniforms(&self) -> FrameUniforms {
        FrameUniforms {
            view_matrix: self.view_matrix(),
            projection_matrix: self.projection_matrix(),
            camera_position: self.camera_position(),
        }
    }

    /// Vertex uniforms for drawing `model` this frame
    pub fn model_uniforms(&self, model: &Model) -> Uniforms {
        Uniforms::new(
            model.transform.model_matrix(),
            self.view_matrix(),
            self.projection_matrix(),
            model.transform.normal_matrix(),
        )
    }

    /// Fragment parameters for drawing `model` this frame
    pub fn params(&self, model: &Model) -> Params {
        Params {
            width: self.viewport.width.max(0.0) as u32,
            height: self.viewport.height.max(0.0) as u32,
            tiling: model.tiling,
            light_count: self.lighting.light_count(),
            camera_position: self.camera_position().to_array(),
            _pad: 0.0,
        }
    }

    /// Record a shot from the camera along its look direction
    pub fn fire(&mut self) -> Option<LineVertex> {
        let shot = self.shots.fire(self.camera.position(), self.camera.look_direction());
        if let Some(line) = &shot {
            log::debug!("Shot fired from {:?} to {:?}", line.start(), line.end());
        }
        shot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::{ArcballCamera, FirstPersonCamera, PlayerCamera};
    use crate::config::CameraKind;

    #[test]
    fn test_default_models() {
        let models = create_default_models();
        let names: Vec<&str> = models.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["ground", "lowpoly-house", "box", "rocket"]);
        assert_eq!(models[0].tiling, 16);
        assert_eq!(models[0].transform.scale, Vec3::splat(40.0));
    }

    #[test]
    fn test_from_config_places_camera() {
        let scene = Scene::from_config(&SceneConfig::default());
        assert_eq!(scene.camera_position(), Vec3::new(0.0, 1.4, -4.0));
    }

    #[test]
    fn test_set_camera_keeps_aspect() {
        let mut scene = Scene::new(Box::new(PlayerCamera::default()));
        scene.resize(ViewportSize::new(800.0, 400.0));

        let mut reference = ArcballCamera::default();
        reference.update_size(ViewportSize::new(800.0, 400.0));

        scene.set_camera(Box::new(ArcballCamera::default()), &mut InputSnapshot::new());
        assert_eq!(scene.projection_matrix(), reference.projection_matrix());
    }

    #[test]
    fn test_params_track_viewport_and_lights() {
        let mut scene = Scene::from_config(&SceneConfig {
            camera: CameraKind::FirstPerson,
            ..SceneConfig::default()
        });
        scene.resize(ViewportSize::new(640.0, 480.0));

        let params = scene.params(&scene.models[0]);
        assert_eq!((params.width, params.height), (640, 480));
        assert_eq!(params.tiling, 16);
        assert_eq!(params.light_count, 4);
        assert_eq!(params.camera_position, [0.0, 1.4, -4.0]);
    }

    #[test]
    fn test_model_uniforms_use_camera() {
        let scene = Scene::new(Box::new(FirstPersonCamera::default()));
        let model = &scene.models[2];
        let uniforms = scene.model_uniforms(model);

        assert_eq!(uniforms.model_matrix, model.transform.model_matrix().to_cols_array_2d());
        assert_eq!(uniforms.view_matrix, scene.view_matrix().to_cols_array_2d());
    }

    #[test]
    fn test_fire_records_shot() {
        let mut scene = Scene::new(Box::new(FirstPersonCamera::default()));
        let shot = scene.fire().unwrap();

        assert_eq!(shot.start(), Vec3::ZERO);
        assert!(shot.end().abs_diff_eq(Vec3::new(0.0, 0.0, crate::debug_lines::SHOT_RANGE), 1e-4));
        assert_eq!(scene.shots.len(), 1);
    }
}

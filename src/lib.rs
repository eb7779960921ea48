pub mod camera;
pub mod cli;
pub mod config;
pub mod core;
pub mod debug_lines;
pub mod lighting;
pub mod movement;
pub mod scene;
pub mod transform;
pub mod types;

pub use camera::{
    create_camera, ArcballCamera, Camera, FirstPersonCamera, OrthographicCamera, PlayerCamera,
};
pub use config::{CameraKind, CameraSettings, SceneConfig};
pub use crate::core::{InputSnapshot, SharedInput, ViewportSize};
pub use movement::Movement;
pub use scene::{FrameUniforms, Model, Scene};
pub use transform::Transform;

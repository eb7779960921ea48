use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use glam::Vec2;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use camera_rig::camera::create_camera;
use camera_rig::cli::Cli;
use camera_rig::config::{CameraKind, SceneConfig};
use camera_rig::core::{
    Button, Clock, Controller, FpsCounter, GamepadButton, InputSnapshot, SharedInput, ViewportSize,
    WinitInput,
};
use camera_rig::scene::Scene;

// === Constants ===

const INITIAL_WINDOW_WIDTH: u32 = 800;
const INITIAL_WINDOW_HEIGHT: u32 = 600;

// === Application ===

struct App {
    window: Option<Arc<Window>>,
    scene: Scene,
    config: SceneConfig,
    input: SharedInput,
    winit_input: WinitInput,
    clock: Clock,
    fps: FpsCounter,
    fire_held: bool,
}

impl App {
    fn new(config: SceneConfig) -> Self {
        Self {
            window: None,
            scene: Scene::from_config(&config),
            config,
            input: SharedInput::new(),
            winit_input: WinitInput::new(),
            clock: Clock::new(),
            fps: FpsCounter::new(),
            fire_held: false,
        }
    }

    fn switch_camera(&mut self, kind: CameraKind) {
        let mut camera = create_camera(kind, self.config.settings);
        camera.transform_mut().position = self.scene.camera_position();
        self.scene.set_camera(camera, &mut self.input.lock());
        log::info!("Switched to {:?} camera", kind);
    }

    fn redraw(&mut self) {
        let delta = self.clock.tick();
        if let Some(fps) = self.fps.record(delta) {
            log::info!("FPS: {:.1}", fps);
        }

        let fire = {
            let mut input = self.input.lock();
            self.scene.update(delta, &mut input);
            input.is_down(Button::Space) || input.is_gamepad_down(GamepadButton::A)
        };

        // One shot per press
        if fire && !self.fire_held {
            self.scene.fire();
        }
        self.fire_held = fire;

        let frame = self.scene.frame_uniforms();
        log::trace!(
            "camera {:?} view {:?}",
            frame.camera_position,
            frame.view_matrix.to_cols_array()
        );
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window = match event_loop.create_window(
                Window::default_attributes()
                    .with_title("Camera Rig")
                    .with_inner_size(winit::dpi::LogicalSize::new(
                        INITIAL_WINDOW_WIDTH,
                        INITIAL_WINDOW_HEIGHT,
                    )),
            ) {
                Ok(w) => Arc::new(w),
                Err(e) => {
                    log::error!("Failed to create window: {}", e);
                    event_loop.exit();
                    return;
                }
            };

            self.scene.resize(window.inner_size().into());
            self.clock.reset();
            self.window = Some(window);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        self.winit_input.process_event(&mut self.input.lock(), &event);

        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(code),
                        repeat: false,
                        ..
                    },
                ..
            } => {
                let kind = match code {
                    KeyCode::Digit1 => Some(CameraKind::FirstPerson),
                    KeyCode::Digit2 => Some(CameraKind::Arcball),
                    KeyCode::Digit3 => Some(CameraKind::Orthographic),
                    KeyCode::Digit4 => Some(CameraKind::Player),
                    _ => None,
                };
                if let Some(kind) = kind {
                    self.switch_camera(kind);
                }
            }
            WindowEvent::Resized(size) => self.scene.resize(size.into()),
            WindowEvent::RedrawRequested => self.redraw(),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

// === Headless ===

/// Scripted input for frame `frame` of `frames`: walk forward, then drag and
/// zoom.
fn scripted_input(input: &mut InputSnapshot, frame: u32, frames: u32) {
    if frame == 0 {
        input.press(Button::KeyW);
    }
    if frame == frames / 2 {
        input.release(Button::KeyW);
        input.press(Button::MouseLeft);
        input.add_scroll(Vec2::new(0.0, 5.0));
    }
    if frame >= frames / 2 {
        input.add_mouse_delta(Vec2::new(4.0, 1.0));
    }
}

fn run_headless(config: &SceneConfig, cli: &Cli) -> Result<()> {
    let mut scene = Scene::from_config(config);
    scene.resize(ViewportSize::new(
        INITIAL_WINDOW_WIDTH as f32,
        INITIAL_WINDOW_HEIGHT as f32,
    ));
    let mut input = InputSnapshot::new();

    for frame in 0..cli.frames {
        scripted_input(&mut input, frame, cli.frames);
        scene.update(cli.dt, &mut input);

        if !cli.quiet || frame + 1 == cli.frames {
            let uniforms = scene.frame_uniforms();
            let record = serde_json::json!({
                "frame": frame,
                "camera_position": uniforms.camera_position,
                "rotation": scene.camera().transform().rotation,
                "view_matrix": uniforms.view_matrix.to_cols_array(),
                "projection_matrix": uniforms.projection_matrix.to_cols_array(),
            });
            println!("{}", serde_json::to_string(&record).context("serialize frame")?);
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => SceneConfig::load(path)?,
        None => SceneConfig::default(),
    };
    if let Some(kind) = cli.camera {
        config.camera = kind;
    }

    if cli.headless {
        return run_headless(&config, &cli);
    }

    let event_loop = EventLoop::new().context("failed to create event loop")?;
    let mut app = App::new(config);

    log::info!("Camera Rig - Controls: WASD, left-drag to look, scroll to zoom, Space to fire, 1-4 to switch camera, Escape to quit");
    event_loop.run_app(&mut app).context("event loop failed")?;

    Ok(())
}

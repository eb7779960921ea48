use glam::Vec2;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::controller::Button;
use super::input::InputSnapshot;

/// Pixel-precise trackpads report pixels; cameras expect wheel lines
const PIXELS_PER_LINE: f32 = 20.0;

/// Adapter that bridges Winit window events into an [`InputSnapshot`]
#[derive(Debug, Clone, Default)]
pub struct WinitInput {
    /// Last cursor position, used to turn absolute moves into deltas
    cursor_position: Option<(f32, f32)>,
}

impl WinitInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a Winit WindowEvent and write the result into `input`
    pub fn process_event(&mut self, input: &mut InputSnapshot, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(keycode) = event.physical_key {
                    if let Some(button) = Self::keycode_to_button(keycode) {
                        Self::apply(input, button, event.state);
                    }
                }
            }
            WindowEvent::MouseInput { state, button, .. } => {
                if let Some(btn) = Self::mouse_button_to_button(*button) {
                    Self::apply(input, btn, *state);
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                let new_pos = (position.x as f32, position.y as f32);
                if let Some(old_pos) = self.cursor_position {
                    input.add_mouse_delta(Vec2::new(new_pos.0 - old_pos.0, new_pos.1 - old_pos.1));
                }
                self.cursor_position = Some(new_pos);
            }
            WindowEvent::CursorLeft { .. } => {
                self.cursor_position = None;
            }
            WindowEvent::MouseWheel { delta, .. } => {
                input.add_scroll(Self::scroll_lines(*delta));
            }
            WindowEvent::Focused(false) => {
                // Key-up events are lost while unfocused
                self.cursor_position = None;
                input.release_window_input();
            }
            _ => {}
        }
    }

    fn apply(input: &mut InputSnapshot, button: Button, state: ElementState) {
        match state {
            ElementState::Pressed => input.press(button),
            ElementState::Released => input.release(button),
        }
    }

    /// Normalize a wheel event to line units
    pub fn scroll_lines(delta: MouseScrollDelta) -> Vec2 {
        match delta {
            MouseScrollDelta::LineDelta(x, y) => Vec2::new(x, y),
            MouseScrollDelta::PixelDelta(pos) => {
                Vec2::new(pos.x as f32, pos.y as f32) / PIXELS_PER_LINE
            }
        }
    }

    /// Map Winit KeyCode to Button
    pub fn keycode_to_button(keycode: KeyCode) -> Option<Button> {
        match keycode {
            KeyCode::KeyW | KeyCode::ArrowUp => Some(Button::KeyW),
            KeyCode::KeyA | KeyCode::ArrowLeft => Some(Button::KeyA),
            KeyCode::KeyS | KeyCode::ArrowDown => Some(Button::KeyS),
            KeyCode::KeyD | KeyCode::ArrowRight => Some(Button::KeyD),
            KeyCode::Space => Some(Button::Space),
            KeyCode::Escape => Some(Button::Escape),
            _ => None,
        }
    }

    /// Map Winit MouseButton to Button
    fn mouse_button_to_button(button: MouseButton) -> Option<Button> {
        match button {
            MouseButton::Left => Some(Button::MouseLeft),
            MouseButton::Right => Some(Button::MouseRight),
            _ => None,
        }
    }
}

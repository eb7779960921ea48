use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use glam::Vec2;

use super::controller::{Button, Controller, GamepadButton};

/// Input state written by host event callbacks and read once per frame.
///
/// `mouse_delta` and `scroll` are accumulators: event handlers add to them and
/// the active camera drains them with [`InputSnapshot::take_mouse_delta`] /
/// [`InputSnapshot::take_scroll`]. Nothing else should reset them.
#[derive(Debug, Clone, Default)]
pub struct InputSnapshot {
    keys: HashSet<Button>,
    gamepad_buttons: HashSet<GamepadButton>,
    pub left_stick: Vec2,
    pub right_stick: Vec2,
    pub left_mouse_down: bool,
    mouse_delta: Vec2,
    scroll: Vec2,
}

impl InputSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, button: Button) {
        if button == Button::MouseLeft {
            self.left_mouse_down = true;
        }
        self.keys.insert(button);
    }

    pub fn release(&mut self, button: Button) {
        if button == Button::MouseLeft {
            self.left_mouse_down = false;
        }
        self.keys.remove(&button);
    }

    pub fn press_gamepad(&mut self, button: GamepadButton) {
        self.gamepad_buttons.insert(button);
    }

    pub fn release_gamepad(&mut self, button: GamepadButton) {
        self.gamepad_buttons.remove(&button);
    }

    /// Accumulate relative mouse motion
    pub fn add_mouse_delta(&mut self, delta: Vec2) {
        self.mouse_delta += delta;
    }

    /// Accumulate scroll wheel motion
    pub fn add_scroll(&mut self, delta: Vec2) {
        self.scroll += delta;
    }

    /// Peek at the pending mouse delta without consuming it
    pub fn mouse_delta(&self) -> Vec2 {
        self.mouse_delta
    }

    /// Peek at the pending scroll without consuming it
    pub fn scroll(&self) -> Vec2 {
        self.scroll
    }

    /// Drop host-window state after focus loss: held keys, mouse buttons and
    /// pending motion. Sticks and gamepad buttons are owned by the gamepad
    /// source and left alone.
    pub fn release_window_input(&mut self) {
        self.keys.clear();
        self.left_mouse_down = false;
        self.mouse_delta = Vec2::ZERO;
        self.scroll = Vec2::ZERO;
    }

    /// Drain the accumulated mouse delta
    pub fn take_mouse_delta(&mut self) -> Vec2 {
        std::mem::take(&mut self.mouse_delta)
    }

    /// Drain the accumulated scroll
    pub fn take_scroll(&mut self) -> Vec2 {
        std::mem::take(&mut self.scroll)
    }
}

impl Controller for InputSnapshot {
    fn is_down(&self, button: Button) -> bool {
        self.keys.contains(&button)
    }

    fn is_gamepad_down(&self, button: GamepadButton) -> bool {
        self.gamepad_buttons.contains(&button)
    }
}

/// Shared handle for writers on another execution context.
///
/// The frame tick locks once, hands `&mut InputSnapshot` to the camera, and
/// releases it before rendering.
#[derive(Debug, Clone, Default)]
pub struct SharedInput {
    inner: Arc<Mutex<InputSnapshot>>,
}

impl SharedInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lock the snapshot. A poisoned lock is recovered: the snapshot is plain
    /// data and stays consistent field by field.
    pub fn lock(&self) -> MutexGuard<'_, InputSnapshot> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run a writer callback against the snapshot
    pub fn write<R>(&self, f: impl FnOnce(&mut InputSnapshot) -> R) -> R {
        let mut guard = self.lock();
        f(&mut guard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_snapshot_empty() {
        let input = InputSnapshot::new();
        assert!(!input.is_down(Button::KeyW));
        assert!(!input.left_mouse_down);
        assert_eq!(input.mouse_delta(), Vec2::ZERO);
        assert_eq!(input.scroll(), Vec2::ZERO);
    }

    #[test]
    fn test_press_release() {
        let mut input = InputSnapshot::new();
        input.press(Button::KeyW);
        input.press(Button::KeyW);
        assert!(input.is_down(Button::KeyW));

        input.release(Button::KeyW);
        assert!(!input.is_down(Button::KeyW));
    }

    #[test]
    fn test_mouse_left_tracks_flag() {
        let mut input = InputSnapshot::new();
        input.press(Button::MouseLeft);
        assert!(input.left_mouse_down);
        input.release(Button::MouseLeft);
        assert!(!input.left_mouse_down);
    }

    #[test]
    fn test_gamepad_buttons() {
        let mut input = InputSnapshot::new();
        input.press_gamepad(GamepadButton::A);
        assert!(input.is_gamepad_down(GamepadButton::A));
        assert!(!input.is_down(Button::Space));

        input.release_gamepad(GamepadButton::A);
        assert!(!input.is_gamepad_down(GamepadButton::A));
    }

    #[test]
    fn test_take_drains_accumulators() {
        let mut input = InputSnapshot::new();
        input.add_mouse_delta(Vec2::new(3.0, 1.0));
        input.add_mouse_delta(Vec2::new(2.0, -1.0));
        input.add_scroll(Vec2::new(0.0, 4.0));

        assert_eq!(input.take_mouse_delta(), Vec2::new(5.0, 0.0));
        assert_eq!(input.take_mouse_delta(), Vec2::ZERO);
        assert_eq!(input.take_scroll(), Vec2::new(0.0, 4.0));
        assert_eq!(input.scroll(), Vec2::ZERO);
    }

    #[test]
    fn test_shared_input_across_threads() {
        let shared = SharedInput::new();
        let writer = shared.clone();

        std::thread::spawn(move || {
            writer.write(|input| {
                input.press(Button::KeyD);
                input.add_scroll(Vec2::new(1.0, 1.0));
            });
        })
        .join()
        .unwrap();

        let mut input = shared.lock();
        assert!(input.is_down(Button::KeyD));
        assert_eq!(input.take_scroll(), Vec2::new(1.0, 1.0));
    }
}

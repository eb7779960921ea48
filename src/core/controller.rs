/// Keyboard / mouse button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    KeyW,
    KeyA,
    KeyS,
    KeyD,
    Space,
    Escape,
    MouseLeft,
    MouseRight,
}

/// Gamepad face and system buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamepadButton {
    A,
    B,
    X,
    Y,
    Menu,
    Options,
    Home,
}

/// Controller - read-only view of held buttons
pub trait Controller {
    /// Check if a keyboard/mouse button is currently down
    fn is_down(&self, button: Button) -> bool;

    /// Check if a gamepad button is currently down
    fn is_gamepad_down(&self, button: GamepadButton) -> bool;
}

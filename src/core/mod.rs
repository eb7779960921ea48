pub mod clock;
pub mod controller;
pub mod input;
pub mod input_adapter;
pub mod viewport;

pub use clock::{Clock, FpsCounter};
pub use controller::{Button, Controller, GamepadButton};
pub use input::{InputSnapshot, SharedInput};
pub use input_adapter::WinitInput;
pub use viewport::ViewportSize;

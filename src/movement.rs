use glam::Vec3;

use crate::config::CameraSettings;
use crate::core::{Button, Controller, InputSnapshot};
use crate::transform::Transform;

/// Free-fly controls shared by cameras that walk the ground plane.
///
/// Implementors only expose their transform and tuning; the default methods
/// turn held keys and joystick axes into a per-frame delta.
pub trait Movement {
    /// Current pose the deltas are relative to
    fn pose(&self) -> &Transform;

    fn settings(&self) -> &CameraSettings;

    /// Ground-plane forward from yaw only
    fn forward_vector(&self) -> Vec3 {
        let yaw = self.pose().rotation.y;
        Vec3::new(yaw.sin(), 0.0, yaw.cos()).normalize()
    }

    /// Forward rotated 90 degrees about +Y
    fn right_vector(&self) -> Vec3 {
        let forward = self.forward_vector();
        Vec3::new(forward.z, forward.y, -forward.x)
    }

    /// Delta to add to the camera this frame. Only `position` and `rotation`
    /// carry meaning; the input accumulators are left untouched.
    fn update_input(&self, delta_time: f32, input: &InputSnapshot) -> Transform {
        let settings = self.settings();
        let rotation_amount = delta_time * settings.rotation_speed;
        let translation_amount = delta_time * settings.translation_speed;

        let mut delta = Transform::new();
        let mut direction = key_direction(input);

        delta.rotation.y += input.right_stick.x * rotation_amount;
        delta.rotation.x += input.right_stick.y * rotation_amount;

        if input.left_stick != glam::Vec2::ZERO {
            direction = Vec3::new(input.left_stick.x, 0.0, input.left_stick.y);
            let magnitude = direction.length();
            if magnitude > 1.0 {
                direction /= magnitude;
            }
        }

        if direction != Vec3::ZERO {
            delta.position = (direction.z * self.forward_vector()
                + direction.x * self.right_vector())
                * translation_amount;
        }

        delta
    }
}

/// WASD as a unit ground-plane direction; zero when nothing (or opposing
/// keys) is held.
fn key_direction(input: &InputSnapshot) -> Vec3 {
    let axis = |positive: Button, negative: Button| match (input.is_down(positive), input.is_down(negative)) {
        (true, false) => 1.0,
        (false, true) => -1.0,
        _ => 0.0,
    };

    let direction = Vec3::new(
        axis(Button::KeyD, Button::KeyA),
        0.0,
        axis(Button::KeyW, Button::KeyS),
    );

    if direction == Vec3::ZERO {
        direction
    } else {
        direction.normalize()
    }
}

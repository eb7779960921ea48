use glam::Vec3;

use crate::types::{Light, LightType};

/// Fixed light rig: sun, ambient fill, red point light and a blue spotlight
#[derive(Debug, Clone)]
pub struct SceneLighting {
    pub lights: Vec<Light>,
}

impl SceneLighting {
    pub fn new() -> Self {
        let sunlight = Light::new(LightType::Sun).with_position(Vec3::new(1.0, 2.0, -2.0));

        let ambient = Light::new(LightType::Ambient).with_color(Vec3::splat(0.04));

        let red_light = Light::new(LightType::Point)
            .with_position(Vec3::new(-2.0, 0.76, -0.18))
            .with_color(Vec3::X)
            .with_attenuation(Vec3::new(0.5, 2.0, 1.0));

        let spotlight = Light::new(LightType::Spot)
            .with_position(Vec3::new(0.0, 0.64, 3.07))
            .with_color(Vec3::Z)
            .with_cone(20f32.to_radians(), Vec3::new(0.0, -0.15, -0.5), 32.0);

        Self {
            lights: vec![sunlight, ambient, red_light, spotlight],
        }
    }

    pub fn light_count(&self) -> u32 {
        self.lights.len() as u32
    }
}

impl Default for SceneLighting {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rig() {
        let lighting = SceneLighting::new();
        assert_eq!(lighting.light_count(), 4);

        let types: Vec<u32> = lighting.lights.iter().map(|l| l.light_type).collect();
        assert_eq!(
            types,
            vec![
                LightType::Sun as u32,
                LightType::Ambient as u32,
                LightType::Point as u32,
                LightType::Spot as u32
            ]
        );
    }

    #[test]
    fn test_spotlight_cone() {
        let lighting = SceneLighting::new();
        let spot = lighting.lights[3];
        assert!((spot.cone_angle - 20f32.to_radians()).abs() < 1e-6);
        assert_eq!(spot.cone_attenuation, 32.0);
        assert_eq!(spot.color, [0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_lights_pack_contiguously() {
        let lighting = SceneLighting::new();
        let bytes: &[u8] = bytemuck::cast_slice(&lighting.lights);
        assert_eq!(bytes.len(), 4 * std::mem::size_of::<Light>());
    }
}

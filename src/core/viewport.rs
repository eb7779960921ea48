/// Smallest width/height used when computing an aspect ratio
pub const MIN_VIEWPORT_EXTENT: f32 = 1.0;

/// Drawable size reported by the host on every resize
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportSize {
    pub width: f32,
    pub height: f32,
}

impl ViewportSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// `width / height`, with both sides clamped to [`MIN_VIEWPORT_EXTENT`]
    /// so a minimized or zero-height surface never yields inf/NaN.
    pub fn aspect(&self) -> f32 {
        let width = sanitize(self.width);
        let height = sanitize(self.height);
        width / height
    }
}

fn sanitize(extent: f32) -> f32 {
    if extent.is_nan() {
        MIN_VIEWPORT_EXTENT
    } else {
        extent.max(MIN_VIEWPORT_EXTENT)
    }
}

impl From<winit::dpi::PhysicalSize<u32>> for ViewportSize {
    fn from(size: winit::dpi::PhysicalSize<u32>) -> Self {
        Self::new(size.width as f32, size.height as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aspect_exact() {
        assert_eq!(ViewportSize::new(800.0, 400.0).aspect(), 2.0);
        assert_eq!(ViewportSize::new(1920.0, 1080.0).aspect(), 1920.0 / 1080.0);
    }

    #[test]
    fn test_zero_height_clamped() {
        let aspect = ViewportSize::new(100.0, 0.0).aspect();
        assert!(aspect.is_finite());
        assert_eq!(aspect, 100.0);
    }

    #[test]
    fn test_negative_and_nan_clamped() {
        assert_eq!(ViewportSize::new(100.0, -5.0).aspect(), 100.0);
        assert_eq!(ViewportSize::new(0.0, 0.0).aspect(), 1.0);
        assert_eq!(ViewportSize::new(f32::NAN, 2.0).aspect(), 0.5);
    }

    #[test]
    fn test_from_physical_size() {
        let size: ViewportSize = winit::dpi::PhysicalSize::new(1280u32, 720u32).into();
        assert_eq!(size, ViewportSize::new(1280.0, 720.0));
    }
}

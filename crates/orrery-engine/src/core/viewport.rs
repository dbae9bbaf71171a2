/// Size of the host's drawing surface.
///
/// Replaced wholesale on every resize; the camera aspect and the host's
/// output buffer are derived from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// CSS pixel width.
    pub width: f32,
    /// CSS pixel height.
    pub height: f32,
    /// Device pixels per CSS pixel.
    pub pixel_ratio: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32, pixel_ratio: f32) -> Self {
        Self {
            width: width.max(1.0),
            height: height.max(1.0),
            pixel_ratio: if pixel_ratio > 0.0 { pixel_ratio } else { 1.0 },
        }
    }

    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }

    /// Output buffer size in device pixels.
    pub fn physical_size(&self) -> (u32, u32) {
        (
            (self.width * self.pixel_ratio).round() as u32,
            (self.height * self.pixel_ratio).round() as u32,
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800.0, 600.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_and_physical_size() {
        let vp = Viewport::new(1920.0, 1080.0, 2.0);
        assert!((vp.aspect() - 16.0 / 9.0).abs() < 1e-6);
        assert_eq!(vp.physical_size(), (3840, 2160));
    }

    #[test]
    fn degenerate_sizes_are_guarded() {
        let vp = Viewport::new(0.0, 0.0, 0.0);
        assert_eq!(vp.width, 1.0);
        assert_eq!(vp.height, 1.0);
        assert_eq!(vp.pixel_ratio, 1.0);
    }
}

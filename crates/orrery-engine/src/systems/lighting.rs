/// Point and ambient lights.
///
/// Lights are persistent: they stay until explicitly removed.
/// Each frame the runner hands the packed light array to the host's
/// lighting pass.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// A point light with position, color, intensity and falloff distance.
///
/// Wire format (8 floats / 32 bytes):
/// `[x, y, z, r, g, b, intensity, distance]`
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct PointLight {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub intensity: f32,
    /// Falloff distance in world units. 0 = no falloff.
    pub distance: f32,
}

impl PointLight {
    pub const FLOATS: usize = 8;

    /// Create a new point light at the given position.
    ///
    /// - `pos`: World-space position
    /// - `color`: RGB color (typically [0..1] but can exceed 1.0 for HDR)
    /// - `intensity`: Light strength multiplier
    pub fn new(pos: Vec3, color: [f32; 3], intensity: f32) -> Self {
        Self {
            x: pos.x,
            y: pos.y,
            z: pos.z,
            r: color[0],
            g: color[1],
            b: color[2],
            intensity,
            distance: 0.0,
        }
    }

    pub fn with_distance(mut self, distance: f32) -> Self {
        self.distance = distance.max(0.0);
        self
    }

    pub fn pos(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }
}

/// Manages active lights and the ambient fill for the scene.
///
/// Ambient fill is configured but off by default: with no ambient term the
/// night side of a lit body stays black.
pub struct LightState {
    lights: Vec<PointLight>,
    ambient: [f32; 3],
    ambient_intensity: f32,
    ambient_enabled: bool,
}

impl LightState {
    pub fn new() -> Self {
        Self::with_capacity(8)
    }

    /// Create a LightState with a specific light capacity.
    pub fn with_capacity(max_lights: usize) -> Self {
        Self {
            lights: Vec::with_capacity(max_lights),
            ambient: [1.0, 1.0, 1.0],
            ambient_intensity: 1.0,
            ambient_enabled: false,
        }
    }

    /// Add a point light to the scene.
    pub fn add(&mut self, light: PointLight) {
        self.lights.push(light);
    }

    /// Remove all lights.
    pub fn clear(&mut self) {
        self.lights.clear();
    }

    /// Get an iterator over active lights.
    pub fn iter(&self) -> impl Iterator<Item = &PointLight> {
        self.lights.iter()
    }

    /// Number of active lights.
    pub fn count(&self) -> usize {
        self.lights.len()
    }

    /// Set the ambient fill color and intensity. Does not change whether it is enabled.
    pub fn set_ambient(&mut self, color: [f32; 3], intensity: f32) {
        self.ambient = color;
        self.ambient_intensity = intensity;
    }

    pub fn set_ambient_enabled(&mut self, enabled: bool) {
        self.ambient_enabled = enabled;
    }

    pub fn ambient_enabled(&self) -> bool {
        self.ambient_enabled
    }

    /// Effective ambient RGB; black while disabled.
    pub fn ambient(&self) -> [f32; 3] {
        if !self.ambient_enabled {
            return [0.0; 3];
        }
        let k = self.ambient_intensity;
        [self.ambient[0] * k, self.ambient[1] * k, self.ambient[2] * k]
    }

    /// Lights as a flat float slice for the host.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.lights)
    }

    /// Pointer to the lights data for host-side reads.
    pub fn buffer_ptr(&self) -> *const f32 {
        self.lights.as_ptr() as *const f32
    }
}

impl Default for LightState {
    fn default() -> Self {
        Self::new()
    }
}

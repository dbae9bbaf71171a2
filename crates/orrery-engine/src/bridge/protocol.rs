/// Frame data shared with the host page.
/// Must stay in sync with the host's `protocol.ts`.
///
/// Every section is its own allocation in WASM memory with its own pointer
/// export (all values f32):
/// ```text
/// header     HEADER_FLOATS
/// camera     CAMERA_FLOATS
/// instances  instance_count × INSTANCE_FLOATS   (up to max_instances)
/// lights     light_count × LIGHT_FLOATS         (up to max_lights)
/// events     event_count × EVENT_FLOATS         (up to max_events)
/// ```
///
/// The header carries the live counts and capacities, rewritten every frame.
/// Pointers stay valid until the next call into the module.

use crate::api::game::GameConfig;
use crate::renderer::camera::CameraUniform;
use crate::renderer::instance::MeshInstance;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 15;

/// Header field indices.
pub const HEADER_FRAME_COUNTER: usize = 0;
pub const HEADER_PROTOCOL_VERSION: usize = 1;
pub const HEADER_MAX_INSTANCES: usize = 2;
pub const HEADER_INSTANCE_COUNT: usize = 3;
pub const HEADER_MAX_LIGHTS: usize = 4;
pub const HEADER_LIGHT_COUNT: usize = 5;
pub const HEADER_MAX_EVENTS: usize = 6;
pub const HEADER_EVENT_COUNT: usize = 7;
pub const HEADER_VIEWPORT_WIDTH: usize = 8;
pub const HEADER_VIEWPORT_HEIGHT: usize = 9;
pub const HEADER_PIXEL_RATIO: usize = 10;
pub const HEADER_AMBIENT_R: usize = 11;
pub const HEADER_AMBIENT_G: usize = 12;
pub const HEADER_AMBIENT_B: usize = 13;
pub const HEADER_ELAPSED: usize = 14;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats in the camera section: view, projection, eye position.
pub const CAMERA_FLOATS: usize = CameraUniform::FLOATS;

/// Floats per mesh instance.
pub const INSTANCE_FLOATS: usize = MeshInstance::FLOATS;

/// Floats per point light: x, y, z, r, g, b, intensity, distance.
pub const LIGHT_FLOATS: usize = 8;

/// Floats per game event: kind, a, b, c.
pub const EVENT_FLOATS: usize = 4;

/// The header frame counter wraps here: every value below it is exact in f32.
pub const FRAME_COUNTER_WRAP: u32 = 1 << 24;

/// Per-section capacities, fixed at init.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProtocolLayout {
    pub max_instances: usize,
    pub max_lights: usize,
    pub max_events: usize,
}

impl ProtocolLayout {
    pub fn new(max_instances: usize, max_lights: usize, max_events: usize) -> Self {
        Self { max_instances, max_lights, max_events }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.max_instances, config.max_lights, config.max_events)
    }
}

/// Per-frame header block the host polls before reading the other sections.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameHeader {
    data: [f32; HEADER_FLOATS],
    frame: u32,
}

impl FrameHeader {
    pub fn new(layout: &ProtocolLayout) -> Self {
        let mut data = [0.0; HEADER_FLOATS];
        data[HEADER_MAX_INSTANCES] = layout.max_instances as f32;
        data[HEADER_MAX_LIGHTS] = layout.max_lights as f32;
        data[HEADER_MAX_EVENTS] = layout.max_events as f32;
        data[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
        Self { data, frame: 0 }
    }

    pub fn get(&self, field: usize) -> f32 {
        self.data[field]
    }

    pub fn set(&mut self, field: usize, value: f32) {
        self.data[field] = value;
    }

    /// Count one more frame. The header copy wraps at `FRAME_COUNTER_WRAP`
    /// so it changes on every frame; the host only compares it for
    /// inequality with the last value it drew.
    pub fn next_frame(&mut self) -> u32 {
        self.frame = self.frame.wrapping_add(1);
        self.data[HEADER_FRAME_COUNTER] = (self.frame % FRAME_COUNTER_WRAP) as f32;
        self.frame
    }

    /// Frames counted since construction.
    pub fn frame_counter(&self) -> u32 {
        self.frame
    }

    pub fn as_ptr(&self) -> *const f32 {
        self.data.as_ptr()
    }
}

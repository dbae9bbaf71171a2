use bytemuck::{Pod, Zeroable};

/// Per-mesh render data read by the host renderer straight from WASM memory.
/// 17 floats = 68 bytes stride.
///
/// Texture slots index the host's texture array; `-1.0` means untextured,
/// in which case the host draws the flat base color.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct MeshInstance {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Euler rotation (radians, XYZ order).
    pub rot_x: f32,
    pub rot_y: f32,
    pub rot_z: f32,
    /// 0 = sphere, 1 = torus.
    pub shape: f32,
    /// Sphere radius or torus major radius.
    pub radius: f32,
    /// Torus tube radius (0 for spheres).
    pub tube: f32,
    /// Sphere width segments, or torus radial segments.
    pub segments_a: f32,
    /// Sphere height segments, or torus tubular segments.
    pub segments_b: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    /// 0 = unlit, 1 = lit, 2 = wireframe.
    pub shading: f32,
    pub map_slot: f32,
    pub normal_slot: f32,
}

impl MeshInstance {
    pub const FLOATS: usize = 17;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
    pub const NO_TEXTURE: f32 = -1.0;
}

/// Mesh instances for one frame.
pub struct RenderBuffer {
    pub instances: Vec<MeshInstance>,
    /// Instances beyond this are dropped (host buffer size).
    capacity: usize,
    dropped: usize,
}

impl RenderBuffer {
    pub fn new() -> Self {
        Self::with_capacity(4096)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            instances: Vec::with_capacity(capacity),
            capacity,
            dropped: 0,
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
        self.dropped = 0;
    }

    /// Append an instance. Returns false (and counts the drop) when full.
    pub fn push(&mut self, instance: MeshInstance) -> bool {
        if self.instances.len() >= self.capacity {
            self.dropped += 1;
            return false;
        }
        self.instances.push(instance);
        true
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Instances rejected since the last `clear`.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Raw pointer to instance data for host-side reads.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::new()
    }
}

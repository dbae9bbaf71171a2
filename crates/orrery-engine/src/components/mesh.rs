/// Linear RGB color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const WHITE: Self = Self { r: 1.0, g: 1.0, b: 1.0 };

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Build from a `0xRRGGBB` literal.
    pub fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as f32 / 255.0,
            g: ((hex >> 8) & 0xFF) as f32 / 255.0,
            b: (hex & 0xFF) as f32 / 255.0,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Geometry primitive. Tessellation happens host-side from these parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MeshShape {
    Sphere {
        radius: f32,
        segments: u32,
    },
    /// Ring around the local Z axis; rotate by π/2 about X to lay it flat.
    Torus {
        radius: f32,
        tube: f32,
        radial_segments: u32,
        tubular_segments: u32,
    },
}

impl MeshShape {
    /// Wire code for the instance buffer.
    pub fn code(&self) -> f32 {
        match self {
            MeshShape::Sphere { .. } => 0.0,
            MeshShape::Torus { .. } => 1.0,
        }
    }
}

/// How the host shades a mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Shading {
    /// Flat color/texture, ignores lights.
    #[default]
    Unlit,
    /// Lit by point and ambient lights, supports normal maps.
    Lit,
    /// Unlit line rendering (light helpers).
    Wireframe,
}

impl Shading {
    pub fn code(&self) -> f32 {
        match self {
            Shading::Unlit => 0.0,
            Shading::Lit => 1.0,
            Shading::Wireframe => 2.0,
        }
    }
}

/// Name of a texture in the asset manifest.
pub type TextureKey = &'static str;

/// Mesh + material for a world object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshComponent {
    pub shape: MeshShape,
    pub color: Color,
    pub shading: Shading,
    /// Base color map. Missing textures render as flat `color`.
    pub map: Option<TextureKey>,
    pub normal_map: Option<TextureKey>,
}

impl MeshComponent {
    pub fn new(shape: MeshShape, color: Color) -> Self {
        Self {
            shape,
            color,
            shading: Shading::Unlit,
            map: None,
            normal_map: None,
        }
    }

    pub fn sphere(radius: f32, segments: u32) -> Self {
        Self::new(MeshShape::Sphere { radius, segments }, Color::WHITE)
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_shading(mut self, shading: Shading) -> Self {
        self.shading = shading;
        self
    }

    pub fn with_map(mut self, key: TextureKey) -> Self {
        self.map = Some(key);
        self
    }

    pub fn with_normal_map(mut self, key: TextureKey) -> Self {
        self.normal_map = Some(key);
        self
    }

    /// Tessellation counts: (width, height) for a sphere, (radial, tubular)
    /// for a torus.
    pub fn segments(&self) -> (u32, u32) {
        match self.shape {
            MeshShape::Sphere { segments, .. } => (segments, segments),
            MeshShape::Torus { radial_segments, tubular_segments, .. } => (radial_segments, tubular_segments),
        }
    }

    /// Primary and secondary size parameters (radius, tube).
    pub fn dimensions(&self) -> (f32, f32) {
        match self.shape {
            MeshShape::Sphere { radius, .. } => (radius, 0.0),
            MeshShape::Torus { radius, tube, .. } => (radius, tube),
        }
    }
}

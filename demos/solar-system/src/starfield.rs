/// Background starfield: small unlit spheres scattered through a cube
/// around the sun, kept clear of the inner system.
///
/// Placement is rejection sampling, colors come from a five-entry
/// blackbody palette. Deterministic for a given RNG state.

use glam::Vec3;
use rand::Rng;
use orrery_engine::*;

/// Stars spawned when the host does not ask for another count.
pub const DEFAULT_STAR_COUNT: usize = 2000;
/// No star closer to the origin than this.
pub const EXCLUSION_RADIUS: f32 = 200.0;
/// Each coordinate is drawn from `[-HALF_EXTENT, HALF_EXTENT]`.
pub const HALF_EXTENT: f32 = 500.0;

pub const STAR_RADIUS: f32 = 0.5;
pub const STAR_SEGMENTS: u32 = 10;

pub const STAR_TAG: &str = "star";

/// Star palette, hottest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarColor {
    /// Rigel, Spica, Bellatrix.
    Blue25000K,
    /// Sirius, Vega.
    BlueWhite10000K,
    /// Proxima, the Sun.
    White6000K,
    /// Aldebaran, Arcturus.
    Orange4000K,
    /// Antares, Betelgeuse.
    Red3000K,
}

impl StarColor {
    pub const ALL: [StarColor; 5] = [
        StarColor::Blue25000K,
        StarColor::BlueWhite10000K,
        StarColor::White6000K,
        StarColor::Orange4000K,
        StarColor::Red3000K,
    ];

    pub const COUNT: usize = Self::ALL.len();

    /// Palette lookup. Indices past the end clamp to the coolest color.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index.min(Self::COUNT - 1)]
    }

    pub fn hex(self) -> u32 {
        match self {
            StarColor::Blue25000K => 0xB5CDFF,
            StarColor::BlueWhite10000K => 0xCADAFF,
            StarColor::White6000K => 0xFFF6ED,
            StarColor::Orange4000K => 0xFFCEA6,
            StarColor::Red3000K => 0xFFB16E,
        }
    }

    pub fn color(self) -> Color {
        Color::from_hex(self.hex())
    }
}

/// Draw a point in the cube, redrawing all three coordinates until it lies
/// outside the exclusion sphere.
pub fn sample_position<R: Rng>(rng: &mut R) -> Vec3 {
    loop {
        let p = Vec3::new(
            rng.random_range(-HALF_EXTENT..=HALF_EXTENT),
            rng.random_range(-HALF_EXTENT..=HALF_EXTENT),
            rng.random_range(-HALF_EXTENT..=HALF_EXTENT),
        );
        if p.length() >= EXCLUSION_RADIUS {
            return p;
        }
    }
}

/// Uniform pick over the palette.
pub fn sample_color<R: Rng>(rng: &mut R) -> StarColor {
    StarColor::from_index(rng.random_range(0..StarColor::COUNT))
}

/// Spawn `count` stars into the scene using the context RNG.
pub fn generate(ctx: &mut EngineContext, count: usize) -> Vec<EntityId> {
    let mut ids = Vec::with_capacity(count);
    for _ in 0..count {
        let pos = sample_position(&mut ctx.rng);
        let color = sample_color(&mut ctx.rng);

        let id = ctx.next_id();
        ctx.scene.spawn(
            Entity::new(id)
                .with_tag(STAR_TAG)
                .with_pos(pos)
                .with_mesh(MeshComponent::sphere(STAR_RADIUS, STAR_SEGMENTS).with_color(color.color())),
        );
        ids.push(id);
    }
    ids
}

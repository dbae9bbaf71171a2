/// Static scene content: sun, earth, orbit ring, lights and stars.
///
/// Built once at startup. Afterwards only earth and sun transforms change.

use std::f32::consts::FRAC_PI_2;
use glam::Vec3;
use orrery_engine::*;
use crate::options::SolarOptions;
use crate::orbit::ORBIT_RADIUS;
use crate::starfield;

// ── Texture keys (host asset manifest) ──────────────────────────────

pub const TEX_EARTH_DAYMAP: TextureKey = "earth_daymap";
pub const TEX_EARTH_NORMAL: TextureKey = "earth_normal_map";
pub const TEX_SUN: TextureKey = "sun";

// ── Sun ──────────────────────────────────────────────────────────────

pub const SUN_RADIUS: f32 = 8.0;
pub const SUN_SEGMENTS: u32 = 32;
pub const SUN_LIGHT_INTENSITY: f32 = 2.0;
/// Wireframe marker drawn around the point light.
pub const LIGHT_HELPER_RADIUS: f32 = 1.0;
pub const LIGHT_HELPER_SEGMENTS: u32 = 4;

// ── Earth ────────────────────────────────────────────────────────────

pub const EARTH_RADIUS: f32 = 3.0;
pub const EARTH_SEGMENTS: u32 = 32;

// ── Orbit ring ───────────────────────────────────────────────────────

pub const RING_TUBE: f32 = 0.1;
pub const RING_RADIAL_SEGMENTS: u32 = 2;
pub const RING_TUBULAR_SEGMENTS: u32 = 200;

pub const SUN_TAG: &str = "sun";
pub const EARTH_TAG: &str = "earth";
pub const RING_TAG: &str = "orbit_ring";
pub const LIGHT_HELPER_TAG: &str = "light_helper";

/// Sun, earth, ring and helper; stars come on top of this.
pub const FIXED_BODY_COUNT: usize = 4;

/// Handles to the entities the frame loop touches.
#[derive(Debug, Clone)]
pub struct SceneHandles {
    pub sun: EntityId,
    pub earth: EntityId,
    pub light_helper: Option<EntityId>,
    pub stars: Vec<EntityId>,
}

/// Populate the scene and lights.
pub fn build_scene(ctx: &mut EngineContext, options: &SolarOptions) -> SceneHandles {
    let sun = ctx.next_id();
    ctx.scene.spawn(
        Entity::new(sun)
            .with_tag(SUN_TAG)
            .with_mesh(MeshComponent::sphere(SUN_RADIUS, SUN_SEGMENTS).with_map(TEX_SUN)),
    );

    let earth = ctx.next_id();
    ctx.scene.spawn(
        Entity::new(earth)
            .with_tag(EARTH_TAG)
            .with_pos(Vec3::new(ORBIT_RADIUS as f32, 0.0, 0.0))
            .with_mesh(
                MeshComponent::sphere(EARTH_RADIUS, EARTH_SEGMENTS)
                    .with_shading(Shading::Lit)
                    .with_map(TEX_EARTH_DAYMAP)
                    .with_normal_map(TEX_EARTH_NORMAL),
            ),
    );

    let ring = ctx.next_id();
    ctx.scene.spawn(
        Entity::new(ring)
            .with_tag(RING_TAG)
            .with_rotation(Vec3::new(FRAC_PI_2, 0.0, 0.0))
            .with_mesh(MeshComponent::new(
                MeshShape::Torus {
                    radius: ORBIT_RADIUS as f32,
                    tube: RING_TUBE,
                    radial_segments: RING_RADIAL_SEGMENTS,
                    tubular_segments: RING_TUBULAR_SEGMENTS,
                },
                Color::WHITE,
            )),
    );

    // ── Lights ───────────────────────────────────────────────────────
    let sun_light = PointLight::new(Vec3::ZERO, [1.0, 1.0, 1.0], SUN_LIGHT_INTENSITY).with_distance(0.0);
    ctx.lights.add(sun_light);
    ctx.lights.set_ambient([1.0, 1.0, 1.0], 1.0);
    ctx.lights.set_ambient_enabled(options.ambient_enabled);

    let light_helper = options.show_light_helper.then(|| {
        let id = ctx.next_id();
        ctx.scene.spawn(
            Entity::new(id)
                .with_tag(LIGHT_HELPER_TAG)
                .with_pos(sun_light.pos())
                .with_mesh(
                    MeshComponent::sphere(LIGHT_HELPER_RADIUS, LIGHT_HELPER_SEGMENTS)
                        .with_shading(Shading::Wireframe),
                ),
        );
        id
    });

    let stars = starfield::generate(ctx, options.star_count);

    SceneHandles { sun, earth, light_helper, stars }
}

use crate::assets::registry::TextureRegistry;
use crate::components::entity::Entity;
use crate::renderer::instance::{MeshInstance, RenderBuffer};

/// Flatten a set of entities into mesh instances.
/// Inactive and mesh-less entities are skipped; texture names the host never
/// listed resolve to "no texture".
pub fn build_render_buffer<'a>(
    entities: impl Iterator<Item = &'a Entity>,
    textures: &TextureRegistry,
    buffer: &mut RenderBuffer,
) {
    buffer.clear();

    for entity in entities {
        if !entity.active {
            continue;
        }

        let mesh = match &entity.mesh {
            Some(m) => m,
            None => continue,
        };

        let (radius, tube) = mesh.dimensions();
        let (segments_a, segments_b) = mesh.segments();
        buffer.push(MeshInstance {
            x: entity.pos.x,
            y: entity.pos.y,
            z: entity.pos.z,
            rot_x: entity.rotation.x,
            rot_y: entity.rotation.y,
            rot_z: entity.rotation.z,
            shape: mesh.shape.code(),
            radius,
            tube,
            segments_a: segments_a as f32,
            segments_b: segments_b as f32,
            r: mesh.color.r,
            g: mesh.color.g,
            b: mesh.color.b,
            shading: mesh.shading.code(),
            map_slot: textures.slot_or_none(mesh.map),
            normal_slot: textures.slot_or_none(mesh.normal_map),
        });
    }

    if buffer.dropped() > 0 {
        log::warn!("render buffer full: {} instances dropped", buffer.dropped());
    }
}

use std::collections::HashMap;
use crate::api::types::EntityId;
use crate::components::entity::Entity;

/// World objects, in spawn order.
///
/// Entities live for the whole run, so slots never move and an id index
/// keeps per-frame lookups of the few moving bodies off the star list.
pub struct Scene {
    entities: Vec<Entity>,
    index: HashMap<EntityId, usize>,
}

impl Scene {
    pub fn new() -> Self {
        Self::with_capacity(256)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entities: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Add an entity. Spawning an id that already exists replaces that
    /// entity in place.
    pub fn spawn(&mut self, entity: Entity) {
        match self.index.get(&entity.id) {
            Some(&slot) => self.entities[slot] = entity,
            None => {
                self.index.insert(entity.id, self.entities.len());
                self.entities.push(entity);
            }
        }
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.index.get(&id).map(|&slot| &self.entities[slot])
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        let slot = *self.index.get(&id)?;
        self.entities.get_mut(slot)
    }

    /// All entities in spawn order (the host draws them in this order).
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    /// First entity spawned with `tag`.
    pub fn find_by_tag(&self, tag: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.tag == tag)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn spawn_and_get() {
        let mut scene = Scene::new();
        let id = EntityId(1);
        scene.spawn(Entity::new(id).with_pos(Vec3::new(100.0, 0.0, 0.0)));
        assert_eq!(scene.get(id).unwrap().pos, Vec3::new(100.0, 0.0, 0.0));
        assert!(scene.get(EntityId(2)).is_none());
    }

    #[test]
    fn keeps_spawn_order() {
        let mut scene = Scene::new();
        for i in [5, 1, 3] {
            scene.spawn(Entity::new(EntityId(i)));
        }
        let order: Vec<u32> = scene.iter().map(|e| e.id.0).collect();
        assert_eq!(order, vec![5, 1, 3]);
    }

    #[test]
    fn respawning_an_id_replaces_it() {
        let mut scene = Scene::new();
        scene.spawn(Entity::new(EntityId(1)).with_tag("earth"));
        scene.spawn(Entity::new(EntityId(2)).with_tag("sun"));
        scene.spawn(Entity::new(EntityId(1)).with_tag("moon"));
        assert_eq!(scene.len(), 2);
        assert_eq!(scene.get(EntityId(1)).unwrap().tag, "moon");
        assert_eq!(scene.iter().next().unwrap().tag, "moon");
    }

    #[test]
    fn find_by_tag_returns_first() {
        let mut scene = Scene::new();
        scene.spawn(Entity::new(EntityId(1)).with_tag("sun"));
        scene.spawn(Entity::new(EntityId(2)).with_tag("star"));
        scene.spawn(Entity::new(EntityId(3)).with_tag("star"));
        assert_eq!(scene.find_by_tag("sun").unwrap().id, EntityId(1));
        assert_eq!(scene.find_by_tag("star").unwrap().id, EntityId(2));
        assert!(scene.find_by_tag("comet").is_none());
    }

    #[test]
    fn get_mut_updates_in_place() {
        let mut scene = Scene::with_capacity(4);
        let id = EntityId(7);
        scene.spawn(Entity::new(EntityId(6)));
        scene.spawn(Entity::new(id));
        scene.get_mut(id).unwrap().rotation.y = 1.5;
        assert_eq!(scene.get(id).unwrap().rotation.y, 1.5);
        assert_eq!(scene.get(EntityId(6)).unwrap().rotation.y, 0.0);
    }
}

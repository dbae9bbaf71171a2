use std::collections::HashMap;
use crate::assets::manifest::AssetManifest;

/// Maps texture names to the slot indices the host binds them to.
/// Slots follow the manifest's sorted key order.
pub struct TextureRegistry {
    slots: HashMap<String, u32>,
}

impl TextureRegistry {
    pub fn new() -> Self {
        Self {
            slots: HashMap::new(),
        }
    }

    /// Build a registry from a parsed AssetManifest.
    pub fn from_manifest(manifest: &AssetManifest) -> Self {
        let slots = manifest
            .textures
            .keys()
            .enumerate()
            .map(|(slot, name)| (name.clone(), slot as u32))
            .collect();
        Self { slots }
    }

    /// Slot for a texture name. None if the host never listed it.
    pub fn slot(&self, name: &str) -> Option<u32> {
        self.slots.get(name).copied()
    }

    /// Slot as an instance-buffer float; `-1.0` for "no texture".
    pub fn slot_or_none(&self, name: Option<&str>) -> f32 {
        name.and_then(|n| self.slot(n)).map_or(-1.0, |s| s as f32)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl Default for TextureRegistry {
    fn default() -> Self {
        Self::new()
    }
}
